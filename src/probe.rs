//! Thin wrappers over the thp-av probing and tool checks.

pub use thp_av::probe::{FfprobeProber, MediaInfo};
pub use thp_av::{ToolInfo, ToolRegistry};

use std::path::Path;

/// Probe a media file with ffprobe from the given registry.
pub async fn probe_file(path: &Path, tools: &ToolRegistry) -> thp_core::Result<MediaInfo> {
    let ffprobe = tools.require("ffprobe")?;
    FfprobeProber::new(ffprobe.path.clone()).probe(path).await
}

/// Availability information for every known external tool.
pub fn check_tools(tools: &ToolRegistry) -> Vec<ToolInfo> {
    tools.check_all()
}
