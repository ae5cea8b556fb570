//! Decode the source into a scaled still-image sequence via ffmpeg.

use std::path::Path;

use crate::command::ToolCommand;
use crate::tools::ToolRegistry;

/// Decode the source video into a sequence of JPEG frames.
///
/// `pattern` is an ffmpeg output pattern (e.g. `frames/%05d.jpeg`); the
/// sequential index keeps the frames ordered for the encoder. Every frame is
/// scaled to `width`x`height` and emitted at `frame_rate` with `-q:v quality`
/// (1 = best).
pub async fn extract_frames(
    tools: &ToolRegistry,
    source: &Path,
    pattern: &Path,
    width: u32,
    height: u32,
    frame_rate: f64,
    quality: u32,
) -> thp_core::Result<()> {
    let ffmpeg = tools.require("ffmpeg")?;

    tracing::debug!(
        "extract frames from {} to {} at {width}x{height}, {frame_rate} fps",
        source.display(),
        pattern.display()
    );

    let mut cmd = ToolCommand::new(ffmpeg.path.clone());
    cmd.args(["-y", "-i"]);
    cmd.arg(source.to_string_lossy().as_ref());
    cmd.args(["-q:v", &quality.to_string()]);
    cmd.args(["-r", &frame_rate.to_string()]);
    cmd.args(["-vf", &format!("scale={width}:{height}")]);
    cmd.args(["-movflags", "+faststart"]);
    cmd.arg(pattern.to_string_lossy().as_ref());
    // Runtime scales with source length.
    cmd.no_timeout();
    cmd.execute().await?;

    Ok(())
}
