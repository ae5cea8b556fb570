//! Extract and resample the audio track via ffmpeg.

use std::path::Path;

use crate::command::ToolCommand;
use crate::tools::ToolRegistry;

/// Extract the source's audio into a standalone resampled WAV file.
///
/// The THP encoder consumes the audio as a separate waveform file; 32 kHz is
/// the sample rate that plays back consistently in-game, so callers normally
/// pass `32_000`.
pub async fn extract_audio(
    tools: &ToolRegistry,
    source: &Path,
    dest: &Path,
    sample_rate: u32,
) -> thp_core::Result<()> {
    let ffmpeg = tools.require("ffmpeg")?;

    tracing::debug!(
        "extract audio from {} to {} at {sample_rate} Hz",
        source.display(),
        dest.display()
    );

    let mut cmd = ToolCommand::new(ffmpeg.path.clone());
    cmd.args(["-y", "-i"]);
    cmd.arg(source.to_string_lossy().as_ref());
    cmd.args(["-f", "wav"]);
    cmd.args(["-ar", &sample_rate.to_string()]);
    cmd.args(["-movflags", "+faststart"]);
    cmd.arg(dest.to_string_lossy().as_ref());
    // Runtime scales with source length.
    cmd.no_timeout();
    cmd.execute().await?;

    Ok(())
}
