//! The THP container encoder behind a capability trait.
//!
//! The pipeline only ever talks to [`Encoder`], so the subprocess-backed
//! [`ThpConvEncoder`] can be swapped for an in-process implementation without
//! touching the conversion stages.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::command::ToolCommand;

/// Capability to produce a THP container from staged intermediates.
#[async_trait]
pub trait Encoder: Send + Sync {
    /// Short name used in stage reporting.
    fn name(&self) -> &'static str;

    /// Encode the frame sequence matched by `frames_glob` plus the waveform
    /// at `audio` into a THP file at `output`.
    ///
    /// Implementations report spawn and exit failures; whether `output`
    /// actually exists afterwards is checked by the caller, because file
    /// presence is the only reliable success signal THPConv gives.
    async fn encode(
        &self,
        frames_glob: &Path,
        audio: &Path,
        frame_rate: f64,
        output: &Path,
    ) -> thp_core::Result<()>;
}

/// [`Encoder`] implementation that shells out to Nintendo's `THPConv`.
#[derive(Debug, Clone)]
pub struct ThpConvEncoder {
    /// Path to the THPConv binary.
    path: PathBuf,
}

impl ThpConvEncoder {
    /// Create an encoder using the given THPConv path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl Encoder for ThpConvEncoder {
    fn name(&self) -> &'static str {
        "thpconv"
    }

    async fn encode(
        &self,
        frames_glob: &Path,
        audio: &Path,
        frame_rate: f64,
        output: &Path,
    ) -> thp_core::Result<()> {
        tracing::debug!("encode {} -> {}", frames_glob.display(), output.display());

        let mut cmd = ToolCommand::new(self.path.clone());
        cmd.args(encode_args(frames_glob, audio, frame_rate, output));
        // Encoding runtime scales with the frame count.
        cmd.no_timeout();
        cmd.execute().await?;

        Ok(())
    }
}

/// THPConv argument list: `-j <glob> -s <wav> -r <rate> -d <output>`.
fn encode_args(frames_glob: &Path, audio: &Path, frame_rate: f64, output: &Path) -> Vec<String> {
    vec![
        "-j".into(),
        frames_glob.to_string_lossy().into_owned(),
        "-s".into(),
        audio.to_string_lossy().into_owned(),
        "-r".into(),
        frame_rate.to_string(),
        "-d".into(),
        output.to_string_lossy().into_owned(),
    ]
}
