//! The video to THP conversion pipeline.
//!
//! A THP file is assembled from a folder of JPEG frames and a WAV file, so
//! the pipeline stages the two intermediates and hands them to the encoder:
//!
//! 1. Probe the source and reject it unless it carries both a video and an
//!    audio stream.
//! 2. Remove any stale output from an earlier run, then create a fresh
//!    per-run staging workspace.
//! 3. Extract the audio to a 32 kHz WAV.
//! 4. Fit the source resolution into the THP dimension bounds.
//! 5. Extract the frames as JPEGs scaled to the fitted resolution.
//! 6. Encode and verify the output exists.
//!
//! Every stage is a hard gate: the first failure aborts the run with a
//! [`thp_core::Error`] naming the stage. The staging workspace is removed
//! on every exit path.

use std::path::{Path, PathBuf};

use thp_av::probe::FfprobeProber;
use thp_av::{actions, Encoder, ThpConvEncoder, ToolRegistry, Workspace};
use thp_core::config::ConversionConfig;
use thp_core::{Error, Result};

use crate::dimensions::{self, Resolution};

/// Summary of a completed conversion.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Path of the written THP file.
    pub output: PathBuf,
    /// Resolution the frames were scaled to.
    pub resolution: Resolution,
    /// Number of frames handed to the encoder.
    pub frame_count: usize,
}

/// Runs the conversion pipeline.
pub struct Converter {
    conversion: ConversionConfig,
    tools: ToolRegistry,
    encoder: Option<Box<dyn Encoder>>,
}

impl Converter {
    /// Create a converter that encodes with THPConv from the tool registry.
    pub fn new(conversion: ConversionConfig, tools: ToolRegistry) -> Self {
        Self {
            conversion,
            tools,
            encoder: None,
        }
    }

    /// Replace the encoder backend.
    pub fn with_encoder(mut self, encoder: Box<dyn Encoder>) -> Self {
        self.encoder = Some(encoder);
        self
    }

    /// Convert `source` into a THP file at `output`.
    ///
    /// Stages run strictly in order and each subprocess is waited on to
    /// completion before the next stage starts. The returned error names
    /// the failing stage; intermediates are cleaned up either way.
    pub async fn convert(&self, source: &Path, output: &Path) -> Result<ConversionReport> {
        // A leftover output from a previous run must never be mistaken for
        // this run's product, so it goes before anything else happens.
        if output.exists() {
            std::fs::remove_file(output)?;
        }

        // Probe. Rejection happens before any intermediate is staged.
        tracing::info!("Probing {}", source.display());
        let ffprobe = self.tools.require("ffprobe")?;
        let info = FfprobeProber::new(ffprobe.path.clone())
            .probe(source)
            .await?;
        let video = info
            .primary_video()
            .ok_or_else(|| Error::Validation("input has no video stream".into()))?;
        if info.primary_audio().is_none() {
            return Err(Error::Validation("input has no audio stream".into()));
        }
        if video.width == 0 || video.height == 0 {
            return Err(Error::Probe(format!(
                "video stream reports no resolution ({}x{})",
                video.width, video.height
            )));
        }
        let (src_width, src_height) = (video.width, video.height);

        // Fresh staging area per run; Drop removes it on all exit paths.
        let workspace = Workspace::new()?;

        // THP needs the audio as a separate WAV file.
        tracing::info!("Extracting audio...");
        let audio_path = workspace.audio_path();
        actions::extract_audio(
            &self.tools,
            source,
            &audio_path,
            self.conversion.audio_sample_rate,
        )
        .await?;
        if !audio_path.exists() {
            return Err(Error::pipeline(
                "extract-audio",
                format!("{} was not found", audio_path.display()),
            ));
        }
        tracing::info!("Done");

        let resolution = dimensions::fit(src_width, src_height);
        tracing::info!("New dimensions: {resolution}");

        // THP needs a folder of JPEGs, one per output frame.
        tracing::info!("Extracting frames...");
        actions::extract_frames(
            &self.tools,
            source,
            &workspace.frame_pattern(),
            resolution.width,
            resolution.height,
            self.conversion.frame_rate,
            self.conversion.jpeg_quality,
        )
        .await?;
        let frame_count = workspace.frame_count()?;
        tracing::info!("Extracted {frame_count} frames");
        tracing::info!("Done");

        tracing::info!("Generating THP...");
        let default_encoder;
        let encoder: &dyn Encoder = match &self.encoder {
            Some(encoder) => encoder.as_ref(),
            None => {
                let thpconv = self.tools.require("thpconv")?;
                default_encoder = ThpConvEncoder::new(thpconv.path.clone());
                &default_encoder
            }
        };
        encoder
            .encode(
                &workspace.frame_glob(),
                &audio_path,
                self.conversion.frame_rate,
                output,
            )
            .await?;
        // The encoder's only reliable success signal is the file showing up.
        if !output.exists() {
            return Err(Error::pipeline(
                "encode",
                format!("{} was not found", output.display()),
            ));
        }
        tracing::info!("Done");

        Ok(ConversionReport {
            output: output.to_path_buf(),
            resolution,
            frame_count,
        })
    }
}
