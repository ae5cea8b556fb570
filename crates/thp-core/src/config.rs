//! Application configuration types.
//!
//! The top-level [`Config`] struct is deserialized from JSON and carries the
//! sub-configs for external tools and conversion parameters. Every section
//! defaults sensibly so a completely empty `{}` file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::Error;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tools: ToolsConfig,
    pub conversion: ConversionConfig,
}

impl Config {
    /// Deserialize a `Config` from a JSON string.
    ///
    /// This is intentionally string-based so the caller can read the file
    /// however it sees fit.
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| Error::Validation(format!("config parse error: {e}")))
    }

    /// Load configuration from a file path, falling back to defaults if the
    /// path is `None` or the file does not exist.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config file at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read config file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Return a list of validation warnings (non-fatal issues).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.conversion.frame_rate > 29.97 {
            warnings.push(format!(
                "conversion.frame_rate {} exceeds 29.97; higher rates risk lagging the game",
                self.conversion.frame_rate
            ));
        }

        if self.conversion.audio_sample_rate != 32_000 {
            warnings.push(format!(
                "conversion.audio_sample_rate {} Hz; 32000 Hz is the only rate that plays back consistently",
                self.conversion.audio_sample_rate
            ));
        }

        // ffmpeg's -q:v accepts 1 (best) through 31 (worst).
        if !(1..=31).contains(&self.conversion.jpeg_quality) {
            warnings.push(format!(
                "conversion.jpeg_quality {} is outside ffmpeg's 1-31 range",
                self.conversion.jpeg_quality
            ));
        }

        if self.conversion.default_output.is_empty() {
            warnings.push("conversion.default_output is empty".into());
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Optional explicit paths to the external tools.
///
/// Tools without an explicit path are looked up on `PATH`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub ffmpeg_path: Option<PathBuf>,
    pub ffprobe_path: Option<PathBuf>,
    pub thpconv_path: Option<PathBuf>,
}

/// Conversion defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Output frame rate. 29.97 is the best-supported rate for THP playback.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
    /// Sample rate the audio track is resampled to.
    #[serde(default = "default_audio_sample_rate")]
    pub audio_sample_rate: u32,
    /// ffmpeg `-q:v` value for the extracted frames (1 = best).
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u32,
    /// Output file name used when the caller does not supply one.
    #[serde(default = "default_output")]
    pub default_output: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            audio_sample_rate: default_audio_sample_rate(),
            jpeg_quality: default_jpeg_quality(),
            default_output: default_output(),
        }
    }
}

fn default_frame_rate() -> f64 {
    29.97
}
fn default_audio_sample_rate() -> u32 {
    32_000
}
fn default_jpeg_quality() -> u32 {
    1
}
fn default_output() -> String {
    "DOKAPON.THP".into()
}
