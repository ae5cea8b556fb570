//! Core types for media probe results.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Media file information extracted by probing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaInfo {
    /// Path to the probed file.
    pub file_path: PathBuf,
    /// Total duration (if determinable).
    pub duration: Option<Duration>,
    /// Video tracks found in the file.
    pub video_tracks: Vec<VideoTrack>,
    /// Audio tracks found in the file.
    pub audio_tracks: Vec<AudioTrack>,
}

impl MediaInfo {
    /// Returns the primary video track.
    ///
    /// Prefers the first track marked as default; falls back to the first track.
    pub fn primary_video(&self) -> Option<&VideoTrack> {
        self.video_tracks
            .iter()
            .find(|t| t.default)
            .or_else(|| self.video_tracks.first())
    }

    /// Returns the primary audio track.
    ///
    /// Prefers the first track marked as default; falls back to the first track.
    pub fn primary_audio(&self) -> Option<&AudioTrack> {
        self.audio_tracks
            .iter()
            .find(|t| t.default)
            .or_else(|| self.audio_tracks.first())
    }
}

/// A video track within a media file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoTrack {
    /// Codec name as reported by the prober (e.g. "h264").
    pub codec: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Frame rate in frames per second.
    pub frame_rate: Option<f64>,
    /// Whether this is the default track.
    pub default: bool,
}

/// An audio track within a media file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioTrack {
    /// Codec name as reported by the prober (e.g. "aac").
    pub codec: String,
    /// Number of channels.
    pub channels: u32,
    /// Sample rate in Hz.
    pub sample_rate: Option<u32>,
    /// Whether this is the default track.
    pub default: bool,
}
