//! Per-run staging workspace for conversion intermediates.
//!
//! A [`Workspace`] owns a unique temporary directory holding the resampled
//! audio track and the extracted frame sequence. The directory is removed
//! when the workspace is dropped, on success and failure alike, so a crashed
//! or failed run never leaves intermediates behind and two concurrent runs
//! never share staging paths.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

const AUDIO_FILE: &str = "audio.wav";
const FRAMES_DIR: &str = "frames";
const FRAME_PATTERN: &str = "%05d.jpeg";
const FRAME_GLOB: &str = "*.jpeg";

/// Staging directory for a single conversion run.
///
/// # Example
///
/// ```no_run
/// use thp_av::Workspace;
///
/// # fn example() -> thp_core::Result<()> {
/// let workspace = Workspace::new()?;
/// // ... extract audio to workspace.audio_path(),
/// //     frames to workspace.frame_pattern() ...
/// # Ok(())
/// # }
/// // dropping the workspace removes everything it staged
/// ```
pub struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    /// Create a new workspace with an empty frame directory.
    pub fn new() -> thp_core::Result<Self> {
        let temp_dir = TempDir::new().map_err(|e| thp_core::Error::Tool {
            tool: "workspace".to_string(),
            message: format!("failed to create temp dir: {e}"),
        })?;
        std::fs::create_dir(temp_dir.path().join(FRAMES_DIR))?;

        Ok(Self { temp_dir })
    }

    /// Path to the staging directory itself.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the resampled audio track.
    pub fn audio_path(&self) -> PathBuf {
        self.temp_dir.path().join(AUDIO_FILE)
    }

    /// Directory the frame sequence is extracted into.
    pub fn frames_dir(&self) -> PathBuf {
        self.temp_dir.path().join(FRAMES_DIR)
    }

    /// ffmpeg output pattern for the frame sequence.
    ///
    /// The zero-padded five-digit index keeps the frames ordered when the
    /// encoder expands the glob.
    pub fn frame_pattern(&self) -> PathBuf {
        self.frames_dir().join(FRAME_PATTERN)
    }

    /// Glob matching every extracted frame, as passed to the encoder.
    pub fn frame_glob(&self) -> PathBuf {
        self.frames_dir().join(FRAME_GLOB)
    }

    /// Number of frames extracted so far.
    pub fn frame_count(&self) -> thp_core::Result<usize> {
        Ok(std::fs::read_dir(self.frames_dir())?.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn staging_paths_live_inside_workspace() {
        let ws = Workspace::new().unwrap();
        assert!(ws.audio_path().starts_with(ws.path()));
        assert!(ws.frame_pattern().starts_with(ws.frames_dir()));
        assert_eq!(ws.audio_path().file_name().unwrap(), "audio.wav");
        assert_eq!(ws.frame_pattern().file_name().unwrap(), "%05d.jpeg");
        assert_eq!(ws.frame_glob().file_name().unwrap(), "*.jpeg");
    }

    #[test]
    fn frames_dir_exists_and_starts_empty() {
        let ws = Workspace::new().unwrap();
        assert!(ws.frames_dir().is_dir());
        assert_eq!(ws.frame_count().unwrap(), 0);
    }

    #[test]
    fn frame_count_counts_extracted_frames() {
        let ws = Workspace::new().unwrap();
        for name in ["00001.jpeg", "00002.jpeg", "00003.jpeg"] {
            fs::write(ws.frames_dir().join(name), b"").unwrap();
        }
        assert_eq!(ws.frame_count().unwrap(), 3);
    }

    #[test]
    fn drop_removes_staging_dir() {
        let ws = Workspace::new().unwrap();
        let root = ws.path().to_path_buf();
        fs::write(ws.audio_path(), b"riff").unwrap();
        fs::write(ws.frames_dir().join("00001.jpeg"), b"").unwrap();
        drop(ws);
        assert!(!root.exists());
    }

    #[test]
    fn two_workspaces_never_share_paths() {
        let a = Workspace::new().unwrap();
        let b = Workspace::new().unwrap();
        assert_ne!(a.audio_path(), b.audio_path());
    }
}
