//! Stream inspection by shelling out to ffprobe.

pub mod ffprobe;
pub mod types;

pub use self::ffprobe::FfprobeProber;
pub use self::types::{AudioTrack, MediaInfo, VideoTrack};
