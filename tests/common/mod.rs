//! Shared helpers for pipeline and CLI tests.
//!
//! The external toolchain is faked with small shell scripts wired in through
//! the config's explicit tool paths, so the tests exercise the real stage
//! ordering, artifact checks, and cleanup without ffmpeg installed.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// ffprobe JSON for a 1920x1080 source with both streams.
pub const PROBE_JSON_FULL: &str = r#"{
  "format": {"format_name": "mov,mp4,m4a", "duration": "2.0"},
  "streams": [
    {"codec_type": "video", "codec_name": "h264", "width": 1920, "height": 1080,
     "r_frame_rate": "30000/1001", "disposition": {"default": 1}},
    {"codec_type": "audio", "codec_name": "aac", "channels": 2, "sample_rate": "48000",
     "disposition": {"default": 1}}
  ]
}"#;

/// ffprobe JSON for a source with video but no audio stream.
pub const PROBE_JSON_NO_AUDIO: &str = r#"{
  "format": {"format_name": "mov,mp4,m4a", "duration": "2.0"},
  "streams": [
    {"codec_type": "video", "codec_name": "h264", "width": 1920, "height": 1080,
     "r_frame_rate": "30000/1001", "disposition": {"default": 1}}
  ]
}"#;

/// Write an executable shell script into `dir` and return its path.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

/// Fake ffprobe that prints the given JSON for any invocation.
#[cfg(unix)]
pub fn fake_ffprobe(dir: &Path, json: &str) -> PathBuf {
    let body = format!("#!/bin/sh\ncat <<'PROBE_EOF'\n{json}\nPROBE_EOF\n");
    write_script(dir, "ffprobe", &body)
}

/// Fake ffmpeg that appends its invocation to `log` and fabricates the
/// requested output: three numbered JPEGs for a frame-pattern run, an empty
/// file otherwise.
#[cfg(unix)]
pub fn fake_ffmpeg(dir: &Path, log: &Path) -> PathBuf {
    let body = format!(
        r#"#!/bin/sh
echo "$@" >> {log}
for last; do :; done
case "$last" in
  *%05d*)
    framedir=$(dirname "$last")
    for i in 00001 00002 00003; do : > "$framedir/$i.jpeg"; done
    ;;
  *)
    : > "$last"
    ;;
esac
"#,
        log = log.display()
    );
    write_script(dir, "ffmpeg", &body)
}

/// Fake THPConv that records its arguments (one per line) to `log` and, if
/// `write_output` is set, creates the file named by `-d`.
#[cfg(unix)]
pub fn fake_thpconv(dir: &Path, log: &Path, write_output: bool) -> PathBuf {
    let touch = if write_output {
        r#"if [ -n "$out" ]; then : > "$out"; fi"#
    } else {
        ":"
    };
    let body = format!(
        r#"#!/bin/sh
printf '%s\n' "$@" > {log}
out=""
while [ $# -gt 0 ]; do
  if [ "$1" = "-d" ]; then out="$2"; fi
  shift
done
{touch}
"#,
        log = log.display()
    );
    write_script(dir, "thpconv", &body)
}

/// Read the audio path the fake THPConv received via `-s`.
#[cfg(unix)]
pub fn recorded_audio_path(log: &Path) -> PathBuf {
    let contents = fs::read_to_string(log).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    let pos = lines
        .iter()
        .position(|l| *l == "-s")
        .expect("thpconv log has no -s argument");
    PathBuf::from(lines[pos + 1])
}
