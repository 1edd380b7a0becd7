use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

use super::{TranscodeError, Transcoder};

pub const VIDEO_CODEC: &str = "libx264";
pub const CONSTANT_RATE_FACTOR: u8 = 28;

#[derive(Debug, Error)]
#[error("invalid ffmpeg path {0:?}: contains shell metacharacters")]
pub struct InvalidFfmpegPath(pub String);

pub struct FfmpegTranscoder {
    ffmpeg_path: String,
}

impl FfmpegTranscoder {
    pub fn new(ffmpeg_path: impl Into<String>) -> Result<Self, InvalidFfmpegPath> {
        let ffmpeg_path = ffmpeg_path.into();
        let dangerous_chars = [';', '|', '&', '$', '`', '(', ')', '<', '>', '\n', '\r'];
        if ffmpeg_path.chars().any(|c| dangerous_chars.contains(&c)) {
            return Err(InvalidFfmpegPath(ffmpeg_path));
        }

        Ok(Self { ffmpeg_path })
    }

    fn args(input: &Path, output: &Path) -> Vec<String> {
        vec![
            "-y".to_string(),
            "-i".to_string(),
            input.to_string_lossy().to_string(),
            "-c:v".to_string(),
            VIDEO_CODEC.to_string(),
            "-crf".to_string(),
            CONSTANT_RATE_FACTOR.to_string(),
            output.to_string_lossy().to_string(),
        ]
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        let args = Self::args(input, output);
        debug!(ffmpeg = %self.ffmpeg_path, ?args, "🎥 Spawning transcoder");

        let result = Command::new(&self.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            // ffmpeg prints its banner first; the failure reason is at the end.
            let tail: Vec<&str> = stderr.lines().rev().take(5).collect();
            return Err(TranscodeError::Exited {
                status: result.status.to_string(),
                stderr: tail.into_iter().rev().collect::<Vec<_>>().join("\n"),
            });
        }

        if !tokio::fs::try_exists(output).await.unwrap_or(false) {
            return Err(TranscodeError::MissingOutput(output.display().to_string()));
        }

        info!(output = %output.display(), "✅ Transcode finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    #[test]
    fn test_rejects_shell_metacharacters() {
        assert!(FfmpegTranscoder::new("ffmpeg; rm -rf /").is_err());
        assert!(FfmpegTranscoder::new("/usr/bin/ffmpeg").is_ok());
    }

    #[test]
    fn test_args_use_fixed_profile() {
        let args = FfmpegTranscoder::args(&PathBuf::from("/tmp/in"), &PathBuf::from("/tmp/out.mp4"));
        assert_eq!(
            args,
            vec!["-y", "-i", "/tmp/in", "-c:v", "libx264", "-crf", "28", "/tmp/out.mp4"]
        );
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let transcoder = FfmpegTranscoder::new("/nonexistent/ffmpeg-binary").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let err = transcoder
            .transcode(&dir.path().join("in"), &dir.path().join("out.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(err, TranscodeError::Spawn(_)));
    }
}
