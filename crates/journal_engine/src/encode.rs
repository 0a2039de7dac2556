use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use journal_logging::journal_trace;

use crate::settings::EncoderSettings;

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with {status}")]
    ExitStatus { program: String, status: ExitStatus },
}

/// Converts one source asset into its normalized destination file.
pub trait Encoder: Send + Sync {
    fn encode_image(&self, src: &Path, dst: &Path) -> Result<(), EncodeError>;
    fn encode_video(&self, src: &Path, dst: &Path) -> Result<(), EncodeError>;
}

/// [`Encoder`] that runs ImageMagick and ffmpeg as blocking child processes.
///
/// There is no timeout: a hung encoder blocks the run.
#[derive(Debug, Clone, Default)]
pub struct ProcessEncoder {
    settings: EncoderSettings,
}

impl ProcessEncoder {
    pub fn new(settings: EncoderSettings) -> Self {
        Self { settings }
    }

    /// Arguments for the image program: auto-orient, strip metadata, lossy WebP.
    pub fn image_args(&self, src: &Path, dst: &Path) -> Vec<OsString> {
        vec![
            src.as_os_str().to_owned(),
            "-auto-orient".into(),
            "-strip".into(),
            "-quality".into(),
            self.settings.image_quality.to_string().into(),
            "-define".into(),
            "webp:method=4".into(),
            dst.as_os_str().to_owned(),
        ]
    }

    /// Arguments for the video program: constant-quality VP9 with Opus audio.
    pub fn video_args(&self, src: &Path, dst: &Path) -> Vec<OsString> {
        vec![
            "-i".into(),
            src.as_os_str().to_owned(),
            "-c:v".into(),
            "libvpx-vp9".into(),
            "-crf".into(),
            self.settings.video_crf.to_string().into(),
            "-b:v".into(),
            "0".into(),
            "-row-mt".into(),
            "1".into(),
            "-c:a".into(),
            "libopus".into(),
            "-b:a".into(),
            self.settings.audio_bitrate.clone().into(),
            "-y".into(),
            dst.as_os_str().to_owned(),
        ]
    }
}

fn run_tool(program: &str, args: Vec<OsString>) -> Result<(), EncodeError> {
    journal_trace!("Running {} {:?}", program, args);
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| EncodeError::Spawn {
            program: program.to_string(),
            source,
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(EncodeError::ExitStatus {
            program: program.to_string(),
            status,
        })
    }
}

impl Encoder for ProcessEncoder {
    fn encode_image(&self, src: &Path, dst: &Path) -> Result<(), EncodeError> {
        run_tool(&self.settings.image_program, self.image_args(src, dst))
    }

    fn encode_video(&self, src: &Path, dst: &Path) -> Result<(), EncodeError> {
        run_tool(&self.settings.video_program, self.video_args(src, dst))
    }
}
