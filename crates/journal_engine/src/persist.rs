use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use journal_core::RESOURCES_DIR;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Folders of one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub folder: PathBuf,
    pub resources: PathBuf,
    /// `false` when the output folder was already there from an earlier run.
    pub created: bool,
}

/// Creates `folder` and, unless `text_only`, its `resources/` child.
pub fn prepare_output_layout(
    folder: &Path,
    text_only: bool,
) -> Result<OutputLayout, PersistError> {
    let created = !folder.exists();
    ensure_output_dir(folder)?;
    let resources = folder.join(RESOURCES_DIR);
    if !text_only {
        ensure_output_dir(&resources)?;
    }
    Ok(OutputLayout {
        folder: folder.to_path_buf(),
        resources,
        created,
    })
}

/// Writes whole files into `dir` through a temp file and rename, so readers
/// never see a half-written document.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // `persist` cannot replace an existing file on every platform.
        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}
