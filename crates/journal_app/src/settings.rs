//! Optional RON settings file for the command line tool.
//!
//! Every key may be omitted; omitted keys keep their built-in defaults.
//!
//! ```ron
//! (
//!     entries_dir: Some("/Users/me/Desktop/AppleJournalEntries/Entries"),
//!     extraction: (date_pattern: "(?i)([a-z]+\\s+\\d{1,2})"),
//!     encoder: (image_quality: 75),
//! )
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use journal_engine::{EncoderSettings, ExtractionSettings};
use journal_logging::journal_info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub entries_dir: Option<PathBuf>,
    pub extraction: ExtractionSettings,
    pub encoder: EncoderSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not read settings file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Loads `path`, or the defaults when no settings file was given.
pub fn load_settings(path: Option<&Path>) -> Result<AppSettings, SettingsError> {
    let Some(path) = path else {
        return Ok(AppSettings::default());
    };
    let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = ron::from_str(&content).map_err(|err| SettingsError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    journal_info!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// `~/Desktop/AppleJournalEntries/Entries`, where the Journal app exports to.
pub fn default_entries_dir() -> PathBuf {
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    home.join("Desktop")
        .join("AppleJournalEntries")
        .join("Entries")
}
