use std::path::PathBuf;

use clap::Parser;
use journal_engine::{RunConfig, DEFAULT_OUTPUT_NAME};
use log::LevelFilter;

use crate::settings::{default_entries_dir, AppSettings};

#[derive(Parser, Debug)]
#[command(
    name = "journal-export",
    version,
    about = "Export journal entries to one Markdown document plus converted media",
    args_override_self = true
)]
pub struct Cli {
    /// Entries to export: exact `.html` file names, name fragments, or `all`.
    /// Names starting with `-` go after `--`
    pub filters: Vec<String>,

    /// Output name; writes `NAME/NAME.md` (a trailing `.md` is ignored)
    #[arg(
        short,
        long,
        value_name = "NAME",
        default_value = DEFAULT_OUTPUT_NAME,
        allow_hyphen_values = true
    )]
    pub output: String,

    /// Only write the Markdown document; skip media conversion
    #[arg(short, long)]
    pub text_only: bool,

    /// Folder with the exported entry documents
    #[arg(long, value_name = "DIR")]
    pub entries: Option<PathBuf>,

    /// RON settings file (selectors, date pattern, encoder programs)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug details
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write the log to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Entries folder: `--entries`, then the settings file, then the default export location.
    pub fn entries_dir(&self, settings: &AppSettings) -> PathBuf {
        self.entries
            .clone()
            .or_else(|| settings.entries_dir.clone())
            .unwrap_or_else(default_entries_dir)
    }

    pub fn run_config(&self, settings: &AppSettings) -> RunConfig {
        let mut config = RunConfig::new(self.entries_dir(settings), &self.output);
        config.filters = self.filters.clone();
        config.text_only = self.text_only;
        config.extraction = settings.extraction.clone();
        config
    }
}
