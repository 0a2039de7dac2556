use indicatif::{ProgressBar, ProgressStyle};
use journal_core::ProgressSnapshot;
use journal_engine::ProgressSink;
use log::LevelFilter;

/// Single overwritable status line on stderr; hidden when stderr is not a terminal.
pub struct StatusLine {
    bar: ProgressBar,
}

impl StatusLine {
    /// Hidden at debug verbosity, where per-asset log records would interleave with redraws.
    pub fn for_level(level: LevelFilter) -> Self {
        let bar = if level >= LevelFilter::Debug {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        if let Ok(style) = ProgressStyle::with_template("{msg}") {
            bar.set_style(style);
        }
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for StatusLine {
    fn emit(&self, snapshot: &ProgressSnapshot) {
        self.bar.set_message(status_message(snapshot));
    }
}

pub fn status_message(snapshot: &ProgressSnapshot) -> String {
    match (snapshot.media_total, snapshot.percentage()) {
        (Some(total), Some(percent)) => format!(
            "⏳ Procesando Entry {}/{} | Media: {}/{} ({}%)",
            snapshot.entry_index, snapshot.total_entries, snapshot.media_processed, total, percent
        ),
        _ => {
            let short: String = snapshot.entry_name.chars().take(15).collect();
            format!(
                "⏳ Leyendo Entry {}/{}: {}...",
                snapshot.entry_index, snapshot.total_entries, short
            )
        }
    }
}
