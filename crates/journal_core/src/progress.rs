/// Read-only view of run progress, recomputed on every media event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressSnapshot {
    /// 1-based index of the entry being processed.
    pub entry_index: usize,
    pub total_entries: usize,
    /// File name of the entry being processed.
    pub entry_name: String,
    pub media_processed: usize,
    /// Known only when a pre-scan ran (media mode).
    pub media_total: Option<usize>,
}

impl ProgressSnapshot {
    /// Rounded media percentage; `None` when the total is unknown, 0 when it is zero.
    pub fn percentage(&self) -> Option<u32> {
        let total = self.media_total?;
        if total == 0 {
            return Some(0);
        }
        let ratio = self.media_processed as f64 / total as f64;
        Some((ratio * 100.0).round() as u32)
    }
}

/// Running counters for one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    snapshot: ProgressSnapshot,
}

impl ProgressTracker {
    pub fn new(total_entries: usize, media_total: Option<usize>) -> Self {
        Self {
            snapshot: ProgressSnapshot {
                total_entries,
                media_total,
                ..ProgressSnapshot::default()
            },
        }
    }

    /// Marks the start of entry `index` (0-based) named `entry_name`.
    pub fn begin_entry(&mut self, index: usize, entry_name: &str) {
        self.snapshot.entry_index = index + 1;
        self.snapshot.entry_name = entry_name.to_string();
    }

    pub fn update(&mut self, media_processed_delta: usize) -> ProgressSnapshot {
        self.snapshot.media_processed += media_processed_delta;
        self.snapshot.clone()
    }

    pub fn snapshot(&self) -> &ProgressSnapshot {
        &self.snapshot
    }

    pub fn media_processed(&self) -> usize {
        self.snapshot.media_processed
    }
}
