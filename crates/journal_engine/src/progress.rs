use journal_core::ProgressSnapshot;

/// Receives a snapshot each time an asset starts materializing.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, snapshot: &ProgressSnapshot);
}

/// Discards all progress, for non-interactive output and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgressSink;

impl ProgressSink for NoopProgressSink {
    fn emit(&self, _snapshot: &ProgressSnapshot) {}
}
