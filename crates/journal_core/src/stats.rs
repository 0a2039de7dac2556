use crate::AssetKind;

/// What happened when materializing one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterializationResult {
    /// Text-only run: only the name was computed.
    Skipped,
    /// The source file does not exist on disk.
    SourceMissing,
    /// The destination already existed; the encoder was not invoked.
    AlreadyPresent,
    Converted,
    /// The encoder failed; the destination is left absent.
    Failed,
}

impl MaterializationResult {
    pub fn attempted(self) -> bool {
        matches!(
            self,
            MaterializationResult::AlreadyPresent
                | MaterializationResult::Converted
                | MaterializationResult::Failed
        )
    }

    pub fn succeeded(self) -> bool {
        matches!(
            self,
            MaterializationResult::AlreadyPresent | MaterializationResult::Converted
        )
    }
}

/// Aggregate counters of one run. Reset for every run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunStats {
    pub images: usize,
    pub videos: usize,
    pub errors: usize,
    pub missing: usize,
    pub media_processed: usize,
    pub media_total: Option<usize>,
}

impl RunStats {
    pub fn new(media_total: Option<usize>) -> Self {
        Self {
            media_total,
            ..Self::default()
        }
    }

    pub fn record(&mut self, kind: AssetKind, result: MaterializationResult) {
        if result.succeeded() {
            match kind {
                AssetKind::Image => self.images += 1,
                AssetKind::Video => self.videos += 1,
            }
        } else if result.attempted() {
            self.errors += 1;
        } else if result == MaterializationResult::SourceMissing {
            self.missing += 1;
        }
    }
}
