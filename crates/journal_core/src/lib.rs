//! Journal core: pure data model, naming and progress accounting.
mod asset;
mod entry;
mod filter;
mod progress;
mod stats;

pub use asset::{
    asset_path, AssetKind, AssetReference, MediaLink, OccurrenceCounter, RESOURCES_DIR,
};
pub use entry::Entry;
pub use filter::{select_entries, ALL_ENTRIES, ENTRY_EXTENSION};
pub use progress::{ProgressSnapshot, ProgressTracker};
pub use stats::{MaterializationResult, RunStats};
