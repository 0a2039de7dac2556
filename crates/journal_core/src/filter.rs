/// Filter value that selects every entry.
pub const ALL_ENTRIES: &str = "all";

/// Extension of entry documents.
pub const ENTRY_EXTENSION: &str = ".html";

/// Selects the candidate file names matching `filters`, keeping candidate order.
///
/// A first filter equal to [`ALL_ENTRIES`] keeps everything. Otherwise a filter
/// ending in [`ENTRY_EXTENSION`] must match a file name exactly, and any other
/// filter matches as a substring. A candidate matched by several filters is
/// kept once.
pub fn select_entries<S: AsRef<str>>(candidates: &[String], filters: &[S]) -> Vec<String> {
    if filters
        .first()
        .is_some_and(|first| first.as_ref() == ALL_ENTRIES)
    {
        return candidates.to_vec();
    }

    candidates
        .iter()
        .filter(|candidate| {
            filters
                .iter()
                .any(|filter| matches_filter(candidate, filter.as_ref()))
        })
        .cloned()
        .collect()
}

fn matches_filter(candidate: &str, filter: &str) -> bool {
    if filter.ends_with(ENTRY_EXTENSION) {
        candidate == filter
    } else {
        candidate.contains(filter)
    }
}
