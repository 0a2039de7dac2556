use crate::{AssetReference, MediaLink};

/// One journal entry after extraction.
///
/// Built once per source document and consumed right away by rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entry {
    /// Source file name without its extension.
    pub identifier: String,
    /// Matched date text, the whole header text, or empty when the header is empty.
    pub display_date: String,
    /// Body fragments, each followed by a blank line.
    pub body_text: String,
    /// Assets with a non-empty source, images first, each kind in document order.
    pub media_refs: Vec<AssetReference>,
    /// Destinations for `media_refs`, same order.
    pub media: Vec<MediaLink>,
}

impl Entry {
    /// Heading text for the entry, falling back to `file_name` when no date was found.
    pub fn heading<'a>(&'a self, file_name: &'a str) -> &'a str {
        if self.display_date.is_empty() {
            file_name
        } else {
            &self.display_date
        }
    }
}
