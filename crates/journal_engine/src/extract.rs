use std::path::Path;

use journal_core::{
    AssetKind, AssetReference, Entry, MediaLink, OccurrenceCounter, ProgressTracker, RunStats,
};
use journal_logging::journal_trace;

use crate::date::DatePattern;
use crate::document::DocumentView;
use crate::materialize::MediaMaterializer;
use crate::progress::ProgressSink;
use crate::settings::ExtractionSettings;

/// Mutable run state threaded through extraction of every entry.
pub struct RunContext<'a> {
    pub materializer: &'a MediaMaterializer<'a>,
    /// Folder that `resources/...` links are relative to.
    pub output_folder: &'a Path,
    pub stats: &'a mut RunStats,
    pub progress: &'a mut ProgressTracker,
    pub sink: &'a dyn ProgressSink,
}

/// Turns one entry document into an [`Entry`], materializing its media on the way.
#[derive(Debug, Clone)]
pub struct EntryExtractor {
    settings: ExtractionSettings,
    date_pattern: DatePattern,
}

impl EntryExtractor {
    pub fn new(settings: ExtractionSettings) -> Result<Self, regex::Error> {
        let date_pattern = DatePattern::new(&settings.date_pattern)?;
        Ok(Self {
            settings,
            date_pattern,
        })
    }

    /// Number of media nodes in the document, including ones without a source.
    pub fn count_media(&self, doc: &dyn DocumentView) -> usize {
        doc.count(&self.settings.image_selector) + doc.count(&self.settings.video_selector)
    }

    pub fn display_date(&self, doc: &dyn DocumentView) -> String {
        let header = doc.select_text(&self.settings.header_selector).concat();
        self.date_pattern.display_date(&header)
    }

    /// Trimmed body fragments, each followed by a blank line.
    pub fn body_text(&self, doc: &dyn DocumentView) -> String {
        doc.select_text(&self.settings.body_selector)
            .iter()
            .map(|fragment| format!("{}\n\n", fragment.trim()))
            .collect()
    }

    pub fn extract(
        &self,
        doc: &dyn DocumentView,
        identifier: &str,
        ctx: &mut RunContext<'_>,
    ) -> Entry {
        let mut entry = Entry {
            identifier: identifier.to_string(),
            display_date: self.display_date(doc),
            body_text: self.body_text(doc),
            ..Entry::default()
        };

        let mut counter = OccurrenceCounter::new();
        let kinds = [
            (AssetKind::Image, &self.settings.image_selector),
            (AssetKind::Video, &self.settings.video_selector),
        ];
        for (kind, selector) in kinds {
            for source in doc.select_attr(selector, &self.settings.source_attribute) {
                // Sourceless nodes take no index so destination names stay contiguous.
                if source.is_empty() {
                    journal_trace!("Skipping {} node without source in {}", kind, identifier);
                    continue;
                }
                let reference = AssetReference {
                    kind,
                    source,
                    occurrence: counter.next(kind),
                };
                let link = MediaLink::for_reference(identifier, &reference);

                let snapshot = ctx.progress.update(1);
                ctx.sink.emit(&snapshot);

                let destination = ctx.output_folder.join(&link.relative_path);
                let result = ctx
                    .materializer
                    .materialize(kind, &reference.source, &destination);
                ctx.stats.record(kind, result);

                entry.media_refs.push(reference);
                entry.media.push(link);
            }
        }

        entry
    }
}
