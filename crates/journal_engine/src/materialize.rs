use std::path::{Path, PathBuf};

use journal_core::{AssetKind, MaterializationResult};
use journal_logging::{journal_debug, journal_warn};
use url::Url;

use crate::encode::Encoder;

/// Decides whether an asset needs converting and runs the encoder when it does.
///
/// Never fails: every outcome is reported as a [`MaterializationResult`].
pub struct MediaMaterializer<'a> {
    entries_root: PathBuf,
    encoder: &'a dyn Encoder,
    text_only: bool,
}

impl<'a> MediaMaterializer<'a> {
    pub fn new(entries_root: &Path, encoder: &'a dyn Encoder, text_only: bool) -> Self {
        let entries_root =
            std::path::absolute(entries_root).unwrap_or_else(|_| entries_root.to_path_buf());
        Self {
            entries_root,
            encoder,
            text_only,
        }
    }

    pub fn text_only(&self) -> bool {
        self.text_only
    }

    pub fn materialize(
        &self,
        kind: AssetKind,
        source_locator: &str,
        output_path: &Path,
    ) -> MaterializationResult {
        if self.text_only {
            return MaterializationResult::Skipped;
        }

        let Some(source) = resolve_source(&self.entries_root, source_locator) else {
            journal_debug!("Unresolvable {} source {:?}", kind, source_locator);
            return MaterializationResult::SourceMissing;
        };
        if !source.exists() {
            journal_debug!("Missing {} source {:?}", kind, source);
            return MaterializationResult::SourceMissing;
        }

        if output_path.exists() {
            journal_debug!("Keeping existing {:?}", output_path);
            return MaterializationResult::AlreadyPresent;
        }

        let encoded = match kind {
            AssetKind::Image => self.encoder.encode_image(&source, output_path),
            AssetKind::Video => self.encoder.encode_video(&source, output_path),
        };
        match encoded {
            Ok(()) => MaterializationResult::Converted,
            Err(err) => {
                journal_warn!("Could not convert {:?}: {}", source, err);
                MaterializationResult::Failed
            }
        }
    }
}

/// Resolves a relative, percent-encoded locator against the entries folder.
///
/// `entries_root` must be absolute. Returns `None` for locators that do not
/// name a local file (for example `https://` links).
pub fn resolve_source(entries_root: &Path, locator: &str) -> Option<PathBuf> {
    let base = Url::from_directory_path(entries_root).ok()?;
    // A literal `#` or `?` belongs to the file name, not to a fragment or query.
    let escaped = locator.replace('#', "%23").replace('?', "%3F");
    let url = base.join(&escaped).ok()?;
    if url.scheme() != "file" {
        return None;
    }
    url.to_file_path().ok()
}
