use std::fmt;

/// Folder, relative to the output folder, that holds converted media.
pub const RESOURCES_DIR: &str = "resources";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Image,
    Video,
}

impl AssetKind {
    /// File name prefix of a converted asset (`foto3.webp`, `video1.webm`).
    pub fn prefix(self) -> &'static str {
        match self {
            AssetKind::Image => "foto",
            AssetKind::Video => "video",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            AssetKind::Image => "webp",
            AssetKind::Video => "webm",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Image => write!(f, "image"),
            AssetKind::Video => write!(f, "video"),
        }
    }
}

/// One embedded asset as found in an entry document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReference {
    pub kind: AssetKind,
    /// Raw `src` value, possibly percent-encoded, relative to the entries folder.
    pub source: String,
    /// 1-based position among the assets of the same kind in the entry.
    pub occurrence: u32,
}

/// Resolved destination of an asset, relative to the output folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaLink {
    pub kind: AssetKind,
    pub relative_path: String,
}

impl MediaLink {
    pub fn for_reference(identifier: &str, reference: &AssetReference) -> Self {
        Self {
            kind: reference.kind,
            relative_path: asset_path(identifier, reference.kind, reference.occurrence),
        }
    }
}

/// Deterministic destination path: `resources/{identifier}/{prefix}{occurrence}.{ext}`.
///
/// Pure function of its arguments; it never looks at the filesystem. Links are
/// always written with `/` separators regardless of platform.
pub fn asset_path(identifier: &str, kind: AssetKind, occurrence: u32) -> String {
    format!(
        "{RESOURCES_DIR}/{identifier}/{prefix}{occurrence}.{ext}",
        prefix = kind.prefix(),
        ext = kind.extension()
    )
}

/// Per-entry occurrence counters, one sequence per asset kind.
#[derive(Debug, Clone, Default)]
pub struct OccurrenceCounter {
    images: u32,
    videos: u32,
}

impl OccurrenceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next 1-based index for `kind`.
    pub fn next(&mut self, kind: AssetKind) -> u32 {
        let slot = match kind {
            AssetKind::Image => &mut self.images,
            AssetKind::Video => &mut self.videos,
        };
        *slot += 1;
        *slot
    }

    pub fn issued(&self, kind: AssetKind) -> u32 {
        match kind {
            AssetKind::Image => self.images,
            AssetKind::Video => self.videos,
        }
    }
}
