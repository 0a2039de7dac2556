use journal_core::{AssetKind, Entry, MediaLink};

/// Markdown block for one entry: heading, body, then media lines.
///
/// `file_name` is the heading when the entry has no display date.
pub fn render_entry(entry: &Entry, file_name: &str) -> String {
    let mut block = format!(
        "### {heading}\n\n{body}\n",
        heading = entry.heading(file_name),
        body = entry.body_text
    );
    for link in &entry.media {
        block.push_str(&media_markup(link));
    }
    block
}

pub fn media_markup(link: &MediaLink) -> String {
    match link.kind {
        AssetKind::Image => format!("![Imagen]({})\n\n", link.relative_path),
        AssetKind::Video => format!("> 🎥 **Video:** [Ver video]({})\n\n", link.relative_path),
    }
}
