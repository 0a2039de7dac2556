use journal_logging::journal_debug;
use scraper::{Html, Selector};

/// Read-only query surface over a parsed entry document.
///
/// Selectors use CSS syntax. An invalid selector behaves like one that
/// matches nothing.
pub trait DocumentView {
    /// Text content of every matching element, in document order, untrimmed.
    fn select_text(&self, selector: &str) -> Vec<String>;

    /// Value of `attr` for every matching element, in document order.
    /// Elements without the attribute yield an empty string.
    fn select_attr(&self, selector: &str, attr: &str) -> Vec<String>;

    /// Number of elements matching `selector`.
    fn count(&self, selector: &str) -> usize;
}

/// [`DocumentView`] backed by `scraper`.
pub struct ScraperDocument {
    html: Html,
}

impl ScraperDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(sel) => Some(sel),
        Err(err) => {
            journal_debug!("Ignoring invalid selector {:?}: {:?}", selector, err);
            None
        }
    }
}

impl DocumentView for ScraperDocument {
    fn select_text(&self, selector: &str) -> Vec<String> {
        let Some(sel) = parse_selector(selector) else {
            return Vec::new();
        };
        self.html
            .select(&sel)
            .map(|node| node.text().collect::<String>())
            .collect()
    }

    fn select_attr(&self, selector: &str, attr: &str) -> Vec<String> {
        let Some(sel) = parse_selector(selector) else {
            return Vec::new();
        };
        self.html
            .select(&sel)
            .map(|node| node.value().attr(attr).unwrap_or_default().to_string())
            .collect()
    }

    fn count(&self, selector: &str) -> usize {
        parse_selector(selector)
            .map(|sel| self.html.select(&sel).count())
            .unwrap_or(0)
    }
}
