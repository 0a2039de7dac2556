use std::sync::LazyLock;

use regex::Regex;

/// "12 de marzo", "3 de Julio", "1 de diciembre".
pub const DEFAULT_DATE_PATTERN: &str = r"(?i)(\d{1,2}\s+de\s+[a-záéíóúñ]+)";

static DEFAULT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_DATE_PATTERN).expect("default date pattern compiles"));

/// Locale policy for pulling a display date out of an entry header.
#[derive(Debug, Clone)]
pub struct DatePattern {
    regex: Regex,
}

impl DatePattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// First match in the trimmed header, or the whole trimmed header when nothing matches.
    pub fn display_date(&self, header: &str) -> String {
        let header = header.trim();
        match self.regex.find(header) {
            Some(found) => found.as_str().to_string(),
            None => header.to_string(),
        }
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self {
            regex: DEFAULT_RE.clone(),
        }
    }
}
