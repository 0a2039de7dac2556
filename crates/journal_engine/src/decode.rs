use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub encoding_label: String,
    /// Malformed sequences were replaced with U+FFFD.
    pub lossy: bool,
}

/// Decode an entry file into UTF-8 using: BOM -> strict UTF-8 -> chardetng fallback.
///
/// Never fails: malformed input decodes with replacement characters and sets `lossy`.
pub fn decode_html(bytes: &[u8]) -> DecodedHtml {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    // Exported entries are UTF-8 in practice; skip detection when they validate.
    if let Ok(text) = std::str::from_utf8(bytes) {
        return DecodedHtml {
            html: text.to_string(),
            encoding_label: UTF_8.name().to_string(),
            lossy: false,
        };
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> DecodedHtml {
    // `decode` sniffs and strips the BOM itself.
    let (text, used, had_errors) = enc.decode(bytes);
    DecodedHtml {
        html: text.into_owned(),
        encoding_label: used.name().to_string(),
        lossy: had_errors,
    }
}
