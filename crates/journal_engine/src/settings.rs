use serde::{Deserialize, Serialize};

use crate::date::DEFAULT_DATE_PATTERN;

/// Where entry content lives in an exported document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub header_selector: String,
    pub body_selector: String,
    pub image_selector: String,
    pub video_selector: String,
    pub source_attribute: String,
    pub date_pattern: String,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            header_selector: ".pageHeader".to_string(),
            body_selector: "p.p2 span.s2".to_string(),
            image_selector: ".asset_image".to_string(),
            video_selector: "video source".to_string(),
            source_attribute: "src".to_string(),
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
        }
    }
}

/// External encoder programs and their quality knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderSettings {
    pub image_program: String,
    pub video_program: String,
    pub image_quality: u8,
    pub video_crf: u8,
    pub audio_bitrate: String,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            image_program: "magick".to_string(),
            video_program: "ffmpeg".to_string(),
            image_quality: 80,
            video_crf: 30,
            audio_bitrate: "128k".to_string(),
        }
    }
}
