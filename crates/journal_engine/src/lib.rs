//! Journal engine: entry extraction, media materialization and the export pipeline.
mod date;
mod decode;
mod document;
mod encode;
mod extract;
mod materialize;
mod persist;
mod pipeline;
mod progress;
mod render;
mod settings;
mod tools;

pub use date::{DatePattern, DEFAULT_DATE_PATTERN};
pub use decode::{decode_html, DecodedHtml};
pub use document::{DocumentView, ScraperDocument};
pub use encode::{EncodeError, Encoder, ProcessEncoder};
pub use extract::{EntryExtractor, RunContext};
pub use materialize::{resolve_source, MediaMaterializer};
pub use persist::{
    ensure_output_dir, prepare_output_layout, AtomicFileWriter, OutputLayout, PersistError,
};
pub use pipeline::{
    list_entry_files, normalize_output_name, PipelineError, PipelineRunner, RunConfig, RunOutcome,
    RunReport, DEFAULT_OUTPUT_NAME,
};
pub use progress::{NoopProgressSink, ProgressSink};
pub use render::{media_markup, render_entry};
pub use settings::{EncoderSettings, ExtractionSettings};
pub use tools::{check_tools, ToolingError};
