use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use journal_core::{select_entries, ProgressTracker, RunStats, ENTRY_EXTENSION};
use journal_logging::{journal_debug, journal_info, journal_warn};

use crate::decode::decode_html;
use crate::document::ScraperDocument;
use crate::encode::Encoder;
use crate::extract::{EntryExtractor, RunContext};
use crate::materialize::MediaMaterializer;
use crate::persist::{prepare_output_layout, AtomicFileWriter, PersistError};
use crate::progress::ProgressSink;
use crate::render::render_entry;
use crate::settings::ExtractionSettings;

pub const DEFAULT_OUTPUT_NAME: &str = "Diario_Exportado";

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("entries folder not found: {}", .0.display())]
    EntriesDirMissing(PathBuf),
    #[error("invalid output name {0:?}")]
    InvalidOutputName(String),
    #[error("invalid date pattern: {0}")]
    DatePattern(#[from] regex::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub entries_root: PathBuf,
    /// Directory that receives the `{output_name}/` folder.
    pub output_root: PathBuf,
    pub output_name: String,
    /// Entry filters, or a single `all`.
    pub filters: Vec<String>,
    pub text_only: bool,
    pub extraction: ExtractionSettings,
}

impl RunConfig {
    pub fn new(entries_root: impl Into<PathBuf>, output_name: &str) -> Self {
        Self {
            entries_root: entries_root.into(),
            output_root: PathBuf::from("."),
            output_name: normalize_output_name(output_name),
            filters: Vec::new(),
            text_only: false,
            extraction: ExtractionSettings::default(),
        }
    }

    pub fn output_folder(&self) -> PathBuf {
        self.output_root.join(&self.output_name)
    }

    pub fn document_filename(&self) -> String {
        format!("{}.md", self.output_name)
    }
}

/// Strips one trailing `.md`, so `-o Diario.md` and `-o Diario` agree.
pub fn normalize_output_name(raw: &str) -> String {
    raw.strip_suffix(".md").unwrap_or(raw).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub stats: RunStats,
    pub entries_processed: usize,
    pub output_folder: PathBuf,
    pub output_path: PathBuf,
    pub text_only: bool,
    /// Wall-clock time of the extraction loop, pre-scan excluded.
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(RunReport),
    /// No entry file matched the filters; nothing was written.
    NoMatchingEntries,
}

/// Entry documents directly under `entries_root`, in directory listing order.
pub fn list_entry_files(entries_root: &Path) -> Result<Vec<String>, PipelineError> {
    let files = fs::read_dir(entries_root)?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .filter_map(|e| e.file_name().to_str().map(ToOwned::to_owned))
        .filter(|name| name.ends_with(ENTRY_EXTENSION))
        .collect();
    Ok(files)
}

pub struct PipelineRunner {
    config: RunConfig,
    encoder: Box<dyn Encoder>,
}

impl PipelineRunner {
    pub fn new(config: RunConfig, encoder: Box<dyn Encoder>) -> Self {
        Self { config, encoder }
    }

    /// Entry files selected by the configured filters.
    pub fn selected_entries(&self) -> Result<Vec<String>, PipelineError> {
        if !self.config.entries_root.is_dir() {
            return Err(PipelineError::EntriesDirMissing(
                self.config.entries_root.clone(),
            ));
        }
        let candidates = list_entry_files(&self.config.entries_root)?;
        Ok(select_entries(&candidates, self.config.filters.as_slice()))
    }

    /// Sums media nodes over `files` without materializing anything.
    pub fn prescan(
        &self,
        extractor: &EntryExtractor,
        files: &[String],
    ) -> Result<usize, PipelineError> {
        let mut total = 0;
        for file in files {
            let doc = self.load_document(file)?;
            total += extractor.count_media(&doc);
        }
        Ok(total)
    }

    fn load_document(&self, file: &str) -> Result<ScraperDocument, PipelineError> {
        let bytes = fs::read(self.config.entries_root.join(file))?;
        let decoded = decode_html(&bytes);
        if decoded.lossy {
            journal_warn!(
                "{} has malformed {} sequences; decoded with replacement characters",
                file,
                decoded.encoding_label
            );
        }
        Ok(ScraperDocument::parse(&decoded.html))
    }

    /// Runs the whole export. Any error aborts the run before the document is written.
    pub fn run(&self, sink: &dyn ProgressSink) -> Result<RunOutcome, PipelineError> {
        let config = &self.config;
        if config.output_name.is_empty() {
            return Err(PipelineError::InvalidOutputName(config.output_name.clone()));
        }
        let extractor = EntryExtractor::new(config.extraction.clone())?;

        let files = self.selected_entries()?;
        if files.is_empty() {
            journal_info!("No entry matched filters {:?}", config.filters);
            return Ok(RunOutcome::NoMatchingEntries);
        }

        let layout = prepare_output_layout(&config.output_folder(), config.text_only)?;
        if layout.created {
            journal_info!("Created output folder {:?}", layout.folder);
        } else {
            journal_info!("Using existing output folder {:?}", layout.folder);
        }

        let media_total = if config.text_only {
            journal_info!("Text-only mode: skipping media conversion");
            None
        } else {
            journal_info!("Scanning {} entries", files.len());
            let total = self.prescan(&extractor, &files)?;
            journal_info!("Detected {} media files", total);
            Some(total)
        };

        let started = Instant::now();
        let materializer =
            MediaMaterializer::new(&config.entries_root, self.encoder.as_ref(), config.text_only);
        let mut stats = RunStats::new(media_total);
        let mut progress = ProgressTracker::new(files.len(), media_total);
        let mut ctx = RunContext {
            materializer: &materializer,
            output_folder: &layout.folder,
            stats: &mut stats,
            progress: &mut progress,
            sink,
        };

        let mut document = String::new();
        for (index, file) in files.iter().enumerate() {
            let doc = self.load_document(file)?;
            let identifier = Path::new(file)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(file);

            if !config.text_only {
                fs::create_dir_all(layout.resources.join(identifier))?;
            }

            ctx.progress.begin_entry(index, file);
            let entry = extractor.extract(&doc, identifier, &mut ctx);
            journal_debug!(
                "Extracted {} ({} media) as {:?}",
                file,
                entry.media.len(),
                entry.display_date
            );
            document.push_str(&render_entry(&entry, file));
        }
        stats.media_processed = progress.media_processed();

        let writer = AtomicFileWriter::new(layout.folder.clone());
        let output_path = writer.write(&config.document_filename(), &document)?;
        journal_info!("Wrote {:?}", output_path);

        Ok(RunOutcome::Completed(RunReport {
            stats,
            entries_processed: files.len(),
            output_folder: layout.folder,
            output_path,
            text_only: config.text_only,
            elapsed: started.elapsed(),
        }))
    }
}
