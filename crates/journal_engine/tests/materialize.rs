use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use journal_core::{AssetKind, MaterializationResult};
use journal_engine::{EncodeError, Encoder, MediaMaterializer, ProcessEncoder};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[derive(Default, Clone)]
struct SpyEncoder {
    calls: Arc<Mutex<Vec<(AssetKind, PathBuf, PathBuf)>>>,
    fail: bool,
}

impl SpyEncoder {
    fn record(&self, kind: AssetKind, src: &Path, dst: &Path) -> Result<(), EncodeError> {
        self.calls
            .lock()
            .unwrap()
            .push((kind, src.to_path_buf(), dst.to_path_buf()));
        if self.fail {
            return Err(EncodeError::Spawn {
                program: "spy".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "spy failure"),
            });
        }
        fs::write(dst, b"encoded").unwrap();
        Ok(())
    }
}

impl Encoder for SpyEncoder {
    fn encode_image(&self, src: &Path, dst: &Path) -> Result<(), EncodeError> {
        self.record(AssetKind::Image, src, dst)
    }
    fn encode_video(&self, src: &Path, dst: &Path) -> Result<(), EncodeError> {
        self.record(AssetKind::Video, src, dst)
    }
}

struct Fixture {
    _temp: TempDir,
    entries: PathBuf,
    out: PathBuf,
}

fn fixture() -> Fixture {
    let temp = TempDir::new().unwrap();
    let entries = temp.path().join("Entries");
    let resources = temp.path().join("Resources");
    let out = temp.path().join("out");
    fs::create_dir_all(&entries).unwrap();
    fs::create_dir_all(&resources).unwrap();
    fs::create_dir_all(&out).unwrap();
    fs::write(resources.join("IMG 0001.jpeg"), b"jpeg").unwrap();
    fs::write(resources.join("clip.mov"), b"mov").unwrap();
    Fixture {
        _temp: temp,
        entries,
        out,
    }
}

#[test]
fn converts_percent_encoded_source() {
    let fx = fixture();
    let spy = SpyEncoder::default();
    let materializer = MediaMaterializer::new(&fx.entries, &spy, false);
    let dst = fx.out.join("foto1.webp");

    let result =
        materializer.materialize(AssetKind::Image, "../Resources/IMG%200001.jpeg", &dst);

    assert_eq!(result, MaterializationResult::Converted);
    assert!(result.attempted() && result.succeeded());
    let calls = spy.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, AssetKind::Image);
    assert!(calls[0].1.ends_with("Resources/IMG 0001.jpeg"));
    assert_eq!(calls[0].2, dst);
}

#[test]
fn existing_destination_skips_encoder() {
    let fx = fixture();
    let spy = SpyEncoder::default();
    let materializer = MediaMaterializer::new(&fx.entries, &spy, false);
    let dst = fx.out.join("video1.webm");
    fs::write(&dst, b"already converted").unwrap();

    let result = materializer.materialize(AssetKind::Video, "../Resources/clip.mov", &dst);

    assert_eq!(result, MaterializationResult::AlreadyPresent);
    assert!(spy.calls.lock().unwrap().is_empty());
    assert_eq!(fs::read(&dst).unwrap(), b"already converted");
}

#[test]
fn missing_source_is_silent_and_not_attempted() {
    let fx = fixture();
    let spy = SpyEncoder::default();
    let materializer = MediaMaterializer::new(&fx.entries, &spy, false);
    let dst = fx.out.join("foto1.webp");

    let result = materializer.materialize(AssetKind::Image, "../Resources/gone.jpeg", &dst);

    assert_eq!(result, MaterializationResult::SourceMissing);
    assert!(!result.attempted());
    assert!(!result.succeeded());
    assert!(spy.calls.lock().unwrap().is_empty());
    assert!(!dst.exists());
}

#[test]
fn encoder_failure_is_absorbed() {
    let fx = fixture();
    let spy = SpyEncoder {
        fail: true,
        ..SpyEncoder::default()
    };
    let materializer = MediaMaterializer::new(&fx.entries, &spy, false);
    let dst = fx.out.join("video1.webm");

    let result = materializer.materialize(AssetKind::Video, "../Resources/clip.mov", &dst);

    assert_eq!(result, MaterializationResult::Failed);
    assert!(result.attempted());
    assert!(!result.succeeded());
    assert_eq!(spy.calls.lock().unwrap().len(), 1);
}

#[test]
fn text_only_checks_nothing() {
    let fx = fixture();
    let spy = SpyEncoder::default();
    let materializer = MediaMaterializer::new(&fx.entries, &spy, true);

    let result = materializer.materialize(
        AssetKind::Image,
        "../Resources/IMG%200001.jpeg",
        &fx.out.join("foto1.webp"),
    );

    assert_eq!(result, MaterializationResult::Skipped);
    assert!(materializer.text_only());
    assert!(spy.calls.lock().unwrap().is_empty());
}

#[test]
fn missing_encoder_program_is_a_failure_not_a_panic() {
    let fx = fixture();
    let encoder = ProcessEncoder::new(journal_engine::EncoderSettings {
        image_program: "definitely-not-an-installed-encoder".to_string(),
        ..journal_engine::EncoderSettings::default()
    });
    let materializer = MediaMaterializer::new(&fx.entries, &encoder, false);
    let dst = fx.out.join("foto1.webp");

    let result =
        materializer.materialize(AssetKind::Image, "../Resources/IMG%200001.jpeg", &dst);

    assert_eq!(result, MaterializationResult::Failed);
    assert!(!dst.exists());
}
