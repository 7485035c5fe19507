use crate::backend::ParserBackend;
use crate::corpus::{collect_pdfs, file_name_of};
use crate::record::FileRecord;
use crate::ParseError;
use docbench_base::log;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

/// Configuration for one corpus run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub max_concurrent: usize,
    pub limit: Option<usize>,
}

impl RunConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            max_concurrent: 4,
            limit: None,
        }
    }
}

/// What a finished run reports back: record count and the wall time of the
/// whole fan-out, which is the throughput denominator for the analysis.
#[derive(Debug, Clone, Copy)]
pub struct RunOutcome {
    pub records: usize,
    pub elapsed: Duration,
}

/// Convert one file and time it. Parse failures become failure records.
pub fn process_file(backend: &dyn ParserBackend, path: &Path) -> FileRecord {
    let file = file_name_of(path);
    let start = Instant::now();
    match backend.parse(path) {
        Ok(parsed) => {
            let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
            log::info!("successfully processed: {}", file);
            FileRecord::success(file, parsed, duration_ms)
        }
        Err(e) => {
            let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
            log::error!("exception processing {}: {}", file, e);
            FileRecord::failure(file, e.to_string(), duration_ms)
        }
    }
}

/// Run `backend` over every PDF in the corpus with at most
/// `max_concurrent` conversions in flight, one blocking worker per file.
/// The output directory is recreated from scratch; every record, failures
/// included, lands there as `{file}.json`.
pub async fn run_corpus(
    config: &RunConfig,
    backend: Arc<dyn ParserBackend>,
) -> Result<RunOutcome, ParseError> {
    let files = collect_pdfs(&config.input_dir, config.limit)?;
    if files.is_empty() {
        log::warn!("no PDF files found in {}", config.input_dir.display());
        return Ok(RunOutcome {
            records: 0,
            elapsed: Duration::ZERO,
        });
    }

    if config.output_dir.exists() {
        fs::remove_dir_all(&config.output_dir)?;
    }
    fs::create_dir_all(&config.output_dir)?;
    log::info!("storing records in: {}", config.output_dir.display());

    let semaphore = Arc::new(Semaphore::new(config.max_concurrent.max(1)));
    let start = Instant::now();

    let mut handles = Vec::with_capacity(files.len());
    for path in files {
        let permit = Arc::clone(&semaphore)
            .acquire_owned()
            .await
            .map_err(|e| ParseError::Io(e.to_string()))?;
        let backend = Arc::clone(&backend);
        handles.push(tokio::task::spawn_blocking(move || {
            let record = process_file(backend.as_ref(), &path);
            drop(permit);
            record
        }));
    }

    let mut records = 0;
    for handle in handles {
        let record = handle
            .await
            .map_err(|e| ParseError::Io(format!("worker failed: {e}")))?;
        record.write_to(&config.output_dir)?;
        records += 1;
    }

    Ok(RunOutcome {
        records,
        elapsed: start.elapsed(),
    })
}
