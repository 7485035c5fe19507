use crate::ParseError;
use crate::record::FileRecord;
use docbench_base::log;
use docbench_base::stats::{Summary, throughput};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Aggregate statistics over one corpus run's record directory.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusStats {
    pub total_documents: usize,
    pub total_pages: usize,
    pub failed_documents: usize,
    pub avg_pages_per_doc: f64,
    pub duration_ms: Summary,
    pub documents_per_second: f64,
    pub pages_per_second: f64,
}

impl CorpusStats {
    pub fn print(&self) {
        println!("\nParsing Statistics:");
        println!("==================");
        println!("Total Documents Processed: {}", self.total_documents);
        println!("Total Pages Processed: {}", self.total_pages);
        println!("Failed Documents: {}", self.failed_documents);
        println!("Average Pages per Document: {:.2}", self.avg_pages_per_doc);
        println!("Average Processing Time: {:.2}ms", self.duration_ms.mean);
        println!("Median Processing Time: {:.2}ms", self.duration_ms.median);
        println!("Documents per Second: {:.2}", self.documents_per_second);
        println!("Pages per Second: {:.2}", self.pages_per_second);
        println!("Min Processing Time: {:.2}ms", self.duration_ms.min);
        println!("Max Processing Time: {:.2}ms", self.duration_ms.max);
    }
}

/// Read every `*.json` record under `results_dir` and aggregate the
/// successful ones against the run's wall time. Unreadable records are
/// logged and skipped; failure records are counted but contribute no
/// samples. Returns None when nothing succeeded.
pub fn analyze_records(
    results_dir: &Path,
    wall_time: Duration,
) -> Result<Option<CorpusStats>, ParseError> {
    let mut durations = Vec::new();
    let mut pages_per_doc = Vec::new();
    let mut total_pages = 0;
    let mut failed = 0;

    for entry in fs::read_dir(results_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let record: FileRecord = match fs::read_to_string(&path)
            .map_err(ParseError::from)
            .and_then(|s| serde_json::from_str(&s).map_err(ParseError::from))
        {
            Ok(record) => record,
            Err(e) => {
                log::error!("error processing {}: {}", path.display(), e);
                continue;
            }
        };

        if !record.success {
            failed += 1;
            continue;
        }

        durations.push(record.duration_ms);
        pages_per_doc.push(record.pages as f64);
        total_pages += record.pages;
    }

    let Some(duration_ms) = Summary::from_samples(&durations) else {
        log::warn!("no valid documents found to analyze");
        return Ok(None);
    };

    let total_documents = durations.len();
    let avg_pages_per_doc = pages_per_doc.iter().sum::<f64>() / total_documents as f64;

    Ok(Some(CorpusStats {
        total_documents,
        total_pages,
        failed_documents: failed,
        avg_pages_per_doc,
        duration_ms,
        documents_per_second: throughput(total_documents, wall_time),
        pages_per_second: throughput(total_pages, wall_time),
    }))
}
