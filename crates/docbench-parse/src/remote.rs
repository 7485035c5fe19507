use crate::ParseError;
use docbench_base::log;
use docbench_base::stats::{Summary, throughput};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Response shape of the parse server: pages and blocks are opaque to the
/// benchmark, only their counts and the server-side parsing duration
/// matter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<RemoteDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteDocument {
    #[serde(default)]
    pub pages: Vec<serde_json::Value>,
    #[serde(default)]
    pub blocks: Vec<serde_json::Value>,
    pub metadata: RemoteMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteMetadata {
    pub parsing_duration: f64,
}

/// Aggregate statistics over saved parse-server responses.
#[derive(Debug, Clone, Serialize)]
pub struct RemoteStats {
    pub total_documents: usize,
    pub total_pages: usize,
    pub total_blocks: usize,
    pub avg_pages_per_doc: f64,
    pub avg_blocks_per_doc: f64,
    pub avg_blocks_per_page: f64,
    pub duration_ms: Summary,
    pub documents_per_second: f64,
    pub pages_per_second: f64,
}

impl RemoteStats {
    pub fn print(&self) {
        println!("\nParsing Statistics:");
        println!("==================");
        println!("Total Documents Processed: {}", self.total_documents);
        println!("Total Pages Processed: {}", self.total_pages);
        println!("Total Blocks Extracted: {}", self.total_blocks);
        println!("Average Pages per Document: {:.2}", self.avg_pages_per_doc);
        println!("Average Blocks per Document: {:.2}", self.avg_blocks_per_doc);
        println!("Average Blocks per Page: {:.2}", self.avg_blocks_per_page);
        println!("Average Processing Time: {:.2}ms", self.duration_ms.mean);
        println!("Median Processing Time: {:.2}ms", self.duration_ms.median);
        println!("Documents per Second: {:.2}", self.documents_per_second);
        println!("Pages per Second: {:.2}", self.pages_per_second);
        println!("Min Processing Time: {:.2}ms", self.duration_ms.min);
        println!("Max Processing Time: {:.2}ms", self.duration_ms.max);
    }
}

/// Aggregate every saved `*.json` response under `results_dir` against the
/// client-side wall time. Unreadable and unsuccessful responses are
/// skipped. Returns None when nothing succeeded.
pub fn analyze_remote(
    results_dir: &Path,
    wall_time: Duration,
) -> Result<Option<RemoteStats>, ParseError> {
    let mut durations = Vec::new();
    let mut blocks_per_page = Vec::new();
    let mut total_pages = 0;
    let mut total_blocks = 0;

    for entry in fs::read_dir(results_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let response: RemoteResponse = match fs::read_to_string(&path)
            .map_err(ParseError::from)
            .and_then(|s| serde_json::from_str(&s).map_err(ParseError::from))
        {
            Ok(response) => response,
            Err(e) => {
                log::error!("error processing {}: {}", path.display(), e);
                continue;
            }
        };

        let Some(doc) = response.data.filter(|_| response.success) else {
            continue;
        };

        let n_pages = doc.pages.len();
        let n_blocks = doc.blocks.len();

        durations.push(doc.metadata.parsing_duration);
        total_pages += n_pages;
        total_blocks += n_blocks;
        blocks_per_page.push(if n_pages > 0 {
            n_blocks as f64 / n_pages as f64
        } else {
            0.0
        });
    }

    let Some(duration_ms) = Summary::from_samples(&durations) else {
        log::warn!("no valid documents found to analyze");
        return Ok(None);
    };

    let total_documents = durations.len();

    Ok(Some(RemoteStats {
        total_documents,
        total_pages,
        total_blocks,
        avg_pages_per_doc: total_pages as f64 / total_documents as f64,
        avg_blocks_per_doc: total_blocks as f64 / total_documents as f64,
        avg_blocks_per_page: blocks_per_page.iter().sum::<f64>() / total_documents as f64,
        duration_ms,
        documents_per_second: throughput(total_documents, wall_time),
        pages_per_second: throughput(total_pages, wall_time),
    }))
}
