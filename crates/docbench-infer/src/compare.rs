use crate::harness::{measure_batch, measure_single};
use crate::input::DEFAULT_INPUT_HW;
use crate::{Device, InferError, LayoutSession};
use docbench_base::log;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Batch sizes the comparison sweeps by default.
pub const DEFAULT_BATCH_SIZES: [usize; 4] = [2, 4, 8, 32];

/// Largest repeat count of the default sweep.
pub const DEFAULT_MAX_REPEATS: usize = 20;

/// Number of points on the default log-spaced repeat axis.
pub const DEFAULT_REPEAT_POINTS: usize = 10;

/// Unique integer points of a log-spaced series from 1 to `max`.
///
/// Intermediate points are truncated to integers and deduplicated; the
/// last point is pinned to `max` so float rounding can never lose the
/// endpoint.
pub fn log_spaced_counts(max: usize, points: usize) -> Vec<usize> {
    if max == 0 || points == 0 {
        return Vec::new();
    }
    if points == 1 || max == 1 {
        return vec![1];
    }

    let max_log = (max as f64).log10();
    let mut counts = Vec::with_capacity(points);
    for i in 0..points {
        let value = if i == points - 1 {
            max
        } else {
            let t = i as f64 / (points - 1) as f64;
            (10f64.powf(t * max_log) as usize).max(1)
        };
        if counts.last() != Some(&value) {
            counts.push(value);
        }
    }
    counts
}

/// Configuration for the batched-model vs single-inference sweep.
///
/// The single model lives at `{stem}.onnx`; each batched model at
/// `{stem}_batchsize{b}.onnx`, all under `model_dir`.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub model_dir: PathBuf,
    pub model_stem: String,
    pub batch_sizes: Vec<usize>,
    pub repeat_counts: Vec<usize>,
    pub input_hw: (usize, usize),
    pub device: Device,
}

impl CompareConfig {
    pub fn new(model_dir: impl Into<PathBuf>, model_stem: impl Into<String>) -> Self {
        Self {
            model_dir: model_dir.into(),
            model_stem: model_stem.into(),
            batch_sizes: DEFAULT_BATCH_SIZES.to_vec(),
            repeat_counts: log_spaced_counts(DEFAULT_MAX_REPEATS, DEFAULT_REPEAT_POINTS),
            input_hw: DEFAULT_INPUT_HW,
            device: Device::Cpu,
        }
    }

    pub fn single_model_path(&self) -> PathBuf {
        self.model_dir.join(format!("{}.onnx", self.model_stem))
    }

    pub fn batch_model_path(&self, batch_size: usize) -> PathBuf {
        self.model_dir
            .join(format!("{}_batchsize{}.onnx", self.model_stem, batch_size))
    }
}

/// One measured point of the sweep: both strategies at the same
/// `(batch_size, repeats)` coordinate, processing the same item count.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub batch_size: usize,
    pub repeats: usize,
    pub batched_throughput: f64,
    pub batched_mean_latency_ms: f64,
    pub single_throughput: f64,
    pub single_mean_latency_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub model_stem: String,
    pub device: String,
    pub input_height: usize,
    pub input_width: usize,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonReport {
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), InferError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Run the full sweep. The single-inference session is loaded once and
/// reused; each batched session is loaded for its batch size and dropped
/// before the next one.
pub fn run_comparison(config: &CompareConfig) -> Result<ComparisonReport, InferError> {
    let mut single_session = LayoutSession::from_file(config.single_model_path(), &config.device)?;

    let mut rows = Vec::new();
    for &batch_size in &config.batch_sizes {
        let batch_model = config.batch_model_path(batch_size);
        log::info!("benchmarking batch size {} ({})", batch_size, batch_model.display());
        let mut batch_session = LayoutSession::from_file(&batch_model, &config.device)?;

        for &repeats in &config.repeat_counts {
            let batched = measure_batch(&mut batch_session, batch_size, config.input_hw, repeats)?;
            let single = measure_single(&mut single_session, batch_size, config.input_hw, repeats)?;

            let row = ComparisonRow {
                batch_size,
                repeats,
                batched_throughput: batched.throughput(),
                batched_mean_latency_ms: batched.mean_latency_ms(),
                single_throughput: single.throughput(),
                single_mean_latency_ms: single.mean_latency_ms(),
            };
            log::info!(
                "batch={} repeats={}: batched {:.2} items/s ({:.2}ms), single {:.2} items/s ({:.2}ms)",
                row.batch_size,
                row.repeats,
                row.batched_throughput,
                row.batched_mean_latency_ms,
                row.single_throughput,
                row.single_mean_latency_ms
            );
            rows.push(row);
        }
    }

    Ok(ComparisonReport {
        model_stem: config.model_stem.clone(),
        device: config.device.to_string(),
        input_height: config.input_hw.0,
        input_width: config.input_hw.1,
        rows,
    })
}
