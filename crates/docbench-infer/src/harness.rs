use crate::input::random_batch;
use crate::{InferError, LayoutSession};
use docbench_base::stats::{Summary, throughput};
use std::time::{Duration, Instant};

/// Result of one timed measurement loop.
#[derive(Debug, Clone)]
pub struct Measurement {
    /// Wall time of the timed loop, warm-up excluded.
    pub total: Duration,
    /// Per-invocation latency samples in milliseconds.
    pub latencies: Vec<f64>,
    /// Total items processed by the timed loop.
    pub items: usize,
}

impl Measurement {
    /// Items per second over the whole timed loop.
    pub fn throughput(&self) -> f64 {
        throughput(self.items, self.total)
    }

    pub fn latency_summary(&self) -> Option<Summary> {
        Summary::from_samples(&self.latencies)
    }

    pub fn mean_latency_ms(&self) -> f64 {
        self.latency_summary().map(|s| s.mean).unwrap_or(0.0)
    }
}

/// Warm `op` up once, then time `repeats` invocations with a monotonic
/// clock. The warm-up call is never recorded. `items_per_call` is how many
/// items one invocation processes (the batch size for a batched model).
pub fn measure<F>(
    mut op: F,
    repeats: usize,
    items_per_call: usize,
) -> Result<Measurement, InferError>
where
    F: FnMut() -> Result<(), InferError>,
{
    if repeats == 0 {
        return Err(InferError::Runtime(
            "measurement needs at least one repeat".to_string(),
        ));
    }

    op()?;

    let mut latencies = Vec::with_capacity(repeats);
    let start = Instant::now();
    for _ in 0..repeats {
        let iteration_start = Instant::now();
        op()?;
        latencies.push(iteration_start.elapsed().as_secs_f64() * 1000.0);
    }
    let total = start.elapsed();

    Ok(Measurement {
        total,
        latencies,
        items: repeats * items_per_call,
    })
}

/// Time `repeats` forward passes of a batched model over one
/// `[batch, 3, H, W]` input.
pub fn measure_batch(
    session: &mut LayoutSession,
    batch: usize,
    hw: (usize, usize),
    repeats: usize,
) -> Result<Measurement, InferError> {
    let input = random_batch(batch, hw.0, hw.1)?;
    measure(|| session.run(&input).map(|_| ()), repeats, batch)
}

/// Time `batch * repeats` single-sample passes so the loop processes the
/// same number of items as `measure_batch` with the same arguments.
pub fn measure_single(
    session: &mut LayoutSession,
    batch: usize,
    hw: (usize, usize),
    repeats: usize,
) -> Result<Measurement, InferError> {
    let input = random_batch(1, hw.0, hw.1)?;
    measure(|| session.run(&input).map(|_| ()), batch * repeats, 1)
}
