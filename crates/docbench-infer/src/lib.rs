pub mod compare;
pub mod device;
pub mod error;
pub mod harness;
pub mod input;
pub mod session;

pub use compare::{
    CompareConfig, ComparisonReport, ComparisonRow, DEFAULT_BATCH_SIZES, log_spaced_counts,
    run_comparison,
};
pub use device::Device;
pub use error::InferError;
pub use harness::{Measurement, measure, measure_batch, measure_single};
pub use input::{DEFAULT_INPUT_HW, random_batch};
pub use session::LayoutSession;
