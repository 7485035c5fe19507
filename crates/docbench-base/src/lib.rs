pub mod logging;
pub mod stats;

pub use logging::{StdoutLogger, init_stdout_logger};
pub use stats::{Summary, throughput};

// Re-export log so downstream crates can use docbench_base::log::*
pub use log;
