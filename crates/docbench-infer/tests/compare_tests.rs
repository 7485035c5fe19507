use docbench_infer::{CompareConfig, Device, log_spaced_counts};
use std::path::PathBuf;

#[test]
fn log_spaced_counts_match_default_sweep() {
    // logspace(0, log10(20), 10), truncated to unique ints
    assert_eq!(log_spaced_counts(20, 10), vec![1, 2, 3, 5, 7, 10, 14, 20]);
}

#[test]
fn log_spaced_counts_endpoint_is_exact() {
    for max in [2usize, 10, 100, 1000] {
        let counts = log_spaced_counts(max, 10);
        assert_eq!(counts.first(), Some(&1));
        assert_eq!(counts.last(), Some(&max));
    }
}

#[test]
fn log_spaced_counts_are_strictly_increasing() {
    let counts = log_spaced_counts(1000, 25);
    assert!(counts.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn log_spaced_counts_degenerate_inputs() {
    assert!(log_spaced_counts(0, 10).is_empty());
    assert!(log_spaced_counts(10, 0).is_empty());
    assert_eq!(log_spaced_counts(1, 10), vec![1]);
    assert_eq!(log_spaced_counts(20, 1), vec![1]);
}

#[test]
fn config_defaults() {
    let config = CompareConfig::new("/models", "yolov8s-doclaynet");
    assert_eq!(config.batch_sizes, vec![2, 4, 8, 32]);
    assert_eq!(config.repeat_counts, vec![1, 2, 3, 5, 7, 10, 14, 20]);
    assert_eq!(config.input_hw, (1024, 1024));
    assert_eq!(config.device, Device::Cpu);
}

#[test]
fn model_path_scheme() {
    let config = CompareConfig::new("/models", "yolov8s-doclaynet");
    assert_eq!(
        config.single_model_path(),
        PathBuf::from("/models/yolov8s-doclaynet.onnx")
    );
    assert_eq!(
        config.batch_model_path(8),
        PathBuf::from("/models/yolov8s-doclaynet_batchsize8.onnx")
    );
}
