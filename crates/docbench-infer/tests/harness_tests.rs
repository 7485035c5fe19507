use docbench_infer::{InferError, measure};
use std::time::Duration;

#[test]
fn warmup_call_is_not_recorded() {
    let mut calls = 0;
    let m = measure(
        || {
            calls += 1;
            Ok(())
        },
        5,
        1,
    )
    .unwrap();

    // 1 warm-up + 5 timed
    assert_eq!(calls, 6);
    assert_eq!(m.latencies.len(), 5);
    assert_eq!(m.items, 5);
}

#[test]
fn items_scale_with_items_per_call() {
    let m = measure(|| Ok(()), 3, 8).unwrap();
    assert_eq!(m.items, 24);
    assert_eq!(m.latencies.len(), 3);
}

#[test]
fn zero_repeats_is_an_error() {
    let result = measure(|| Ok(()), 0, 1);
    assert!(matches!(result, Err(InferError::Runtime(_))));
}

#[test]
fn op_failure_aborts_measurement() {
    let mut calls = 0;
    let result = measure(
        || {
            calls += 1;
            if calls > 2 {
                Err(InferError::Runtime("boom".to_string()))
            } else {
                Ok(())
            }
        },
        10,
        1,
    );

    assert!(result.is_err());
    assert_eq!(calls, 3);
}

#[test]
fn failure_during_warmup_aborts() {
    let result = measure(|| Err(InferError::Ort("bad model".to_string())), 4, 1);
    assert!(matches!(result, Err(InferError::Ort(_))));
}

#[test]
fn latencies_cover_sleep_time() {
    let m = measure(
        || {
            std::thread::sleep(Duration::from_millis(2));
            Ok(())
        },
        3,
        1,
    )
    .unwrap();

    assert!(m.latencies.iter().all(|&l| l >= 2.0));
    assert!(m.total >= Duration::from_millis(6));
    let summary = m.latency_summary().unwrap();
    assert!(summary.min >= 2.0);
    assert!(summary.max >= summary.min);
}

#[test]
fn throughput_counts_items_over_total() {
    let m = measure(
        || {
            std::thread::sleep(Duration::from_millis(1));
            Ok(())
        },
        4,
        2,
    )
    .unwrap();

    assert_eq!(m.items, 8);
    let t = m.throughput();
    assert!(t > 0.0);
    // 8 items over at least 4ms of wall time
    assert!(t <= 8.0 / 0.004);
}
