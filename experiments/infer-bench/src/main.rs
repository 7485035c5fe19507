use docbench_base::log;
use docbench_infer::{CompareConfig, Device, log_spaced_counts, run_comparison};
use std::path::PathBuf;

const DEFAULT_REPORT: &str = "comparison_report.json";

fn usage(prog: &str) -> ! {
    eprintln!(
        "Usage: {} <model-dir> <model-stem> [--device cpu|cuda:N|coreml] \
         [--batch-sizes 2,4,8,32] [--max-repeats N] [--out report.json]",
        prog
    );
    std::process::exit(1);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    docbench_base::init_stdout_logger();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        usage(&args[0]);
    }

    let mut config = CompareConfig::new(args[1].as_str(), args[2].as_str());
    let mut out = PathBuf::from(DEFAULT_REPORT);

    let mut i = 3;
    while i < args.len() {
        let flag = args[i].as_str();
        let Some(value) = args.get(i + 1) else {
            usage(&args[0]);
        };
        match flag {
            "--device" => {
                config.device = Device::parse_arg(value).unwrap_or_else(|| {
                    eprintln!("unknown device: {value}");
                    usage(&args[0]);
                });
            }
            "--batch-sizes" => {
                let sizes: Result<Vec<usize>, _> =
                    value.split(',').map(|s| s.trim().parse()).collect();
                match sizes {
                    Ok(sizes) if !sizes.is_empty() => config.batch_sizes = sizes,
                    _ => {
                        eprintln!("invalid batch sizes: {value}");
                        usage(&args[0]);
                    }
                }
            }
            "--max-repeats" => {
                let max: usize = value.parse().unwrap_or_else(|_| {
                    eprintln!("invalid repeat count: {value}");
                    usage(&args[0]);
                });
                config.repeat_counts = log_spaced_counts(max, 10);
            }
            "--out" => out = PathBuf::from(value),
            _ => usage(&args[0]),
        }
        i += 2;
    }

    log::info!(
        "comparing batched vs single inference for {} on {}",
        config.model_stem,
        config.device
    );

    let report = run_comparison(&config)?;
    report.write_json(&out)?;
    log::info!("wrote {} rows to {}", report.rows.len(), out.display());

    Ok(())
}
