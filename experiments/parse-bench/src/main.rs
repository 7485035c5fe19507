use docbench_base::log;
use docbench_parse::{
    LopdfBackend, ParserBackend, PdfiumBackend, RunConfig, analyze_records, run_corpus,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DEFAULT_OUT_DIR: &str = "/tmp/docbench_responses";

fn usage(prog: &str) -> ! {
    eprintln!(
        "Usage: {} <input-dir> [--backend lopdf|pdfium] [--max-concurrent N] \
         [--limit N] [--out-dir DIR]",
        prog
    );
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    docbench_base::init_stdout_logger();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage(&args[0]);
    }

    let input_dir = PathBuf::from(&args[1]);
    if !input_dir.is_dir() {
        log::error!("input directory '{}' does not exist", input_dir.display());
        std::process::exit(1);
    }

    let mut config = RunConfig::new(input_dir.as_path(), Path::new(DEFAULT_OUT_DIR));
    let mut backend: Arc<dyn ParserBackend> = Arc::new(LopdfBackend);

    let mut i = 2;
    while i < args.len() {
        let flag = args[i].as_str();
        let Some(value) = args.get(i + 1) else {
            usage(&args[0]);
        };
        match flag {
            "--backend" => {
                backend = match value.as_str() {
                    "lopdf" => Arc::new(LopdfBackend),
                    "pdfium" => Arc::new(PdfiumBackend),
                    _ => {
                        eprintln!("unknown backend: {value}");
                        usage(&args[0]);
                    }
                };
            }
            "--max-concurrent" => {
                config.max_concurrent = value.parse().unwrap_or_else(|_| {
                    eprintln!("invalid concurrency: {value}");
                    usage(&args[0]);
                });
            }
            "--limit" => {
                let limit: usize = value.parse().unwrap_or_else(|_| {
                    eprintln!("invalid limit: {value}");
                    usage(&args[0]);
                });
                config.limit = Some(limit);
            }
            "--out-dir" => config.output_dir = PathBuf::from(value),
            _ => usage(&args[0]),
        }
        i += 2;
    }

    log::info!(
        "benchmarking {} over {}",
        backend.name(),
        input_dir.display()
    );

    let outcome = run_corpus(&config, backend).await?;
    log::info!("all files processed ({} records)", outcome.records);

    if outcome.records > 0 {
        if let Some(stats) = analyze_records(&config.output_dir, outcome.elapsed)? {
            stats.print();
        }
    }

    Ok(())
}
