use docbench_base::log;
use docbench_parse::{analyze_remote, collect_pdfs, file_name_of};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

const DEFAULT_ENDPOINT: &str = "http://localhost:3002/parse";
const DEFAULT_OUT_DIR: &str = "/tmp/pdf_responses";
const DEFAULT_MAX_CONCURRENT: usize = 10;

fn usage(prog: &str) -> ! {
    eprintln!(
        "Usage: {} <input-dir> [--endpoint URL] [--max-concurrent N] \
         [--limit N] [--out-dir DIR]",
        prog
    );
    std::process::exit(1);
}

/// Upload one PDF as multipart form data. Returns the response body on
/// success, None on transport errors or non-success statuses.
async fn process_file(client: &reqwest::Client, endpoint: &str, path: &Path) -> Option<String> {
    let filename = file_name_of(path);

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("exception processing {}: {}", filename, e);
            return None;
        }
    };

    let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.clone());
    let form = reqwest::multipart::Form::new().part("file", part);

    match client.post(endpoint).multipart(form).send().await {
        Ok(response) if response.status().is_success() => match response.text().await {
            Ok(body) => {
                log::info!("successfully processed: {}", filename);
                Some(body)
            }
            Err(e) => {
                log::error!("exception processing {}: {}", filename, e);
                None
            }
        },
        Ok(response) => {
            log::error!("error processing {}: status {}", filename, response.status());
            None
        }
        Err(e) => {
            log::error!("exception processing {}: {}", filename, e);
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    docbench_base::init_stdout_logger();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage(&args[0]);
    }

    let input_dir = PathBuf::from(&args[1]);
    let mut endpoint = DEFAULT_ENDPOINT.to_string();
    let mut out_dir = PathBuf::from(DEFAULT_OUT_DIR);
    let mut max_concurrent = DEFAULT_MAX_CONCURRENT;
    let mut limit = None;

    let mut i = 2;
    while i < args.len() {
        let flag = args[i].as_str();
        let Some(value) = args.get(i + 1) else {
            usage(&args[0]);
        };
        match flag {
            "--endpoint" => endpoint = value.clone(),
            "--max-concurrent" => {
                max_concurrent = value.parse().unwrap_or_else(|_| {
                    eprintln!("invalid concurrency: {value}");
                    usage(&args[0]);
                });
            }
            "--limit" => {
                let n: usize = value.parse().unwrap_or_else(|_| {
                    eprintln!("invalid limit: {value}");
                    usage(&args[0]);
                });
                limit = Some(n);
            }
            "--out-dir" => out_dir = PathBuf::from(value),
            _ => usage(&args[0]),
        }
        i += 2;
    }

    let files = collect_pdfs(&input_dir, limit)?;
    if files.is_empty() {
        log::warn!("no PDF files found in {}", input_dir.display());
        return Ok(());
    }

    if out_dir.exists() {
        fs::remove_dir_all(&out_dir)?;
    }
    fs::create_dir_all(&out_dir)?;
    log::info!("storing responses in: {}", out_dir.display());

    let client = reqwest::Client::new();
    let semaphore = Arc::new(Semaphore::new(max_concurrent.max(1)));
    let start = Instant::now();

    let mut handles = Vec::with_capacity(files.len());
    for path in files {
        let permit = Arc::clone(&semaphore).acquire_owned().await?;
        let client = client.clone();
        let endpoint = endpoint.clone();
        handles.push(tokio::spawn(async move {
            let _permit = permit;
            let body = process_file(&client, &endpoint, &path).await;
            (file_name_of(&path), body)
        }));
    }

    for handle in handles {
        let (filename, body) = handle.await?;
        if let Some(body) = body {
            fs::write(out_dir.join(format!("{filename}.json")), body)?;
        }
    }
    log::info!("all files processed");

    if let Some(stats) = analyze_remote(&out_dir, start.elapsed())? {
        stats.print();
    }

    Ok(())
}
