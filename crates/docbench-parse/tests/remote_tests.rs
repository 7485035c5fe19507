use docbench_parse::analyze_remote;
use serde_json::json;
use std::fs;
use std::path::Path;
use std::time::Duration;

fn write_response(dir: &Path, name: &str, pages: usize, blocks: usize, duration_ms: f64) {
    let body = json!({
        "success": true,
        "data": {
            "pages": vec![json!({}); pages],
            "blocks": vec![json!({}); blocks],
            "metadata": { "parsing_duration": duration_ms }
        }
    });
    fs::write(dir.join(format!("{name}.json")), body.to_string()).unwrap();
}

#[test]
fn aggregates_server_responses() {
    let dir = tempfile::tempdir().unwrap();
    write_response(dir.path(), "a.pdf", 10, 50, 1000.0);
    write_response(dir.path(), "b.pdf", 20, 40, 3000.0);

    let stats = analyze_remote(dir.path(), Duration::from_secs(10))
        .unwrap()
        .unwrap();

    assert_eq!(stats.total_documents, 2);
    assert_eq!(stats.total_pages, 30);
    assert_eq!(stats.total_blocks, 90);
    assert_eq!(stats.avg_pages_per_doc, 15.0);
    assert_eq!(stats.avg_blocks_per_doc, 45.0);
    // mean of per-doc ratios: (5.0 + 2.0) / 2
    assert_eq!(stats.avg_blocks_per_page, 3.5);
    assert_eq!(stats.duration_ms.mean, 2000.0);
    assert_eq!(stats.documents_per_second, 0.2);
    assert_eq!(stats.pages_per_second, 3.0);
}

#[test]
fn unsuccessful_responses_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_response(dir.path(), "good.pdf", 2, 4, 100.0);
    fs::write(
        dir.path().join("bad.pdf.json"),
        json!({ "success": false }).to_string(),
    )
    .unwrap();

    let stats = analyze_remote(dir.path(), Duration::from_secs(1))
        .unwrap()
        .unwrap();
    assert_eq!(stats.total_documents, 1);
    assert_eq!(stats.total_pages, 2);
}

#[test]
fn zero_page_document_contributes_zero_ratio() {
    let dir = tempfile::tempdir().unwrap();
    write_response(dir.path(), "empty.pdf", 0, 0, 10.0);
    write_response(dir.path(), "full.pdf", 2, 8, 20.0);

    let stats = analyze_remote(dir.path(), Duration::from_secs(1))
        .unwrap()
        .unwrap();
    assert_eq!(stats.avg_blocks_per_page, 2.0);
}

#[test]
fn nothing_valid_yields_none() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("junk.json"), "nope").unwrap();
    assert!(
        analyze_remote(dir.path(), Duration::from_secs(1))
            .unwrap()
            .is_none()
    );
}
