use crate::ParseError;
use std::fs;
use std::path::{Path, PathBuf};

/// Collect the `.pdf` files directly under `dir`, sorted by path for a
/// deterministic processing order, truncated to `limit` when given.
pub fn collect_pdfs(dir: &Path, limit: Option<usize>) -> Result<Vec<PathBuf>, ParseError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf {
            files.push(path);
        }
    }

    files.sort();
    if let Some(limit) = limit {
        files.truncate(limit);
    }
    Ok(files)
}

/// Base name of a corpus file, used to key its result record.
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn collects_only_pdfs_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.pdf", "a.pdf", "notes.txt", "c.PDF"] {
            File::create(dir.path().join(name)).unwrap();
        }
        fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let files = collect_pdfs(dir.path(), None).unwrap();
        let names: Vec<String> = files.iter().map(|p| file_name_of(p)).collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf", "c.PDF"]);
    }

    #[test]
    fn limit_truncates() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.pdf", "b.pdf", "c.pdf"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let files = collect_pdfs(dir.path(), Some(2)).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn missing_dir_is_io_error() {
        let result = collect_pdfs(Path::new("/definitely/not/here"), None);
        assert!(matches!(result, Err(ParseError::Io(_))));
    }

    #[test]
    fn empty_dir_yields_empty_corpus() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_pdfs(dir.path(), None).unwrap().is_empty());
    }
}
