use crate::ParseError;
use crate::backend::ParsedDoc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Per-file benchmark result, dumped as `{file}.json` in the output
/// directory. Failures are records too; a bad document never aborts a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub success: bool,
    pub file: String,
    #[serde(default)]
    pub pages: usize,
    #[serde(default)]
    pub characters: usize,
    pub duration_ms: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileRecord {
    pub fn success(file: String, parsed: ParsedDoc, duration_ms: f64) -> Self {
        Self {
            success: true,
            file,
            pages: parsed.pages,
            characters: parsed.characters,
            duration_ms,
            error: None,
        }
    }

    pub fn failure(file: String, error: String, duration_ms: f64) -> Self {
        Self {
            success: false,
            file,
            pages: 0,
            characters: 0,
            duration_ms,
            error: Some(error),
        }
    }

    /// Write the record into `dir` as `{file}.json` and return the path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ParseError> {
        let path = dir.join(format!("{}.json", self.file));
        let json = serde_json::to_string(self)?;
        fs::write(&path, json)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_record_omits_error_field() {
        let record = FileRecord::success(
            "a.pdf".to_string(),
            ParsedDoc {
                pages: 3,
                characters: 120,
            },
            42.5,
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("error"));

        let back: FileRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn failure_record_round_trips() {
        let record = FileRecord::failure("bad.pdf".to_string(), "broken xref".to_string(), 7.0);
        let json = serde_json::to_string(&record).unwrap();
        let back: FileRecord = serde_json::from_str(&json).unwrap();
        assert!(!back.success);
        assert_eq!(back.error.as_deref(), Some("broken xref"));
    }

    #[test]
    fn write_to_names_file_after_source() {
        let dir = tempfile::tempdir().unwrap();
        let record = FileRecord::success(
            "doc.pdf".to_string(),
            ParsedDoc {
                pages: 1,
                characters: 9,
            },
            1.0,
        );
        let path = record.write_to(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("doc.pdf.json"));
        assert!(path.is_file());
    }
}
