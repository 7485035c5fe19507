use crate::ParseError;
use crate::backend::{ParsedDoc, ParserBackend};
use lopdf::Document;
use std::path::Path;

/// Text extraction through lopdf's content-stream parser.
pub struct LopdfBackend;

impl ParserBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn parse(&self, path: &Path) -> Result<ParsedDoc, ParseError> {
        let doc = Document::load(path).map_err(|e| ParseError::Pdf(e.to_string()))?;

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        let mut characters = 0;
        for page in &page_numbers {
            // A page that yields no extractable text still counts as a page
            if let Ok(text) = doc.extract_text(&[*page]) {
                characters += text.chars().count();
            }
        }

        Ok(ParsedDoc {
            pages: page_numbers.len(),
            characters,
        })
    }
}
