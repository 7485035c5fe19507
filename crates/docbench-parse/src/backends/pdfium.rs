use crate::ParseError;
use crate::backend::{ParsedDoc, ParserBackend};
use pdfium_render::prelude::Pdfium;
use std::path::Path;

/// Text extraction through PDFium, bound to the system library.
///
/// The binding is created per call so the backend stays `Send + Sync`;
/// PDFium itself serializes access behind the `thread_safe` feature.
pub struct PdfiumBackend;

impl ParserBackend for PdfiumBackend {
    fn name(&self) -> &'static str {
        "pdfium"
    }

    fn parse(&self, path: &Path) -> Result<ParsedDoc, ParseError> {
        let bindings =
            Pdfium::bind_to_system_library().map_err(|e| ParseError::Pdf(e.to_string()))?;
        let pdfium = Pdfium::new(bindings);

        let doc = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| ParseError::Pdf(e.to_string()))?;

        let mut pages = 0;
        let mut characters = 0;
        for page in doc.pages().iter() {
            pages += 1;
            let text = page.text().map_err(|e| ParseError::Pdf(e.to_string()))?;
            characters += text.all().chars().count();
        }

        Ok(ParsedDoc { pages, characters })
    }
}
