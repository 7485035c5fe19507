use crate::ParseError;
use std::path::Path;

/// What one conversion yields: page count and extracted character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDoc {
    pub pages: usize,
    pub characters: usize,
}

/// A document-parsing library under benchmark.
///
/// Implementations wrap an external engine's public call pattern; they own
/// no parsing logic of their own. `parse` must be callable from multiple
/// worker threads at once.
pub trait ParserBackend: Send + Sync {
    fn name(&self) -> &'static str;
    fn parse(&self, path: &Path) -> Result<ParsedDoc, ParseError>;
}
