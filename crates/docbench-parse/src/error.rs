use std::fmt;

#[derive(Debug)]
pub enum ParseError {
    Io(String),
    Pdf(String),
    Json(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(msg) => write!(f, "io error: {msg}"),
            ParseError::Pdf(msg) => write!(f, "pdf error: {msg}"),
            ParseError::Json(msg) => write!(f, "json error: {msg}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        ParseError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Json(err.to_string())
    }
}
