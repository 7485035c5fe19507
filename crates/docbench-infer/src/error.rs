use std::fmt;

#[derive(Debug)]
pub enum InferError {
    Ort(String),
    Io(String),
    Shape(String),
    Json(String),
    Runtime(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::Ort(msg) => write!(f, "ort error: {msg}"),
            InferError::Io(msg) => write!(f, "io error: {msg}"),
            InferError::Shape(msg) => write!(f, "shape error: {msg}"),
            InferError::Json(msg) => write!(f, "json error: {msg}"),
            InferError::Runtime(msg) => write!(f, "runtime error: {msg}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<ort::Error> for InferError {
    fn from(err: ort::Error) -> Self {
        InferError::Ort(err.to_string())
    }
}

impl From<std::io::Error> for InferError {
    fn from(err: std::io::Error) -> Self {
        InferError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for InferError {
    fn from(err: serde_json::Error) -> Self {
        InferError::Json(err.to_string())
    }
}
