pub mod lopdf;
pub mod pdfium;

pub use lopdf::LopdfBackend;
pub use pdfium::PdfiumBackend;
