pub mod analyze;
pub mod backend;
pub mod backends;
pub mod corpus;
pub mod error;
pub mod record;
pub mod remote;
pub mod runner;

pub use analyze::{CorpusStats, analyze_records};
pub use backend::{ParsedDoc, ParserBackend};
pub use backends::{LopdfBackend, PdfiumBackend};
pub use corpus::{collect_pdfs, file_name_of};
pub use error::ParseError;
pub use record::FileRecord;
pub use remote::{RemoteResponse, RemoteStats, analyze_remote};
pub use runner::{RunConfig, RunOutcome, process_file, run_corpus};
