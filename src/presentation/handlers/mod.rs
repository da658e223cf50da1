mod error;
mod extract;
mod health;
mod options;
mod summarize;
mod summarize_document;
mod upload;

pub use error::ErrorResponse;
pub use extract::{ExtractResponse, extract_handler};
pub use health::health_handler;
pub use options::options_handler;
pub use summarize::{SummarizeRequest, SummaryResponse, summarize_handler};
pub use summarize_document::summarize_document_handler;
