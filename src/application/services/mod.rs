mod summarization_service;

pub use summarization_service::{EMPTY_TEXT_MESSAGE, SummarizationService, SummarizeError};
