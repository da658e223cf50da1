mod document;
mod document_text;
mod model_id;
mod summary;
mod summary_style;

pub use document::{ContentType, Document, DocumentId};
pub use document_text::DocumentText;
pub use model_id::{AVAILABLE_MODELS, ModelId};
pub use summary::{CompletionOutcome, Summary, UNRECOGNIZED_RESPONSE_MESSAGE};
pub use summary_style::{SummaryStyle, UnknownSummaryStyle};
