use super::model_id::ModelId;
use super::summary_style::SummaryStyle;

/// Shown in place of a summary when the provider's reply had no usable text.
pub const UNRECOGNIZED_RESPONSE_MESSAGE: &str = "Error: Could not retrieve clean summary.";

/// What a completion call produced, as classified by the adapter that made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    Success(String),
    Unrecognized,
}

impl CompletionOutcome {
    pub fn into_summary_text(self) -> String {
        match self {
            CompletionOutcome::Success(text) => text.trim().to_string(),
            CompletionOutcome::Unrecognized => UNRECOGNIZED_RESPONSE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub style: SummaryStyle,
    pub model: ModelId,
    pub text: String,
}

impl Summary {
    pub fn heading(&self) -> String {
        format!("### {} using {}", self.style, self.model)
    }

    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.heading(), self.text)
    }
}
