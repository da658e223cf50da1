use std::fmt;

/// Models offered for selection. Not checked against the provider's registry.
pub const AVAILABLE_MODELS: [&str; 3] = ["Gemma-7b-It", "llama3-70b-8192", "Mixtral-8x7b-32768"];

/// Opaque name of a hosted model, passed through to the provider unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn available() -> Vec<ModelId> {
        AVAILABLE_MODELS.iter().map(|m| ModelId::new(*m)).collect()
    }
}

impl From<&str> for ModelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
