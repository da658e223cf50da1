use std::fmt;

/// Text extracted from one upload. Produced once, never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentText(String);

impl DocumentText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
