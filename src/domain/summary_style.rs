use std::fmt;
use std::str::FromStr;

/// The four fixed instructions a summary can be requested with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryStyle {
    Long,
    Short,
    Creative,
    BulletPoint,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown summary style: {0}")]
pub struct UnknownSummaryStyle(pub String);

impl SummaryStyle {
    pub const ALL: [SummaryStyle; 4] = [
        SummaryStyle::Long,
        SummaryStyle::Short,
        SummaryStyle::Creative,
        SummaryStyle::BulletPoint,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SummaryStyle::Long => "Long Summary",
            SummaryStyle::Short => "Short Summary",
            SummaryStyle::Creative => "Creative Summary",
            SummaryStyle::BulletPoint => "Bullet Point Summary",
        }
    }

    /// Template text that precedes the document in the prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            SummaryStyle::Long => "Give a summary of the text: ",
            SummaryStyle::Short => "Give a 100-word summary of the text: ",
            SummaryStyle::Creative => "Give a creative summary of the text: ",
            SummaryStyle::BulletPoint => "Give a summary of the text in 3 bullet points: ",
        }
    }

    pub fn build_prompt(&self, text: &str) -> String {
        let instruction = self.instruction();
        let mut prompt = String::with_capacity(instruction.len() + text.len());
        prompt.push_str(instruction);
        prompt.push_str(text);
        prompt
    }
}

impl FromStr for SummaryStyle {
    type Err = UnknownSummaryStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SummaryStyle::ALL
            .into_iter()
            .find(|style| style.label() == s)
            .ok_or_else(|| UnknownSummaryStyle(s.to_string()))
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
