mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ExtractionSettings, LlmProvider, LlmSettings, LoggingSettings, ServerSettings, Settings,
    SettingsError,
};
