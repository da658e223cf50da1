use serde::Deserialize;

use super::Environment;

const CREDENTIAL_FALLBACK_VAR: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub extraction: ExtractionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    Groq,
    #[serde(rename = "openai")]
    OpenAi,
    Custom,
}

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub api_key: String,
    pub base_url: Option<String>,
    pub max_tokens: Option<usize>,
    pub temperature: Option<f32>,
}

impl std::fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmSettings")
            .field("provider", &self.provider)
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub max_file_size_mb: usize,
}

impl ExtractionSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            max_file_size_mb: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,pdf_summarizer=debug,tower_http=debug".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

impl Settings {
    /// Reads `appsettings.{environment}` (optional) and `APP_`-prefixed variables,
    /// e.g. `APP_LLM__API_KEY`. `GROQ_API_KEY` fills in a missing credential.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let builder = config::Config::builder()
            .add_source(
                config::File::with_name(&format!("appsettings.{}", environment.as_str()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            );

        let mut settings = Self::from_builder(builder)?;

        if settings.llm.api_key.is_empty() {
            if let Ok(key) = std::env::var(CREDENTIAL_FALLBACK_VAR) {
                settings.llm.api_key = key;
            }
        }

        Ok(settings)
    }

    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, SettingsError> {
        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}
