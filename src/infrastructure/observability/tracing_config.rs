/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub level: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn new(environment: impl Into<String>, level: impl Into<String>, json_format: bool) -> Self {
        Self {
            environment: environment.into(),
            level: level.into(),
            json_format,
        }
    }

    /// Applies a `LOG_FORMAT` value on top of the configured format.
    /// `json` (any case) selects JSON output, any other value selects plain text.
    pub fn with_log_format(mut self, log_format: Option<&str>) -> Self {
        if let Some(format) = log_format {
            self.json_format = format.trim().eq_ignore_ascii_case("json");
        }
        self
    }
}
