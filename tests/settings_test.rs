use pdf_summarizer::presentation::config::{Environment, LlmProvider, Settings};

#[test]
fn given_no_sources_when_building_settings_then_uses_defaults() {
    let settings = Settings::from_builder(config::Config::builder()).unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.llm.provider, LlmProvider::Groq);
    assert!(settings.llm.api_key.is_empty());
    assert_eq!(settings.extraction.max_file_size_mb, 50);
    assert_eq!(settings.extraction.max_file_size_bytes(), 50 * 1024 * 1024);
    assert!(!settings.logging.json);
}

#[test]
fn given_overrides_when_building_settings_then_applies_them() {
    let builder = config::Config::builder()
        .set_override("server.port", 8080)
        .unwrap()
        .set_override("llm.provider", "custom")
        .unwrap()
        .set_override("llm.base_url", "http://localhost:1234/v1")
        .unwrap()
        .set_override("llm.api_key", "gsk_secret")
        .unwrap()
        .set_override("llm.temperature", 0.2)
        .unwrap()
        .set_override("extraction.max_file_size_mb", 5)
        .unwrap();

    let settings = Settings::from_builder(builder).unwrap();

    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.llm.provider, LlmProvider::Custom);
    assert_eq!(
        settings.llm.base_url.as_deref(),
        Some("http://localhost:1234/v1")
    );
    assert_eq!(settings.llm.api_key, "gsk_secret");
    assert_eq!(settings.llm.temperature, Some(0.2));
    assert_eq!(settings.extraction.max_file_size_mb, 5);
}

#[test]
fn given_unknown_provider_when_building_settings_then_fails() {
    let builder = config::Config::builder()
        .set_override("llm.provider", "carrier-pigeon")
        .unwrap();

    assert!(Settings::from_builder(builder).is_err());
}

#[test]
fn given_settings_when_debug_formatting_then_hides_api_key() {
    let builder = config::Config::builder()
        .set_override("llm.api_key", "gsk_do_not_print")
        .unwrap();
    let settings = Settings::from_builder(builder).unwrap();

    let rendered = format!("{:?}", settings);

    assert!(!rendered.contains("gsk_do_not_print"));
    assert!(rendered.contains("[REDACTED]"));
}

#[test]
fn given_environment_names_when_parsing_then_accepts_known_values() {
    assert_eq!(
        Environment::try_from("local".to_string()),
        Ok(Environment::Local)
    );
    assert_eq!(
        Environment::try_from("TEST".to_string()),
        Ok(Environment::Test)
    );
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_environment_when_displaying_then_matches_settings_file_suffix() {
    assert_eq!(Environment::Prod.to_string(), "prod");
    assert_eq!(Environment::Local.as_str(), "local");
}
