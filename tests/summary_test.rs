use pdf_summarizer::domain::{
    AVAILABLE_MODELS, CompletionOutcome, ModelId, Summary, SummaryStyle,
    UNRECOGNIZED_RESPONSE_MESSAGE,
};

#[test]
fn given_successful_outcome_when_converting_then_trims_whitespace() {
    let outcome = CompletionOutcome::Success("\n  A tidy summary.  \n".to_string());

    assert_eq!(outcome.into_summary_text(), "A tidy summary.");
}

#[test]
fn given_unrecognized_outcome_when_converting_then_returns_sentinel() {
    let text = CompletionOutcome::Unrecognized.into_summary_text();

    assert_eq!(text, "Error: Could not retrieve clean summary.");
    assert_eq!(text, UNRECOGNIZED_RESPONSE_MESSAGE);
}

#[test]
fn given_summary_when_rendering_heading_then_names_style_and_model() {
    let summary = Summary {
        style: SummaryStyle::BulletPoint,
        model: ModelId::new("llama3-70b-8192"),
        text: "- one\n- two\n- three".to_string(),
    };

    assert_eq!(
        summary.heading(),
        "### Bullet Point Summary using llama3-70b-8192"
    );
    assert_eq!(
        summary.render(),
        "### Bullet Point Summary using llama3-70b-8192\n\n- one\n- two\n- three"
    );
}

#[test]
fn given_model_catalogue_when_listing_then_offers_three_models_in_order() {
    let models = ModelId::available();

    assert_eq!(models.len(), 3);
    assert_eq!(models[0].as_str(), "Gemma-7b-It");
    assert_eq!(models[1].as_str(), "llama3-70b-8192");
    assert_eq!(models[2].as_str(), "Mixtral-8x7b-32768");
    assert_eq!(AVAILABLE_MODELS.len(), models.len());
}

#[test]
fn given_model_outside_catalogue_when_creating_then_is_accepted_unchanged() {
    let model = ModelId::from("some-future-model");

    assert_eq!(model.to_string(), "some-future-model");
}
