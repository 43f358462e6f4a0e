use httpmock::prelude::*;
use legal_query::core::{Profile, RenderStyle, Role};
use legal_query::{MemoryDisplay, Outcome, QuerySubmitter, StaticInput, SubmitterSettings};

fn settings_for(server: &MockServer, profile: Profile) -> SubmitterSettings {
    SubmitterSettings::from_profile(profile, server.url("/chat"))
}

#[tokio::test]
async fn test_empty_issue_sends_no_request() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/chat");
        then.status(200).json_body(serde_json::json!({}));
    });

    let display = MemoryDisplay::new();
    let submitter = QuerySubmitter::new(
        StaticInput::new("   ", "india", Role::Citizen),
        display.clone(),
        settings_for(&server, Profile::Guidance),
    );

    let outcome = submitter.submit().await;

    assert_eq!(outcome, Outcome::EmptyInput);
    api_mock.assert_hits(0);
    assert_eq!(
        display.current().as_deref(),
        Some("❌ Please describe your legal issue.")
    );
}

#[tokio::test]
async fn test_request_carries_three_fields() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/chat")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "user_input": "I was arrested without a warrant",
                "country": "india",
                "user_role": "accused"
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "Law information not available for this issue."}));
    });

    let display = MemoryDisplay::new();
    let submitter = QuerySubmitter::new(
        StaticInput::new("I was arrested without a warrant\n", "india", Role::Accused),
        display.clone(),
        settings_for(&server, Profile::Guidance),
    );

    let outcome = submitter.submit().await;

    api_mock.assert_hits(1);
    assert!(matches!(outcome, Outcome::Rendered(_)));
}

#[tokio::test]
async fn test_guidance_profile_renders_list() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/chat");
        then.status(200).json_body(serde_json::json!({
            "advice": "consult a lawyer",
            "risk": "low",
            "language_detected": "en"
        }));
    });

    let display = MemoryDisplay::new();
    let submitter = QuerySubmitter::new(
        StaticInput::new("contract dispute", "india", Role::Citizen),
        display.clone(),
        settings_for(&server, Profile::Guidance),
    );

    submitter.submit().await;

    api_mock.assert();
    let history = display.history();
    assert_eq!(history[0], "⏳ Connecting to legal server...");

    let shown = display.current().unwrap();
    assert!(shown.starts_with("⚖️ Legal Guidance"));
    assert!(shown.contains("consult a lawyer"));
    assert!(shown.contains("low"));
    assert!(shown.contains("- language detected: en"));
    assert!(!shown.contains("language_detected"));
}

#[tokio::test]
async fn test_analysis_profile_renders_raw_json() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/chat");
        then.status(200).json_body(serde_json::json!({
            "advice": "consult a lawyer",
            "risk": "low"
        }));
    });

    let display = MemoryDisplay::new();
    let submitter = QuerySubmitter::new(
        StaticInput::new("contract dispute", "india", Role::Lawyer),
        display.clone(),
        settings_for(&server, Profile::Analysis),
    );

    submitter.submit().await;

    api_mock.assert();
    assert_eq!(
        display.history()[0],
        "⏳ Analyzing with Royal Legal Intelligence..."
    );

    let shown = display.current().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&shown).unwrap();
    assert_eq!(parsed["advice"], "consult a lawyer");
    assert_eq!(parsed["risk"], "low");
    assert!(shown.contains("\n  \"risk\""));
}

#[tokio::test]
async fn test_server_error_with_json_body_is_still_rendered() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/chat");
        then.status(500)
            .json_body(serde_json::json!({"detail": "Internal Server Error"}));
    });

    let display = MemoryDisplay::new();
    let submitter = QuerySubmitter::new(
        StaticInput::new("contract dispute", "india", Role::Citizen),
        display.clone(),
        settings_for(&server, Profile::Guidance).with_render_style(RenderStyle::List),
    );

    let outcome = submitter.submit().await;

    api_mock.assert();
    assert!(matches!(outcome, Outcome::Rendered(_)));
    assert!(display.current().unwrap().contains("- detail: Internal Server Error"));
}

#[tokio::test]
async fn test_non_json_response_shows_failure_message() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/chat");
        then.status(503).body("Service Unavailable");
    });

    let display = MemoryDisplay::new();
    let submitter = QuerySubmitter::new(
        StaticInput::new("contract dispute", "india", Role::Citizen),
        display.clone(),
        settings_for(&server, Profile::Guidance),
    );

    let outcome = submitter.submit().await;

    api_mock.assert();
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(
        display.current().as_deref(),
        Some("❌ Unable to connect to the legal server.")
    );
}

#[tokio::test]
async fn test_unreachable_server_shows_failure_message() {
    let display = MemoryDisplay::new();
    let submitter = QuerySubmitter::new(
        StaticInput::new("contract dispute", "india", Role::Citizen),
        display.clone(),
        // 連接埠 1 上沒有服務，連線會被拒絕
        SubmitterSettings::from_profile(Profile::Guidance, "http://127.0.0.1:1/chat"),
    );

    let outcome = submitter.submit().await;

    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(
        display.history(),
        vec![
            "⏳ Connecting to legal server...".to_string(),
            "❌ Unable to connect to the legal server.".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_country_outside_configured_list_is_not_sent() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/chat");
        then.status(200).json_body(serde_json::json!({}));
    });

    let display = MemoryDisplay::new();
    let settings = settings_for(&server, Profile::Guidance)
        .with_countries(vec!["india".to_string(), "uk".to_string()]);
    let submitter = QuerySubmitter::new(
        StaticInput::new("tenancy dispute", "france", Role::Citizen),
        display.clone(),
        settings,
    );

    let outcome = submitter.submit().await;

    assert_eq!(outcome, Outcome::Rejected);
    api_mock.assert_hits(0);
}
