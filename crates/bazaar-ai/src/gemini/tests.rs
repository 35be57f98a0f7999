//! Tests for the Gemini client against a mock Generative Language API.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::content::{Part, Turn};
use crate::{AiClient, AiError, ToolDefinition};

const MODEL_PATH: &str = "/models/gemini-2.5-flash:generateContent";

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(GeminiConfig::new("test-key").with_base_url(server.uri()))
}

fn dealer_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_dealer_inventory".into(),
        description: "Dealer stock".into(),
        parameters: None,
    }
}

#[tokio::test]
async fn text_reply_and_usage_are_parsed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }],
            "systemInstruction": { "parts": [{ "text": "be nice" }] },
            "tools": [{ "functionDeclarations": [{ "name": "get_dealer_inventory" }] }],
            "generationConfig": { "temperature": 0.7 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Welcome to Auto Bazaar!" }] }
            }],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 7 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .send_message(&[Turn::user("hello")], "be nice", &[dealer_tool()])
        .await
        .unwrap();

    assert_eq!(response.part, Some(Part::Text("Welcome to Auto Bazaar!".into())));
    assert_eq!(response.usage.input_tokens, 12);
    assert_eq!(response.usage.output_tokens, 7);
}

#[tokio::test]
async fn function_call_reply_is_parsed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "functionCall": { "name": "get_dealer_inventory", "args": {} } }]
                }
            }]
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .send_message(&[Turn::user("I need a truck")], "sys", &[dealer_tool()])
        .await
        .unwrap();

    match response.part {
        Some(Part::FunctionCall(call)) => assert_eq!(call.name, "get_dealer_inventory"),
        other => panic!("expected function call, got {other:?}"),
    }
    assert_eq!(response.usage.total_tokens(), 0);
}

#[tokio::test]
async fn missing_candidates_yield_no_part() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .send_message(&[Turn::user("hi")], "sys", &[])
        .await
        .unwrap();
    assert!(response.part.is_none());
}

#[tokio::test]
async fn unrecognised_first_part_yields_no_part() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "executableCode": {} }, { "text": "late" }] } }]
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .send_message(&[Turn::user("hi")], "sys", &[])
        .await
        .unwrap();
    assert!(response.part.is_none());
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(&[Turn::user("hi")], "sys", &[])
        .await
        .unwrap_err();
    match err {
        AiError::ApiError(msg) => {
            assert!(msg.contains("500"));
            assert!(msg.contains("boom"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn too_many_requests_maps_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(&[Turn::user("hi")], "sys", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::RateLimited));
}

#[tokio::test]
async fn non_json_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(&[Turn::user("hi")], "sys", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::ParseError(_)));
}

#[tokio::test]
async fn missing_api_key_skips_the_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = GeminiClient::new(GeminiConfig::new("").with_base_url(server.uri()));
    assert!(!client.is_configured());
    assert!(client_for(&server).is_configured());
    let err = client
        .send_message(&[Turn::user("hi")], "sys", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::NotConfigured));
}

#[tokio::test]
async fn unreachable_endpoint_is_network_error() {
    let client =
        GeminiClient::new(GeminiConfig::new("test-key").with_base_url("http://127.0.0.1:1"));
    let err = client
        .send_message(&[Turn::user("hi")], "sys", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::NetworkError(_)));
}

#[test]
fn request_without_tools_omits_tools_key() {
    let client = GeminiClient::new(GeminiConfig::new("k").with_max_tokens(Some(256)));
    let turns = [Turn::user("hi")];
    let body = serde_json::to_value(client.build_request_body(&turns, "sys", &[])).unwrap();

    assert!(body.get("tools").is_none());
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 256);
    assert_eq!(body["systemInstruction"]["parts"][0]["text"], "sys");
}

#[test]
fn api_url_uses_model_and_trims_slash() {
    let client = GeminiClient::new(
        GeminiConfig::new("k")
            .with_base_url("http://localhost:9000/v1beta/")
            .with_model("gemini-pro"),
    );
    assert_eq!(
        client.api_url(),
        "http://localhost:9000/v1beta/models/gemini-pro:generateContent"
    );
}

#[test]
fn debug_redacts_api_key() {
    let config = GeminiConfig::new("super-secret");
    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("[REDACTED]"));
}
