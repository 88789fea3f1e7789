//! End-to-end pipeline tests against a mocked generateContent endpoint.

use grounded_client::GeminiClient;
use grounded_core::{add_inline_citations, output, query_with_grounding, SearchError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_reply(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn grounded_reply_is_extracted_spliced_and_rendered() {
    let server = MockServer::start().await;
    mock_reply(
        &server,
        json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Paris is the capital."}]
                },
                "groundingMetadata": {
                    "webSearchQueries": ["capital of france"],
                    "groundingChunks": [
                        {"web": {"uri": "https://a", "title": ""}}
                    ],
                    "groundingSupports": [{
                        "segment": {"startIndex": 0, "endIndex": 21, "text": "Paris is the capital."},
                        "groundingChunkIndices": [0]
                    }]
                }
            }]
        }),
    )
    .await;

    let client = GeminiClient::with_base_url("test-key", server.uri()).unwrap();
    let mut response = query_with_grounding(&client, "capital of France?", "gemini-2.5-flash")
        .await
        .unwrap();

    assert_eq!(response.response_text, "Paris is the capital.");
    assert_eq!(response.citations.len(), 1);
    assert_eq!(response.citations[0].index, 1);

    response.response_text = add_inline_citations(
        &response.response_text,
        response.grounding_segments.as_deref(),
        &response.citations,
    );
    assert_eq!(response.response_text, "Paris is the capital.[1](https://a)");

    let rendered = output::to_markdown(&response);
    assert!(rendered.starts_with("Paris is the capital.[1](https://a)"));
    assert!(rendered.contains("## Citations"));
    assert!(rendered.ends_with("1. [https://a](https://a)"));
}

#[tokio::test]
async fn reply_without_grounding_metadata_still_succeeds() {
    let server = MockServer::start().await;
    mock_reply(
        &server,
        json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Just an answer."}]
                }
            }]
        }),
    )
    .await;

    let client = GeminiClient::with_base_url("test-key", server.uri()).unwrap();
    let response = query_with_grounding(&client, "anything", "gemini-2.5-flash")
        .await
        .unwrap();

    assert_eq!(response.response_text, "Just an answer.");
    assert!(response.citations.is_empty());
    assert!(response.grounding_segments.is_none());

    let value: serde_json::Value =
        serde_json::from_str(&output::to_json(&response, true)).unwrap();
    assert_eq!(value["response_text"], "Just an answer.");
    assert!(value.get("grounding_metadata").is_none());
}

#[tokio::test]
async fn api_failure_is_wrapped_with_original_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", server.uri()).unwrap();
    let err = query_with_grounding(&client, "anything", "gemini-2.5-flash")
        .await
        .unwrap_err();

    let SearchError::Query(message) = err;
    assert!(message.starts_with("API error (500)"));
    assert!(message.contains("internal error"));

    let rendered = format!("{}", SearchError::Query(message));
    assert!(rendered.starts_with("Query failed: "));
}
