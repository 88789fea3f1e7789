use grounded_client::{ClientError, GeminiClient};
use grounded_types::protocol::GenerateContentRequest;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn sends_grounded_request_and_decodes_reply() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "tools": [{"googleSearch": {}}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Spain won euro 2024."}]
                },
                "finishReason": "STOP",
                "groundingMetadata": {
                    "webSearchQueries": ["euro 2024 winner"],
                    "groundingChunks": [
                        {"web": {"uri": "https://uefa.example/final", "title": "UEFA"}}
                    ],
                    "groundingSupports": [{
                        "segment": {"startIndex": 0, "endIndex": 20, "text": "Spain won euro 2024."},
                        "groundingChunkIndices": [0]
                    }]
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", server.uri()).unwrap();
    let request = GenerateContentRequest::grounded("Who won euro 2024?");
    let response = client
        .generate_content("gemini-2.5-flash", &request)
        .await
        .unwrap();

    let candidates = response.candidates.unwrap();
    let content = candidates[0].content.as_ref().unwrap();
    assert_eq!(content.parts[0].text.as_deref(), Some("Spain won euro 2024."));
    assert!(candidates[0].grounding_metadata.is_some());
}

#[tokio::test]
async fn non_success_status_preserves_body_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string("API key not valid. Please pass a valid API key."),
        )
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("bad-key", server.uri()).unwrap();
    let request = GenerateContentRequest::grounded("hello");
    let err = client
        .generate_content("gemini-2.5-flash", &request)
        .await
        .unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("API key not valid"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_body_is_an_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", server.uri()).unwrap();
    let request = GenerateContentRequest::grounded("hello");
    let err = client
        .generate_content("gemini-2.5-flash", &request)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[test]
fn empty_api_key_is_rejected() {
    let err = GeminiClient::new("").unwrap_err();
    assert!(matches!(err, ClientError::MissingApiKey));
    assert!(err.to_string().contains("GEMINI_API_KEY"));
}
