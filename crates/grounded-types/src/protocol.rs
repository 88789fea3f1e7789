//! Gemini generateContent API types.
//!
//! Request and response structures for the generative-language endpoint,
//! including the grounding metadata attached to search-augmented responses.
//! Response fields are pervasively optional; the extraction layer maps
//! absent fields to documented defaults instead of failing.

use serde::{Deserialize, Serialize};

/// Request body for a generateContent call.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation turns; a single user turn for one-shot queries.
    pub contents: Vec<Content>,
    /// Tools enabled for this request.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

impl GenerateContentRequest {
    /// Builds a single-turn user request with Google Search grounding enabled.
    pub fn grounded(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: Some(prompt.into()),
                    thought: None,
                }],
            }],
            tools: vec![Tool {
                google_search: Some(GoogleSearch {}),
            }],
        }
    }
}

/// A tool declaration in a generateContent request.
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    /// Google Search grounding. Serialized as `{"googleSearch": {}}`.
    #[serde(rename = "googleSearch")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<GoogleSearch>,
}

/// The Google Search grounding tool. Carries no configuration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GoogleSearch {}

/// Content structure containing role and parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// The role of the content author (e.g., "user", "model").
    #[serde(default)]
    pub role: String,
    /// The parts that make up this content.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single part within content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Optional text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Whether this is a thought/reasoning part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

/// Response from the generateContent endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    /// List of response candidates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,
    /// Token usage metadata.
    #[serde(rename = "usageMetadata")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
    /// Version of the model that generated this response.
    #[serde(rename = "modelVersion")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    /// Unique identifier for this response.
    #[serde(rename = "responseId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
}

/// A single candidate response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// The content of this candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// Reason why generation finished.
    #[serde(rename = "finishReason")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    /// Index of this candidate in the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// Grounding metadata for search-augmented responses.
    #[serde(rename = "groundingMetadata")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Metadata about grounding sources used in a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundingMetadata {
    /// Web search queries that were executed.
    #[serde(rename = "webSearchQueries")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_search_queries: Option<Vec<String>>,
    /// Chunks of grounding information from web sources.
    #[serde(rename = "groundingChunks")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
    /// Support information linking response segments to sources.
    #[serde(rename = "groundingSupports")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grounding_supports: Option<Vec<GroundingSupport>>,
    /// Entry point for search results display.
    #[serde(rename = "searchEntryPoint")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_entry_point: Option<SearchEntryPoint>,
}

/// A chunk of grounding information.
///
/// The source usually arrives as a nested `web` object, but some replies
/// carry `uri`/`title` directly on the chunk; both shapes are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundingChunk {
    /// Web source for this chunk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<WebSource>,
    /// URI when the chunk uses the flat shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Title when the chunk uses the flat shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A web source used for grounding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSource {
    /// URI of the web source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Title of the web page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Support information linking a response segment to source chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundingSupport {
    /// Text segment in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<Segment>,
    /// 0-based indices into the raw grounding chunk list.
    #[serde(rename = "groundingChunkIndices")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grounding_chunk_indices: Option<Vec<i64>>,
    /// Confidence scores for each supporting chunk.
    #[serde(rename = "confidenceScores")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_scores: Option<Vec<f64>>,
}

/// A segment of text in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Start index of the segment.
    #[serde(rename = "startIndex")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<i64>,
    /// End index of the segment.
    #[serde(rename = "endIndex")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_index: Option<i64>,
    /// Text content of the segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Entry point for search results display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEntryPoint {
    /// Rendered HTML content for display.
    #[serde(rename = "renderedContent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_content: Option<String>,
}

/// Token usage metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageMetadata {
    /// Number of tokens in the prompt.
    #[serde(rename = "promptTokenCount")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_token_count: Option<u32>,
    /// Number of tokens in the response candidates.
    #[serde(rename = "candidatesTokenCount")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates_token_count: Option<u32>,
    /// Total token count (prompt + candidates).
    #[serde(rename = "totalTokenCount")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_token_count: Option<u32>,
}
