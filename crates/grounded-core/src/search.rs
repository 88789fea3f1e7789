//! Query execution with Google Search grounding.
//!
//! Issues one generateContent request with the googleSearch tool enabled and
//! projects the reply into the [`SearchResponse`] domain model. Extraction is
//! deliberately lenient: absent or malformed metadata degrades to empty
//! defaults, never to an error.

use grounded_client::GeminiClient;
use grounded_types::protocol::{GenerateContentRequest, GenerateContentResponse, GroundingChunk};
use grounded_types::{Citation, GroundingSegment, SearchResponse};

use crate::error::SearchError;

/// Queries the model with Google Search grounding enabled.
///
/// Exactly one request is made; any client failure is wrapped into
/// [`SearchError::Query`] with its original message preserved.
pub async fn query_with_grounding(
    client: &GeminiClient,
    prompt: &str,
    model: &str,
) -> Result<SearchResponse, SearchError> {
    let request = GenerateContentRequest::grounded(prompt);
    let response = client
        .generate_content(model, &request)
        .await
        .map_err(|e| SearchError::Query(e.to_string()))?;

    Ok(extract_response(&response))
}

/// Projects a raw generateContent reply into the domain model.
///
/// A missing candidate, content, or parts list yields an empty answer text.
/// Citations keep position-based 1-based indices: a chunk at raw position
/// `i` that resolves to a URI becomes `Citation { index: i + 1, .. }`, and
/// chunks without a URI are skipped without consuming an index, so
/// `chunk_indices + 1` keeps pointing at the right citation even across
/// gaps.
pub fn extract_response(response: &GenerateContentResponse) -> SearchResponse {
    let candidate = response.candidates.as_ref().and_then(|c| c.first());

    let response_text = candidate
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .collect::<String>()
        })
        .unwrap_or_default();

    let mut citations = Vec::new();
    let mut web_search_queries = None;
    let mut grounding_segments = None;

    if let Some(metadata) = candidate.and_then(|c| c.grounding_metadata.as_ref()) {
        if let Some(chunks) = &metadata.grounding_chunks {
            for (position, chunk) in chunks.iter().enumerate() {
                match resolve_chunk_source(chunk) {
                    (Some(uri), title) if !uri.is_empty() => citations.push(Citation {
                        index: position + 1,
                        uri: uri.to_string(),
                        title: title.unwrap_or_default().to_string(),
                    }),
                    _ => {
                        tracing::debug!(position, "skipping grounding chunk without uri");
                    }
                }
            }
        }

        web_search_queries = metadata
            .web_search_queries
            .clone()
            .filter(|queries| !queries.is_empty());

        if let Some(supports) = &metadata.grounding_supports {
            let segments: Vec<GroundingSegment> = supports
                .iter()
                .filter_map(|support| {
                    let segment = support.segment.as_ref()?;
                    Some(GroundingSegment {
                        start_index: offset_or_zero(segment.start_index),
                        end_index: offset_or_zero(segment.end_index),
                        text: segment.text.clone().unwrap_or_default(),
                        chunk_indices: support
                            .grounding_chunk_indices
                            .as_deref()
                            .unwrap_or_default()
                            .iter()
                            .filter_map(|&idx| usize::try_from(idx).ok())
                            .collect(),
                    })
                })
                .collect();

            if !segments.is_empty() {
                grounding_segments = Some(segments);
            }
        }
    }

    SearchResponse {
        response_text,
        citations,
        web_search_queries,
        grounding_segments,
    }
}

/// Resolves `(uri, title)` from a chunk, preferring the nested `web` object
/// over the flat shape. A present `web` object wins even when its fields are
/// empty.
fn resolve_chunk_source(chunk: &GroundingChunk) -> (Option<&str>, Option<&str>) {
    match &chunk.web {
        Some(web) => (web.uri.as_deref(), web.title.as_deref()),
        None => (chunk.uri.as_deref(), chunk.title.as_deref()),
    }
}

fn offset_or_zero(value: Option<i64>) -> usize {
    value
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or_default()
}
