//! Output formatting for search responses.
//!
//! Pure projections of [`SearchResponse`] into a JSON document or markdown
//! text with a trailing citation list.

use serde::Serialize;

use grounded_types::SearchResponse;

#[derive(Serialize)]
struct JsonReport<'a> {
    response_text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    citations: Option<Vec<CitationEntry<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grounding_metadata: Option<MetadataReport<'a>>,
}

#[derive(Serialize)]
struct CitationEntry<'a> {
    index: usize,
    uri: &'a str,
    title: &'a str,
}

#[derive(Serialize)]
struct MetadataReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    web_search_queries: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grounding_chunks: Option<Vec<CitationEntry<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grounding_supports: Option<Vec<SupportEntry<'a>>>,
}

#[derive(Serialize)]
struct SupportEntry<'a> {
    segment: SegmentEntry<'a>,
    grounding_chunk_indices: &'a [usize],
}

#[derive(Serialize)]
struct SegmentEntry<'a> {
    start_index: usize,
    end_index: usize,
    text: &'a str,
}

/// Renders the response as a pretty-printed JSON document.
///
/// `citations` is omitted when empty. `grounding_metadata` is emitted only
/// when `include_metadata` is set and at least one of its sub-fields is
/// non-empty.
pub fn to_json(response: &SearchResponse, include_metadata: bool) -> String {
    let citations = (!response.citations.is_empty()).then(|| citation_entries(response));

    let grounding_metadata = if include_metadata {
        build_metadata(response)
    } else {
        None
    };

    let report = JsonReport {
        response_text: &response.response_text,
        citations,
        grounding_metadata,
    };

    serde_json::to_string_pretty(&report).unwrap_or_default()
}

/// Renders the response as markdown: the answer text, then (when citations
/// exist) a `## Citations` section with one numbered link per source.
pub fn to_markdown(response: &SearchResponse) -> String {
    let mut out = response.response_text.clone();

    if !response.citations.is_empty() {
        out.push_str("\n\n## Citations\n");
        for citation in &response.citations {
            out.push('\n');
            if citation.title.is_empty() {
                out.push_str(&format!(
                    "{}. [{}]({})",
                    citation.index, citation.uri, citation.uri
                ));
            } else {
                out.push_str(&format!(
                    "{}. [{}]({})",
                    citation.index, citation.title, citation.uri
                ));
            }
        }
    }

    out
}

fn citation_entries(response: &SearchResponse) -> Vec<CitationEntry<'_>> {
    response
        .citations
        .iter()
        .map(|citation| CitationEntry {
            index: citation.index,
            uri: &citation.uri,
            title: &citation.title,
        })
        .collect()
}

fn build_metadata(response: &SearchResponse) -> Option<MetadataReport<'_>> {
    let web_search_queries = response.web_search_queries.as_deref();
    let grounding_chunks = (!response.citations.is_empty()).then(|| citation_entries(response));
    let grounding_supports = response.grounding_segments.as_deref().map(|segments| {
        segments
            .iter()
            .map(|segment| SupportEntry {
                segment: SegmentEntry {
                    start_index: segment.start_index,
                    end_index: segment.end_index,
                    text: &segment.text,
                },
                grounding_chunk_indices: &segment.chunk_indices,
            })
            .collect()
    });

    if web_search_queries.is_none() && grounding_chunks.is_none() && grounding_supports.is_none() {
        return None;
    }

    Some(MetadataReport {
        web_search_queries,
        grounding_chunks,
        grounding_supports,
    })
}
