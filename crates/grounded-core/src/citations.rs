//! Inline citation splicing.
//!
//! Inserts `[N](uri)` markers into an answer at grounding-segment
//! boundaries. Edits are applied from the highest end offset downward, so
//! every insertion lands in a suffix that later (lower-offset) insertions
//! have not shifted yet.

use std::collections::HashMap;

use grounded_types::{Citation, GroundingSegment};

/// Adds inline citation markers to `text`.
///
/// Each segment with resolvable citations gets a group like
/// `[1](https://a), [2](https://b)` spliced in right after its `end_index`.
/// Returns the input unchanged when there are no segments or no citations.
pub fn add_inline_citations(
    text: &str,
    segments: Option<&[GroundingSegment]>,
    citations: &[Citation],
) -> String {
    let segments = match segments {
        Some(segments) if !segments.is_empty() && !citations.is_empty() => segments,
        _ => return text.to_string(),
    };

    let citation_uris: HashMap<usize, &str> = citations
        .iter()
        .map(|citation| (citation.index, citation.uri.as_str()))
        .collect();

    // Highest end offset first. The sort is stable, so segments sharing an
    // end offset keep their input order and stack in that order.
    let mut ordered: Vec<&GroundingSegment> = segments.iter().collect();
    ordered.sort_by(|a, b| b.end_index.cmp(&a.end_index));

    let mut text = text.to_string();
    for segment in ordered {
        if segment.chunk_indices.is_empty() {
            continue;
        }

        let markers: Vec<String> = segment
            .chunk_indices
            .iter()
            .filter_map(|&chunk_index| {
                // chunk indices are 0-based, citation indices 1-based
                let citation_index = chunk_index + 1;
                citation_uris
                    .get(&citation_index)
                    .map(|uri| format!("[{citation_index}]({uri})"))
            })
            .collect();

        if markers.is_empty() {
            continue;
        }

        let offset = segment.end_index.min(text.len());
        if !text.is_char_boundary(offset) {
            tracing::debug!(offset, "segment end is not a character boundary, skipping");
            continue;
        }
        text.insert_str(offset, &markers.join(", "));
    }

    text
}
