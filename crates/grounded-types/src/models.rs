//! Domain model for grounded search responses.
//!
//! These are the strict counterparts of the loosely structured wire types in
//! [`crate::protocol`]; the extraction layer in `grounded-core` is the only
//! place that bridges the two.

use serde::{Deserialize, Serialize};

/// One attributed web source.
///
/// `index` is 1-based and equals the position of the underlying chunk in the
/// raw chunk list plus one. Chunks dropped for lacking a URI leave gaps in
/// the numbering; the position-based mapping must hold regardless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Citation number (1-based).
    pub index: usize,
    /// Web URI of the source.
    pub uri: String,
    /// Title of the source (may be empty).
    pub title: String,
}

/// A span of the answer text supported by one or more source chunks.
///
/// `chunk_indices` are 0-based positions into the raw chunk list; the
/// matching citation index is `chunk_index + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSegment {
    /// Starting byte offset in the response text.
    pub start_index: usize,
    /// Ending byte offset in the response text.
    pub end_index: usize,
    /// The spanned substring, informational only.
    pub text: String,
    /// Raw chunk positions supporting this span, in reply order.
    pub chunk_indices: Vec<usize>,
}

/// A complete answer with citation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The answer text. Rewritten in place when inline citations are spliced.
    pub response_text: String,
    /// Attributed sources, possibly empty.
    pub citations: Vec<Citation>,
    /// Search queries the service executed. `None` when none were reported;
    /// never `Some(vec![])`.
    pub web_search_queries: Option<Vec<String>>,
    /// Supported spans of the answer. `None` when no usable supports came
    /// back; never `Some(vec![])`. Callers key splicing off presence.
    pub grounding_segments: Option<Vec<GroundingSegment>>,
}
