//! # Grounded Types
//!
//! Core types for the grounded web-search tool:
//!
//! - **`protocol`** - Gemini generateContent wire types, including the
//!   grounding metadata attached to search-augmented answers
//! - **`models`** - the strict domain model the rest of the workspace
//!   operates on ([`Citation`], [`GroundingSegment`], [`SearchResponse`])
//!
//! `grounded-types` sits at the bottom of the dependency graph; every other
//! crate in the workspace depends on it and nothing here performs I/O.

pub mod models;
pub mod protocol;

pub use models::{Citation, GroundingSegment, SearchResponse};
