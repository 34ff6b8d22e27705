//! Deterministic scene-card templating.
//!
//! The pipeline runs left to right: [`category`] picks a genre,
//! [`continuity`] and [`style`] resolve the per-genre tables, [`beats`]
//! lays out the narrative units, and [`prompt`] assembles the final text.
//! [`pipeline`] wires the steps together for a single request.

pub mod beats;
pub mod category;
pub mod continuity;
pub mod error;
pub mod pipeline;
pub mod prompt;
pub mod scene;
pub mod source;
pub mod style;
