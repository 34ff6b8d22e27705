//! Scene timing, seeding, per-scene records, and boundary validation.

use serde::Serialize;

use crate::category::Category;
use crate::error::CoreError;
use crate::prompt::{DetailLevel, Orientation};
use crate::source::SourceMeta;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Seed offset between consecutive scenes.
pub const SEED_STRIDE: i64 = 17;

/// Hard ceiling on scenes per request, enforced at the API boundary.
pub const MAX_SCENES_PER_REQUEST: usize = 200;

/// Maximum length for the user's idea in characters.
pub const MAX_IDEA_LENGTH: usize = 2_000;

/// Maximum length for negative prompts in characters.
pub const MAX_NEGATIVE_PROMPT_LENGTH: usize = 5_000;

/// Maximum length of the project title and of each source metadata field.
pub const MAX_TITLE_LENGTH: usize = 2_000;

// ---------------------------------------------------------------------------
// Timing and seeding
// ---------------------------------------------------------------------------

/// Number of scenes needed to cover `total_duration_secs`.
///
/// Rounds up and always returns at least 1.
pub fn scene_count(total_duration_secs: u32, secs_per_scene: u32) -> usize {
    if total_duration_secs == 0 || secs_per_scene == 0 {
        return 1;
    }
    total_duration_secs.div_ceil(secs_per_scene).max(1) as usize
}

/// Seed for the scene at `index`: `base_seed + index * 17`.
///
/// Wraps on overflow so extreme base seeds still yield a value.
pub fn scene_seed(base_seed: i64, index: usize) -> i64 {
    base_seed.wrapping_add((index as i64).wrapping_mul(SEED_STRIDE))
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Per-scene parameters derived from the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneRequest {
    pub index: usize,
    pub total: usize,
    pub category: Category,
    pub orientation: Orientation,
    pub detail_level: DetailLevel,
    pub seed: i64,
}

/// Finished scene card. Not mutated after assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneOutput {
    pub index: usize,
    pub title: String,
    pub story: String,
    pub video_prompt: String,
    pub image_prompt: String,
    pub negative_prompt: String,
    pub seed: i64,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that both durations are at least one second.
pub fn validate_durations(total_duration_secs: i64, secs_per_scene: i64) -> Result<(), CoreError> {
    if total_duration_secs < 1 {
        return Err(CoreError::Validation(format!(
            "total_duration_secs must be >= 1, got {total_duration_secs}"
        )));
    }
    if secs_per_scene < 1 {
        return Err(CoreError::Validation(format!(
            "secs_per_scene must be >= 1, got {secs_per_scene}"
        )));
    }
    if total_duration_secs > i64::from(u32::MAX) || secs_per_scene > i64::from(u32::MAX) {
        return Err(CoreError::Validation(
            "durations must fit in 32 bits".to_string(),
        ));
    }
    Ok(())
}

/// Validate that a scene count does not exceed [`MAX_SCENES_PER_REQUEST`].
pub fn validate_scene_count(n: usize) -> Result<(), CoreError> {
    if n > MAX_SCENES_PER_REQUEST {
        return Err(CoreError::Validation(format!(
            "Request would produce {n} scenes; maximum is {MAX_SCENES_PER_REQUEST}"
        )));
    }
    Ok(())
}

/// Validate the idea text: length check only (can be empty).
pub fn validate_idea(text: &str) -> Result<(), CoreError> {
    let len = text.chars().count();
    if len > MAX_IDEA_LENGTH {
        return Err(CoreError::Validation(format!(
            "Idea exceeds maximum length of {MAX_IDEA_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate the project title: length check only (can be empty).
pub fn validate_title(text: &str) -> Result<(), CoreError> {
    validate_field_length("Title", text, MAX_TITLE_LENGTH)
}

/// Validate scraped source metadata. Every field is copied into each scene,
/// so each one is capped at [`MAX_TITLE_LENGTH`].
pub fn validate_source_meta(source: &SourceMeta) -> Result<(), CoreError> {
    validate_field_length("Source URL", &source.url, MAX_TITLE_LENGTH)?;
    validate_field_length("Source title", &source.title, MAX_TITLE_LENGTH)?;
    validate_field_length("Source description", &source.description, MAX_TITLE_LENGTH)
}

fn validate_field_length(field: &str, text: &str, max: usize) -> Result<(), CoreError> {
    let len = text.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {max} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate a negative prompt: length check only (can be empty).
pub fn validate_negative_prompt(text: &str) -> Result<(), CoreError> {
    let len = text.chars().count();
    if len > MAX_NEGATIVE_PROMPT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Negative prompt exceeds maximum length of {MAX_NEGATIVE_PROMPT_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
