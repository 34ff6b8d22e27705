//! Handlers for scene card generation and category classification.
//!
//! Request bodies arrive with loosely typed string options; they are parsed
//! into the core's typed [`GenerationRequest`] before the pipeline runs.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use scenecards_core::category::{
    category_scores, classify, Category, CategoryChoice, CategoryScore,
};
use scenecards_core::error::CoreError;
use scenecards_core::pipeline::{
    generate_scenes as run_pipeline, GenerationRequest, DEFAULT_SECS_PER_SCENE,
    DEFAULT_TOTAL_DURATION_SECS,
};
use scenecards_core::prompt::{DetailLevel, Orientation};
use scenecards_core::scene;
use scenecards_core::source::{Platform, SourceMeta};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum length of text accepted by the classify endpoint.
pub const MAX_CLASSIFY_TEXT_LENGTH: usize = 10_000;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Scraped source metadata supplied by the caller.
#[derive(Debug, Default, Deserialize)]
pub struct SourceInput {
    #[serde(default)]
    pub url: String,
    /// Detected from `url` when omitted.
    pub platform: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Request body for generating scene cards.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateScenesRequest {
    #[serde(default)]
    pub idea: String,
    #[serde(default)]
    pub title: String,
    pub source: Option<SourceInput>,
    /// `auto` or a category identifier/label.
    pub category: Option<String>,
    pub orientation: Option<String>,
    pub total_duration_secs: Option<i64>,
    pub secs_per_scene: Option<i64>,
    pub detail_level: Option<String>,
    pub base_seed: Option<i64>,
    pub negative_prompt: Option<String>,
}

/// Request body for classifying free text.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub text: String,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Classification result with per-category scores.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub category: Category,
    pub label: &'static str,
    pub scores: Vec<CategoryScore>,
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

impl SourceInput {
    fn into_source_meta(self) -> Result<SourceMeta, CoreError> {
        let platform = match self.platform.as_deref().map(str::trim) {
            Some(p) if !p.is_empty() => p.parse::<Platform>()?,
            _ => Platform::detect(&self.url),
        };
        Ok(SourceMeta {
            url: self.url,
            platform,
            title: self.title,
            description: self.description,
        })
    }
}

impl GenerateScenesRequest {
    /// Validate and convert into the core request.
    ///
    /// An empty or missing negative prompt becomes `default_negative_prompt`.
    pub fn into_generation_request(
        self,
        default_negative_prompt: &str,
    ) -> Result<GenerationRequest, CoreError> {
        let total = self
            .total_duration_secs
            .unwrap_or(i64::from(DEFAULT_TOTAL_DURATION_SECS));
        let per_scene = self
            .secs_per_scene
            .unwrap_or(i64::from(DEFAULT_SECS_PER_SCENE));
        scene::validate_durations(total, per_scene)?;
        scene::validate_idea(&self.idea)?;
        scene::validate_title(&self.title)?;

        let negative_prompt = match self.negative_prompt {
            Some(text) if !text.trim().is_empty() => text,
            _ => default_negative_prompt.to_string(),
        };
        scene::validate_negative_prompt(&negative_prompt)?;

        let category = match self.category.as_deref() {
            Some(value) => value.parse::<CategoryChoice>()?,
            None => CategoryChoice::Auto,
        };
        let orientation = match self.orientation.as_deref() {
            Some(value) => value.parse::<Orientation>()?,
            None => Orientation::default(),
        };
        let detail_level = match self.detail_level.as_deref() {
            Some(value) => value.parse::<DetailLevel>()?,
            None => DetailLevel::default(),
        };
        let source = self
            .source
            .map(SourceInput::into_source_meta)
            .transpose()?
            .unwrap_or_default();
        scene::validate_source_meta(&source)?;

        let request = GenerationRequest {
            idea: self.idea,
            title: self.title,
            source,
            category,
            orientation,
            // Range checked by validate_durations above.
            total_duration_secs: total as u32,
            secs_per_scene: per_scene as u32,
            detail_level,
            base_seed: self.base_seed.unwrap_or(0),
            negative_prompt,
        };
        scene::validate_scene_count(request.scene_count())?;

        Ok(request)
    }
}

// ---------------------------------------------------------------------------
// POST /scenes
// ---------------------------------------------------------------------------

/// Generate the full set of scene cards for a request.
pub async fn generate_scenes(
    State(state): State<AppState>,
    Json(body): Json<GenerateScenesRequest>,
) -> AppResult<impl IntoResponse> {
    // CoreError auto-converts to AppError via #[from].
    let request = body.into_generation_request(&state.config.default_negative_prompt)?;
    let batch = run_pipeline(&request);

    tracing::info!(
        category = batch.category.as_str(),
        category_source = ?batch.category_source,
        scene_count = batch.scene_count,
        base_seed = request.base_seed,
        "Generated scene cards"
    );

    Ok(Json(DataResponse { data: batch }))
}

// ---------------------------------------------------------------------------
// POST /scenes/classify
// ---------------------------------------------------------------------------

/// Classify free text and return the per-category keyword scores.
pub async fn classify_text(Json(body): Json<ClassifyRequest>) -> AppResult<impl IntoResponse> {
    let len = body.text.chars().count();
    if len > MAX_CLASSIFY_TEXT_LENGTH {
        return Err(AppError::BadRequest(format!(
            "text exceeds maximum length of {MAX_CLASSIFY_TEXT_LENGTH} characters (got {len})"
        )));
    }

    let category = classify(&body.text);
    let scores = category_scores(&body.text);

    tracing::debug!(category = category.as_str(), "Classified text");

    Ok(Json(DataResponse {
        data: ClassifyResponse {
            category,
            label: category.label(),
            scores,
        },
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
