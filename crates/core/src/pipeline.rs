//! End-to-end scene generation for a single request.
//!
//! Runs classify -> continuity -> beats -> prompts and returns the full
//! batch. Stateless: each call derives everything from its request.

use serde::Serialize;

use crate::beats::build_beats;
use crate::category::{Category, CategoryChoice, CategorySource};
use crate::continuity::{resolve_continuity, ContinuityBundle};
use crate::prompt::{
    build_prompts, scene_title, DetailLevel, Dimensions, Orientation, PromptContext,
    DEFAULT_NEGATIVE_PROMPT,
};
use crate::scene::{scene_count, scene_seed, SceneOutput, SceneRequest};
use crate::source::SourceMeta;
use crate::style::{style_preset, StylePreset};

/// Default total video length in seconds.
pub const DEFAULT_TOTAL_DURATION_SECS: u32 = 30;

/// Default length of each scene in seconds.
pub const DEFAULT_SECS_PER_SCENE: u32 = 6;

/// User-level inputs for one generation action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub idea: String,
    pub title: String,
    pub source: SourceMeta,
    pub category: CategoryChoice,
    pub orientation: Orientation,
    pub total_duration_secs: u32,
    pub secs_per_scene: u32,
    pub detail_level: DetailLevel,
    pub base_seed: i64,
    /// Empty means "use the default negative prompt".
    pub negative_prompt: String,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            idea: String::new(),
            title: String::new(),
            source: SourceMeta::default(),
            category: CategoryChoice::Auto,
            orientation: Orientation::default(),
            total_duration_secs: DEFAULT_TOTAL_DURATION_SECS,
            secs_per_scene: DEFAULT_SECS_PER_SCENE,
            detail_level: DetailLevel::default(),
            base_seed: 0,
            negative_prompt: String::new(),
        }
    }
}

impl GenerationRequest {
    /// Number of scenes this request expands to.
    pub fn scene_count(&self) -> usize {
        scene_count(self.total_duration_secs, self.secs_per_scene)
    }

    /// Text fed to the classifier: source title, description, and idea.
    pub fn classifier_text(&self) -> String {
        format!("{} {}", self.source.classifier_text(), self.idea.trim())
    }

    /// Derive the per-scene parameters for `category`.
    pub fn scene_requests(&self, category: Category) -> Vec<SceneRequest> {
        let total = self.scene_count();
        (0..total)
            .map(|index| SceneRequest {
                index,
                total,
                category,
                orientation: self.orientation,
                detail_level: self.detail_level,
                seed: scene_seed(self.base_seed, index),
            })
            .collect()
    }
}

/// All scene cards produced for one request plus the shared context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneBatch {
    pub category: Category,
    pub category_source: CategorySource,
    pub continuity: ContinuityBundle,
    pub style: StylePreset,
    pub orientation: Orientation,
    pub dimensions: Dimensions,
    pub scene_count: usize,
    pub secs_per_scene: u32,
    pub scenes: Vec<SceneOutput>,
}

/// Generate every scene card for a request.
pub fn generate_scenes(request: &GenerationRequest) -> SceneBatch {
    let (category, category_source) = request.category.resolve(&request.classifier_text());
    let continuity = resolve_continuity(category, &request.source.title, &request.idea);
    let scene_requests = request.scene_requests(category);
    let beats = build_beats(scene_requests.len(), category);

    let negative_prompt = if request.negative_prompt.trim().is_empty() {
        DEFAULT_NEGATIVE_PROMPT
    } else {
        request.negative_prompt.trim()
    };

    let scenes: Vec<SceneOutput> = scene_requests
        .iter()
        .zip(beats)
        .map(|(scene, beat)| {
            let prompts = build_prompts(&PromptContext {
                scene_index: scene.index,
                total_scenes: scene.total,
                category: scene.category,
                orientation: scene.orientation,
                continuity: &continuity,
                source: &request.source,
                idea: &request.idea,
                title: &request.title,
                beat,
                scene_secs: request.secs_per_scene,
                seed: scene.seed,
                detail_level: scene.detail_level,
                negative_prompt,
            });

            SceneOutput {
                index: scene.index,
                title: scene_title(scene.index, &beat),
                story: prompts.story,
                video_prompt: prompts.video_prompt,
                image_prompt: prompts.image_prompt,
                negative_prompt: negative_prompt.to_string(),
                seed: scene.seed,
            }
        })
        .collect();

    SceneBatch {
        category,
        category_source,
        continuity,
        style: style_preset(category),
        orientation: request.orientation,
        dimensions: request.orientation.dimensions(),
        scene_count: scenes.len(),
        secs_per_scene: request.secs_per_scene,
        scenes,
    }
}
