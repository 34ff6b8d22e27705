//! Prompt assembly: story, video prompt, and image prompt for one scene.
//!
//! Everything here is fixed-table lookup plus string formatting. Visual
//! variety between scenes comes from [`CAMERA_MOVES`] indexed by scene
//! position, never from randomness.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::beats::Beat;
use crate::category::Category;
use crate::continuity::ContinuityBundle;
use crate::error::CoreError;
use crate::source::SourceMeta;
use crate::style::style_preset;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Camera moves cycled by scene index.
pub const CAMERA_MOVES: [&str; 10] = [
    "slow push-in",
    "gentle pull-back reveal",
    "lateral tracking shot",
    "low-angle tilt up",
    "over-the-shoulder follow",
    "static locked-off frame",
    "slow orbit around the subject",
    "handheld close-up",
    "high-angle crane down",
    "smooth dolly left to right",
];

/// Negative prompt used when the caller leaves it empty.
pub const DEFAULT_NEGATIVE_PROMPT: &str = "blurry, low quality, distorted anatomy, extra limbs, text, watermark, logo, jpeg artifacts, flicker, inconsistent character";

/// Placeholder for an empty project title.
const UNTITLED: &str = "Untitled";

/// Placeholder for an empty idea.
const NO_IDEA: &str = "(none)";

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

/// Output frame orientation, inserted verbatim into prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Orientation {
    #[default]
    #[serde(rename = "vertical-9:16")]
    Vertical,
    #[serde(rename = "horizontal-16:9")]
    Horizontal,
    #[serde(rename = "square-1:1")]
    Square,
}

/// Pixel size an image backend should render at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [
        Orientation::Vertical,
        Orientation::Horizontal,
        Orientation::Square,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical-9:16",
            Orientation::Horizontal => "horizontal-16:9",
            Orientation::Square => "square-1:1",
        }
    }

    pub fn dimensions(self) -> Dimensions {
        match self {
            Orientation::Vertical => Dimensions { width: 720, height: 1280 },
            Orientation::Horizontal => Dimensions { width: 1280, height: 720 },
            Orientation::Square => Dimensions { width: 1024, height: 1024 },
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = CoreError;

    /// Accepts the full identifier (`vertical-9:16`), the bare word
    /// (`vertical`), or the ratio (`9:16`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Orientation::ALL
            .into_iter()
            .find(|o| {
                let id = o.as_str();
                let (word, ratio) = id.split_once('-').unwrap_or((id, id));
                needle == id || needle == word || needle == ratio
            })
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown orientation '{}'. Must be one of: {}",
                    s.trim(),
                    Orientation::ALL.map(Orientation::as_str).join(", ")
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// DetailLevel
// ---------------------------------------------------------------------------

/// How much visual detail the prompts ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    Normal,
    #[default]
    High,
    Max,
}

impl DetailLevel {
    pub const ALL: [DetailLevel; 3] = [DetailLevel::Normal, DetailLevel::High, DetailLevel::Max];

    pub fn as_str(self) -> &'static str {
        match self {
            DetailLevel::Normal => "normal",
            DetailLevel::High => "high",
            DetailLevel::Max => "max",
        }
    }

    /// Descriptive phrase inserted into the prompts.
    pub fn phrase(self) -> &'static str {
        match self {
            DetailLevel::Normal => "clean composition, natural detail",
            DetailLevel::High => "high detail, sharp focus, rich textures, realistic materials",
            DetailLevel::Max => {
                "ultra-detailed, intricate micro-detail, sharp focus throughout, lifelike skin and material textures, 8k quality"
            }
        }
    }
}

impl FromStr for DetailLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        DetailLevel::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown detail level '{needle}'. Must be one of: {}",
                    DetailLevel::ALL.map(DetailLevel::as_str).join(", ")
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Everything the assembler needs for one scene.
#[derive(Debug, Clone, Copy)]
pub struct PromptContext<'a> {
    pub scene_index: usize,
    pub total_scenes: usize,
    pub category: Category,
    pub orientation: Orientation,
    pub continuity: &'a ContinuityBundle,
    pub source: &'a SourceMeta,
    pub idea: &'a str,
    pub title: &'a str,
    pub beat: Beat,
    pub scene_secs: u32,
    pub seed: i64,
    pub detail_level: DetailLevel,
    pub negative_prompt: &'a str,
}

/// The three prompt texts for one scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenePrompts {
    pub story: String,
    pub video_prompt: String,
    pub image_prompt: String,
}

/// Camera move for a scene position.
pub fn camera_move(scene_index: usize) -> &'static str {
    CAMERA_MOVES[scene_index % CAMERA_MOVES.len()]
}

/// Display title for a scene card.
pub fn scene_title(scene_index: usize, beat: &Beat) -> String {
    format!("Scene {}: {}", scene_index + 1, beat.title)
}

/// Assemble story, video prompt, and image prompt for one scene.
pub fn build_prompts(ctx: &PromptContext<'_>) -> ScenePrompts {
    let style = style_preset(ctx.category);
    let movement = camera_move(ctx.scene_index);
    let detail = ctx.detail_level.phrase();
    let cues = ctx.source.clone_cues();
    let number = ctx.scene_index + 1;
    let total = ctx.total_scenes;
    let secs = ctx.scene_secs;
    let orientation = ctx.orientation;
    let beat = ctx.beat;
    let continuity = ctx.continuity;

    let title = non_empty_or(ctx.title, UNTITLED);
    let idea = non_empty_or(ctx.idea, NO_IDEA);
    let negative = ctx.negative_prompt.trim();

    let story = format!(
        "Scene {number}/{total} ({secs}s): {beat_title}\n\
         {beat_description}\n\
         Project: {title}\n\
         Idea: {idea}\n\
         Subject: {actor}\n\
         Setting: {setting}\n\
         Mood arc: {mood}",
        beat_title = beat.title,
        beat_description = beat.description,
        actor = continuity.actor_lock,
        setting = continuity.setting_lock,
        mood = continuity.mood_arc,
    );

    let video_prompt = format!(
        "{title} | {category} | scene {number} of {total} | {secs}s | {orientation}\n\
         Beat: {beat_title}. {beat_description}\n\
         Vibe: {vibe}\n\
         Camera: {camera}; move: {movement}\n\
         Lighting: {lighting}\n\
         Detail: {detail}\n\
         Actor lock: {actor}\n\
         Setting lock: {setting}\n\
         Mood arc: {mood}\n\
         Clone cues: {cues}\n\
         Rules: {rules}\n\
         Avoid: {negative}\n\
         Seed: {seed}",
        category = ctx.category.label(),
        beat_title = beat.title,
        beat_description = beat.description,
        vibe = style.vibe,
        camera = style.camera,
        lighting = style.lighting,
        actor = continuity.actor_lock,
        setting = continuity.setting_lock,
        mood = continuity.mood_arc,
        rules = continuity.rules,
        seed = ctx.seed,
    );

    let image_prompt = format!(
        "{beat_description} Key frame for \"{title}\", scene {number} of {total}. \
         {vibe}. {camera}, {movement}. {lighting}. {detail}. \
         Subject: {actor} Setting: {setting} Mood: {mood}. \
         Clone cues: {cues}. Aspect {orientation}. Rules: {rules}",
        beat_description = beat.description,
        vibe = style.vibe,
        camera = style.camera,
        lighting = style.lighting,
        actor = continuity.actor_lock,
        setting = continuity.setting_lock,
        mood = continuity.mood_arc,
        rules = continuity.rules,
    );

    ScenePrompts {
        story,
        video_prompt,
        image_prompt,
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beats::GENERIC_BEATS;
    use crate::continuity::resolve_continuity;
    use crate::source::Platform;

    fn context<'a>(
        continuity: &'a ContinuityBundle,
        source: &'a SourceMeta,
        scene_index: usize,
    ) -> PromptContext<'a> {
        PromptContext {
            scene_index,
            total_scenes: 5,
            category: Category::Survival,
            orientation: Orientation::Vertical,
            continuity,
            source,
            idea: "crossing a frozen river",
            title: "Cold Crossing",
            beat: GENERIC_BEATS[scene_index % GENERIC_BEATS.len()],
            scene_secs: 6,
            seed: 42,
            detail_level: DetailLevel::High,
            negative_prompt: DEFAULT_NEGATIVE_PROMPT,
        }
    }

    // -- camera_move --

    #[test]
    fn camera_moves_cycle_every_ten() {
        assert_eq!(camera_move(0), CAMERA_MOVES[0]);
        assert_eq!(camera_move(9), CAMERA_MOVES[9]);
        assert_eq!(camera_move(10), CAMERA_MOVES[0]);
        assert_eq!(camera_move(23), CAMERA_MOVES[3]);
    }

    // -- build_prompts --

    #[test]
    fn empty_source_degrades_gracefully() {
        let continuity = resolve_continuity(Category::Survival, "", "");
        let source = SourceMeta {
            platform: Platform::Instagram,
            ..Default::default()
        };
        let prompts = build_prompts(&context(&continuity, &source, 0));

        for text in [&prompts.video_prompt, &prompts.image_prompt] {
            assert!(text.contains("Source=Instagram"));
            assert!(!text.contains("Title="));
            assert!(!text.contains("Desc="));
        }
    }

    #[test]
    fn populated_source_adds_title_and_description() {
        let continuity = resolve_continuity(Category::Survival, "Ice", "");
        let source = SourceMeta::from_url("https://tiktok.com/@a/video/1", "Ice", "river crossing");
        let prompts = build_prompts(&context(&continuity, &source, 0));
        assert!(prompts
            .video_prompt
            .contains("Clone cues: Source=TikTok; Title=Ice; Desc=river crossing"));
    }

    #[test]
    fn continuity_and_rules_always_present() {
        let continuity = resolve_continuity(Category::Survival, "", "");
        let source = SourceMeta::default();
        let prompts = build_prompts(&context(&continuity, &source, 2));

        assert!(prompts.video_prompt.contains(&continuity.actor_lock));
        assert!(prompts.video_prompt.contains(&continuity.setting_lock));
        assert!(prompts.video_prompt.contains(&continuity.mood_arc));
        assert!(prompts.video_prompt.contains(&continuity.rules));
        assert!(prompts.image_prompt.contains(&continuity.actor_lock));
        assert!(prompts.image_prompt.contains(&continuity.setting_lock));
        assert!(prompts.image_prompt.contains(&continuity.mood_arc));
        assert!(prompts.image_prompt.contains(&continuity.rules));
        assert!(prompts.story.contains(&continuity.mood_arc));
    }

    #[test]
    fn video_prompt_carries_scene_fields() {
        let continuity = resolve_continuity(Category::Survival, "", "");
        let source = SourceMeta::default();
        let prompts = build_prompts(&context(&continuity, &source, 3));

        assert!(prompts.video_prompt.starts_with(
            "Cold Crossing | Survival | scene 4 of 5 | 6s | vertical-9:16\n"
        ));
        assert!(prompts.video_prompt.contains(&format!("move: {}", CAMERA_MOVES[3])));
        assert!(prompts.video_prompt.contains(DetailLevel::High.phrase()));
        assert!(prompts.video_prompt.contains(style_preset(Category::Survival).vibe));
        assert!(prompts.video_prompt.contains(GENERIC_BEATS[3].description));
        assert!(prompts.video_prompt.ends_with("Seed: 42"));
    }

    #[test]
    fn story_starts_with_beat_heading() {
        let continuity = resolve_continuity(Category::Survival, "", "");
        let source = SourceMeta::default();
        let prompts = build_prompts(&context(&continuity, &source, 0));
        assert!(prompts.story.starts_with("Scene 1/5 (6s): Hook\n"));
        assert!(prompts.story.contains("Idea: crossing a frozen river"));
    }

    #[test]
    fn empty_title_and_idea_use_placeholders() {
        let continuity = resolve_continuity(Category::Movie, "", "");
        let source = SourceMeta::default();
        let mut ctx = context(&continuity, &source, 0);
        ctx.title = "";
        ctx.idea = "  ";
        let prompts = build_prompts(&ctx);
        assert!(prompts.story.contains("Project: Untitled"));
        assert!(prompts.story.contains("Idea: (none)"));
        assert!(prompts.video_prompt.starts_with("Untitled | "));
    }

    #[test]
    fn same_beat_different_index_differs() {
        let continuity = resolve_continuity(Category::Diy, "", "");
        let source = SourceMeta::default();
        let mut first = context(&continuity, &source, 0);
        first.beat = GENERIC_BEATS[0];
        let mut wrapped = context(&continuity, &source, 10);
        wrapped.beat = GENERIC_BEATS[0];
        wrapped.seed = 42 + 170;
        assert_ne!(build_prompts(&first), build_prompts(&wrapped));
    }

    #[test]
    fn assembly_is_deterministic() {
        let continuity = resolve_continuity(Category::Animals, "", "fox den");
        let source = SourceMeta::default();
        let ctx = context(&continuity, &source, 1);
        assert_eq!(build_prompts(&ctx), build_prompts(&ctx));
    }

    // -- Orientation --

    #[test]
    fn orientation_parses_aliases() {
        assert_eq!("vertical-9:16".parse::<Orientation>().unwrap(), Orientation::Vertical);
        assert_eq!("Horizontal".parse::<Orientation>().unwrap(), Orientation::Horizontal);
        assert_eq!("1:1".parse::<Orientation>().unwrap(), Orientation::Square);
        assert!("diagonal".parse::<Orientation>().is_err());
    }

    #[test]
    fn orientation_dimensions_match_aspect() {
        assert_eq!(Orientation::Vertical.dimensions(), Dimensions { width: 720, height: 1280 });
        assert_eq!(Orientation::Horizontal.dimensions(), Dimensions { width: 1280, height: 720 });
        let square = Orientation::Square.dimensions();
        assert_eq!(square.width, square.height);
    }

    #[test]
    fn orientation_serializes_verbatim() {
        let json = serde_json::to_string(&Orientation::Horizontal).unwrap();
        assert_eq!(json, "\"horizontal-16:9\"");
    }

    // -- DetailLevel --

    #[test]
    fn every_detail_level_has_phrase() {
        for level in DetailLevel::ALL {
            assert!(!level.phrase().is_empty());
        }
        assert_eq!("MAX".parse::<DetailLevel>().unwrap(), DetailLevel::Max);
        assert!("extreme".parse::<DetailLevel>().is_err());
    }
}
