//! Per-category visual style presets.

use serde::Serialize;

use crate::category::Category;

/// Fixed vibe / camera / lighting description for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StylePreset {
    pub vibe: &'static str,
    pub camera: &'static str,
    pub lighting: &'static str,
}

/// Look up the style preset for a category.
pub fn style_preset(category: Category) -> StylePreset {
    match category {
        Category::Bushcraft => StylePreset {
            vibe: "calm, grounded outdoor craftsmanship, ASMR-like focus on hands and materials",
            camera: "35mm documentary framing, close-ups on tools and hands, steady wide establishing shots",
            lighting: "soft forest daylight filtered through canopy, warm firelight in evening beats",
        },
        Category::Survival => StylePreset {
            vibe: "tense, high-stakes wilderness survival with urgency and grit",
            camera: "handheld 28mm, tight reaction shots, sweeping wides to show isolation",
            lighting: "harsh overcast daylight, cold blue dusk, flickering fire as the only warm source",
        },
        Category::Shelter => StylePreset {
            vibe: "methodical, satisfying build progression from raw materials to finished shelter",
            camera: "tripod wides for progress, top-down detail shots, slow reveal of the structure",
            lighting: "golden-hour side light emphasizing texture, cozy interior glow at completion",
        },
        Category::Diy => StylePreset {
            vibe: "clean, satisfying maker content with clear step-by-step progress",
            camera: "overhead bench shots, macro detail inserts, smooth slider moves",
            lighting: "bright even workshop lighting with soft key light and minimal shadows",
        },
        Category::Movie => StylePreset {
            vibe: "cinematic, dramatic storytelling with a clear emotional throughline",
            camera: "anamorphic 2.39-style framing, shallow depth of field, motivated camera moves",
            lighting: "high-contrast cinematic lighting, practical sources, teal-and-orange grade",
        },
        Category::Animals => StylePreset {
            vibe: "respectful nature documentary observing natural behavior",
            camera: "long-lens telephoto from a distance, patient locked-off shots, low ground-level angles",
            lighting: "natural ambient light, soft morning or late-afternoon sun, no artificial flashes",
        },
    }
}
