//! Continuity locks that keep subject, setting, and mood consistent
//! across every scene of a request.

use serde::Serialize;

use crate::category::Category;

/// Rules appended to every continuity bundle regardless of category.
pub const CONTINUITY_RULES: &str =
    "Realistic physics. Keep continuity. No text/watermarks/logos. No random costume or environment jumps.";

/// Subject, setting, and mood constraints shared by all scenes of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContinuityBundle {
    pub actor_lock: String,
    pub setting_lock: String,
    pub mood_arc: String,
    pub rules: String,
}

/// Resolve the continuity bundle for a category.
///
/// The actor lock carries the source title and the user's idea as flavor
/// text when they are non-empty.
pub fn resolve_continuity(category: Category, source_title: &str, idea: &str) -> ContinuityBundle {
    let mut actor_lock = actor_lock(category).to_string();

    let source_title = source_title.trim();
    if !source_title.is_empty() {
        actor_lock.push_str(&format!(" Source inspiration: {source_title}."));
    }
    let idea = idea.trim();
    if !idea.is_empty() {
        actor_lock.push_str(&format!(" Idea: {idea}."));
    }

    ContinuityBundle {
        actor_lock,
        setting_lock: setting_lock(category).to_string(),
        mood_arc: mood_arc(category).to_string(),
        rules: CONTINUITY_RULES.to_string(),
    }
}

fn actor_lock(category: Category) -> &'static str {
    match category {
        Category::Animals => {
            "Same wild animal subject across all scenes (species-accurate markings, consistent size and features)."
        }
        Category::Diy => {
            "Same craftsperson across all scenes (consistent face/hands, same outfit: dark t-shirt + apron, same workspace behavior)."
        }
        Category::Bushcraft | Category::Shelter | Category::Survival => {
            "Same outdoors person across all scenes (consistent identity, same outfit: olive jacket, cargo pants, boots, backpack)."
        }
        Category::Movie => {
            "Same main character across all scenes (consistent identity, outfit, hairstyle, props)."
        }
    }
}

fn setting_lock(category: Category) -> &'static str {
    match category {
        Category::Animals => {
            "Same natural habitat throughout; camera keeps respectful distance; time-of-day evolves logically."
        }
        Category::Diy => {
            "Same clean workshop and workbench throughout; tools remain consistent; lighting stays coherent."
        }
        _ => {
            "Same world continuity; location evolves logically scene-to-scene; weather/time shifts gradually."
        }
    }
}

fn mood_arc(category: Category) -> &'static str {
    match category {
        Category::Survival => "Rising tension → decision → action → relief.",
        Category::Bushcraft | Category::Shelter => {
            "Calm focus → steady progress → satisfying completion."
        }
        Category::Diy => "Clean progress beats → satisfying reveal.",
        Category::Animals => "Observational calm → behavior highlight → calm exit.",
        Category::Movie => "Cinematic build-up → turning point → resolution.",
    }
}
