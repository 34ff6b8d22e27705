//! Content categories and keyword-overlap classification.
//!
//! Six fixed genres drive every downstream table lookup. Free text is
//! classified by counting keyword substrings per category; a single match
//! is never enough to leave the [`DEFAULT_CATEGORY`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Category used when classification is ambiguous or underspecified.
pub const DEFAULT_CATEGORY: Category = Category::Movie;

/// Minimum keyword matches required for a category to beat the default.
pub const MIN_KEYWORD_MATCHES: usize = 2;

/// Request value that asks for automatic classification.
pub const CATEGORY_AUTO: &str = "auto";

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// One of the six fixed content genres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Bushcraft,
    Survival,
    Shelter,
    Diy,
    Movie,
    Animals,
}

impl Category {
    /// All categories in declaration order. Classification ties resolve to
    /// the earliest entry in this list.
    pub const ALL: [Category; 6] = [
        Category::Bushcraft,
        Category::Survival,
        Category::Shelter,
        Category::Diy,
        Category::Movie,
        Category::Animals,
    ];

    /// Machine-readable identifier, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Bushcraft => "bushcraft",
            Category::Survival => "survival",
            Category::Shelter => "shelter",
            Category::Diy => "diy",
            Category::Movie => "movie",
            Category::Animals => "animals",
        }
    }

    /// Human-facing label shown in category pickers.
    pub fn label(self) -> &'static str {
        match self {
            Category::Bushcraft => "Bushcraft",
            Category::Survival => "Survival",
            Category::Shelter => "Shelter",
            Category::Diy => "DIY",
            Category::Movie => "Movie/Cinematic",
            Category::Animals => "Animals/Wildlife",
        }
    }

    /// Lower-case keywords matched as substrings during classification.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Bushcraft => &[
                "bushcraft", "campfire", "camp", "forest", "tarp", "fire", "knife", "woods",
                "carving", "firewood",
            ],
            Category::Survival => &[
                "survival", "survive", "stranded", "emergency", "rescue", "wilderness", "storm",
                "lost", "signal", "foraging",
            ],
            Category::Shelter => &[
                "shelter", "lean-to", "hut", "cabin", "roof", "dugout", "bunker", "underground",
                "insulation", "debris",
            ],
            Category::Diy => &[
                "diy", "workshop", "woodworking", "handmade", "repair", "restore", "tool",
                "project", "how to", "craft",
            ],
            Category::Movie => &[
                "movie", "film", "cinematic", "trailer", "scene", "story", "drama", "action",
                "hero", "villain",
            ],
            Category::Animals => &[
                "animal", "wildlife", "dog", "cat", "bird", "bear", "wolf", "deer", "fox",
                "puppy",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Accepts the identifier or the picker label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| {
                c.as_str().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown category '{needle}'. Must be one of: {CATEGORY_AUTO}, {}",
                    Category::ALL.map(Category::as_str).join(", ")
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Keyword match count for a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: usize,
}

/// Count keyword matches for every category, in declaration order.
pub fn category_scores(text: &str) -> Vec<CategoryScore> {
    let lowered = text.to_lowercase();
    Category::ALL
        .into_iter()
        .map(|category| CategoryScore {
            category,
            score: category
                .keywords()
                .iter()
                .filter(|kw| lowered.contains(*kw))
                .count(),
        })
        .collect()
}

/// Classify free text into a category.
///
/// The highest-scoring category wins; ties go to the first category in
/// [`Category::ALL`] order. Scores below [`MIN_KEYWORD_MATCHES`] fall back
/// to [`DEFAULT_CATEGORY`].
pub fn classify(text: &str) -> Category {
    let mut best = CategoryScore {
        category: DEFAULT_CATEGORY,
        score: 0,
    };
    for candidate in category_scores(text) {
        if candidate.score > best.score {
            best = candidate;
        }
    }

    if best.score < MIN_KEYWORD_MATCHES {
        DEFAULT_CATEGORY
    } else {
        best.category
    }
}

// ---------------------------------------------------------------------------
// CategoryChoice
// ---------------------------------------------------------------------------

/// How the category for a request was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySource {
    Auto,
    Explicit,
}

/// Caller's category selection: classify automatically or use a fixed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryChoice {
    #[default]
    Auto,
    Fixed(Category),
}

impl CategoryChoice {
    /// Resolve the choice, running the classifier over `text` for `Auto`.
    pub fn resolve(self, text: &str) -> (Category, CategorySource) {
        match self {
            CategoryChoice::Auto => (classify(text), CategorySource::Auto),
            CategoryChoice::Fixed(category) => (category, CategorySource::Explicit),
        }
    }
}

impl FromStr for CategoryChoice {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(CATEGORY_AUTO) {
            return Ok(CategoryChoice::Auto);
        }
        trimmed.parse().map(CategoryChoice::Fixed)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- classify --

    #[test]
    fn empty_text_is_default() {
        assert_eq!(classify(""), DEFAULT_CATEGORY);
    }

    #[test]
    fn bushcraft_keywords_clear_threshold() {
        assert_eq!(
            classify("bushcraft campfire forest camp tarp"),
            Category::Bushcraft
        );
    }

    #[test]
    fn unrelated_text_is_default() {
        assert_eq!(classify("just a random sentence"), Category::Movie);
    }

    #[test]
    fn single_match_stays_default() {
        // One animal keyword is not enough.
        assert_eq!(classify("a photo of my dog"), DEFAULT_CATEGORY);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("WILDLIFE: Bear And Wolf"), Category::Animals);
    }

    #[test]
    fn ties_resolve_in_declaration_order() {
        // Two survival keywords and two shelter keywords: Survival is declared first.
        let text = "stranded in a storm, hiding in a cabin under a roof";
        let scores = category_scores(text);
        let survival = scores.iter().find(|s| s.category == Category::Survival).unwrap();
        let shelter = scores.iter().find(|s| s.category == Category::Shelter).unwrap();
        assert_eq!(survival.score, shelter.score);
        assert_eq!(classify(text), Category::Survival);
    }

    #[test]
    fn classify_is_idempotent() {
        let text = "DIY workshop repair of an old tool";
        assert_eq!(classify(text), classify(text));
        assert_eq!(classify(text), Category::Diy);
    }

    // -- category_scores --

    #[test]
    fn scores_cover_all_categories_in_order() {
        let scores = category_scores("anything");
        let order: Vec<Category> = scores.iter().map(|s| s.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn every_category_has_keywords() {
        for category in Category::ALL {
            assert!(!category.keywords().is_empty(), "{category:?} has no keywords");
        }
    }

    // -- parsing --

    #[test]
    fn parses_identifiers_and_labels() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
        assert_eq!("  DIY ".parse::<Category>().unwrap(), Category::Diy);
    }

    #[test]
    fn unknown_category_rejected() {
        let err = "cooking".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("Unknown category 'cooking'"));
    }

    #[test]
    fn choice_parses_auto_and_blank() {
        assert_eq!("auto".parse::<CategoryChoice>().unwrap(), CategoryChoice::Auto);
        assert_eq!("Auto".parse::<CategoryChoice>().unwrap(), CategoryChoice::Auto);
        assert_eq!("".parse::<CategoryChoice>().unwrap(), CategoryChoice::Auto);
        assert_eq!(
            "animals".parse::<CategoryChoice>().unwrap(),
            CategoryChoice::Fixed(Category::Animals)
        );
    }

    #[test]
    fn explicit_choice_bypasses_classifier() {
        let (category, source) =
            CategoryChoice::Fixed(Category::Shelter).resolve("bushcraft campfire forest");
        assert_eq!(category, Category::Shelter);
        assert_eq!(source, CategorySource::Explicit);
    }

    #[test]
    fn auto_choice_runs_classifier() {
        let (category, source) = CategoryChoice::Auto.resolve("bushcraft campfire forest");
        assert_eq!(category, Category::Bushcraft);
        assert_eq!(source, CategorySource::Auto);
    }

    #[test]
    fn category_serializes_as_identifier() {
        let json = serde_json::to_string(&Category::Diy).unwrap();
        assert_eq!(json, "\"diy\"");
    }
}
