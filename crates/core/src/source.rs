//! Scraped source metadata and the clone-cue summary built from it.
//!
//! Scraping itself happens upstream. Every field here may be empty when the
//! fetch failed, and everything downstream degrades to default text.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// Platform a source URL was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Platform {
    TikTok,
    Instagram,
    Facebook,
    YouTube,
    #[default]
    Web,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::TikTok,
        Platform::Instagram,
        Platform::Facebook,
        Platform::YouTube,
        Platform::Web,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::YouTube => "YouTube",
            Platform::Web => "Web",
        }
    }

    /// Infer the platform from a URL's host. Anything unrecognised is `Web`.
    pub fn detect(url: &str) -> Platform {
        let lowered = url.trim().to_lowercase();
        if lowered.contains("tiktok.com") {
            Platform::TikTok
        } else if lowered.contains("instagram.com") {
            Platform::Instagram
        } else if lowered.contains("facebook.com") || lowered.contains("fb.watch") {
            Platform::Facebook
        } else if lowered.contains("youtube.com") || lowered.contains("youtu.be") {
            Platform::YouTube
        } else {
            Platform::Web
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown platform '{needle}'. Must be one of: {}",
                    Platform::ALL.map(Platform::as_str).join(", ")
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// SourceMeta
// ---------------------------------------------------------------------------

/// Metadata scraped from a source URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SourceMeta {
    pub url: String,
    pub platform: Platform,
    pub title: String,
    pub description: String,
}

impl SourceMeta {
    /// Build metadata, detecting the platform from the URL.
    pub fn from_url(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let url = url.into();
        Self {
            platform: Platform::detect(&url),
            url,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Title and description joined for classification.
    pub fn classifier_text(&self) -> String {
        format!("{} {}", self.title.trim(), self.description.trim())
    }

    /// Short summary embedded in prompts for stylistic inspiration.
    ///
    /// Includes title and description only when at least one is non-empty.
    pub fn clone_cues(&self) -> String {
        let title = self.title.trim();
        let description = self.description.trim();
        if title.is_empty() && description.is_empty() {
            format!("Source={}", self.platform)
        } else {
            format!(
                "Source={}; Title={title}; Desc={description}",
                self.platform
            )
        }
    }
}
