//! Handlers exposing the fixed per-category tables.

use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use scenecards_core::beats::beat_catalog;
use scenecards_core::category::Category;
use scenecards_core::style::{style_preset, StylePreset};

use crate::error::AppResult;
use crate::response::DataResponse;

/// Summary of one category's tables, for populating category pickers.
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub category: Category,
    pub label: &'static str,
    pub style: StylePreset,
    pub beat_count: usize,
    pub keywords: &'static [&'static str],
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        Self {
            category,
            label: category.label(),
            style: style_preset(category),
            beat_count: beat_catalog(category).len(),
            keywords: category.keywords(),
        }
    }
}

// ---------------------------------------------------------------------------
// GET /categories
// ---------------------------------------------------------------------------

/// List all categories in classifier declaration order.
pub async fn list_categories() -> AppResult<impl IntoResponse> {
    let categories: Vec<CategoryInfo> = Category::ALL.into_iter().map(CategoryInfo::from).collect();
    Ok(Json(DataResponse { data: categories }))
}
