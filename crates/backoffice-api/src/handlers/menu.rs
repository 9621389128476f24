// ============================================================================
// Back-office API - Menu Handlers
// File: crates/backoffice-api/src/handlers/menu.rs
// ============================================================================
//! Menu catalog HTTP handlers (list, view, create, update, delete)

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use backoffice_core::domain::{
    category_counts, filter_items, CategoryCounts, CategoryFilter, MenuItem, MenuItemDraft, MenuQuery,
};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query string for GET /api/v1/menu
#[derive(Debug, Default, Deserialize)]
pub struct MenuListParams {
    #[serde(default)]
    pub search: Option<String>,
    /// all | food | beverage (Indonesian aliases accepted)
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub available_only: bool,
}

impl MenuListParams {
    fn into_query(self) -> Result<MenuQuery, ApiError> {
        let category = match self.category.as_deref() {
            Some(raw) => CategoryFilter::parse(raw)?,
            None => CategoryFilter::All,
        };
        Ok(MenuQuery {
            search: self.search.unwrap_or_default(),
            category,
            available_only: self.available_only,
        })
    }
}

/// Unreadable or incomplete form bodies are validation failures too
fn parse_draft(payload: Result<Json<MenuItemDraft>, JsonRejection>) -> Result<MenuItemDraft, ApiError> {
    match payload {
        Ok(Json(draft)) => Ok(draft),
        Err(rejection) => {
            warn!("Menu payload rejected: {}", rejection.body_text());
            Err(ApiError::BadRequest(rejection.body_text()))
        }
    }
}

/// Filtered grid plus the tab badges
#[derive(Debug, Serialize)]
pub struct MenuListResponse {
    pub items: Vec<MenuItem>,
    pub total: usize,
    pub counts: CategoryCounts,
}

/// GET /api/v1/menu
pub async fn list_menu(
    State(state): State<AppState>,
    Query(params): Query<MenuListParams>,
) -> Result<Json<ApiResponse<MenuListResponse>>, ApiError> {
    let query = params.into_query()?;

    // Grid and badges come from the same snapshot
    let all = state.catalog.all().await?;
    let items = filter_items(&all, &query);
    let counts = category_counts(&all);

    Ok(Json(ApiResponse::success(MenuListResponse {
        total: items.len(),
        items,
        counts,
    })))
}

/// GET /api/v1/menu/counts
pub async fn menu_counts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CategoryCounts>>, ApiError> {
    let counts = state.catalog.counts().await?;
    Ok(Json(ApiResponse::success(counts)))
}

/// GET /api/v1/menu/{id}
pub async fn get_menu(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    let item = state.catalog.get(&id).await?;
    Ok(Json(ApiResponse::success(item)))
}

/// POST /api/v1/menu
pub async fn create_menu(
    State(state): State<AppState>,
    payload: Result<Json<MenuItemDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<MenuItem>>), ApiError> {
    let draft = parse_draft(payload)?;
    info!("Create menu request: {}", draft.name);
    let item = state.catalog.create(draft).await?;
    let message = format!("Menu \"{}\" added", item.name);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(item, &message)),
    ))
}

/// PUT /api/v1/menu/{id}
pub async fn update_menu(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MenuItemDraft>, JsonRejection>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    let draft = parse_draft(payload)?;
    info!("Update menu request: {}", id);
    let item = state.catalog.update(&id, draft).await?;
    let message = format!("Menu \"{}\" updated", item.name);

    Ok(Json(ApiResponse::success_with_message(item, &message)))
}

/// DELETE /api/v1/menu/{id}
///
/// The request itself is the confirmation step.
pub async fn delete_menu(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    info!("Delete menu request: {}", id);
    let item = state.catalog.delete(&id).await?;
    let message = format!("Menu \"{}\" deleted", item.name);

    Ok(Json(ApiResponse::success_with_message(item, &message)))
}
