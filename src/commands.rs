use tauri::State;

use crate::filter::{visible_products, FilterState};
use crate::model::{Category, User};
use crate::state::AppState;
use crate::view::{self, ProductRow};

fn rows_for(state: &AppState, filter: &FilterState) -> Vec<ProductRow> {
    view::rows(&visible_products(&state.catalog.products, filter))
}

fn transition(
    state: &AppState,
    event: &'static str,
    apply: impl FnOnce(FilterState) -> FilterState,
) -> Vec<ProductRow> {
    let next = state.replace_filter(apply);
    tracing::debug!(
        target: "stocklist",
        event,
        owner_id = next.owner_id,
        query = %next.query,
        active_categories = next.active_categories.len(),
        "filter state replaced"
    );
    rows_for(state, &next)
}

pub fn visible(state: &AppState) -> Vec<ProductRow> {
    rows_for(state, &state.filter_snapshot())
}

pub fn set_owner(state: &AppState, owner_id: i64) -> Vec<ProductRow> {
    transition(state, "owner", |filter| filter.set_owner(owner_id))
}

pub fn set_query(state: &AppState, query: String) -> Vec<ProductRow> {
    transition(state, "query", |filter| filter.set_query(query))
}

pub fn toggle_category(state: &AppState, category_id: i64) -> Vec<ProductRow> {
    transition(state, "category_toggle", |filter| {
        filter.toggle_category(category_id)
    })
}

pub fn select_all_categories(state: &AppState) -> Vec<ProductRow> {
    let ids = state.catalog.category_ids();
    transition(state, "category_select_all", |filter| filter.select_all(ids))
}

pub fn reset_filters(state: &AppState) -> Vec<ProductRow> {
    let ids = state.catalog.category_ids();
    transition(state, "reset", |filter| filter.reset(ids))
}

// Tauri wrappers. Each mutation returns the freshly evaluated rows so the
// frontend re-renders from the command response alone.

#[tauri::command]
pub fn products_visible(state: State<'_, AppState>) -> Vec<ProductRow> {
    visible(&state)
}

#[tauri::command]
pub fn filter_get(state: State<'_, AppState>) -> FilterState {
    state.filter_snapshot()
}

#[tauri::command]
pub fn owners_list(state: State<'_, AppState>) -> Vec<User> {
    state.catalog.users.clone()
}

#[tauri::command]
pub fn categories_list(state: State<'_, AppState>) -> Vec<Category> {
    state.catalog.categories.clone()
}

#[tauri::command]
pub fn filter_set_owner(state: State<'_, AppState>, owner_id: i64) -> Vec<ProductRow> {
    set_owner(&state, owner_id)
}

#[tauri::command]
pub fn filter_set_query(state: State<'_, AppState>, query: String) -> Vec<ProductRow> {
    set_query(&state, query)
}

#[tauri::command]
pub fn filter_toggle_category(state: State<'_, AppState>, category_id: i64) -> Vec<ProductRow> {
    toggle_category(&state, category_id)
}

#[tauri::command]
pub fn filter_select_all_categories(state: State<'_, AppState>) -> Vec<ProductRow> {
    select_all_categories(&state)
}

#[tauri::command]
pub fn filter_reset(state: State<'_, AppState>) -> Vec<ProductRow> {
    reset_filters(&state)
}
