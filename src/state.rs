use std::sync::{Arc, Mutex, PoisonError};

use crate::catalog::Catalog;
use crate::filter::FilterState;

/// Managed application state: the immutable catalog plus the single mutable
/// filter selection. Commands are synchronous, so the mutex is only ever held
/// for the duration of one replace-and-evaluate cycle.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub filter: Arc<Mutex<FilterState>>,
}

impl AppState {
    /// Starts with every category active so the full table is visible.
    pub fn new(catalog: Catalog) -> Self {
        let filter = FilterState::all_visible(catalog.category_ids());
        AppState {
            catalog: Arc::new(catalog),
            filter: Arc::new(Mutex::new(filter)),
        }
    }

    pub fn filter_snapshot(&self) -> FilterState {
        self.filter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the filter state wholesale and returns the new value. The
    /// transition sees a clone of the current state, never the live one.
    pub fn replace_filter(&self, apply: impl FnOnce(FilterState) -> FilterState) -> FilterState {
        let mut guard = self.filter.lock().unwrap_or_else(PoisonError::into_inner);
        let next = apply(guard.clone());
        *guard = next.clone();
        next
    }
}
