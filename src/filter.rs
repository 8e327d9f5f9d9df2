use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::model::EnrichedProduct;

/// Owner id meaning "no owner filter".
pub const NO_OWNER: i64 = 0;

/// The complete filter selection. This is the only mutable state in the app;
/// every UI event produces a whole new value, the engine never sees a
/// half-updated one.
///
/// An empty `active_categories` set hides every product. That is deliberate:
/// deselecting the last category means "show nothing", not "show all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[ts(type = "number")]
    pub owner_id: i64,
    pub query: String,
    #[ts(type = "Array<number>")]
    pub active_categories: BTreeSet<i64>,
}

impl FilterState {
    /// The startup state: no owner, no query, every category active.
    pub fn all_visible(categories: impl IntoIterator<Item = i64>) -> Self {
        FilterState {
            owner_id: NO_OWNER,
            query: String::new(),
            active_categories: categories.into_iter().collect(),
        }
    }

    pub fn set_owner(mut self, owner_id: i64) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn set_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn clear_query(self) -> Self {
        self.set_query("")
    }

    /// Removes the category when it is active, adds it when it is not.
    pub fn toggle_category(mut self, category_id: i64) -> Self {
        if !self.active_categories.remove(&category_id) {
            self.active_categories.insert(category_id);
        }
        self
    }

    pub fn select_all(mut self, categories: impl IntoIterator<Item = i64>) -> Self {
        self.active_categories = categories.into_iter().collect();
        self
    }

    /// Back to the startup state: all categories active, not an empty set.
    pub fn reset(self, categories: impl IntoIterator<Item = i64>) -> Self {
        FilterState::all_visible(categories)
    }

    pub fn owner_matches(&self, product: &EnrichedProduct) -> bool {
        if self.owner_id == NO_OWNER {
            return true;
        }
        product
            .user
            .as_ref()
            .is_some_and(|user| user.id == self.owner_id)
    }

    pub fn query_matches(&self, product: &EnrichedProduct) -> bool {
        if self.query.is_empty() {
            return true;
        }
        product
            .name
            .to_lowercase()
            .contains(&self.query.to_lowercase())
    }

    pub fn category_matches(&self, product: &EnrichedProduct) -> bool {
        product
            .category
            .as_ref()
            .is_some_and(|category| self.active_categories.contains(&category.id))
    }

    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        self.owner_matches(product) && self.query_matches(product) && self.category_matches(product)
    }
}

/// One full evaluation pass. Always runs over the complete enriched set so
/// the three predicates compose independently instead of narrowing each
/// other's output. Source order is preserved; there is no sort step.
pub fn visible_products(enriched: &[EnrichedProduct], filter: &FilterState) -> Vec<EnrichedProduct> {
    enriched
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect()
}
