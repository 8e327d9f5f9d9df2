use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::model::{EnrichedProduct, Sex};

/// Shown by the table (and the CLI) when the visible sequence is empty. An
/// empty result is a display variant, never an error.
pub const NO_RESULTS_MESSAGE: &str = "No products matching selected criteria";

const MALE_OWNER_CLASS: &str = "has-text-link";
const FEMALE_OWNER_CLASS: &str = "has-text-danger";

/// One rendered table row. All the formatting the table needs happens here so
/// the frontend only interpolates strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    #[ts(type = "number")]
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub owner_class: Option<String>,
}

impl ProductRow {
    pub fn from_enriched(product: &EnrichedProduct) -> Self {
        ProductRow {
            id: product.id,
            name: product.name.clone(),
            category_label: product
                .category
                .as_ref()
                .map(|category| format!("{} - {}", category.icon, category.title)),
            owner_name: product.user.as_ref().map(|user| user.name.clone()),
            owner_class: product.user.as_ref().and_then(|user| match user.sex {
                Sex::Male => Some(MALE_OWNER_CLASS.to_string()),
                Sex::Female => Some(FEMALE_OWNER_CLASS.to_string()),
                Sex::Unspecified => None,
            }),
        }
    }
}

pub fn rows(products: &[EnrichedProduct]) -> Vec<ProductRow> {
    products.iter().map(ProductRow::from_enriched).collect()
}
