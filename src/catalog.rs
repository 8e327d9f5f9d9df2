use std::collections::BTreeSet;

use crate::model::{Category, EnrichedProduct, Product, User};

/// The immutable joined dataset the rest of the app reads from. Built once at
/// startup; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<EnrichedProduct>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<Category>, users: Vec<User>) -> Self {
        let products = build_enriched(&products, &categories, &users);
        Catalog {
            users,
            categories,
            products,
        }
    }

    /// The full category id set, used by select-all and reset transitions.
    pub fn category_ids(&self) -> BTreeSet<i64> {
        self.categories.iter().map(|category| category.id).collect()
    }
}

/// Resolves each product's category and, through the category's `owner_id`,
/// its owning user. First match by id wins; a reference that resolves to
/// nothing leaves the field `None`. Input product order is preserved.
pub fn build_enriched(
    products: &[Product],
    categories: &[Category],
    users: &[User],
) -> Vec<EnrichedProduct> {
    products
        .iter()
        .map(|product| {
            let category = categories
                .iter()
                .find(|category| category.id == product.category_id)
                .cloned();
            let user = category
                .as_ref()
                .and_then(|category| users.iter().find(|user| user.id == category.owner_id))
                .cloned();
            EnrichedProduct {
                id: product.id,
                name: product.name.clone(),
                category_id: product.category_id,
                category,
                user,
            }
        })
        .collect()
}
