use stocklist_lib::catalog::{build_enriched, Catalog};
use stocklist_lib::filter::{visible_products, FilterState};
use stocklist_lib::model::{Category, Product, Sex, User};

fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Max".into(),
            sex: Sex::Male,
        },
        User {
            id: 2,
            name: "Anna".into(),
            sex: Sex::Female,
        },
    ]
}

fn categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            title: "Grocery".into(),
            icon: "🍞".into(),
            owner_id: 1,
        },
        Category {
            id: 2,
            title: "Drinks".into(),
            icon: "🍷".into(),
            owner_id: 2,
        },
    ]
}

fn products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Milk".into(),
            category_id: 1,
        },
        Product {
            id: 2,
            name: "Water".into(),
            category_id: 2,
        },
        Product {
            id: 3,
            name: "Mystery".into(),
            category_id: 9,
        },
    ]
}

#[test]
fn join_resolves_category_and_owner_per_product() {
    let enriched = build_enriched(&products(), &categories(), &users());

    assert_eq!(enriched.len(), 3);
    assert_eq!(
        enriched[0].user.as_ref().map(|u| u.name.as_str()),
        Some("Max")
    );
    assert_eq!(
        enriched[1].user.as_ref().map(|u| u.name.as_str()),
        Some("Anna")
    );
}

#[test]
fn dangling_category_reference_is_tolerated() {
    let enriched = build_enriched(&products(), &categories(), &users());

    let mystery = &enriched[2];
    assert_eq!(mystery.name, "Mystery");
    assert!(mystery.category.is_none());
    assert!(mystery.user.is_none());
}

#[test]
fn unjoined_product_is_hidden_whenever_categories_are_selected() {
    let catalog = Catalog::new(products(), categories(), users());
    let filter = FilterState::all_visible(catalog.category_ids());

    let visible = visible_products(&catalog.products, &filter);
    assert!(visible.iter().all(|p| p.name != "Mystery"));
    assert_eq!(visible.len(), 2);
}

#[test]
fn join_preserves_source_order() {
    let enriched = build_enriched(&products(), &categories(), &users());
    let ids: Vec<i64> = enriched.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn single_product_catalog_filters_by_owner() {
    // products=[Milk/cat 1], categories=[Grocery owned by 1], users=[Max].
    let users = vec![User {
        id: 1,
        name: "Max".into(),
        sex: Sex::Male,
    }];
    let categories = vec![Category {
        id: 1,
        title: "Grocery".into(),
        icon: "🍞".into(),
        owner_id: 1,
    }];
    let products = vec![Product {
        id: 1,
        name: "Milk".into(),
        category_id: 1,
    }];
    let catalog = Catalog::new(products, categories, users);

    let all = FilterState::all_visible(catalog.category_ids());
    assert_eq!(visible_products(&catalog.products, &all), catalog.products);

    let max_only = all.clone().set_owner(1);
    assert_eq!(
        visible_products(&catalog.products, &max_only),
        catalog.products
    );

    let nobody = all.set_owner(2);
    assert!(visible_products(&catalog.products, &nobody).is_empty());
}
