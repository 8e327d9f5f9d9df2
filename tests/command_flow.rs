use stocklist_lib::catalog::Catalog;
use stocklist_lib::commands;
use stocklist_lib::model::{Category, Product, Sex, User};
use stocklist_lib::state::AppState;

fn app_state() -> AppState {
    let users = vec![
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
    ];
    let categories = vec![
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
    ];
    let products = vec![
        Product {
            id: 1,
            name: "Milk".into(),
            category_id: 1,
        },
        Product {
            id: 2,
            name: "Bread".into(),
            category_id: 1,
        },
        Product {
            id: 3,
            name: "Water".into(),
            category_id: 2,
        },
    ];
    AppState::new(Catalog::new(products, categories, users))
}

#[test]
fn startup_shows_the_full_table() {
    let state = app_state();
    let rows = commands::visible(&state);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].name, "Milk");
    assert_eq!(rows[0].category_label.as_deref(), Some("🍞 - Grocery"));
    assert_eq!(rows[0].owner_name.as_deref(), Some("Max"));
}

#[test]
fn each_mutation_returns_the_new_visible_rows() {
    let state = app_state();

    let rows = commands::set_owner(&state, 2);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Water");

    let rows = commands::set_owner(&state, 0);
    assert_eq!(rows.len(), 3);

    let rows = commands::set_query(&state, "brea".into());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Bread");
}

#[test]
fn toggling_the_last_category_off_hides_everything() {
    let state = app_state();

    let rows = commands::toggle_category(&state, 1);
    assert_eq!(rows.len(), 1, "only Drinks remains active");

    let rows = commands::toggle_category(&state, 2);
    assert!(rows.is_empty(), "empty selection hides all products");

    let rows = commands::select_all_categories(&state);
    assert_eq!(rows.len(), 3);
}

#[test]
fn reset_clears_every_facet_at_once() {
    let state = app_state();

    commands::set_owner(&state, 1);
    commands::set_query(&state, "milk".into());
    commands::toggle_category(&state, 1);

    let rows = commands::reset_filters(&state);
    assert_eq!(rows.len(), 3);

    let filter = state.filter_snapshot();
    assert_eq!(filter.owner_id, 0);
    assert!(filter.query.is_empty());
    assert_eq!(filter.active_categories.len(), 2);
}

#[test]
fn transitions_replace_state_visible_reads_it_back_unchanged() {
    let state = app_state();
    let after_mutation = commands::set_query(&state, "milk".into());
    let read_back = commands::visible(&state);
    assert_eq!(after_mutation, read_back);
}
