// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/
use once_cell::sync::OnceCell;
use tauri::Manager;

pub mod catalog;
pub mod commands;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod model;
pub mod state;
pub mod view;

pub use error::{AppError, AppResult};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Installs the tracing subscriber once. Both the binary and the Tauri setup
/// path go through here, so repeated calls are no-ops.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_logging();
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let catalog = fixtures::catalog().map_err(AppError::from)?;
            tracing::info!(
                target: "stocklist",
                products = catalog.products.len(),
                categories = catalog.categories.len(),
                users = catalog.users.len(),
                "catalog loaded"
            );
            app.manage(state::AppState::new(catalog));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::products_visible,
            commands::filter_get,
            commands::owners_list,
            commands::categories_list,
            commands::filter_set_owner,
            commands::filter_set_query,
            commands::filter_toggle_category,
            commands::filter_select_all_categories,
            commands::filter_reset,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
