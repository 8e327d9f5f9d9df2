use include_dir::{include_dir, Dir};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::model::{Category, Product, User};

static FIXTURES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/fixtures");

/// Failure to read the embedded seed data. These are build artifacts rather
/// than user input, so unlike the join and the filter engine this boundary
/// does report errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture file {0} is missing from the embedded set")]
    Missing(&'static str),
    #[error("fixture file {file} failed to decode: {source}")]
    Decode {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl From<FixtureError> for AppError {
    fn from(error: FixtureError) -> Self {
        let (code, file) = match &error {
            FixtureError::Missing(file) => ("FIXTURE/MISSING", *file),
            FixtureError::Decode { file, .. } => ("FIXTURE/DECODE", *file),
        };
        AppError::new(code, error.to_string()).with_context("file", file)
    }
}

fn decode<T: DeserializeOwned>(file: &'static str) -> Result<Vec<T>, FixtureError> {
    let contents = FIXTURES
        .get_file(file)
        .and_then(|entry| entry.contents_utf8())
        .ok_or(FixtureError::Missing(file))?;
    serde_json::from_str(contents).map_err(|source| FixtureError::Decode { file, source })
}

pub fn users() -> Result<Vec<User>, FixtureError> {
    decode("users.json")
}

pub fn categories() -> Result<Vec<Category>, FixtureError> {
    decode("categories.json")
}

pub fn products() -> Result<Vec<Product>, FixtureError> {
    decode("products.json")
}

/// Loads and joins the full seed dataset.
pub fn catalog() -> Result<Catalog, FixtureError> {
    Ok(Catalog::new(products()?, categories()?, users()?))
}
