use std::borrow::Cow;

use rust_embed::RustEmbed;
use thiserror::Error;

use crate::domain::{Catalog, CatalogError};

/// Embed the entire `assets/` directory into the library.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

const DEMO_CATALOG: &str = "/assets/demo_catalog.json";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("embedded asset not found: {0}")]
    Missing(String),
    #[error("embedded asset {0} is not valid UTF-8")]
    NotUtf8(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// The bundled sample catalog used by demos and tests.
pub fn demo_catalog() -> Result<Catalog, AssetError> {
    let raw = load_text(DEMO_CATALOG)?;
    Ok(Catalog::from_json(&raw)?)
}

fn load_text(path: &str) -> Result<String, AssetError> {
    let asset = load_asset(path)?;
    String::from_utf8(asset.into_owned()).map_err(|_| AssetError::NotUtf8(path.to_string()))
}

fn load_asset(path: &str) -> Result<Cow<'static, [u8]>, AssetError> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical)
        .map(|file| file.data)
        .ok_or_else(|| AssetError::Missing(path.to_string()))
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}
