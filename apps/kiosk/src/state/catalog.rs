//! # Catalog State
//!
//! The menu as supplied by the menu collaborator, loaded once at startup.
//! Read-only afterwards.

use std::path::Path;

use summer_core::validation::validate_catalog;
use summer_core::{Catalog, CoreError, CoreResult, MenuItem};
use tracing::{info, warn};

use crate::error::KioskError;
use crate::state::ConfigState;

/// Sample menu used when no catalog path is configured.
const BUNDLED_MENU: &str = include_str!("../../data/menu.json");

#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Catalog,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        report_problems(&catalog);
        CatalogState { catalog }
    }

    /// Loads the configured catalog file, or the bundled sample menu.
    pub fn load(config: &ConfigState) -> Result<Self, KioskError> {
        let catalog = match &config.menu_path {
            Some(path) => read_catalog(path)?,
            None => {
                info!("No SUMMER_MENU_PATH set, using bundled sample menu");
                serde_json::from_str(BUNDLED_MENU)?
            }
        };

        info!(
            categories = catalog.categories.len(),
            items = catalog.items.len(),
            "Menu catalog loaded"
        );
        Ok(CatalogState::new(catalog))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Looks up an item, failing with `ItemNotFound`.
    pub fn item(&self, id: &str) -> CoreResult<&MenuItem> {
        self.catalog
            .item(id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))
    }
}

fn read_catalog(path: &Path) -> Result<Catalog, KioskError> {
    let raw = std::fs::read_to_string(path).map_err(|source| KioskError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| KioskError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Menu data is trusted: problems are reported, never fatal.
fn report_problems(catalog: &Catalog) {
    for problem in validate_catalog(catalog) {
        warn!(%problem, "Menu catalog problem");
    }
}
