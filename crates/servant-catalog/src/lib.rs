#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

mod application;
mod domain;
mod error;
mod infrastructure;
mod models;

use std::path::Path;

use servant_catalog_core::{CatalogConfig, DisplayUnit, ServantRecord};

pub use domain::catalog::{Catalog, RankedServant, TierStat};
pub use error::{CatalogError, ConfigValidationIssue, IssueSeverity};
pub use models::{LoadCatalogRequest, LoadedCatalog, RenderOptions};

pub fn load_catalog(request: &LoadCatalogRequest) -> Result<LoadedCatalog, CatalogError> {
    application::load_catalog::load_catalog(request)
}

pub fn read_catalog_config(request: &LoadCatalogRequest) -> Result<CatalogConfig, CatalogError> {
    application::load_catalog::read_catalog_config(request)
}

pub fn validate_catalog_config(config: &CatalogConfig) -> Result<(), CatalogError> {
    application::validate_catalog::validate_catalog_config(config)
}

pub fn collect_catalog_validation_issues(config: &CatalogConfig) -> Vec<ConfigValidationIssue> {
    application::validate_catalog::collect_catalog_validation_issues(config)
}

pub fn catalog_fingerprint(config: &CatalogConfig) -> Result<String, CatalogError> {
    application::hash::catalog_fingerprint(config)
}

pub fn sha256_file(path: &Path) -> Result<String, CatalogError> {
    application::hash::sha256_file(path)
}

pub fn render(record: &ServantRecord) -> DisplayUnit {
    domain::presenter::render(record)
}

pub fn render_summon(
    catalog: &Catalog,
    servant: RankedServant<'_>,
    options: &RenderOptions,
) -> DisplayUnit {
    domain::presenter::render_summon(catalog, servant, options)
}

pub fn render_roster(
    catalog: &Catalog,
    title: &str,
    servants: &[RankedServant<'_>],
    options: &RenderOptions,
) -> DisplayUnit {
    domain::presenter::render_roster(catalog, title, servants, options)
}

pub fn render_tier(
    catalog: &Catalog,
    tier: &str,
    options: &RenderOptions,
) -> Result<DisplayUnit, CatalogError> {
    domain::presenter::render_tier(catalog, tier, options)
}
