use servant_catalog_core::builtin::builtin_catalog_config;
use servant_catalog_core::CatalogConfig;

use crate::application::hash::catalog_fingerprint;
use crate::domain::validation_rules::collect_catalog_validation_issues;
use crate::infrastructure::file_io;
use crate::models::{LoadCatalogRequest, LoadedCatalog};
use crate::{Catalog, CatalogError};

/// Reads the catalog source and overlays the separate image table, without
/// validating anything.
pub(crate) fn read_catalog_config(
    request: &LoadCatalogRequest,
) -> Result<CatalogConfig, CatalogError> {
    let mut config = match request.catalog_path.as_deref() {
        Some(path) => file_io::read_catalog_config(path)?,
        None => builtin_catalog_config()?,
    };

    if let Some(path) = request.image_table_path.as_deref() {
        let table = file_io::read_image_url_table(path)?;
        config.image_urls.merge_from(table);
    }

    Ok(config)
}

pub(crate) fn load_catalog(request: &LoadCatalogRequest) -> Result<LoadedCatalog, CatalogError> {
    let config = read_catalog_config(request)?;
    let issues = collect_catalog_validation_issues(&config);

    if issues.iter().any(|issue| issue.is_error()) {
        return Err(CatalogError::invalid_catalog(issues));
    }

    let fingerprint = catalog_fingerprint(&config)?;

    Ok(LoadedCatalog {
        catalog: Catalog::from_validated(config),
        warnings: issues,
        fingerprint,
    })
}
