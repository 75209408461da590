use std::fs;
use std::path::Path;

use servant_catalog_core::{CatalogConfig, ImageUrlTable};

use crate::CatalogError;

pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>, CatalogError> {
    fs::read(path).map_err(CatalogError::from)
}

pub(crate) fn read_catalog_config(path: &Path) -> Result<CatalogConfig, CatalogError> {
    CatalogConfig::from_path(path).map_err(CatalogError::from)
}

pub(crate) fn read_image_url_table(path: &Path) -> Result<ImageUrlTable, CatalogError> {
    ImageUrlTable::from_path(path).map_err(CatalogError::from)
}
