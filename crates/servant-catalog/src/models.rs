use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::{Catalog, ConfigValidationIssue};

#[derive(Debug, Clone, Default)]
pub struct LoadCatalogRequest {
    /// `None` selects the built-in roster.
    pub catalog_path: Option<PathBuf>,
    pub image_table_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub warnings: Vec<ConfigValidationIssue>,
    pub fingerprint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub master: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl RenderOptions {
    pub fn for_master(master: impl Into<String>) -> Self {
        Self {
            master: Some(master.into()),
            timestamp: None,
        }
    }
}
