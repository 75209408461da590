use servant_catalog_core::CatalogConfig;

use crate::domain::validation_rules as domain_validation_rules;
use crate::{CatalogError, ConfigValidationIssue};

pub(crate) fn collect_catalog_validation_issues(
    config: &CatalogConfig,
) -> Vec<ConfigValidationIssue> {
    domain_validation_rules::collect_catalog_validation_issues(config)
}

pub(crate) fn validate_catalog_config(config: &CatalogConfig) -> Result<(), CatalogError> {
    let issues = collect_catalog_validation_issues(config);
    if issues.iter().any(ConfigValidationIssue::is_error) {
        Err(CatalogError::invalid_catalog(issues))
    } else {
        Ok(())
    }
}
