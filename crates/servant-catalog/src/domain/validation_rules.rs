use std::collections::{HashMap, HashSet};

use servant_catalog_core::{CatalogConfig, CATALOG_CONFIG_VERSION};

use crate::{ConfigValidationIssue, IssueSeverity};

use super::url_rules::image_url_concerns;

pub(crate) fn collect_catalog_validation_issues(
    config: &CatalogConfig,
) -> Vec<ConfigValidationIssue> {
    let mut issues = Vec::new();

    if config.config_version != CATALOG_CONFIG_VERSION {
        issues.push(error(
            "config_version_unsupported",
            "config_version",
            format!(
                "config_version {} is not supported (expected {CATALOG_CONFIG_VERSION})",
                config.config_version
            ),
        ));
    }

    let mut seen_tiers = HashSet::new();
    // normalized name -> field of first occurrence
    let mut seen_names: HashMap<String, String> = HashMap::new();
    let mut known_names = HashSet::new();

    for (tier_index, group) in config.tiers.iter().enumerate() {
        let tier_field = format!("tiers[{tier_index}]");
        let tier = group.tier.trim();

        if tier.is_empty() {
            issues.push(error(
                "tier_label_required",
                &format!("{tier_field}.tier"),
                "tier label is required",
            ));
        } else if !seen_tiers.insert(tier.to_string()) {
            issues.push(error(
                "tier_duplicate",
                &format!("{tier_field}.tier"),
                format!("tier '{tier}' is declared more than once"),
            ));
        }

        if group.servants.is_empty() {
            issues.push(warning(
                "tier_empty",
                &format!("{tier_field}.servants"),
                "tier has no servants",
            ));
        }

        for (servant_index, record) in group.servants.iter().enumerate() {
            let servant_field = format!("{tier_field}.servants[{servant_index}]");
            let name = record.name.trim();

            if name.is_empty() {
                issues.push(error(
                    "servant_name_required",
                    &format!("{servant_field}.name"),
                    "servant name is required",
                ));
            } else {
                known_names.insert(record.name.as_str());
                let normalized = name.to_lowercase();
                match seen_names.get(&normalized) {
                    Some(first_field) => issues.push(error(
                        "servant_name_duplicate",
                        &format!("{servant_field}.name"),
                        format!("servant '{name}' already defined at {first_field}"),
                    )),
                    None => {
                        seen_names.insert(normalized, format!("{servant_field}.name"));
                    }
                }
            }

            if record.servant_class.trim().is_empty() {
                issues.push(error(
                    "servant_class_required",
                    &format!("{servant_field}.class"),
                    "servant class is required",
                ));
            }

            if let Some(url) = record.image_url.as_deref() {
                push_image_url_warnings(&mut issues, &format!("{servant_field}.image_url"), url);
            }

            if record.image_url().is_some() && config.image_urls.get(&record.name).is_some() {
                issues.push(warning(
                    "image_url_shadowed",
                    &format!("image_urls.{}", record.name),
                    "inline image_url takes precedence over this table entry",
                ));
            }
        }
    }

    for (name, url) in &config.image_urls {
        let field = format!("image_urls.{name}");
        if !known_names.contains(name.as_str()) {
            issues.push(warning(
                "image_table_unknown_servant",
                &field,
                "no servant with this exact name exists in the catalog",
            ));
        }
        push_image_url_warnings(&mut issues, &field, url);
    }

    issues
}

fn push_image_url_warnings(issues: &mut Vec<ConfigValidationIssue>, field: &str, url: &str) {
    for concern in image_url_concerns(url) {
        issues.push(warning(concern.code(), field, concern.message()));
    }
}

fn error(code: &str, field: &str, message: impl Into<String>) -> ConfigValidationIssue {
    issue(code, field, message, IssueSeverity::Error)
}

fn warning(code: &str, field: &str, message: impl Into<String>) -> ConfigValidationIssue {
    issue(code, field, message, IssueSeverity::Warning)
}

fn issue(
    code: &str,
    field: &str,
    message: impl Into<String>,
    severity: IssueSeverity,
) -> ConfigValidationIssue {
    ConfigValidationIssue {
        code: code.to_string(),
        field: field.to_string(),
        message: message.into(),
        severity,
    }
}
