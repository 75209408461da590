use std::path::Path;

use anyhow::{anyhow, Context};
use servant_catalog::{
    catalog_fingerprint, collect_catalog_validation_issues, read_catalog_config, sha256_file,
    LoadCatalogRequest,
};
use servant_catalog_core::observability::LogLevel;

use crate::logging::log_event;

use super::print_json;

/// Prints every issue, then fails when any of them blocks loading.
pub fn run_validate_command(trace_id: &str, request: &LoadCatalogRequest) -> anyhow::Result<()> {
    let config = read_catalog_config(request).context("failed to read servant catalog")?;
    let fingerprint = catalog_fingerprint(&config).context("failed to fingerprint catalog")?;
    let issues = collect_catalog_validation_issues(&config);
    let error_count = issues.iter().filter(|issue| issue.is_error()).count();
    let status = if error_count == 0 { "OK" } else { "INVALID" };

    log_event(
        trace_id,
        &fingerprint,
        if error_count == 0 {
            LogLevel::Info
        } else {
            LogLevel::Error
        },
        "validate",
        "SC-CL-007",
        "catalog_validated",
        serde_json::json!({
            "status": status,
            "errors": error_count,
            "warnings": issues.len() - error_count,
        }),
    );

    print_json(&serde_json::json!({
        "status": status,
        "fingerprint": fingerprint,
        "servants": config.servant_count(),
        "issues": issues,
    }))?;

    if error_count > 0 {
        return Err(anyhow!("servant catalog has {error_count} blocking issue(s)"));
    }

    Ok(())
}

pub fn run_hash_command(file: &Path) -> anyhow::Result<()> {
    let hash = sha256_file(file).with_context(|| format!("failed to hash {}", file.display()))?;
    println!("{hash}");
    Ok(())
}
