use anyhow::{anyhow, Context};
use servant_catalog::{CatalogError, LoadedCatalog};

use super::{log_lookup_miss, print_json};

pub fn run_tiers_command(loaded: &LoadedCatalog) -> anyhow::Result<()> {
    print_json(&serde_json::json!({
        "total": loaded.catalog.len(),
        "tiers": loaded.catalog.tier_stats(),
    }))
}

pub fn run_list_command(trace_id: &str, loaded: &LoadedCatalog, tier: &str) -> anyhow::Result<()> {
    let records = match loaded.catalog.list_by_tier(tier) {
        Ok(records) => records,
        Err(err @ CatalogError::TierNotFound(_)) => {
            log_lookup_miss(trace_id, loaded, "tier", tier);
            return Err(err.into());
        }
        Err(err) => return Err(err).context("failed to list tier"),
    };

    print_json(&serde_json::json!({
        "tier": tier,
        "servants": records,
    }))
}

pub fn run_show_command(trace_id: &str, loaded: &LoadedCatalog, name: &str) -> anyhow::Result<()> {
    let Some(servant) = loaded.catalog.lookup_by_name(name) else {
        log_lookup_miss(trace_id, loaded, "name", name);
        return Err(anyhow!(CatalogError::ServantNotFound(name.to_string())));
    };

    print_json(&serde_json::json!({
        "servant": servant,
        "resolved_image_url": loaded.catalog.resolve_image_url(servant.record),
    }))
}

pub fn run_search_command(
    trace_id: &str,
    loaded: &LoadedCatalog,
    query: &str,
) -> anyhow::Result<()> {
    let Some(servant) = loaded.catalog.search(query) else {
        log_lookup_miss(trace_id, loaded, "search", query);
        return Err(anyhow!("no servant name contains '{query}'"));
    };

    print_json(&serde_json::json!({
        "query": query,
        "servant": servant,
        "resolved_image_url": loaded.catalog.resolve_image_url(servant.record),
    }))
}

/// An unknown class is an empty result, not an error: classes are an open set.
pub fn run_by_class_command(loaded: &LoadedCatalog, servant_class: &str) -> anyhow::Result<()> {
    let servants = loaded.catalog.servants_by_class(servant_class);

    print_json(&serde_json::json!({
        "class": servant_class,
        "count": servants.len(),
        "servants": servants,
    }))
}

pub fn run_export_command(loaded: &LoadedCatalog) -> anyhow::Result<()> {
    let config = serde_json::to_value(loaded.catalog.to_config())
        .context("failed to serialize catalog config")?;
    print_json(&config)
}
