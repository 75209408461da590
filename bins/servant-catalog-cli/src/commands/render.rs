use anyhow::{anyhow, Context};
use chrono::Utc;
use servant_catalog::{
    render, render_summon, render_tier, CatalogError, LoadedCatalog, RenderOptions,
};
use servant_catalog_core::observability::LogLevel;

use crate::logging::log_event;

use super::{log_lookup_miss, print_json};

pub fn run_render_command(
    trace_id: &str,
    loaded: &LoadedCatalog,
    name: &str,
    master: Option<&str>,
    plain: bool,
) -> anyhow::Result<()> {
    let Some(servant) = loaded.catalog.lookup_by_name(name) else {
        log_lookup_miss(trace_id, loaded, "name", name);
        return Err(anyhow!(CatalogError::ServantNotFound(name.to_string())));
    };

    let unit = if plain {
        render(servant.record)
    } else {
        render_summon(&loaded.catalog, servant, &render_options(master))
    };

    log_event(
        trace_id,
        &loaded.fingerprint,
        LogLevel::Info,
        "render",
        "SC-CL-006",
        "servant_embed_rendered",
        serde_json::json!({
            "servant": servant.record.name,
            "tier": servant.tier,
            "plain": plain,
            "has_image": unit.image.is_some(),
        }),
    );

    print_json(&serde_json::to_value(&unit).context("failed to serialize embed")?)
}

pub fn run_roster_command(
    trace_id: &str,
    loaded: &LoadedCatalog,
    tier: &str,
    master: Option<&str>,
) -> anyhow::Result<()> {
    let unit = match render_tier(&loaded.catalog, tier, &render_options(master)) {
        Ok(unit) => unit,
        Err(err) => {
            if err.is_lookup_miss() {
                log_lookup_miss(trace_id, loaded, "tier", tier);
            }
            return Err(err.into());
        }
    };

    print_json(&serde_json::to_value(&unit).context("failed to serialize embed")?)
}

fn render_options(master: Option<&str>) -> RenderOptions {
    RenderOptions {
        master: master.map(str::to_string),
        timestamp: Some(Utc::now()),
    }
}
