mod lookup;
mod render;
mod validate;

use anyhow::Context;
use servant_catalog::{load_catalog, LoadCatalogRequest, LoadedCatalog};
use servant_catalog_core::observability::{LogLevel, UNKNOWN_FINGERPRINT};

use crate::cli::Command;
use crate::logging::log_event;

pub use lookup::{
    run_by_class_command, run_export_command, run_list_command, run_search_command,
    run_show_command, run_tiers_command,
};
pub use render::{run_render_command, run_roster_command};
pub use validate::{run_hash_command, run_validate_command};

/// Result of one subcommand plus the fingerprint of the catalog it ran
/// against, when one was loaded.
pub struct CommandOutcome {
    pub fingerprint: Option<String>,
    pub result: anyhow::Result<()>,
}

pub fn run_command(
    trace_id: &str,
    command: &Command,
    request: &LoadCatalogRequest,
) -> CommandOutcome {
    match command {
        Command::Hash { file } => CommandOutcome {
            fingerprint: None,
            result: run_hash_command(file),
        },
        Command::Validate => CommandOutcome {
            fingerprint: None,
            result: run_validate_command(trace_id, request),
        },
        Command::Tiers => with_catalog(trace_id, request, run_tiers_command),
        Command::List { tier } => with_catalog(trace_id, request, |loaded| {
            run_list_command(trace_id, loaded, tier)
        }),
        Command::Show { name } => with_catalog(trace_id, request, |loaded| {
            run_show_command(trace_id, loaded, name)
        }),
        Command::Search { query } => with_catalog(trace_id, request, |loaded| {
            run_search_command(trace_id, loaded, query)
        }),
        Command::ByClass { servant_class } => with_catalog(trace_id, request, |loaded| {
            run_by_class_command(loaded, servant_class)
        }),
        Command::Render {
            name,
            master,
            plain,
        } => with_catalog(trace_id, request, |loaded| {
            run_render_command(trace_id, loaded, name, master.as_deref(), *plain)
        }),
        Command::Roster { tier, master } => with_catalog(trace_id, request, |loaded| {
            run_roster_command(trace_id, loaded, tier, master.as_deref())
        }),
        Command::Export => with_catalog(trace_id, request, run_export_command),
    }
}

fn with_catalog(
    trace_id: &str,
    request: &LoadCatalogRequest,
    run: impl FnOnce(&LoadedCatalog) -> anyhow::Result<()>,
) -> CommandOutcome {
    match load_catalog_logged(trace_id, request) {
        Ok(loaded) => {
            let result = run(&loaded);
            CommandOutcome {
                fingerprint: Some(loaded.fingerprint),
                result,
            }
        }
        Err(err) => CommandOutcome {
            fingerprint: None,
            result: Err(err),
        },
    }
}

pub fn load_catalog_logged(
    trace_id: &str,
    request: &LoadCatalogRequest,
) -> anyhow::Result<LoadedCatalog> {
    let loaded = match load_catalog(request) {
        Ok(loaded) => loaded,
        Err(err) => {
            log_event(
                trace_id,
                UNKNOWN_FINGERPRINT,
                LogLevel::Error,
                "load",
                "SC-CL-003",
                "catalog_load_failed",
                serde_json::json!({
                    "error": err.to_string(),
                    "issues": err.validation_issues(),
                }),
            );
            return Err(err).context("failed to load servant catalog");
        }
    };

    log_event(
        trace_id,
        &loaded.fingerprint,
        LogLevel::Info,
        "load",
        "SC-CL-002",
        "catalog_loaded",
        serde_json::json!({
            "catalog_path": request.catalog_path,
            "image_table_path": request.image_table_path,
            "servants": loaded.catalog.len(),
            "tiers": loaded.catalog.tiers().count(),
            "image_entries": loaded.catalog.image_urls().len(),
            "warnings": loaded.warnings.len(),
        }),
    );

    for warning in &loaded.warnings {
        log_event(
            trace_id,
            &loaded.fingerprint,
            LogLevel::Warn,
            "load",
            "SC-CL-005",
            "catalog_validation_warning",
            serde_json::json!(warning),
        );
    }

    Ok(loaded)
}

pub(crate) fn log_lookup_miss(trace_id: &str, loaded: &LoadedCatalog, kind: &str, key: &str) {
    log_event(
        trace_id,
        &loaded.fingerprint,
        LogLevel::Warn,
        "lookup",
        "SC-CL-004",
        "catalog_lookup_miss",
        serde_json::json!({ "kind": kind, "key": key }),
    );
}

pub(crate) fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    let pretty = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{pretty}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use servant_catalog::CatalogError;
    use servant_catalog_core::{CatalogConfig, ServantRecord, TierGroup};

    use super::*;

    const TRACE_ID: &str = "test-trace";

    #[test]
    fn catalog_commands_report_the_loaded_fingerprint() {
        let request = LoadCatalogRequest::default();
        let loaded = builtin();

        let outcome = run_command(TRACE_ID, &Command::Tiers, &request);
        outcome.result.expect("tiers succeeds");
        assert_eq!(outcome.fingerprint, Some(loaded.fingerprint));
    }

    #[test]
    fn failed_load_has_no_fingerprint() {
        let root = make_temp_dir("missing");
        let request = request_for(root.join("absent.json"));

        let outcome = run_command(TRACE_ID, &Command::Export, &request);
        assert!(outcome.result.is_err());
        assert!(outcome.fingerprint.is_none());

        fs::remove_dir_all(root).expect("cleanup");
    }

    #[test]
    fn show_and_render_fail_on_unknown_name() {
        let loaded = builtin();

        let err = run_show_command(TRACE_ID, &loaded, "UnknownName").expect_err("miss");
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::ServantNotFound(name)) if name == "UnknownName"
        ));
        assert!(run_render_command(TRACE_ID, &loaded, "UnknownName", None, false).is_err());
        run_render_command(TRACE_ID, &loaded, "Gilgamesh", Some("Shirou"), false)
            .expect("known servant renders");
    }

    #[test]
    fn list_and_roster_fail_on_unknown_tier() {
        let loaded = builtin();

        let err = run_list_command(TRACE_ID, &loaded, "Z").expect_err("unknown tier");
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::TierNotFound(_))
        ));
        assert!(run_roster_command(TRACE_ID, &loaded, "Z", None).is_err());
        run_list_command(TRACE_ID, &loaded, "EX").expect("known tier lists");
    }

    #[test]
    fn search_miss_is_an_error() {
        let loaded = builtin();

        assert!(run_search_command(TRACE_ID, &loaded, "zzz").is_err());
        run_search_command(TRACE_ID, &loaded, "gilga").expect("substring match");
    }

    #[test]
    fn unknown_class_is_an_empty_listing() {
        let loaded = builtin();

        assert!(loaded.catalog.servants_by_class("Shielder").is_empty());
        run_by_class_command(&loaded, "Shielder").expect("unknown class is not an error");
    }

    #[test]
    fn validate_fails_only_on_blocking_issues() {
        let root = make_temp_dir("validate");
        let valid_path = root.join("valid.json");
        let invalid_path = root.join("invalid.json");

        let mut config = CatalogConfig::new(vec![TierGroup::new(
            "EX",
            vec![ServantRecord::new("Gilgamesh", "Archer", "", "")
                .with_image_url("http://imgur.com/gallery/gil")],
        )]);
        fs::write(&valid_path, serde_json::to_vec(&config).expect("serialize"))
            .expect("write valid");
        config.tiers[0].servants[0].servant_class.clear();
        fs::write(&invalid_path, serde_json::to_vec(&config).expect("serialize"))
            .expect("write invalid");

        run_validate_command(TRACE_ID, &request_for(valid_path))
            .expect("warnings alone do not fail");
        let err = run_validate_command(TRACE_ID, &request_for(invalid_path))
            .expect_err("blocking issue fails");
        assert!(err.to_string().contains("1 blocking issue"));

        fs::remove_dir_all(root).expect("cleanup");
    }

    fn builtin() -> LoadedCatalog {
        load_catalog(&LoadCatalogRequest::default()).expect("builtin catalog loads")
    }

    fn request_for(path: PathBuf) -> LoadCatalogRequest {
        LoadCatalogRequest {
            catalog_path: Some(path),
            image_table_path: None,
        }
    }

    fn make_temp_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let root =
            std::env::temp_dir().join(format!("sc-cli-{prefix}-{}-{}", std::process::id(), nanos));
        fs::create_dir_all(&root).expect("create temp dir");
        root
    }
}
