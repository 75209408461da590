mod cli;
mod commands;
mod logging;

use clap::Parser;
use servant_catalog_core::observability::{new_trace_id, LogLevel, UNKNOWN_FINGERPRINT};

use crate::cli::Cli;
use crate::commands::run_command;
use crate::logging::log_event;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let trace_id = new_trace_id();

    log_event(
        &trace_id,
        UNKNOWN_FINGERPRINT,
        LogLevel::Info,
        "startup",
        "SC-CL-001",
        "servant_catalog_cli_started",
        serde_json::json!({
            "command": cli.command_name(),
            "catalog": cli.catalog,
            "image_table": cli.image_table,
        }),
    );

    let outcome = run_command(&trace_id, &cli.command, &cli.load_request());
    let result = outcome.result;

    log_event(
        &trace_id,
        outcome.fingerprint.as_deref().unwrap_or(UNKNOWN_FINGERPRINT),
        if result.is_ok() {
            LogLevel::Info
        } else {
            LogLevel::Error
        },
        cli.command_name(),
        "SC-CL-008",
        "command_finished",
        serde_json::json!({
            "ok": result.is_ok(),
            "error": result.as_ref().err().map(|err| format!("{err:#}")),
        }),
    );

    result
}
