use std::io;

use servant_catalog_core::observability::{emit_ndjson, LogEvent, LogIdentity, LogLevel};

pub const COMPONENT: &str = "servant-catalog-cli";

pub fn log_event(
    trace_id: &str,
    catalog_fingerprint: &str,
    level: LogLevel,
    span_id: &str,
    code: &str,
    message: &str,
    context: serde_json::Value,
) {
    let event = LogEvent::new(
        level,
        code,
        message,
        LogIdentity::new(trace_id, span_id, catalog_fingerprint, COMPONENT),
        context,
    );

    let mut stderr = io::stderr();
    let _ = emit_ndjson(&mut stderr, &event);
}
