use std::io::Write;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub const UNKNOWN_FINGERPRINT: &str = "unknown";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Who emitted an event: one trace per process, spans per command.
#[derive(Debug, Clone)]
pub struct LogIdentity {
    pub trace_id: String,
    pub span_id: String,
    pub catalog_fingerprint: String,
    pub component: String,
}

impl LogIdentity {
    pub fn new(
        trace_id: impl Into<String>,
        span_id: impl Into<String>,
        catalog_fingerprint: impl Into<String>,
        component: impl Into<String>,
    ) -> Self {
        Self {
            trace_id: trace_id.into(),
            span_id: span_id.into(),
            catalog_fingerprint: catalog_fingerprint.into(),
            component: component.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEvent {
    pub ts: String,
    pub level: LogLevel,
    pub event_code: String,
    pub message: String,
    pub trace_id: String,
    pub span_id: String,
    pub catalog_fingerprint: String,
    pub component: String,
    pub context: Value,
}

impl LogEvent {
    pub fn new(
        level: LogLevel,
        event_code: impl Into<String>,
        message: impl Into<String>,
        identity: LogIdentity,
        context: Value,
    ) -> Self {
        Self {
            ts: now_utc_rfc3339_millis(),
            level,
            event_code: event_code.into(),
            message: message.into(),
            trace_id: identity.trace_id,
            span_id: identity.span_id,
            catalog_fingerprint: identity.catalog_fingerprint,
            component: identity.component,
            context,
        }
    }
}

pub fn now_utc_rfc3339_millis() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn new_trace_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn emit_ndjson<W: Write>(writer: &mut W, event: &LogEvent) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, event)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err.to_string()))?;
    writer.write_all(b"\n")?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_single_json_line() {
        let mut buffer = Vec::<u8>::new();
        let event = LogEvent::new(
            LogLevel::Info,
            "SC-CL-002",
            "catalog_loaded",
            LogIdentity::new("trace-1", "load", "abc123", "servant-catalog-cli"),
            serde_json::json!({"tiers": 5}),
        );

        emit_ndjson(&mut buffer, &event).expect("write event");
        let rendered = String::from_utf8(buffer).expect("utf8");

        assert!(rendered.ends_with('\n'));
        assert_eq!(rendered.matches('\n').count(), 1);
        assert!(rendered.contains("SC-CL-002"));
        assert!(rendered.contains("\"level\":\"INFO\""));
    }

    #[test]
    fn trace_ids_are_unique() {
        assert_ne!(new_trace_id(), new_trace_id());
    }
}
