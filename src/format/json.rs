use serde::Serialize;

use crate::level::Severity;
use crate::message::{Message, Params};

#[derive(Serialize)]
struct JsonRecord<'a> {
    timestamp: &'a str,
    level: &'static str,
    message: &'a Message,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<&'a Params>,
}

/// Render the single-line JSON form. The `params` key is omitted entirely
/// when the mapping is empty, and the level label is never colorized.
pub fn render(timestamp: &str, severity: Severity, message: &Message, params: &Params) -> String {
    let record = JsonRecord {
        timestamp,
        level: severity.label(),
        message,
        params: if params.is_empty() { None } else { Some(params) },
    };

    serde_json::to_string(&record).unwrap_or_default()
}
