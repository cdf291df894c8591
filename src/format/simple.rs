use serde_json::Value;

use crate::format::colors::ColorScheme;
use crate::level::Severity;
use crate::message::{is_truthy, Message, Params};

/// Render the human-readable form:
/// `<timestamp> [<level>]<padding><message>\t<params>`
///
/// Padding is computed from the plain label before any color wrapping so
/// escape codes never shift alignment. The tab is always present, even
/// when every param was filtered out.
pub fn render(
    timestamp: &str,
    severity: Severity,
    message: &Message,
    params: &Params,
    separator: &str,
    colorize: bool,
) -> String {
    let label = severity.label();
    let padding = " ".repeat(7usize.saturating_sub(label.len()));
    let level = ColorScheme::for_mode(colorize).paint(severity);
    let params_text = render_params(params, separator);

    format!(
        "{} [{}]{}{}\t{}",
        timestamp, level, padding, message, params_text
    )
}

/// Join truthy entries as `key -> value`, separated by ` <separator> `.
/// Falsy values are dropped entirely; insertion order is preserved.
fn render_params(params: &Params, separator: &str) -> String {
    let rendered: Vec<String> = params
        .iter()
        .filter(|(_, value)| is_truthy(value))
        .map(|(key, value)| format!("{} -> {}", key, display_value(value)))
        .collect();

    rendered.join(&format!(" {} ", separator))
}

// Strings render bare; everything else through its JSON form
fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
