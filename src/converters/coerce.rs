//! Text ⇄ scalar coercion
//!
//! Parsing never fails: absent, empty or malformed text becomes the zero
//! value, so "missing", "zero" and "garbage" all read back the same.

/// Parse a decimal integer, 0 on any failure (including overflow)
pub fn coerce_int(text: Option<&str>) -> i32 {
    text.and_then(|s| s.trim().parse::<i32>().ok()).unwrap_or(0)
}

/// Parse a decimal float, 0.0 on any failure
pub fn coerce_float(text: Option<&str>) -> f32 {
    text.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// True only for the exact literal `true`
pub fn coerce_bool(text: Option<&str>) -> bool {
    matches!(text.map(str::trim), Some("true"))
}

pub fn format_int(value: i32) -> String {
    value.to_string()
}

/// Shortest text that parses back to the same `f32` (`8.8`, `85`, `0.25`)
pub fn format_float(value: f32) -> String {
    value.to_string()
}

pub fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
