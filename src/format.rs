// Response body formatting for diagnostics.
// Pretty-prints JSON bodies; anything else passes through as text.

/// Render raw response bytes for logging. JSON bodies are re-serialized with
/// indentation; bodies that fail to parse are rendered as (lossy) plain text.
/// Always produces some string.
pub fn pretty_body(bytes: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(value) => serde_json::to_string_pretty(&value)
            .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned()),
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}
