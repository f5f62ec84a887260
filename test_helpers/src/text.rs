//! Text normalisation for behavioural step parameters.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Normalizes a scalar placeholder by trimming and unquoting one outer layer.
#[must_use]
pub fn normalize_scalar(value: &str) -> String {
    unquote(value).trim().to_owned()
}
