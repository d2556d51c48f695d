use thiserror::Error;

/// Failures when fetching or reshaping expedition data.
#[derive(Debug, Error)]
pub enum ExpeditionError {
    /// Transport or decode failure talking to the upstream API.
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A nested field the flattener dereferences was absent. Malformed
    /// upstream data; surfaced as-is, never silently skipped.
    #[error("missing required field at {path}")]
    MissingField { path: String },
}

impl ExpeditionError {
    pub fn missing_field(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }
}
