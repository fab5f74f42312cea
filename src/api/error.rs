// Failure taxonomy for API calls. The handled statuses (401/403/404/422)
// get their own variants so command handlers can match on them; anything
// else lands in `Status` or `Transport` and surfaces as a diagnostic.

use thiserror::Error;

/// A failed call against the Vagrant Cloud API.
///
/// The `errors` lists are parsed best-effort from the JSON error envelope
/// (`{"errors": [...]}`) the API attaches to failure responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 — the token was rejected. Only `validate` cares about this
    /// beyond treating it as fatal.
    #[error("authentication failed{}", render(.errors))]
    Unauthorized { errors: Vec<String> },

    /// 404 — the addressed resource does not exist.
    #[error("resource not found{}", render(.errors))]
    NotFound { errors: Vec<String> },

    /// 403 — the token lacks permission for this operation.
    #[error("forbidden{}", render(.errors))]
    Forbidden { errors: Vec<String> },

    /// 422 — the server rejected the payload.
    #[error("validation failed{}", render(.errors))]
    Validation { errors: Vec<String> },

    /// Any other non-success status.
    #[error("unexpected HTTP status {status}{}", render(.errors))]
    Status { status: u16, errors: Vec<String> },

    /// Connection, TLS, timeout or body-decoding failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The local box file for an upload could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

fn render(errors: &[String]) -> String {
    if errors.is_empty() {
        String::new()
    } else {
        format!(": {}", errors.join(", "))
    }
}
