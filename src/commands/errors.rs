// Command-level failures and their exit-code mapping. Handlers translate
// `ApiError` into one of these per the response-translation table; main
// prints the message and exits with `exit_code()`.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum CliError {
    /// Local argument validation failed; nothing was sent.
    #[error("error: {0}")]
    Usage(String),

    /// A handled failure with a single user-facing message.
    #[error("{0}")]
    Failed(String),

    /// Server-side errors echoed from the response body, one per line.
    #[error("{}", render_remote(.errors))]
    Remote { errors: Vec<String> },

    /// The command exists for parity with the API surface but is not
    /// implemented by this client.
    #[error("{command} is not supported: {reason}")]
    NotSupported {
        command: &'static str,
        reason: &'static str,
    },

    /// Terminal prompt I/O failed.
    #[error("prompt failed: {0}")]
    Prompt(#[from] std::io::Error),

    /// Anything the translation table does not cover.
    #[error(transparent)]
    Unhandled(#[from] ApiError),
}

fn render_remote(errors: &[String]) -> String {
    errors
        .iter()
        .map(|e| format!("Error: {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl CliError {
    pub fn remote(errors: Vec<String>) -> Self {
        Self::Remote { errors }
    }

    /// Process exit status: 2 for usage errors, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            _ => 1,
        }
    }
}
