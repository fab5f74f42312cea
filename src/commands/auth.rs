use super::CliError;
use crate::api::{ApiClient, ApiError};

/// `authenticate` — token creation needs to know whether 2FA is enabled
/// for the account, and the API gives no way to tell, so this client
/// reports it as unsupported instead of half-working.
pub fn authenticate() -> Result<(), CliError> {
    Err(CliError::NotSupported {
        command: "authenticate",
        reason: "there is no way to know whether 2FA is enabled for an account; \
                 create a token in the Vagrant Cloud web UI instead",
    })
}

/// `validate` — `GET /authenticate` succeeds only for a valid token.
pub fn validate(api: &ApiClient) -> Result<(), CliError> {
    match api.validate_token() {
        Ok(()) => {
            println!("API Token Validated");
            Ok(())
        }
        Err(ApiError::Unauthorized { .. }) => Err(CliError::Failed("API Token Invalid".into())),
        Err(err) => Err(err.into()),
    }
}
