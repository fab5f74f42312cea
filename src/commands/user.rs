use super::CliError;
use crate::api::{ApiClient, ApiError};
use crate::cli::args::UserArgs;
use crate::cli::output;

/// `user <username>` — list the boxes a user owns.
pub fn info(api: &ApiClient, args: &UserArgs) -> Result<(), CliError> {
    match api.user(&args.username) {
        Ok(user) => {
            output::print_user(&user);
            Ok(())
        }
        Err(ApiError::NotFound { .. }) => Err(CliError::Failed(format!(
            "No such user '{}'",
            args.username
        ))),
        Err(err) => Err(err.into()),
    }
}
