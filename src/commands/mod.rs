// Command handlers, one module per resource. Each handler performs the
// HTTP call(s) through `ApiClient` and translates failures into
// `CliError` per the response-translation table.

pub mod auth;
pub mod boxes;
pub mod errors;
pub mod provider;
pub mod user;
pub mod version;

pub use errors::CliError;

use dialoguer::Input;

use crate::api::ApiClient;
use crate::cli::args::{BoxAction, Command, ProviderAction, VersionAction};

/// Dispatch a parsed command to its handler.
pub fn dispatch(api: &ApiClient, command: &Command) -> Result<(), CliError> {
    match command {
        Command::Authenticate => auth::authenticate(),
        Command::Validate => auth::validate(api),
        Command::User(args) => user::info(api, args),
        Command::Box(action) => match action {
            BoxAction::Info(args) => boxes::info(api, args),
            BoxAction::Create(args) => boxes::create(api, args),
            BoxAction::Update(args) => boxes::update(api, args),
            BoxAction::Delete(args) => boxes::delete(api, args),
            BoxAction::Version(action) => match action {
                VersionAction::Info(args) => version::info(api, args),
                VersionAction::Create(args) => version::create(api, args),
                VersionAction::Update(args) => version::update(api, args),
                VersionAction::Delete(args) => version::delete(api, args),
                VersionAction::Release(args) => version::release(api, args),
                VersionAction::Revoke(args) => version::revoke(api, args),
            },
            BoxAction::Provider(action) => match action {
                ProviderAction::Info(args) => provider::info(api, args),
                ProviderAction::Create(args) => provider::create(api, args),
                ProviderAction::Update(args) => provider::update(api, args),
                ProviderAction::Delete(args) => provider::delete(api, args),
                ProviderAction::Upload(args) => provider::upload(api, args),
            },
        },
    }
}

/// Preflight: box-scoped commands check the parent box first and
/// short-circuit when it is absent.
pub(crate) fn ensure_box_exists(api: &ApiClient, tag: &str) -> Result<(), CliError> {
    if api.box_exists(tag)? {
        Ok(())
    } else {
        Err(CliError::Failed(format!("Box '{tag}' does not exist")))
    }
}

/// Ask the `[y/N]` question unless `force` is set. Returns whether the
/// destructive operation should proceed; declining is not an error.
pub(crate) fn confirmed(prompt: &str, force: bool) -> Result<bool, CliError> {
    if force {
        return Ok(true);
    }
    let answer: String = Input::new()
        .with_prompt(format!("{prompt} [y/N]"))
        .allow_empty(true)
        .interact_text()?;
    Ok(is_affirmative(&answer))
}

/// `y` and `yes` (case-insensitive) confirm; anything else aborts.
fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::is_affirmative;

    #[test]
    fn affirmative_answers() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("YES"));
        assert!(is_affirmative(" yes "));
    }

    #[test]
    fn declining_answers() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yep"));
        assert!(!is_affirmative("y es"));
    }
}
