use super::{confirmed, ensure_box_exists, CliError};
use crate::api::types::{BoxPatch, NewBox};
use crate::api::{ApiClient, ApiError};
use crate::cli::args::{BoxCreateArgs, BoxDeleteArgs, BoxInfoArgs, BoxUpdateArgs};
use crate::cli::output;

/// `box info <tag>`.
pub fn info(api: &ApiClient, args: &BoxInfoArgs) -> Result<(), CliError> {
    ensure_box_exists(api, &args.tag)?;
    let details = api.box_details(&args.tag)?;
    output::print_box_details(&details);
    Ok(())
}

/// `box create <username> <box>` — the one mutating command with no
/// preflight: a 404 here is the server rejecting the payload, and 422
/// means the tag is already taken.
pub fn create(api: &ApiClient, args: &BoxCreateArgs) -> Result<(), CliError> {
    let body = NewBox {
        username: &args.username,
        name: &args.name,
        short_description: args.description.as_deref(),
        is_private: args.private,
    };
    match api.create_box(&body) {
        Ok(created) => {
            println!("Box '{}' created successfully", created.tag);
            Ok(())
        }
        Err(ApiError::NotFound { errors } | ApiError::Forbidden { errors }) => {
            Err(CliError::remote(errors))
        }
        Err(ApiError::Validation { .. }) => Err(CliError::Failed(format!(
            "Error: Box '{}/{}' already exists",
            args.username, args.name
        ))),
        Err(err) => Err(err.into()),
    }
}

/// `box update <tag>` — sends only the supplied fields; supplying none is
/// a usage error caught before any network traffic, preflight included.
pub fn update(api: &ApiClient, args: &BoxUpdateArgs) -> Result<(), CliError> {
    let patch = BoxPatch {
        name: args.name.clone(),
        short_description: args.description.clone(),
        is_private: visibility(args.private, args.public),
    };
    if patch.is_empty() {
        return Err(CliError::Usage("no arguments given".into()));
    }
    ensure_box_exists(api, &args.tag)?;
    match api.update_box(&args.tag, &patch) {
        Ok(updated) => {
            println!("Box '{}' updated successfully", updated.tag);
            Ok(())
        }
        Err(ApiError::NotFound { .. }) => {
            Err(CliError::Failed("Specified box does not exist".into()))
        }
        Err(ApiError::Forbidden { errors }) => Err(CliError::remote(errors)),
        Err(err) => Err(err.into()),
    }
}

/// `box delete <tag>` — prompts unless `--force`; declining is a no-op.
pub fn delete(api: &ApiClient, args: &BoxDeleteArgs) -> Result<(), CliError> {
    ensure_box_exists(api, &args.tag)?;
    let prompt = format!("Do you really want to delete the box '{}'?", args.tag);
    if !confirmed(&prompt, args.force)? {
        return Ok(());
    }
    match api.delete_box(&args.tag) {
        Ok(deleted) => {
            println!("Box '{}' deleted successfully", deleted.tag);
            Ok(())
        }
        Err(ApiError::NotFound { .. }) => Err(CliError::Failed(format!(
            "Box '{}' does not exist",
            args.tag
        ))),
        Err(ApiError::Forbidden { errors }) => Err(CliError::remote(errors)),
        Err(err) => Err(err.into()),
    }
}

/// `--private` sets `is_private`, `--public` clears it; the flags are
/// mutually exclusive at the parser level.
fn visibility(private: bool, public: bool) -> Option<bool> {
    if private {
        Some(true)
    } else if public {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::visibility;

    // The original tooling computed "public" with bitwise negation of a
    // boolean, which never yields false. These pin the intended mapping.
    #[test]
    fn public_flag_clears_is_private() {
        assert_eq!(visibility(false, true), Some(false));
    }

    #[test]
    fn private_flag_sets_is_private() {
        assert_eq!(visibility(true, false), Some(true));
    }

    #[test]
    fn no_flag_leaves_visibility_untouched() {
        assert_eq!(visibility(false, false), None);
    }
}
