use super::{confirmed, ensure_box_exists, CliError};
use crate::api::types::{NewVersion, VersionPatch};
use crate::api::{ApiClient, ApiError};
use crate::cli::args::{VersionCreateArgs, VersionDeleteArgs, VersionSelector, VersionUpdateArgs};
use crate::cli::output;

/// `box version info <tag> <version>`.
pub fn info(api: &ApiClient, args: &VersionSelector) -> Result<(), CliError> {
    ensure_box_exists(api, &args.tag)?;
    match api.version_details(&args.tag, &args.version) {
        Ok(details) => {
            output::print_version_details(&args.tag, &args.version, &details);
            Ok(())
        }
        Err(ApiError::NotFound { .. }) => Err(CliError::Failed(format!(
            "Version '{}' of specified box does not exist",
            args.version
        ))),
        Err(ApiError::Forbidden { errors }) => Err(CliError::remote(errors)),
        Err(err) => Err(err.into()),
    }
}

/// `box version create <tag> <version>`.
pub fn create(api: &ApiClient, args: &VersionCreateArgs) -> Result<(), CliError> {
    ensure_box_exists(api, &args.tag)?;
    let body = NewVersion {
        version: &args.version,
        description: args.description.as_deref(),
    };
    match api.create_version(&args.tag, &body) {
        Ok(created) => {
            println!("Version '{}' created successfully", created.version);
            Ok(())
        }
        Err(
            ApiError::NotFound { errors }
            | ApiError::Forbidden { errors }
            | ApiError::Validation { errors },
        ) => Err(CliError::remote(errors)),
        Err(err) => Err(err.into()),
    }
}

/// `box version update <tag> <version>` — only supplied fields are sent;
/// supplying none fails locally before any network traffic.
pub fn update(api: &ApiClient, args: &VersionUpdateArgs) -> Result<(), CliError> {
    let patch = VersionPatch {
        version: args.new_version.clone(),
        description: args.description.clone(),
    };
    if patch.is_empty() {
        return Err(CliError::Usage("no arguments given".into()));
    }
    ensure_box_exists(api, &args.tag)?;
    match api.update_version(&args.tag, &args.version, &patch) {
        Ok(()) => {
            println!("Version '{}' updated successfully", args.version);
            Ok(())
        }
        Err(ApiError::NotFound { .. }) => Err(CliError::Failed(format!(
            "Version '{}' does not exist",
            args.version
        ))),
        Err(ApiError::Forbidden { errors } | ApiError::Validation { errors }) => {
            Err(CliError::remote(errors))
        }
        Err(err) => Err(err.into()),
    }
}

/// `box version delete <tag> <version>` — prompts unless `--force`.
pub fn delete(api: &ApiClient, args: &VersionDeleteArgs) -> Result<(), CliError> {
    ensure_box_exists(api, &args.tag)?;
    let prompt = format!(
        "Do you really want to delete the version {} from box {}?",
        args.version, args.tag
    );
    if !confirmed(&prompt, args.force)? {
        return Ok(());
    }
    match api.delete_version(&args.tag, &args.version) {
        Ok(deleted) => {
            println!("Version '{}' deleted successfully", deleted.version);
            Ok(())
        }
        Err(ApiError::NotFound { .. }) => Err(CliError::Failed(format!(
            "Version '{}' does not exist",
            args.version
        ))),
        Err(ApiError::Forbidden { errors }) => Err(CliError::remote(errors)),
        Err(err) => Err(err.into()),
    }
}

/// `box version release <tag> <version>`.
pub fn release(api: &ApiClient, args: &VersionSelector) -> Result<(), CliError> {
    ensure_box_exists(api, &args.tag)?;
    match api.release_version(&args.tag, &args.version) {
        Ok(released) => {
            println!("Version '{}' released successfully", released.version);
            Ok(())
        }
        Err(ApiError::NotFound { .. }) => Err(CliError::Failed(format!(
            "Version '{}' does not exist",
            args.version
        ))),
        Err(ApiError::Forbidden { errors } | ApiError::Validation { errors }) => {
            Err(CliError::remote(errors))
        }
        Err(err) => Err(err.into()),
    }
}

/// `box version revoke <tag> <version>`.
pub fn revoke(api: &ApiClient, args: &VersionSelector) -> Result<(), CliError> {
    ensure_box_exists(api, &args.tag)?;
    match api.revoke_version(&args.tag, &args.version) {
        Ok(revoked) => {
            println!("Version '{}' revoked successfully", revoked.version);
            Ok(())
        }
        Err(ApiError::NotFound { .. }) => Err(CliError::Failed(format!(
            "Version '{}' does not exist",
            args.version
        ))),
        Err(ApiError::Forbidden { errors } | ApiError::Validation { errors }) => {
            Err(CliError::remote(errors))
        }
        Err(err) => Err(err.into()),
    }
}
