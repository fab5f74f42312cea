use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::{confirmed, ensure_box_exists, CliError};
use crate::api::types::{NewProvider, ProviderPatch};
use crate::api::{ApiClient, ApiError};
use crate::cli::args::{
    ProviderCreateArgs, ProviderDeleteArgs, ProviderSelector, ProviderUpdateArgs,
    ProviderUploadArgs,
};
use crate::cli::output;

/// `box provider info <tag> <version> <provider>`.
pub fn info(api: &ApiClient, args: &ProviderSelector) -> Result<(), CliError> {
    ensure_box_exists(api, &args.tag)?;
    match api.provider_details(&args.tag, &args.version, &args.provider) {
        Ok(details) => {
            output::print_provider_details(&args.tag, &args.version, &details);
            Ok(())
        }
        Err(ApiError::NotFound { .. }) => Err(CliError::Failed(format!(
            "Provider '{}' of specified box does not exist",
            args.provider
        ))),
        Err(ApiError::Forbidden { errors }) => Err(CliError::remote(errors)),
        Err(err) => Err(err.into()),
    }
}

/// `box provider create <tag> <version> <provider>`.
pub fn create(api: &ApiClient, args: &ProviderCreateArgs) -> Result<(), CliError> {
    ensure_box_exists(api, &args.tag)?;
    let body = NewProvider {
        name: &args.provider,
        url: args.url.as_deref(),
    };
    match api.create_provider(&args.tag, &args.version, &body) {
        Ok(created) => {
            println!("Provider '{}' created successfully", created.name);
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

/// `box provider update <tag> <version> <provider>` — only supplied
/// fields are sent; supplying none fails locally.
pub fn update(api: &ApiClient, args: &ProviderUpdateArgs) -> Result<(), CliError> {
    let patch = ProviderPatch {
        name: args.new_provider.clone(),
        url: args.url.clone(),
    };
    if patch.is_empty() {
        return Err(CliError::Usage("no arguments given".into()));
    }
    ensure_box_exists(api, &args.tag)?;
    match api.update_provider(&args.tag, &args.version, &args.provider, &patch) {
        Ok(()) => {
            println!("Provider '{}' updated successfully", args.provider);
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

/// `box provider delete <tag> <version> <provider>` — prompts unless
/// `--force`.
pub fn delete(api: &ApiClient, args: &ProviderDeleteArgs) -> Result<(), CliError> {
    ensure_box_exists(api, &args.tag)?;
    let prompt = format!(
        "Do you really want to delete the provider {} from version v{} of box {}?",
        args.provider, args.version, args.tag
    );
    if !confirmed(&prompt, args.force)? {
        return Ok(());
    }
    match api.delete_provider(&args.tag, &args.version, &args.provider) {
        Ok(deleted) => {
            println!("Provider '{}' deleted successfully", deleted.name);
            Ok(())
        }
        Err(ApiError::NotFound { .. }) => Err(CliError::Failed(format!(
            "Provider '{}' does not exist",
            args.provider
        ))),
        Err(ApiError::Forbidden { errors }) => Err(CliError::remote(errors)),
        Err(err) => Err(err.into()),
    }
}

/// `box provider upload <tag> <version> <provider> <file>` — two
/// sequential requests: fetch the upload target, then PUT the raw file
/// bytes to it. Success is reported only when both succeed.
pub fn upload(api: &ApiClient, args: &ProviderUploadArgs) -> Result<(), CliError> {
    ensure_box_exists(api, &args.tag)?;
    let outcome = api
        .upload_target(&args.tag, &args.version, &args.provider)
        .and_then(|target| {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
            spinner.set_message("Uploading...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let res = api.upload_file(&target.upload_path, &args.file);
            spinner.finish_and_clear();
            res
        });
    match outcome {
        Ok(()) => {
            println!("Provider '{}' uploaded successfully", args.provider);
            Ok(())
        }
        Err(ApiError::NotFound { .. }) => {
            Err(CliError::Failed("Error: Provider does not exist".into()))
        }
        Err(ApiError::Forbidden { errors } | ApiError::Validation { errors }) => {
            Err(CliError::remote(errors))
        }
        Err(err) => Err(err.into()),
    }
}
