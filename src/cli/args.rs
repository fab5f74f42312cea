/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// vagrant-cloud — manage boxes, versions and providers on Vagrant Cloud.
#[derive(Debug, Parser)]
#[command(
    name = "vagrant-cloud",
    about = "Manage boxes, versions and providers on Vagrant Cloud",
    after_help = "API token must be set in either the 'ATLAS_TOKEN' or \
                  'VAGRANT_CLOUD_TOKEN' environment variable",
    version
)]
pub struct Cli {
    /// Request timeout in seconds (no timeout when omitted).
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get an API token (not supported by this client).
    Authenticate,
    /// Validate the API token.
    Validate,
    /// Get information about a user.
    User(UserArgs),
    /// Box actions.
    #[command(subcommand)]
    Box(BoxAction),
}

#[derive(Debug, Args)]
pub struct UserArgs {
    /// Username to look up.
    pub username: String,
}

#[derive(Debug, Subcommand)]
pub enum BoxAction {
    /// Get information about a box.
    Info(BoxInfoArgs),
    /// Create a box.
    Create(BoxCreateArgs),
    /// Update a box.
    Update(BoxUpdateArgs),
    /// Delete a box.
    Delete(BoxDeleteArgs),
    /// Version actions.
    #[command(subcommand)]
    Version(VersionAction),
    /// Provider actions.
    #[command(subcommand)]
    Provider(ProviderAction),
}

#[derive(Debug, Args)]
pub struct BoxInfoArgs {
    /// Box tag in the format 'myuser/test'.
    pub tag: String,
}

#[derive(Debug, Args)]
pub struct BoxCreateArgs {
    /// The username of the organization that will own this box.
    pub username: String,
    /// The name of the box.
    pub name: String,

    /// A short summary of the box.
    #[arg(short, long)]
    pub description: Option<String>,

    /// Make the box private (default is public).
    #[arg(short, long)]
    pub private: bool,
}

#[derive(Debug, Args)]
pub struct BoxUpdateArgs {
    /// Box tag in the format 'myuser/test'.
    pub tag: String,

    /// The name of the box.
    #[arg(short, long)]
    pub name: Option<String>,

    /// A short summary of the box.
    #[arg(short, long)]
    pub description: Option<String>,

    /// Make the box private.
    #[arg(short, long)]
    pub private: bool,

    /// Make the box public.
    #[arg(short = 'u', long, conflicts_with = "private")]
    pub public: bool,
}

#[derive(Debug, Args)]
pub struct BoxDeleteArgs {
    /// Box tag in the format 'myuser/test'.
    pub tag: String,

    /// Don't prompt for confirmation.
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Subcommand)]
pub enum VersionAction {
    /// Get version information for a box.
    Info(VersionSelector),
    /// Create a new version for a box.
    Create(VersionCreateArgs),
    /// Update an existing version of a box.
    Update(VersionUpdateArgs),
    /// Delete a version of a box.
    Delete(VersionDeleteArgs),
    /// Release a version of a box.
    Release(VersionSelector),
    /// Revoke a version of a box.
    Revoke(VersionSelector),
}

#[derive(Debug, Args)]
pub struct VersionSelector {
    /// Box tag in the format 'myuser/test'.
    pub tag: String,
    /// Box version.
    pub version: String,
}

#[derive(Debug, Args)]
pub struct VersionCreateArgs {
    /// Box tag in the format 'myuser/test'.
    pub tag: String,
    /// Box version to create.
    pub version: String,

    /// A description for this version. Can be formatted with Markdown.
    #[arg(short, long)]
    pub description: Option<String>,
}

#[derive(Debug, Args)]
pub struct VersionUpdateArgs {
    /// Box tag in the format 'myuser/test'.
    pub tag: String,
    /// Box version to update.
    pub version: String,

    /// The new version number for this version.
    #[arg(short = 'v', long = "version", value_name = "NEWVERSION")]
    pub new_version: Option<String>,

    /// A description for this version. Can be formatted with Markdown.
    #[arg(short, long)]
    pub description: Option<String>,
}

#[derive(Debug, Args)]
pub struct VersionDeleteArgs {
    /// Box tag in the format 'myuser/test'.
    pub tag: String,
    /// Version to delete.
    pub version: String,

    /// Don't prompt for confirmation.
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Subcommand)]
pub enum ProviderAction {
    /// Get provider information for a box.
    Info(ProviderSelector),
    /// Create a new provider for a box.
    Create(ProviderCreateArgs),
    /// Update an existing provider of a box.
    Update(ProviderUpdateArgs),
    /// Delete a provider of a box.
    Delete(ProviderDeleteArgs),
    /// Upload a box file for a provider.
    Upload(ProviderUploadArgs),
}

#[derive(Debug, Args)]
pub struct ProviderSelector {
    /// Box tag in the format 'myuser/test'.
    pub tag: String,
    /// Box version.
    pub version: String,
    /// Provider name.
    pub provider: String,
}

#[derive(Debug, Args)]
pub struct ProviderCreateArgs {
    /// Box tag in the format 'myuser/test'.
    pub tag: String,
    /// Box version.
    pub version: String,
    /// The name of the provider.
    pub provider: String,

    /// A valid URL to download this provider. If omitted, the box image
    /// must be uploaded before the provider can be used.
    #[arg(short, long)]
    pub url: Option<String>,
}

#[derive(Debug, Args)]
pub struct ProviderUpdateArgs {
    /// Box tag in the format 'myuser/test'.
    pub tag: String,
    /// Box version.
    pub version: String,
    /// Box provider to update.
    pub provider: String,

    /// The new name of the provider.
    #[arg(short = 'p', long = "provider", value_name = "NEWPROVIDER")]
    pub new_provider: Option<String>,

    /// A valid URL to download this provider.
    #[arg(short, long)]
    pub url: Option<String>,
}

#[derive(Debug, Args)]
pub struct ProviderDeleteArgs {
    /// Box tag in the format 'myuser/test'.
    pub tag: String,
    /// Box version.
    pub version: String,
    /// Provider to delete.
    pub provider: String,

    /// Don't prompt for confirmation.
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct ProviderUploadArgs {
    /// Box tag in the format 'myuser/test'.
    pub tag: String,
    /// Box version.
    pub version: String,
    /// Box provider to upload.
    pub provider: String,
    /// Path to the box file to upload.
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn box_update_parses_flags() {
        let cli = Cli::try_parse_from([
            "vagrant-cloud",
            "box",
            "update",
            "alice/mybox",
            "--description",
            "x",
        ])
        .unwrap();
        match cli.command {
            Command::Box(BoxAction::Update(args)) => {
                assert_eq!(args.tag, "alice/mybox");
                assert_eq!(args.description.as_deref(), Some("x"));
                assert!(args.name.is_none());
                assert!(!args.private);
                assert!(!args.public);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn private_and_public_are_mutually_exclusive() {
        let res = Cli::try_parse_from([
            "vagrant-cloud",
            "box",
            "update",
            "alice/mybox",
            "--private",
            "--public",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn version_update_distinguishes_selector_from_new_version() {
        let cli = Cli::try_parse_from([
            "vagrant-cloud",
            "box",
            "version",
            "update",
            "alice/mybox",
            "1.0.0",
            "-v",
            "1.0.1",
        ])
        .unwrap();
        match cli.command {
            Command::Box(BoxAction::Version(VersionAction::Update(args))) => {
                assert_eq!(args.version, "1.0.0");
                assert_eq!(args.new_version.as_deref(), Some("1.0.1"));
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn provider_upload_takes_a_file_path() {
        let cli = Cli::try_parse_from([
            "vagrant-cloud",
            "box",
            "provider",
            "upload",
            "alice/mybox",
            "1.0.0",
            "virtualbox",
            "./build/mybox.box",
        ])
        .unwrap();
        match cli.command {
            Command::Box(BoxAction::Provider(ProviderAction::Upload(args))) => {
                assert_eq!(args.provider, "virtualbox");
                assert_eq!(args.file, PathBuf::from("./build/mybox.box"));
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }
}
