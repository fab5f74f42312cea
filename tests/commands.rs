// Handler-level tests: preflight short-circuits, local usage errors,
// message templates and the upload flow, all against a mock server.
// Delete paths run with --force so no terminal prompt is involved.

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

use vagrant_cloud_cli::api::ApiClient;
use vagrant_cloud_cli::cli::args::{
    BoxCreateArgs, BoxDeleteArgs, BoxUpdateArgs, ProviderUpdateArgs, ProviderUploadArgs, UserArgs,
    VersionUpdateArgs,
};
use vagrant_cloud_cli::commands::{auth, boxes, provider, user, version, CliError};

fn client(server: &ServerGuard) -> ApiClient {
    ApiClient::new(server.url(), "test-token", None).unwrap()
}

fn mock_box_present(server: &mut ServerGuard, tag: &str) -> mockito::Mock {
    server
        .mock("GET", format!("/box/{tag}").as_str())
        .with_status(200)
        .with_body(format!(r#"{{"tag":"{tag}","versions":[]}}"#))
        .create()
}

#[test]
fn preflight_404_short_circuits_the_delete() {
    let mut server = Server::new();
    server
        .mock("GET", "/box/acme/ghost")
        .with_status(404)
        .with_body(r#"{"errors":["not found"]}"#)
        .create();
    let delete = server
        .mock("DELETE", "/box/acme/ghost")
        .expect(0)
        .create();

    let args = BoxDeleteArgs {
        tag: "acme/ghost".into(),
        force: true,
    };
    let err = boxes::delete(&client(&server), &args).unwrap_err();
    assert_eq!(err.to_string(), "Box 'acme/ghost' does not exist");
    assert_eq!(err.exit_code(), 1);
    delete.assert();
}

#[test]
fn empty_box_update_fails_locally_without_any_request() {
    let mut server = Server::new();
    let any = server
        .mock("GET", Matcher::Regex(".*".into()))
        .expect(0)
        .create();

    let args = BoxUpdateArgs {
        tag: "alice/mybox".into(),
        name: None,
        description: None,
        private: false,
        public: false,
    };
    let err = boxes::update(&client(&server), &args).unwrap_err();
    assert!(matches!(err, CliError::Usage(_)));
    assert_eq!(err.exit_code(), 2);
    any.assert();
}

#[test]
fn empty_version_update_fails_locally_without_any_request() {
    let mut server = Server::new();
    let any = server
        .mock("GET", Matcher::Regex(".*".into()))
        .expect(0)
        .create();

    let args = VersionUpdateArgs {
        tag: "alice/mybox".into(),
        version: "1.0.0".into(),
        new_version: None,
        description: None,
    };
    let err = version::update(&client(&server), &args).unwrap_err();
    assert!(matches!(err, CliError::Usage(_)));
    any.assert();
}

#[test]
fn empty_provider_update_fails_locally_without_any_request() {
    let mut server = Server::new();
    let any = server
        .mock("GET", Matcher::Regex(".*".into()))
        .expect(0)
        .create();

    let args = ProviderUpdateArgs {
        tag: "alice/mybox".into(),
        version: "1.0.0".into(),
        provider: "virtualbox".into(),
        new_provider: None,
        url: None,
    };
    let err = provider::update(&client(&server), &args).unwrap_err();
    assert!(matches!(err, CliError::Usage(_)));
    any.assert();
}

#[test]
fn box_create_422_means_the_tag_is_taken() {
    let mut server = Server::new();
    server
        .mock("POST", "/boxes")
        .with_status(422)
        .with_body(r#"{"errors":["Tag has already been taken"]}"#)
        .create();

    let args = BoxCreateArgs {
        username: "alice".into(),
        name: "mybox".into(),
        description: None,
        private: false,
    };
    let err = boxes::create(&client(&server), &args).unwrap_err();
    assert_eq!(err.to_string(), "Error: Box 'alice/mybox' already exists");
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn box_create_404_echoes_the_server_errors() {
    let mut server = Server::new();
    server
        .mock("POST", "/boxes")
        .with_status(404)
        .with_body(r#"{"errors":["Organization not found","Check the username"]}"#)
        .create();

    let args = BoxCreateArgs {
        username: "alice".into(),
        name: "mybox".into(),
        description: None,
        private: false,
    };
    let err = boxes::create(&client(&server), &args).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error: Organization not found\nError: Check the username"
    );
}

#[test]
fn public_flag_serializes_is_private_false() {
    let mut server = Server::new();
    let _preflight = mock_box_present(&mut server, "alice/mybox");
    let update = server
        .mock("PUT", "/box/alice/mybox")
        .match_body(Matcher::Json(json!({"box": {"is_private": false}})))
        .with_status(200)
        .with_body(r#"{"tag":"alice/mybox"}"#)
        .create();

    let args = BoxUpdateArgs {
        tag: "alice/mybox".into(),
        name: None,
        description: None,
        private: false,
        public: true,
    };
    boxes::update(&client(&server), &args).unwrap();
    update.assert();
}

#[test]
fn upload_fetches_the_target_then_puts_the_file_bytes() {
    use std::io::Write;

    let mut server = Server::new();
    let _preflight = mock_box_present(&mut server, "alice/mybox");
    let target = server
        .mock("GET", "/box/alice/mybox/version/1.0.0/provider/virtualbox/upload")
        .with_status(200)
        .with_body(format!(
            r#"{{"upload_path":"{}/upload-here"}}"#,
            server.url()
        ))
        .create();
    let put = server
        .mock("PUT", "/upload-here")
        .match_body(Matcher::Exact("raw box image".into()))
        .with_status(200)
        .create();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"raw box image").unwrap();

    let args = ProviderUploadArgs {
        tag: "alice/mybox".into(),
        version: "1.0.0".into(),
        provider: "virtualbox".into(),
        file: file.path().to_path_buf(),
    };
    provider::upload(&client(&server), &args).unwrap();
    target.assert();
    put.assert();
}

#[test]
fn upload_failure_on_the_put_is_not_reported_as_success() {
    use std::io::Write;

    let mut server = Server::new();
    let _preflight = mock_box_present(&mut server, "alice/mybox");
    server
        .mock("GET", "/box/alice/mybox/version/1.0.0/provider/virtualbox/upload")
        .with_status(200)
        .with_body(format!(
            r#"{{"upload_path":"{}/upload-here"}}"#,
            server.url()
        ))
        .create();
    server
        .mock("PUT", "/upload-here")
        .with_status(403)
        .with_body(r#"{"errors":["upload window expired"]}"#)
        .create();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"raw box image").unwrap();

    let args = ProviderUploadArgs {
        tag: "alice/mybox".into(),
        version: "1.0.0".into(),
        provider: "virtualbox".into(),
        file: file.path().to_path_buf(),
    };
    let err = provider::upload(&client(&server), &args).unwrap_err();
    assert_eq!(err.to_string(), "Error: upload window expired");
}

#[test]
fn invalid_token_gets_the_fixed_message() {
    let mut server = Server::new();
    server
        .mock("GET", "/authenticate")
        .with_status(401)
        .with_body(r#"{"errors":["invalid token"]}"#)
        .create();

    let err = auth::validate(&client(&server)).unwrap_err();
    assert_eq!(err.to_string(), "API Token Invalid");
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn unknown_user_gets_the_not_found_message() {
    let mut server = Server::new();
    server
        .mock("GET", "/user/ghost")
        .with_status(404)
        .with_body(r#"{"errors":["not found"]}"#)
        .create();

    let args = UserArgs {
        username: "ghost".into(),
    };
    let err = user::info(&client(&server), &args).unwrap_err();
    assert_eq!(err.to_string(), "No such user 'ghost'");
}

#[test]
fn unexpected_statuses_surface_as_diagnostics_not_panics() {
    let mut server = Server::new();
    server
        .mock("GET", "/authenticate")
        .with_status(500)
        .with_body(r#"{"errors":["internal"]}"#)
        .create();

    let err = auth::validate(&client(&server)).unwrap_err();
    assert!(matches!(err, CliError::Unhandled(_)));
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("500"));
}

#[test]
fn authenticate_is_an_explicit_unsupported_result() {
    let err = auth::authenticate().unwrap_err();
    assert!(matches!(err, CliError::NotSupported { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("authenticate is not supported"));
}
