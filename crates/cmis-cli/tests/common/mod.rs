#![allow(dead_code)]

use std::path::Path;
use std::process::Output;

use serde_json::json;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI binary with an isolated HOME so profiles never leak between tests.
pub async fn run_cli(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cmis"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("NO_COLOR", "1");
    for var in ["CMIS_URL", "CMIS_USERNAME", "CMIS_PASSWORD", "CMIS_TOKEN", "RUST_LOG"] {
        cmd.env_remove(var);
    }
    cmd.output().await.expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub async fn run_cli_success(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Service URL of a mock server.
pub fn service_url(server: &MockServer) -> String {
    format!("{}/browser", server.uri())
}

/// Serve a service document listing repositories `A1` and `B2`.
pub async fn mount_service_document(server: &MockServer) {
    let base = server.uri();
    Mock::given(method("GET"))
        .and(path("/browser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "A1": {
                "repositoryId": "A1",
                "repositoryName": "Main",
                "repositoryUrl": format!("{base}/browser/A1"),
                "rootFolderUrl": format!("{base}/browser/A1/root")
            },
            "B2": {
                "repositoryId": "B2",
                "repositoryName": "Archive",
                "repositoryUrl": format!("{base}/browser/B2"),
                "rootFolderUrl": format!("{base}/browser/B2/root")
            }
        })))
        .mount(server)
        .await;
}

/// Log in against the mock server with admin/admin.
pub async fn login(server: &MockServer, home: &Path) {
    let url = service_url(server);
    run_cli_success(
        &["login", "--url", &url, "--username", "admin", "--password", "admin"],
        home,
    )
    .await;
}
