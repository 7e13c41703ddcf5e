use std::path::Path;
use std::process::{Command, Output};

/// Connection variables cleared so the caller's shell cannot leak in.
const CONNECTION_ENV: &[&str] = &["AWX_HOST", "AWX_TOKEN", "AWX_USERNAME", "AWX_PASSWORD"];

/// Build a CLI command with an isolated config directory.
pub fn cli(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_awx"));
    cmd.args(args);
    for var in CONNECTION_ENV {
        cmd.env_remove(var);
    }
    cmd.env("AWX_CONFIG_DIR", config_dir);
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Run the CLI against `host` on a blocking thread, so the mock server
/// keeps serving while the binary runs.
pub async fn run_cli(args: &[&str], config_dir: &Path, host: &str) -> Output {
    let mut cmd = cli(args, config_dir);
    cmd.env("AWX_HOST", host);
    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute CLI"))
        .await
        .expect("CLI thread panicked")
}

/// Run the CLI and expect success; returns stdout.
pub async fn run_cli_success(args: &[&str], config_dir: &Path, host: &str) -> String {
    let output = run_cli(args, config_dir, host).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure; returns stderr.
pub async fn run_cli_failure(args: &[&str], config_dir: &Path, host: &str) -> String {
    let output = run_cli(args, config_dir, host).await;
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}
