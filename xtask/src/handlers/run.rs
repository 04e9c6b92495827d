use crate::services::utils::normalize_project_name;
use anyhow::{Context, bail};
use std::process::Command;

/// Runs an app as a local HTTP listener with `cargo run`.
///
/// `port` and `stage` are forwarded as `SERVER_PORT` and `STAGE`; anything not given
/// falls back to the app's own configuration.
///
/// # Errors
/// Returns an error if the app fails to build or exits with a non-zero status.
pub fn run_project(project: &str, port: Option<u16>, stage: Option<&str>) -> anyhow::Result<()> {
    let project = normalize_project_name(project);
    println!("🚀 Starting {project} (Ctrl+C to stop)...");

    let mut command = Command::new("cargo");
    command.args(["run", "-p", &project]);
    if let Some(port) = port {
        command.env("SERVER_PORT", port.to_string());
    }
    if let Some(stage) = stage {
        command.env("STAGE", stage);
    }

    let status = command.status().context("Failed to execute cargo run")?;

    if !status.success() {
        bail!("{project} exited with non-zero status: {}", status.code().unwrap_or(-1));
    }

    Ok(())
}
