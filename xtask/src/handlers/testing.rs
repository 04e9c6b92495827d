use crate::services::utils::normalize_project_name;
use anyhow::{Context, bail};
use std::process::Command;

/// Which `cargo` test flavour to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Runner {
    Nextest,
    CargoTest,
    Doctest,
}

/// Runs tests in the workspace (`None` or `"all"`) or a specific crate.
///
/// Uses `cargo nextest` when it is installed.
///
/// # Errors
/// Returns an error if the test runner cannot be spawned or any test fails.
pub fn run_tests(project: Option<&str>) -> anyhow::Result<()> {
    let has_nextest = Command::new("cargo-nextest").arg("--version").output().is_ok();
    let runner = if has_nextest { Runner::Nextest } else { Runner::CargoTest };
    run(runner, project)
}

/// Runs doc tests in the workspace (`None` or `"all"`) or a specific crate.
///
/// # Errors
/// Returns an error if the test runner cannot be spawned or any doc test fails.
pub fn run_doctests(project: Option<&str>) -> anyhow::Result<()> {
    run(Runner::Doctest, project)
}

fn run(runner: Runner, project: Option<&str>) -> anyhow::Result<()> {
    let args = cargo_args(runner, project);
    println!("🧪 cargo {}", args.join(" "));

    let status = Command::new("cargo").args(&args).status().context("Failed to execute cargo")?;
    if !status.success() {
        bail!("Tests failed!");
    }
    Ok(())
}

fn cargo_args(runner: Runner, project: Option<&str>) -> Vec<String> {
    let mut args: Vec<String> = match runner {
        Runner::Nextest => vec!["nextest".into(), "run".into()],
        Runner::CargoTest => vec!["test".into()],
        Runner::Doctest => vec!["test".into(), "--doc".into()],
    };

    match project.filter(|value| *value != "all") {
        Some(project) => args.extend(["-p".into(), normalize_project_name(project)]),
        None => args.push("--workspace".into()),
    }

    args.push("--all-features".into());

    match runner {
        Runner::Nextest => args.extend(
            ["--failure-output", "immediate-final", "--success-output", "never"].map(String::from),
        ),
        Runner::CargoTest => args.extend(["--", "-q"].map(String::from)),
        Runner::Doctest => {},
    }

    args
}
