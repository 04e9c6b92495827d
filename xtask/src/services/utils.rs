use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CRATE_PREFIX: &str = "slref-";

/// Returns the root directory of the workspace.
///
/// # Errors
/// Returns an error if the manifest directory does not have a parent.
pub fn get_project_root() -> Result<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .context("Could not find project root from xtask manifest")
}

#[derive(Debug, Deserialize)]
pub struct CrateInfo {
    #[serde(skip)]
    pub path: PathBuf,
    pub package: PackageInfo,
}

#[derive(Debug, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    pub description: Option<String>,
}

impl CrateInfo {
    fn folder(&self) -> &str {
        self.path.file_name().and_then(|n| n.to_str()).unwrap_or("unknown")
    }
}

/// Discovers crates in a workspace subdirectory (e.g., "apps", "infra").
///
/// # Errors
/// Returns an error if the directory cannot be read, a `Cargo.toml` cannot be read,
/// or the metadata cannot be parsed.
pub fn get_workspace_crates(sub_dir: &str) -> Result<Vec<CrateInfo>> {
    let target_dir = get_project_root()?.join(sub_dir);

    let mut crates = Vec::new();

    if !target_dir.exists() {
        return Ok(crates);
    }

    for entry in fs::read_dir(&target_dir)? {
        let path = entry?.path();
        let cargo_path = path.join("Cargo.toml");

        if path.is_dir() && cargo_path.exists() {
            let content = fs::read_to_string(&cargo_path)?;
            let mut info: CrateInfo = toml::from_str(&content)
                .with_context(|| format!("Malformed manifest: {}", cargo_path.display()))?;
            info.path = path;
            crates.push(info);
        }
    }

    crates.sort_by(|a, b| a.folder().cmp(b.folder()));

    Ok(crates)
}

/// Prints a formatted table of crates with their folder, name, and description.
pub fn render_crate_table(title: &str, crates: &[CrateInfo]) {
    println!("\n{title}:\n");
    println!("{:<10} {:<15} {:<55}", "Folder", "Crate Name", "Description");
    println!("{:-<80}", "");

    for info in crates {
        let desc = info.package.description.as_deref().unwrap_or("No description provided");
        println!("{:<10} {:<15} {:<55}", info.folder(), info.package.name, desc);
    }
    println!();
}

/// Normalizes a project crate name to the workspace naming convention.
#[must_use]
pub fn normalize_project_name(project: &str) -> String {
    if project.starts_with(CRATE_PREFIX) {
        project.to_owned()
    } else {
        format!("{CRATE_PREFIX}{project}")
    }
}
