//! Switches the `terraform-aws-serverless` module referenced from `main.tf` between the
//! published registry release and a sibling checkout in `../terraform-aws-serverless`.
//!
//! The rewrite is a textual patch over the whole file, not an HCL parse. Terraform 0.12+
//! rejects `version` on local module sources, so the local form comments that line out:
//!
//! ```text
//! source  = "FormidableLabs/serverless/aws"      source  = "../../terraform-aws-serverless"
//! version = "~> 1.0"                         <->  # version = "~> 1.0"
//! ```
//!
//! Whatever sits between the quoted source and `version` (rest of the line, newline,
//! indentation) is carried over verbatim, so the two directions are exact inverses.
//!
//! `.` matches `\r`, so CRLF files are toggled as well, with their line endings kept.

use crate::services::utils::get_project_root;
use anyhow::{Context, Result, bail};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Location of the infrastructure definition, relative to the workspace root.
pub const MAIN_TF: &str = "terraform/main.tf";

pub const USAGE_ERROR: &str = "Must select exactly one of --on|--off";

static PUBLISHED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"= "FormidableLabs/serverless/aws(.*\n[ ]*)version"#)
        .expect("CRITICAL: published module pattern must compile")
});

static LOCAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"= "\.\./\.\./terraform-aws-serverless(.*\n[ ]*)# version"#)
        .expect("CRITICAL: local module pattern must compile")
});

const LOCAL_REPLACEMENT: &str = r#"= "../../terraform-aws-serverless${1}# version"#;
const PUBLISHED_REPLACEMENT: &str = r#"= "FormidableLabs/serverless/aws${1}version"#;

/// Points every published module reference at the local checkout.
///
/// Text without a published reference comes back unchanged.
#[must_use]
pub fn enable(document: &str) -> String {
    PUBLISHED.replace_all(document, LOCAL_REPLACEMENT).into_owned()
}

/// Inverse of [`enable`].
#[must_use]
pub fn disable(document: &str) -> String {
    LOCAL.replace_all(document, PUBLISHED_REPLACEMENT).into_owned()
}

/// Direction of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevMode {
    /// Published registry module -> local checkout.
    Enable,
    /// Local checkout -> published registry module.
    Disable,
}

impl DevMode {
    /// Resolves the `--on` / `--off` flags.
    ///
    /// # Errors
    /// Returns a usage error when both or neither flag is set.
    pub fn from_flags(on: bool, off: bool) -> Result<Self> {
        match (on, off) {
            (true, false) => Ok(Self::Enable),
            (false, true) => Ok(Self::Disable),
            _ => bail!(USAGE_ERROR),
        }
    }

    #[must_use]
    pub const fn announcement(self) -> &'static str {
        match self {
            Self::Enable => "Enabling development mode.",
            Self::Disable => "Disabling development mode.",
        }
    }

    #[must_use]
    pub fn apply(self, document: &str) -> String {
        match self {
            Self::Enable => enable(document),
            Self::Disable => disable(document),
        }
    }
}

/// Whole-content access to the document being patched.
pub trait ConfigStore {
    /// Reads the full document.
    ///
    /// # Errors
    /// Returns an error if the underlying storage cannot be read.
    fn read(&self) -> Result<String>;

    /// Replaces the full document.
    ///
    /// # Errors
    /// Returns an error if the underlying storage cannot be written.
    fn write(&self, contents: &str) -> Result<()>;
}

/// A Terraform file on disk. Writes overwrite in place; there is no backup or atomic rename.
#[derive(Debug, Clone)]
pub struct TerraformFile {
    path: PathBuf,
}

impl TerraformFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The workspace's own `terraform/main.tf`.
    ///
    /// # Errors
    /// Returns an error if the workspace root cannot be determined.
    pub fn workspace_default() -> Result<Self> {
        Ok(Self::new(get_project_root()?.join(MAIN_TF)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for TerraformFile {
    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))
    }

    fn write(&self, contents: &str) -> Result<()> {
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

/// Validates the flags, then reads, patches and writes back the document in `store`.
///
/// The document is written even when nothing matched.
///
/// # Errors
/// Returns a usage error before any I/O when the flags are not exactly one of `on` / `off`,
/// and propagates read or write failures from `store`.
pub fn switch_dev_mode(store: &impl ConfigStore, on: bool, off: bool) -> Result<DevMode> {
    let mode = DevMode::from_flags(on, off)?;

    println!("{}", mode.announcement());

    let document = store.read()?;
    store.write(&mode.apply(&document))?;

    Ok(mode)
}
