use crate::services::terraform::{TerraformFile, switch_dev_mode};
use anyhow::Result;
use std::path::PathBuf;

/// Switches the Terraform module source between the published release and a local checkout.
///
/// # Result
/// Returns `Ok(())` after the Terraform file has been rewritten.
///
/// # Errors
/// Returns an error if both or neither of `on` / `off` is set (before touching the file),
/// or if the file cannot be read or written.
pub fn handle_dev_command(on: bool, off: bool, file: Option<PathBuf>) -> Result<()> {
    let store = match file {
        Some(path) => TerraformFile::new(path),
        None => TerraformFile::workspace_default()?,
    };

    switch_dev_mode(&store, on, off)?;
    Ok(())
}
