use crate::services::utils::{get_workspace_crates, render_crate_table};
use anyhow::Result;

/// Lists all apps in the `apps/` directory.
///
/// # Result
/// Returns `Ok(())` after printing the app table (or a friendly empty-state message).
///
/// # Errors
/// Returns an error if the `apps/` directory cannot be read or the crate metadata
/// cannot be parsed.
pub fn list_apps() -> Result<()> {
    let applications = get_workspace_crates("apps")?;

    if applications.is_empty() {
        println!("ℹ️ No apps found in 'apps/' directory.");
        return Ok(());
    }

    render_crate_table("Applications", &applications);
    println!("Run one locally with `cargo xtask run <folder>` (listens on SERVER_HOST:SERVER_PORT).");

    Ok(())
}
