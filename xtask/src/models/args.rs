//! # CLI Argument Definitions
//!
//! Command-line interface of the workspace toolkit, built on `clap`'s derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer toolkit for the serverless reference workspace")]
pub struct Cli {
    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Switch the Terraform module between the published release and a local checkout
    ///
    /// Exactly one of `--on` or `--off` is required.
    Dev {
        /// Use the local `../terraform-aws-serverless` checkout
        #[arg(long)]
        on: bool,
        /// Go back to the published `FormidableLabs/serverless/aws` module
        #[arg(long)]
        off: bool,
        /// Terraform file to patch (defaults to `terraform/main.tf` in the workspace)
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
    /// Manage workspace Applications
    Apps {
        #[command(subcommand)]
        action: AppAction,
    },
    /// Run tests (workspace by default)
    Test {
        /// Run tests for a specific crate (auto-prefixes with 'slref-' if missing)
        project: Option<String>,
    },
    /// Run doc tests (workspace by default)
    Doctest {
        /// Run doc tests for a specific crate (auto-prefixes with 'slref-' if missing)
        project: Option<String>,
    },
    /// Run an app as a local HTTP server
    Run {
        /// App to run (auto-prefixes with 'slref-' if missing)
        project: String,
        /// Port to listen on (sets `SERVER_PORT`)
        #[arg(short, long)]
        port: Option<u16>,
        /// Deployment stage to emulate (sets `STAGE`)
        #[arg(short, long)]
        stage: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum AppAction {
    /// List all applications in the apps/ directory with their descriptions
    List {},
}
