#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::{apps, dev, run, testing};
use crate::models::args::{AppAction, AppCommands, Cli};

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        AppCommands::Dev { on, off, file } => dev::handle_dev_command(on, off, file)?,
        AppCommands::Apps { action } => match action {
            AppAction::List {} => apps::list_apps()?,
        },
        AppCommands::Test { project } => testing::run_tests(project.as_deref())?,
        AppCommands::Doctest { project } => testing::run_doctests(project.as_deref())?,
        AppCommands::Run { project, port, stage } => {
            run::run_project(&project, port, stage.as_deref())?;
        },
    }

    Ok(())
}
