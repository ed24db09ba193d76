//! `campus-policy` — operator tool for inspecting the portal's access policy.

mod commands;

use anyhow::Context;
use clap::Parser;

use campus_auth::{PolicyConfig, PolicyEngine};

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    campus_observability::init();

    let cli = Cli::parse();

    let mut config = PolicyConfig::from_env();
    if let Some(path) = &cli.aliases {
        config = config.with_alias_file(path);
    }

    let engine = PolicyEngine::from_config(&config).context("failed to load access policy")?;

    tracing::debug!(command = ?cli.command, "running policy command");

    let stdout = std::io::stdout();
    commands::run(&cli.command, &engine, &mut stdout.lock())
}
