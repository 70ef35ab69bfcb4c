//! Command handlers

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::about::Info;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::bootstrap::AppContext;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{Settings, ENV_PREFIX};

pub fn execute_command(ctx: &AppContext, cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Version { json }) => _version(*json),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(ctx),
            ConfigCommands::Path => _config_path(ctx),
            ConfigCommands::Init { force } => _config_init(ctx, *force),
        },
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => print_long_help(),
    }
}

/// Root command output: long description plus usage.
#[instrument]
pub fn print_long_help() -> CliResult<()> {
    Cli::command()
        .print_long_help()
        .map_err(|e| CliError::io("print help", e))
}

#[instrument]
fn _version(json: bool) -> CliResult<()> {
    let info = Info::current();
    if json {
        output::info(&info.to_json_pretty()?);
    } else {
        output::info(info);
    }
    Ok(())
}

#[instrument(skip(ctx))]
fn _config_show(ctx: &AppContext) -> CliResult<()> {
    let toml = ctx.settings().to_toml()?;
    print!("{}", toml);
    Ok(())
}

#[instrument(skip(ctx))]
fn _config_path(ctx: &AppContext) -> CliResult<()> {
    match ctx.config_file() {
        Some(file) => {
            let status = if file.path.exists() {
                "exists"
            } else {
                "not found"
            };
            output::action("config", &format!("{} ({})", file.path.display(), status));
        }
        None => output::warning("cannot determine config directory"),
    }
    output::detail(&format!("environment: {}_*", ENV_PREFIX));
    Ok(())
}

#[instrument(skip(ctx))]
fn _config_init(ctx: &AppContext, force: bool) -> CliResult<()> {
    let path = ctx
        .config_path()
        .ok_or_else(|| CliError::Usage("cannot determine config directory".into()))?;
    debug!(path = %path.display(), force, "writing config template");

    if !Settings::write_template(&path, force)? {
        return Err(CliError::Usage(format!(
            "config file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    output::success(&format!("Created {}", path.display()));
    Ok(())
}

#[instrument]
fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
