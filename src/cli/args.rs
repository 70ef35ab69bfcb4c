//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::about;

pub const ABOUT: &str = "FauxBase is a lightweight web-based admin toolkit";
pub const LONG_ABOUT: &str = "FauxBase is a lightweight web-based admin toolkit.
It includes user management, script storage, and variable management capabilities.";

#[derive(Parser, Debug)]
#[command(name = "fauxbase")]
#[command(author, version = about::VERSION, about = ABOUT, long_about = LONG_ABOUT)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Persistent flags, inherited by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Config file (default: $XDG_CONFIG_HOME/fauxbase/fauxbase.toml)
    #[arg(long, global = true, env = "FAUXBASE_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage settings
    #[command(arg_required_else_help = true)]
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config file path
    Path,

    /// Create config template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// `config init` creates the file, so it must not require one to exist.
    pub fn creates_config(&self) -> bool {
        matches!(
            self.command,
            Some(Commands::Config {
                command: ConfigCommands::Init { .. }
            })
        )
    }
}
