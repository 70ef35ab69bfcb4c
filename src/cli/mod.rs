//! CLI layer: argument parsing, bootstrap and command dispatch

pub mod args;
pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{Cli, Commands, ConfigCommands, GlobalArgs};
pub use bootstrap::{execute, register_persistent_flags, AppContext, Bootstrap, DEBUG_KEY};
pub use error::{BootstrapError, CliError, CliResult};
