//! Program entry: flag registration, one-time configuration, dispatch
//!
//! `Bootstrap` is the unconfigured state; `configure` consumes it and yields
//! the `AppContext` that command handlers receive.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, GlobalArgs};
use crate::cli::commands::{execute_command, print_long_help};
use crate::cli::error::{BootstrapError, CliResult};
use crate::cli::output;
use crate::config::{ConfigFile, ConfigStore, ResolvedConfig, Settings, Sources};
use crate::{exitcode, logging};

/// Config key the `--debug` flag is bound to.
pub const DEBUG_KEY: &str = "debug";

/// Bind the persistent flags into `store`.
///
/// Calling this twice on one store fails: every key binds once.
pub fn register_persistent_flags(
    store: &mut ConfigStore,
    args: &GlobalArgs,
) -> Result<(), BootstrapError> {
    store
        .bind_flag(DEBUG_KEY, false, args.debug.then_some(true))
        .map_err(|source| BootstrapError::FlagBinding {
            flag: DEBUG_KEY,
            source,
        })
}

/// Flags registered, configuration not yet resolved.
#[derive(Debug)]
pub struct Bootstrap {
    store: ConfigStore,
    sources: Sources,
    creates_config: bool,
}

impl Bootstrap {
    pub fn new(cli: &Cli) -> Result<Self, BootstrapError> {
        let mut store = ConfigStore::new();
        register_persistent_flags(&mut store, &cli.global)?;
        Ok(Self {
            store,
            sources: Sources::discover(cli.global.config.as_deref()),
            creates_config: cli.creates_config(),
        })
    }

    /// Replace the file/environment layers (tests inject these).
    pub fn with_sources(mut self, sources: Sources) -> Self {
        self.sources = sources;
        self
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Resolve configuration. The only way to obtain an [`AppContext`].
    ///
    /// A command that writes the config file resolves without the file
    /// layer, so a broken file can still be replaced.
    #[instrument(level = "debug", skip(self))]
    pub fn configure(self) -> CliResult<AppContext> {
        let config = if self.creates_config {
            let layers = Sources {
                file: None,
                env: self.sources.env.clone(),
            };
            self.store.resolve(&layers)?
        } else {
            self.store.resolve(&self.sources)?
        };
        let settings = config.settings()?;
        debug!(?settings, "configuration ready");
        Ok(AppContext {
            config,
            settings,
            config_file: self.sources.file,
        })
    }
}

/// Resolved configuration, threaded through command handlers.
#[derive(Debug, Clone)]
pub struct AppContext {
    config: ResolvedConfig,
    settings: Settings,
    config_file: Option<ConfigFile>,
}

impl AppContext {
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Config file layer in effect, whether or not it exists on disk.
    pub fn config_file(&self) -> Option<&ConfigFile> {
        self.config_file.as_ref()
    }

    pub fn config_path(&self) -> Option<PathBuf> {
        self.config_file.as_ref().map(|f| f.path.clone())
    }
}

/// Parse `args`, configure, and run the matched command.
///
/// Returns the process exit code. Execution errors are printed to stdout
/// and yield 1; a flag binding failure is printed to stderr and yields 70.
pub fn execute<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e),
    };

    let bootstrap = match Bootstrap::new(&cli) {
        Ok(b) => b,
        Err(e) => return report_fatal(&e),
    };

    match run(bootstrap, &cli) {
        Ok(()) => exitcode::OK,
        Err(e) => {
            output::error(&e);
            e.exit_code()
        }
    }
}

fn run(bootstrap: Bootstrap, cli: &Cli) -> CliResult<()> {
    // The root command has no action of its own: show help without
    // touching configuration.
    if cli.command.is_none() {
        return print_long_help();
    }
    let ctx = bootstrap.configure()?;
    logging::init(ctx.settings().debug);
    execute_command(&ctx, cli)
}

/// Startup aborted before any command ran.
fn report_fatal(err: &BootstrapError) -> i32 {
    output::fatal(err);
    exitcode::SOFTWARE
}

/// Help and version requests succeed; every other parse error fails with 1.
fn report_parse_error(err: &clap::Error) -> i32 {
    print!("{}", err.render());
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => exitcode::OK,
        _ => exitcode::FAILURE,
    }
}
