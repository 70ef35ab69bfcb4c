//! Layered key-value store for flag-bound settings
//!
//! Precedence (lowest to highest):
//! 1. Flag defaults
//! 2. Config file (TOML)
//! 3. Environment variables: `FAUXBASE_*` prefix, `__` for nesting
//! 4. Flags passed explicitly on the command line

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File, FileFormat, Map, Value};
use tracing::{debug, instrument};

use super::error::{ConfigError, ConfigResult};
use super::{global_config_path, Settings};

/// Prefix for environment overrides (`FAUXBASE_DEBUG=true`).
pub const ENV_PREFIX: &str = "FAUXBASE";

#[derive(Debug, Clone)]
struct FlagBinding {
    default: Value,
    explicit: Option<Value>,
}

/// Flag bindings waiting to be resolved against file and environment layers.
///
/// A key can be bound once. Binding it again is a programming error and
/// is reported as [`ConfigError::DuplicateBinding`].
#[derive(Debug, Default)]
pub struct ConfigStore {
    bindings: BTreeMap<String, FlagBinding>,
}

/// A config file layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub path: PathBuf,
    /// Missing required files fail resolution; optional ones are skipped.
    pub required: bool,
}

/// Where the non-flag layers come from.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    pub file: Option<ConfigFile>,
    /// Environment snapshot; `None` reads the process environment.
    pub env: Option<Map<String, String>>,
}

impl Sources {
    /// Explicit file if given (required), otherwise the global file (optional).
    pub fn discover(explicit: Option<&Path>) -> Self {
        let file = match explicit {
            Some(path) => Some(ConfigFile {
                path: path.to_path_buf(),
                required: true,
            }),
            None => global_config_path().map(|path| ConfigFile {
                path,
                required: false,
            }),
        };
        Self { file, env: None }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, required: bool) -> Self {
        self.file = Some(ConfigFile {
            path: path.into(),
            required,
        });
        self
    }

    pub fn with_env<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a flag to `key`.
    ///
    /// `default` is the lowest layer. `explicit` is set only when the user
    /// passed the flag and then wins over every other layer.
    pub fn bind_flag<V: Into<Value>>(
        &mut self,
        key: &str,
        default: V,
        explicit: Option<V>,
    ) -> ConfigResult<()> {
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyKey);
        }
        if self.bindings.contains_key(key) {
            return Err(ConfigError::DuplicateBinding {
                key: key.to_string(),
            });
        }
        debug!(key, explicit = explicit.is_some(), "binding flag");
        self.bindings.insert(
            key.to_string(),
            FlagBinding {
                default: default.into(),
                explicit: explicit.map(Into::into),
            },
        );
        Ok(())
    }

    pub fn is_bound(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }

    pub fn bound_keys(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Resolve all layers into a read-only view.
    #[instrument(level = "debug", skip(self))]
    pub fn resolve(&self, sources: &Sources) -> ConfigResult<ResolvedConfig> {
        let mut builder = Config::builder();

        for (key, binding) in &self.bindings {
            builder = builder.set_default(key.as_str(), binding.default.clone())?;
        }

        if let Some(file) = &sources.file {
            if file.path.exists() {
                debug!(path = %file.path.display(), "loading config file");
                builder = builder.add_source(
                    File::from(file.path.clone())
                        .format(FileFormat::Toml)
                        .required(true),
                );
            } else if file.required {
                return Err(ConfigError::MissingFile(file.path.clone()));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(sources.env.clone()),
        );

        for (key, binding) in &self.bindings {
            if let Some(value) = &binding.explicit {
                builder = builder.set_override(key.as_str(), value.clone())?;
            }
        }

        Ok(ResolvedConfig {
            config: builder.build()?,
        })
    }
}

/// Effective configuration after all layers are merged.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    config: Config,
}

impl ResolvedConfig {
    pub fn get_bool(&self, key: &str) -> ConfigResult<bool> {
        Ok(self.config.get_bool(key)?)
    }

    pub fn get_string(&self, key: &str) -> ConfigResult<String> {
        Ok(self.config.get_string(key)?)
    }

    /// Typed view; keys without a value fall back to [`Settings::default`].
    pub fn settings(&self) -> ConfigResult<Settings> {
        Ok(self.config.clone().try_deserialize()?)
    }
}
