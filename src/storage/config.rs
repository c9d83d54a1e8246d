//! Configuration file loading and resolution.
//!
//! Loads configuration from `<config dir>/config.toml` (see
//! [`AppPaths`](super::AppPaths)).
//!
//! ## Precedence
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. CLI flags
//! 2. Environment variables
//! 3. Config file
//! 4. Built-in defaults
//!
//! ## Environment Variables
//!
//! - `WALLETBOOK_CONFIG`: Override config file path
//! - `WALLETBOOK_BOOK`: Address book file
//! - `WALLETBOOK_FORMAT`: Output format (human, json, md)
//! - `WALLETBOOK_LIMIT`: Activity row limit
//! - `WALLETBOOK_NO_COLOR` or `NO_COLOR`: Disable colors
//! - `WALLETBOOK_PRETTY`: Pretty-print JSON output (1, true, yes)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::cli::args::{ActivityArgs, Cli, OutputFormat};
use crate::core::aggregator::{ActivityQuery, DEFAULT_ACTIVITY_LIMIT};
use crate::core::models::TransactionType;
use crate::error::{Result, WalletError};

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Environment variable to override config file path.
pub const ENV_CONFIG: &str = "WALLETBOOK_CONFIG";
/// Environment variable for the address book path.
pub const ENV_BOOK: &str = "WALLETBOOK_BOOK";
/// Environment variable for output format.
pub const ENV_FORMAT: &str = "WALLETBOOK_FORMAT";
/// Environment variable for the activity row limit.
pub const ENV_LIMIT: &str = "WALLETBOOK_LIMIT";
/// Environment variable to disable colors.
pub const ENV_NO_COLOR: &str = "WALLETBOOK_NO_COLOR";
/// Standard environment variable to disable colors.
pub const ENV_NO_COLOR_STD: &str = "NO_COLOR";
/// Environment variable for pretty JSON output.
pub const ENV_PRETTY: &str = "WALLETBOOK_PRETTY";

/// Largest accepted activity limit.
pub const MAX_ACTIVITY_LIMIT: usize = 1000;

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Fully resolved configuration after merging CLI, env vars, and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Address book file.
    pub book_path: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Whether to disable colored output.
    pub no_color: bool,
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
    /// Activity filter and cap.
    pub activity: ActivityQuery,
    /// Source of each setting for debugging.
    pub sources: ConfigSources,
}

/// Tracks the source of each configuration value.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub book_path: ConfigSource,
    pub format: ConfigSource,
    pub no_color: ConfigSource,
    pub pretty: ConfigSource,
    pub limit: ConfigSource,
    pub transaction_type: ConfigSource,
}

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value from CLI flag.
    Cli,
    /// Value from environment variable.
    Env,
    /// Value from config file.
    ConfigFile,
    /// Built-in default.
    #[default]
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI flag"),
            Self::Env => write!(f, "environment variable"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl ResolvedConfig {
    /// Resolve final configuration from CLI args, the process environment,
    /// and the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but is invalid, or any
    /// resolved value is invalid.
    pub fn resolve(cli: &Cli, activity: Option<&ActivityArgs>) -> Result<Self> {
        let env = |key: &str| std::env::var(key).ok();
        let config = match env(ENV_CONFIG) {
            Some(path) => Config::load_from(Path::new(&path))?,
            None => Config::load()?,
        };
        Self::resolve_with(cli, activity, &config, env)
    }

    /// Resolve against an explicit config and environment lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the config or any resolved value is invalid.
    pub fn resolve_with(
        cli: &Cli,
        activity: Option<&ActivityArgs>,
        config: &Config,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        config.validate()?;

        let mut sources = ConfigSources::default();

        let book_path = Self::resolve_book_path(cli, config, &env, &mut sources.book_path);
        let format = Self::resolve_format(cli, config, &env, &mut sources.format)?;
        let no_color = Self::resolve_no_color(cli, config, &env, &mut sources.no_color);
        let pretty = Self::resolve_pretty(cli, config, &env, &mut sources.pretty);
        let limit = Self::resolve_limit(activity, config, &env, &mut sources.limit)?;
        let type_filter =
            Self::resolve_transaction_type(activity, config, &mut sources.transaction_type)?;

        Ok(Self {
            book_path,
            format,
            no_color,
            pretty,
            activity: ActivityQuery::new(type_filter, limit),
            sources,
        })
    }

    fn resolve_book_path(
        cli: &Cli,
        config: &Config,
        env: &impl Fn(&str) -> Option<String>,
        source: &mut ConfigSource,
    ) -> PathBuf {
        if let Some(path) = &cli.book {
            *source = ConfigSource::Cli;
            return path.clone();
        }

        if let Some(path) = env(ENV_BOOK).filter(|p| !p.trim().is_empty()) {
            *source = ConfigSource::Env;
            return PathBuf::from(path);
        }

        if let Some(path) = &config.book.path {
            *source = ConfigSource::ConfigFile;
            return path.clone();
        }

        *source = ConfigSource::Default;
        AppPaths::new().address_book_file()
    }

    fn resolve_format(
        cli: &Cli,
        config: &Config,
        env: &impl Fn(&str) -> Option<String>,
        source: &mut ConfigSource,
    ) -> Result<OutputFormat> {
        if cli.json {
            *source = ConfigSource::Cli;
            return Ok(OutputFormat::Json);
        }

        if let Some(format) = cli.format {
            *source = ConfigSource::Cli;
            return Ok(format);
        }

        if let Some(format_env) = env(ENV_FORMAT) {
            *source = ConfigSource::Env;
            return Self::parse_format(&format_env);
        }

        if let Some(ref format_str) = config.output.format {
            *source = ConfigSource::ConfigFile;
            return Self::parse_format(format_str);
        }

        *source = ConfigSource::Default;
        Ok(OutputFormat::Human)
    }

    /// Parse a format string into `OutputFormat`.
    fn parse_format(s: &str) -> Result<OutputFormat> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Md),
            _ => Err(WalletError::Config(format!(
                "Invalid format '{s}'. Valid formats: human, json, md"
            ))),
        }
    }

    fn resolve_no_color(
        cli: &Cli,
        config: &Config,
        env: &impl Fn(&str) -> Option<String>,
        source: &mut ConfigSource,
    ) -> bool {
        if cli.no_color {
            *source = ConfigSource::Cli;
            return true;
        }

        if is_truthy(env(ENV_NO_COLOR).as_deref()) || env(ENV_NO_COLOR_STD).is_some() {
            *source = ConfigSource::Env;
            return true;
        }

        // Inverted: config.output.color = false means no_color = true
        if !config.output.color {
            *source = ConfigSource::ConfigFile;
            return true;
        }

        *source = ConfigSource::Default;
        false
    }

    fn resolve_pretty(
        cli: &Cli,
        config: &Config,
        env: &impl Fn(&str) -> Option<String>,
        source: &mut ConfigSource,
    ) -> bool {
        if cli.pretty {
            *source = ConfigSource::Cli;
            return true;
        }

        if is_truthy(env(ENV_PRETTY).as_deref()) {
            *source = ConfigSource::Env;
            return true;
        }

        if config.output.pretty {
            *source = ConfigSource::ConfigFile;
            return true;
        }

        *source = ConfigSource::Default;
        false
    }

    fn resolve_limit(
        activity: Option<&ActivityArgs>,
        config: &Config,
        env: &impl Fn(&str) -> Option<String>,
        source: &mut ConfigSource,
    ) -> Result<usize> {
        if let Some(limit) = activity.and_then(|a| a.limit) {
            *source = ConfigSource::Cli;
            return validate_limit("--limit", limit);
        }

        if let Some(raw) = env(ENV_LIMIT) {
            *source = ConfigSource::Env;
            let limit = raw.trim().parse::<usize>().map_err(|_| WalletError::ConfigInvalid {
                key: ENV_LIMIT.to_string(),
                value: raw.clone(),
                message: "must be a positive integer".to_string(),
            })?;
            return validate_limit(ENV_LIMIT, limit);
        }

        *source = if config.activity.limit == DEFAULT_ACTIVITY_LIMIT {
            ConfigSource::Default
        } else {
            ConfigSource::ConfigFile
        };
        Ok(config.activity.limit)
    }

    fn resolve_transaction_type(
        activity: Option<&ActivityArgs>,
        config: &Config,
        source: &mut ConfigSource,
    ) -> Result<TransactionType> {
        if let Some(raw) = activity.and_then(|a| a.tx_type.as_deref()) {
            *source = ConfigSource::Cli;
            return TransactionType::from_arg(raw);
        }

        let parsed = TransactionType::from_arg(&config.activity.transaction_type)?;
        *source = if parsed == TransactionType::default() {
            ConfigSource::Default
        } else {
            ConfigSource::ConfigFile
        };
        Ok(parsed)
    }
}

fn validate_limit(key: &str, limit: usize) -> Result<usize> {
    if (1..=MAX_ACTIVITY_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(WalletError::ConfigInvalid {
            key: key.to_string(),
            value: limit.to_string(),
            message: format!("must be between 1 and {MAX_ACTIVITY_LIMIT}"),
        })
    }
}

fn is_truthy(value: Option<&str>) -> bool {
    value.is_some_and(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

// =============================================================================
// Config File
// =============================================================================

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address book settings.
    pub book: BookConfig,
    /// Activity view settings.
    pub activity: ActivityConfig,
    /// Output settings.
    pub output: OutputConfig,
}

/// Address book settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// Address book file; defaults to the data directory.
    pub path: Option<PathBuf>,
}

/// Activity view settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityConfig {
    /// Maximum number of rows.
    pub limit: usize,
    /// Transaction type to show.
    pub transaction_type: String,
}

/// Output formatting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json, md).
    pub format: Option<String>,
    /// Whether to use colors in output.
    pub color: bool,
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_ACTIVITY_LIMIT,
            transaction_type: TransactionType::default().as_str().to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            pretty: false,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// # Errors
    /// Returns an error only if the file exists but is invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().config_file())
    }

    /// Load configuration from a specific path.
    ///
    /// Returns default config if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error only if the file exists but is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(?path, "Loading config file");
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| WalletError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WalletError::Config(format!("Failed to serialize config: {e}")))?;
        super::atomic::write_atomic(path, content.as_bytes())?;
        tracing::debug!(?path, "Config file saved");
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns [`WalletError::ConfigInvalid`] for an out-of-range limit, an
    /// unknown transaction type, or an unknown output format.
    pub fn validate(&self) -> Result<()> {
        validate_limit("activity.limit", self.activity.limit)?;

        TransactionType::from_arg(&self.activity.transaction_type).map_err(|_| {
            WalletError::ConfigInvalid {
                key: "activity.transaction_type".to_string(),
                value: self.activity.transaction_type.clone(),
                message: "expected one of coinbase, transfer, delegate, vote, unvote".to_string(),
            }
        })?;

        if let Some(format) = &self.output.format {
            if !["human", "json", "md"].contains(&format.as_str()) {
                return Err(WalletError::ConfigInvalid {
                    key: "output.format".to_string(),
                    value: format.clone(),
                    message: "expected one of human, json, md".to_string(),
                });
            }
        }

        Ok(())
    }
}
