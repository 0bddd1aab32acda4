use crate::text::{CaseStyle, Locale, DEFAULT_MAX_DECODE_PASSES};
use crate::wrap::{LineEnding, WrapOptions, DEFAULT_MAX_LENGTH};
use clap::{Parser, Subcommand};
use config::{
    Config as ConfigCrate, // Need this for builder
    ConfigError as ConfigCrateError,
    Environment,
    File,
    Map,
    Source,
    Value,
};
use directories::ProjectDirs;
use log::LevelFilter;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

// Using constants for default values makes them easy to change.
const DEFAULT_REMOVE_NEW_LINE: bool = true;
const DEFAULT_LINE_ENDING: &str = "platform";
const DEFAULT_LOCALE: &str = "en-US";
const DEFAULT_DECODE_ENTITIES: bool = false;
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;
const ENV_PREFIX: &str = "TIPWRAP";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Failed to determine config directory")]
    DirectoryNotFound,
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Optional fields allow for layered config (defaults -> file -> env -> args).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    max_length: Option<i64>,
    remove_new_line: Option<bool>,
    line_ending: Option<String>,
    locale: Option<String>,
    decode_entities: Option<bool>,
    max_decode_passes: Option<usize>,
    log_level: Option<String>,
}

/// Fully resolved settings. Every field has a value, default or overridden.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub max_length: i64,
    pub remove_new_line: bool,
    pub line_ending: LineEnding,
    pub locale: Locale,
    pub decode_entities: bool,
    pub max_decode_passes: usize,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_length: DEFAULT_MAX_LENGTH,
            remove_new_line: DEFAULT_REMOVE_NEW_LINE,
            line_ending: LineEnding::platform(),
            locale: Locale::EN_US,
            decode_entities: DEFAULT_DECODE_ENTITIES,
            max_decode_passes: DEFAULT_MAX_DECODE_PASSES,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Config {
    pub fn wrap_options(&self) -> WrapOptions {
        WrapOptions {
            max_length: self.max_length,
            remove_new_line: self.remove_new_line,
            line_ending: self.line_ending,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Tag-aware word wrapping for tooltips", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a custom configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the resolved configuration and exit
    #[arg(long, global = true)]
    pub debug_config: bool,

    #[arg(long, global = true, allow_negative_numbers = true)]
    pub max_length: Option<i64>,
    #[arg(long, global = true)]
    pub remove_new_line: Option<bool>,
    #[arg(long, global = true)]
    pub line_ending: Option<String>,
    #[arg(long, global = true)]
    pub locale: Option<String>,
    #[arg(long, global = true)]
    pub decode_entities: Option<bool>,
    #[arg(long, global = true)]
    pub max_decode_passes: Option<usize>,
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Word-wrap a file (or stdin) to the configured width
    Wrap { input: Option<PathBuf> },
    /// Decode HTML entities until the text stops changing
    Decode { input: Option<PathBuf> },
    /// Format a number with the configured locale
    Number {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(long, default_value_t = 2)]
        decimals: usize,
    },
    /// Convert the case of a string
    Case {
        #[arg(value_enum)]
        style: CaseStyle,
        text: String,
    },
    /// Check whether a string is shaped like an email address
    Email { text: String },
}

// Function to load configuration from all sources.
pub fn load_config(args: &CliArgs) -> Result<Config, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true);
    // Missing env vars are fine; a failed collect just means no overrides.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    let config_file_path = match args.config.clone() {
        Some(path) => Some(path),
        None => default_config_path().ok(),
    };

    build_config(args, config_file_path, Some(env_map))
}

fn default_config_path() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("", "", "tipwrap")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or(ConfigError::DirectoryNotFound)
}

// Separate function to allow testing with specific args and override sources
fn build_config(
    args: &CliArgs,
    config_file_path: Option<PathBuf>,
    override_source: Option<Map<String, Value>>,
) -> Result<Config, ConfigError> {
    let mut config_builder = ConfigCrate::builder();

    if let Some(path) = config_file_path {
        config_builder = config_builder.add_source(File::from(path).required(false));
    }

    // Overrides (environment or a test map) beat the file.
    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded_sources: FileConfig = config_builder.build()?.try_deserialize()?;

    // args > overrides > file > defaults
    let line_ending = args
        .line_ending
        .clone()
        .or(loaded_sources.line_ending)
        .unwrap_or_else(|| DEFAULT_LINE_ENDING.to_string());
    let locale = args
        .locale
        .clone()
        .or(loaded_sources.locale)
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
    let log_level = args.log_level.clone().or(loaded_sources.log_level);

    let config = Config {
        max_length: args
            .max_length
            .or(loaded_sources.max_length)
            .unwrap_or(DEFAULT_MAX_LENGTH),
        remove_new_line: args
            .remove_new_line
            .or(loaded_sources.remove_new_line)
            .unwrap_or(DEFAULT_REMOVE_NEW_LINE),
        line_ending: line_ending
            .parse::<LineEnding>()
            .map_err(ConfigError::ValidationError)?,
        locale: locale
            .parse::<Locale>()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?,
        decode_entities: args
            .decode_entities
            .or(loaded_sources.decode_entities)
            .unwrap_or(DEFAULT_DECODE_ENTITIES),
        max_decode_passes: args
            .max_decode_passes
            .or(loaded_sources.max_decode_passes)
            .unwrap_or(DEFAULT_MAX_DECODE_PASSES),
        log_level: match log_level {
            Some(level) => level.parse::<LevelFilter>().map_err(|_| {
                ConfigError::ValidationError(format!("unknown log level '{level}'"))
            })?,
            None => DEFAULT_LOG_LEVEL,
        },
    };

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.max_decode_passes == 0 {
        return Err(ConfigError::ValidationError(
            "max_decode_passes must be at least 1".to_string(),
        ));
    }
    Ok(())
}
