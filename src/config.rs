use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Main service configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Upstream fetch timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User-Agent header sent on upstream fetches
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Extraction pipeline configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// Configuration for the JSON-LD extraction pipeline
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// What to do with a block that is not valid JSON
    #[serde(default)]
    pub block_policy: BlockPolicy,
    /// Also treat members of an `@graph` array as candidates
    #[serde(default)]
    pub expand_graph: bool,
}

/// Handling of JSON-LD blocks that fail to parse
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlockPolicy {
    /// Abort the whole extraction on the first invalid block
    #[default]
    Strict,
    /// Skip invalid blocks and continue with the rest
    Lenient,
}

// Default value functions
fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; RecipeLdBot/1.0)".to_string()
}

impl ServiceConfig {
    /// Load configuration from `config.toml` and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_LD__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_LD__EXTRACTION__BLOCK_POLICY
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }
}

/// Load configuration from an optional file path and environment variables
///
/// Without a path, `config.toml` in the current directory is used when present.
/// An explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("config").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: RECIPE_LD__EXTRACTION__EXPAND_GRAPH
        .add_source(
            Environment::with_prefix("RECIPE_LD")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
