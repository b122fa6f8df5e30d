pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{DEFAULT_BASE_URL, DEFAULT_ENDPOINT_PATH, DEFAULT_PREVIEW_CHARS};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "book-probe"))]
#[cfg_attr(
    feature = "cli",
    command(about = "One-shot connectivity check against the local library API")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_BASE_URL))]
    pub base_url: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_ENDPOINT_PATH))]
    pub path: String,

    /// Number of body characters to print before the `...` suffix
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_PREVIEW_CHARS))]
    pub preview_chars: usize,

    /// Verify the server certificate (off by default for local dev certs)
    #[cfg_attr(feature = "cli", arg(long))]
    pub verify_tls: bool,

    /// Path to a TOML file; when given it replaces the target flags above
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON"))]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            path: DEFAULT_ENDPOINT_PATH.to_string(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            verify_tls: false,
            config: None,
            verbose: false,
            json_logs: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_path(&self) -> &str {
        &self.path
    }

    fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    fn preview_chars(&self) -> usize {
        self.preview_chars
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_base_url("base_url", &self.base_url)?;
        validation::validate_endpoint_path("path", &self.path)?;
        validation::validate_preview_chars("preview_chars", self.preview_chars)?;
        Ok(())
    }
}
