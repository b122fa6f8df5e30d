use crate::core::ConfigProvider;
use crate::domain::model::{DEFAULT_ENDPOINT_PATH, DEFAULT_PREVIEW_CHARS};
use crate::utils::error::{ProbeError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeFileConfig {
    pub target: TargetConfig,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub base_url: Option<String>,
    pub path: Option<String>,
    pub verify_tls: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub preview_chars: Option<usize>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl ProbeFileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ProbeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LIBRARY_API_URL})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for ProbeFileConfig {
    fn base_url(&self) -> &str {
        self.target.base_url.as_deref().unwrap_or_default()
    }

    fn endpoint_path(&self) -> &str {
        self.target.path.as_deref().unwrap_or(DEFAULT_ENDPOINT_PATH)
    }

    fn verify_tls(&self) -> bool {
        self.target.verify_tls.unwrap_or(false)
    }

    fn preview_chars(&self) -> usize {
        self.report
            .as_ref()
            .and_then(|r| r.preview_chars)
            .unwrap_or(DEFAULT_PREVIEW_CHARS)
    }
}

impl Validate for ProbeFileConfig {
    fn validate(&self) -> Result<()> {
        let base_url = validation::validate_required_field("target.base_url", &self.target.base_url)?;
        validation::validate_base_url("target.base_url", base_url)?;
        validation::validate_endpoint_path("target.path", self.endpoint_path())?;
        validation::validate_preview_chars("report.preview_chars", self.preview_chars())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal_config_uses_defaults() {
        let toml_content = r#"
[target]
base_url = "https://localhost:7125"
"#;

        let config = ProbeFileConfig::from_toml_str(toml_content).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.endpoint_path(), "/api/Book/available");
        assert_eq!(config.preview_chars(), 500);
        assert!(!config.verify_tls());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[target]
base_url = "http://127.0.0.1:5000"
path = "/api/Book"
verify_tls = true

[report]
preview_chars = 120
"#;

        let config = ProbeFileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.target_url(), "http://127.0.0.1:5000/api/Book");
        assert_eq!(config.preview_chars(), 120);
        assert!(config.verify_tls());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BOOK_PROBE_TEST_URL", "https://test.library.local");

        let toml_content = r#"
[target]
base_url = "${BOOK_PROBE_TEST_URL}"
"#;

        let config = ProbeFileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_url(), "https://test.library.local");

        std::env::remove_var("BOOK_PROBE_TEST_URL");
    }

    #[test]
    fn test_unknown_env_var_is_left_verbatim() {
        let toml_content = r#"
[target]
base_url = "${BOOK_PROBE_SURELY_UNSET_VAR}"
"#;

        let config = ProbeFileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_url(), "${BOOK_PROBE_SURELY_UNSET_VAR}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_base_url_fails_validation() {
        let config = ProbeFileConfig::from_toml_str("[target]\npath = \"/api/Book\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ProbeError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = ProbeFileConfig::from_toml_str("[target\nbase_url = 1").unwrap_err();
        assert!(matches!(err, ProbeError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[target]
base_url = "https://localhost:7125"
path = "/api/Book/available"

[report]
preview_chars = 64
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = ProbeFileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.preview_chars(), 64);
    }
}
