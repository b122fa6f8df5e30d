use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ProbeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProbeError::HttpError(_) => ErrorCategory::Network,
            ProbeError::IoError(_) => ErrorCategory::System,
            ProbeError::ConfigValidationError { .. }
            | ProbeError::InvalidConfigValueError { .. }
            | ProbeError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 探測失敗本身就是要回報的結果
            ErrorCategory::Network => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProbeError::HttpError(e) if e.is_connect() => {
                "Make sure the API is running locally and listening on the configured port"
            }
            ProbeError::HttpError(_) => "Check the base URL and endpoint path",
            ProbeError::IoError(_) => "Check that the configuration file exists and is readable",
            ProbeError::ConfigValidationError { .. } => "Make sure the file is valid TOML",
            ProbeError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value and run the probe again"
            }
            ProbeError::MissingConfigError { .. } => "Add the missing field to the configuration",
        }
    }

    /// 連同底層原因一起輸出，例如 `...: Connection refused (os error 111)`
    pub fn full_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);

        while let Some(cause) = source {
            let text = cause.to_string();
            // 外層訊息已經內嵌原因時不重複
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }

        message
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the API: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
