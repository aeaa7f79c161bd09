//! Environment detection and logging configuration

use serde::{Deserialize, Serialize};

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    Development,
    /// Pre-production staging
    Staging,
    /// Production deployment
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl Environment {
    /// Detect the environment from the ENVIRONMENT variable
    pub fn from_env() -> Self {
        match std::env::var("ENVIRONMENT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "production" | "prod" => Environment::Production,
            "staging" => Environment::Staging,
            _ => Environment::Development,
        }
    }

    /// Whether this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log filter directive (RUST_LOG syntax)
    pub filter: String,

    /// Emit logs as JSON lines
    pub json_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Development)
    }
}

impl LoggingConfig {
    /// Logging defaults appropriate for an environment
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self {
                filter: "debug,sqlx=warn".to_string(),
                json_output: false,
            },
            Environment::Staging => Self {
                filter: "info".to_string(),
                json_output: true,
            },
            Environment::Production => Self {
                filter: "info,sqlx=warn".to_string(),
                json_output: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_detection() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
    }

    #[test]
    fn logging_defaults_follow_environment() {
        assert!(!LoggingConfig::for_environment(Environment::Development).json_output);
        assert!(LoggingConfig::for_environment(Environment::Production).json_output);
    }
}
