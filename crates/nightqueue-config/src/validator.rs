//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Collapse into a single error when any validation error was recorded.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        if self.is_valid() {
            return Ok(self.warnings);
        }
        let summary = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        Err(ConfigError::Invalid(summary))
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_storage(config, &mut result);
        Self::validate_keepalive(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }
    }

    fn validate_storage(config: &Config, result: &mut ValidationResult) {
        if config.storage.queue_file.as_os_str().is_empty() {
            result.add_error(ValidationError::new(
                "storage.queue_file",
                "Queue file path cannot be empty",
            ));
        }
    }

    fn validate_keepalive(config: &Config, result: &mut ValidationResult) {
        let keepalive = &config.keepalive;

        if keepalive.interval_secs == 0 {
            result.add_error(ValidationError::new(
                "keepalive.interval_secs",
                "interval_secs must be greater than 0",
            ));
        } else if keepalive.interval_secs < 60 {
            result.add_warning(ValidationWarning::new(
                "keepalive.interval_secs",
                "interval_secs is below 60, the service will ping itself very often",
            ));
        }

        if keepalive.timeout_secs == 0 {
            result.add_error(ValidationError::new(
                "keepalive.timeout_secs",
                "timeout_secs must be greater than 0",
            ));
        }

        let scheme = keepalive.url.scheme();
        if scheme != "http" && scheme != "https" {
            result.add_error(ValidationError::new(
                "keepalive.url",
                "url must start with http:// or https://",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
