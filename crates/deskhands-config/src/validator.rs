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

    /// Turn the first error into a [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(ConfigError::InvalidValue {
                field: err.path,
                message: err.message,
            }),
            None => Ok(self.warnings),
        }
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
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_launch(config, &mut result);
        Self::validate_tunables(config, &mut result);
        Self::validate_device(config, &mut result);

        Ok(result)
    }

    fn validate_launch(config: &Config, result: &mut ValidationResult) {
        let launch = &config.launch;

        if let Some(window) = &launch.window {
            if !window.is_configured() {
                result.add_warning(ValidationWarning::new(
                    "launch.window",
                    "No id, title or app_name set; the window filter is ignored",
                ));
            } else if launch.screen_area.is_some() {
                result.add_warning(ValidationWarning::new(
                    "launch.screen_area",
                    "Only used when no window matches launch.window",
                ));
            }
        }

        if let Some(screen_area) = &launch.screen_area {
            if let Some(area) = &screen_area.area {
                if area.is_empty() {
                    result.add_error(ValidationError::new(
                        "launch.screen_area.area",
                        "Width and height must be positive",
                    ));
                }
                if area.x < 0 || area.y < 0 {
                    result.add_error(ValidationError::new(
                        "launch.screen_area.area",
                        "Area is relative to the monitor and cannot start at a negative offset",
                    ));
                }
            }
            if screen_area.monitor_index.is_some_and(|idx| idx < 0) {
                result.add_warning(ValidationWarning::new(
                    "launch.screen_area.monitor_index",
                    "Negative index is clamped to the first monitor",
                ));
            }
        }

        if launch.manual_screenshot_save_path.is_some()
            && !launch.screen_area.as_ref().is_some_and(|a| a.prefer_manual)
        {
            result.add_warning(ValidationWarning::new(
                "launch.manual_screenshot_save_path",
                "Only used when screen_area.prefer_manual is set",
            ));
        }
    }

    fn validate_tunables(config: &Config, result: &mut ValidationResult) {
        let tunables = &config.tunables;

        if !(tunables.wheel_to_pixel.is_finite() && tunables.wheel_to_pixel > 0.0) {
            result.add_error(ValidationError::new(
                "tunables.wheel_to_pixel",
                "Must be a positive number",
            ));
        }

        if tunables.wheel_once_max == 0 || tunables.wheel_once_max > i32::MAX as u32 {
            result.add_error(ValidationError::new(
                "tunables.wheel_once_max",
                format!("Must be between 1 and {}", i32::MAX),
            ));
        }

        for (path, value) in [
            ("tunables.default_scroll_distance", tunables.default_scroll_distance),
            ("tunables.edge_scroll_distance", tunables.edge_scroll_distance),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                result.add_error(ValidationError::new(path, "Must be a non-negative number"));
            }
        }

        if tunables.settle_delay_ms > 10_000 {
            result.add_warning(ValidationWarning::new(
                "tunables.settle_delay_ms",
                "Settle delay over 10 seconds will make every action very slow",
            ));
        }
    }

    fn validate_device(config: &Config, result: &mut ValidationResult) {
        if let Some(platform) = &config.device.platform {
            if !matches!(platform.as_str(), "windows" | "linux" | "macos") {
                result.add_warning(ValidationWarning::new(
                    "device.platform",
                    format!("'{}' has no paste shortcut; text input will fail", platform),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
