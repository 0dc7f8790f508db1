//! Configuration types for the mapping coordinator.
//!
//! This module provides configuration structures that control how shapes are
//! validated before mapping. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Example
//!
//! ```
//! # use quadfill::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.validation().detect_self_intersection());
//! ```

use serde::Deserialize;

use quadfill_core::validate::ValidationOptions;

/// Top-level application configuration.
///
/// Groups the shape [`ValidationOptions`] into a single configuration root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Shape validation configuration section.
    #[serde(default)]
    validation: ValidationOptions,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified validation options.
    pub fn new(validation: ValidationOptions) -> Self {
        Self { validation }
    }

    /// Returns the validation configuration.
    pub fn validation(&self) -> &ValidationOptions {
        &self.validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.validation().detect_self_intersection());
        assert!(config.validation().detect_duplicate_points());
        assert_eq!(config.validation().duplicate_epsilon(), 0.001);
    }

    #[test]
    fn test_config_with_options() {
        let config = AppConfig::new(ValidationOptions::new(false, true, 0.5));
        assert!(!config.validation().detect_self_intersection());
        assert!(config.validation().detect_duplicate_points());
        assert_eq!(config.validation().duplicate_epsilon(), 0.5);
    }
}
