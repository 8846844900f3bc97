//! Unveil configuration system
//!
//! This crate provides centralized configuration management for Unveil,
//! loading settings from `unveil.toml` as an alternative to environment variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Unveil
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UnveilConfig {
    /// Demo application settings
    pub demo: DemoConfig,
    /// Simulated viewport settings
    pub viewport: ViewportConfig,
    /// Timeline playback settings
    pub motion: MotionConfig,
    /// Contact form simulation settings
    pub contact: ContactConfig,
}

/// Demo application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Default scenario to run (walkthrough, bounce, etc.)
    pub scenario: Option<String>,
}

/// Simulated viewport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Viewport height in pixels
    pub height: f32,
}

/// Timeline playback configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Playback speed multiplier (2.0 plays everything twice as fast)
    pub speed: f32,
    /// Collapse every timeline to an instant jump to its end values
    pub reduced_motion: bool,
}

/// Contact form simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Simulated network delay before a submission resolves, in milliseconds
    pub submit_delay_ms: f32,
    /// Resolve submissions as failures instead of successes
    pub fail_submissions: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { scenario: None }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { height: 900.0 }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            reduced_motion: false,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000.0,
            fail_submissions: false,
        }
    }
}

impl MotionConfig {
    /// Factor applied to every timeline duration and delay.
    ///
    /// Reduced motion (or a non-positive speed) collapses the factor to
    /// zero: timelines finish on their first update.
    pub fn time_scale(&self) -> f32 {
        if self.reduced_motion || self.speed <= 0.0 {
            0.0
        } else {
            1.0 / self.speed
        }
    }
}

impl UnveilConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the unveil.toml configuration file
    ///
    /// # Returns
    /// * `Ok(UnveilConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (unveil.toml in the
    /// current directory) or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("unveil.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(scenario) = std::env::var("UNVEIL_SCENARIO") {
            self.demo.scenario = Some(scenario);
        }

        if let Ok(val) = std::env::var("UNVEIL_VIEWPORT_HEIGHT") {
            if let Ok(height) = val.parse::<f32>() {
                self.viewport.height = height;
            }
        }

        if let Ok(val) = std::env::var("UNVEIL_SPEED") {
            if let Ok(speed) = val.parse::<f32>() {
                self.motion.speed = speed;
            }
        }
        if let Ok(val) = std::env::var("UNVEIL_REDUCED_MOTION") {
            self.motion.reduced_motion = val == "1" || val.eq_ignore_ascii_case("true");
        }

        if let Ok(val) = std::env::var("UNVEIL_SUBMIT_DELAY_MS") {
            if let Ok(delay) = val.parse::<f32>() {
                self.contact.submit_delay_ms = delay;
            }
        }
        if let Ok(val) = std::env::var("UNVEIL_FAIL_SUBMISSIONS") {
            self.contact.fail_submissions = val == "1" || val.eq_ignore_ascii_case("true");
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from unveil.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UnveilConfig::default();
        assert_eq!(config.viewport.height, 900.0);
        assert_eq!(config.motion.speed, 1.0);
        assert!(!config.motion.reduced_motion);
        assert_eq!(config.contact.submit_delay_ms, 2000.0);
    }

    #[test]
    fn test_toml_serialization() {
        let config = UnveilConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: UnveilConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.viewport.height, 900.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let parsed: UnveilConfig = toml::from_str("[motion]\nspeed = 2.0\n").unwrap();
        assert_eq!(parsed.motion.speed, 2.0);
        assert_eq!(parsed.viewport.height, 900.0);
        assert!(!parsed.contact.fail_submissions);
    }

    #[test]
    fn test_load_or_default() {
        // Should not panic even if unveil.toml doesn't exist
        let config = UnveilConfig::load_or_default();
        assert_eq!(config.motion.speed, 1.0);
    }

    #[test]
    fn test_merge_with_env() {
        // Set environment variable
        unsafe {
            std::env::set_var("UNVEIL_SCENARIO", "bounce");
            std::env::set_var("UNVEIL_REDUCED_MOTION", "true");
        }

        let mut config = UnveilConfig::default();
        config.merge_with_env();

        assert_eq!(config.demo.scenario.as_deref(), Some("bounce"));
        assert!(config.motion.reduced_motion);

        // Clean up
        unsafe {
            std::env::remove_var("UNVEIL_SCENARIO");
            std::env::remove_var("UNVEIL_REDUCED_MOTION");
        }
    }

    #[test]
    fn test_time_scale() {
        let mut motion = MotionConfig::default();
        assert_eq!(motion.time_scale(), 1.0);

        motion.speed = 2.0;
        assert_eq!(motion.time_scale(), 0.5);

        motion.reduced_motion = true;
        assert_eq!(motion.time_scale(), 0.0);
    }
}
