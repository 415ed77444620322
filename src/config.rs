//! Configuration management for the posture mood estimator

use crate::constants::{
    CALIBRATION_SAMPLES, DEFAULT_TOLERANCE, MOOD_COOLDOWN_MS, NO_PERSON_TIMEOUT_MS,
    ROLLING_WINDOW_SIZE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Estimator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Detection sensitivity and effects gating
    pub detection: DetectionConfig,

    /// Hysteresis and watchdog timing
    pub timing: TimingConfig,

    /// Calibration and rolling-window sizes
    pub smoothing: SmoothingConfig,
}

/// Detection sensitivity and effects gating
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// User-facing tolerance knob (0-100, lower = stricter)
    pub tolerance: u8,

    /// Whether sound cues may be requested
    pub sounds_enabled: bool,

    /// Externally granted notification permission; the estimator only
    /// reads this, it never requests the grant itself
    pub notification_permission: NotificationPermission,
}

/// Hysteresis and watchdog timing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Minimum dwell between accepted mood changes (milliseconds)
    pub mood_cooldown_ms: u64,

    /// Measurement absence before "no person" is declared (milliseconds)
    pub no_person_timeout_ms: u64,
}

/// Calibration and rolling-window sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Accepted samples needed to establish the baseline
    pub calibration_samples: usize,

    /// Maximum post-calibration frames kept for averaging
    pub rolling_window: usize,
}

/// Platform notification permission state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPermission {
    /// Permission granted; notifications may be requested
    Granted,
    /// Permission denied
    Denied,
    /// Not yet decided
    Default,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            detection: DetectionConfig::default(),
            timing: TimingConfig::default(),
            smoothing: SmoothingConfig::default(),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            sounds_enabled: true,
            notification_permission: NotificationPermission::Default,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            mood_cooldown_ms: MOOD_COOLDOWN_MS,
            no_person_timeout_ms: NO_PERSON_TIMEOUT_MS,
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            calibration_samples: CALIBRATION_SAMPLES,
            rolling_window: ROLLING_WINDOW_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.detection.tolerance > 100 {
            return Err(Error::ConfigError(
                "Tolerance must be between 0 and 100".to_string(),
            ));
        }
        if self.smoothing.calibration_samples == 0 {
            return Err(Error::ConfigError(
                "Calibration sample count must be greater than 0".to_string(),
            ));
        }
        if self.smoothing.rolling_window == 0 {
            return Err(Error::ConfigError(
                "Rolling window size must be greater than 0".to_string(),
            ));
        }
        if self.timing.mood_cooldown_ms == 0 {
            return Err(Error::ConfigError(
                "Mood cooldown must be greater than 0".to_string(),
            ));
        }
        if self.timing.no_person_timeout_ms == 0 {
            return Err(Error::ConfigError(
                "No-person timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Posture Mood Estimator Configuration

# Detection sensitivity and effects gating
detection:
  tolerance: 25
  sounds_enabled: true
  notification_permission: "default"

# Hysteresis and watchdog timing
timing:
  mood_cooldown_ms: 2000
  no_person_timeout_ms: 3000

# Calibration and rolling-window sizes
smoothing:
  calibration_samples: 40
  rolling_window: 30
"#;
