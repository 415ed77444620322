//! Constants used throughout the estimator

/// Number of accepted samples required to establish a calibration baseline
pub const CALIBRATION_SAMPLES: usize = 40;

/// Maximum number of post-calibration frames kept for rolling averages
pub const ROLLING_WINDOW_SIZE: usize = 30;

/// Minimum dwell time between accepted mood-level changes (milliseconds)
pub const MOOD_COOLDOWN_MS: u64 = 2000;

/// Sustained measurement absence before declaring "no person" (milliseconds)
pub const NO_PERSON_TIMEOUT_MS: u64 = 3000;

/// Shoulder-width deviation factor, scaled by baseline shoulder span
pub const SHOULDER_WIDTH_FACTOR: f64 = 0.15;

/// Shoulder height-balance threshold, absolute (not scaled by baseline)
pub const SHOULDER_BALANCE_FACTOR: f64 = 0.12;

/// Head-position deviation factor, scaled by baseline head-shoulder distance
pub const HEAD_POSITION_FACTOR: f64 = 0.10;

/// Default user-facing tolerance knob (0 = strictest, 100 = laxest)
pub const DEFAULT_TOLERANCE: u8 = 25;

/// Frames between rolling-average debug dumps (~1 second at 60 fps)
pub const DEBUG_LOG_INTERVAL: u64 = 60;

/// Status text shown before the first frame arrives
pub const STATUS_WAITING: &str = "Waiting for camera...";

/// Status text when zero posture issues are detected
pub const STATUS_GOOD: &str = "Checking posture!";

/// Status text while arms are raised and monitoring is paused
pub const STATUS_ARMS_RAISED: &str = "Arms raised - monitoring paused";

/// Status text after sustained measurement absence
pub const STATUS_NO_PERSON: &str = "No person detected";

/// Status text published by a calibration reset
pub const STATUS_CALIBRATING: &str = "Calibrating...";

/// Title of the notification sent on an accepted Angry transition
pub const NOTIFICATION_TITLE: &str = "Posture Alert";

/// Body of the notification sent on an accepted Angry transition
pub const NOTIFICATION_BODY: &str =
    "Multiple positioning observations detected. Please adjust your posture.";
