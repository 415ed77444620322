//! Posture mood estimation library for streaming skeletal measurements.
//!
//! This library turns noisy per-frame keypoint measurements from an
//! upstream pose estimator into a stabilized, human-readable "posture mood"
//! signal:
//! 1. Calibration learns a per-session baseline from the user's own body
//!    proportions (first 40 accepted frames)
//! 2. A rolling window smooths frame-to-frame noise (last 30 frames)
//! 3. Sensitivity-scaled thresholds classify deviation from baseline into
//!    actionable issues
//! 4. A cooldown gate debounces the resulting mood with time-based
//!    hysteresis so the visible state does not flicker
//!
//! A no-person watchdog runs in parallel and takes over the published state
//! after sustained measurement absence.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use posture_mood::{config::Config, estimator::PostureEstimator, frame::FrameMeasurement};
//!
//! # fn main() -> posture_mood::Result<()> {
//! let mut estimator = PostureEstimator::with_defaults(Config::default())?;
//!
//! // Feed frames at the camera's cadence; `None` marks an absent detection
//! estimator.push_frame(Some(FrameMeasurement {
//!     shoulder_span: 102.0,
//!     head_shoulder_distance: 49.5,
//!     head_y: 120.0,
//!     confidence: 0.92,
//!     shoulder_height_delta: 1.2,
//!     arms_raised: false,
//! }));
//! estimator.poll();
//!
//! let analysis = estimator.analysis();
//! println!("{}: {}", analysis.metrics.issue_count, analysis.status);
//! # Ok(())
//! # }
//! ```
//!
//! ## Deterministic timing in tests
//!
//! ```
//! use std::time::Duration;
//! use posture_mood::{
//!     config::Config,
//!     effects::NullEffects,
//!     estimator::PostureEstimator,
//!     scheduler::VirtualScheduler,
//! };
//!
//! # fn main() -> posture_mood::Result<()> {
//! let scheduler = VirtualScheduler::new();
//! let mut estimator = PostureEstimator::new(
//!     Config::default(),
//!     Box::new(scheduler.clone()),
//!     Box::new(NullEffects),
//! )?;
//!
//! estimator.push_frame(None);
//! scheduler.advance(Duration::from_millis(3000));
//! estimator.poll();
//! assert_eq!(estimator.analysis().status, "No person detected");
//! # Ok(())
//! # }
//! ```

/// Per-frame measurement record delivered by the pose-estimation collaborator
pub mod frame;

/// Calibration sample collection and baseline reduction
pub mod calibration;

/// Bounded recency window for smoothing frame-to-frame noise
pub mod rolling;

/// Threshold evaluation against the calibration baseline
pub mod evaluator;

/// Issue-list to mood/status mapping
pub mod mood;

/// Time-based hysteresis over mood transitions
pub mod cooldown;

/// Injectable time source and cancelable timers
pub mod scheduler;

/// Side-effect request seam for sounds and notifications
pub mod effects;

/// The streaming estimator pipeline
pub mod estimator;

/// Error types and result handling
pub mod error;

/// Configuration management
pub mod config;

/// Constants used throughout the estimator
pub mod constants;

pub use error::{Error, Result};
