//! The posture-state estimator: a streaming stateful pipeline over per-frame
//! skeletal measurements.
//!
//! Each frame flows intake → calibration (pre-baseline) → rolling window →
//! threshold evaluation → mood classification → cooldown gate → published
//! analysis state. A watchdog timer runs in parallel and claims the
//! published state when frames stop arriving. Exactly one intake call is in
//! flight at a time; all per-frame work is synchronous.

use std::time::Duration;

use log::{debug, warn};
use serde::Serialize;

use crate::calibration::{CalibrationBaseline, CalibrationCollector};
use crate::config::{Config, NotificationPermission};
use crate::constants::{
    DEBUG_LOG_INTERVAL, NOTIFICATION_BODY, NOTIFICATION_TITLE, STATUS_ARMS_RAISED,
    STATUS_CALIBRATING, STATUS_NO_PERSON, STATUS_WAITING,
};
use crate::cooldown::CooldownGate;
use crate::effects::{EffectsSink, NullEffects, SoundKind};
use crate::evaluator::{evaluate, sensitivity, Thresholds};
use crate::frame::FrameMeasurement;
use crate::mood::{classify, Mood};
use crate::rolling::{FrameSample, RollingWindow};
use crate::scheduler::{Scheduler, SystemScheduler, TimerId};
use crate::Result;

/// Numeric metrics published alongside the mood
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisMetrics {
    /// Detection confidence of the most recent relevant frame (0.0-1.0)
    pub confidence: f64,
    /// Raw posture issue count for the most recent classification
    pub issue_count: usize,
}

/// The single published output record consumed by the display layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisState {
    pub mood: Mood,
    pub status: String,
    pub metrics: AnalysisMetrics,
}

/// Streaming posture-state estimator.
///
/// Owns all captured state across frames: calibration samples, baseline,
/// rolling window, cooldown clock, and the watchdog timer handle. All
/// mutation goes through [`push_frame`](Self::push_frame),
/// [`poll`](Self::poll), and [`reset_calibration`](Self::reset_calibration).
pub struct PostureEstimator {
    config: Config,
    collector: CalibrationCollector,
    baseline: Option<CalibrationBaseline>,
    window: RollingWindow,
    gate: CooldownGate,
    scheduler: Box<dyn Scheduler>,
    effects: Box<dyn EffectsSink>,
    watchdog: Option<TimerId>,
    analysis: AnalysisState,
    is_calibrating: bool,
    frame_counter: u64,
}

impl PostureEstimator {
    /// Create an estimator with injected scheduler and effects sink
    pub fn new(
        config: Config,
        scheduler: Box<dyn Scheduler>,
        effects: Box<dyn EffectsSink>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            collector: CalibrationCollector::new(config.smoothing.calibration_samples),
            window: RollingWindow::new(config.smoothing.rolling_window),
            gate: CooldownGate::new(Duration::from_millis(config.timing.mood_cooldown_ms)),
            config,
            baseline: None,
            scheduler,
            effects,
            watchdog: None,
            analysis: AnalysisState {
                mood: Mood::Neutral,
                status: STATUS_WAITING.to_string(),
                metrics: AnalysisMetrics {
                    confidence: 0.0,
                    issue_count: 0,
                },
            },
            is_calibrating: true,
            frame_counter: 0,
        })
    }

    /// Create an estimator on the system clock with effects discarded
    pub fn with_defaults(config: Config) -> Result<Self> {
        Self::new(config, Box::new(SystemScheduler::new()), Box::new(NullEffects))
    }

    /// The currently published analysis state
    #[must_use]
    pub fn analysis(&self) -> &AnalysisState {
        &self.analysis
    }

    /// Whether the baseline is still being collected
    #[must_use]
    pub fn is_calibrating(&self) -> bool {
        self.is_calibrating
    }

    /// The calibration baseline, once established
    #[must_use]
    pub fn baseline(&self) -> Option<&CalibrationBaseline> {
        self.baseline.as_ref()
    }

    /// Ingest one frame (`Some`) or an explicit absence marker (`None`).
    pub fn push_frame(&mut self, frame: Option<FrameMeasurement>) {
        self.frame_counter += 1;

        let Some(frame) = frame else {
            // Absence: arm the watchdog once, leave all other state alone
            if self.watchdog.is_none() {
                let timeout = Duration::from_millis(self.config.timing.no_person_timeout_ms);
                self.watchdog = Some(self.scheduler.schedule(timeout));
            }
            return;
        };

        if let Some(id) = self.watchdog.take() {
            self.scheduler.cancel(id);
        }

        if frame.arms_raised {
            // Bypass calibration, smoothing, and the cooldown gate entirely
            self.publish_direct(
                Mood::Neutral,
                STATUS_ARMS_RAISED.to_string(),
                frame.confidence,
                0,
            );
            return;
        }

        if self.is_calibrating {
            self.collect_calibration_sample(&frame);
            return;
        }

        let Some(baseline) = self.baseline else {
            // Expected transient between reset and the first sample; skip
            return;
        };

        self.window.push(FrameSample::from(&frame));
        let Some(averages) = self.window.averages() else {
            return;
        };

        let thresholds = Thresholds::new(&baseline, sensitivity(self.config.detection.tolerance));

        if self.frame_counter % DEBUG_LOG_INTERVAL == 0 {
            debug!(
                "span {:.2} vs {:.2} (±{:.2}); balance {:.2} vs {:.2} (+{:.2}); head {:.2} vs {:.2} (-{:.2})",
                averages.shoulder_span,
                baseline.shoulder_span,
                thresholds.shoulder_width,
                averages.shoulder_height_delta,
                baseline.shoulder_height_delta,
                thresholds.shoulder_balance,
                averages.head_shoulder_distance,
                baseline.head_shoulder_distance,
                thresholds.head_position,
            );
        }

        let issues = evaluate(&averages, &baseline, &thresholds);
        let classification = classify(&issues);

        let now = self.scheduler.now();
        let decision = self.gate.apply(now, classification.mood);

        self.analysis = AnalysisState {
            mood: decision.mood,
            status: classification.status,
            metrics: AnalysisMetrics {
                confidence: frame.confidence,
                issue_count: classification.issue_count,
            },
        };

        if let Some(kind) = decision.sound {
            self.request_sound(kind);
        }
        if decision.accepted && decision.mood == Mood::Angry {
            self.request_notification(NOTIFICATION_TITLE, NOTIFICATION_BODY);
        }
    }

    /// Drain fired timers. A fired watchdog publishes the no-person state.
    pub fn poll(&mut self) {
        for id in self.scheduler.fired() {
            if self.watchdog == Some(id) {
                self.watchdog = None;
                self.publish_direct(Mood::Neutral, STATUS_NO_PERSON.to_string(), 0.0, 0);
            }
        }
    }

    /// Discard all learned state and begin a fresh calibration cycle.
    ///
    /// Clears the sample set, window, baseline, and cooldown clock, cancels
    /// a pending watchdog, and requests the notification sound. A frame
    /// arriving after this call is calibration sample 1.
    pub fn reset_calibration(&mut self) {
        self.collector.reset();
        self.baseline = None;
        self.window.clear();
        self.frame_counter = 0;
        self.is_calibrating = true;
        self.gate.reset();

        if let Some(id) = self.watchdog.take() {
            self.scheduler.cancel(id);
        }

        self.analysis = AnalysisState {
            mood: Mood::Neutral,
            status: STATUS_CALIBRATING.to_string(),
            metrics: AnalysisMetrics {
                confidence: 0.0,
                issue_count: 0,
            },
        };

        self.request_sound(SoundKind::Notification);
    }

    fn collect_calibration_sample(&mut self, frame: &FrameMeasurement) {
        if let Some(baseline) = self.collector.push(frame) {
            self.baseline = Some(baseline);
            self.is_calibrating = false;
            self.request_sound(SoundKind::Good);
            debug!("calibration complete: {baseline:?}");
        }

        self.publish_direct(
            Mood::Neutral,
            format!(
                "Calibrating... {}/{}",
                self.collector.len(),
                self.collector.target()
            ),
            frame.confidence,
            0,
        );
    }

    /// Publish a state that bypasses the cooldown gate, keeping the gate's
    /// record of the last published mood in sync.
    fn publish_direct(&mut self, mood: Mood, status: String, confidence: f64, issue_count: usize) {
        let now = self.scheduler.now();
        self.gate.force(now, mood);
        self.analysis = AnalysisState {
            mood,
            status,
            metrics: AnalysisMetrics {
                confidence,
                issue_count,
            },
        };
    }

    fn request_sound(&mut self, kind: SoundKind) {
        if !self.config.detection.sounds_enabled {
            return;
        }
        if let Err(e) = self.effects.request_sound(kind) {
            warn!("sound request failed: {e}");
        }
    }

    fn request_notification(&mut self, title: &str, body: &str) {
        if !self.config.detection.sounds_enabled
            || self.config.detection.notification_permission != NotificationPermission::Granted
        {
            return;
        }
        if let Err(e) = self.effects.request_notification(title, body) {
            warn!("notification request failed: {e}");
        }
    }
}

impl Drop for PostureEstimator {
    fn drop(&mut self) {
        // A pending watchdog must not fire into destroyed state
        if let Some(id) = self.watchdog.take() {
            self.scheduler.cancel(id);
        }
    }
}
