//! Per-session calibration baseline learned from the user's own proportions.
//!
//! The collector accumulates the first accepted (non-arms-raised) frames and
//! reduces them to per-field arithmetic means once the sample set is full.

use crate::frame::FrameMeasurement;

/// Reference body proportions established during calibration.
///
/// Created exactly once per calibration cycle and never recomputed except
/// via an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationBaseline {
    /// Mean shoulder span over the calibration samples
    pub shoulder_span: f64,
    /// Mean shoulder height delta over the calibration samples
    pub shoulder_height_delta: f64,
    /// Mean head-shoulder distance over the calibration samples
    pub head_shoulder_distance: f64,
}

/// Accumulates early frames until enough samples exist to form a baseline.
pub struct CalibrationCollector {
    target: usize,
    samples: Vec<FrameMeasurement>,
    complete: bool,
}

impl CalibrationCollector {
    /// Create a collector that completes after `target` accepted samples
    #[must_use]
    pub fn new(target: usize) -> Self {
        Self {
            target,
            samples: Vec::with_capacity(target),
            complete: false,
        }
    }

    /// Append an accepted measurement.
    ///
    /// Returns the computed baseline exactly once, on the sample that fills
    /// the set. Pushes after completion are ignored.
    pub fn push(&mut self, frame: &FrameMeasurement) -> Option<CalibrationBaseline> {
        if self.complete {
            return None;
        }

        self.samples.push(*frame);

        if self.samples.len() == self.target {
            self.complete = true;
            return Some(self.reduce());
        }

        None
    }

    /// Number of samples accepted so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no samples have been accepted yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Target sample count for this cycle
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Whether the baseline has been produced
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Clear all samples and start a fresh calibration cycle
    pub fn reset(&mut self) {
        self.samples.clear();
        self.complete = false;
    }

    fn reduce(&self) -> CalibrationBaseline {
        let n = self.samples.len() as f64;
        CalibrationBaseline {
            shoulder_span: self.samples.iter().map(|s| s.shoulder_span).sum::<f64>() / n,
            shoulder_height_delta: self
                .samples
                .iter()
                .map(|s| s.shoulder_height_delta)
                .sum::<f64>()
                / n,
            head_shoulder_distance: self
                .samples
                .iter()
                .map(|s| s.head_shoulder_distance)
                .sum::<f64>()
                / n,
        }
    }
}
