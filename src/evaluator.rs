//! Threshold evaluation of smoothed metrics against the calibration baseline.

use std::fmt;

use crate::calibration::CalibrationBaseline;
use crate::constants::{HEAD_POSITION_FACTOR, SHOULDER_BALANCE_FACTOR, SHOULDER_WIDTH_FACTOR};
use crate::rolling::RollingAverages;

/// Convert the user-facing tolerance knob (0-100, lower = stricter) into a
/// sensitivity scale (0.0-1.0, higher = stricter).
#[must_use]
pub fn sensitivity(tolerance: u8) -> f64 {
    f64::from(100 - tolerance.min(100)) / 100.0
}

/// Sensitivity-scaled deviation thresholds derived from the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Allowed shoulder-span deviation, scaled by the baseline span
    pub shoulder_width: f64,
    /// Allowed extra shoulder height imbalance, absolute over baseline
    pub shoulder_balance: f64,
    /// Allowed head drop, scaled by the baseline head-shoulder distance
    pub head_position: f64,
}

impl Thresholds {
    /// Compute thresholds for a baseline at the given sensitivity.
    ///
    /// The balance threshold is deliberately absolute rather than scaled by
    /// baseline magnitude; the other two scale with the body proportion they
    /// gate.
    #[must_use]
    pub fn new(baseline: &CalibrationBaseline, sensitivity: f64) -> Self {
        let scale = 1.0 + sensitivity;
        Self {
            shoulder_width: baseline.shoulder_span * SHOULDER_WIDTH_FACTOR * scale,
            shoulder_balance: SHOULDER_BALANCE_FACTOR * scale,
            head_position: baseline.head_shoulder_distance * HEAD_POSITION_FACTOR * scale,
        }
    }
}

/// An actionable posture issue, in the order the evaluator emits them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostureIssue {
    /// Shoulder span collapsed below baseline (hunching forward)
    ShouldersBack,
    /// Shoulder span stretched beyond baseline (leaning back)
    ShouldersForward,
    /// Shoulder height imbalance above baseline
    LevelShoulders,
    /// Head dropped toward the shoulders
    ChinUp,
}

impl fmt::Display for PostureIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::ShouldersBack => "Shoulders back!",
            Self::ShouldersForward => "Ease shoulders forward",
            Self::LevelShoulders => "Level your shoulders",
            Self::ChinUp => "Chin up!",
        };
        f.write_str(text)
    }
}

/// Compare rolling averages to the baseline and list the issues found.
///
/// Checks run in a fixed order (width, balance, head) so the resulting list
/// is reproducible for identical inputs. Between zero and three issues are
/// returned.
#[must_use]
pub fn evaluate(
    averages: &RollingAverages,
    baseline: &CalibrationBaseline,
    thresholds: &Thresholds,
) -> Vec<PostureIssue> {
    let mut issues = Vec::new();

    // 1. Shoulder width: deviation in either direction past the threshold
    let width_change = (averages.shoulder_span - baseline.shoulder_span).abs();
    if width_change > thresholds.shoulder_width {
        if averages.shoulder_span < baseline.shoulder_span {
            issues.push(PostureIssue::ShouldersBack);
        } else {
            issues.push(PostureIssue::ShouldersForward);
        }
    }

    // 2. Shoulder balance: only excess imbalance counts
    if averages.shoulder_height_delta > baseline.shoulder_height_delta + thresholds.shoulder_balance
    {
        issues.push(PostureIssue::LevelShoulders);
    }

    // 3. Head position: only a drop below baseline counts
    if averages.head_shoulder_distance < baseline.head_shoulder_distance - thresholds.head_position
    {
        issues.push(PostureIssue::ChinUp);
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> CalibrationBaseline {
        CalibrationBaseline {
            shoulder_span: 100.0,
            shoulder_height_delta: 2.0,
            head_shoulder_distance: 50.0,
        }
    }

    fn averages(span: f64, delta: f64, head: f64) -> RollingAverages {
        RollingAverages {
            shoulder_span: span,
            shoulder_height_delta: delta,
            head_shoulder_distance: head,
        }
    }

    #[test]
    fn test_sensitivity_scale() {
        assert_eq!(sensitivity(0), 1.0);
        assert_eq!(sensitivity(25), 0.75);
        assert_eq!(sensitivity(100), 0.0);
    }

    #[test]
    fn test_threshold_values_at_tolerance_25() {
        let thresholds = Thresholds::new(&baseline(), sensitivity(25));
        assert!((thresholds.shoulder_width - 26.25).abs() < 1e-12);
        assert!((thresholds.shoulder_balance - 0.21).abs() < 1e-12);
        assert!((thresholds.head_position - 8.75).abs() < 1e-12);
    }

    #[test]
    fn test_shoulder_width_within_threshold() {
        let thresholds = Thresholds::new(&baseline(), sensitivity(25));
        // Delta of 20 is under the 26.25 threshold
        let issues = evaluate(&averages(80.0, 2.0, 50.0), &baseline(), &thresholds);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_shoulders_back_when_span_collapses() {
        let thresholds = Thresholds::new(&baseline(), sensitivity(25));
        let issues = evaluate(&averages(60.0, 2.0, 50.0), &baseline(), &thresholds);
        assert_eq!(issues, vec![PostureIssue::ShouldersBack]);
        assert_eq!(issues[0].to_string(), "Shoulders back!");
    }

    #[test]
    fn test_shoulders_forward_when_span_stretches() {
        let thresholds = Thresholds::new(&baseline(), sensitivity(25));
        let issues = evaluate(&averages(140.0, 2.0, 50.0), &baseline(), &thresholds);
        assert_eq!(issues, vec![PostureIssue::ShouldersForward]);
    }

    #[test]
    fn test_balance_threshold_is_absolute() {
        let thresholds = Thresholds::new(&baseline(), sensitivity(25));
        // baseline delta 2.0 + absolute 0.21 threshold
        let ok = evaluate(&averages(100.0, 2.2, 50.0), &baseline(), &thresholds);
        assert!(ok.is_empty());

        let bad = evaluate(&averages(100.0, 2.3, 50.0), &baseline(), &thresholds);
        assert_eq!(bad, vec![PostureIssue::LevelShoulders]);
    }

    #[test]
    fn test_chin_up_only_on_drop() {
        let thresholds = Thresholds::new(&baseline(), sensitivity(25));
        let high = evaluate(&averages(100.0, 2.0, 70.0), &baseline(), &thresholds);
        assert!(high.is_empty());

        let dropped = evaluate(&averages(100.0, 2.0, 40.0), &baseline(), &thresholds);
        assert_eq!(dropped, vec![PostureIssue::ChinUp]);
    }

    #[test]
    fn test_issue_order_is_fixed() {
        let thresholds = Thresholds::new(&baseline(), sensitivity(0));
        let issues = evaluate(&averages(40.0, 5.0, 30.0), &baseline(), &thresholds);
        assert_eq!(
            issues,
            vec![
                PostureIssue::ShouldersBack,
                PostureIssue::LevelShoulders,
                PostureIssue::ChinUp
            ]
        );
    }
}
