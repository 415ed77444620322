//! Per-frame measurement record delivered by the upstream pose estimator.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One frame's worth of skeletal keypoint measurements.
///
/// Produced once per upstream frame by the pose-estimation collaborator.
/// Absence of a detection is represented as `None` at the intake boundary,
/// not by a sentinel value here. Frames delivered to the estimator are
/// assumed to have already passed the collaborator's minimum-confidence
/// gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameMeasurement {
    /// Horizontal distance between the shoulders
    pub shoulder_span: f64,
    /// Vertical distance between head and shoulder line
    pub head_shoulder_distance: f64,
    /// Absolute vertical head position
    pub head_y: f64,
    /// Detection confidence (0.0-1.0)
    pub confidence: f64,
    /// Vertical offset between left and right shoulder
    pub shoulder_height_delta: f64,
    /// Whether the arms are raised above the shoulders
    #[serde(default)]
    pub arms_raised: bool,
}

impl FrameMeasurement {
    /// Parse one line of a recorded frame stream.
    ///
    /// Each line is a JSON measurement object or the literal `null` for an
    /// absent detection.
    pub fn parse_line(line: &str) -> Result<Option<Self>> {
        serde_json::from_str(line).map_err(|e| Error::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_frame_line() {
        let line = r#"{"shoulder_span": 102.5, "head_shoulder_distance": 48.0,
                       "head_y": 120.0, "confidence": 0.91, "shoulder_height_delta": 1.5}"#;
        let frame = FrameMeasurement::parse_line(line).unwrap().unwrap();
        assert_eq!(frame.shoulder_span, 102.5);
        assert!(!frame.arms_raised);
    }

    #[test]
    fn test_deserialize_absence_marker() {
        assert!(FrameMeasurement::parse_line("null").unwrap().is_none());
    }

    #[test]
    fn test_malformed_line_is_parse_error() {
        let err = FrameMeasurement::parse_line("{not json").unwrap_err();
        assert!(err.to_string().contains("Frame parse error"));
    }
}
