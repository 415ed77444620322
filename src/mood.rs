//! Mapping from detected issues to a displayable mood and status line.

use serde::Serialize;

use crate::constants::STATUS_GOOD;
use crate::evaluator::PostureIssue;

/// The three mood levels surfaced to the display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// No posture issues
    Happy,
    /// Exactly one posture issue
    Neutral,
    /// Two or more posture issues
    Angry,
}

/// One classified frame: mood plus the human-readable status text
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub mood: Mood,
    pub status: String,
    /// Raw issue count, even when the status only surfaces two issues
    pub issue_count: usize,
}

/// Map an ordered issue list to a mood level and status string.
///
/// With two or more issues only the first two appear in the status text,
/// joined with " & "; `issue_count` still reports the full length.
#[must_use]
pub fn classify(issues: &[PostureIssue]) -> Classification {
    let (mood, status) = match issues {
        [] => (Mood::Happy, STATUS_GOOD.to_string()),
        [single] => (Mood::Neutral, single.to_string()),
        [first, second, ..] => (Mood::Angry, format!("{first} & {second}")),
    };

    Classification {
        mood,
        status,
        issue_count: issues.len(),
    }
}
