//! Time-based hysteresis over mood transitions.
//!
//! Status text and metrics always refresh; the mood *level* only changes
//! once a minimum dwell time has passed since the previous accepted change.
//! This keeps the visible state from flickering while textual feedback
//! stays live.

use std::time::{Duration, Instant};

use crate::effects::SoundKind;
use crate::mood::Mood;

/// Outcome of pushing one classified frame through the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateDecision {
    /// The mood to publish (previous mood when the change was suppressed)
    pub mood: Mood,
    /// Whether a mood-level change was accepted on this call
    pub accepted: bool,
    /// Sound cue to request; only accepted transitions carry one
    pub sound: Option<SoundKind>,
}

/// Hysteresis state machine over `{Happy, Neutral, Angry}`.
///
/// Invariant: `last_mood` always equals the mood most recently published,
/// and the change timestamp only advances when the mood actually changes.
pub struct CooldownGate {
    dwell: Duration,
    last_mood: Mood,
    // None means "epoch": the first mood change is always accepted
    last_change: Option<Instant>,
}

impl CooldownGate {
    /// Create a gate requiring `dwell` between accepted mood changes
    #[must_use]
    pub fn new(dwell: Duration) -> Self {
        Self {
            dwell,
            last_mood: Mood::Neutral,
            last_change: None,
        }
    }

    /// Mood most recently published through this gate
    #[must_use]
    pub fn last_mood(&self) -> Mood {
        self.last_mood
    }

    /// Push a classified mood through the gate at time `now`.
    pub fn apply(&mut self, now: Instant, mood: Mood) -> GateDecision {
        if mood == self.last_mood {
            return GateDecision {
                mood,
                accepted: false,
                sound: None,
            };
        }

        let dwell_elapsed = match self.last_change {
            Some(at) => now.duration_since(at) >= self.dwell,
            None => true,
        };

        if dwell_elapsed {
            self.last_mood = mood;
            self.last_change = Some(now);
            GateDecision {
                mood,
                accepted: true,
                sound: Some(transition_sound(mood)),
            }
        } else {
            // Suppress the level change; status/metrics still refresh
            GateDecision {
                mood: self.last_mood,
                accepted: false,
                sound: None,
            }
        }
    }

    /// Record a mood published outside the gate (arms raised, calibration,
    /// watchdog). Never emits a sound; advances the change timestamp only
    /// when the mood actually changed.
    pub fn force(&mut self, now: Instant, mood: Mood) {
        if mood != self.last_mood {
            self.last_mood = mood;
            self.last_change = Some(now);
        }
    }

    /// Restore the freshly constructed state: Neutral at epoch
    pub fn reset(&mut self) {
        self.last_mood = Mood::Neutral;
        self.last_change = None;
    }
}

fn transition_sound(mood: Mood) -> SoundKind {
    match mood {
        Mood::Happy => SoundKind::Good,
        Mood::Neutral => SoundKind::Warning,
        Mood::Angry => SoundKind::Alert,
    }
}
