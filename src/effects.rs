//! Side-effect request seam for sound and notification playback.
//!
//! The estimator only decides *when* a sound or notification should happen;
//! synthesis and dispatch live behind this trait so the decision logic tests
//! without platform audio or notification APIs.

use log::info;

use crate::Result;

/// The four sound cues the estimator can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    /// Posture recovered (transition to Happy, calibration complete)
    Good,
    /// Single issue appeared (transition to Neutral)
    Warning,
    /// Multiple issues (transition to Angry)
    Alert,
    /// Administrative cue (calibration reset)
    Notification,
}

/// Receiver for sound and notification requests.
///
/// Implementations may fail; the estimator logs and ignores failures so a
/// broken audio stack never interrupts state transitions.
pub trait EffectsSink {
    /// Request playback of a sound cue
    fn request_sound(&mut self, kind: SoundKind) -> Result<()>;

    /// Request a user-visible notification
    fn request_notification(&mut self, title: &str, body: &str) -> Result<()>;
}

/// Sink that discards every request
pub struct NullEffects;

impl EffectsSink for NullEffects {
    fn request_sound(&mut self, _kind: SoundKind) -> Result<()> {
        Ok(())
    }

    fn request_notification(&mut self, _title: &str, _body: &str) -> Result<()> {
        Ok(())
    }
}

/// Sink that logs every request, used by the demo binary
pub struct LogEffects;

impl EffectsSink for LogEffects {
    fn request_sound(&mut self, kind: SoundKind) -> Result<()> {
        info!("sound requested: {kind:?}");
        Ok(())
    }

    fn request_notification(&mut self, title: &str, body: &str) -> Result<()> {
        info!("notification requested: {title} - {body}");
        Ok(())
    }
}
