//! Fire-and-forget sound triggers
//!
//! The state machine never owns an audio device; it is handed an
//! [`AudioSink`] on every update and only ever starts or stops named cues.

use serde::Serialize;

/// Named sound cues used by the catapult duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SoundCue {
    RopeStretch,
    CatapultFire,
    BoulderHit,
    CatapultExplosion,
    GameOverWin,
    GameOverLose,
}

impl SoundCue {
    /// Asset name of the cue.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::RopeStretch => "ropeStretch",
            SoundCue::CatapultFire => "catapultFire",
            SoundCue::BoulderHit => "boulderHit",
            SoundCue::CatapultExplosion => "catapultExplosion",
            SoundCue::GameOverWin => "gameOver_Win",
            SoundCue::GameOverLose => "gameOver_Lose",
        }
    }
}

impl std::fmt::Display for SoundCue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sound output injected into the state machine.
pub trait AudioSink {
    /// Start a cue. Looped cues keep playing until [`AudioSink::stop`].
    fn play(&mut self, cue: SoundCue, looped: bool);

    /// Stop a cue if it is playing.
    fn stop(&mut self, cue: SoundCue);
}

/// Discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: SoundCue, _looped: bool) {}

    fn stop(&mut self, _cue: SoundCue) {}
}

/// Writes every cue to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue, looped: bool) {
        log::debug!("[Audio] play {} (looped: {})", cue, looped);
    }

    fn stop(&mut self, cue: SoundCue) {
        log::debug!("[Audio] stop {}", cue);
    }
}

/// One recorded call on a [`RecordingAudio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCall {
    Play { cue: SoundCue, looped: bool },
    Stop(SoundCue),
}

/// Keeps every call in order; used by tests and replays.
#[derive(Debug, Default, Clone)]
pub struct RecordingAudio {
    pub calls: Vec<AudioCall>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `cue` was started.
    pub fn play_count(&self, cue: SoundCue) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, AudioCall::Play { cue: c, .. } if *c == cue))
            .count()
    }

    pub fn was_stopped(&self, cue: SoundCue) -> bool {
        self.calls.contains(&AudioCall::Stop(cue))
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: SoundCue, looped: bool) {
        self.calls.push(AudioCall::Play { cue, looped });
    }

    fn stop(&mut self, cue: SoundCue) {
        self.calls.push(AudioCall::Stop(cue));
    }
}
