//! Ambient music toggle with volume fades.
//!
//! The web layer owns the audio element; this state machine decides what to
//! ask of it. Times are seconds on any monotonic clock.

use crate::constants::{AMBIENT_FADE_IN_SEC, AMBIENT_FADE_OUT_SEC, AMBIENT_VOLUME};
use crate::timeline::Tween;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AmbientState {
    Off,
    /// Play was requested and has not resolved yet.
    Starting,
    FadingIn(Tween),
    On,
    FadingOut(Tween),
}

/// What the caller should do with the audio element after a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCommand {
    RequestPlay,
    Nothing,
}

/// Per-frame instructions while a fade is running.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SoundTick {
    pub volume: Option<f64>,
    /// Fade-out finished; pause the element and mark the button inactive.
    pub pause: bool,
}

#[derive(Clone, Debug)]
pub struct SoundToggle {
    state: AmbientState,
    volume: f64,
}

impl Default for SoundToggle {
    fn default() -> Self {
        Self {
            state: AmbientState::Off,
            volume: 0.0,
        }
    }
}

impl SoundToggle {
    #[inline]
    pub fn state(&self) -> AmbientState {
        self.state
    }

    #[inline]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// The button shows as active from a successful play until the fade-out
    /// has finished.
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(
            self.state,
            AmbientState::FadingIn(_) | AmbientState::On | AmbientState::FadingOut(_)
        )
    }

    pub fn click(&mut self, now_sec: f32) -> SoundCommand {
        match self.state {
            AmbientState::Off => {
                self.state = AmbientState::Starting;
                SoundCommand::RequestPlay
            }
            AmbientState::FadingIn(_) | AmbientState::On => {
                self.state = AmbientState::FadingOut(Tween::new(
                    self.volume as f32,
                    0.0,
                    now_sec,
                    AMBIENT_FADE_OUT_SEC,
                ));
                SoundCommand::Nothing
            }
            AmbientState::Starting | AmbientState::FadingOut(_) => SoundCommand::Nothing,
        }
    }

    pub fn play_resolved(&mut self, now_sec: f32) {
        if self.state == AmbientState::Starting {
            self.volume = 0.0;
            self.state = AmbientState::FadingIn(Tween::new(
                0.0,
                AMBIENT_VOLUME as f32,
                now_sec,
                AMBIENT_FADE_IN_SEC,
            ));
        }
    }

    pub fn play_rejected(&mut self) {
        if self.state == AmbientState::Starting {
            self.state = AmbientState::Off;
        }
    }

    pub fn tick(&mut self, now_sec: f32) -> SoundTick {
        match self.state {
            AmbientState::FadingIn(t) => {
                self.volume = t.value(now_sec) as f64;
                if t.is_complete(now_sec) {
                    self.state = AmbientState::On;
                }
                SoundTick {
                    volume: Some(self.volume),
                    pause: false,
                }
            }
            AmbientState::FadingOut(t) => {
                self.volume = t.value(now_sec) as f64;
                let done = t.is_complete(now_sec);
                if done {
                    self.state = AmbientState::Off;
                }
                SoundTick {
                    volume: Some(self.volume),
                    pause: done,
                }
            }
            _ => SoundTick::default(),
        }
    }
}
