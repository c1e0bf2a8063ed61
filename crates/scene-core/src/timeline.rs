//! Small easing/tween helpers for the scripted, non per-frame transitions.

use crate::constants::{INTRO_DURATION_SEC, INTRO_ELASTIC_AMPLITUDE, INTRO_ELASTIC_PERIOD};
use std::f32::consts::TAU;

#[inline]
pub fn power2_out(p: f32) -> f32 {
    let q = 1.0 - p.clamp(0.0, 1.0);
    1.0 - q * q * q
}

#[inline]
pub fn power4_out(p: f32) -> f32 {
    let q = 1.0 - p.clamp(0.0, 1.0);
    1.0 - q * q * q * q * q
}

/// Springy overshoot that settles on 1. Exact at both ends.
pub fn elastic_out(p: f32, amplitude: f32, period: f32) -> f32 {
    if p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }
    let a = amplitude.max(1.0);
    let period = period / amplitude.min(1.0).max(1e-3);
    let shift = period / TAU * (1.0 / a).asin();
    a * 2f32.powf(-10.0 * p) * ((p - shift) * (TAU / period)).sin() + 1.0
}

/// Linear interpolation between two values over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_sec: f32,
    pub duration_sec: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_sec: f32, duration_sec: f32) -> Self {
        Self {
            from,
            to,
            start_sec,
            duration_sec,
        }
    }

    #[inline]
    pub fn progress(&self, now_sec: f32) -> f32 {
        if self.duration_sec <= 0.0 {
            return 1.0;
        }
        ((now_sec - self.start_sec) / self.duration_sec).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn value(&self, now_sec: f32) -> f32 {
        self.from + (self.to - self.from) * self.progress(now_sec)
    }

    #[inline]
    pub fn is_complete(&self, now_sec: f32) -> bool {
        self.progress(now_sec) >= 1.0
    }
}

/// Ornament group "pop in" once the preloader has gone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntroTween {
    start_sec: Option<f32>,
}

impl IntroTween {
    pub fn begin(&mut self, now_sec: f32) {
        if self.start_sec.is_none() {
            self.start_sec = Some(now_sec);
        }
    }

    #[inline]
    pub fn has_started(&self) -> bool {
        self.start_sec.is_some()
    }

    /// Group scale; full size until the intro has been started.
    pub fn scale(&self, now_sec: f32) -> f32 {
        match self.start_sec {
            None => 1.0,
            Some(start) => {
                let p = ((now_sec - start) / INTRO_DURATION_SEC).clamp(0.0, 1.0);
                elastic_out(p, INTRO_ELASTIC_AMPLITUDE, INTRO_ELASTIC_PERIOD)
            }
        }
    }
}

/// Shared timing for a group of targets animated one after another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    /// Offset of the first target from the start of the timeline.
    pub delay_sec: f32,
    pub duration_sec: f32,
    /// Gap between consecutive target starts.
    pub stagger_sec: f32,
}

impl Stagger {
    #[inline]
    pub fn start_sec(&self, index: usize) -> f32 {
        self.delay_sec + index as f32 * self.stagger_sec
    }

    /// Linear 0..=1 progress of target `index` at `elapsed_sec`.
    pub fn local_progress(&self, index: usize, elapsed_sec: f32) -> f32 {
        let local = elapsed_sec - self.start_sec(index);
        if self.duration_sec <= 0.0 {
            return if local >= 0.0 { 1.0 } else { 0.0 };
        }
        (local / self.duration_sec).clamp(0.0, 1.0)
    }

    /// When the last of `count` targets finishes.
    pub fn end_sec(&self, count: usize) -> f32 {
        match count {
            0 => self.delay_sec,
            n => self.start_sec(n - 1) + self.duration_sec,
        }
    }
}
