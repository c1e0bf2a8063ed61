//! Scroll velocity and scrubbed scroll progress.

use crate::constants::*;
use crate::follow::{approach, approach_exp};

/// Raw page scroll metrics, CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub max_offset: f32,
    pub hero_height: f32,
}

/// Derived per-frame scroll state handed to the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    /// Smoothed pixels per frame, positive when scrolling down.
    pub velocity: f32,
    /// Whole-page progress, 0..=1, unsmoothed.
    pub page_progress: f32,
    /// Progress through the hero section, 0..=1, scrubbed.
    pub hero_progress: f32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    last_offset: Option<f32>,
    velocity: f32,
    hero_scrubbed: f32,
}

impl ScrollTracker {
    pub fn sample(&mut self, metrics: ScrollMetrics, dt_sec: f32) -> ScrollSample {
        let delta = match self.last_offset {
            Some(prev) => metrics.offset - prev,
            None => 0.0,
        };
        self.last_offset = Some(metrics.offset);
        self.velocity = approach(self.velocity, delta, SCROLL_VELOCITY_SMOOTHING);

        let page_progress = if metrics.max_offset > 0.0 {
            (metrics.offset / metrics.max_offset).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let hero_target = if metrics.hero_height > 0.0 {
            (metrics.offset / metrics.hero_height).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.hero_scrubbed = approach_exp(self.hero_scrubbed, hero_target, dt_sec, HERO_SCRUB_TAU_SEC);

        ScrollSample {
            velocity: self.velocity,
            page_progress,
            hero_progress: self.hero_scrubbed,
        }
    }
}

/// Camera distance as the hero section scrolls away.
#[inline]
pub fn camera_dolly_z(hero_progress: f32) -> f32 {
    let p = hero_progress.clamp(0.0, 1.0);
    CAMERA_START_Z + (CAMERA_SCROLLED_Z - CAMERA_START_Z) * p
}

/// Extra yaw of the ornament group, one full turn across the hero section.
#[inline]
pub fn group_scroll_spin(hero_progress: f32) -> f32 {
    hero_progress.clamp(0.0, 1.0) * std::f32::consts::TAU
}
