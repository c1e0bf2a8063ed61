//! Throttled pointer hit-testing and hover edge detection.

use crate::camera::{ray_sphere, Ray};
use crate::constants::{CHIME_RATE_MAX, CHIME_RATE_MIN, HIT_TEST_INTERVAL};
use crate::error::AudioError;
use crate::ornament::OrnamentId;
use glam::Vec3;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub ornament: OrnamentId,
    pub distance: f32,
}

pub type HitList = SmallVec<[Hit; 4]>;

/// Intersect `ray` with every sphere, nearest hit first.
pub fn cast(ray: &Ray, spheres: impl IntoIterator<Item = (OrnamentId, Vec3, f32)>) -> HitList {
    let mut hits: HitList = spheres
        .into_iter()
        .filter_map(|(ornament, center, radius)| {
            ray_sphere(ray, center, radius).map(|distance| Hit { ornament, distance })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Result of the last ray cast, refreshed every `interval` frames.
#[derive(Clone, Debug)]
pub struct HitTestCache {
    hits: HitList,
    interval: u64,
    refreshes: u64,
}

impl Default for HitTestCache {
    fn default() -> Self {
        Self::new(HIT_TEST_INTERVAL)
    }
}

impl HitTestCache {
    pub fn new(interval: u64) -> Self {
        Self {
            hits: HitList::new(),
            interval: interval.max(1),
            refreshes: 0,
        }
    }

    #[inline]
    pub fn is_due(&self, frame: u64) -> bool {
        frame % self.interval == 0
    }

    /// Run `cast` and replace the cache on due frames. Returns whether it ran.
    pub fn refresh_if_due(&mut self, frame: u64, cast: impl FnOnce() -> HitList) -> bool {
        if !self.is_due(frame) {
            return false;
        }
        self.hits = cast();
        self.refreshes += 1;
        true
    }

    #[inline]
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    #[inline]
    pub fn contains(&self, id: OrnamentId) -> bool {
        self.hits.iter().any(|h| h.ornament == id)
    }

    #[inline]
    pub fn refresh_count(&self) -> u64 {
        self.refreshes
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEdge {
    Entered,
    Held,
    Left,
    Idle,
}

#[inline]
pub fn hover_edge(was_hovered: bool, hovered: bool) -> HoverEdge {
    match (was_hovered, hovered) {
        (false, true) => HoverEdge::Entered,
        (true, true) => HoverEdge::Held,
        (true, false) => HoverEdge::Left,
        (false, false) => HoverEdge::Idle,
    }
}

/// Fire-and-forget chime playback. Implementations restart the cue from the
/// beginning if it is still sounding.
pub trait ChimeSink {
    /// In the browser an autoplay rejection arrives later on the play
    /// promise and is only logged there, so `Err` covers synchronous
    /// failures alone. Callers must not retry on `Ok`.
    fn play(&mut self, playback_rate: f32) -> Result<(), AudioError>;
}

#[inline]
pub fn chime_rate(rng: &mut impl Rng) -> f32 {
    rng.gen_range(CHIME_RATE_MIN..=CHIME_RATE_MAX)
}
