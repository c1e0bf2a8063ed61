//! Cursor trail: a fixed pool of glow points recycled around the pointer.

use crate::constants::*;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailParticle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub life: f32,
    pub max_life: f32,
    /// Displayed point size; zero while dormant.
    pub size: f32,
}

impl TrailParticle {
    fn random(rng: &mut impl Rng) -> Self {
        let mut drift = || (rng.gen::<f32>() - 0.5) * TRAIL_DRIFT;
        let velocity = Vec3::new(drift(), drift(), drift());
        Self {
            position: Vec3::new(TRAIL_PARKED_X, 0.0, 0.0),
            velocity,
            life: 0.0,
            max_life: TRAIL_MAX_LIFE_MIN + rng.gen::<f32>() * TRAIL_MAX_LIFE_SPAN,
            size: 0.0,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.life > 0.0
    }
}

/// Fade-in/fade-out size envelope peaking at half life.
#[inline]
pub fn trail_size(life: f32, max_life: f32) -> f32 {
    if life <= 0.0 || max_life <= 0.0 {
        return 0.0;
    }
    ((life / max_life) * std::f32::consts::PI).sin().max(0.0) * TRAIL_POINT_SIZE
}

#[derive(Clone, Debug)]
pub struct TrailPool {
    particles: Vec<TrailParticle>,
}

impl TrailPool {
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        Self {
            particles: (0..count).map(|_| TrailParticle::random(rng)).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[TrailParticle] {
        &self.particles
    }

    pub fn active_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_active()).count()
    }

    /// Spawn up to two dormant slots at `anchor`, then age every live slot.
    /// Returns the number spawned this frame.
    pub fn step(&mut self, anchor: Vec3, rng: &mut impl Rng) -> usize {
        let mut spawned = 0;
        for p in &mut self.particles {
            if !p.is_active() && spawned < TRAIL_SPAWNS_PER_FRAME {
                p.life = p.max_life;
                p.position = anchor
                    + Vec3::new(
                        (rng.gen::<f32>() - 0.5) * TRAIL_JITTER,
                        (rng.gen::<f32>() - 0.5) * TRAIL_JITTER,
                        (rng.gen::<f32>() - 0.5) * TRAIL_JITTER,
                    );
                spawned += 1;
            }

            if p.is_active() {
                p.life -= TRAIL_DECAY_PER_FRAME;
                p.position += p.velocity;
            }
            p.size = trail_size(p.life, p.max_life);
        }
        spawned
    }
}
