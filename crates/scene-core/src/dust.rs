//! Background dust: a fixed set of motes that fall, drift with scrolling,
//! scatter away from the pointer and settle back toward their origin.

use crate::constants::*;
use glam::{Vec2, Vec3};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DustParticle {
    pub position: Vec3,
    /// Settle anchor for x/z. Follows respawns.
    pub origin: Vec3,
    pub fall_speed: f32,
    pub phase: f32,
}

impl DustParticle {
    pub fn new(position: Vec3, fall_speed: f32, phase: f32) -> Self {
        Self {
            position,
            origin: position,
            fall_speed,
            phase,
        }
    }

    fn random(rng: &mut impl Rng) -> Self {
        let position = Vec3::new(
            (rng.gen::<f32>() - 0.5) * DUST_SPAN_X,
            (rng.gen::<f32>() - 0.5) * DUST_SPAN_Y,
            (rng.gen::<f32>() - 0.5) * DUST_SPAN_Z,
        );
        let fall_speed = DUST_FALL_MIN + rng.gen::<f32>() * DUST_FALL_SPAN;
        let phase = rng.gen::<f32>() * std::f32::consts::TAU;
        Self::new(position, fall_speed, phase)
    }
}

/// Per-frame inputs shared by every particle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DustInput {
    pub time: f32,
    pub scroll_velocity: f32,
    /// Pointer projected onto the x/y plane, world units.
    pub pointer_world: Vec2,
}

/// Pointer offset (x right, y down) mapped onto the dust plane.
#[inline]
pub fn pointer_world(pointer: Vec2) -> Vec2 {
    // Screen y grows downward and world y upward; flipped so the dust parts
    // under the visible cursor rather than its mirror image.
    Vec2::new(pointer.x * POINTER_WORLD_X, -pointer.y * POINTER_WORLD_Y)
}

/// Amplitude multiplier for the sideways sway; grows with scroll speed.
#[inline]
pub fn turbulence_factor(scroll_velocity: f32) -> f32 {
    (1.0 + scroll_velocity.abs() * DUST_TURBULENCE_SCROLL_GAIN).min(DUST_TURBULENCE_MAX)
}

#[derive(Clone, Debug)]
pub struct DustField {
    particles: Vec<DustParticle>,
}

impl DustField {
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let particles = (0..count).map(|_| DustParticle::random(rng)).collect();
        Self { particles }
    }

    pub fn from_particles(particles: Vec<DustParticle>) -> Self {
        Self { particles }
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
    pub fn particles(&self) -> &[DustParticle] {
        &self.particles
    }

    /// Mutable access to individual motes. The slice length is fixed.
    #[inline]
    pub fn particles_mut(&mut self) -> &mut [DustParticle] {
        &mut self.particles
    }

    /// Advance every particle by one frame. Returns how many were recycled
    /// from the floor to the top.
    pub fn step(&mut self, input: &DustInput, rng: &mut impl Rng) -> usize {
        let turbulence = turbulence_factor(input.scroll_velocity);
        let repel_sq = DUST_REPEL_RADIUS * DUST_REPEL_RADIUS;
        let mut wrapped = 0;

        for p in &mut self.particles {
            let pos = &mut p.position;
            pos.y -= p.fall_speed;
            pos.y += input.scroll_velocity * DUST_SCROLL_DRIFT;
            pos.x += (input.time + pos.y * DUST_TURBULENCE_HEIGHT_FREQ + p.phase).sin()
                * DUST_TURBULENCE_STEP
                * turbulence;

            let dx = input.pointer_world.x - pos.x;
            let dy = input.pointer_world.y - pos.y;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq < repel_sq {
                let dist = dist_sq.sqrt();
                let force = (DUST_REPEL_RADIUS - dist) / DUST_REPEL_RADIUS;
                let angle = dy.atan2(dx);
                pos.x -= angle.cos() * force * DUST_REPEL_STRENGTH;
                pos.y -= angle.sin() * force * DUST_REPEL_STRENGTH;
            } else {
                pos.x += (p.origin.x - pos.x) * DUST_SETTLE_RATE;
                pos.z += (p.origin.z - pos.z) * DUST_SETTLE_RATE;
            }

            if pos.y < DUST_FLOOR {
                pos.y = DUST_CEILING;
                pos.x = (rng.gen::<f32>() - 0.5) * DUST_SPAN_X;
                pos.z = (rng.gen::<f32>() - 0.5) * DUST_SPAN_Z;
                p.origin = *pos;
                wrapped += 1;
            } else if pos.y > DUST_CEILING {
                pos.y = DUST_FLOOR;
            }
        }
        wrapped
    }
}
