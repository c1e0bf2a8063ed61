//! Interactive ornaments and the side table that holds their animation tags.
//!
//! Each ornament carries a hit sphere (never rendered), a spin speed, a
//! sticky hover flag and a kind-specific record. The renderer only reads
//! transforms out of this table.

use crate::constants::*;
use crate::error::SceneError;
use fnv::FnvHashMap;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrnamentId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrnamentKind {
    Bell,
    Star,
    Bauble,
}

impl OrnamentKind {
    /// Hit sphere radius before scaling.
    pub fn hit_radius(self) -> f32 {
        match self {
            OrnamentKind::Bell => 1.2,
            OrnamentKind::Star => 1.3,
            OrnamentKind::Bauble => 1.2,
        }
    }

    /// (minimum, random span) of the per-frame spin speed.
    fn spin_range(self) -> (f32, f32) {
        match self {
            OrnamentKind::Bell => (0.005, 0.01),
            OrnamentKind::Star => (0.005, 0.015),
            OrnamentKind::Bauble => (0.002, 0.005),
        }
    }
}

/// Surface look, consumed by the renderer only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finish {
    PolishedGold,
    BrushedGold,
    LiquidGold,
    Crystal,
}

/// Kind tag plus the state only that kind animates.
#[derive(Clone, Debug, PartialEq)]
pub enum KindState {
    Bell { clapper_z: f32 },
    Star,
    /// Euler rotations of the wire cage and the two thin rings.
    Bauble { rings: [Vec3; 3] },
}

impl KindState {
    fn fresh(kind: OrnamentKind) -> Self {
        match kind {
            OrnamentKind::Bell => KindState::Bell { clapper_z: 0.0 },
            OrnamentKind::Star => KindState::Star,
            OrnamentKind::Bauble => KindState::Bauble {
                rings: [
                    Vec3::ZERO,
                    Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0),
                    Vec3::new(0.0, std::f32::consts::PI / 2.5, 0.0),
                ],
            },
        }
    }

    pub fn kind(&self) -> OrnamentKind {
        match self {
            KindState::Bell { .. } => OrnamentKind::Bell,
            KindState::Star => OrnamentKind::Star,
            KindState::Bauble { .. } => OrnamentKind::Bauble,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler XYZ, radians.
    pub rotation: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ornament {
    pub id: OrnamentId,
    pub state: KindState,
    pub finish: Finish,
    pub transform: Transform,
    pub base_scale: f32,
    pub initial_y: f32,
    pub spin_speed: f32,
    pub hit_radius: f32,
    /// Smoothed multiplier on `base_scale`: 1.0 idle, 1.15 hovered.
    pub hover_factor: f32,
    /// Sticky flag set on hover-enter, cleared on exit.
    pub was_hovered: bool,
}

impl Ornament {
    #[inline]
    pub fn kind(&self) -> OrnamentKind {
        self.state.kind()
    }

    #[inline]
    pub fn visual_scale(&self) -> f32 {
        self.base_scale * self.hover_factor
    }

    /// Transform relative to the ornament group.
    pub fn local_matrix(&self) -> Mat4 {
        let r = self.transform.rotation;
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.visual_scale()),
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.transform.position,
        )
    }

    /// Hit sphere in world space given the group matrix and its uniform scale.
    pub fn hit_sphere(&self, group: &Mat4, group_scale: f32) -> (Vec3, f32) {
        let center = group.transform_point3(self.transform.position);
        (center, self.hit_radius * self.visual_scale() * group_scale)
    }

    pub(crate) fn ease_hover_scale(&mut self, hovered: bool) {
        let target = if hovered { HOVER_SCALE } else { IDLE_SCALE };
        self.hover_factor += (target - self.hover_factor) * HOVER_SCALE_LERP;
    }

    /// Per-kind idle/hover motion for everything except the hero.
    pub(crate) fn animate(&mut self, time: f32, hovered: bool) {
        let spin_mul = if hovered { HOVER_SPIN_MULTIPLIER } else { 1.0 };
        let rot = &mut self.transform.rotation;
        match &mut self.state {
            KindState::Bell { clapper_z } => {
                let (amp, freq) = if hovered {
                    BELL_SWING_HOVER
                } else {
                    BELL_SWING_IDLE
                };
                let swing = (time * freq).sin() * amp;
                rot.z += (swing - rot.z) * BELL_SWING_SMOOTHING;
                *clapper_z = swing * BELL_CLAPPER_RATIO;
            }
            KindState::Star => {
                rot.y += self.spin_speed * spin_mul;
                if hovered {
                    rot.z += STAR_HOVER_WOBBLE;
                }
            }
            KindState::Bauble { .. } => {
                rot.y += (self.spin_speed / 2.0) * spin_mul;
            }
        }
    }

    /// Hero motion: continuous spin, vertical bob, counter-rotating rings.
    pub(crate) fn animate_hero(&mut self, time: f32) {
        self.transform.rotation.y += HERO_SPIN;
        self.transform.position.y = self.initial_y + (time * HERO_BOB_FREQ).sin() * HERO_BOB_AMPLITUDE;
        if let KindState::Bauble { rings } = &mut self.state {
            rings[0] += Vec3::from_array(HERO_CAGE_SPIN);
            rings[1] += Vec3::from_array(HERO_RING_A_SPIN);
            rings[2] += Vec3::from_array(HERO_RING_B_SPIN);
        }
    }
}

/// Placement of one ornament at scene population time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrnamentSpec {
    pub kind: OrnamentKind,
    pub position: Vec3,
    pub scale: f32,
    pub finish: Finish,
}

impl OrnamentSpec {
    pub const fn new(kind: OrnamentKind, position: Vec3, scale: f32, finish: Finish) -> Self {
        Self {
            kind,
            position,
            scale,
            finish,
        }
    }
}

/// Index of the hero in [`default_layout`].
pub const DEFAULT_HERO_INDEX: usize = 0;

/// The landing page arrangement: a large liquid-gold hero bauble surrounded
/// by two stars, two bells and two smaller baubles.
pub fn default_layout() -> Vec<OrnamentSpec> {
    use OrnamentKind::*;
    vec![
        OrnamentSpec::new(Bauble, Vec3::new(0.0, -2.5, -2.0), 3.2, Finish::LiquidGold),
        OrnamentSpec::new(Star, Vec3::new(-6.0, 5.0, -4.0), 1.7, Finish::Crystal),
        OrnamentSpec::new(Bell, Vec3::new(8.0, -2.0, -2.0), 1.5, Finish::BrushedGold),
        OrnamentSpec::new(Bauble, Vec3::new(-5.0, -5.0, 2.0), 1.4, Finish::BrushedGold),
        OrnamentSpec::new(Star, Vec3::new(-6.0, 0.0, -1.0), 1.1, Finish::Crystal),
        OrnamentSpec::new(Bell, Vec3::new(6.0, 8.0, -2.0), 1.2, Finish::BrushedGold),
        OrnamentSpec::new(Bauble, Vec3::new(3.0, -4.0, -5.0), 1.8, Finish::Crystal),
    ]
}

/// Side table of ornaments keyed by id, iterated in creation order.
#[derive(Clone, Debug, Default)]
pub struct OrnamentTable {
    entries: FnvHashMap<OrnamentId, Ornament>,
    order: Vec<OrnamentId>,
    hero: Option<OrnamentId>,
}

impl OrnamentTable {
    pub fn build(
        specs: &[OrnamentSpec],
        hero_index: Option<usize>,
        rng: &mut impl Rng,
    ) -> Result<Self, SceneError> {
        if let Some(index) = hero_index {
            if index >= specs.len() {
                return Err(SceneError::HeroOutOfRange {
                    index,
                    len: specs.len(),
                });
            }
        }
        let mut table = Self::default();
        for (i, spec) in specs.iter().enumerate() {
            let id = OrnamentId(i as u32);
            let (min, span) = spec.kind.spin_range();
            table.entries.insert(
                id,
                Ornament {
                    id,
                    state: KindState::fresh(spec.kind),
                    finish: spec.finish,
                    transform: Transform {
                        position: spec.position,
                        rotation: Vec3::ZERO,
                    },
                    base_scale: spec.scale,
                    initial_y: spec.position.y,
                    spin_speed: min + rng.gen::<f32>() * span,
                    hit_radius: spec.kind.hit_radius(),
                    hover_factor: IDLE_SCALE,
                    was_hovered: false,
                },
            );
            table.order.push(id);
        }
        table.hero = hero_index.map(|i| OrnamentId(i as u32));
        Ok(table)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    pub fn ids(&self) -> &[OrnamentId] {
        &self.order
    }

    #[inline]
    pub fn hero(&self) -> Option<OrnamentId> {
        self.hero
    }

    #[inline]
    pub fn get(&self, id: OrnamentId) -> Option<&Ornament> {
        self.entries.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: OrnamentId) -> Option<&mut Ornament> {
        self.entries.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ornament> + '_ {
        self.order.iter().filter_map(move |id| self.entries.get(id))
    }

    /// World-space hit spheres for the current group transform.
    pub fn hit_spheres<'a>(
        &'a self,
        group: &'a Mat4,
        group_scale: f32,
    ) -> impl Iterator<Item = (OrnamentId, Vec3, f32)> + 'a {
        self.iter().map(move |o| {
            let (center, radius) = o.hit_sphere(group, group_scale);
            (o.id, center, radius)
        })
    }
}
