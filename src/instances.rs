// Per-instance sprite data for the billboard passes. Kept free of web and GPU
// types so host tests can include it directly.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use scene_core::ornament::{Finish, KindState, Ornament};
use scene_core::SceneState;

pub const SHAPE_DUST: f32 = 0.0;
pub const SHAPE_TRAIL: f32 = 1.0;
pub const SHAPE_BAUBLE: f32 = 2.0;
pub const SHAPE_STAR: f32 = 3.0;
pub const SHAPE_BELL: f32 = 4.0;
pub const SHAPE_HALO: f32 = 5.0;
pub const SHAPE_RING: f32 = 6.0;

const DUST_COLOR: [f32; 4] = [1.0, 0.85, 0.55, 1.0];
const TRAIL_COLOR: [f32; 4] = [1.0, 0.8, 0.4, 1.0];
const HALO_COLOR: [f32; 4] = [1.0, 0.75, 0.35, 0.35];
const RING_COLOR: [f32; 4] = [1.0, 0.82, 0.45, 0.9];

// Billboard half-extent relative to the ornament's scale.
const BAUBLE_EXTENT: f32 = 1.0;
const STAR_EXTENT: f32 = 1.2;
const BELL_EXTENT: f32 = 1.1;
const HALO_EXTENT: f32 = 1.4;
const RING_EXTENTS: [f32; 3] = [1.1, 1.25, 1.4];
const TRAIL_GLOW: f32 = 1.5;
const LAYER_BIAS: f32 = 0.01; // view depth nudge keeping halo behind, rings in front

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// World centre and half-extent.
    pub pos_size: [f32; 4],
    pub color: [f32; 4],
    /// Shape id, rotation angle, hover glow 0..=1, shape-specific extra.
    pub params: [f32; 4],
}

impl SpriteInstance {
    fn new(center: Vec3, half_extent: f32, color: [f32; 4], params: [f32; 4]) -> Self {
        Self {
            pos_size: [center.x, center.y, center.z, half_extent],
            color,
            params,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.pos_size[0], self.pos_size[1], self.pos_size[2])
    }

    #[inline]
    pub fn shape(&self) -> f32 {
        self.params[0]
    }
}

pub fn finish_color(finish: Finish) -> [f32; 4] {
    match finish {
        Finish::PolishedGold => [1.0, 0.78, 0.34, 1.0],
        Finish::BrushedGold => [0.9, 0.68, 0.3, 1.0],
        Finish::LiquidGold => [1.0, 0.84, 0.45, 1.0],
        Finish::Crystal => [0.95, 0.97, 1.0, 0.55],
    }
}

/// Shading roughness handed to the shader; crystal reads as glossy.
pub fn finish_roughness(finish: Finish) -> f32 {
    match finish {
        Finish::PolishedGold => 0.1,
        Finish::BrushedGold => 0.35,
        Finish::LiquidGold => 0.02,
        Finish::Crystal => 0.0,
    }
}

/// Dust first, then the live trail particles. Both draw additively so order
/// inside the batch does not matter.
pub fn push_particles(scene: &SceneState, out: &mut Vec<SpriteInstance>) {
    let dust_half = scene.uniforms().dust_size * 0.5;
    let time = scene.uniforms().time;
    for p in scene.dust().particles() {
        out.push(SpriteInstance::new(
            p.position,
            dust_half,
            DUST_COLOR,
            [SHAPE_DUST, 0.0, 0.0, p.phase + time],
        ));
    }
    for p in scene.trail().particles().iter().filter(|p| p.size > 0.0) {
        let fade = (p.life / p.max_life).clamp(0.0, 1.0);
        out.push(SpriteInstance::new(
            p.position,
            p.size * TRAIL_GLOW,
            TRAIL_COLOR,
            [SHAPE_TRAIL, 0.0, 0.0, fade],
        ));
    }
}

/// Ornaments plus the hero's halo and rings, sorted back to front.
pub fn push_ornaments(scene: &SceneState, out: &mut Vec<SpriteInstance>) {
    let Some(table) = scene.ornaments() else {
        return;
    };
    let group = scene.group_matrix();
    let group_scale = scene.group().scale;
    let view = scene.camera().view_matrix();
    let hero = table.hero();

    let mut layered: Vec<(f32, SpriteInstance)> = Vec::with_capacity(table.len() + 4);
    for o in table.iter() {
        let center = group.transform_point3(o.transform.position);
        let depth = view_depth(&view, center);
        let scale = o.visual_scale() * group_scale;
        layered.push((depth, ornament_sprite(o, center, scale)));

        if Some(o.id) == hero {
            layered.push((
                depth - LAYER_BIAS,
                SpriteInstance::new(center, scale * HALO_EXTENT, HALO_COLOR, [SHAPE_HALO, 0.0, 0.0, 0.0]),
            ));
            if let KindState::Bauble { rings } = &o.state {
                for (ring, extent) in rings.iter().zip(RING_EXTENTS) {
                    layered.push((
                        depth + LAYER_BIAS,
                        SpriteInstance::new(
                            center,
                            scale * extent,
                            RING_COLOR,
                            [SHAPE_RING, ring.y + ring.z, 0.0, ring.x],
                        ),
                    ));
                }
            }
        }
    }

    // View space looks down -z: most negative is farthest.
    layered.sort_by(|a, b| a.0.total_cmp(&b.0));
    out.extend(layered.into_iter().map(|(_, s)| s));
}

#[inline]
fn view_depth(view: &Mat4, world: Vec3) -> f32 {
    view.transform_point3(world).z
}

fn ornament_sprite(o: &Ornament, center: Vec3, scale: f32) -> SpriteInstance {
    let glow = hover_glow(o.hover_factor);
    let rot = o.transform.rotation;
    let color = finish_color(o.finish);
    let roughness = finish_roughness(o.finish);
    match &o.state {
        KindState::Bauble { .. } => SpriteInstance::new(
            center,
            scale * BAUBLE_EXTENT,
            color,
            [SHAPE_BAUBLE, rot.y, glow, roughness],
        ),
        KindState::Star => SpriteInstance::new(
            center,
            scale * STAR_EXTENT,
            color,
            [SHAPE_STAR, rot.y + rot.z, glow, roughness],
        ),
        KindState::Bell { clapper_z } => SpriteInstance::new(
            center,
            scale * BELL_EXTENT,
            color,
            [SHAPE_BELL, rot.z, glow, *clapper_z],
        ),
    }
}

/// 0 at rest, 1 at full hover scale.
#[inline]
pub fn hover_glow(hover_factor: f32) -> f32 {
    use scene_core::constants::{HOVER_SCALE, IDLE_SCALE};
    ((hover_factor - IDLE_SCALE) / (HOVER_SCALE - IDLE_SCALE)).clamp(0.0, 1.0)
}
