//! The frame update loop.
//!
//! `SceneState` owns every piece of mutable simulation state. Event handlers
//! never touch it; they write targets that the next `update` call consumes
//! through [`FrameInput`].

use crate::camera::{Camera, CameraRig};
use crate::config::SceneConfig;
use crate::constants::*;
use crate::dust::{pointer_world, DustField, DustInput};
use crate::error::SceneError;
use crate::follow::{environment_rotation, GodRayPose, GroupMotion, PointerFollow, Spotlight};
use crate::hover::{cast, chime_rate, hover_edge, ChimeSink, HitTestCache, HoverEdge};
use crate::ornament::{OrnamentId, OrnamentSpec, OrnamentTable};
use crate::scroll::{camera_dolly_z, group_scroll_spin, ScrollSample};
use crate::timeline::IntroTween;
use crate::trail::TrailPool;
use glam::{Mat4, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

/// Everything the loop reads from the outside world for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    /// Seconds since page start.
    pub time: f32,
    /// Pointer or tilt target, x right / y down in \[-1, 1\].
    pub pointer_target: Vec2,
    /// Raw pointer in NDC for ray casts.
    pub pointer_ndc: Vec2,
    pub scroll: ScrollSample,
    pub aspect: f32,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            time: 0.0,
            pointer_target: Vec2::ZERO,
            pointer_ndc: Vec2::ZERO,
            scroll: ScrollSample::default(),
            aspect: 16.0 / 9.0,
        }
    }
}

/// Shader inputs refreshed every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MaterialUniforms {
    pub time: f32,
    pub dust_size: f32,
    pub light_position: Vec3,
    pub light_target: Vec3,
    pub environment_rotation: Vec3,
}

/// Dust point size grows a little while the page is scrolling.
#[inline]
pub fn dust_point_size(scroll_velocity: f32) -> f32 {
    DUST_POINT_SIZE + (scroll_velocity.abs() * DUST_POINT_SIZE_SCROLL_GAIN).min(DUST_POINT_SIZE_SCROLL_MAX)
}

/// What happened during one `update`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub hit_test_ran: bool,
    pub trail_spawned: usize,
    pub dust_wrapped: usize,
    pub hover_entered: SmallVec<[OrnamentId; 2]>,
    pub chime_attempts: usize,
}

pub struct SceneState {
    config: SceneConfig,
    rng: StdRng,
    frame: u64,
    pointer: PointerFollow,
    camera: CameraRig,
    spotlight: Spotlight,
    god_ray: GodRayPose,
    group: GroupMotion,
    group_matrix: Mat4,
    scroll_spin: f32,
    intro: IntroTween,
    dust: DustField,
    trail: TrailPool,
    ornaments: Option<OrnamentTable>,
    hits: HitTestCache,
    uniforms: MaterialUniforms,
}

impl SceneState {
    pub fn new(config: SceneConfig, seed: u64) -> Result<Self, SceneError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let dust = DustField::new(config.dust_count, &mut rng);
        let trail = TrailPool::new(config.trail_count, &mut rng);
        let spotlight = Spotlight::default();
        log::info!(
            "[scene] {:?} profile: dust={} trail={}",
            config.device,
            dust.len(),
            trail.len()
        );
        Ok(Self {
            config,
            rng,
            frame: 0,
            pointer: PointerFollow::default(),
            camera: CameraRig::new(16.0 / 9.0),
            god_ray: GodRayPose::aim(&spotlight),
            spotlight,
            group: GroupMotion::default(),
            group_matrix: Mat4::IDENTITY,
            scroll_spin: 0.0,
            intro: IntroTween::default(),
            dust,
            trail,
            ornaments: None,
            hits: HitTestCache::default(),
            uniforms: MaterialUniforms::default(),
        })
    }

    /// Install the ornaments once their assets are ready. Later calls are
    /// ignored; ornaments live for the whole session.
    pub fn populate(
        &mut self,
        specs: &[OrnamentSpec],
        hero_index: Option<usize>,
    ) -> Result<(), SceneError> {
        if self.ornaments.is_some() {
            log::warn!("[scene] populate called twice; keeping existing ornaments");
            return Ok(());
        }
        let table = OrnamentTable::build(specs, hero_index, &mut self.rng)?;
        log::info!("[scene] {} ornaments ready", table.len());
        self.ornaments = Some(table);
        Ok(())
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ornaments.is_some()
    }

    pub fn begin_intro(&mut self, now_sec: f32) {
        self.intro.begin(now_sec);
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
    pub fn frame_index(&self) -> u64 {
        self.frame
    }
    pub fn camera(&self) -> &Camera {
        &self.camera.camera
    }
    pub fn pointer(&self) -> &PointerFollow {
        &self.pointer
    }
    pub fn spotlight(&self) -> &Spotlight {
        &self.spotlight
    }
    pub fn god_ray(&self) -> &GodRayPose {
        &self.god_ray
    }
    pub fn group(&self) -> &GroupMotion {
        &self.group
    }
    pub fn group_matrix(&self) -> Mat4 {
        self.group_matrix
    }
    pub fn dust(&self) -> &DustField {
        &self.dust
    }
    pub fn dust_mut(&mut self) -> &mut DustField {
        &mut self.dust
    }
    pub fn trail(&self) -> &TrailPool {
        &self.trail
    }
    pub fn ornaments(&self) -> Option<&OrnamentTable> {
        self.ornaments.as_ref()
    }
    pub fn hit_cache(&self) -> &HitTestCache {
        &self.hits
    }
    pub fn uniforms(&self) -> &MaterialUniforms {
        &self.uniforms
    }

    /// Advance the scene by one display frame.
    pub fn update(&mut self, input: &FrameInput, chime: &mut dyn ChimeSink) -> FrameReport {
        let t = input.time;
        let frame = self.frame;
        let mut report = FrameReport {
            frame,
            ..FrameReport::default()
        };

        self.uniforms.time = t;
        self.uniforms.dust_size = dust_point_size(input.scroll.velocity);
        self.uniforms.environment_rotation = environment_rotation(t, self.pointer.current);

        // Camera trails last frame's smoothed pointer.
        self.camera.camera.aspect = input.aspect.max(1e-3);
        self.camera
            .update(t, self.pointer.current, camera_dolly_z(input.scroll.hero_progress));

        self.pointer.set_target(input.pointer_target);
        let pointer = self.pointer.step();

        self.spotlight = Spotlight::follow(pointer);
        self.god_ray = GodRayPose::aim(&self.spotlight);
        self.uniforms.light_position = self.spotlight.position;
        self.uniforms.light_target = self.spotlight.target;

        self.group.step(pointer);
        self.group.scale = self.intro.scale(t);
        self.scroll_spin = group_scroll_spin(input.scroll.hero_progress);
        self.group_matrix = self.group.matrix(self.scroll_spin);

        report.dust_wrapped = self.dust.step(
            &DustInput {
                time: t,
                scroll_velocity: input.scroll.velocity,
                pointer_world: pointer_world(pointer),
            },
            &mut self.rng,
        );

        let pointer_ray = self.camera.camera.ray_through_ndc(input.pointer_ndc);
        report.trail_spawned = self
            .trail
            .step(pointer_ray.at(TRAIL_ANCHOR_DEPTH), &mut self.rng);

        let group_matrix = self.group_matrix;
        let group_scale = self.group.scale;
        let ornaments = &self.ornaments;
        report.hit_test_ran = self.hits.refresh_if_due(frame, || match ornaments {
            Some(table) => cast(&pointer_ray, table.hit_spheres(&group_matrix, group_scale)),
            None => Default::default(),
        });

        if let Some(table) = self.ornaments.as_mut() {
            animate_ornaments(table, &self.hits, t, &mut self.rng, chime, &mut report);
        }

        self.frame += 1;
        report
    }
}

fn animate_ornaments(
    table: &mut OrnamentTable,
    hits: &HitTestCache,
    time: f32,
    rng: &mut StdRng,
    chime: &mut dyn ChimeSink,
    report: &mut FrameReport,
) {
    let hero = table.hero();
    if let Some(o) = hero.and_then(|id| table.get_mut(id)) {
        o.animate_hero(time);
    }

    let ids: SmallVec<[OrnamentId; 8]> = table.ids().iter().copied().collect();
    for id in ids {
        let Some(o) = table.get_mut(id) else {
            continue;
        };
        let hovered = hits.contains(id);
        match hover_edge(o.was_hovered, hovered) {
            HoverEdge::Entered => {
                o.was_hovered = true;
                report.hover_entered.push(id);
                report.chime_attempts += 1;
                if let Err(err) = chime.play(chime_rate(rng)) {
                    log::debug!("[hover] chime not played: {err}");
                }
            }
            HoverEdge::Left => o.was_hovered = false,
            HoverEdge::Held | HoverEdge::Idle => {}
        }

        o.ease_hover_scale(hovered);
        if Some(id) != hero {
            o.animate(time, hovered);
        }
    }
}
