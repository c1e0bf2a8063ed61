// Host-side tests for the sprite instance builders used by the render passes.

mod instances {
    include!("../src/instances.rs");
}

use glam::Vec2;
use instances::*;
use scene_core::constants::{HOVER_SCALE, IDLE_SCALE};
use scene_core::{
    default_layout, AudioError, ChimeSink, FrameInput, SceneConfig, SceneState, DEFAULT_HERO_INDEX,
};

struct Silent;

impl ChimeSink for Silent {
    fn play(&mut self, _playback_rate: f32) -> Result<(), AudioError> {
        Ok(())
    }
}

fn populated() -> SceneState {
    let config = SceneConfig::desktop().with_dust_count(40).with_trail_count(8);
    let mut scene = SceneState::new(config, 5).unwrap();
    scene
        .populate(&default_layout(), Some(DEFAULT_HERO_INDEX))
        .unwrap();
    scene
}

fn away_from_ornaments() -> FrameInput {
    FrameInput {
        pointer_ndc: Vec2::new(0.98, -0.98),
        ..FrameInput::default()
    }
}

#[test]
fn dormant_trail_is_not_drawn() {
    let scene = populated();
    let mut out = Vec::new();
    push_particles(&scene, &mut out);
    assert_eq!(out.len(), 40);
    assert!(out.iter().all(|s| s.shape() == SHAPE_DUST));
}

#[test]
fn spawned_trail_points_follow_the_dust() {
    let mut scene = populated();
    scene.update(&away_from_ornaments(), &mut Silent);
    let mut out = Vec::new();
    push_particles(&scene, &mut out);
    assert_eq!(out.len(), 42);
    let trail: Vec<_> = out.iter().filter(|s| s.shape() == SHAPE_TRAIL).collect();
    assert_eq!(trail.len(), 2);
    assert!(trail.iter().all(|s| s.pos_size[3] > 0.0));
    assert!(trail.iter().all(|s| s.params[3] > 0.0 && s.params[3] <= 1.0));
}

#[test]
fn dust_sprites_use_half_the_point_size() {
    let mut scene = populated();
    scene.update(&away_from_ornaments(), &mut Silent);
    let mut out = Vec::new();
    push_particles(&scene, &mut out);
    let half = scene.uniforms().dust_size * 0.5;
    assert!(out
        .iter()
        .filter(|s| s.shape() == SHAPE_DUST)
        .all(|s| s.pos_size[3] == half));
}

#[test]
fn no_ornament_sprites_before_populate() {
    let scene = SceneState::new(SceneConfig::mobile(), 1).unwrap();
    let mut out = Vec::new();
    push_ornaments(&scene, &mut out);
    assert!(out.is_empty());
}

#[test]
fn hero_gets_a_halo_and_three_rings() {
    let mut scene = populated();
    scene.update(&away_from_ornaments(), &mut Silent);
    let mut out = Vec::new();
    push_ornaments(&scene, &mut out);
    assert_eq!(out.len(), 7 + 1 + 3);
    assert_eq!(out.iter().filter(|s| s.shape() == SHAPE_HALO).count(), 1);
    assert_eq!(out.iter().filter(|s| s.shape() == SHAPE_RING).count(), 3);
}

#[test]
fn ornaments_are_sorted_back_to_front() {
    let mut scene = populated();
    for i in 0..3 {
        let input = FrameInput {
            time: i as f32 * 0.1,
            ..away_from_ornaments()
        };
        scene.update(&input, &mut Silent);
    }
    let mut out = Vec::new();
    push_ornaments(&scene, &mut out);
    let view = scene.camera().view_matrix();
    let depths: Vec<f32> = out
        .iter()
        .map(|s| view.transform_point3(s.center()).z)
        .collect();
    assert!(depths.windows(2).all(|w| w[0] <= w[1]), "{depths:?}");
}

#[test]
fn halo_sits_behind_the_hero_and_rings_in_front() {
    let mut scene = populated();
    scene.update(&away_from_ornaments(), &mut Silent);
    let mut out = Vec::new();
    push_ornaments(&scene, &mut out);
    let halo = out.iter().position(|s| s.shape() == SHAPE_HALO).unwrap();
    let hero_center = out[halo].center();
    let hero = out
        .iter()
        .position(|s| s.shape() == SHAPE_BAUBLE && s.center() == hero_center)
        .unwrap();
    assert!(halo < hero);
    assert!(out
        .iter()
        .enumerate()
        .filter(|(_, s)| s.shape() == SHAPE_RING)
        .all(|(i, _)| i > hero));
}

#[test]
fn hover_glow_spans_rest_to_full_hover() {
    assert_eq!(hover_glow(IDLE_SCALE), 0.0);
    assert!((hover_glow(HOVER_SCALE) - 1.0).abs() < 1e-5);
    assert_eq!(hover_glow(0.5), 0.0);
    assert_eq!(hover_glow(2.0), 1.0);
}

#[test]
fn crystal_is_translucent_and_glossy() {
    use scene_core::ornament::Finish;
    assert!(finish_color(Finish::Crystal)[3] < 1.0);
    assert_eq!(finish_roughness(Finish::Crystal), 0.0);
    assert!(finish_roughness(Finish::BrushedGold) > finish_roughness(Finish::PolishedGold));
}
