// Host-side tests for the per-frame update loop.

use glam::{Vec2, Vec3};
use scene_core::constants::*;
use scene_core::ornament::{Finish, KindState, OrnamentSpec};
use scene_core::{
    default_layout, AudioError, ChimeSink, FrameInput, OrnamentId, OrnamentKind, SceneConfig,
    SceneError, SceneState, DEFAULT_HERO_INDEX,
};

#[derive(Default)]
struct RecordingChime {
    rates: Vec<f32>,
    blocked: bool,
}

impl ChimeSink for RecordingChime {
    fn play(&mut self, playback_rate: f32) -> Result<(), AudioError> {
        self.rates.push(playback_rate);
        if self.blocked {
            Err(AudioError::Blocked("no user gesture yet".into()))
        } else {
            Ok(())
        }
    }
}

fn small_config() -> SceneConfig {
    SceneConfig::desktop().with_dust_count(50).with_trail_count(10)
}

fn lone_bell() -> SceneState {
    let mut scene = SceneState::new(small_config(), 1).unwrap();
    let bell = OrnamentSpec::new(OrnamentKind::Bell, Vec3::ZERO, 1.5, Finish::BrushedGold);
    scene.populate(&[bell], None).unwrap();
    scene
}

fn centred(time: f32) -> FrameInput {
    FrameInput {
        time,
        ..FrameInput::default()
    }
}

fn off_to_the_corner(time: f32) -> FrameInput {
    FrameInput {
        time,
        pointer_ndc: Vec2::new(0.95, 0.95),
        ..FrameInput::default()
    }
}

#[test]
fn new_scene_uses_configured_pool_sizes() {
    let scene = SceneState::new(small_config(), 3).unwrap();
    assert_eq!(scene.dust().len(), 50);
    assert_eq!(scene.trail().len(), 10);
    assert!(!scene.is_ready());
    assert_eq!(scene.frame_index(), 0);
}

#[test]
fn invalid_config_is_rejected() {
    let err = SceneState::new(SceneConfig::desktop().with_dust_count(0), 0).err();
    assert_eq!(err, Some(SceneError::EmptyPool { pool: "dust" }));
}

#[test]
fn populate_rejects_out_of_range_hero() {
    let mut scene = SceneState::new(small_config(), 0).unwrap();
    let err = scene.populate(&default_layout(), Some(99)).unwrap_err();
    assert_eq!(err, SceneError::HeroOutOfRange { index: 99, len: 7 });
    assert!(!scene.is_ready());
}

#[test]
fn populate_runs_once() {
    let mut scene = SceneState::new(small_config(), 0).unwrap();
    scene
        .populate(&default_layout(), Some(DEFAULT_HERO_INDEX))
        .unwrap();
    scene.populate(&default_layout()[..2], None).unwrap();
    let table = scene.ornaments().unwrap();
    assert_eq!(table.len(), 7);
    assert_eq!(table.hero(), Some(OrnamentId(0)));
}

#[test]
fn update_before_populate_animates_particles_only() {
    let mut scene = SceneState::new(small_config(), 0).unwrap();
    let mut chime = RecordingChime::default();
    let report = scene.update(&centred(0.0), &mut chime);
    assert!(report.hit_test_ran);
    assert_eq!(report.trail_spawned, 2);
    assert!(report.hover_entered.is_empty());
    assert!(chime.rates.is_empty());
    assert_eq!(scene.frame_index(), 1);
}

#[test]
fn hit_test_runs_on_every_fifth_frame() {
    let mut scene = lone_bell();
    let mut chime = RecordingChime::default();
    let ran: Vec<u64> = (0..12)
        .map(|i| scene.update(&centred(i as f32 / 60.0), &mut chime))
        .filter(|r| r.hit_test_ran)
        .map(|r| r.frame)
        .collect();
    assert_eq!(ran, vec![0, 5, 10]);
    assert_eq!(scene.hit_cache().refresh_count(), 3);
}

#[test]
fn hovering_a_bell_chimes_once_and_swings_it() {
    let mut scene = lone_bell();
    let mut chime = RecordingChime::default();
    let t = 0.1;
    let id = OrnamentId(0);

    let first = scene.update(&centred(t), &mut chime);
    assert_eq!(first.hover_entered.as_slice(), &[id]);
    for _ in 1..26 {
        let r = scene.update(&centred(t), &mut chime);
        assert!(r.hover_entered.is_empty());
    }
    assert_eq!(chime.rates.len(), 1);
    assert!((CHIME_RATE_MIN..=CHIME_RATE_MAX).contains(&chime.rates[0]));

    let bell = scene.ornaments().unwrap().get(id).unwrap();
    assert!(bell.was_hovered);
    assert!(bell.hover_factor > 1.12 && bell.hover_factor < HOVER_SCALE);
    let (amp, freq) = BELL_SWING_HOVER;
    let swing = (t * freq).sin() * amp;
    match bell.state {
        KindState::Bell { clapper_z } => {
            assert!((clapper_z - swing * BELL_CLAPPER_RATIO).abs() < 1e-6)
        }
        _ => panic!("expected a bell"),
    }
    // Swing eases toward the hover target, never overshooting it.
    let z = bell.transform.rotation.z;
    assert!(z > 0.9 * swing && z <= swing + 1e-6, "z = {z}, swing = {swing}");
}

#[test]
fn leaving_and_returning_chimes_again() {
    let mut scene = lone_bell();
    let mut chime = RecordingChime::default();
    for _ in 0..5 {
        scene.update(&centred(0.1), &mut chime);
    }
    for _ in 0..10 {
        scene.update(&off_to_the_corner(0.1), &mut chime);
    }
    let bell = scene.ornaments().unwrap().get(OrnamentId(0)).unwrap();
    assert!(!bell.was_hovered);
    for _ in 0..5 {
        scene.update(&centred(0.1), &mut chime);
    }
    assert_eq!(chime.rates.len(), 2);
}

#[test]
fn blocked_chime_does_not_retry_while_hovered() {
    let mut scene = lone_bell();
    let mut chime = RecordingChime {
        blocked: true,
        ..Default::default()
    };
    let mut attempts = 0;
    for _ in 0..20 {
        attempts += scene.update(&centred(0.1), &mut chime).chime_attempts;
    }
    assert_eq!(attempts, 1);
    assert!(scene.ornaments().unwrap().get(OrnamentId(0)).unwrap().was_hovered);
}

#[test]
fn hover_scale_relaxes_after_leaving() {
    let mut scene = lone_bell();
    let mut chime = RecordingChime::default();
    for _ in 0..30 {
        scene.update(&centred(0.1), &mut chime);
    }
    for _ in 0..200 {
        scene.update(&off_to_the_corner(0.1), &mut chime);
    }
    let bell = scene.ornaments().unwrap().get(OrnamentId(0)).unwrap();
    assert!((bell.hover_factor - IDLE_SCALE).abs() < 1e-3);
}

#[test]
fn dust_below_the_floor_wraps_during_update() {
    let mut scene = lone_bell();
    {
        let p = &mut scene.dust_mut().particles_mut()[0];
        p.position = Vec3::new(0.0, -34.999, 0.0);
        p.origin = p.position;
        p.fall_speed = 0.02;
    }
    let report = scene.update(&centred(0.0), &mut RecordingChime::default());
    assert!(report.dust_wrapped >= 1);
    let p = scene.dust().particles()[0];
    assert_eq!(p.position.y, DUST_CEILING);
    assert_eq!(scene.dust().len(), 50);
}

#[test]
fn hero_spins_and_bobs() {
    let mut scene = SceneState::new(small_config(), 9).unwrap();
    scene
        .populate(&default_layout(), Some(DEFAULT_HERO_INDEX))
        .unwrap();
    let mut chime = RecordingChime::default();
    let t = 1.0;
    for _ in 0..10 {
        scene.update(&off_to_the_corner(t), &mut chime);
    }
    let hero = scene.ornaments().unwrap().get(OrnamentId(0)).unwrap();
    assert!((hero.transform.rotation.y - 10.0 * HERO_SPIN).abs() < 1e-5);
    let expected_y = hero.initial_y + (t * HERO_BOB_FREQ).sin() * HERO_BOB_AMPLITUDE;
    assert!((hero.transform.position.y - expected_y).abs() < 1e-5);
    match &hero.state {
        KindState::Bauble { rings } => {
            assert!((rings[0].z - 10.0 * HERO_CAGE_SPIN[2]).abs() < 1e-5);
        }
        _ => panic!("hero should be a bauble"),
    }
}

#[test]
fn intro_scales_group_from_zero() {
    let mut scene = lone_bell();
    let mut chime = RecordingChime::default();
    scene.update(&centred(0.0), &mut chime);
    assert_eq!(scene.group().scale, 1.0);

    scene.begin_intro(1.0);
    scene.update(&off_to_the_corner(1.0), &mut chime);
    assert_eq!(scene.group().scale, 0.0);
    scene.update(&off_to_the_corner(1.0 + INTRO_DURATION_SEC), &mut chime);
    assert_eq!(scene.group().scale, 1.0);
}

#[test]
fn pointer_target_is_smoothed_and_moves_the_light() {
    let mut scene = SceneState::new(small_config(), 0).unwrap();
    let input = FrameInput {
        pointer_target: Vec2::new(1.0, 0.0),
        ..FrameInput::default()
    };
    scene.update(&input, &mut RecordingChime::default());
    assert!((scene.pointer().current.x - POINTER_SMOOTHING).abs() < 1e-6);
    let light = scene.spotlight().position;
    assert!((light.x - (SPOT_BASE[0] + POINTER_SMOOTHING * SPOT_POINTER_X)).abs() < 1e-5);
    assert_eq!(scene.uniforms().light_position, light);
}

#[test]
fn scrolling_dolly_moves_camera_in() {
    let mut scene = SceneState::new(small_config(), 0).unwrap();
    let mut input = FrameInput::default();
    input.scroll.hero_progress = 1.0;
    scene.update(&input, &mut RecordingChime::default());
    assert!((scene.camera().eye.z - CAMERA_SCROLLED_Z).abs() < 1e-6);
}

#[test]
fn dust_point_size_grows_with_scroll_speed() {
    let mut scene = SceneState::new(small_config(), 0).unwrap();
    let mut chime = RecordingChime::default();
    scene.update(&FrameInput::default(), &mut chime);
    assert!((scene.uniforms().dust_size - DUST_POINT_SIZE).abs() < 1e-6);
    let mut fast = FrameInput::default();
    fast.scroll.velocity = 500.0;
    scene.update(&fast, &mut chime);
    assert!(
        (scene.uniforms().dust_size - (DUST_POINT_SIZE + DUST_POINT_SIZE_SCROLL_MAX)).abs() < 1e-6
    );
}
