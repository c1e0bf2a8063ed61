// Host-side tests for easing, tweens and the ambient music toggle.

use scene_core::constants::{AMBIENT_VOLUME, INTRO_DURATION_SEC};
use scene_core::sound::{AmbientState, SoundCommand, SoundToggle};
use scene_core::timeline::{elastic_out, power2_out, power4_out, IntroTween, Stagger, Tween};

#[test]
fn easings_hit_their_endpoints() {
    for ease in [power2_out as fn(f32) -> f32, power4_out] {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        assert!(ease(0.5) > 0.5);
    }
    assert_eq!(elastic_out(0.0, 1.0, 0.5), 0.0);
    assert_eq!(elastic_out(1.0, 1.0, 0.5), 1.0);
}

#[test]
fn elastic_overshoots_then_settles() {
    let samples: Vec<f32> = (1..100).map(|i| elastic_out(i as f32 / 100.0, 1.0, 0.5)).collect();
    assert!(samples.iter().any(|&v| v > 1.0));
    assert!((samples[98] - 1.0).abs() < 0.01);
}

#[test]
fn tween_interpolates_and_clamps() {
    let t = Tween::new(0.0, 10.0, 1.0, 2.0);
    assert_eq!(t.value(0.0), 0.0);
    assert_eq!(t.value(2.0), 5.0);
    assert_eq!(t.value(5.0), 10.0);
    assert!(t.is_complete(3.0));
    assert!(!t.is_complete(2.9));
    assert!(Tween::new(1.0, 2.0, 0.0, 0.0).is_complete(0.0));
}

#[test]
fn stagger_offsets_each_target() {
    let s = Stagger {
        delay_sec: 0.1,
        duration_sec: 1.0,
        stagger_sec: 0.25,
    };
    assert_eq!(s.start_sec(0), 0.1);
    assert!((s.start_sec(2) - 0.6).abs() < 1e-6);
    assert_eq!(s.local_progress(2, 0.5), 0.0);
    assert!((s.local_progress(0, 0.6) - 0.5).abs() < 1e-6);
    assert_eq!(s.local_progress(0, 3.0), 1.0);
    assert!((s.end_sec(3) - 1.6).abs() < 1e-6);
    assert_eq!(s.end_sec(0), 0.1);
}

#[test]
fn zero_length_stagger_steps() {
    let s = Stagger {
        delay_sec: 1.0,
        duration_sec: 0.0,
        stagger_sec: 0.0,
    };
    assert_eq!(s.local_progress(0, 0.99), 0.0);
    assert_eq!(s.local_progress(0, 1.0), 1.0);
}

#[test]
fn intro_is_full_size_until_started_and_starts_once() {
    let mut intro = IntroTween::default();
    assert!(!intro.has_started());
    assert_eq!(intro.scale(100.0), 1.0);
    intro.begin(2.0);
    intro.begin(5.0);
    assert_eq!(intro.scale(2.0), 0.0);
    assert_eq!(intro.scale(2.0 + INTRO_DURATION_SEC), 1.0);
}

#[test]
fn sound_fades_in_after_play_resolves() {
    let mut s = SoundToggle::default();
    assert_eq!(s.click(0.0), SoundCommand::RequestPlay);
    assert_eq!(s.state(), AmbientState::Starting);
    assert!(!s.is_active());
    // A second click while play is pending is ignored.
    assert_eq!(s.click(0.1), SoundCommand::Nothing);

    s.play_resolved(1.0);
    assert!(s.is_active());
    let halfway = s.tick(2.0);
    assert!((halfway.volume.unwrap() - AMBIENT_VOLUME / 2.0).abs() < 1e-6);
    let done = s.tick(3.0);
    assert_eq!(done.volume, Some(AMBIENT_VOLUME));
    assert_eq!(s.state(), AmbientState::On);
    assert_eq!(s.tick(4.0).volume, None);
}

#[test]
fn sound_fades_out_then_pauses() {
    let mut s = SoundToggle::default();
    s.click(0.0);
    s.play_resolved(0.0);
    s.tick(2.0);
    assert_eq!(s.click(10.0), SoundCommand::Nothing);
    assert!(matches!(s.state(), AmbientState::FadingOut(_)));
    assert!(s.is_active());
    // Clicks during the fade-out do nothing.
    assert_eq!(s.click(10.5), SoundCommand::Nothing);
    let mid = s.tick(10.5);
    assert!(!mid.pause);
    let end = s.tick(11.0);
    assert!(end.pause);
    assert_eq!(end.volume, Some(0.0));
    assert_eq!(s.state(), AmbientState::Off);
    assert!(!s.is_active());
}

#[test]
fn rejected_play_returns_to_off() {
    let mut s = SoundToggle::default();
    s.click(0.0);
    s.play_rejected();
    assert_eq!(s.state(), AmbientState::Off);
    assert_eq!(s.click(1.0), SoundCommand::RequestPlay);
}
