// Host-side tests for the scroll rig and page reveal triggers.

use scene_core::constants::{CAMERA_SCROLLED_Z, CAMERA_START_Z};
use scene_core::reveal::{
    crossing_progress, headline_offset_percent, is_revealed, parallax_shift_percent,
    RevealPlayhead, RevealPose, RowTimeline, CONTENT_REVEAL_START, FINALE_PARALLAX_PERCENT,
    HEADLINE_START_PERCENT, HEADLINE_STAGGER, QUOTE_DURATION_SEC, ROW_PARAGRAPH_DURATION_SEC,
};
use scene_core::scroll::{camera_dolly_z, group_scroll_spin};
use scene_core::{ScrollMetrics, ScrollTracker};

fn at(offset: f32) -> ScrollMetrics {
    ScrollMetrics {
        offset,
        max_offset: 2000.0,
        hero_height: 800.0,
    }
}

#[test]
fn first_sample_has_no_velocity() {
    let mut t = ScrollTracker::default();
    let s = t.sample(at(500.0), 0.016);
    assert_eq!(s.velocity, 0.0);
    assert_eq!(s.page_progress, 0.25);
}

#[test]
fn velocity_is_a_smoothed_frame_delta() {
    let mut t = ScrollTracker::default();
    t.sample(at(0.0), 0.016);
    let s = t.sample(at(100.0), 0.016);
    assert!((s.velocity - 10.0).abs() < 1e-5);
    // Holding still decays it.
    let mut v = s.velocity;
    for _ in 0..100 {
        v = t.sample(at(100.0), 0.016).velocity;
    }
    assert!(v.abs() < 0.01);
}

#[test]
fn scrolling_up_gives_negative_velocity() {
    let mut t = ScrollTracker::default();
    t.sample(at(400.0), 0.016);
    assert!(t.sample(at(300.0), 0.016).velocity < 0.0);
}

#[test]
fn hero_progress_is_scrubbed() {
    let mut t = ScrollTracker::default();
    let first = t.sample(at(800.0), 0.1);
    assert!(first.hero_progress > 0.0 && first.hero_progress < 1.0);
    let mut last = first.hero_progress;
    for _ in 0..100 {
        last = t.sample(at(800.0), 0.1).hero_progress;
    }
    assert!((last - 1.0).abs() < 1e-3);
}

#[test]
fn degenerate_metrics_give_zero_progress() {
    let mut t = ScrollTracker::default();
    let s = t.sample(ScrollMetrics::default(), 0.016);
    assert_eq!(s.page_progress, 0.0);
    assert_eq!(s.hero_progress, 0.0);
}

#[test]
fn dolly_and_spin_follow_hero_progress() {
    assert_eq!(camera_dolly_z(0.0), CAMERA_START_Z);
    assert_eq!(camera_dolly_z(1.0), CAMERA_SCROLLED_Z);
    assert_eq!(camera_dolly_z(2.0), CAMERA_SCROLLED_Z);
    assert!((group_scroll_spin(0.5) - std::f32::consts::PI).abs() < 1e-6);
}

#[test]
fn reveal_toggles_at_the_trigger_line() {
    let vh = 1000.0;
    assert!(!is_revealed(751.0, vh, CONTENT_REVEAL_START));
    assert!(is_revealed(750.0, vh, CONTENT_REVEAL_START));
    assert!(is_revealed(-200.0, vh, CONTENT_REVEAL_START));
}

#[test]
fn parallax_spans_the_viewport_crossing() {
    let vh = 1000.0;
    assert_eq!(crossing_progress(1000.0, 400.0, vh), 0.0);
    assert_eq!(crossing_progress(-400.0, 400.0, vh), 1.0);
    assert!((crossing_progress(300.0, 400.0, vh) - 0.5).abs() < 1e-6);
    assert_eq!(parallax_shift_percent(1.0), FINALE_PARALLAX_PERCENT);
    assert_eq!(parallax_shift_percent(0.0), 0.0);
}

#[test]
fn headline_words_rise_one_after_another() {
    assert_eq!(headline_offset_percent(0, 0.0), HEADLINE_START_PERCENT);
    assert_eq!(headline_offset_percent(4, 0.5), HEADLINE_START_PERCENT);
    let first = headline_offset_percent(0, 0.4);
    let last = headline_offset_percent(4, 0.6);
    assert!(first < HEADLINE_START_PERCENT && first > 0.0);
    assert!(first < last);
    let end = HEADLINE_STAGGER.end_sec(5);
    assert!((end - 2.3).abs() < 1e-5);
    for i in 0..5 {
        assert!(headline_offset_percent(i, end).abs() < 1e-3);
    }
}

#[test]
fn row_paragraph_overlaps_the_characters() {
    let row = RowTimeline { chars: 10 };
    assert!((row.chars_end_sec() - 1.47).abs() < 1e-5);
    assert!((row.paragraph_start_sec() - 0.67).abs() < 1e-5);
    assert!((row.total_sec() - (0.67 + ROW_PARAGRAPH_DURATION_SEC)).abs() < 1e-5);

    let hidden = row.char_pose(0, 0.0);
    assert_eq!(hidden.offset_px, 100.0);
    assert_eq!(hidden.rotate_x_deg, -90.0);
    assert_eq!(hidden.opacity, 0.0);
    assert_eq!(hidden.blur_px, 10.0);
    assert_eq!(row.paragraph_pose(row.paragraph_start_sec()).opacity, 0.0);

    let done = row.total_sec();
    for i in 0..10 {
        let c = row.char_pose(i, done);
        assert!((c.opacity - 1.0).abs() < 1e-5 && c.blur_px.abs() < 1e-4);
    }
    let p = row.paragraph_pose(done);
    assert!((p.opacity - 1.0).abs() < 1e-5 && p.offset_px.abs() < 1e-3);
}

#[test]
fn heading_without_characters_still_reveals_its_paragraph() {
    let row = RowTimeline { chars: 0 };
    assert_eq!(row.paragraph_start_sec(), 0.0);
    assert_eq!(row.total_sec(), ROW_PARAGRAPH_DURATION_SEC);
}

#[test]
fn quote_scales_up_into_place() {
    let start = RevealPose::quote(0.0);
    assert_eq!((start.opacity, start.offset_px), (0.0, 50.0));
    assert!((start.scale - 0.9).abs() < 1e-6);
    assert!((RevealPose::quote(1.0).opacity - 0.875).abs() < 1e-6);
    let end = RevealPose::quote(QUOTE_DURATION_SEC);
    assert_eq!((end.opacity, end.scale, end.offset_px), (1.0, 1.0, 0.0));
}

#[test]
fn playhead_plays_forward_then_reverses() {
    let mut ph = RevealPlayhead::default();
    assert_eq!(ph.advance(1.0, 2.0), 0.0);
    ph.set_forward(true);
    assert_eq!(ph.advance(1.0, 2.0), 1.0);
    assert_eq!(ph.advance(5.0, 2.0), 2.0);
    ph.set_forward(false);
    assert_eq!(ph.advance(0.5, 2.0), 1.5);
    assert_eq!(ph.advance(10.0, 2.0), 0.0);
    assert_eq!(ph.position_sec(), 0.0);
}
