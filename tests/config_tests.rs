// Host-side tests for device profiles.

use scene_core::config::MOBILE_BREAKPOINT_PX;
use scene_core::{DeviceClass, SceneConfig, SceneError};

#[test]
fn narrow_viewports_get_the_mobile_profile() {
    let c = SceneConfig::for_viewport_width(MOBILE_BREAKPOINT_PX - 1.0);
    assert_eq!(c.device, DeviceClass::Mobile);
    assert_eq!(c.dust_count, 800);
    assert_eq!(c.trail_count, 30);
    assert!(c.tilt_input);
    assert_eq!(c.max_pixel_ratio, 1.0);
}

#[test]
fn wide_viewports_get_the_desktop_profile() {
    let c = SceneConfig::for_viewport_width(MOBILE_BREAKPOINT_PX);
    assert_eq!(c.device, DeviceClass::Desktop);
    assert_eq!(c.dust_count, 3000);
    assert_eq!(c.trail_count, 60);
    assert!(!c.tilt_input);
    assert_eq!(c, SceneConfig::default());
}

#[test]
fn mobile_bloom_is_softer() {
    let (m, d) = (SceneConfig::mobile(), SceneConfig::desktop());
    assert!(m.bloom_strength < d.bloom_strength);
    assert!(m.bloom_radius < d.bloom_radius);
    assert_eq!(m.bloom_threshold, d.bloom_threshold);
}

#[test]
fn validate_rejects_empty_pools_and_bad_ratio() {
    assert_eq!(
        SceneConfig::desktop().with_trail_count(0).validate(),
        Err(SceneError::EmptyPool { pool: "trail" })
    );
    let mut c = SceneConfig::desktop();
    c.max_pixel_ratio = 0.0;
    assert!(matches!(c.validate(), Err(SceneError::InvalidPixelRatio(_))));
    c.max_pixel_ratio = f64::NAN;
    assert!(c.validate().is_err());
    assert!(SceneConfig::mobile().validate().is_ok());
}

#[test]
fn pixel_ratio_is_capped() {
    let d = SceneConfig::desktop();
    assert_eq!(d.effective_pixel_ratio(3.0), 1.5);
    assert_eq!(d.effective_pixel_ratio(1.0), 1.0);
    assert_eq!(SceneConfig::mobile().effective_pixel_ratio(2.0), 1.0);
}

#[test]
fn builders_override_single_fields() {
    let c = SceneConfig::desktop()
        .with_dust_count(10)
        .with_trail_count(4)
        .with_tilt_input(true);
    assert_eq!((c.dust_count, c.trail_count, c.tilt_input), (10, 4, true));
    assert_eq!(c.device, DeviceClass::Desktop);
}
