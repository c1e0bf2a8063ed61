// Host-side tests for pointer input and the smoothed follow rigs.

use glam::{Vec2, Vec3};
use scene_core::camera::{camera_noise, CameraRig};
use scene_core::constants::*;
use scene_core::follow::{
    approach, approach_exp, environment_rotation, CursorFollower, GodRayPose, GroupMotion,
    PointerFollow, Spotlight,
};
use scene_core::input::{pointer_from_client, pointer_from_tilt};

#[test]
fn client_centre_maps_to_origin() {
    let s = pointer_from_client(400.0, 300.0, 800.0, 600.0);
    assert_eq!(s.offset, Vec2::ZERO);
    assert_eq!(s.ndc, Vec2::ZERO);
}

#[test]
fn client_corners_follow_both_conventions() {
    let top_left = pointer_from_client(0.0, 0.0, 800.0, 600.0);
    assert_eq!(top_left.offset, Vec2::new(-1.0, -1.0));
    assert_eq!(top_left.ndc, Vec2::new(-1.0, 1.0));
    let bottom_right = pointer_from_client(800.0, 600.0, 800.0, 600.0);
    assert_eq!(bottom_right.offset, Vec2::new(1.0, 1.0));
    assert_eq!(bottom_right.ndc, Vec2::new(1.0, -1.0));
}

#[test]
fn empty_viewport_gives_neutral_pointer() {
    let s = pointer_from_client(10.0, 10.0, 0.0, 600.0);
    assert_eq!(s.offset, Vec2::ZERO);
}

#[test]
fn tilt_is_scaled_and_clamped() {
    assert_eq!(pointer_from_tilt(Some(22.5), Some(-45.0)), Vec2::new(0.5, -1.0));
    assert_eq!(pointer_from_tilt(Some(90.0), None), Vec2::new(1.0, 0.0));
    assert_eq!(pointer_from_tilt(None, None), Vec2::ZERO);
}

#[test]
fn approach_moves_a_fixed_fraction() {
    assert!((approach(0.0, 10.0, 0.05) - 0.5).abs() < 1e-6);
    assert_eq!(approach(3.0, 3.0, 0.5), 3.0);
}

#[test]
fn approach_exp_is_frame_rate_independent() {
    let one_step = approach_exp(0.0, 1.0, 0.1, 0.5);
    let mut two_steps = approach_exp(0.0, 1.0, 0.05, 0.5);
    two_steps = approach_exp(two_steps, 1.0, 0.05, 0.5);
    assert!((one_step - two_steps).abs() < 1e-5);
}

#[test]
fn pointer_follow_converges() {
    let mut f = PointerFollow::default();
    f.set_target(Vec2::new(1.0, -1.0));
    for _ in 0..300 {
        f.step();
    }
    assert!(f.current.abs_diff_eq(Vec2::new(1.0, -1.0), 1e-4));
}

#[test]
fn spotlight_tracks_pointer() {
    let rest = Spotlight::default();
    assert_eq!(rest.position, Vec3::from_array(SPOT_BASE));
    assert_eq!(rest.target, Vec3::ZERO);

    let s = Spotlight::follow(Vec2::new(1.0, 1.0));
    assert_eq!(
        s.position,
        Vec3::new(
            SPOT_BASE[0] + SPOT_POINTER_X,
            SPOT_BASE[1] - SPOT_POINTER_Y,
            SPOT_BASE[2]
        )
    );
    assert_eq!(s.target, Vec3::new(SPOT_TARGET_POINTER, -SPOT_TARGET_POINTER, 0.0));
}

#[test]
fn god_ray_axis_points_from_light_to_target() {
    for pointer in [Vec2::ZERO, Vec2::new(0.7, -0.4), Vec2::new(-1.0, 1.0)] {
        let spot = Spotlight::follow(pointer);
        let ray = GodRayPose::aim(&spot);
        assert_eq!(ray.position, spot.position);
        assert!(ray.axis().abs_diff_eq(spot.forward(), 1e-4));
    }
}

#[test]
fn group_spins_and_tilts_toward_pointer() {
    let mut g = GroupMotion::default();
    g.step(Vec2::ZERO);
    // The yaw relax pulls back a hair on the first frame.
    assert!((g.rotation.y - GROUP_AUTO_SPIN).abs() < 1e-5);
    assert!(g.rotation.y < GROUP_AUTO_SPIN);
    let mut tilted = GroupMotion::default();
    for _ in 0..500 {
        tilted.step(Vec2::new(0.0, 1.0));
    }
    assert!((tilted.rotation.x + GROUP_TILT).abs() < 1e-3);
}

#[test]
fn group_matrix_applies_scroll_yaw() {
    let g = GroupMotion::default();
    let m = g.matrix(std::f32::consts::FRAC_PI_2);
    let p = m.transform_point3(Vec3::X);
    assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-5));
}

#[test]
fn camera_rig_dollies_and_breathes() {
    let mut rig = CameraRig::new(1.0);
    let start_fov = rig.camera.fovy_radians;
    rig.update(2.0, Vec2::ZERO, 12.0);
    assert_eq!(rig.camera.eye.z, 12.0);
    assert_ne!(rig.camera.fovy_radians, start_fov);
    let n = camera_noise(2.0);
    assert!(rig.camera.target.abs_diff_eq(Vec3::new(n.x * 2.0, n.y, 0.0), 1e-6));
    assert!(rig.camera.roll.abs() <= CAMERA_ROLL_AMPLITUDE);
}

#[test]
fn camera_eye_trails_pointer() {
    let mut rig = CameraRig::new(1.0);
    for _ in 0..400 {
        rig.update(0.0, Vec2::new(1.0, 1.0), CAMERA_START_Z);
    }
    let n = camera_noise(0.0);
    assert!((rig.camera.eye.x - (CAMERA_POINTER_X + n.x)).abs() < 1e-3);
    assert!((rig.camera.eye.y - (CAMERA_POINTER_Y + n.y)).abs() < 1e-3);
}

#[test]
fn environment_rotation_follows_pointer() {
    let base = environment_rotation(0.0, Vec2::ZERO);
    let moved = environment_rotation(0.0, Vec2::new(1.0, 0.0));
    assert!((moved.y - base.y - 1.5).abs() < 1e-6);
}

#[test]
fn cursor_follower_snaps_then_tweens() {
    let mut f = CursorFollower::default();
    assert_eq!(f.step(Vec2::new(100.0, 50.0), 0.0), Vec2::new(100.0, 50.0));
    let p = f.step(Vec2::new(200.0, 50.0), 1.0);
    assert_eq!(p, Vec2::new(100.0, 50.0));
    let mid = f.step(Vec2::new(200.0, 50.0), 1.1);
    assert!(mid.x > 100.0 && mid.x < 200.0);
    // Ahead of where a linear tween would be.
    assert!(mid.x > 140.0);
    assert_eq!(f.step(Vec2::new(200.0, 50.0), 1.0 + CURSOR_FOLLOW_SEC).x, 200.0);
    assert_eq!(f.step(Vec2::new(200.0, 50.0), 9.0).x, 200.0);
}

#[test]
fn cursor_follower_retargets_from_where_it_is() {
    let mut f = CursorFollower::default();
    f.step(Vec2::ZERO, 0.0);
    f.step(Vec2::new(100.0, 0.0), 0.0);
    let mid = f.step(Vec2::new(100.0, 0.0), 0.1);
    let after = f.step(Vec2::new(0.0, 100.0), 0.1);
    assert_eq!(after, mid);
    let end = f.step(Vec2::new(0.0, 100.0), 0.1 + CURSOR_FOLLOW_SEC);
    assert!(end.abs_diff_eq(Vec2::new(0.0, 100.0), 1e-4));
}
