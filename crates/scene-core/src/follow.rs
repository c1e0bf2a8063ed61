//! Smoothed followers: pointer, spotlight, god-ray cone, ornament group and
//! the DOM cursor follower.

use crate::constants::*;
use crate::timeline::power2_out;
use glam::{EulerRot, Mat3, Mat4, Quat, Vec2, Vec3};

/// One step of exponential smoothing with a fixed per-frame factor.
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Frame-rate independent smoothing with time constant `tau_sec`.
#[inline]
pub fn approach_exp(current: f32, target: f32, dt_sec: f32, tau_sec: f32) -> f32 {
    let alpha = 1.0 - (-dt_sec / tau_sec.max(1e-6)).exp();
    current + (target - current) * alpha
}

/// Low-pass filtered pointer. Event handlers only move `target`; `step` is
/// called once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerFollow {
    pub target: Vec2,
    pub current: Vec2,
}

impl PointerFollow {
    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    #[inline]
    pub fn step(&mut self) -> Vec2 {
        self.current.x = approach(self.current.x, self.target.x, POINTER_SMOOTHING);
        self.current.y = approach(self.current.y, self.target.y, POINTER_SMOOTHING);
        self.current
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spotlight {
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for Spotlight {
    fn default() -> Self {
        Self::follow(Vec2::ZERO)
    }
}

impl Spotlight {
    /// Light placement for a smoothed pointer (x right, y down).
    pub fn follow(pointer: Vec2) -> Self {
        Self {
            position: Vec3::new(
                SPOT_BASE[0] + pointer.x * SPOT_POINTER_X,
                SPOT_BASE[1] - pointer.y * SPOT_POINTER_Y,
                SPOT_BASE[2],
            ),
            target: Vec3::new(
                pointer.x * SPOT_TARGET_POINTER,
                -pointer.y * SPOT_TARGET_POINTER,
                0.0,
            ),
        }
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }
}

/// Rotation taking local +Z onto `forward`, keeping local +Y close to `up`.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let z = forward.normalize_or_zero();
    if z == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let mut x = up.cross(z);
    if x.length_squared() < 1e-8 {
        x = Vec3::Z.cross(z);
    }
    let x = x.normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}

/// Pose of the god-ray cone that hangs off the spotlight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GodRayPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl GodRayPose {
    /// The cone's axis is its local +Y, the look-at aims local +Z, hence the
    /// extra quarter turn about X.
    pub fn aim(spot: &Spotlight) -> Self {
        let look = look_rotation(spot.target - spot.position, Vec3::Y);
        Self {
            position: spot.position,
            rotation: look * Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
        }
    }

    #[inline]
    pub fn axis(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

/// Rotation/scale of the group that holds every ornament.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupMotion {
    /// Euler XYZ, radians.
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for GroupMotion {
    fn default() -> Self {
        Self {
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl GroupMotion {
    pub fn step(&mut self, pointer: Vec2) {
        self.rotation.y += GROUP_AUTO_SPIN;
        self.rotation.x += (-pointer.y * GROUP_TILT - self.rotation.x) * GROUP_TILT_SMOOTHING;
        self.rotation.y +=
            (pointer.x * GROUP_TILT - self.rotation.y * GROUP_YAW_RELAX) * GROUP_TILT_SMOOTHING;
    }

    /// World matrix; `extra_yaw` is the scroll-scrubbed spin.
    pub fn matrix(&self, extra_yaw: f32) -> Mat4 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y + extra_yaw,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rot, Vec3::ZERO)
    }
}

/// Euler rotation applied to the environment lighting / backdrop.
#[inline]
pub fn environment_rotation(time: f32, pointer: Vec2) -> Vec3 {
    Vec3::new(
        (time * 0.2).sin() * 0.1 - pointer.y * 0.8,
        time * 0.05 + pointer.x * 1.5,
        (time * 0.15).cos() * 0.05,
    )
}

/// Eased follower for the DOM cursor ring, in CSS pixels. Each new pointer
/// position restarts a power2-out tween from wherever the ring currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorFollower {
    pub position: Vec2,
    from: Vec2,
    target: Vec2,
    started_sec: f32,
    initialized: bool,
}

impl CursorFollower {
    pub fn step(&mut self, target: Vec2, now_sec: f32) -> Vec2 {
        if !self.initialized {
            self.position = target;
            self.from = target;
            self.target = target;
            self.started_sec = now_sec;
            self.initialized = true;
            return self.position;
        }
        if target != self.target {
            self.from = self.position;
            self.target = target;
            self.started_sec = now_sec;
        }
        let p = power2_out((now_sec - self.started_sec) / CURSOR_FOLLOW_SEC);
        self.position = self.from + (self.target - self.from) * p;
        self.position
    }
}
