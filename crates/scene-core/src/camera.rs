//! Perspective camera, pointer rays and the "breathing" camera rig.
//!
//! Matrices follow the wgpu conventions: right-handed view space and a
//! projection mapping depth to \[0, 1\].

use crate::constants::*;
use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

/// Half-line used for pointer picking and trail anchoring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// Nearest non-negative hit distance along `ray`, if any.
#[inline]
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Rotation about the viewing axis, radians.
    pub roll: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_START_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOV_BASE_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            roll: 0.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        let forward = (self.target - self.eye).normalize_or_zero();
        let up = if forward == Vec3::ZERO {
            self.up
        } else {
            Quat::from_axis_angle(forward, -self.roll) * self.up
        };
        Mat4::look_at_rh(self.eye, self.target, up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray from the eye through a point in normalized device
    /// coordinates (x right, y up, both in \[-1, 1\]).
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            direction: (p1 - self.eye).normalize(),
        }
    }

    /// Project a world point to NDC. `None` when the point is behind the eye.
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_proj() * world.extend(1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}

/// Slow pseudo-noise drift applied to the camera and its look-at point.
#[inline]
pub fn camera_noise(time: f32) -> Vec2 {
    Vec2::new(
        (time * 0.5).sin() * 0.5 + (time * 0.2).cos() * 0.5,
        (time * 0.3).cos() * 0.5 + (time * 0.15).sin() * 0.5,
    )
}

/// Camera whose FOV breathes and whose position trails the pointer.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub camera: Camera,
}

impl CameraRig {
    pub fn new(aspect: f32) -> Self {
        Self {
            camera: Camera::new(aspect),
        }
    }

    /// `pointer` is the smoothed pointer (x right, y down); `dolly_z` comes
    /// from the scroll rig.
    pub fn update(&mut self, time: f32, pointer: Vec2, dolly_z: f32) {
        let cam = &mut self.camera;
        let noise = camera_noise(time);

        let target_fov = (CAMERA_FOV_BASE_DEG
            + (time * CAMERA_FOV_BREATH_FREQ).sin() * CAMERA_FOV_BREATH_DEG)
            .to_radians();
        cam.fovy_radians += (target_fov - cam.fovy_radians) * CAMERA_FOV_SMOOTHING;

        cam.eye.x += ((pointer.x * CAMERA_POINTER_X + noise.x) - cam.eye.x)
            * CAMERA_FOLLOW_SMOOTHING;
        cam.eye.y += ((pointer.y * CAMERA_POINTER_Y + noise.y) - cam.eye.y)
            * CAMERA_FOLLOW_SMOOTHING;
        cam.eye.z = dolly_z;

        cam.target = Vec3::new(noise.x * 2.0, noise.y, 0.0);
        cam.roll = (time * CAMERA_ROLL_FREQ).sin() * CAMERA_ROLL_AMPLITUDE;
    }
}
