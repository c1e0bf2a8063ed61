use crate::constants::TILT_FULL_SCALE_DEG;
use glam::Vec2;

/// Pointer position in the two conventions the frame loop needs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    /// Offset from the viewport centre, x right / y down, in \[-1, 1\].
    /// Feeds the smoothed follow (camera, lights, dust repulsion).
    pub offset: Vec2,
    /// Normalized device coordinates, x right / y up. Feeds ray casts.
    pub ndc: Vec2,
}

#[inline]
pub fn pointer_from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> PointerSample {
    if !(width > 0.0 && height > 0.0) {
        return PointerSample::default();
    }
    let u = client_x / width;
    let v = client_y / height;
    PointerSample {
        offset: Vec2::new((u - 0.5) * 2.0, (v - 0.5) * 2.0),
        ndc: Vec2::new(u * 2.0 - 1.0, -v * 2.0 + 1.0),
    }
}

/// Map device orientation (degrees) to a pointer offset. Missing axes read
/// as level.
#[inline]
pub fn pointer_from_tilt(gamma_deg: Option<f64>, beta_deg: Option<f64>) -> Vec2 {
    let x = gamma_deg.unwrap_or(0.0) as f32 / TILT_FULL_SCALE_DEG;
    let y = beta_deg.unwrap_or(0.0) as f32 / TILT_FULL_SCALE_DEG;
    Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}
