//! Device-dependent scene configuration.
//!
//! The page picks a profile once at start from the viewport width. Pool sizes
//! chosen here stay fixed for the whole session.

use crate::error::SceneError;

/// Viewports narrower than this are treated as phones/tablets.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub device: DeviceClass,
    pub dust_count: usize,
    pub trail_count: usize,
    pub bloom_strength: f32,
    pub bloom_radius: f32,
    pub bloom_threshold: f32,
    pub max_pixel_ratio: f64,
    /// Drive the pointer target from device orientation instead of the mouse.
    pub tilt_input: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::desktop()
    }
}

impl SceneConfig {
    pub fn desktop() -> Self {
        Self {
            device: DeviceClass::Desktop,
            dust_count: 3000,
            trail_count: 60,
            bloom_strength: 0.35,
            bloom_radius: 0.5,
            bloom_threshold: 0.85,
            max_pixel_ratio: 1.5,
            tilt_input: false,
        }
    }

    pub fn mobile() -> Self {
        Self {
            device: DeviceClass::Mobile,
            dust_count: 800,
            trail_count: 30,
            bloom_strength: 0.2,
            bloom_radius: 0.3,
            bloom_threshold: 0.85,
            max_pixel_ratio: 1.0,
            tilt_input: true,
        }
    }

    pub fn for_viewport_width(width_css_px: f64) -> Self {
        if width_css_px < MOBILE_BREAKPOINT_PX {
            Self::mobile()
        } else {
            Self::desktop()
        }
    }

    pub fn with_dust_count(mut self, count: usize) -> Self {
        self.dust_count = count;
        self
    }

    pub fn with_trail_count(mut self, count: usize) -> Self {
        self.trail_count = count;
        self
    }

    pub fn with_tilt_input(mut self, enabled: bool) -> Self {
        self.tilt_input = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if self.dust_count == 0 {
            return Err(SceneError::EmptyPool { pool: "dust" });
        }
        if self.trail_count == 0 {
            return Err(SceneError::EmptyPool { pool: "trail" });
        }
        if self.max_pixel_ratio.is_nan() || self.max_pixel_ratio <= 0.0 {
            return Err(SceneError::InvalidPixelRatio(self.max_pixel_ratio));
        }
        Ok(())
    }

    /// Device pixel ratio actually used for the canvas backing store.
    #[inline]
    pub fn effective_pixel_ratio(&self, device_pixel_ratio: f64) -> f64 {
        device_pixel_ratio.min(self.max_pixel_ratio).max(0.5)
    }
}
