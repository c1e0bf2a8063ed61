pub mod camera;
pub mod config;
pub mod constants;
pub mod dust;
pub mod error;
pub mod follow;
pub mod hover;
pub mod input;
pub mod ornament;
pub mod reveal;
pub mod scene;
pub mod scroll;
pub mod sound;
pub mod timeline;
pub mod trail;

pub use camera::{Camera, CameraRig, Ray};
pub use config::{DeviceClass, SceneConfig};
pub use error::{AudioError, SceneError};
pub use hover::ChimeSink;
pub use ornament::{default_layout, OrnamentId, OrnamentKind, DEFAULT_HERO_INDEX};
pub use scene::{FrameInput, FrameReport, MaterialUniforms, SceneState};
pub use scroll::{ScrollMetrics, ScrollSample, ScrollTracker};
