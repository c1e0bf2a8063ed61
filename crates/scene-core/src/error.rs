use thiserror::Error;

/// Problems building a scene from its configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("{pool} pool must hold at least one particle")]
    EmptyPool { pool: &'static str },
    #[error("max pixel ratio must be positive, got {0}")]
    InvalidPixelRatio(f64),
    #[error("hero index {index} is out of range for {len} ornaments")]
    HeroOutOfRange { index: usize, len: usize },
}

/// Outcome of a fire-and-forget audio request.
///
/// Browsers refuse playback until the page has seen a user gesture, so these
/// are expected and the caller drops them after logging.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AudioError {
    #[error("playback blocked: {0}")]
    Blocked(String),
    #[error("audio element unavailable")]
    Unavailable,
}
