// Shaders bundled as string constants
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");
pub static BACKDROP_WGSL: &str = include_str!("../shaders/backdrop.wgsl");
pub static SPRITES_WGSL: &str = include_str!("../shaders/sprites.wgsl");
