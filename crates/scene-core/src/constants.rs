/// Frame simulation tuning constants.
///
/// Rates marked "per frame" are applied once per display refresh and are not
/// scaled by the elapsed time between frames.

// Pointer follow
pub const POINTER_SMOOTHING: f32 = 0.05; // per frame
pub const TILT_FULL_SCALE_DEG: f32 = 45.0; // device tilt mapped to a full pointer deflection

// Camera
pub const CAMERA_START_Z: f32 = 18.0;
pub const CAMERA_SCROLLED_Z: f32 = 8.0; // camera z once the hero section is scrolled past
pub const CAMERA_FOV_BASE_DEG: f32 = 45.0;
pub const CAMERA_FOV_BREATH_DEG: f32 = 1.5;
pub const CAMERA_FOV_BREATH_FREQ: f32 = 0.2;
pub const CAMERA_FOV_SMOOTHING: f32 = 0.02;
pub const CAMERA_FOLLOW_SMOOTHING: f32 = 0.05;
pub const CAMERA_POINTER_X: f32 = 0.5;
pub const CAMERA_POINTER_Y: f32 = 0.3;
pub const CAMERA_ROLL_AMPLITUDE: f32 = 0.02;
pub const CAMERA_ROLL_FREQ: f32 = 0.1;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Spotlight and god-ray cone
pub const SPOT_BASE: [f32; 3] = [15.0, 25.0, 15.0];
pub const SPOT_POINTER_X: f32 = 12.0;
pub const SPOT_POINTER_Y: f32 = 8.0;
pub const SPOT_TARGET_POINTER: f32 = 8.0;

// Ornament group
pub const GROUP_AUTO_SPIN: f32 = 0.002; // rad per frame
pub const GROUP_TILT: f32 = 0.15;
pub const GROUP_TILT_SMOOTHING: f32 = 0.05;
pub const GROUP_YAW_RELAX: f32 = 0.05;

// Dust field
pub const DUST_SPAN_X: f32 = 70.0;
pub const DUST_SPAN_Y: f32 = 70.0;
pub const DUST_SPAN_Z: f32 = 50.0;
pub const DUST_FLOOR: f32 = -35.0;
pub const DUST_CEILING: f32 = 35.0;
pub const DUST_FALL_MIN: f32 = 0.005;
pub const DUST_FALL_SPAN: f32 = 0.02;
pub const DUST_SCROLL_DRIFT: f32 = 0.005; // world units per unit of scroll velocity
pub const DUST_TURBULENCE_STEP: f32 = 0.005;
pub const DUST_TURBULENCE_SCROLL_GAIN: f32 = 2.0;
pub const DUST_TURBULENCE_MAX: f32 = 4.0; // bounds the sway during fast flings
pub const DUST_TURBULENCE_HEIGHT_FREQ: f32 = 0.05;
pub const DUST_REPEL_RADIUS: f32 = 4.0;
pub const DUST_REPEL_STRENGTH: f32 = 0.5;
pub const DUST_SETTLE_RATE: f32 = 0.02; // fraction of the way back to origin per frame
pub const POINTER_WORLD_X: f32 = 25.0;
pub const POINTER_WORLD_Y: f32 = 15.0;

// Dust shader inputs
pub const DUST_POINT_SIZE: f32 = 0.18;
pub const DUST_POINT_SIZE_SCROLL_GAIN: f32 = 0.002;
pub const DUST_POINT_SIZE_SCROLL_MAX: f32 = 0.05;

// Cursor trail
pub const TRAIL_ANCHOR_DEPTH: f32 = 15.0; // distance along the pointer ray
pub const TRAIL_SPAWNS_PER_FRAME: usize = 2;
pub const TRAIL_DECAY_PER_FRAME: f32 = 0.02;
pub const TRAIL_JITTER: f32 = 0.05; // full width of the spawn jitter per axis
pub const TRAIL_DRIFT: f32 = 0.01; // full width of the per-axis velocity range
pub const TRAIL_MAX_LIFE_MIN: f32 = 0.5;
pub const TRAIL_MAX_LIFE_SPAN: f32 = 0.5;
pub const TRAIL_POINT_SIZE: f32 = 0.15;
pub const TRAIL_PARKED_X: f32 = 9999.0; // dormant slots sit far outside the view

// Hover
pub const HIT_TEST_INTERVAL: u64 = 5; // frames between ray casts
pub const HOVER_SCALE: f32 = 1.15;
pub const IDLE_SCALE: f32 = 1.0;
pub const HOVER_SCALE_LERP: f32 = 0.1;
pub const CHIME_RATE_MIN: f32 = 0.8;
pub const CHIME_RATE_MAX: f32 = 1.2;
pub const CHIME_VOLUME: f64 = 0.2;

// Per-kind idle/hover animation
pub const BELL_SWING_IDLE: (f32, f32) = (0.1, 3.0); // (amplitude, frequency)
pub const BELL_SWING_HOVER: (f32, f32) = (0.3, 15.0);
pub const BELL_SWING_SMOOTHING: f32 = 0.1;
pub const BELL_CLAPPER_RATIO: f32 = 1.5;
pub const HOVER_SPIN_MULTIPLIER: f32 = 4.0;
pub const STAR_HOVER_WOBBLE: f32 = 0.05;

// Hero ornament
pub const HERO_SPIN: f32 = 0.005;
pub const HERO_BOB_AMPLITUDE: f32 = 0.5;
pub const HERO_BOB_FREQ: f32 = 0.8;
pub const HERO_CAGE_SPIN: [f32; 3] = [0.0, -0.01, 0.005];
pub const HERO_RING_A_SPIN: [f32; 3] = [0.01, 0.0, 0.0];
pub const HERO_RING_B_SPIN: [f32; 3] = [0.0, -0.015, 0.0];

// Scroll
pub const SCROLL_VELOCITY_SMOOTHING: f32 = 0.1;
pub const HERO_SCRUB_TAU_SEC: f32 = 1.0;

// Intro
pub const INTRO_DURATION_SEC: f32 = 2.5;
pub const INTRO_ELASTIC_AMPLITUDE: f32 = 1.0;
pub const INTRO_ELASTIC_PERIOD: f32 = 0.5;

// Ambient music
pub const AMBIENT_VOLUME: f64 = 0.5;
pub const AMBIENT_FADE_IN_SEC: f32 = 2.0;
pub const AMBIENT_FADE_OUT_SEC: f32 = 1.0;

// Cursor follower
pub const CURSOR_FOLLOW_SEC: f32 = 0.5; // ring tween length after each pointer move
