// Rendering and page wiring constants for the web front-end.

// DOM
pub const CANVAS_ID: &str = "webgl";
pub const HERO_SELECTOR: &str = ".hero";
pub const SCROLL_PROGRESS_SELECTOR: &str = ".scroll-progress";
pub const PRELOADER_SELECTOR: &str = ".preloader";
pub const PRELOADER_LINE_SELECTOR: &str = ".preloader .line";
pub const HEADLINE_SELECTORS: [&str; 5] =
    ["#t1 span", "#t2 span", "#t3 span", "#t4 span", "#t5 span"];
pub const SPLIT_HEADING_SELECTOR: &str = ".editorial-section h2";
pub const CONTENT_ROW_SELECTOR: &str = ".content-row";
pub const ROW_CHARS_SELECTOR: &str = "h2 span";
pub const ROW_PARAGRAPH_SELECTOR: &str = "p";
pub const QUOTE_SELECTOR: &str = ".quote-container";
pub const FINALE_SELECTOR: &str = ".finale-img-container";
pub const REVEALED_CLASS: &str = "is-revealed";
pub const CURSOR_SELECTOR: &str = ".custom-cursor";
pub const CURSOR_FOLLOWER_SELECTOR: &str = ".cursor-follower";
pub const CURSOR_TARGETS_SELECTOR: &str = "a, button, .finale-img-container, .sound-toggle";
pub const CURSOR_HOVER_CLASS: &str = "cursor-hover";
pub const SOUND_BUTTON_ID: &str = "sound-btn";
pub const SOUND_TEXT_SELECTOR: &str = ".sound-text";
pub const SOUND_ACTIVE_CLASS: &str = "sound-active";
pub const AMBIENT_AUDIO_ID: &str = "ambient-music";
pub const SOUND_ON_LABEL: &str = "SOUND ON";
pub const SOUND_OFF_LABEL: &str = "SOUND OFF";

// Assets
pub const CHIME_SRC: &str = "./assets/chime.mp3";

// Preloader timing
pub const PRELOADER_HOLD_MS: i32 = 1000;
pub const PRELOADER_EXIT_MS: i32 = 500;

// Renderer
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];
pub const GOD_RAY_STRENGTH: f32 = 0.4;
pub const ORNAMENT_INSTANCE_HEADROOM: usize = 64; // sprites reserved for ornaments, halos and rings
