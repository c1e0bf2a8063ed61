#![cfg(target_arch = "wasm32")]
use instant::Instant;
use scene_core::{default_layout, SceneConfig, SceneState, ScrollTracker, DEFAULT_HERO_INDEX};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod instances;
mod page;
mod render;
mod shaders;

use constants::{CANVAS_ID, CHIME_SRC, HERO_SELECTOR};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gilded-scene starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let (viewport_w, _) = dom::viewport_size();
    let config = SceneConfig::for_viewport_width(viewport_w as f64);
    events::wire_canvas_resize(&canvas, &config);

    let mut scene = SceneState::new(config.clone(), random_seed())?;

    // Shared inputs written by handlers, read once per frame.
    let pointer = Rc::new(RefCell::new(events::PointerState::default()));
    events::wire_pointer(pointer.clone(), config.tilt_input);
    let scroll_metrics = Rc::new(RefCell::new(scene_core::ScrollMetrics::default()));
    events::wire_scroll(scroll_metrics.clone(), dom::query(&document, HERO_SELECTOR));

    let gpu = frame::init_gpu(&canvas, &config).await;

    // Ornaments become visible only once the renderer is up.
    scene.populate(&default_layout(), Some(DEFAULT_HERO_INDEX))?;

    let page = page::PageEffects::new(&document);
    let intro_requested = Rc::new(Cell::new(false));
    {
        let page_enabled = page.enable_handle();
        let intro = intro_requested.clone();
        page::run_preloader(&document, move || {
            page_enabled.set(true);
            intro.set(true);
            log::info!("[page] preloader done");
        });
    }

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        chime: audio::create_chime(CHIME_SRC),
        canvas,
        pointer,
        scroll_metrics,
        scroll: ScrollTracker::default(),
        gpu,
        music: audio::wire_sound_toggle(&document),
        cursor: cursor::CustomCursor::wire(&document),
        page,
        intro_requested,
        clock: now,
        last_instant: now,
        ornament_sprites: Vec::new(),
        particle_sprites: Vec::new(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
