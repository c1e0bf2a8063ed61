use crate::audio::AmbientMusic;
use crate::cursor::CustomCursor;
use crate::events::PointerState;
use crate::instances::{self, SpriteInstance};
use crate::page::PageEffects;
use crate::render;
use instant::Instant;
use scene_core::{ChimeSink, FrameInput, SceneConfig, SceneState, ScrollMetrics, ScrollTracker};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: SceneState,
    pub chime: Box<dyn ChimeSink>,

    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub scroll_metrics: Rc<RefCell<ScrollMetrics>>,
    pub scroll: ScrollTracker,

    pub gpu: Option<render::GpuState<'a>>,
    pub music: Option<Rc<RefCell<AmbientMusic>>>,
    pub cursor: Option<CustomCursor>,
    pub page: PageEffects,
    /// Set by the preloader; the intro starts on the next frame.
    pub intro_requested: Rc<Cell<bool>>,

    pub clock: Instant,
    pub last_instant: Instant,
    pub ornament_sprites: Vec<SpriteInstance>,
    pub particle_sprites: Vec<SpriteInstance>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let time = (now - self.clock).as_secs_f32();

        if self.intro_requested.replace(false) {
            self.scene.begin_intro(time);
        }

        let pointer = *self.pointer.borrow();
        let metrics = *self.scroll_metrics.borrow();
        let scroll = self.scroll.sample(metrics, dt_sec);

        let (w, h) = (self.canvas.width(), self.canvas.height());
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
        }
        let aspect = w.max(1) as f32 / h.max(1) as f32;

        let report = self.scene.update(
            &FrameInput {
                time,
                pointer_target: pointer.target,
                pointer_ndc: pointer.ndc,
                scroll,
                aspect,
            },
            self.chime.as_mut(),
        );
        if !report.hover_entered.is_empty() {
            log::debug!(
                "[hover] frame {} entered {:?}",
                report.frame,
                report.hover_entered
            );
        }

        if let Some(music) = &self.music {
            music.borrow_mut().tick();
        }
        if let Some(cursor) = &mut self.cursor {
            if pointer.seen {
                cursor.update(pointer.client, time);
            }
        }
        self.page.update(scroll.page_progress, time, dt_sec);

        if let Some(g) = &mut self.gpu {
            self.ornament_sprites.clear();
            self.particle_sprites.clear();
            instances::push_ornaments(&self.scene, &mut self.ornament_sprites);
            instances::push_particles(&self.scene, &mut self.particle_sprites);
            if let Err(e) = g.render(&self.scene, &self.ornament_sprites, &self.particle_sprites) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

/// Sprite slots needed for a full dust field, every trail slot and the
/// ornaments.
pub fn sprite_capacity(config: &SceneConfig) -> usize {
    config.dust_count + config.trail_count + crate::constants::ORNAMENT_INSTANCE_HEADROOM
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    config: &SceneConfig,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, config, sprite_capacity(config)).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
