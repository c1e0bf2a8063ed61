use crate::constants::{
    AMBIENT_AUDIO_ID, SOUND_ACTIVE_CLASS, SOUND_BUTTON_ID, SOUND_OFF_LABEL, SOUND_ON_LABEL,
    SOUND_TEXT_SELECTOR,
};
use crate::dom;
use instant::Instant;
use scene_core::constants::CHIME_VOLUME;
use scene_core::sound::{SoundCommand, SoundToggle};
use scene_core::{AudioError, ChimeSink};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Hover chime backed by a single reusable audio element.
pub struct ChimePlayer {
    element: web::HtmlAudioElement,
}

impl ChimePlayer {
    pub fn new(src: &str) -> anyhow::Result<Self> {
        let element = web::HtmlAudioElement::new_with_src(src)
            .map_err(|e| anyhow::anyhow!("chime audio element: {:?}", e))?;
        element.set_volume(CHIME_VOLUME);
        Ok(Self { element })
    }
}

impl ChimeSink for ChimePlayer {
    fn play(&mut self, playback_rate: f32) -> Result<(), AudioError> {
        if !self.element.paused() {
            self.element.set_current_time(0.0);
        }
        self.element.set_playback_rate(playback_rate as f64);
        let promise = self
            .element
            .play()
            .map_err(|e| AudioError::Blocked(format!("{:?}", e)))?;
        // Autoplay policy rejects until the first user gesture.
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[audio] chime rejected: {:?}", e);
            }
        });
        Ok(())
    }
}

/// Stand-in used when no audio element could be created.
pub struct MutedChime;

impl ChimeSink for MutedChime {
    fn play(&mut self, _playback_rate: f32) -> Result<(), AudioError> {
        Err(AudioError::Unavailable)
    }
}

pub fn create_chime(src: &str) -> Box<dyn ChimeSink> {
    match ChimePlayer::new(src) {
        Ok(p) => Box::new(p),
        Err(e) => {
            log::warn!("[audio] chime disabled: {:?}", e);
            Box::new(MutedChime)
        }
    }
}

/// `#sound-btn` driving `#ambient-music` through a [`SoundToggle`].
pub struct AmbientMusic {
    element: web::HtmlAudioElement,
    button: web::Element,
    label: Option<web::HtmlElement>,
    toggle: SoundToggle,
    clock: Instant,
}

impl AmbientMusic {
    fn now(&self) -> f32 {
        self.clock.elapsed().as_secs_f32()
    }

    fn set_active(&self, on: bool) {
        dom::toggle_class(&self.button, SOUND_ACTIVE_CLASS, on);
        if let Some(label) = &self.label {
            label.set_inner_text(if on { SOUND_ON_LABEL } else { SOUND_OFF_LABEL });
        }
    }

    fn on_play_resolved(&mut self) {
        let now = self.now();
        self.toggle.play_resolved(now);
        self.element.set_volume(0.0);
        self.set_active(true);
    }

    /// Advance a running fade. Called once per frame.
    pub fn tick(&mut self) {
        let now = self.now();
        let tick = self.toggle.tick(now);
        if let Some(v) = tick.volume {
            self.element.set_volume(v.clamp(0.0, 1.0));
        }
        if tick.pause {
            let _ = self.element.pause();
            self.set_active(false);
        }
    }
}

pub fn wire_sound_toggle(document: &web::Document) -> Option<Rc<RefCell<AmbientMusic>>> {
    let element = document
        .get_element_by_id(AMBIENT_AUDIO_ID)?
        .dyn_into::<web::HtmlAudioElement>()
        .ok()?;
    let button = document.get_element_by_id(SOUND_BUTTON_ID)?;
    let label = dom::query_all(&button, SOUND_TEXT_SELECTOR)
        .into_iter()
        .next()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());

    let music = Rc::new(RefCell::new(AmbientMusic {
        element,
        button,
        label,
        toggle: SoundToggle::default(),
        clock: Instant::now(),
    }));

    let music_click = music.clone();
    dom::add_click_listener(document, SOUND_BUTTON_ID, move || {
        let command = {
            let mut m = music_click.borrow_mut();
            let now = m.now();
            m.toggle.click(now)
        };
        if command != SoundCommand::RequestPlay {
            return;
        }
        let promise = music_click.borrow().element.play();
        let music_done = music_click.clone();
        spawn_local(async move {
            let result = match promise {
                Ok(p) => JsFuture::from(p).await.map(|_| ()),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => music_done.borrow_mut().on_play_resolved(),
                Err(e) => {
                    log::error!("[audio] ambient music failed to start: {:?}", e);
                    music_done.borrow_mut().toggle.play_rejected();
                }
            }
        });
    });
    Some(music)
}
