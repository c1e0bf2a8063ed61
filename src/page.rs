use crate::constants::*;
use crate::dom;
use scene_core::reveal::{
    crossing_progress, headline_offset_percent, is_revealed, parallax_shift_percent,
    RevealPlayhead, RevealPose, RowTimeline, CONTENT_REVEAL_START, FINALE_REVEAL_START,
    HEADLINE_STAGGER, QUOTE_DURATION_SEC,
};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hero headline word spans, staggered up once the page is enabled.
struct Headline {
    spans: Vec<web::HtmlElement>,
    started_sec: Option<f32>,
    done: bool,
}

impl Headline {
    fn update(&mut self, now_sec: f32) {
        if self.done || self.spans.is_empty() {
            return;
        }
        let started = *self.started_sec.get_or_insert(now_sec);
        let elapsed = now_sec - started;
        for (i, span) in self.spans.iter().enumerate() {
            let y = headline_offset_percent(i, elapsed);
            dom::set_style(span, "transform", &format!("translateY({y:.2}%)"));
        }
        self.done = elapsed >= HEADLINE_STAGGER.end_sec(self.spans.len());
    }
}

enum RevealKind {
    Row {
        chars: Vec<web::HtmlElement>,
        paragraph: Option<web::HtmlElement>,
        timeline: RowTimeline,
    },
    Quote(web::HtmlElement),
    Finale {
        /// Image that gets the parallax shift.
        parallax: Option<web::HtmlElement>,
    },
}

impl RevealKind {
    fn total_sec(&self) -> f32 {
        match self {
            Self::Row { timeline, .. } => timeline.total_sec(),
            Self::Quote(_) => QUOTE_DURATION_SEC,
            Self::Finale { .. } => 0.0,
        }
    }

    fn apply(&self, position_sec: f32) {
        match self {
            Self::Row {
                chars,
                paragraph,
                timeline,
            } => {
                for (i, c) in chars.iter().enumerate() {
                    apply_pose(c, &timeline.char_pose(i, position_sec));
                }
                if let Some(p) = paragraph {
                    apply_pose(p, &timeline.paragraph_pose(position_sec));
                }
            }
            Self::Quote(el) => apply_pose(el, &RevealPose::quote(position_sec)),
            Self::Finale { .. } => {}
        }
    }
}

struct RevealTarget {
    el: web::Element,
    start_fraction: f32,
    kind: RevealKind,
    revealed: bool,
    playhead: RevealPlayhead,
    /// Playhead position last written to the DOM.
    written_sec: Option<f32>,
}

impl RevealTarget {
    fn new(el: web::Element, start_fraction: f32, kind: RevealKind) -> Self {
        Self {
            el,
            start_fraction,
            kind,
            revealed: false,
            playhead: RevealPlayhead::default(),
            written_sec: None,
        }
    }
}

fn apply_pose(el: &web::HtmlElement, pose: &RevealPose) {
    dom::set_style(
        el,
        "transform",
        &format!(
            "translateY({:.2}px) rotateX({:.2}deg) scale({:.4})",
            pose.offset_px, pose.rotate_x_deg, pose.scale
        ),
    );
    dom::set_style(el, "opacity", &format!("{:.4}", pose.opacity));
    dom::set_style(el, "filter", &format!("blur({:.2}px)", pose.blur_px));
}

/// Scroll-driven page chrome: progress bar, headline intro and section
/// reveals.
pub struct PageEffects {
    progress_bar: Option<web::HtmlElement>,
    headline: Headline,
    targets: Vec<RevealTarget>,
    enabled: Rc<Cell<bool>>,
}

impl PageEffects {
    pub fn new(document: &web::Document) -> Self {
        dom::split_text_into_spans(document, SPLIT_HEADING_SELECTOR);

        let spans = HEADLINE_SELECTORS
            .iter()
            .flat_map(|sel| dom::query_all_in_document(document, sel))
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect();

        let mut targets = Vec::new();
        for el in dom::query_all_in_document(document, CONTENT_ROW_SELECTOR) {
            let chars = dom::query_all_html(&el, ROW_CHARS_SELECTOR);
            let paragraph = dom::query_all_html(&el, ROW_PARAGRAPH_SELECTOR)
                .into_iter()
                .next();
            let timeline = RowTimeline { chars: chars.len() };
            let kind = RevealKind::Row {
                chars,
                paragraph,
                timeline,
            };
            targets.push(RevealTarget::new(el, CONTENT_REVEAL_START, kind));
        }
        for el in dom::query_all_in_document(document, QUOTE_SELECTOR) {
            let Ok(html) = el.clone().dyn_into::<web::HtmlElement>() else {
                continue;
            };
            targets.push(RevealTarget::new(
                el,
                CONTENT_REVEAL_START,
                RevealKind::Quote(html),
            ));
        }
        for el in dom::query_all_in_document(document, FINALE_SELECTOR) {
            let parallax = dom::query_all_html(&el, "img").into_iter().next();
            targets.push(RevealTarget::new(
                el,
                FINALE_REVEAL_START,
                RevealKind::Finale { parallax },
            ));
        }
        log::info!("[page] {} reveal targets", targets.len());

        Self {
            progress_bar: dom::query(document, SCROLL_PROGRESS_SELECTOR),
            headline: Headline {
                spans,
                started_sec: None,
                done: false,
            },
            targets,
            enabled: Rc::new(Cell::new(false)),
        }
    }

    /// Flag flipped by the preloader once the page may start animating.
    pub fn enable_handle(&self) -> Rc<Cell<bool>> {
        self.enabled.clone()
    }

    pub fn update(&mut self, page_progress: f32, now_sec: f32, dt_sec: f32) {
        if !self.enabled.get() {
            return;
        }
        if let Some(bar) = &self.progress_bar {
            dom::set_style(bar, "width", &format!("{:.2}%", page_progress * 100.0));
        }
        self.headline.update(now_sec);

        let (_, viewport_h) = dom::viewport_size();
        for t in &mut self.targets {
            let rect = t.el.get_bounding_client_rect();
            let top = rect.top() as f32;
            let shown = is_revealed(top, viewport_h, t.start_fraction);
            if shown != t.revealed {
                t.revealed = shown;
                t.playhead.set_forward(shown);
                dom::toggle_class(&t.el, REVEALED_CLASS, shown);
            }
            let position = t.playhead.advance(dt_sec, t.kind.total_sec());
            if t.written_sec != Some(position) {
                t.written_sec = Some(position);
                t.kind.apply(position);
            }
            if let RevealKind::Finale {
                parallax: Some(img),
            } = &t.kind
            {
                let crossing = crossing_progress(top, rect.height() as f32, viewport_h);
                dom::set_style(
                    img,
                    "transform",
                    &format!("translateY({:.2}%)", parallax_shift_percent(crossing)),
                );
            }
        }
    }
}

/// Fill the loader line, slide the preloader away, then run `on_done`.
pub fn run_preloader(document: &web::Document, on_done: impl FnOnce() + 'static) {
    if let Some(line) = dom::query(document, PRELOADER_LINE_SELECTOR) {
        dom::set_style(&line, "width", "100%");
    }
    let preloader = dom::query(document, PRELOADER_SELECTOR);
    let exit = Closure::once(move || {
        if let Some(p) = &preloader {
            dom::set_style(p, "transform", "translateY(-100%)");
        }
        set_timeout(Closure::once(on_done), PRELOADER_EXIT_MS);
    });
    set_timeout(exit, PRELOADER_HOLD_MS);
}

fn set_timeout(callback: Closure<dyn FnMut()>, delay_ms: i32) {
    if let Some(w) = web::window() {
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms,
        );
    }
    callback.forget();
}
