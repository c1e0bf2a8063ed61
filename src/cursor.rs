use crate::constants::{
    CURSOR_FOLLOWER_SELECTOR, CURSOR_HOVER_CLASS, CURSOR_SELECTOR, CURSOR_TARGETS_SELECTOR,
};
use crate::dom;
use glam::Vec2;
use scene_core::follow::CursorFollower;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The dot that sits on the pointer plus the ring that eases after it.
pub struct CustomCursor {
    dot: web::HtmlElement,
    ring: web::HtmlElement,
    follower: CursorFollower,
}

impl CustomCursor {
    /// `None` when the page has no cursor elements.
    pub fn wire(document: &web::Document) -> Option<Self> {
        let dot = dom::query(document, CURSOR_SELECTOR)?;
        let ring = dom::query(document, CURSOR_FOLLOWER_SELECTOR)?;
        if let Some(body) = document.body() {
            wire_hover_targets(document, &body);
        }
        Some(Self {
            dot,
            ring,
            follower: CursorFollower::default(),
        })
    }

    pub fn update(&mut self, client: Vec2, now_sec: f32) {
        place(&self.dot, client);
        let eased = self.follower.step(client, now_sec);
        place(&self.ring, eased);
    }
}

fn place(el: &web::HtmlElement, p: Vec2) {
    dom::set_style(
        el,
        "transform",
        &format!("translate3d({:.1}px, {:.1}px, 0)", p.x, p.y),
    );
}

fn wire_hover_targets(document: &web::Document, body: &web::HtmlElement) {
    for el in dom::query_all_in_document(document, CURSOR_TARGETS_SELECTOR) {
        for (event, on) in [("mouseenter", true), ("mouseleave", false)] {
            let body = body.clone();
            let closure = Closure::wrap(Box::new(move || {
                dom::toggle_class(&body, CURSOR_HOVER_CLASS, on);
            }) as Box<dyn FnMut()>);
            let _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}
