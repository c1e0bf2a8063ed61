use crate::dom;
use scene_core::{SceneConfig, ScrollMetrics};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn read_scroll_metrics(hero: Option<&web::HtmlElement>) -> ScrollMetrics {
    let Some(window) = web::window() else {
        return ScrollMetrics::default();
    };
    let offset = window.scroll_y().unwrap_or(0.0) as f32;
    let (_, viewport_h) = dom::viewport_size();
    let page_h = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f32)
        .unwrap_or(0.0);
    ScrollMetrics {
        offset,
        max_offset: (page_h - viewport_h).max(0.0),
        hero_height: hero.map(|h| h.offset_height() as f32).unwrap_or(0.0),
    }
}

pub fn wire_scroll(metrics: Rc<RefCell<ScrollMetrics>>, hero: Option<web::HtmlElement>) {
    *metrics.borrow_mut() = read_scroll_metrics(hero.as_ref());
    let on_scroll = {
        let metrics = metrics.clone();
        let hero = hero.clone();
        move |_: web::Event| *metrics.borrow_mut() = read_scroll_metrics(hero.as_ref())
    };
    dom::add_window_listener("scroll", on_scroll);
    // Page height changes with the viewport.
    dom::add_window_listener("resize", move |_: web::Event| {
        *metrics.borrow_mut() = read_scroll_metrics(hero.as_ref())
    });
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, config: &SceneConfig) {
    dom::sync_canvas_backing_size(canvas, config);
    let canvas = canvas.clone();
    let config = config.clone();
    dom::add_window_listener("resize", move |_: web::Event| {
        dom::sync_canvas_backing_size(&canvas, &config);
    });
}
