use crate::dom;
use glam::Vec2;
use scene_core::input::{pointer_from_client, pointer_from_tilt};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Latest pointer readings, written by handlers and read once per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    /// CSS pixels, for the custom cursor.
    pub client: Vec2,
    /// Follow target for camera, lights and dust.
    pub target: Vec2,
    /// Ray-cast coordinates.
    pub ndc: Vec2,
    pub seen: bool,
}

pub fn wire_pointer(pointer: Rc<RefCell<PointerState>>, tilt_input: bool) {
    wire_pointermove(pointer.clone(), tilt_input);
    if tilt_input {
        wire_device_orientation(pointer);
    }
}

fn wire_pointermove(pointer: Rc<RefCell<PointerState>>, tilt_input: bool) {
    dom::add_window_listener("pointermove", move |ev: web::PointerEvent| {
        let (width, height) = dom::viewport_size();
        let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
        let sample = pointer_from_client(x, y, width, height);
        let mut p = pointer.borrow_mut();
        p.client = Vec2::new(x, y);
        p.ndc = sample.ndc;
        p.seen = true;
        // With tilt input the follow target comes from orientation instead.
        if !tilt_input {
            p.target = sample.offset;
        }
    });
}

fn wire_device_orientation(pointer: Rc<RefCell<PointerState>>) {
    dom::add_window_listener("deviceorientation", move |ev: web::DeviceOrientationEvent| {
        pointer.borrow_mut().target = pointer_from_tilt(ev.gamma(), ev.beta());
    });
    log::info!("[input] device orientation drives the pointer target");
}
