mod pointer;
mod scroll;

pub use pointer::{wire_pointer, PointerState};
pub use scroll::{wire_canvas_resize, wire_scroll};
