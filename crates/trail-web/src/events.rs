use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use trail_core::{Clock, InputEvent, InstantClock, TrailEngine};
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub engine: Rc<RefCell<TrailEngine>>,
    pub clock: InstantClock,
}

impl InputWiring {
    fn dispatch(&self, event: InputEvent) {
        self.engine.borrow_mut().handle(event, self.clock.now_ms());
    }
}

/// Pointer, burst and resize listeners. Pointer events are taken from the
/// document so strokes keep following the cursor over page chrome.
pub fn wire_input_handlers(w: InputWiring) {
    wire_mouse(&w, "mousedown", |p| InputEvent::Press { x: p.x, y: p.y });
    wire_mouse(&w, "mousemove", |p| InputEvent::Move { x: p.x, y: p.y });
    wire_mouse(&w, "dblclick", |p| InputEvent::Burst { x: p.x, y: p.y });
    wire_mouse(&w, "mouseup", |_| InputEvent::Release);
    wire_mouse(&w, "mouseleave", |_| InputEvent::Exit);
    wire_resize(&w);
}

fn wire_mouse(w: &InputWiring, name: &str, to_event: fn(glam::Vec2) -> InputEvent) {
    let wiring = w.clone();
    dom::add_listener(&w.document, name, move |ev: web::MouseEvent| {
        let pos = input::pointer_canvas_css(&ev, &wiring.canvas);
        wiring.dispatch(to_event(pos));
    });
}

fn wire_resize(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let wiring = w.clone();
    dom::add_listener(&window, "resize", move |_: web::Event| {
        let (width, height) = dom::sync_canvas_backing_size(&wiring.canvas);
        wiring.dispatch(InputEvent::Resize { width, height });
    });
}
