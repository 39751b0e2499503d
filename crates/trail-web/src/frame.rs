use crate::canvas::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use trail_core::{Clock, InstantClock, StopToken, TrailEngine};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<TrailEngine>>,
    pub surface: CanvasSurface,
    pub clock: InstantClock,
    pub stop: StopToken,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now_ms();
        self.engine.borrow_mut().frame(&mut self.surface, now);
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref().map(|c| c.as_ref().clone()))
    else {
        return;
    };
    if let Err(e) = w.request_animation_frame(cb.unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
}

/// Run one engine frame per animation frame until the context's stop token
/// is signalled.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut ctx = frame_ctx_tick.borrow_mut();
        if ctx.stop.is_stopped() {
            log::info!(
                "frame loop stopped after {} frames",
                ctx.engine.borrow().frames()
            );
            return;
        }
        ctx.frame();
        drop(ctx);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
