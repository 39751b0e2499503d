#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use trail_core::{InstantClock, StopToken, TrailEngine};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod config;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod palette;

const CANVAS_ID: &str = "drawingCanvas";

thread_local! {
    static STOP: StopToken = StopToken::new();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("trail-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the frame loop; the last drawn frame stays on the canvas.
#[wasm_bindgen]
pub fn stop() {
    STOP.with(|s| s.stop());
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let config = config::config_from_canvas(&canvas);
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let engine = Rc::new(RefCell::new(TrailEngine::new(config, seed)?));

    let (width, height) = dom::sync_canvas_backing_size(&canvas);
    engine.borrow_mut().resize(width, height);
    log::info!("[engine] canvas={}x{} seed={}", width, height, seed);

    // Shared origin so input timestamps and frame times are comparable
    let clock = InstantClock::new();

    events::wire_input_handlers(events::InputWiring {
        document: document.clone(),
        canvas: canvas.clone(),
        engine: engine.clone(),
        clock,
    });
    palette::wire_color_picker(&document, engine.clone());
    if let Err(e) = overlay::show_reminder(&document) {
        log::warn!("reminder banner: {:?}", e);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        surface: canvas::CanvasSurface::new(ctx),
        clock,
        stop: STOP.with(|s| s.clone()),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
