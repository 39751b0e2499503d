use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use trail_core::{Rgb, TrailEngine};
use wasm_bindgen::JsCast;
use web_sys as web;

const OPTION_SELECTOR: &str = ".color-option";

/// Clicking a `.color-option` makes it the only active option and sets the
/// color of the next stroke from its `data-color`.
pub fn wire_color_picker(document: &web::Document, engine: Rc<RefCell<TrailEngine>>) {
    let Ok(nodes) = document.query_selector_all(OPTION_SELECTOR) else {
        return;
    };
    let options: Rc<Vec<web::Element>> = Rc::new(
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .collect(),
    );
    log::info!("color picker: {} options", options.len());
    for option in options.iter() {
        let clicked = option.clone();
        let siblings = options.clone();
        let engine = engine.clone();
        dom::add_click_listener(option, move || {
            let Some(raw) = clicked.get_attribute("data-color") else {
                return;
            };
            let color = match Rgb::from_hex(&raw) {
                Ok(c) => c,
                Err(e) => {
                    log::warn!("{e}");
                    return;
                }
            };
            for el in siblings.iter() {
                _ = el.class_list().remove_1("active");
            }
            _ = clicked.class_list().add_1("active");
            engine.borrow_mut().set_color(color);
        });
    }
}
