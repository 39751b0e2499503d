use std::str::FromStr;
use trail_core::TrailConfig;
use web_sys as web;

fn data_attr<T: FromStr>(el: &web::Element, name: &str) -> Option<T> {
    let raw = el.get_attribute(name)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("ignoring {name}={raw:?}: not a number");
            None
        }
    }
}

/// Defaults, overridden by `data-*` attributes on the canvas element.
pub fn config_from_canvas(canvas: &web::Element) -> TrailConfig {
    let mut config = TrailConfig::default();
    if let Some(v) = data_attr(canvas, "data-fade-timeout") {
        config.fade.timeout_ms = v;
    }
    if let Some(v) = data_attr(canvas, "data-fade-duration") {
        config.fade.duration_ms = v;
    }
    if let Some(v) = data_attr(canvas, "data-min-distance") {
        config.smoothing.min_distance = v;
    }
    if let Some(v) = data_attr(canvas, "data-particle-count") {
        config.burst.particle_count = v;
    }
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("{e}; using defaults");
            TrailConfig::default()
        }
    }
}
