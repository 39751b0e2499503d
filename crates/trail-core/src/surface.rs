//! The narrow 2D immediate-mode drawing interface the renderers target.
//!
//! It mirrors the subset of the HTML canvas 2D context the engine uses, so the
//! web front end maps it call-for-call while tests can record the calls.

use crate::color::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl LineCap {
    pub fn as_css(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

impl LineJoin {
    pub fn as_css(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// Surface dimensions in surface-local units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

pub trait DrawSurface {
    /// Clear the rectangle from the origin to `size`.
    fn clear(&mut self, size: SurfaceSize);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32);
    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32);
    fn set_line_width(&mut self, width: f32);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_line_join(&mut self, join: LineJoin);
    fn set_stroke_color(&mut self, color: Rgba);
    fn set_fill_color(&mut self, color: Rgba);
    fn stroke(&mut self);
    fn fill(&mut self);
}
