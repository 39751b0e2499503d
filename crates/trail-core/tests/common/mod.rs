// Recording draw surface shared by the host-side tests.

#![allow(dead_code)]

use trail_core::{DrawSurface, LineCap, LineJoin, Rgba, SurfaceSize};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(SurfaceSize),
    BeginPath,
    MoveTo(f32, f32),
    QuadraticCurveTo(f32, f32, f32, f32),
    Arc(f32, f32, f32, f32, f32),
    LineWidth(f32),
    LineCap(LineCap),
    LineJoin(LineJoin),
    StrokeColor(Rgba),
    FillColor(Rgba),
    Stroke,
    Fill,
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn strokes(&self) -> usize {
        self.count(|c| matches!(c, DrawCall::Stroke))
    }

    pub fn fills(&self) -> usize {
        self.count(|c| matches!(c, DrawCall::Fill))
    }

    pub fn stroke_colors(&self) -> Vec<Rgba> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::StrokeColor(rgba) => Some(*rgba),
                _ => None,
            })
            .collect()
    }

    pub fn fill_colors(&self) -> Vec<Rgba> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillColor(rgba) => Some(*rgba),
                _ => None,
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, size: SurfaceSize) {
        self.calls.push(DrawCall::Clear(size));
    }
    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }
    fn move_to(&mut self, x: f32, y: f32) {
        self.calls.push(DrawCall::MoveTo(x, y));
    }
    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) {
        self.calls.push(DrawCall::QuadraticCurveTo(cpx, cpy, x, y));
    }
    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) {
        self.calls
            .push(DrawCall::Arc(x, y, radius, start_angle, end_angle));
    }
    fn set_line_width(&mut self, width: f32) {
        self.calls.push(DrawCall::LineWidth(width));
    }
    fn set_line_cap(&mut self, cap: LineCap) {
        self.calls.push(DrawCall::LineCap(cap));
    }
    fn set_line_join(&mut self, join: LineJoin) {
        self.calls.push(DrawCall::LineJoin(join));
    }
    fn set_stroke_color(&mut self, color: Rgba) {
        self.calls.push(DrawCall::StrokeColor(color));
    }
    fn set_fill_color(&mut self, color: Rgba) {
        self.calls.push(DrawCall::FillColor(color));
    }
    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }
    fn fill(&mut self) {
        self.calls.push(DrawCall::Fill);
    }
}
