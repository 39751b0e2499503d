//! Curve and particle rendering passes. Both only read engine state.

use crate::color::Rgba;
use crate::config::{FadeParams, StrokeStyle};
use crate::particles::Particle;
use crate::paths::{PathStore, Stroke};
use crate::surface::{DrawSurface, LineCap, LineJoin};
use glam::Vec2;
use std::f32::consts::TAU;

/// One quadratic piece of a stroke's curve with the alpha it is drawn at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSegment {
    pub start: Vec2,
    pub control: Vec2,
    pub end: Vec2,
    pub alpha: f32,
}

/// Midpoint quadratic interpolation through a stroke's points.
///
/// Every interior point is the control point of a segment ending at the
/// midpoint to its successor; the last segment uses the second-to-last point
/// as control and ends on the last point. Each segment starts where the
/// previous one ended, whether or not that one is visible. Fewer than two
/// points yield no segments.
pub fn stroke_segments(stroke: &Stroke, fade: &FadeParams, now_ms: f64) -> Vec<CurveSegment> {
    let points = stroke.points();
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let mut segments = Vec::with_capacity(n - 1);
    let mut cursor = points[0].pos;
    for i in 1..n - 2 {
        let control = points[i].pos;
        let end = control.lerp(points[i + 1].pos, 0.5);
        segments.push(CurveSegment {
            start: cursor,
            control,
            end,
            alpha: stroke.point_alpha(i, fade, now_ms),
        });
        cursor = end;
    }
    segments.push(CurveSegment {
        start: cursor,
        control: points[n - 2].pos,
        end: points[n - 1].pos,
        alpha: stroke.point_alpha(n - 2, fade, now_ms),
    });
    segments
}

pub fn draw_stroke<S: DrawSurface + ?Sized>(
    surface: &mut S,
    stroke: &Stroke,
    style: &StrokeStyle,
    fade: &FadeParams,
    now_ms: f64,
) {
    let segments = stroke_segments(stroke, fade, now_ms);
    if segments.is_empty() {
        return;
    }
    surface.set_line_width(style.line_width);
    surface.set_line_cap(LineCap::Round);
    surface.set_line_join(LineJoin::Round);
    let color = stroke.color();
    // Neighbouring segments at the same encoded color share one path so
    // their round caps do not overlap.
    let mut run: Option<Rgba> = None;
    for seg in &segments {
        if seg.alpha <= 0.0 {
            if run.take().is_some() {
                surface.stroke();
            }
            continue;
        }
        let rgba = color.with_alpha(seg.alpha);
        if run != Some(rgba) {
            if run.is_some() {
                surface.stroke();
            }
            surface.begin_path();
            surface.move_to(seg.start.x, seg.start.y);
            surface.set_stroke_color(rgba);
            run = Some(rgba);
        }
        surface.quadratic_curve_to(seg.control.x, seg.control.y, seg.end.x, seg.end.y);
    }
    if run.is_some() {
        surface.stroke();
    }
}

pub fn draw_strokes<S: DrawSurface + ?Sized>(
    surface: &mut S,
    store: &PathStore,
    style: &StrokeStyle,
    fade: &FadeParams,
    now_ms: f64,
) {
    for stroke in store.strokes() {
        draw_stroke(surface, stroke, style, fade, now_ms);
    }
}

/// Filled discs whose alpha tracks remaining life; the radius stays fixed.
pub fn draw_particles<S: DrawSurface + ?Sized>(surface: &mut S, particles: &[Particle]) {
    for p in particles.iter().filter(|p| p.is_alive()) {
        surface.begin_path();
        surface.arc(p.pos.x, p.pos.y, p.radius, 0.0, TAU);
        surface.set_fill_color(p.color.with_alpha(p.life));
        surface.fill();
    }
}
