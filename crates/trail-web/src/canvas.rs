use trail_core::{DrawSurface, LineCap, LineJoin, Rgba, SurfaceSize};
use wasm_bindgen::JsValue;
use web_sys as web;

/// [`DrawSurface`] over an HTML canvas 2D context. Drawing happens in CSS
/// pixels; the backing store may be larger by the device pixel ratio.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, size: SurfaceSize) {
        let Some(canvas) = self.ctx.canvas() else {
            return;
        };
        let (w_px, h_px) = (canvas.width() as f64, canvas.height() as f64);
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(0.0, 0.0, w_px, h_px);
        // resizing the backing store resets the transform, so reapply per frame
        let scale = if size.width > 0.0 {
            w_px / size.width as f64
        } else {
            1.0
        };
        _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x as f64, y as f64);
    }

    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) {
        self.ctx
            .quadratic_curve_to(cpx as f64, cpy as f64, x as f64, y as f64);
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) {
        // only fails for a negative radius
        _ = self.ctx.arc(
            x as f64,
            y as f64,
            radius.max(0.0) as f64,
            start_angle as f64,
            end_angle as f64,
        );
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ctx.set_line_cap(cap.as_css());
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.ctx.set_line_join(join.as_css());
    }

    #[allow(deprecated)]
    fn set_stroke_color(&mut self, color: Rgba) {
        self.ctx
            .set_stroke_style(&JsValue::from_str(&color.to_css()));
    }

    #[allow(deprecated)]
    fn set_fill_color(&mut self, color: Rgba) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }
}
