use crate::color::Rgb;
use crate::config::TrailConfig;
use crate::error::Result;
use crate::particles::ParticleSystem;
use crate::paths::PathStore;
use crate::render;
use crate::sampler::{Sample, Smoother};
use crate::surface::{DrawSurface, SurfaceSize};
use glam::Vec2;
use rand::prelude::*;

/// Host input, in surface-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Press { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Release,
    Exit,
    Burst { x: f32, y: f32 },
    SetColor(Rgb),
    Resize { width: f32, height: f32 },
}

/// One drawing session: the smoother, the stroke store and the particle set,
/// advanced and drawn once per frame.
pub struct TrailEngine {
    config: TrailConfig,
    smoother: Smoother,
    paths: PathStore,
    particles: ParticleSystem,
    color: Rgb,
    size: SurfaceSize,
    rng: StdRng,
    frames: u64,
}

impl TrailEngine {
    pub fn new(config: TrailConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    pub fn with_defaults(seed: u64) -> Self {
        Self::build(TrailConfig::default(), seed)
    }

    fn build(config: TrailConfig, seed: u64) -> Self {
        Self {
            smoother: Smoother::new(&config.smoothing),
            paths: PathStore::new(),
            particles: ParticleSystem::new(config.burst.clone()),
            color: config.stroke.default_color,
            size: SurfaceSize::default(),
            rng: StdRng::seed_from_u64(seed),
            frames: 0,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    #[inline]
    pub fn paths(&self) -> &PathStore {
        &self.paths
    }

    #[inline]
    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    #[inline]
    pub fn smoother(&self) -> &Smoother {
        &self.smoother
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_drawing(&self) -> bool {
        self.smoother.is_active()
    }

    pub fn handle(&mut self, event: InputEvent, now_ms: f64) {
        match event {
            InputEvent::Press { x, y } => self.pointer_down(x, y, now_ms),
            InputEvent::Move { x, y } => {
                self.pointer_move(x, y, now_ms);
            }
            InputEvent::Release => self.pointer_up(),
            InputEvent::Exit => self.pointer_leave(),
            InputEvent::Burst { x, y } => {
                self.burst(x, y);
            }
            InputEvent::SetColor(color) => self.set_color(color),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    /// Start a new stroke at the pressed position in the current color.
    pub fn pointer_down(&mut self, x: f32, y: f32, now_ms: f64) {
        let Some(sample) = Sample::new(x, y, now_ms) else {
            log::trace!("discarding non-finite press ({x}, {y}, {now_ms})");
            return;
        };
        let first = self.smoother.start(sample);
        let id = self.paths.begin(first, self.color);
        log::trace!("stroke {:?} started at ({x:.1},{y:.1})", id);
    }

    /// Feed a pointer move; returns true when a point was appended.
    pub fn pointer_move(&mut self, x: f32, y: f32, now_ms: f64) -> bool {
        if !self.smoother.is_active() {
            return false;
        }
        let Some(sample) = Sample::new(x, y, now_ms) else {
            log::trace!("discarding non-finite move ({x}, {y}, {now_ms})");
            return false;
        };
        let Some(active) = self.paths.active() else {
            // the active stroke aged out of the store while held
            self.smoother.stop();
            return false;
        };
        match self.smoother.push(sample, active.last_point()) {
            Some(point) => self.paths.append(point),
            None => false,
        }
    }

    pub fn pointer_up(&mut self) {
        self.end_stroke();
    }

    pub fn pointer_leave(&mut self) {
        self.end_stroke();
    }

    fn end_stroke(&mut self) {
        if let Some(stroke) = self.paths.active() {
            log::trace!("stroke {:?} ended with {} points", stroke.id(), stroke.len());
        }
        self.smoother.stop();
        self.paths.end();
    }

    pub fn burst(&mut self, x: f32, y: f32) -> usize {
        self.particles.spawn_burst(Vec2::new(x, y), &mut self.rng)
    }

    /// Color used by strokes begun after this call.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Re-establish surface dimensions. Stroke coordinates are absolute and
    /// stay untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !(width.is_finite() && height.is_finite()) {
            return;
        }
        self.size = SurfaceSize::new(width.max(0.0), height.max(0.0));
        log::debug!("surface resized to {}x{}", self.size.width, self.size.height);
    }

    /// One frame: clear, evict then draw strokes, advance then draw particles.
    pub fn frame<S: DrawSurface + ?Sized>(&mut self, surface: &mut S, now_ms: f64) {
        surface.clear(self.size);

        let evicted = self.paths.evict_expired(&self.config.fade, now_ms);
        if evicted > 0 {
            log::trace!("evicted {} strokes, {} live", evicted, self.paths.len());
        }
        if self.smoother.is_active() && self.paths.active().is_none() {
            self.smoother.stop();
        }
        render::draw_strokes(
            surface,
            &self.paths,
            &self.config.stroke,
            &self.config.fade,
            now_ms,
        );

        self.particles.advance();
        render::draw_particles(surface, self.particles.particles());

        self.frames += 1;
    }
}
