//! Stroke storage, lifetime and the time-based fade policy.
//!
//! Opacity is the product of two factors, each clamped to \[0, 1\]:
//!
//! - stroke level: full until `fade.timeout_ms` after the stroke started, then a
//!   linear ramp to zero over `fade.duration_ms`;
//! - point level: full until `fade.timeout_ms` after the point's own timestamp,
//!   then a linear ramp over an effective duration that shrinks towards the
//!   oldest end of the stroke, so the tail disappears first.
//!
//! All opacity functions are pure in `(stored state, now)`.

use crate::color::Rgb;
use crate::config::FadeParams;
use crate::sampler::SmoothedPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeId(u64);

#[derive(Clone, Debug)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<SmoothedPoint>,
    color: Rgb,
    start_ms: f64,
}

impl Stroke {
    fn new(id: StrokeId, first: SmoothedPoint, color: Rgb) -> Self {
        Self {
            id,
            points: vec![first],
            color,
            start_ms: first.timestamp_ms,
        }
    }

    #[inline]
    pub fn id(&self) -> StrokeId {
        self.id
    }

    #[inline]
    pub fn points(&self) -> &[SmoothedPoint] {
        &self.points
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    #[inline]
    pub fn last_point(&self) -> Option<&SmoothedPoint> {
        self.points.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True once the newest point has been fully transparent for its whole
    /// fade. An empty stroke has nothing left to show and is always expired.
    pub fn is_expired(&self, fade: &FadeParams, now_ms: f64) -> bool {
        match self.last_point() {
            Some(last) => now_ms - last.timestamp_ms >= fade.lifetime_ms(),
            None => true,
        }
    }

    pub fn opacity(&self, fade: &FadeParams, now_ms: f64) -> f32 {
        stroke_opacity(fade, self.start_ms, now_ms)
    }

    /// Final alpha of the point at `index`: stroke factor times point factor.
    /// Out-of-range indices are fully transparent.
    pub fn point_alpha(&self, index: usize, fade: &FadeParams, now_ms: f64) -> f32 {
        let Some(point) = self.points.get(index) else {
            return 0.0;
        };
        let progress = point_progress(index, self.points.len());
        self.opacity(fade, now_ms) * point_opacity(fade, point, progress, now_ms)
    }
}

/// 1 until `age_ms` passes `timeout_ms`, then linearly down to 0.
#[inline]
fn linear_fade(age_ms: f64, timeout_ms: f64, duration_ms: f64) -> f32 {
    if age_ms <= timeout_ms {
        return 1.0;
    }
    if duration_ms.is_nan() || duration_ms <= 0.0 {
        return 0.0;
    }
    (1.0 - (age_ms - timeout_ms) / duration_ms).clamp(0.0, 1.0) as f32
}

pub fn stroke_opacity(fade: &FadeParams, start_ms: f64, now_ms: f64) -> f32 {
    linear_fade(now_ms - start_ms, fade.timeout_ms, fade.duration_ms)
}

/// Fractional position of `index` within a stroke of `count` points, 0 at the
/// oldest point and 1 at the newest. A lone point counts as the newest.
#[inline]
pub fn point_progress(index: usize, count: usize) -> f64 {
    if count < 2 {
        return 1.0;
    }
    (index.min(count - 1) as f64) / ((count - 1) as f64)
}

/// Fade duration for a point at `progress`: the full duration at the newest
/// end, reduced by `tail_bias` at the oldest end.
#[inline]
pub fn effective_fade_duration(fade: &FadeParams, progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    fade.duration_ms * (1.0 - (1.0 - progress) * fade.tail_bias)
}

pub fn point_opacity(fade: &FadeParams, point: &SmoothedPoint, progress: f64, now_ms: f64) -> f32 {
    linear_fade(
        now_ms - point.timestamp_ms,
        fade.timeout_ms,
        effective_fade_duration(fade, progress),
    )
}

/// Owns every live stroke, in creation order. At most one stroke (the most
/// recently begun one) is active and receiving points.
#[derive(Clone, Debug, Default)]
pub struct PathStore {
    strokes: Vec<Stroke>,
    active: Option<StrokeId>,
    next_id: u64,
}

impl PathStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a stroke at `first`, ending any stroke still active.
    pub fn begin(&mut self, first: SmoothedPoint, color: Rgb) -> StrokeId {
        let id = StrokeId(self.next_id);
        self.next_id += 1;
        self.strokes.push(Stroke::new(id, first, color));
        self.active = Some(id);
        id
    }

    pub fn active(&self) -> Option<&Stroke> {
        let id = self.active?;
        self.strokes.last().filter(|s| s.id == id)
    }

    /// Append to the active stroke. Returns false when no stroke is active.
    pub fn append(&mut self, point: SmoothedPoint) -> bool {
        let Some(id) = self.active else {
            return false;
        };
        match self.strokes.last_mut().filter(|s| s.id == id) {
            Some(stroke) => {
                stroke.points.push(point);
                true
            }
            None => {
                self.active = None;
                false
            }
        }
    }

    pub fn end(&mut self) {
        self.active = None;
    }

    /// Drop every expired stroke; returns how many were removed.
    pub fn evict_expired(&mut self, fade: &FadeParams, now_ms: f64) -> usize {
        let before = self.strokes.len();
        self.strokes.retain(|s| !s.is_expired(fade, now_ms));
        if let Some(id) = self.active {
            if !self.strokes.iter().any(|s| s.id == id) {
                self.active = None;
            }
        }
        before - self.strokes.len()
    }

    #[inline]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
