//! Raw pointer samples and the moving-average smoother that turns them into
//! stroke points.

use crate::config::SmoothingParams;
use crate::constants::MAX_POINTS;
use glam::Vec2;
use smallvec::SmallVec;

/// One pointer observation in surface-local coordinates.
///
/// Smoothed points share this shape: a smoothed point is the mean position and
/// mean timestamp of the samples in the smoothing window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub pos: Vec2,
    pub timestamp_ms: f64,
}

pub type SmoothedPoint = Sample;

impl Sample {
    /// Returns `None` for non-finite input so it never reaches stroke data.
    pub fn new(x: f32, y: f32, timestamp_ms: f64) -> Option<Self> {
        (x.is_finite() && y.is_finite() && timestamp_ms.is_finite()).then(|| Self {
            pos: Vec2::new(x, y),
            timestamp_ms,
        })
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        self.pos.distance(other.pos)
    }
}

/// Mean position and timestamp of `samples`; `None` when empty.
pub fn average(samples: &[Sample]) -> Option<SmoothedPoint> {
    if samples.is_empty() {
        return None;
    }
    let n = samples.len() as f64;
    let (sx, sy, st) = samples.iter().fold((0.0_f64, 0.0_f64, 0.0_f64), |acc, s| {
        (
            acc.0 + s.pos.x as f64,
            acc.1 + s.pos.y as f64,
            acc.2 + s.timestamp_ms,
        )
    });
    Some(Sample {
        pos: Vec2::new((sx / n) as f32, (sy / n) as f32),
        timestamp_ms: st / n,
    })
}

/// Sliding-window smoother for the stroke currently being drawn.
#[derive(Clone, Debug)]
pub struct Smoother {
    window: SmallVec<[Sample; MAX_POINTS]>,
    capacity: usize,
    min_distance: f32,
    active: bool,
}

impl Smoother {
    pub fn new(params: &SmoothingParams) -> Self {
        Self {
            window: SmallVec::new(),
            capacity: params.max_points.max(1),
            min_distance: params.min_distance,
            active: false,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reset the window to `first` and start accepting samples. The returned
    /// point is `first` itself: a one-element window needs no averaging.
    pub fn start(&mut self, first: Sample) -> SmoothedPoint {
        self.window.clear();
        self.window.push(first);
        self.active = true;
        first
    }

    /// Feed a raw sample. `last` is the last point already appended to the
    /// active stroke. Returns the smoothed point to append, if accepted.
    pub fn push(&mut self, sample: Sample, last: Option<&SmoothedPoint>) -> Option<SmoothedPoint> {
        if !self.active {
            return None;
        }
        if let Some(last) = last {
            if last.distance(&sample) < self.min_distance {
                return None;
            }
        }
        self.window.push(sample);
        while self.window.len() > self.capacity {
            self.window.remove(0);
        }
        average(&self.window)
    }

    /// Clear the window and stop accepting samples until the next `start`.
    pub fn stop(&mut self) {
        self.window.clear();
        self.active = false;
    }
}

impl Default for Smoother {
    fn default() -> Self {
        Self::new(&SmoothingParams::default())
    }
}
