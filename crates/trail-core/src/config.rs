use crate::color::Rgb;
use crate::constants::*;
use crate::error::{Result, TrailError};

/// Timing of the two-stage fade applied to strokes.
#[derive(Clone, Debug, PartialEq)]
pub struct FadeParams {
    pub timeout_ms: f64,
    pub duration_ms: f64,
    pub tail_bias: f64,
}

impl FadeParams {
    /// Age at which a stroke's newest point becomes fully transparent.
    #[inline]
    pub fn lifetime_ms(&self) -> f64 {
        self.timeout_ms + self.duration_ms
    }
}

impl Default for FadeParams {
    fn default() -> Self {
        Self {
            timeout_ms: FADE_TIMEOUT_MS,
            duration_ms: FADE_DURATION_MS,
            tail_bias: TAIL_FADE_BIAS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SmoothingParams {
    pub min_distance: f32,
    pub max_points: usize,
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            min_distance: MIN_DISTANCE,
            max_points: MAX_POINTS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub line_width: f32,
    pub default_color: Rgb,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            line_width: LINE_WIDTH,
            default_color: DEFAULT_STROKE_COLOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BurstParams {
    pub particle_count: usize,
    pub base_speed: f32,
    /// Multipliers applied to `base_speed`, sampled uniformly per particle.
    pub speed_factor: (f32, f32),
    pub radius: f32,
    /// Life lost per frame, sampled uniformly per particle.
    pub decay: (f32, f32),
    pub gravity: f32,
    pub air_resistance: f32,
    pub palette: Vec<Rgb>,
}

impl Default for BurstParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            base_speed: PARTICLE_BASE_SPEED,
            speed_factor: (PARTICLE_SPEED_MIN_FACTOR, PARTICLE_SPEED_MAX_FACTOR),
            radius: PARTICLE_RADIUS,
            decay: (PARTICLE_DECAY_MIN, PARTICLE_DECAY_MAX),
            gravity: PARTICLE_GRAVITY,
            air_resistance: PARTICLE_AIR_RESISTANCE,
            palette: PASTEL_COLORS.to_vec(),
        }
    }
}

/// Every tunable of the engine, defaulting to the values in `constants.rs`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrailConfig {
    pub fade: FadeParams,
    pub smoothing: SmoothingParams,
    pub stroke: StrokeStyle,
    pub burst: BurstParams,
}

impl TrailConfig {
    pub fn validate(&self) -> Result<()> {
        let fade = &self.fade;
        ensure(
            fade.timeout_ms.is_finite() && fade.timeout_ms >= 0.0,
            "fade.timeout_ms",
            "must be finite and >= 0",
        )?;
        ensure(
            fade.duration_ms.is_finite() && fade.duration_ms > 0.0,
            "fade.duration_ms",
            "must be finite and > 0",
        )?;
        ensure(
            (0.0..1.0).contains(&fade.tail_bias),
            "fade.tail_bias",
            "must be in [0, 1)",
        )?;

        let smoothing = &self.smoothing;
        ensure(
            smoothing.min_distance.is_finite() && smoothing.min_distance >= 0.0,
            "smoothing.min_distance",
            "must be finite and >= 0",
        )?;
        ensure(
            smoothing.max_points > 0,
            "smoothing.max_points",
            "must be at least 1",
        )?;

        ensure(
            self.stroke.line_width.is_finite() && self.stroke.line_width > 0.0,
            "stroke.line_width",
            "must be finite and > 0",
        )?;

        let burst = &self.burst;
        ensure(
            burst.particle_count <= MAX_PARTICLE_COUNT,
            "burst.particle_count",
            "must be at most 10000",
        )?;
        ensure(
            burst.base_speed.is_finite() && burst.base_speed >= 0.0,
            "burst.base_speed",
            "must be finite and >= 0",
        )?;
        ensure(
            valid_range(burst.speed_factor) && burst.speed_factor.0 >= 0.0,
            "burst.speed_factor",
            "must be a finite, non-negative, non-inverted range",
        )?;
        ensure(
            valid_range(burst.decay) && burst.decay.0 > 0.0,
            "burst.decay",
            "must be a finite, positive, non-inverted range",
        )?;
        ensure(
            burst.radius.is_finite() && burst.radius > 0.0,
            "burst.radius",
            "must be finite and > 0",
        )?;
        ensure(
            burst.gravity.is_finite(),
            "burst.gravity",
            "must be finite",
        )?;
        ensure(
            (0.0..=1.0).contains(&burst.air_resistance),
            "burst.air_resistance",
            "must be in [0, 1]",
        )?;
        ensure(
            !burst.palette.is_empty(),
            "burst.palette",
            "must contain at least one color",
        )?;
        Ok(())
    }
}

#[inline]
fn ensure(ok: bool, field: &'static str, reason: &'static str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(TrailError::InvalidConfig { field, reason })
    }
}

#[inline]
fn valid_range((lo, hi): (f32, f32)) -> bool {
    lo.is_finite() && hi.is_finite() && lo <= hi
}
