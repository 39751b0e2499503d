// Shared tuning constants for trail smoothing, fading and particle bursts.

use crate::color::Rgb;

// Fade policy (milliseconds)
pub const FADE_TIMEOUT_MS: f64 = 3000.0; // full opacity before fading starts
pub const FADE_DURATION_MS: f64 = 7000.0; // linear ramp from full to zero

// How much faster the oldest end of a stroke fades than its newest end.
// 0 disables the bias; 0.5 halves the effective fade duration at the tail.
pub const TAIL_FADE_BIAS: f64 = 0.5;

// Sampling
pub const MIN_DISTANCE: f32 = 2.0; // px, jitter suppression radius
pub const MAX_POINTS: usize = 5; // smoothing window capacity

// Stroke style
pub const LINE_WIDTH: f32 = 3.0;
pub const DEFAULT_STROKE_COLOR: Rgb = Rgb::new(0xFF, 0x69, 0xB4); // hot pink

// Burst
pub const PARTICLE_COUNT: usize = 100;
pub const MAX_PARTICLE_COUNT: usize = 10_000; // per burst
pub const PARTICLE_BASE_SPEED: f32 = 10.0; // px per frame
pub const PARTICLE_SPEED_MIN_FACTOR: f32 = 0.8;
pub const PARTICLE_SPEED_MAX_FACTOR: f32 = 1.4;
pub const PARTICLE_RADIUS: f32 = 3.0;
pub const PARTICLE_DECAY_MIN: f32 = 0.01; // life lost per frame
pub const PARTICLE_DECAY_MAX: f32 = 0.02;
pub const PARTICLE_GRAVITY: f32 = 0.1; // added to vy each frame
pub const PARTICLE_AIR_RESISTANCE: f32 = 0.99; // vx multiplier each frame

// Pastel burst palette, one picked per burst
pub const PASTEL_COLORS: [Rgb; 8] = [
    Rgb::new(0xFF, 0xB3, 0xBA), // pink
    Rgb::new(0xBA, 0xFF, 0xC9), // green
    Rgb::new(0xBA, 0xE1, 0xFF), // blue
    Rgb::new(0xFF, 0xFF, 0xBA), // yellow
    Rgb::new(0xFF, 0xB3, 0xF7), // purple
    Rgb::new(0xE0, 0xB3, 0xFF), // violet
    Rgb::new(0xB3, 0xFF, 0xE0), // mint
    Rgb::new(0xFF, 0xD1, 0xBA), // peach
];
