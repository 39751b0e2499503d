use crate::color::Rgb;
use crate::config::BurstParams;
use crate::constants::MAX_PARTICLE_COUNT;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

const FALLBACK_BURST_COLOR: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// A single burst particle. Velocities are in surface units per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub life: f32,
    pub decay: f32,
}

impl Particle {
    /// One frame of integration: move, then gravity on vy, drag on vx, age.
    #[inline]
    pub fn step(&mut self, gravity: f32, air_resistance: f32) {
        self.pos += self.vel;
        self.vel.y += gravity;
        self.vel.x *= air_resistance;
        self.life -= self.decay;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Flat live set of particles from every burst.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    params: BurstParams,
}

impl ParticleSystem {
    pub fn new(params: BurstParams) -> Self {
        Self {
            particles: Vec::new(),
            params,
        }
    }

    #[inline]
    pub fn params(&self) -> &BurstParams {
        &self.params
    }

    /// Spawn `particle_count` particles at `origin`, evenly spaced in angle,
    /// sharing one palette color. Returns how many were spawned.
    ///
    /// Counts above [`MAX_PARTICLE_COUNT`] are clamped.
    pub fn spawn_burst<R: Rng + ?Sized>(&mut self, origin: Vec2, rng: &mut R) -> usize {
        if !origin.is_finite() {
            return 0;
        }
        let p = &self.params;
        let count = p.particle_count.min(MAX_PARTICLE_COUNT);
        let color = p
            .palette
            .choose(rng)
            .copied()
            .unwrap_or(FALLBACK_BURST_COLOR);
        self.particles.reserve(count);
        for i in 0..count {
            let angle = TAU * i as f32 / count as f32;
            let speed = p.base_speed * uniform(rng, p.speed_factor);
            self.particles.push(Particle {
                pos: origin,
                vel: Vec2::from_angle(angle) * speed,
                radius: p.radius,
                color,
                life: 1.0,
                decay: uniform(rng, p.decay),
            });
        }
        log::debug!(
            "burst at ({:.1},{:.1}) count={} color={} live={}",
            origin.x,
            origin.y,
            count,
            color,
            self.particles.len()
        );
        count
    }

    /// Integrate every particle one frame and drop the ones that died.
    pub fn advance(&mut self) {
        let (gravity, air) = (self.params.gravity, self.params.air_resistance);
        self.particles.retain_mut(|p| {
            p.step(gravity, air);
            p.is_alive()
        });
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Uniform sample from an inclusive range; degenerate ranges yield `lo`.
#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    if lo.is_finite() && hi.is_finite() && lo < hi {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new(BurstParams::default())
    }
}
