//! Frame scheduling: a monotonic clock, a stop signal and the explicit run loop.
//!
//! Hosts that own their event loop (a native window, a test) call [`run`],
//! which blocks on the [`FrameSource`] once per refresh. Hosts that are driven
//! by callbacks (the browser) call [`TrailEngine::frame`] from their own
//! refresh callback and check the same [`StopToken`].

use crate::engine::{InputEvent, TrailEngine};
use crate::surface::DrawSurface;
use instant::Instant;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin; never decreases.
    fn now_ms(&self) -> f64;
}

#[derive(Clone, Copy, Debug)]
pub struct InstantClock {
    origin: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Cloneable cancellation flag shared between the loop and its owner.
#[derive(Clone, Debug, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Paces the loop at display refresh and hands over input queued since the
/// previous frame.
pub trait FrameSource {
    /// Block until the next refresh, appending pending input to `events`.
    fn next_frame(&mut self, events: &mut Vec<InputEvent>);
}

/// Drive `engine` until `stop` is signalled; returns the number of frames run.
///
/// Each iteration waits for the refresh, applies queued input in arrival order,
/// then runs one engine frame. Input is never applied mid-frame.
pub fn run<S, C, F>(
    engine: &mut TrailEngine,
    surface: &mut S,
    clock: &C,
    source: &mut F,
    stop: &StopToken,
) -> u64
where
    S: DrawSurface + ?Sized,
    C: Clock + ?Sized,
    F: FrameSource + ?Sized,
{
    let mut pending = Vec::new();
    let mut frames = 0u64;
    log::debug!("frame loop started");
    while !stop.is_stopped() {
        source.next_frame(&mut pending);
        if stop.is_stopped() {
            break;
        }
        for event in pending.drain(..) {
            engine.handle(event, clock.now_ms());
        }
        engine.frame(surface, clock.now_ms());
        frames += 1;
    }
    log::debug!("frame loop stopped after {} frames", frames);
    frames
}
