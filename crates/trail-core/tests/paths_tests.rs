// Host-side tests for stroke storage, eviction and the fade policy.

use trail_core::{
    effective_fade_duration, point_opacity, point_progress, stroke_opacity, FadeParams, PathStore,
    Rgb, Sample,
};

const PINK: Rgb = Rgb::new(0xFF, 0x69, 0xB4);

fn sample(x: f32, y: f32, t: f64) -> Sample {
    Sample::new(x, y, t).unwrap()
}

/// A finished stroke with `n` points spaced 10px and `dt` ms apart.
fn store_with_stroke(start: f64, n: usize, dt: f64) -> PathStore {
    let mut store = PathStore::new();
    store.begin(sample(0.0, 0.0, start), PINK);
    for i in 1..n {
        store.append(sample(i as f32 * 10.0, 0.0, start + i as f64 * dt));
    }
    store.end();
    store
}

#[test]
fn single_point_stroke_evicted_after_full_lifetime() {
    let fade = FadeParams::default();
    let t = 5_000.0;
    let mut store = store_with_stroke(t, 1, 0.0);
    assert_eq!(store.evict_expired(&fade, t + fade.lifetime_ms() - 1.0), 0);
    assert_eq!(store.len(), 1);
    assert_eq!(store.evict_expired(&fade, t + fade.lifetime_ms() + 1.0), 1);
    assert!(store.is_empty());
}

#[test]
fn eviction_boundary_is_inclusive_and_uses_last_point() {
    let fade = FadeParams::default();
    let store = store_with_stroke(0.0, 4, 1000.0);
    let stroke = &store.strokes()[0];
    let last_t = 3000.0;
    assert!(!stroke.is_expired(&fade, last_t + fade.lifetime_ms() - 0.001));
    assert!(stroke.is_expired(&fade, last_t + fade.lifetime_ms()));
    // the first point alone would have expired earlier
    assert!(!stroke.is_expired(&fade, fade.lifetime_ms()));
}

#[test]
fn eviction_keeps_order_of_survivors() {
    let fade = FadeParams::default();
    let mut store = PathStore::new();
    store.begin(sample(0.0, 0.0, 0.0), PINK);
    store.begin(sample(0.0, 0.0, 8_000.0), PINK);
    store.begin(sample(0.0, 0.0, 100.0), PINK);
    store.end();
    let removed = store.evict_expired(&fade, 10_500.0);
    assert_eq!(removed, 2);
    assert_eq!(store.len(), 1);
    assert_eq!(store.strokes()[0].start_ms(), 8_000.0);
}

#[test]
fn evicting_the_active_stroke_ends_it() {
    let fade = FadeParams::default();
    let mut store = PathStore::new();
    store.begin(sample(0.0, 0.0, 0.0), PINK);
    assert!(store.active().is_some());
    store.evict_expired(&fade, fade.lifetime_ms());
    assert!(store.active().is_none());
    assert!(!store.append(sample(5.0, 5.0, 1.0)));
}

#[test]
fn stroke_opacity_is_flat_then_linear() {
    let fade = FadeParams::default();
    assert_eq!(stroke_opacity(&fade, 0.0, 0.0), 1.0);
    assert_eq!(stroke_opacity(&fade, 0.0, fade.timeout_ms), 1.0);
    let mid = stroke_opacity(&fade, 0.0, fade.timeout_ms + fade.duration_ms / 2.0);
    assert!((mid - 0.5).abs() < 1e-6);
    assert_eq!(stroke_opacity(&fade, 0.0, fade.lifetime_ms()), 0.0);
    assert_eq!(stroke_opacity(&fade, 0.0, fade.lifetime_ms() * 4.0), 0.0);
    // clock earlier than the stroke start still clamps
    assert_eq!(stroke_opacity(&fade, 1000.0, 0.0), 1.0);
}

#[test]
fn point_progress_guards_short_strokes() {
    assert_eq!(point_progress(0, 0), 1.0);
    assert_eq!(point_progress(0, 1), 1.0);
    assert_eq!(point_progress(0, 2), 0.0);
    assert_eq!(point_progress(1, 2), 1.0);
    assert_eq!(point_progress(2, 5), 0.5);
    assert_eq!(point_progress(9, 5), 1.0);
}

#[test]
fn older_end_fades_no_slower_than_newer_end() {
    let fade = FadeParams::default();
    assert!(effective_fade_duration(&fade, 0.0) < effective_fade_duration(&fade, 1.0));
    assert_eq!(effective_fade_duration(&fade, 1.0), fade.duration_ms);

    // same timestamp, different progress
    let p = sample(0.0, 0.0, 0.0);
    let now = fade.timeout_ms + 2_000.0;
    let tail = point_opacity(&fade, &p, 0.0, now);
    let head = point_opacity(&fade, &p, 1.0, now);
    assert!(tail < head, "tail {tail} should be fainter than head {head}");
}

#[test]
fn point_alpha_is_non_decreasing_along_a_stroke() {
    let fade = FadeParams::default();
    let store = store_with_stroke(0.0, 20, 100.0);
    let stroke = &store.strokes()[0];
    let mut now = 0.0;
    while now < 15_000.0 {
        let alphas: Vec<f32> = (0..stroke.len())
            .map(|i| stroke.point_alpha(i, &fade, now))
            .collect();
        for w in alphas.windows(2) {
            assert!(w[0] <= w[1], "alpha decreased along stroke at now={now}: {alphas:?}");
        }
        now += 250.0;
    }
}

#[test]
fn alpha_factors_stay_in_unit_range() {
    let fade = FadeParams::default();
    let store = store_with_stroke(0.0, 12, 333.0);
    let stroke = &store.strokes()[0];
    for step in -10..80 {
        let now = step as f64 * 200.0;
        let s = stroke.opacity(&fade, now);
        assert!((0.0..=1.0).contains(&s));
        for (i, p) in stroke.points().iter().enumerate() {
            let po = point_opacity(&fade, p, point_progress(i, stroke.len()), now);
            assert!((0.0..=1.0).contains(&po));
            let a = stroke.point_alpha(i, &fade, now);
            assert!((0.0..=1.0).contains(&a));
            assert_eq!(a, s * po);
        }
    }
    assert_eq!(stroke.point_alpha(99, &fade, 0.0), 0.0);
}

#[test]
fn fade_is_pure_in_time_and_state() {
    let fade = FadeParams::default();
    let store = store_with_stroke(0.0, 6, 500.0);
    let stroke = &store.strokes()[0];
    let now = 6_200.0;
    let a: Vec<f32> = (0..6).map(|i| stroke.point_alpha(i, &fade, now)).collect();
    let b: Vec<f32> = (0..6).map(|i| stroke.point_alpha(i, &fade, now)).collect();
    assert_eq!(a, b);
}

#[test]
fn unbounded_short_strokes_do_not_accumulate() {
    let fade = FadeParams::default();
    let mut store = PathStore::new();
    for i in 0..10_000 {
        let t = i as f64 * 5.0;
        store.begin(sample(0.0, 0.0, t), PINK);
        store.end();
        store.evict_expired(&fade, t);
    }
    let live_bound = (fade.lifetime_ms() / 5.0) as usize + 1;
    assert!(store.len() <= live_bound, "live strokes {}", store.len());
}
