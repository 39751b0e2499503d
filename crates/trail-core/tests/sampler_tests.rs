// Host-side tests for the sample smoother and its wiring into the engine.

use trail_core::{average, Sample, SmoothingParams, Smoother, TrailConfig, TrailEngine};

fn sample(x: f32, y: f32, t: f64) -> Sample {
    Sample::new(x, y, t).expect("finite sample")
}

#[test]
fn press_then_far_move_is_accepted_and_near_move_rejected() {
    let mut engine = TrailEngine::with_defaults(1);
    engine.pointer_down(100.0, 100.0, 0.0);
    assert!(engine.pointer_move(103.0, 100.0, 10.0), "3px move should be accepted");

    let stroke = engine.paths().active().expect("active stroke");
    assert_eq!(stroke.len(), 2);
    // window holds (100,100) and (103,100): mean x is 101.5
    let last = *stroke.last_point().unwrap();
    assert!((last.pos.x - 101.5).abs() < 1e-5);
    assert!((last.timestamp_ms - 5.0).abs() < 1e-9);

    // 1px from the last smoothed point
    assert!(!engine.pointer_move(102.5, 100.0, 20.0));
    assert_eq!(engine.paths().active().unwrap().len(), 2);
}

#[test]
fn near_move_rejected_without_averaging() {
    let mut config = TrailConfig::default();
    config.smoothing.max_points = 1;
    let mut engine = TrailEngine::new(config, 1).unwrap();
    engine.pointer_down(100.0, 100.0, 0.0);
    assert!(engine.pointer_move(103.0, 100.0, 10.0));
    assert!(!engine.pointer_move(104.0, 100.0, 20.0));
    let points = engine.paths().active().unwrap().points().to_vec();
    assert_eq!(points.len(), 2);
    assert_eq!(points[1].pos.x, 103.0);
}

#[test]
fn first_point_is_the_press_sample_verbatim() {
    let mut engine = TrailEngine::with_defaults(1);
    engine.pointer_down(12.5, 40.0, 1234.0);
    let stroke = engine.paths().active().unwrap();
    assert_eq!(stroke.points(), &[sample(12.5, 40.0, 1234.0)]);
    assert_eq!(stroke.start_ms(), 1234.0);
    assert_eq!(engine.smoother().window_len(), 1);
}

#[test]
fn window_never_exceeds_capacity_and_output_never_exceeds_input() {
    let params = SmoothingParams::default();
    let mut smoother = Smoother::new(&params);
    let mut points = vec![smoother.start(sample(0.0, 0.0, 0.0))];
    let mut raw = 1;
    for i in 1..50 {
        raw += 1;
        let s = sample(i as f32 * 3.0, (i % 7) as f32, i as f64 * 16.0);
        if let Some(p) = smoother.push(s, points.last()) {
            points.push(p);
        }
        assert!(smoother.window_len() <= params.max_points);
        assert!(points.len() <= raw);
    }
    assert_eq!(smoother.window_len(), params.max_points);
}

#[test]
fn window_is_fifo_mean_of_most_recent_samples() {
    let mut smoother = Smoother::new(&SmoothingParams {
        min_distance: 0.0,
        max_points: 3,
    });
    smoother.start(sample(0.0, 0.0, 0.0));
    smoother.push(sample(10.0, 0.0, 10.0), None);
    smoother.push(sample(20.0, 0.0, 20.0), None);
    // window is now [10, 20, 30]
    let p = smoother.push(sample(30.0, 0.0, 30.0), None).unwrap();
    assert!((p.pos.x - 20.0).abs() < 1e-5);
    assert!((p.timestamp_ms - 20.0).abs() < 1e-9);
}

#[test]
fn two_close_samples_never_both_append() {
    let mut engine = TrailEngine::with_defaults(1);
    engine.pointer_down(50.0, 50.0, 0.0);
    // 5px from the press point; window mean lands on (52.5, 50)
    let a = engine.pointer_move(55.0, 50.0, 5.0);
    // 1px from that smoothed point
    let b = engine.pointer_move(53.5, 50.0, 6.0);
    assert!(a, "first move is far enough to append");
    assert!(!b, "second move is within min_distance of the new point");

    let stroke = engine.paths().active().unwrap();
    assert_eq!(stroke.len(), 2);
    assert!((stroke.last_point().unwrap().pos.x - 52.5).abs() < 1e-5);
}

#[test]
fn moves_without_press_are_ignored() {
    let mut engine = TrailEngine::with_defaults(1);
    assert!(!engine.pointer_move(10.0, 10.0, 0.0));
    assert!(engine.paths().is_empty());
}

#[test]
fn release_and_exit_stop_accumulation() {
    let mut engine = TrailEngine::with_defaults(1);
    engine.pointer_down(0.0, 0.0, 0.0);
    assert!(engine.pointer_move(10.0, 0.0, 10.0));
    engine.pointer_up();
    assert!(!engine.is_drawing());
    assert_eq!(engine.smoother().window_len(), 0);
    assert!(!engine.pointer_move(20.0, 0.0, 20.0));
    assert_eq!(engine.paths().strokes()[0].len(), 2);

    engine.pointer_down(100.0, 0.0, 30.0);
    assert!(engine.pointer_move(110.0, 0.0, 40.0));
    engine.pointer_leave();
    assert!(!engine.pointer_move(120.0, 0.0, 50.0));
    assert_eq!(engine.paths().len(), 2);
    assert_eq!(engine.paths().strokes()[1].len(), 2);
}

#[test]
fn non_finite_input_is_discarded() {
    assert!(Sample::new(f32::NAN, 0.0, 0.0).is_none());
    assert!(Sample::new(0.0, f32::INFINITY, 0.0).is_none());
    assert!(Sample::new(0.0, 0.0, f64::NAN).is_none());

    let mut engine = TrailEngine::with_defaults(1);
    engine.pointer_down(f32::NAN, 0.0, 0.0);
    assert!(engine.paths().is_empty());
    assert!(!engine.is_drawing());

    engine.pointer_down(0.0, 0.0, 0.0);
    assert!(!engine.pointer_move(f32::INFINITY, 5.0, 10.0));
    assert_eq!(engine.paths().active().unwrap().len(), 1);
}

#[test]
fn average_of_empty_window_is_none() {
    assert!(average(&[]).is_none());
    let one = sample(3.0, 4.0, 5.0);
    assert_eq!(average(&[one]), Some(one));
}
