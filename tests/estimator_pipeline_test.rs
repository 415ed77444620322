//! Integration tests driving the full estimator pipeline over virtual time


use std::time::Duration;

use posture_mood::config::Config;
use posture_mood::mood::Mood;
use test_helpers::{calibrate, frame, test_estimator};

#[test]
fn test_baseline_is_mean_of_first_40_samples() {
    let (mut estimator, _, _) = test_estimator(Config::default());

    let mut span_sum = 0.0;
    let mut delta_sum = 0.0;
    let mut head_sum = 0.0;

    for i in 0..40 {
        assert!(estimator.is_calibrating(), "still calibrating at sample {i}");
        let f = frame(
            95.0 + f64::from(i) * 0.25,
            1.0 + f64::from(i) * 0.05,
            48.0 + f64::from(i) * 0.1,
        );
        span_sum += f.shoulder_span;
        delta_sum += f.shoulder_height_delta;
        head_sum += f.head_shoulder_distance;
        estimator.push_frame(Some(f));
    }

    // Calibration ends exactly on the 40th accepted sample
    assert!(!estimator.is_calibrating());
    assert_eq!(estimator.analysis().status, "Calibrating... 40/40");

    let baseline = estimator.baseline().unwrap();
    assert!((baseline.shoulder_span - span_sum / 40.0).abs() < 1e-12);
    assert!((baseline.shoulder_height_delta - delta_sum / 40.0).abs() < 1e-12);
    assert!((baseline.head_shoulder_distance - head_sum / 40.0).abs() < 1e-12);
}

#[test]
fn test_good_posture_classifies_happy() {
    let (mut estimator, _, _) = test_estimator(Config::default());
    calibrate(&mut estimator, frame(100.0, 2.0, 50.0));

    estimator.push_frame(Some(frame(101.0, 2.1, 49.5)));

    let analysis = estimator.analysis();
    assert_eq!(analysis.mood, Mood::Happy);
    assert_eq!(analysis.status, "Checking posture!");
    assert_eq!(analysis.metrics.issue_count, 0);
    assert_eq!(analysis.metrics.confidence, 0.9);
}

#[test]
fn test_collapsed_shoulders_emit_shoulders_back() {
    // Baseline span 100, tolerance 25: width threshold is 26.25
    let (mut estimator, _, _) = test_estimator(Config::default());
    calibrate(&mut estimator, frame(100.0, 2.0, 50.0));

    // Average span 80 stays inside the threshold
    estimator.push_frame(Some(frame(80.0, 2.0, 50.0)));
    assert_eq!(estimator.analysis().metrics.issue_count, 0);

    // Pull the rolling average below 73.75
    for _ in 0..30 {
        estimator.push_frame(Some(frame(60.0, 2.0, 50.0)));
    }

    let analysis = estimator.analysis();
    assert_eq!(analysis.status, "Shoulders back!");
    assert_eq!(analysis.metrics.issue_count, 1);
}

#[test]
fn test_mood_holds_through_cooldown_while_status_updates() {
    let (mut estimator, scheduler, _) = test_estimator(Config::default());
    calibrate(&mut estimator, frame(100.0, 2.0, 50.0));

    // First classification: Happy is accepted immediately
    estimator.push_frame(Some(frame(100.0, 2.0, 50.0)));
    assert_eq!(estimator.analysis().mood, Mood::Happy);

    // 500ms later an Angry classification arrives: status text changes,
    // mood level does not
    scheduler.advance(Duration::from_millis(500));
    estimator.push_frame(Some(frame(40.0, 5.0, 30.0)));

    let analysis = estimator.analysis();
    assert_eq!(analysis.mood, Mood::Happy);
    assert_eq!(analysis.status, "Shoulders back! & Level your shoulders");
    assert_eq!(analysis.metrics.issue_count, 3);

    // Once 2000ms have elapsed since the accepted change, Angry goes through
    scheduler.advance(Duration::from_millis(1500));
    estimator.push_frame(Some(frame(40.0, 5.0, 30.0)));
    assert_eq!(estimator.analysis().mood, Mood::Angry);
}

#[test]
fn test_arms_raised_bypasses_pipeline() {
    let (mut estimator, _, _) = test_estimator(Config::default());

    for _ in 0..9 {
        estimator.push_frame(Some(frame(100.0, 2.0, 50.0)));
    }
    assert_eq!(estimator.analysis().status, "Calibrating... 9/40");

    let mut raised = frame(100.0, 2.0, 50.0);
    raised.arms_raised = true;
    raised.confidence = 0.7;
    estimator.push_frame(Some(raised));

    let analysis = estimator.analysis();
    assert_eq!(analysis.mood, Mood::Neutral);
    assert_eq!(analysis.status, "Arms raised - monitoring paused");
    assert_eq!(analysis.metrics.confidence, 0.7);
    assert_eq!(analysis.metrics.issue_count, 0);

    // The raised frame did not advance the calibration counter
    estimator.push_frame(Some(frame(100.0, 2.0, 50.0)));
    assert_eq!(estimator.analysis().status, "Calibrating... 10/40");
}

#[test]
fn test_watchdog_declares_no_person_after_timeout() {
    let (mut estimator, scheduler, _) = test_estimator(Config::default());

    estimator.push_frame(None);
    // Re-arming while armed is a no-op
    estimator.push_frame(None);
    assert_eq!(scheduler.pending_timers(), 1);

    scheduler.advance(Duration::from_millis(2999));
    estimator.poll();
    assert_eq!(estimator.analysis().status, "Waiting for camera...");

    scheduler.advance(Duration::from_millis(1));
    estimator.poll();

    let analysis = estimator.analysis();
    assert_eq!(analysis.mood, Mood::Neutral);
    assert_eq!(analysis.status, "No person detected");
    assert_eq!(analysis.metrics.confidence, 0.0);
    assert_eq!(analysis.metrics.issue_count, 0);
}

#[test]
fn test_real_frame_cancels_watchdog() {
    let (mut estimator, scheduler, _) = test_estimator(Config::default());

    estimator.push_frame(None);
    scheduler.advance(Duration::from_millis(1000));
    estimator.push_frame(Some(frame(100.0, 2.0, 50.0)));
    assert_eq!(scheduler.pending_timers(), 0);

    // Even far past the original deadline, no-person is never published
    scheduler.advance(Duration::from_millis(5000));
    estimator.poll();
    assert_eq!(estimator.analysis().status, "Calibrating... 1/40");
}

#[test]
fn test_absence_during_analysis_rearms_watchdog() {
    let (mut estimator, scheduler, _) = test_estimator(Config::default());
    calibrate(&mut estimator, frame(100.0, 2.0, 50.0));

    estimator.push_frame(Some(frame(100.0, 2.0, 50.0)));
    assert_eq!(estimator.analysis().mood, Mood::Happy);

    estimator.push_frame(None);
    scheduler.advance(Duration::from_millis(3000));
    estimator.poll();

    assert_eq!(estimator.analysis().mood, Mood::Neutral);
    assert_eq!(estimator.analysis().status, "No person detected");
}

#[test]
fn test_reset_starts_fresh_calibration_cycle() {
    let (mut estimator, _, _) = test_estimator(Config::default());
    calibrate(&mut estimator, frame(100.0, 2.0, 50.0));
    estimator.push_frame(Some(frame(40.0, 5.0, 30.0)));

    estimator.reset_calibration();

    assert!(estimator.is_calibrating());
    assert!(estimator.baseline().is_none());
    let analysis = estimator.analysis();
    assert_eq!(analysis.mood, Mood::Neutral);
    assert_eq!(analysis.status, "Calibrating...");
    assert_eq!(analysis.metrics.confidence, 0.0);

    // The next measurement is sample 1 of the new cycle
    estimator.push_frame(Some(frame(90.0, 1.0, 45.0)));
    assert_eq!(estimator.analysis().status, "Calibrating... 1/40");
}

#[test]
fn test_reset_cancels_pending_watchdog() {
    let (mut estimator, scheduler, _) = test_estimator(Config::default());

    estimator.push_frame(None);
    assert_eq!(scheduler.pending_timers(), 1);

    estimator.reset_calibration();
    assert_eq!(scheduler.pending_timers(), 0);

    scheduler.advance(Duration::from_millis(5000));
    estimator.poll();
    assert_eq!(estimator.analysis().status, "Calibrating...");
}
