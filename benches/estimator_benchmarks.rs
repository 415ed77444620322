//! Benchmarks for the estimator hot path

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use posture_mood::calibration::CalibrationBaseline;
use posture_mood::config::Config;
use posture_mood::effects::NullEffects;
use posture_mood::estimator::PostureEstimator;
use posture_mood::evaluator::{evaluate, sensitivity, Thresholds};
use posture_mood::frame::FrameMeasurement;
use posture_mood::rolling::{FrameSample, RollingWindow};
use posture_mood::scheduler::VirtualScheduler;

fn noisy_frame(i: usize) -> FrameMeasurement {
    let t = i as f64 * 0.1;
    FrameMeasurement {
        shoulder_span: 100.0 + 5.0 * t.sin() + rand::random::<f64>(),
        head_shoulder_distance: 50.0 + 2.0 * t.cos() + rand::random::<f64>(),
        head_y: 120.0,
        confidence: 0.9,
        shoulder_height_delta: 2.0 + rand::random::<f64>(),
        arms_raised: false,
    }
}

fn benchmark_rolling_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_window");

    for capacity in [10, 30, 120] {
        group.bench_with_input(
            BenchmarkId::new("push_and_average", capacity),
            &capacity,
            |b, &capacity| {
                let mut window = RollingWindow::new(capacity);
                let samples: Vec<FrameSample> =
                    (0..200).map(|i| FrameSample::from(&noisy_frame(i))).collect();

                b.iter(|| {
                    for sample in &samples {
                        window.push(*sample);
                        black_box(window.averages());
                    }
                });
            },
        );
    }

    group.finish();
}

fn benchmark_evaluator(c: &mut Criterion) {
    let baseline = CalibrationBaseline {
        shoulder_span: 100.0,
        shoulder_height_delta: 2.0,
        head_shoulder_distance: 50.0,
    };
    let thresholds = Thresholds::new(&baseline, sensitivity(25));

    let mut window = RollingWindow::new(30);
    for i in 0..30 {
        window.push(FrameSample::from(&noisy_frame(i)));
    }
    let averages = window.averages().unwrap();

    c.bench_function("evaluate_thresholds", |b| {
        b.iter(|| black_box(evaluate(&averages, &baseline, &thresholds)));
    });
}

fn benchmark_full_frame_step(c: &mut Criterion) {
    c.bench_function("estimator_push_frame", |b| {
        let scheduler = VirtualScheduler::new();
        let mut estimator = PostureEstimator::new(
            Config::default(),
            Box::new(scheduler.clone()),
            Box::new(NullEffects),
        )
        .unwrap();

        // Complete calibration so pushes hit the analysis path
        for i in 0..40 {
            estimator.push_frame(Some(noisy_frame(i)));
        }

        let frames: Vec<FrameMeasurement> = (0..100).map(noisy_frame).collect();
        b.iter(|| {
            for frame in &frames {
                estimator.push_frame(Some(black_box(*frame)));
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_rolling_window,
    benchmark_evaluator,
    benchmark_full_frame_step
);
criterion_main!(benches);
