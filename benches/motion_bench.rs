use criterion::{black_box, criterion_group, criterion_main, Criterion};
use drift::floating::FloatingSimulator;
use drift::geometry::Rect;
use drift::input::{PointerButtons, PointerEvent};
use drift::options::FloatingOptions;
use drift::transition::PortalTransition;
use drift::util::easing::EasingFunction;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_time::{Duration, Instant};

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::MOVE;
    c.bench_function("cubic_bezier_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.37))))
    });
}

fn simulator_step_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulator_step");
    let start = Instant::now();
    let bounds = Rect::new(0.0, 0.0, 320.0, 200.0);

    for hovering in [false, true] {
        let mut rng = StdRng::seed_from_u64(7);
        let mut simulator = FloatingSimulator::new(FloatingOptions::default());
        simulator.activate(start, &mut rng);
        if hovering {
            simulator.handle_pointer(PointerEvent::Enter, &bounds);
            simulator.handle_pointer(
                PointerEvent::Move {
                    position: Vec2::new(250.0, 40.0),
                    buttons: PointerButtons::NONE,
                },
                &bounds,
            );
        }
        let name = if hovering { "hover" } else { "idle" };
        let mut frame = 0_u32;
        group.bench_function(name, |b| {
            b.iter(|| {
                frame = frame.wrapping_add(1);
                let now = start + Duration::from_millis(u64::from(frame) * 16);
                black_box(simulator.step(now))
            })
        });
    }

    group.finish();
}

fn portal_sample_benchmark(c: &mut Criterion) {
    let start = Instant::now();
    let mut portal = PortalTransition::default();
    portal.start(
        Rect::new(100.0, 50.0, 0.0, 0.0),
        Rect::new(200.0, 50.0, 300.0, 400.0),
        start,
    );
    let mid = start + Duration::from_millis(200);
    c.bench_function("portal_track_and_sample", |b| {
        b.iter(|| {
            portal.track(black_box(Rect::new(150.0, 50.0, 300.0, 400.0)));
            black_box(portal.proxy_rect(mid))
        })
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    simulator_step_benchmark,
    portal_sample_benchmark
);
criterion_main!(benches);
