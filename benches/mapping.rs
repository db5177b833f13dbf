use criterion::{black_box, criterion_group, criterion_main, Criterion};
use one_hand_cursor::cursor::geometry::{
    clamp_to_element_bounds, map_pad_drag_to_cursor, ElementMetrics, Point, ScreenBounds, Side,
    Size,
};
use one_hand_cursor::cursor::{GestureMachine, PointerPhase, PointerSample, Surface};

fn bench_pad_mapping(c: &mut Criterion) {
    let screen = ScreenBounds::new(1080, 2400);
    let metrics = ElementMetrics::default();
    let points: Vec<Point> = (0..1_000)
        .map(|i| Point::new(i % 240, 2040 + (i * 7) % 360))
        .collect();

    c.bench_function("map_pad_drag_to_cursor", |b| {
        b.iter(|| {
            for point in &points {
                black_box(map_pad_drag_to_cursor(
                    black_box(*point),
                    Side::Left,
                    screen,
                    &metrics,
                ));
            }
        })
    });

    c.bench_function("clamp_to_element_bounds", |b| {
        b.iter(|| {
            for point in &points {
                black_box(clamp_to_element_bounds(
                    black_box(Point::new(point.x * 9, -point.y)),
                    Size::square(40),
                    screen,
                ));
            }
        })
    });
}

fn bench_pad_drag_sequence(c: &mut Criterion) {
    let screen = ScreenBounds::new(1080, 2400);
    c.bench_function("pad_drag_sequence", |b| {
        b.iter(|| {
            let mut machine = GestureMachine::new(screen, ElementMetrics::default());
            machine.handle(
                Surface::LEFT_PAD,
                PointerSample::raw(Point::new(50, 2300), PointerPhase::Down),
            );
            for step in 0..200 {
                black_box(machine.handle(
                    Surface::LEFT_PAD,
                    PointerSample::raw(Point::new(50 + step, 2300 - step), PointerPhase::Move),
                ));
            }
            machine.handle(
                Surface::LEFT_PAD,
                PointerSample::raw(Point::new(250, 2100), PointerPhase::Up),
            )
        })
    });
}

criterion_group!(benches, bench_pad_mapping, bench_pad_drag_sequence);
criterion_main!(benches);
