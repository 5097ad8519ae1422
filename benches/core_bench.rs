use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use potku_recoil_editor::{AppIntent, EditLimits, EditorOptions, RecoilCurve, ReplayScript};
use potku_recoil_engine::DragSession;
use std::hint::black_box;

fn build_synthetic_curve(point_count: usize) -> RecoilCurve {
    let coords: Vec<[f64; 2]> = (0..point_count)
        .map(|i| {
            let x = i as f64 * 0.1;
            let y = 0.5 + 0.4 * (i as f64 * 0.05).sin();
            [x, y]
        })
        .collect();
    RecoilCurve::from_coordinates(&coords).expect("synthetische Kurve ist gültig")
}

fn bench_add_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_point");
    let limits = EditLimits::default();

    for &point_count in &[100usize, 10_000usize] {
        let curve = build_synthetic_curve(point_count);
        let max_x = (point_count - 1) as f64 * 0.1;

        group.bench_with_input(
            BenchmarkId::new("insert_batch", point_count),
            &curve,
            |b, curve| {
                b.iter(|| {
                    let mut curve = curve.clone();
                    let mut added = 0usize;
                    for i in 0..256 {
                        let x = (i as f64 * 0.37) % max_x + 0.05;
                        if curve.add_point(black_box(DVec2::new(x, 0.5)), &limits).is_ok() {
                            added += 1;
                        }
                    }
                    black_box(added)
                })
            },
        );
    }

    group.finish();
}

fn bench_drag_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_resolve");
    let limits = EditLimits::default();

    for &selected in &[10usize, 1_000usize] {
        let curve = build_synthetic_curve(selected + 20);
        let ids: Vec<u64> = curve.points()[10..10 + selected]
            .iter()
            .map(|p| p.id)
            .collect();
        let origin = curve.points()[10].position;
        let session = DragSession::begin(&curve, &ids, origin, &limits, false)
            .expect("Drag mit Selektion startet");

        group.bench_with_input(
            BenchmarkId::new("pointer_sweep", selected),
            &session,
            |b, session| {
                b.iter(|| {
                    let mut moved = 0usize;
                    for step in 0..64 {
                        let pointer = origin + DVec2::new(step as f64 * 0.05, -0.01 * step as f64);
                        moved += session.resolve(black_box(pointer), &limits).len();
                    }
                    black_box(moved)
                })
            },
        );
    }

    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let mut intents = Vec::new();
    for i in 1..200 {
        let x = i as f64 * 0.17;
        intents.push(AppIntent::PointAddRequested {
            position: DVec2::new(x, 1.0),
        });
        intents.push(AppIntent::PointerMoved {
            position: DVec2::new(x + 0.02, 0.9),
        });
        intents.push(AppIntent::PointerReleased);
    }
    intents.push(AppIntent::UndoRequested);
    let script = ReplayScript {
        element: potku_recoil_editor::Element::new("He", Some(4)),
        intents,
    };

    c.bench_function("replay_ctrl_click_drag_session", |b| {
        b.iter(|| {
            let scene = script
                .run_to_scene(EditorOptions::default())
                .expect("Replay ok");
            black_box(scene.xs.len())
        })
    });
}

criterion_group!(benches, bench_add_point, bench_drag_resolve, bench_replay);
criterion_main!(benches);
