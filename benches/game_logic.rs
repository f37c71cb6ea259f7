use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blub::core::{SimSnapshot, Simulation};
use blub::term::{draw_list_into, encode_diff_into, DrawList, FrameBuffer, GameView, Viewport};
use blub::types::NetInput;

fn bench_tick(c: &mut Criterion) {
    let mut sim = Simulation::new();

    c.bench_function("sim_update", |b| {
        b.iter(|| {
            black_box(sim.update(black_box(NetInput::DOWN)));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let sim = Simulation::new();
    let mut snap = SimSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            sim.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

fn bench_draw_list(c: &mut Criterion) {
    let snap = Simulation::new().snapshot();
    let mut list = DrawList::new();

    c.bench_function("draw_list_into", |b| {
        b.iter(|| {
            draw_list_into(black_box(&snap), &mut list);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let view = GameView::default();
    let snap = Simulation::new().snapshot();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

fn bench_diff(c: &mut Criterion) {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut sim = Simulation::new();
    let prev = view.render(&sim.snapshot(), viewport);
    sim.update(NetInput::NONE);
    let next = view.render(&sim.snapshot(), viewport);
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_diff_one_tick", |b| {
        b.iter(|| {
            out.clear();
            let _ = encode_diff_into(&prev, &next, &mut out);
            black_box(out.len());
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_snapshot,
    bench_draw_list,
    bench_render,
    bench_diff
);
criterion_main!(benches);
