use cozy_board::dashboard::{find_slot, project_all, Footprint, LayoutItem};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn packed_layout(count: usize) -> Vec<LayoutItem> {
    let mut items = Vec::with_capacity(count);
    for i in 0..count {
        let footprint = Footprint::new(1 + (i % 2) as u32, 2 + (i % 2) as u32);
        let pos = find_slot(&items, footprint, 4);
        items.push(LayoutItem::new(
            format!("widget-{i}"),
            pos.x,
            pos.y,
            footprint.w,
            footprint.h,
        ));
    }
    items
}

fn bench_placement(c: &mut Criterion) {
    let small = packed_layout(13);
    let full = packed_layout(60);

    c.bench_function("find_slot_default_dashboard", |b| {
        b.iter(|| find_slot(black_box(&small), Footprint::new(2, 3), 4))
    });

    c.bench_function("find_slot_fallback", |b| {
        b.iter(|| find_slot(black_box(&full), Footprint::new(2, 3), 4))
    });

    c.bench_function("project_all_breakpoints", |b| {
        b.iter(|| project_all(black_box(&full)))
    });
}

criterion_group!(benches, bench_placement);
criterion_main!(benches);
