//! Benchmark for the per-frame notification path.
//!
//! TARGET: a full stack (update + render) well under 1% of a 16 ms frame
//!
//! Run with: cargo bench --package noctis_ui --bench notification_benchmark

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use noctis_ui::headless::{CommandRecorder, MonospaceFont};
use noctis_ui::notification::wrap_text;
use noctis_ui::{Clock, Font, ManualClock, NotificationManager, Size};

const MESSAGE: &str = "Chunk 12,-4 finished generating and was written to the region file on disk";

fn create_manager(font: &Arc<MonospaceFont>, clock: &ManualClock, count: usize) -> NotificationManager {
    let font: Font = font.clone();
    let mut manager = NotificationManager::builder()
        .regular_font(font.clone())
        .bold_font(font.clone())
        .icon_font(font)
        .clock(clock.clone())
        .build()
        .expect("fonts supplied");

    for i in 0..count {
        manager.info(format!("toast-{i}"), "World saved", MESSAGE);
    }
    manager
}

fn benchmark_wrap(c: &mut Criterion) {
    let font = MonospaceFont::new(6.0, 12.0);

    c.bench_function("wrap_message", |b| {
        b.iter(|| black_box(wrap_text(&font, black_box(MESSAGE), 9.0, 174.0)));
    });
}

fn benchmark_frame(c: &mut Criterion) {
    let font = Arc::new(MonospaceFont::new(6.0, 12.0));
    let clock = ManualClock::new(0);
    let mut manager = create_manager(&font, &clock, 8);
    let mut recorder = CommandRecorder::new();
    let viewport = Size::new(1920.0, 1080.0);

    let mut group = c.benchmark_group("notification_frame");
    group.throughput(Throughput::Elements(8));

    group.bench_function("update_and_render_8", |b| {
        b.iter(|| {
            clock.advance(1);
            if clock.now_ms() > 2_500 {
                clock.set(0);
            }
            manager.update();
            recorder.begin_frame();
            manager.render(&mut recorder, black_box(viewport));
            black_box(font.take_runs().len() + recorder.command_count())
        });
    });

    group.finish();
}

fn benchmark_stacking(c: &mut Criterion) {
    let font = Arc::new(MonospaceFont::new(6.0, 12.0));
    let clock = ManualClock::new(0);
    let mut manager = create_manager(&font, &clock, 32);

    c.bench_function("stack_onto_32", |b| {
        b.iter(|| manager.info(black_box("toast-31"), "World saved", MESSAGE));
    });
}

criterion_group!(benches, benchmark_wrap, benchmark_frame, benchmark_stacking);
criterion_main!(benches);
