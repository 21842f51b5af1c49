use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::style::{CLASSIC_STYLES, EXTENDED_STYLES};
use tui_2048::core::{slide_line, spawn_tile, GameState, Grid, SimpleRng};
use tui_2048::term::{FrameBuffer, GameView, Hud, Viewport};
use tui_2048::types::{Direction, MoveOutcome, VariantKind};

fn bench_apply_move(c: &mut Criterion) {
    for kind in [VariantKind::Classic, VariantKind::Extended] {
        let mut state = GameState::new(kind, SimpleRng::new(12345));
        let mut step = 0usize;

        c.bench_function(&format!("apply_move_{}", kind.as_str()), |b| {
            b.iter(|| {
                let outcome = state.apply_move(black_box(Direction::ALL[step % 4]));
                step += 1;
                if outcome == MoveOutcome::GameOver {
                    state = GameState::new(kind, SimpleRng::new(step as u32));
                }
            })
        });
    }
}

fn bench_slide_line(c: &mut Criterion) {
    c.bench_function("slide_line_4", |b| {
        b.iter(|| {
            let mut line = black_box([1u8, 1, 2, 2]);
            slide_line(&mut line, &CLASSIC_STYLES)
        })
    });

    c.bench_function("slide_line_5_sparse", |b| {
        b.iter(|| {
            let mut line = black_box([0u8, 3, 0, 3, 4]);
            slide_line(&mut line, &EXTENDED_STYLES)
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("spawn_tile_empty_5x5", |b| {
        b.iter(|| {
            let mut grid = Grid::new(5, 5);
            spawn_tile(&mut grid, &mut rng)
        })
    });
}

fn bench_save_codec(c: &mut Criterion) {
    let mut state = GameState::new(VariantKind::Extended, SimpleRng::new(7));
    for step in 0..100 {
        state.apply_move(Direction::ALL[step % 4]);
    }
    let bytes = state.to_bytes();

    c.bench_function("encode_5x5", |b| b.iter(|| black_box(&state).to_bytes()));
    c.bench_function("restore_5x5", |b| {
        b.iter(|| GameState::restore(black_box(&bytes), SimpleRng::new(1)))
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(VariantKind::Themed, SimpleRng::new(3));
    let snap = state.snapshot();
    let view = GameView::default();
    let hud = Hud::new(state.styles(), state.hint());
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), &hud, vp, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_apply_move,
    bench_slide_line,
    bench_spawn,
    bench_save_codec,
    bench_render
);
criterion_main!(benches);
