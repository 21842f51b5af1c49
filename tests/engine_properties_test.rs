//! Move/merge properties checked over many seeded games.

use tui_2048::core::{GameState, SimpleRng};
use tui_2048::types::{Direction, MoveOutcome, VariantKind};

/// Random but reproducible grid of small ranks, roughly one cell in five empty.
fn seeded_rows(kind: VariantKind, seed: u32) -> Vec<Vec<u8>> {
    let side = if kind == VariantKind::Extended { 5 } else { 4 };
    let mut rng = SimpleRng::new(seed);
    (0..side)
        .map(|_| (0..side).map(|_| rng.next_range(5) as u8).collect())
        .collect()
}

fn game(kind: VariantKind, seed: u32) -> GameState {
    GameState::from_rows(kind, &seeded_rows(kind, seed), 0, false, SimpleRng::new(seed)).unwrap()
}

#[test]
fn test_no_op_moves_change_nothing() {
    for seed in 1..300 {
        for kind in VariantKind::ALL {
            let mut g = game(kind, seed);
            for dir in Direction::ALL {
                let grid = g.grid().clone();
                let score = g.score();
                let won = g.has_won();
                if g.apply_move(dir) == MoveOutcome::NoMovement {
                    assert_eq!(g.grid(), &grid, "seed {} {:?}", seed, dir);
                    assert_eq!(g.score(), score);
                    assert_eq!(g.has_won(), won);
                }
            }
        }
    }
}

#[test]
fn test_tile_count_drops_by_merges_plus_spawn() {
    for seed in 1..300 {
        let mut g = game(VariantKind::Classic, seed);
        for step in 0..30 {
            let dir = Direction::ALL[(seed as usize + step) % 4];
            let before = g.grid().tile_count();
            let score_before = g.score();
            let outcome = g.apply_move(dir);
            if !outcome.is_moved() {
                continue;
            }
            let report = g.last_move().unwrap();
            assert_eq!(
                g.grid().tile_count(),
                before - report.merges as usize + 1,
                "seed {} step {}",
                seed,
                step
            );
            assert_eq!(g.score(), score_before + report.gained);
            if outcome == MoveOutcome::GameOver {
                break;
            }
        }
    }
}

#[test]
fn test_score_never_decreases() {
    let mut g = GameState::new(VariantKind::Extended, SimpleRng::new(2024));
    let mut last = 0;
    for step in 0..2000 {
        let outcome = g.apply_move(Direction::ALL[step % 4]);
        assert!(g.score() >= last);
        last = g.score();
        if outcome == MoveOutcome::GameOver {
            break;
        }
    }
    assert!(last > 0);
}

#[test]
fn test_four_equal_tiles_make_two_merges() {
    let mut g = GameState::from_rows(
        VariantKind::Classic,
        &[[1u8, 1, 1, 1], [0; 4], [0; 4], [0; 4]],
        0,
        false,
        SimpleRng::new(5),
    )
    .unwrap();
    g.apply_move(Direction::Left);
    assert_eq!(&g.grid().row(0)[..2], &[2, 2]);
    assert_eq!(g.score(), 8);
    assert_eq!(g.last_move().unwrap().merges, 2);
}

#[test]
fn test_merge_scenario_from_row_with_gap() {
    let mut g = GameState::from_rows(
        VariantKind::Classic,
        &[[1u8, 1, 2, 0], [0; 4], [0; 4], [0; 4]],
        0,
        false,
        SimpleRng::new(11),
    )
    .unwrap();
    assert_eq!(g.apply_move(Direction::Left), MoveOutcome::Normal);
    assert_eq!(&g.grid().row(0)[..2], &[2, 2]);
    assert_eq!(g.score(), 4);
}

#[test]
fn test_game_over_requires_full_grid_without_pairs() {
    let stuck = [[1u8, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 2, 1]];
    let g = GameState::from_rows(VariantKind::Classic, &stuck, 0, false, SimpleRng::new(1)).unwrap();
    assert!(g.is_game_over());
    for dir in Direction::ALL {
        let mut g = g.clone();
        assert_eq!(g.apply_move(dir), MoveOutcome::NoMovement);
    }

    let mut with_gap = stuck;
    with_gap[2][3] = 0;
    let g = GameState::from_rows(VariantKind::Classic, &with_gap, 0, false, SimpleRng::new(1)).unwrap();
    assert!(!g.is_game_over());

    let mut with_pair = stuck;
    with_pair[3][3] = 2;
    let g = GameState::from_rows(VariantKind::Classic, &with_pair, 0, false, SimpleRng::new(1)).unwrap();
    assert!(!g.is_game_over());
}

#[test]
fn test_won_reported_exactly_once() {
    let mut g = GameState::from_rows(
        VariantKind::Themed,
        &[[10u8, 10, 0, 0], [0; 4], [0; 4], [0; 4]],
        0,
        false,
        SimpleRng::new(3),
    )
    .unwrap();
    assert_eq!(g.apply_move(Direction::Left), MoveOutcome::Won);
    assert!(g.has_won());

    let mut wins = 0;
    for step in 0..200 {
        match g.apply_move(Direction::ALL[step % 4]) {
            MoveOutcome::Won => wins += 1,
            MoveOutcome::GameOver => break,
            _ => {}
        }
    }
    assert_eq!(wins, 0);
    assert!(g.has_won());
}

#[test]
fn test_cells_stay_within_max_rank() {
    for kind in VariantKind::ALL {
        let mut g = GameState::new(kind, SimpleRng::new(77));
        let max = g.variant().max_rank();
        for step in 0..1500 {
            if g.apply_move(Direction::ALL[(step * 7 + step / 3) % 4]) == MoveOutcome::GameOver {
                break;
            }
            assert!(g.grid().cells().iter().all(|&r| r <= max));
        }
    }
}
