//! Tests for the germ war rules engine.

use strictly_germs::{
    Agent, Board, Cell, Coord, GameState, MoveError, MoveKind, Outcome, Player, RandomAgent,
};

fn position(size: usize, pieces: &[(usize, usize, Player)], to_move: Player) -> GameState {
    let mut board = Board::new(size).unwrap();
    for &(row, col, player) in pieces {
        board
            .set(Coord::new(row, col), Cell::Occupied(player))
            .unwrap();
    }
    GameState::with_board(board, to_move)
}

fn cell(state: &GameState, row: usize, col: usize) -> Cell {
    state.board().get(Coord::new(row, col)).unwrap()
}

fn assert_conserved(state: &GameState) {
    let size = state.size();
    assert_eq!(
        state.count(Player::A) + state.count(Player::B) + state.empty_count(),
        size * size
    );
}

#[test]
fn test_initial_layout_on_every_size() {
    for size in [3, 5, 7, 10, 26] {
        let state = GameState::new(size).unwrap();
        let last = size - 1;
        assert_eq!(cell(&state, 0, 0), Cell::Occupied(Player::A));
        assert_eq!(cell(&state, last, last), Cell::Occupied(Player::A));
        assert_eq!(cell(&state, 0, last), Cell::Occupied(Player::B));
        assert_eq!(cell(&state, last, 0), Cell::Occupied(Player::B));
        assert_eq!(state.count(Player::A), 2);
        assert_eq!(state.count(Player::B), 2);
        assert_eq!(state.empty_count(), size * size - 4);
        assert_eq!(state.current_player(), Player::A);
        assert!(!state.is_terminal());
    }
}

#[test]
fn test_board_size_limits() {
    assert!(GameState::new(2).is_err());
    assert!(GameState::new(27).is_err());
    assert!(GameState::new(0).is_err());
}

#[test]
fn test_clone_keeps_origin() {
    let mut state = GameState::new(7).unwrap();
    let applied = state.try_apply_move(0, 1).unwrap();

    assert_eq!(applied.action.kind, MoveKind::Clone);
    assert_eq!(applied.action.origin, Coord::new(0, 0));
    assert!(applied.converted.is_empty());
    assert_eq!(cell(&state, 0, 0), Cell::Occupied(Player::A));
    assert_eq!(cell(&state, 0, 1), Cell::Occupied(Player::A));
    assert_eq!(cell(&state, 0, 6), Cell::Occupied(Player::B));
    assert_eq!(cell(&state, 6, 0), Cell::Occupied(Player::B));
    assert_eq!(state.count(Player::A), 3);
    assert_eq!(state.current_player(), Player::B);
}

#[test]
fn test_jump_empties_origin() {
    let mut state = GameState::new(7).unwrap();
    let applied = state.try_apply_move(0, 2).unwrap();

    assert_eq!(applied.action.kind, MoveKind::Jump);
    assert_eq!(cell(&state, 0, 0), Cell::Empty);
    assert_eq!(cell(&state, 0, 2), Cell::Occupied(Player::A));
    assert_eq!(state.count(Player::A), 2);
}

#[test]
fn test_contagion_converts_adjacent_opponents() {
    let mut state = position(
        5,
        &[
            (0, 0, Player::A),
            (1, 2, Player::B),
            (2, 1, Player::B),
            (2, 2, Player::B),
            (4, 4, Player::B),
        ],
        Player::A,
    );

    let applied = state.try_apply_move(1, 1).unwrap();
    let mut converted = applied.converted.clone();
    converted.sort_by_key(|c| (c.row, c.col));
    assert_eq!(
        converted,
        vec![Coord::new(1, 2), Coord::new(2, 1), Coord::new(2, 2)]
    );
    assert_eq!(cell(&state, 4, 4), Cell::Occupied(Player::B));
    assert_eq!(state.count(Player::A), 5);
    assert_eq!(state.count(Player::B), 1);
}

#[test]
fn test_jump_takes_first_discovered_origin() {
    // Both A pieces reach (0, 2) by a jump; the row-major scan finds
    // (0, 0) first, so that is the cell that empties.
    let mut state = position(
        5,
        &[(0, 0, Player::A), (2, 4, Player::A), (4, 0, Player::B)],
        Player::A,
    );
    let applied = state.try_apply_move(0, 2).unwrap();
    assert_eq!(applied.action.origin, Coord::new(0, 0));
    assert_eq!(cell(&state, 0, 0), Cell::Empty);
    assert_eq!(cell(&state, 2, 4), Cell::Occupied(Player::A));
}

#[test]
fn test_rejection_reasons() {
    let mut state = GameState::new(7).unwrap();
    assert_eq!(
        state.try_apply_move(7, 7),
        Err(MoveError::OutOfBounds {
            row: 7,
            col: 7,
            size: 7
        })
    );
    assert_eq!(
        state.try_apply_move(6, 6),
        Err(MoveError::SquareOccupied(Coord::new(6, 6)))
    );
    assert_eq!(
        state.try_apply_move(3, 3),
        Err(MoveError::NotReachable(Coord::new(3, 3)))
    );
    assert_eq!(state, GameState::new(7).unwrap());
}

#[test]
fn test_forfeiture_fill_on_detect() {
    // B's only piece is boxed in; A still has room to move.
    let mut pieces = vec![(0, 0, Player::B)];
    for row in 0..3 {
        for col in 0..3 {
            if (row, col) != (0, 0) {
                pieces.push((row, col, Player::A));
            }
        }
    }
    let mut state = position(5, &pieces, Player::B);

    assert!(state.detect_terminal());
    assert_eq!(state.empty_count(), 0);
    assert_eq!(state.count(Player::A), 24);
    assert_eq!(state.count(Player::B), 1);
    assert_eq!(state.winner(), Some(Outcome::Winner(Player::A)));
    assert!(state.current_legal_moves().is_empty());
}

#[test]
fn test_move_that_strands_opponent_ends_game() {
    let mut pieces = vec![(0, 0, Player::B)];
    for row in 0..3 {
        for col in 0..3 {
            if (row, col) != (0, 0) && (row, col) != (0, 2) {
                pieces.push((row, col, Player::A));
            }
        }
    }
    let mut state = position(5, &pieces, Player::A);
    assert!(!state.detect_terminal());

    let applied = state.try_apply_move(0, 2).unwrap();
    assert_eq!(applied.action.origin, Coord::new(0, 1));
    assert!(state.is_terminal());
    assert_eq!(state.count(Player::A), 24);
    assert_eq!(state.winner(), Some(Outcome::Winner(Player::A)));
    assert_eq!(state.try_apply_move(4, 4), Err(MoveError::GameOver));
}

#[test]
fn test_both_stuck_on_full_board() {
    let mut state = position(
        3,
        &[
            (0, 0, Player::A),
            (0, 1, Player::A),
            (0, 2, Player::B),
            (1, 0, Player::A),
            (1, 1, Player::B),
            (1, 2, Player::B),
            (2, 0, Player::A),
            (2, 1, Player::A),
            (2, 2, Player::B),
        ],
        Player::A,
    );
    assert!(state.detect_terminal());
    assert_eq!(state.winner(), Some(Outcome::Winner(Player::A)));
    assert_eq!(state.count(Player::A), 5);
}

#[test]
fn test_both_stuck_on_empty_board_is_draw() {
    let mut state = GameState::with_board(Board::new(4).unwrap(), Player::A);
    assert!(state.detect_terminal());
    assert_eq!(state.winner(), Some(Outcome::Draw));
    assert_eq!(state.empty_count(), 16);
}

#[test]
fn test_random_games_keep_invariants() {
    for seed in 0..8 {
        let mut agent = RandomAgent::seeded(seed);
        let mut state = GameState::new(5).unwrap();

        for _ in 0..2000 {
            if state.is_terminal() {
                break;
            }
            let before = state.clone();
            let action = agent.select_move(&state).unwrap();
            let applied = state
                .try_apply_move(action.target.row, action.target.col)
                .unwrap();
            assert_conserved(&state);

            let mover = Cell::Occupied(applied.player);
            match applied.action.kind {
                MoveKind::Clone => assert_eq!(state.board().get(action.origin), Some(mover)),
                MoveKind::Jump if !state.is_terminal() => {
                    assert_eq!(state.board().get(action.origin), Some(Cell::Empty))
                }
                MoveKind::Jump => {}
            }

            for coord in state.board().neighbours(action.target) {
                if before.board().get(coord) == Some(Cell::Occupied(applied.player.opponent())) {
                    assert_eq!(state.board().get(coord), Some(mover));
                }
            }

            if !state.is_terminal() {
                for coord in state.board().coords() {
                    let far = coord.chebyshev(action.target) > 1 && coord != action.origin;
                    if far {
                        assert_eq!(state.board().get(coord), before.board().get(coord));
                    }
                }
            }
        }

        if let Some(outcome) = state.winner() {
            let score = state.score();
            assert_eq!(
                outcome,
                Outcome::from_counts(score.player_a, score.player_b)
            );
        }
    }
}
