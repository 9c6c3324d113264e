//! Capture-engine tests: bracketed runs flip, unbounded runs don't, and
//! application is defensive about its preconditions.

use othello_core::{apply_ply, has_any_move, legal_moves, Board, Cell, Coord, Player, Ply, RulesError};

/// A position where one placement captures in all 8 directions at once:
/// each ray holds one white piece at distance 1 and a black terminator at
/// distance 2 from the center.
fn eight_way_star() -> Board {
    Board::from_fn(8, 8, |coord| {
        let dr = i16::from(coord.row) - 4;
        let dc = i16::from(coord.col) - 4;
        let on_ray = dr == 0 || dc == 0 || dr.abs() == dc.abs();
        match dr.abs().max(dc.abs()) {
            1 if on_ray => Cell::Piece(Player::White),
            2 if on_ray => Cell::Piece(Player::Black),
            _ => Cell::Empty,
        }
    })
}

#[test]
fn captures_in_all_eight_directions() {
    let board = eight_way_star();
    assert_eq!(board.piece_counts(), (8, 8));

    let next = apply_ply(&board, Player::Black, Ply::Place(Coord::new(4, 4))).unwrap();
    // All 8 white pieces flip; nothing else changes.
    assert_eq!(next.piece_counts(), (17, 0));
}

#[test]
fn only_bracketed_runs_flip() {
    // Rays that end on an empty cell or the board edge keep their pieces.
    let board = Board::from_fn(8, 8, |coord| match (coord.row, coord.col) {
        // East from (4, 1): run ending on a black terminator, flips.
        (4, 2) | (4, 3) => Cell::Piece(Player::White),
        (4, 4) => Cell::Piece(Player::Black),
        // North from (4, 1): run to the edge with no terminator.
        (0, 1) | (1, 1) | (2, 1) | (3, 1) => Cell::Piece(Player::White),
        // South from (4, 1): run ending on an empty cell.
        (5, 1) | (6, 1) => Cell::Piece(Player::White),
        _ => Cell::Empty,
    });

    let next = apply_ply(&board, Player::Black, Ply::Place(Coord::new(4, 1))).unwrap();

    // East run flipped.
    assert_eq!(next.cell(Coord::new(4, 2)), Ok(Cell::Piece(Player::Black)));
    assert_eq!(next.cell(Coord::new(4, 3)), Ok(Cell::Piece(Player::Black)));
    // North run (edge-terminated) and south run (empty-terminated) intact.
    for row in 0..4 {
        assert_eq!(next.cell(Coord::new(row, 1)), Ok(Cell::Piece(Player::White)));
    }
    assert_eq!(next.cell(Coord::new(5, 1)), Ok(Cell::Piece(Player::White)));
    assert_eq!(next.cell(Coord::new(6, 1)), Ok(Cell::Piece(Player::White)));
}

#[test]
fn apply_rejects_occupied_and_off_board() {
    let board = Board::standard();

    let occupied = Ply::Place(Coord::new(4, 4));
    assert_eq!(
        apply_ply(&board, Player::Black, occupied),
        Err(RulesError::IllegalMove { ply: occupied })
    );

    let off_board = Ply::Place(Coord::new(0, 9));
    assert_eq!(
        apply_ply(&board, Player::White, off_board),
        Err(RulesError::IllegalMove { ply: off_board })
    );
}

#[test]
fn pass_is_rejected_while_placements_exist() {
    let board = Board::standard();
    for player in Player::BOTH {
        assert!(has_any_move(&board, player));
        assert_eq!(
            apply_ply(&board, player, Ply::Pass),
            Err(RulesError::IllegalMove { ply: Ply::Pass })
        );
    }
}

#[test]
fn replaying_a_sequence_is_deterministic() {
    // No hidden randomness: the same moves from the initial board always
    // produce the same final board.
    let moves = [
        (Player::Black, Coord::new(2, 3)),
        (Player::White, Coord::new(2, 2)),
        (Player::Black, Coord::new(3, 2)),
        (Player::White, Coord::new(4, 2)),
    ];

    let play = || {
        let mut board = Board::standard();
        for (player, coord) in moves {
            assert!(legal_moves(&board, player).contains(&coord));
            board = apply_ply(&board, player, Ply::Place(coord)).unwrap();
        }
        board
    };

    assert_eq!(play(), play());
}

#[test]
fn each_move_adds_exactly_one_piece() {
    let mut board = Board::standard();
    let mut player = Player::Black;

    for turn in 0..10 {
        let moves = legal_moves(&board, player);
        let Some(&coord) = moves.iter().min() else {
            player = player.opponent();
            continue;
        };
        let next = apply_ply(&board, player, Ply::Place(coord)).unwrap();

        let (black, white) = board.piece_counts();
        let (next_black, next_white) = next.piece_counts();
        assert_eq!(next_black + next_white, black + white + 1, "turn {turn}");
        // The mover never loses pieces by moving.
        let (mover, next_mover) = match player {
            Player::Black => (black, next_black),
            Player::White => (white, next_white),
        };
        assert!(next_mover > mover, "turn {turn}");

        board = next;
        player = player.opponent();
    }
}
