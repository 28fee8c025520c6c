//! Full-game flow through the public API: selection, validation,
//! application, and turn alternation.

use chessboard::{Board, BoardError, Color, Move, PieceKind, Square};
use chessboard::Game;

fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col).unwrap()
}

fn mv(from: (usize, usize), to: (usize, usize)) -> Move {
    Move::new(sq(from.0, from.1), sq(to.0, to.1))
}

#[test]
fn opening_moves_alternate_turns() {
    let mut game = Game::new();
    assert_eq!(game.turn(), Color::White);

    // 1. e4
    let candidates = game.moves_for(6, 4).unwrap();
    let e4 = mv((6, 4), (4, 4));
    assert!(candidates.contains(e4));
    game.play(e4).unwrap();
    assert_eq!(game.turn(), Color::Black);

    // 1... e5
    game.play(mv((1, 4), (3, 4))).unwrap();
    assert_eq!(game.turn(), Color::White);

    // 2. Nf3
    game.play(mv((7, 6), (5, 5))).unwrap();
    let knight = game.board().occupant(sq(5, 5)).unwrap();
    assert_eq!(knight.kind(), PieceKind::Knight);
    assert!(knight.has_moved());
    assert_eq!(game.board().last_move(), Some(mv((7, 6), (5, 5))));
}

#[test]
fn idle_side_cannot_select_or_move() {
    let mut game = Game::new();
    assert_eq!(
        game.moves_for(1, 4).unwrap_err(),
        BoardError::WrongTurn {
            square: sq(1, 4),
            turn: Color::White,
        }
    );
    assert_eq!(
        game.play(mv((1, 4), (3, 4))).unwrap_err(),
        BoardError::WrongTurn {
            square: sq(1, 4),
            turn: Color::White,
        }
    );
    // The failed attempts change nothing.
    assert_eq!(game.turn(), Color::White);
    assert!(game.board().last_move().is_none());
}

#[test]
fn illegal_move_leaves_turn_with_mover() {
    let mut game = Game::new();
    let jump = mv((7, 0), (4, 0));
    assert_eq!(
        game.play(jump).unwrap_err(),
        BoardError::IllegalMove { mv: jump }
    );
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn capture_through_the_session() {
    let mut game = Game::new();
    game.play(mv((6, 4), (4, 4))).unwrap(); // e4
    game.play(mv((1, 3), (3, 3))).unwrap(); // d5
    game.play(mv((4, 4), (3, 3))).unwrap(); // exd5

    let pawn = game.board().occupant(sq(3, 3)).unwrap();
    assert_eq!(pawn.color(), Color::White);
    assert_eq!(pawn.kind(), PieceKind::Pawn);
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn selection_errors_surface_from_the_board() {
    let game = Game::new();
    assert_eq!(
        game.moves_for(9, 0).unwrap_err(),
        BoardError::InvalidSquare { row: 9, col: 0 }
    );
    assert_eq!(
        game.moves_for(4, 4).unwrap_err(),
        BoardError::NoPiece { square: sq(4, 4) }
    );
}

#[test]
fn board_standalone_matches_session_generation() {
    let game = Game::new();
    let board = Board::new();
    let from_session = game.moves_for(7, 1).unwrap();
    let from_board = board.generate_moves(7, 1).unwrap();
    assert_eq!(from_session.as_slice(), from_board.as_slice());
}
