pub mod board;
pub mod game;

pub use board::{Board, BoardBuilder, BoardError, Color, Move, MoveList, Piece, PieceKind, Square};
pub use game::Game;
