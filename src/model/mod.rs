//! Data model types for trim planning.

mod board;
mod opening;
mod piece;

pub use board::{Board, BoardCut, PurchaseSummary, SizeCount};
pub use opening::{Opening, OpeningType, WallType};
pub use piece::{BoardAssignment, Piece, PieceRole, TrimSide};
