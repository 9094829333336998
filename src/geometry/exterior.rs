//! Exterior trim lengths.

use crate::config::Settings;
use crate::model::{Opening, Piece, PieceRole, TrimSide};

/// Generate exterior pieces for one opening.
///
/// The head runs over both side boards. On windows the bottom sits between
/// the sides and the sides run past the sill by one trim width; door sides
/// stop at the threshold.
pub fn exterior_pieces(opening: &Opening, settings: &Settings) -> Vec<Piece> {
    let width = opening.width_in;
    let height = opening.height_in;
    let tw = settings.exterior_trim_width_in;
    let is_window = opening.opening_type.is_window();

    let piece = |role: PieceRole, length_in: f64| {
        Piece::new(
            opening.id,
            opening.name.clone(),
            TrimSide::Exterior,
            role,
            length_in,
        )
    };

    let mut pieces = vec![piece(PieceRole::Head, width + 2.0 * tw)];

    if is_window {
        pieces.push(piece(PieceRole::Bottom, width));
    }

    let side = if is_window { height + tw } else { height };
    pieces.push(piece(PieceRole::SideLeft, side));
    pieces.push(piece(PieceRole::SideRight, side));

    pieces
}
