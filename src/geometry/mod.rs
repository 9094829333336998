//! Piece generation: turns an opening into the trim cuts it needs.

mod exterior;
mod interior;

pub use exterior::exterior_pieces;
pub use interior::{head_bevel_extension_in, interior_pieces};

use crate::config::Settings;
use crate::model::{Opening, Piece};

/// Generate every piece for the sides selected on an opening.
///
/// Interior pieces come first, then exterior. The caller is expected to have
/// dropped openings without a positive width and height.
pub fn pieces_for_opening(opening: &Opening, settings: &Settings) -> Vec<Piece> {
    let mut pieces = Vec::new();

    if opening.use_interior {
        pieces.extend(interior_pieces(opening, settings));
    }
    if opening.use_exterior {
        pieces.extend(exterior_pieces(opening, settings));
    }

    tracing::debug!(
        "Opening '{}' ({}): {} piece(s)",
        opening.name,
        opening.opening_type,
        pieces.len()
    );

    pieces
}
