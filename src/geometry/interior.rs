//! Interior casing and boxed-return lengths.

use crate::config::Settings;
use crate::model::{Opening, OpeningType, Piece, PieceRole, TrimSide};

/// Extra length on each end of a bevelled head casing.
///
/// The head's outer edge is cut at `head_angle_degrees`, so its top edge runs
/// `trim_width * tan(angle)` past the bottom span on each side.
pub fn head_bevel_extension_in(trim_width_in: f64, head_angle_degrees: f64) -> f64 {
    trim_width_in * head_angle_degrees.to_radians().tan()
}

/// Generate interior pieces for one opening.
///
/// Windows get side, head and bottom casings plus four boxed returns. Doors
/// get side and head casings only; interior doors repeat the whole set for
/// the second face of the jamb.
pub fn interior_pieces(opening: &Opening, settings: &Settings) -> Vec<Piece> {
    let width = opening.width_in;
    let height = opening.height_in;
    let tw = settings.interior_trim_width_in;
    let is_window = opening.opening_type.is_window();

    let piece = |role: PieceRole, length_in: f64| {
        Piece::new(
            opening.id,
            opening.name.clone(),
            TrimSide::Interior,
            role,
            length_in,
        )
    };

    let mut face = vec![
        piece(PieceRole::SideCasingLeft, height),
        piece(PieceRole::SideCasingRight, height),
    ];

    let bottom_span = width + 2.0 * tw + 2.0 * settings.top_overhang_in;
    let extension = head_bevel_extension_in(tw, settings.head_angle_degrees);
    let mut head = piece(PieceRole::HeadCasing, bottom_span + 2.0 * extension);
    head.bottom_span_in = Some(bottom_span);
    face.push(head);

    if is_window {
        face.push(piece(
            PieceRole::BottomCasing,
            width + 2.0 * tw + 2.0 * settings.bottom_overhang_in,
        ));

        // Short windows would go negative here
        let side_return = (height - 2.0 * settings.return_thickness_in).max(0.0);
        face.push(piece(PieceRole::BottomReturn, width));
        face.push(piece(PieceRole::TopReturn, width));
        face.push(piece(PieceRole::SideReturnLeft, side_return));
        face.push(piece(PieceRole::SideReturnRight, side_return));
    }

    if opening.opening_type == OpeningType::InteriorDoor {
        let second: Vec<Piece> = face.iter().map(Piece::second_face).collect();
        face.extend(second);
    }

    face
}
