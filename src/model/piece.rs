//! Piece definition representing a single trim cut.

use serde::{Deserialize, Serialize};

/// Which face of the wall a piece trims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrimSide {
    #[default]
    Interior,
    Exterior,
}

impl std::fmt::Display for TrimSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrimSide::Interior => write!(f, "interior"),
            TrimSide::Exterior => write!(f, "exterior"),
        }
    }
}

/// Position of a piece around the opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceRole {
    SideCasingLeft,
    SideCasingRight,
    HeadCasing,
    BottomCasing,
    BottomReturn,
    TopReturn,
    SideReturnLeft,
    SideReturnRight,
    Head,
    Bottom,
    SideLeft,
    SideRight,
}

impl PieceRole {
    /// Human-readable tag used on cut sheets.
    pub fn label(&self) -> &'static str {
        match self {
            PieceRole::SideCasingLeft => "side casing left",
            PieceRole::SideCasingRight => "side casing right",
            PieceRole::HeadCasing => "head casing",
            PieceRole::BottomCasing => "bottom casing",
            PieceRole::BottomReturn => "bottom return",
            PieceRole::TopReturn => "top return",
            PieceRole::SideReturnLeft => "side return left",
            PieceRole::SideReturnRight => "side return right",
            PieceRole::Head => "head",
            PieceRole::Bottom => "bottom",
            PieceRole::SideLeft => "side left",
            PieceRole::SideRight => "side right",
        }
    }

    /// Interior face casing (side, head or bottom).
    pub fn is_casing(&self) -> bool {
        matches!(
            self,
            PieceRole::SideCasingLeft
                | PieceRole::SideCasingRight
                | PieceRole::HeadCasing
                | PieceRole::BottomCasing
        )
    }

    /// Boxed return piece.
    pub fn is_return(&self) -> bool {
        matches!(
            self,
            PieceRole::BottomReturn
                | PieceRole::TopReturn
                | PieceRole::SideReturnLeft
                | PieceRole::SideReturnRight
        )
    }
}

/// Board a piece was placed on after optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardAssignment {
    /// Group the board belongs to.
    pub group: TrimSide,
    /// 1-based board number within the group.
    pub number: usize,
}

/// One physical cut required for an opening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    /// Opening this piece belongs to.
    pub opening_id: usize,
    /// Opening display label.
    pub opening_name: String,
    /// Interior or exterior.
    pub side: TrimSide,
    /// Position around the opening.
    pub role: PieceRole,
    /// Second face of an interior door jamb.
    pub second_side: bool,
    /// Cut length in inches.
    pub length_in: f64,
    /// Span along the bottom edge of a bevelled head casing.
    pub bottom_span_in: Option<f64>,
    /// Identifier assigned after aggregation (0 until then).
    pub piece_id: usize,
    /// Board placement, written once by the planner.
    pub board: Option<BoardAssignment>,
}

impl Piece {
    /// Create a new piece.
    pub fn new(
        opening_id: usize,
        opening_name: impl Into<String>,
        side: TrimSide,
        role: PieceRole,
        length_in: f64,
    ) -> Self {
        Self {
            opening_id,
            opening_name: opening_name.into(),
            side,
            role,
            second_side: false,
            length_in,
            bottom_span_in: None,
            piece_id: 0,
            board: None,
        }
    }

    /// Copy of this piece for the second face of a door jamb.
    pub fn second_face(&self) -> Self {
        Self {
            second_side: true,
            ..self.clone()
        }
    }

    /// Role tag including the second-face marker.
    pub fn role_label(&self) -> String {
        if self.second_side {
            format!("{} (2nd side)", self.role.label())
        } else {
            self.role.label().to_string()
        }
    }

    /// Length in feet.
    pub fn length_ft(&self) -> f64 {
        self.length_in / crate::config::INCHES_PER_FOOT
    }

    /// Board number, if placed.
    pub fn board_number(&self) -> Option<usize> {
        self.board.map(|b| b.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_label_second_side() {
        let piece = Piece::new(1, "Door", TrimSide::Interior, PieceRole::HeadCasing, 40.0);
        assert_eq!(piece.role_label(), "head casing");
        assert_eq!(piece.second_face().role_label(), "head casing (2nd side)");
    }

    #[test]
    fn test_role_groups() {
        assert!(PieceRole::HeadCasing.is_casing());
        assert!(!PieceRole::HeadCasing.is_return());
        assert!(PieceRole::SideReturnLeft.is_return());
        assert!(!PieceRole::Head.is_casing());
        assert!(!PieceRole::Head.is_return());
    }

    #[test]
    fn test_length_ft() {
        let piece = Piece::new(0, "A", TrimSide::Exterior, PieceRole::Head, 18.0);
        assert_eq!(piece.length_ft(), 1.5);
        assert_eq!(piece.board_number(), None);
    }
}
