//! Full cut plan for a set of openings.

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::Result;
use crate::geometry::pieces_for_opening;
use crate::model::{Board, BoardAssignment, Opening, Piece, PurchaseSummary, TrimSide};
use crate::optimize::{optimize_boards, summarize_purchase};

/// Boards and purchase totals for one side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardGroup {
    /// Exact length of all pieces in the group.
    pub required_in: f64,
    /// Boards in production order.
    pub boards: Vec<Board>,
    /// What to buy.
    pub summary: PurchaseSummary,
}

impl BoardGroup {
    fn build(side: TrimSide, pieces: &[Piece], settings: &Settings) -> Self {
        let stock = match side {
            TrimSide::Interior => &settings.board_lengths_interior_in,
            TrimSide::Exterior => &settings.board_lengths_exterior_in,
        };

        let required_in: f64 = pieces.iter().map(|p| p.length_in).sum();
        let boards = optimize_boards(pieces, stock, settings.kerf_in);
        let summary = summarize_purchase(&boards, required_in, settings.waste_allowance_percent);

        tracing::info!(
            "{} trim: {} piece(s) on {} board(s), {} to buy",
            side,
            pieces.len(),
            boards.len(),
            summary.board_count()
        );

        Self {
            required_in,
            boards,
            summary,
        }
    }

    /// Whether the group has anything to cut.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Boards whose single piece is longer than its stock length.
    pub fn oversize_boards(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter().filter(|b| b.is_oversize())
    }
}

/// Every piece with its board placement, plus both board groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutPlan {
    /// All pieces, ordered by `piece_id`.
    pub pieces: Vec<Piece>,
    /// Interior casing and returns.
    pub interior: BoardGroup,
    /// Exterior trim.
    pub exterior: BoardGroup,
}

impl CutPlan {
    /// Board group for one side.
    pub fn group(&self, side: TrimSide) -> &BoardGroup {
        match side {
            TrimSide::Interior => &self.interior,
            TrimSide::Exterior => &self.exterior,
        }
    }

    /// Pieces belonging to one opening, in generation order.
    pub fn pieces_for(&self, opening_id: usize) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.opening_id == opening_id)
    }

    /// Pieces on one side.
    pub fn pieces_on(&self, side: TrimSide) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.side == side)
    }

    /// Serialize the whole plan as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the complete plan for a request.
///
/// Pieces are generated per opening (interior then exterior), numbered from 1,
/// split by side and optimized against that side's stock lengths. Each
/// piece then records the board it landed on.
pub fn build_cut_plan(openings: &[Opening], settings: &Settings) -> CutPlan {
    let mut pieces: Vec<Piece> = openings
        .iter()
        .flat_map(|opening| pieces_for_opening(opening, settings))
        .collect();

    for (idx, piece) in pieces.iter_mut().enumerate() {
        piece.piece_id = idx + 1;
    }

    let interior_pieces: Vec<Piece> = pieces
        .iter()
        .filter(|p| p.side == TrimSide::Interior)
        .cloned()
        .collect();
    let exterior_pieces: Vec<Piece> = pieces
        .iter()
        .filter(|p| p.side == TrimSide::Exterior)
        .cloned()
        .collect();

    let interior = BoardGroup::build(TrimSide::Interior, &interior_pieces, settings);
    let exterior = BoardGroup::build(TrimSide::Exterior, &exterior_pieces, settings);

    assign_boards(&mut pieces, &interior.boards, TrimSide::Interior);
    assign_boards(&mut pieces, &exterior.boards, TrimSide::Exterior);

    CutPlan {
        pieces,
        interior,
        exterior,
    }
}

/// Record the board each piece landed on.
///
/// `pieces` is indexed by `piece_id - 1`.
fn assign_boards(pieces: &mut [Piece], boards: &[Board], group: TrimSide) {
    for board in boards {
        for cut in &board.cuts {
            let slot = cut.piece.piece_id.checked_sub(1);
            if let Some(piece) = slot.and_then(|idx| pieces.get_mut(idx)) {
                debug_assert!(piece.board.is_none(), "piece placed twice");
                piece.board = Some(BoardAssignment {
                    group,
                    number: board.number,
                });
            }
        }
    }
}
