//! Stock boards and purchase summaries.

use serde::{Deserialize, Serialize};

use super::Piece;
use crate::config::INCHES_PER_FOOT;

/// One cut placed on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardCut {
    /// The piece being cut.
    pub piece: Piece,
    /// Length taken from the board (excluding kerf).
    pub length_in: f64,
}

/// One purchased stock board and the cuts assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// 1-based number in production order within its group.
    pub number: usize,
    /// Stock length in inches.
    pub size_in: f64,
    /// Kerf lost between consecutive cuts.
    pub kerf_in: f64,
    /// Cuts in assignment order (not physical order on the stick).
    pub cuts: Vec<BoardCut>,
}

impl Board {
    /// Create an empty board.
    pub fn new(number: usize, size_in: f64, kerf_in: f64) -> Self {
        Self {
            number,
            size_in,
            kerf_in,
            cuts: Vec::new(),
        }
    }

    /// Append a piece as the next cut.
    pub fn push(&mut self, piece: Piece) {
        let length_in = piece.length_in;
        self.cuts.push(BoardCut { piece, length_in });
    }

    /// Sum of cut lengths.
    pub fn cut_total_in(&self) -> f64 {
        self.cuts.iter().map(|c| c.length_in).sum()
    }

    /// Length consumed including one kerf between each pair of cuts.
    pub fn used_in(&self) -> f64 {
        let kerfs = self.cuts.len().saturating_sub(1) as f64;
        self.cut_total_in() + self.kerf_in * kerfs
    }

    /// Offcut left on the board. Negative for an oversize piece.
    pub fn leftover_in(&self) -> f64 {
        self.size_in - self.used_in()
    }

    /// A single piece that does not fit its stock length.
    ///
    /// Boards the optimizer filled with several cuts always fit, even when
    /// re-summing the cuts lands a rounding error below zero.
    pub fn is_oversize(&self) -> bool {
        match self.cuts.as_slice() {
            [only] => only.length_in > self.size_in,
            _ => false,
        }
    }

    /// Stock length in feet.
    pub fn size_ft(&self) -> f64 {
        self.size_in / INCHES_PER_FOOT
    }
}

/// Quantity to buy of one stock length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeCount {
    /// Stock length in inches.
    pub size_in: f64,
    /// Boards to buy.
    pub count: usize,
}

impl SizeCount {
    /// Linear feet for this line item.
    pub fn total_ft(&self) -> f64 {
        self.size_in * self.count as f64 / INCHES_PER_FOOT
    }
}

/// What to buy for one group of boards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseSummary {
    /// Counts per stock size, ascending by size.
    pub counts_by_size: Vec<SizeCount>,
    /// Total length purchased.
    pub total_purchased_in: f64,
    /// Purchased length beyond what the pieces need.
    pub total_waste_in: f64,
    /// Waste as a percentage of the required length.
    pub waste_percent: f64,
}

impl PurchaseSummary {
    /// Total number of boards to buy.
    pub fn board_count(&self) -> usize {
        self.counts_by_size.iter().map(|c| c.count).sum()
    }

    /// Count for a given stock length.
    pub fn count_for(&self, size_in: f64) -> usize {
        self.counts_by_size
            .iter()
            .find(|c| crate::config::float_cmp::approx_eq(c.size_in, size_in))
            .map_or(0, |c| c.count)
    }
}
