//! Greedy assignment of pieces onto stock boards.
//!
//! Pieces are taken longest first. Each round simulates filling one board of
//! every candidate stock length and keeps the board with the least leftover,
//! preferring the shorter stock on a tie. This is a bounded heuristic, not an
//! exact bin packer.

use crate::model::{Board, Piece};

/// Result of filling one candidate board during a round.
struct Fill {
    size_in: f64,
    leftover_in: f64,
    /// Indices into the working set, in acceptance order.
    accepted: Vec<usize>,
}

/// Working set of pieces still waiting for a board.
///
/// Pieces are never removed; a consumed flag marks placement so indices stay
/// stable for the whole run.
struct WorkingSet<'a> {
    pieces: Vec<&'a Piece>,
    consumed: Vec<bool>,
}

impl<'a> WorkingSet<'a> {
    /// Build the set sorted longest first. Equal lengths keep input order.
    fn new(pieces: &'a [Piece]) -> Self {
        let mut pieces: Vec<&Piece> = pieces.iter().collect();
        pieces.sort_by(|a, b| b.length_in.total_cmp(&a.length_in));
        let consumed = vec![false; pieces.len()];
        Self { pieces, consumed }
    }

    fn is_empty(&self) -> bool {
        self.consumed.iter().all(|&c| c)
    }

    /// Unplaced pieces with their indices, in working order.
    fn remaining(&self) -> impl Iterator<Item = (usize, &'a Piece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.consumed[*i])
            .map(|(i, p)| (i, *p))
    }

    fn consume(&mut self, idx: usize) {
        self.consumed[idx] = true;
    }

    /// Simulate filling one board of `size_in`.
    ///
    /// The first piece only has to fit; every later piece also pays one kerf.
    fn fill(&self, size_in: f64, kerf_in: f64) -> Fill {
        let mut leftover_in = size_in;
        let mut accepted = Vec::new();

        for (idx, piece) in self.remaining() {
            let needed = if accepted.is_empty() {
                piece.length_in
            } else {
                piece.length_in + kerf_in
            };
            if needed <= leftover_in {
                accepted.push(idx);
                leftover_in -= needed;
            }
        }

        Fill {
            size_in,
            leftover_in,
            accepted,
        }
    }
}

/// Assign pieces to stock boards.
///
/// Returns an empty list when there are no pieces or no stock lengths. Boards
/// are numbered from 1 in the order they are produced. A piece longer than
/// every stock length still gets its own board, on the smallest stock that
/// holds it or else the longest stock, and shows up with a negative leftover.
pub fn optimize_boards(pieces: &[Piece], stock_lengths_in: &[f64], kerf_in: f64) -> Vec<Board> {
    let mut boards = Vec::new();
    if pieces.is_empty() || stock_lengths_in.is_empty() {
        return boards;
    }

    let mut stock: Vec<f64> = stock_lengths_in.to_vec();
    stock.sort_by(|a, b| a.total_cmp(b));

    let mut working = WorkingSet::new(pieces);

    while !working.is_empty() {
        let mut best: Option<Fill> = None;

        for &size_in in &stock {
            let fill = working.fill(size_in, kerf_in);
            if fill.accepted.is_empty() {
                continue;
            }
            // Stock is ascending, so keeping the first of equal leftovers
            // keeps the smaller board.
            let better = match &best {
                None => true,
                Some(b) => fill.leftover_in < b.leftover_in,
            };
            if better {
                best = Some(fill);
            }
        }

        let Some(best) = best else {
            break;
        };

        let mut board = Board::new(boards.len() + 1, best.size_in, kerf_in);
        for idx in best.accepted {
            board.push(working.pieces[idx].clone());
            working.consume(idx);
        }

        tracing::debug!(
            "Board {}: {}in with {} cut(s), {:.3}in left",
            board.number,
            board.size_in,
            board.cuts.len(),
            best.leftover_in
        );

        boards.push(board);
    }

    let oversize: Vec<&Piece> = working.remaining().map(|(_, p)| p).collect();
    for piece in oversize {
        let size_in = smallest_holding(&stock, piece.length_in);

        tracing::warn!(
            "Piece '{}' of {} ({:.3}in) is longer than every stock length; placing on {}in",
            piece.role_label(),
            piece.opening_name,
            piece.length_in,
            size_in
        );

        let mut board = Board::new(boards.len() + 1, size_in, kerf_in);
        board.push(piece.clone());
        boards.push(board);
    }

    boards
}

/// Smallest stock length holding `length_in`, else the longest one.
///
/// `stock` must be non-empty and ascending.
fn smallest_holding(stock: &[f64], length_in: f64) -> f64 {
    stock
        .iter()
        .copied()
        .find(|&s| s >= length_in)
        .unwrap_or_else(|| stock[stock.len() - 1])
}
