//! Purchase totals and waste-allowance padding.

use crate::config::float_cmp;
use crate::model::{Board, PurchaseSummary, SizeCount};

/// Summarize what to buy for a group of boards.
///
/// Counts come straight from `boards`. If that falls short of
/// `required_total_in * (1 + waste_allowance_percent / 100)`, boards of the
/// largest size present are added, as few as meet the target. With no boards
/// nothing is padded.
pub fn summarize_purchase(
    boards: &[Board],
    required_total_in: f64,
    waste_allowance_percent: f64,
) -> PurchaseSummary {
    let mut counts: Vec<SizeCount> = Vec::new();
    let mut total_purchased_in = 0.0;

    for board in boards {
        total_purchased_in += board.size_in;
        add_boards(&mut counts, board.size_in, 1);
    }

    let target_in = required_total_in * (1.0 + waste_allowance_percent / 100.0);

    let largest = boards.iter().map(|b| b.size_in).reduce(f64::max);
    if let Some(largest) = largest.filter(|&l| l > 0.0) {
        let deficit_in = target_in - total_purchased_in;
        if deficit_in > 0.0 {
            let mut padded = (deficit_in / largest).ceil() as usize;
            // ceil can land one ulp short of the target
            if total_purchased_in + largest * (padded as f64) < target_in {
                padded = padded.saturating_add(1);
            }
            total_purchased_in += largest * padded as f64;
            add_boards(&mut counts, largest, padded);
            tracing::debug!(
                "Padded purchase with {} extra {}in board(s) to reach {:.3}in",
                padded,
                largest,
                target_in
            );
        }
    }

    counts.sort_by(|a, b| a.size_in.total_cmp(&b.size_in));

    let total_waste_in = total_purchased_in - required_total_in;
    let waste_percent = if required_total_in == 0.0 {
        0.0
    } else {
        total_waste_in / required_total_in * 100.0
    };

    PurchaseSummary {
        counts_by_size: counts,
        total_purchased_in,
        total_waste_in,
        waste_percent,
    }
}

fn add_boards(counts: &mut Vec<SizeCount>, size_in: f64, count: usize) {
    match counts
        .iter_mut()
        .find(|c| float_cmp::approx_eq(c.size_in, size_in))
    {
        Some(entry) => entry.count += count,
        None => counts.push(SizeCount { size_in, count }),
    }
}
