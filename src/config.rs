//! Configuration constants and trim settings.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon (inches).
pub const EPS: f64 = 0.0001;

/// Conversion factor: feet to inches.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Return thickness used when none is entered.
pub const DEFAULT_RETURN_THICKNESS_IN: f64 = 0.75;

/// Fixed stock length of sheet-good exterior trim (12 ft).
pub const SHEET_GOOD_LENGTH_IN: f64 = 144.0;

/// Framed depth of a 2x4 wall.
pub const WALL_DEPTH_2X4_IN: f64 = 3.5;

/// Framed depth of a 2x6 wall.
pub const WALL_DEPTH_2X6_IN: f64 = 5.5;

/// Global trim configuration shared by every opening in a request.
///
/// All lengths are in inches. Stock lengths are ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Face width of interior casing.
    pub interior_trim_width_in: f64,
    /// Face width of exterior trim boards.
    pub exterior_trim_width_in: f64,
    /// Interior head casing overhang past each side casing.
    pub top_overhang_in: f64,
    /// Interior bottom casing overhang past each side casing.
    pub bottom_overhang_in: f64,
    /// Bevel angle of the head casing's outer edge (0 = square).
    pub head_angle_degrees: f64,
    /// Thickness used for boxed-return lengths.
    pub return_thickness_in: f64,
    /// Purchase padding above the exact required length, in percent.
    pub waste_allowance_percent: f64,
    /// Material lost per saw cut.
    pub kerf_in: f64,
    /// Purchasable interior stock lengths.
    pub board_lengths_interior_in: Vec<f64>,
    /// Purchasable exterior stock lengths.
    pub board_lengths_exterior_in: Vec<f64>,
    /// Exterior material only comes in one fixed length.
    pub exterior_sheet_good: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interior_trim_width_in: 0.0,
            exterior_trim_width_in: 0.0,
            top_overhang_in: 0.0,
            bottom_overhang_in: 0.0,
            head_angle_degrees: 0.0,
            return_thickness_in: DEFAULT_RETURN_THICKNESS_IN,
            waste_allowance_percent: 0.0,
            kerf_in: 0.0,
            board_lengths_interior_in: Vec::new(),
            board_lengths_exterior_in: Vec::new(),
            exterior_sheet_good: false,
        }
    }
}

impl Settings {
    /// Set interior stock lengths from foot values.
    pub fn with_interior_lengths_ft(mut self, feet: &[f64]) -> Self {
        self.board_lengths_interior_in = board_lengths_from_feet(feet);
        self
    }

    /// Set exterior stock lengths from foot values.
    ///
    /// Ignored while the sheet-good flag is set.
    pub fn with_exterior_lengths_ft(mut self, feet: &[f64]) -> Self {
        self.board_lengths_exterior_in = if self.exterior_sheet_good {
            vec![SHEET_GOOD_LENGTH_IN]
        } else {
            board_lengths_from_feet(feet)
        };
        self
    }

    /// Switch exterior material to fixed-length sheet good.
    pub fn with_exterior_sheet_good(mut self) -> Self {
        self.exterior_sheet_good = true;
        self.board_lengths_exterior_in = vec![SHEET_GOOD_LENGTH_IN];
        self
    }

    /// Label for the exterior material, as shown on the materials report.
    pub fn exterior_material_label(&self) -> &'static str {
        if self.exterior_sheet_good {
            "Sheet good (12 ft only)"
        } else {
            "Exterior trim boards"
        }
    }
}

/// Convert foot values into an ascending list of inch lengths.
///
/// Values that are not positive finite numbers are discarded.
pub fn board_lengths_from_feet(feet: &[f64]) -> Vec<f64> {
    let mut lengths: Vec<f64> = feet
        .iter()
        .copied()
        .filter(|v| v.is_finite() && *v > 0.0)
        .collect();
    lengths.sort_by(|a, b| a.total_cmp(b));
    lengths.into_iter().map(|ft| ft * INCHES_PER_FOOT).collect()
}

/// Parse comma-separated foot values ("8, 10, 12") into inch lengths.
///
/// Entries that do not parse are dropped, matching how a blank or mistyped
/// entry in the stock list is simply ignored.
pub fn parse_board_lengths(text: &str) -> Vec<f64> {
    let feet: Vec<f64> = text
        .split(',')
        .filter_map(|s| s.trim().parse::<f64>().ok())
        .collect();
    board_lengths_from_feet(&feet)
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }
}
