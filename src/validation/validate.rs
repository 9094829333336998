//! Validation of planning requests and finished plans.

use crate::config::Settings;
use crate::error::{PlanError, Result};
use crate::model::{Opening, TrimSide};
use crate::plan::CutPlan;

/// Findings from checking a request or a finished plan.
///
/// Errors block planning; warnings are only reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// Problems that make the request unplannable.
    pub errors: Vec<String>,
    /// Problems worth reporting that do not stop planning.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// No errors were found.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    fn reject(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Log every warning, then fail with all errors joined if there are any.
    pub fn into_result(self) -> Result<Vec<String>> {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
        if self.passed() {
            Ok(self.warnings)
        } else {
            Err(PlanError::Validation(self.errors.join("; ")))
        }
    }
}

impl Extend<ValidationResult> for ValidationResult {
    fn extend<I: IntoIterator<Item = ValidationResult>>(&mut self, iter: I) {
        for other in iter {
            self.errors.extend(other.errors);
            self.warnings.extend(other.warnings);
        }
    }
}

/// Validate settings and openings before planning.
pub fn validate_request(openings: &[Opening], settings: &Settings) -> ValidationResult {
    let mut result = validate_settings(settings);

    result.extend(openings.iter().map(validate_opening));

    let wants_interior = openings.iter().any(|o| o.use_interior);
    let wants_exterior = openings.iter().any(|o| o.use_exterior);

    if wants_interior && settings.board_lengths_interior_in.is_empty() {
        result.warn("No interior board lengths; interior pieces will not be placed");
    }
    if wants_exterior && settings.board_lengths_exterior_in.is_empty() {
        result.warn("No exterior board lengths; exterior pieces will not be placed");
    }

    result
}

/// Validate the shared trim settings.
pub fn validate_settings(settings: &Settings) -> ValidationResult {
    let mut result = ValidationResult::default();

    let non_negative = [
        ("interior trim width", settings.interior_trim_width_in),
        ("exterior trim width", settings.exterior_trim_width_in),
        ("top overhang", settings.top_overhang_in),
        ("bottom overhang", settings.bottom_overhang_in),
        ("return thickness", settings.return_thickness_in),
        ("kerf", settings.kerf_in),
        ("waste allowance", settings.waste_allowance_percent),
    ];
    for (name, value) in non_negative {
        if !(value >= 0.0 && value.is_finite()) {
            result.reject(format!("Settings: {} must be zero or more (got {})", name, value));
        }
    }

    let angle = settings.head_angle_degrees;
    if !(0.0..90.0).contains(&angle) {
        result.reject(format!(
            "Settings: head angle must be at least 0 and below 90 degrees (got {})",
            angle
        ));
    }

    result
}

/// Validate a single opening.
pub fn validate_opening(opening: &Opening) -> ValidationResult {
    let mut result = ValidationResult::default();

    if !opening.has_valid_size() {
        result.reject(format!(
            "Opening '{}': Invalid dimensions ({}x{})",
            opening.name, opening.width_in, opening.height_in
        ));
    }

    if !opening.use_interior && !opening.use_exterior {
        result.warn(format!("Opening '{}': No trim side selected", opening.name));
    }

    result
}

/// Inspect a finished plan for pieces that did not fit any stock length.
pub fn validate_plan(plan: &CutPlan) -> ValidationResult {
    let mut result = ValidationResult::default();

    for side in [TrimSide::Interior, TrimSide::Exterior] {
        for board in plan.group(side).oversize_boards() {
            for cut in &board.cuts {
                result.warn(format!(
                    "{} board {}: piece #{} ({}, {}) is {:.2}in, longer than the {:.0}in stock",
                    side,
                    board.number,
                    cut.piece.piece_id,
                    cut.piece.opening_name,
                    cut.piece.role_label(),
                    cut.length_in,
                    board.size_in
                ));
            }
        }
    }

    let unplaced = plan.pieces.iter().filter(|p| p.board.is_none()).count();
    if unplaced > 0 {
        result.warn(format!("{} piece(s) were not placed on any board", unplaced));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OpeningType, Piece, PieceRole};
    use crate::optimize::optimize_boards;
    use crate::plan::{build_cut_plan, BoardGroup};

    fn settings() -> Settings {
        Settings {
            interior_trim_width_in: 2.5,
            exterior_trim_width_in: 3.5,
            kerf_in: 0.125,
            ..Default::default()
        }
        .with_interior_lengths_ft(&[8.0])
        .with_exterior_lengths_ft(&[8.0])
    }

    fn window() -> Opening {
        Opening::new(0, "W1", OpeningType::Window, 36.0, 48.0)
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_empty_result_passes() {
        let result = ValidationResult::default();
        assert!(result.passed());
        assert_eq!(result.into_result().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_extend_collects_openings() {
        let mut result = validate_settings(&settings());
        result.extend([
            validate_opening(&window().with_sides(false, false)),
            validate_opening(&Opening::new(1, "Bad", OpeningType::Window, -1.0, 48.0)),
        ]);
        assert!(!result.passed());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.errors.len(), 1);
    }

    // ==================== Request tests ====================

    #[test]
    fn test_valid_request() {
        let result = validate_request(&[window()], &settings());
        assert!(result.passed());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_negative_kerf() {
        let settings = Settings {
            kerf_in: -0.1,
            ..settings()
        };
        let result = validate_settings(&settings);
        assert!(!result.passed());
        assert!(result.errors.iter().any(|e| e.contains("kerf")));
    }

    #[test]
    fn test_head_angle_range() {
        for angle in [-1.0, 90.0, 120.0] {
            let settings = Settings {
                head_angle_degrees: angle,
                ..settings()
            };
            assert!(!validate_settings(&settings).passed(), "angle {}", angle);
        }
        let settings = Settings {
            head_angle_degrees: 15.0,
            ..settings()
        };
        assert!(validate_settings(&settings).passed());
    }

    #[test]
    fn test_invalid_opening_dimensions() {
        let opening = Opening::new(0, "Bad", OpeningType::Window, 0.0, 48.0);
        let result = validate_opening(&opening);
        assert!(!result.passed());
        assert!(result.errors[0].contains("Invalid dimensions"));
    }

    #[test]
    fn test_no_side_selected_warning() {
        let opening = window().with_sides(false, false);
        let result = validate_opening(&opening);
        assert!(result.passed());
        assert!(result.warnings[0].contains("No trim side"));
    }

    #[test]
    fn test_missing_stock_warning() {
        let settings = Settings {
            board_lengths_exterior_in: Vec::new(),
            ..settings()
        };
        let result = validate_request(&[window()], &settings);
        assert!(result.passed());
        assert!(result.warnings.iter().any(|w| w.contains("No exterior board lengths")));
    }

    #[test]
    fn test_missing_stock_ignored_when_side_unused() {
        let settings = Settings {
            board_lengths_exterior_in: Vec::new(),
            ..settings()
        };
        let result = validate_request(&[window().with_sides(true, false)], &settings);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_into_result_joins_errors() {
        let bad = Settings {
            waste_allowance_percent: -5.0,
            kerf_in: -0.1,
            ..settings()
        };
        match validate_request(&[window()], &bad).into_result() {
            Err(PlanError::Validation(message)) => {
                assert!(message.contains("kerf"));
                assert!(message.contains("waste allowance"));
                assert!(message.contains("; "));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    // ==================== Plan tests ====================

    #[test]
    fn test_plan_oversize_warning() {
        // 8 ft stock cannot hold a 100in door side
        let door =
            Opening::new(0, "Tall", OpeningType::ExteriorDoor, 36.0, 100.0).with_sides(true, false);
        let plan = build_cut_plan(&[door], &settings());
        let result = validate_plan(&plan);
        assert!(result.passed());
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].contains("longer than the 96in stock"));
    }

    #[test]
    fn test_plan_unplaced_warning() {
        let settings = Settings {
            board_lengths_interior_in: Vec::new(),
            ..settings()
        };
        let plan = build_cut_plan(&[window().with_sides(true, false)], &settings);
        let result = validate_plan(&plan);
        assert_eq!(result.warnings, vec!["8 piece(s) were not placed on any board"]);
    }

    #[test]
    fn test_plan_exact_fill_no_warning() {
        let pieces: Vec<Piece> = [53.1, 41.95, 24.7]
            .iter()
            .enumerate()
            .map(|(i, &len)| {
                let mut piece =
                    Piece::new(0, "W", TrimSide::Interior, PieceRole::HeadCasing, len);
                piece.piece_id = i + 1;
                piece
            })
            .collect();
        let plan = CutPlan {
            interior: BoardGroup {
                required_in: 119.75,
                boards: optimize_boards(&pieces, &[120.0], 0.125),
                summary: Default::default(),
            },
            ..Default::default()
        };

        let result = validate_plan(&plan);
        assert_eq!(plan.interior.boards.len(), 1);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }
}
