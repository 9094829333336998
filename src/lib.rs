//! trim-planner - Window and door trim cut lists with stock-board optimization.
//!
//! This library derives every casing, return and exterior trim piece an opening
//! needs, packs those pieces onto purchasable stock boards with saw-kerf loss,
//! and pads the purchase to cover a waste allowance.
//!
//! # Example
//!
//! ```
//! use trim_planner::{build_cut_plan, Opening, OpeningType, Settings};
//!
//! let settings = Settings {
//!     interior_trim_width_in: 2.5,
//!     kerf_in: 0.125,
//!     ..Default::default()
//! }
//! .with_interior_lengths_ft(&[8.0, 12.0]);
//!
//! let openings = vec![
//!     Opening::new(0, "Kitchen", OpeningType::Window, 36.0, 48.0).with_sides(true, false),
//! ];
//! let plan = build_cut_plan(&openings, &settings);
//! assert_eq!(plan.pieces.len(), 8);
//! assert!(plan.pieces.iter().all(|p| p.board.is_some()));
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod model;
pub mod optimize;
pub mod parser;
pub mod plan;
pub mod report;
pub mod validation;

// Re-exports for convenience
pub use config::Settings;
pub use error::{PlanError, Result};
pub use geometry::pieces_for_opening;
pub use model::{
    Board, BoardAssignment, BoardCut, Opening, OpeningType, Piece, PieceRole, PurchaseSummary,
    SizeCount, TrimSide, WallType,
};
pub use optimize::{optimize_boards, summarize_purchase};
pub use parser::{parse_job_file, parse_job_str, Job};
pub use plan::{build_cut_plan, BoardGroup, CutPlan};
pub use report::MaterialsReport;
pub use validation::{validate_plan, validate_request, ValidationResult};

/// Plan a job file end to end.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Parse the job file
/// 2. Validate settings and openings, logging warnings
/// 3. Generate pieces and optimize both board groups
/// 4. Log any oversize or unplaced pieces
///
/// Returns the resolved job alongside its plan so callers can render reports.
pub fn plan_job_file(input_path: &std::path::Path) -> Result<(Job, CutPlan)> {
    let job = parse_job_file(input_path)?;

    validate_request(&job.openings, &job.settings).into_result()?;

    let plan = build_cut_plan(&job.openings, &job.settings);
    validate_plan(&plan).into_result()?;

    Ok((job, plan))
}
