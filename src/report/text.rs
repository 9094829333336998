//! Plain-text materials summary and cut sheets.

use std::fmt::{self, Write};

use crate::config::{Settings, INCHES_PER_FOOT};
use crate::model::{Board, Opening, Piece, TrimSide};
use crate::plan::{BoardGroup, CutPlan};

/// Printable report for a finished plan.
///
/// Lengths on the purchase tables are in feet; cut lengths are in inches
/// rounded to a tenth. Rounding happens here only.
pub struct MaterialsReport<'a> {
    plan: &'a CutPlan,
    openings: &'a [Opening],
    settings: &'a Settings,
}

impl<'a> MaterialsReport<'a> {
    /// Create a report over a plan and the openings it was built from.
    pub fn new(plan: &'a CutPlan, openings: &'a [Opening], settings: &'a Settings) -> Self {
        Self {
            plan,
            openings,
            settings,
        }
    }
}

impl fmt::Display for MaterialsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.plan.pieces.is_empty() {
            return writeln!(f, "No valid openings entered.");
        }

        writeln!(f, "MATERIALS SUMMARY")?;
        writeln!(f)?;

        for side in [TrimSide::Interior, TrimSide::Exterior] {
            if self.plan.pieces_on(side).next().is_none() {
                continue;
            }
            let label = if side == TrimSide::Exterior {
                Some(self.settings.exterior_material_label())
            } else {
                None
            };
            write_purchase(f, side, self.plan.group(side), label)?;
        }

        for side in [TrimSide::Interior, TrimSide::Exterior] {
            let group = self.plan.group(side);
            if !group.is_empty() {
                write_layouts(f, side, &group.boards)?;
            }
        }

        for opening in self.openings {
            let pieces: Vec<&Piece> = self.plan.pieces_for(opening.id).collect();
            if !pieces.is_empty() {
                write_cut_sheet(f, opening, &pieces)?;
            }
        }

        Ok(())
    }
}

fn capitalized(side: TrimSide) -> &'static str {
    match side {
        TrimSide::Interior => "Interior",
        TrimSide::Exterior => "Exterior",
    }
}

fn write_purchase(
    f: &mut impl Write,
    side: TrimSide,
    group: &BoardGroup,
    material: Option<&str>,
) -> fmt::Result {
    let summary = &group.summary;

    writeln!(f, "{} boards to purchase", capitalized(side))?;
    if let Some(material) = material {
        writeln!(f, "  {}", material)?;
    }
    writeln!(f, "  {:<18} {:>6} {:>10}", "Board length (ft)", "Count", "Total lf")?;
    for item in &summary.counts_by_size {
        writeln!(
            f,
            "  {:<18} {:>6} {:>10.1}",
            format!("{:.1}", item.size_in / INCHES_PER_FOOT),
            item.count,
            item.total_ft()
        )?;
    }
    writeln!(f)?;

    writeln!(f, "{} linear footage and allowance", capitalized(side))?;
    let rows = [
        ("Required total (lf)", group.required_in),
        ("Purchased total (lf)", summary.total_purchased_in),
        ("Extra over required (lf)", summary.total_waste_in),
    ];
    for (name, inches) in rows {
        writeln!(f, "  {:<26} {:>10.2}", name, inches / INCHES_PER_FOOT)?;
    }
    writeln!(
        f,
        "  {:<26} {:>9.1}%",
        "Extra over required (%)", summary.waste_percent
    )?;
    writeln!(f)
}

fn write_layouts(f: &mut impl Write, side: TrimSide, boards: &[Board]) -> fmt::Result {
    writeln!(f, "{} board cut layouts", capitalized(side))?;

    let mut sorted: Vec<&Board> = boards.iter().collect();
    sorted.sort_by(|a, b| a.size_in.total_cmp(&b.size_in));

    for board in sorted {
        let cuts: Vec<String> = board
            .cuts
            .iter()
            .map(|c| format!("#{} {:.1}\"", c.piece.piece_id, c.length_in))
            .collect();
        write!(
            f,
            "  {} board {} - {:.1} ft: {}",
            capitalized(side),
            board.number,
            board.size_ft(),
            cuts.join(", ")
        )?;
        if board.is_oversize() {
            writeln!(f, " | OVERSIZE by {:.1}\"", -board.leftover_in())?;
        } else {
            writeln!(f, " | offcut {:.1}\"", board.leftover_in().max(0.0))?;
        }
    }

    writeln!(f)
}

fn write_cut_sheet(f: &mut impl Write, opening: &Opening, pieces: &[&Piece]) -> fmt::Result {
    writeln!(f, "CUT SHEETS - {} ({})", opening.name, opening.opening_type)?;
    writeln!(
        f,
        "  Width: {}\" | Height: {}\" | Wall: {}",
        opening.width_in, opening.height_in, opening.wall_type
    )?;

    let interior_trim: Vec<&Piece> = pieces
        .iter()
        .copied()
        .filter(|p| p.side == TrimSide::Interior && p.role.is_casing())
        .collect();
    let interior_returns: Vec<&Piece> = pieces
        .iter()
        .copied()
        .filter(|p| p.side == TrimSide::Interior && p.role.is_return())
        .collect();
    let exterior_trim: Vec<&Piece> = pieces
        .iter()
        .copied()
        .filter(|p| p.side == TrimSide::Exterior)
        .collect();

    write_section(f, "Interior trim", &interior_trim)?;
    write_section(f, "Interior returns", &interior_returns)?;
    write_section(f, "Exterior trim", &exterior_trim)?;

    writeln!(f)
}

fn write_section(f: &mut impl Write, heading: &str, pieces: &[&Piece]) -> fmt::Result {
    if pieces.is_empty() {
        return Ok(());
    }

    writeln!(f, "  {}", heading)?;
    writeln!(
        f,
        "    {:<5} {:>7}  {:<9} {:<30} {:>11} {:>11}",
        "ID", "Board #", "Type", "Role", "Length (in)", "Length (ft)"
    )?;

    let mut sorted = pieces.to_vec();
    sorted.sort_by(|a, b| b.length_in.total_cmp(&a.length_in));

    for piece in sorted {
        let board = piece
            .board_number()
            .map(|n| n.to_string())
            .unwrap_or_default();
        writeln!(
            f,
            "    {:<5} {:>7}  {:<9} {:<30} {:>11.1} {:>11.2}",
            format!("#{}", piece.piece_id),
            board,
            piece.side.to_string(),
            piece.role_label(),
            piece.length_in,
            piece.length_ft()
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OpeningType;
    use crate::plan::build_cut_plan;

    fn settings() -> Settings {
        Settings {
            interior_trim_width_in: 2.5,
            exterior_trim_width_in: 3.5,
            top_overhang_in: 1.5,
            bottom_overhang_in: 1.5,
            kerf_in: 0.125,
            waste_allowance_percent: 10.0,
            ..Default::default()
        }
        .with_interior_lengths_ft(&[8.0, 12.0])
        .with_exterior_lengths_ft(&[12.0])
    }

    #[test]
    fn test_empty_plan() {
        let plan = CutPlan::default();
        let report = MaterialsReport::new(&plan, &[], &Settings::default()).to_string();
        assert_eq!(report, "No valid openings entered.\n");
    }

    #[test]
    fn test_report_sections() {
        let openings = vec![Opening::new(0, "Kitchen", OpeningType::Window, 36.0, 48.0)];
        let settings = settings();
        let plan = build_cut_plan(&openings, &settings);
        let report = MaterialsReport::new(&plan, &openings, &settings).to_string();

        assert!(report.contains("Interior boards to purchase"));
        assert!(report.contains("Exterior boards to purchase"));
        assert!(report.contains("Exterior trim boards"));
        assert!(report.contains("Interior board cut layouts"));
        assert!(report.contains("CUT SHEETS - Kitchen (window)"));
        assert!(report.contains("Width: 36\" | Height: 48\" | Wall: 2x4"));
        assert!(report.contains("Interior returns"));
        assert!(report.contains("side return left"));
    }

    #[test]
    fn test_report_skips_unused_side() {
        let openings = vec![
            Opening::new(0, "Hall", OpeningType::InteriorDoor, 32.0, 80.0).with_sides(true, false),
        ];
        let settings = settings();
        let plan = build_cut_plan(&openings, &settings);
        let report = MaterialsReport::new(&plan, &openings, &settings).to_string();

        assert!(!report.contains("Exterior boards to purchase"));
        assert!(!report.contains("Interior returns"));
        assert!(report.contains("head casing (2nd side)"));
        assert!(report.contains("CUT SHEETS - Hall (interior door)"));
    }

    #[test]
    fn test_oversize_flagged() {
        let openings = vec![
            Opening::new(0, "Tall", OpeningType::ExteriorDoor, 36.0, 150.0).with_sides(false, true),
        ];
        let settings = settings();
        let plan = build_cut_plan(&openings, &settings);
        let report = MaterialsReport::new(&plan, &openings, &settings).to_string();
        assert!(report.contains("OVERSIZE by 6.0\""));
    }

    #[test]
    fn test_sheet_good_label() {
        let openings = vec![Opening::new(0, "W", OpeningType::Window, 24.0, 24.0)];
        let settings = settings().with_exterior_sheet_good();
        let plan = build_cut_plan(&openings, &settings);
        let report = MaterialsReport::new(&plan, &openings, &settings).to_string();
        assert!(report.contains("Sheet good (12 ft only)"));
    }
}
