//! JSON job file parser.
//!
//! A job file holds a settings block and a table of openings, the same data
//! the planner's input form collects. Missing numeric settings default to 0
//! (return thickness to 0.75in), blank names become "Opening N", and rows
//! without a positive width and height are skipped.

use serde::Deserialize;
use std::path::Path;

use crate::config::{
    board_lengths_from_feet, parse_board_lengths, Settings, DEFAULT_RETURN_THICKNESS_IN,
};
use crate::error::{PlanError, Result};
use crate::model::{Opening, OpeningType, WallType};

/// Stock lengths in feet, either as numbers or comma-separated text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BoardLengthsFt {
    List(Vec<f64>),
    Text(String),
}

impl Default for BoardLengthsFt {
    fn default() -> Self {
        BoardLengthsFt::List(Vec::new())
    }
}

impl BoardLengthsFt {
    /// Ascending inch lengths.
    pub fn to_inches(&self) -> Vec<f64> {
        match self {
            BoardLengthsFt::List(feet) => board_lengths_from_feet(feet),
            BoardLengthsFt::Text(text) => parse_board_lengths(text),
        }
    }
}

/// Settings block as written in a job file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SettingsRecord {
    pub interior_trim_width_in: f64,
    pub exterior_trim_width_in: f64,
    pub top_overhang_in: f64,
    pub bottom_overhang_in: f64,
    pub head_angle_degrees: f64,
    pub return_thickness_in: f64,
    pub waste_allowance_percent: f64,
    pub kerf_in: f64,
    pub interior_board_lengths_ft: BoardLengthsFt,
    pub exterior_board_lengths_ft: BoardLengthsFt,
    pub exterior_sheet_good: bool,
}

impl Default for SettingsRecord {
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
            interior_board_lengths_ft: BoardLengthsFt::default(),
            exterior_board_lengths_ft: BoardLengthsFt::default(),
            exterior_sheet_good: false,
        }
    }
}

impl SettingsRecord {
    /// Resolve into inch-based settings.
    pub fn into_settings(self) -> Settings {
        let mut settings = Settings {
            interior_trim_width_in: self.interior_trim_width_in,
            exterior_trim_width_in: self.exterior_trim_width_in,
            top_overhang_in: self.top_overhang_in,
            bottom_overhang_in: self.bottom_overhang_in,
            head_angle_degrees: self.head_angle_degrees,
            return_thickness_in: self.return_thickness_in,
            waste_allowance_percent: self.waste_allowance_percent,
            kerf_in: self.kerf_in,
            board_lengths_interior_in: self.interior_board_lengths_ft.to_inches(),
            board_lengths_exterior_in: self.exterior_board_lengths_ft.to_inches(),
            exterior_sheet_good: false,
        };
        if self.exterior_sheet_good {
            settings = settings.with_exterior_sheet_good();
        }
        settings
    }
}

/// One row of the openings table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OpeningRecord {
    pub name: Option<String>,
    #[serde(rename = "type", alias = "opening_type")]
    pub opening_type: OpeningType,
    pub width_in: Option<f64>,
    pub height_in: Option<f64>,
    #[serde(alias = "wall_type")]
    pub wall: WallType,
    pub interior: Option<bool>,
    pub exterior: Option<bool>,
}

impl OpeningRecord {
    /// Resolve the row at `idx`, or `None` when it has no usable size.
    pub fn into_opening(self, idx: usize) -> Option<Opening> {
        let width_in = self.width_in.unwrap_or(0.0);
        let height_in = self.height_in.unwrap_or(0.0);
        if !(width_in > 0.0 && height_in > 0.0) {
            return None;
        }

        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Opening {}", idx + 1));

        let interior = self.interior.unwrap_or(true);
        let exterior = self
            .exterior
            .unwrap_or_else(|| self.opening_type.default_exterior());

        Some(
            Opening::new(idx, name, self.opening_type, width_in, height_in)
                .with_wall(self.wall)
                .with_sides(interior, exterior),
        )
    }
}

/// Raw job file layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobRecord {
    pub settings: SettingsRecord,
    pub openings: Vec<OpeningRecord>,
}

/// A resolved planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    /// Openings with a usable size, keeping their row index as id.
    pub openings: Vec<Opening>,
    /// Resolved settings.
    pub settings: Settings,
    /// Rows dropped for a missing or non-positive size (1-based).
    pub skipped_rows: Vec<usize>,
}

impl Job {
    /// Resolve a raw record.
    pub fn from_record(record: JobRecord) -> Result<Self> {
        let settings = record.settings.into_settings();
        let mut openings = Vec::new();
        let mut skipped_rows = Vec::new();

        for (idx, row) in record.openings.into_iter().enumerate() {
            match row.into_opening(idx) {
                Some(opening) => openings.push(opening),
                None => {
                    tracing::warn!("Opening row {} has no width or height; skipped", idx + 1);
                    skipped_rows.push(idx + 1);
                }
            }
        }

        if openings.is_empty() {
            return Err(PlanError::NoOpenings);
        }

        Ok(Self {
            openings,
            settings,
            skipped_rows,
        })
    }
}

/// Parse a job from JSON text.
pub fn parse_job_str(content: &str) -> Result<Job> {
    let record: JobRecord = serde_json::from_str(content).map_err(|e| PlanError::ParseError {
        line: e.line(),
        message: e.to_string(),
    })?;
    Job::from_record(record)
}

/// Parse a job file from disk.
pub fn parse_job_file(path: &Path) -> Result<Job> {
    if !path.exists() {
        return Err(PlanError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(PlanError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let job = parse_job_str(&content)?;
    tracing::debug!(
        "Loaded {} opening(s) from {}",
        job.openings.len(),
        path.display()
    );
    Ok(job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SHEET_GOOD_LENGTH_IN;
    use pretty_assertions::assert_eq;

    // ==================== Settings tests ====================

    #[test]
    fn test_settings_defaults() {
        let job = parse_job_str(r#"{"openings": [{"width_in": 30, "height_in": 40}]}"#).unwrap();
        assert_eq!(job.settings.interior_trim_width_in, 0.0);
        assert_eq!(job.settings.return_thickness_in, 0.75);
        assert!(job.settings.board_lengths_interior_in.is_empty());
    }

    #[test]
    fn test_board_lengths_text_and_list() {
        let job = parse_job_str(
            r#"{
                "settings": {
                    "interior_board_lengths_ft": "12, 8, x, 10",
                    "exterior_board_lengths_ft": [16, 12]
                },
                "openings": [{"width_in": 30, "height_in": 40}]
            }"#,
        )
        .unwrap();
        assert_eq!(job.settings.board_lengths_interior_in, vec![96.0, 120.0, 144.0]);
        assert_eq!(job.settings.board_lengths_exterior_in, vec![144.0, 192.0]);
    }

    #[test]
    fn test_sheet_good_overrides_exterior_lengths() {
        let job = parse_job_str(
            r#"{
                "settings": {
                    "exterior_board_lengths_ft": [8, 16],
                    "exterior_sheet_good": true
                },
                "openings": [{"width_in": 30, "height_in": 40}]
            }"#,
        )
        .unwrap();
        assert_eq!(job.settings.board_lengths_exterior_in, vec![SHEET_GOOD_LENGTH_IN]);
        assert!(job.settings.exterior_sheet_good);
    }

    // ==================== Opening tests ====================

    #[test]
    fn test_default_names_and_sides() {
        let job = parse_job_str(
            r#"{"openings": [
                {"type": "window", "width_in": 30, "height_in": 40},
                {"name": "  ", "type": "interiorDoor", "width_in": 32, "height_in": 80},
                {"name": "Front", "type": "exteriorDoor", "width_in": 36, "height_in": 80, "wall": "2x6"}
            ]}"#,
        )
        .unwrap();

        let names: Vec<&str> = job.openings.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Opening 1", "Opening 2", "Front"]);

        assert!(job.openings[0].use_interior && job.openings[0].use_exterior);
        assert!(job.openings[1].use_interior && !job.openings[1].use_exterior);
        assert!(!job.openings[2].use_exterior);
        assert_eq!(job.openings[2].wall_type, WallType::TwoBySix);
    }

    #[test]
    fn test_explicit_sides_kept() {
        let job = parse_job_str(
            r#"{"openings": [
                {"type": "exteriorDoor", "width_in": 36, "height_in": 80, "interior": false, "exterior": true}
            ]}"#,
        )
        .unwrap();
        assert!(!job.openings[0].use_interior);
        assert!(job.openings[0].use_exterior);
    }

    #[test]
    fn test_rows_without_size_skipped() {
        let job = parse_job_str(
            r#"{"openings": [
                {"width_in": 0, "height_in": 40},
                {"width_in": 30},
                {"width_in": 30, "height_in": -5},
                {"width_in": 24, "height_in": 24}
            ]}"#,
        )
        .unwrap();
        assert_eq!(job.openings.len(), 1);
        assert_eq!(job.openings[0].id, 3);
        assert_eq!(job.openings[0].name, "Opening 4");
        assert_eq!(job.skipped_rows, vec![1, 2, 3]);
    }

    // ==================== Error tests ====================

    #[test]
    fn test_no_valid_openings() {
        let result = parse_job_str(r#"{"openings": [{"width_in": 0, "height_in": 0}]}"#);
        assert!(matches!(result, Err(PlanError::NoOpenings)));
    }

    #[test]
    fn test_bad_json_reports_line() {
        let result = parse_job_str("{\n\"openings\": [\n oops\n]}");
        match result {
            Err(PlanError::ParseError { line, .. }) => assert_eq!(line, 3),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_opening_type() {
        let result =
            parse_job_str(r#"{"openings": [{"type": "skylight", "width_in": 1, "height_in": 1}]}"#);
        assert!(matches!(result, Err(PlanError::ParseError { .. })));
    }

    #[test]
    fn test_file_not_found() {
        let result = parse_job_file(Path::new("/nonexistent/job.json"));
        assert!(matches!(result, Err(PlanError::FileNotFound { .. })));
    }

    #[test]
    fn test_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "  \n").unwrap();
        let result = parse_job_file(file.path());
        assert!(matches!(result, Err(PlanError::EmptyFile { .. })));
    }
}
