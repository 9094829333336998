//! Opening definition: one framed rough opening that needs trim.

use serde::{Deserialize, Serialize};

use crate::config::{WALL_DEPTH_2X4_IN, WALL_DEPTH_2X6_IN};

/// Kind of opening being trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpeningType {
    #[default]
    #[serde(alias = "Window")]
    Window,
    #[serde(alias = "interior_door", alias = "InteriorDoor")]
    InteriorDoor,
    #[serde(alias = "exterior_door", alias = "ExteriorDoor")]
    ExteriorDoor,
}

impl OpeningType {
    /// Check if this is a window.
    pub fn is_window(&self) -> bool {
        *self == OpeningType::Window
    }

    /// Check if this is either kind of door.
    pub fn is_door(&self) -> bool {
        matches!(self, OpeningType::InteriorDoor | OpeningType::ExteriorDoor)
    }

    /// Whether exterior trim is generated when a job does not say.
    pub fn default_exterior(&self) -> bool {
        self.is_window()
    }
}

impl std::fmt::Display for OpeningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpeningType::Window => write!(f, "window"),
            OpeningType::InteriorDoor => write!(f, "interior door"),
            OpeningType::ExteriorDoor => write!(f, "exterior door"),
        }
    }
}

/// Wall framing size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WallType {
    #[default]
    #[serde(rename = "2x4")]
    TwoByFour,
    #[serde(rename = "2x6")]
    TwoBySix,
}

impl WallType {
    /// Framed wall depth in inches.
    ///
    /// Kept for jamb-extension work; piece lengths do not depend on it.
    pub fn depth_in(&self) -> f64 {
        match self {
            WallType::TwoByFour => WALL_DEPTH_2X4_IN,
            WallType::TwoBySix => WALL_DEPTH_2X6_IN,
        }
    }
}

impl std::fmt::Display for WallType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WallType::TwoByFour => write!(f, "2x4"),
            WallType::TwoBySix => write!(f, "2x6"),
        }
    }
}

/// A window or door opening with the sides to trim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    /// Identifier, unique within a request.
    pub id: usize,
    /// Display label.
    pub name: String,
    /// Window, interior door or exterior door.
    pub opening_type: OpeningType,
    /// Rough opening width (inches).
    pub width_in: f64,
    /// Rough opening height (inches).
    pub height_in: f64,
    /// Wall framing.
    pub wall_type: WallType,
    /// Generate interior pieces.
    pub use_interior: bool,
    /// Generate exterior pieces.
    pub use_exterior: bool,
}

impl Opening {
    /// Create an opening with both sides selected and a 2x4 wall.
    pub fn new(
        id: usize,
        name: impl Into<String>,
        opening_type: OpeningType,
        width_in: f64,
        height_in: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            opening_type,
            width_in,
            height_in,
            wall_type: WallType::default(),
            use_interior: true,
            use_exterior: true,
        }
    }

    /// Select which sides get trim.
    pub fn with_sides(mut self, interior: bool, exterior: bool) -> Self {
        self.use_interior = interior;
        self.use_exterior = exterior;
        self
    }

    /// Set the wall framing.
    pub fn with_wall(mut self, wall_type: WallType) -> Self {
        self.wall_type = wall_type;
        self
    }

    /// Check that both dimensions are positive.
    pub fn has_valid_size(&self) -> bool {
        self.width_in > 0.0 && self.height_in > 0.0
    }

    /// Framed wall depth behind this opening.
    pub fn wall_depth_in(&self) -> f64 {
        self.wall_type.depth_in()
    }
}
