//! Report generation module.

mod text;

pub use text::MaterialsReport;
