//! Request and plan validation.

mod validate;

pub use validate::{
    validate_opening, validate_plan, validate_request, validate_settings,
    ValidationResult,
};
