//! Value normalization and constraint engine behind the numeric stepper.
//!
//! Pure and synchronous: the caller owns the stored text and hands it back
//! on every call.

pub mod config;
pub mod format;
pub mod ops;
pub mod resolve;
pub mod validation;
pub mod value;

pub use config::{to_absolute_bounds, ConfigError, StepperConfig, DEFAULT_STEP};
pub use format::{format_for_display, format_for_storage};
pub use ops::{can_decrement, can_increment, decrement, increment, on_blur_commit, on_direct_input};
pub use resolve::resolve;
pub use validation::{validate_range, RangeViolation};
pub use value::{parse, parse_magnitude, Input, ParsedValue};
