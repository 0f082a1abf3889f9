use thiserror::Error;

use super::config::StepperConfig;
use super::value::{parse, parse_magnitude, ParsedValue};

/// Message a field shows next to its input. Derived from the raw text the
/// caller holds; the engine operations never produce it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeViolation {
    #[error("This field is required")]
    Required,
    #[error("Value must be at least {min}")]
    BelowMinimum { min: f64 },
    #[error("Value must be at most {max}")]
    AboveMaximum { max: f64 },
    #[error("Value must be between {min} and {max}")]
    OutOfRange { min: f64, max: f64 },
}

/// Compare the raw value against the field's bounds.
///
/// `touched` is owned by the rendering component: an untouched required
/// field is not reported as missing yet.
pub fn validate_range(
    value: &str,
    config: &StepperConfig,
    touched: bool,
) -> Result<(), RangeViolation> {
    if config.always_negative {
        return match parse_magnitude(value) {
            ParsedValue::Numeric(magnitude) => {
                let (abs_min, abs_max) = config.absolute_bounds();
                if magnitude < abs_min || magnitude > abs_max {
                    Err(RangeViolation::OutOfRange {
                        min: -abs_max,
                        max: -abs_min,
                    })
                } else {
                    Ok(())
                }
            }
            _ => missing(config, touched),
        };
    }

    let n = match parse(value) {
        ParsedValue::Numeric(n) => n,
        _ => return missing(config, touched),
    };

    match (config.min, config.max) {
        (Some(min), Some(max)) if n < min || n > max => {
            Err(RangeViolation::OutOfRange { min, max })
        }
        (Some(min), None) if n < min => Err(RangeViolation::BelowMinimum { min }),
        (None, Some(max)) if n > max => Err(RangeViolation::AboveMaximum { max }),
        _ => Ok(()),
    }
}

fn missing(config: &StepperConfig, touched: bool) -> Result<(), RangeViolation> {
    if config.required && touched {
        Err(RangeViolation::Required)
    } else {
        Ok(())
    }
}
