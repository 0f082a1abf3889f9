use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Step used when the caller does not supply one.
pub const DEFAULT_STEP: f64 = 0.01;

/// Least-negative limit assumed for always-negative fields without a `max`.
pub const DEFAULT_NEGATIVE_MAX: f64 = -0.25;

/// Most-negative limit assumed for always-negative fields without a `min`.
pub const DEFAULT_NEGATIVE_MIN: f64 = -10.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid stepper configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("minimum {min} is greater than maximum {max}")]
    InvertedBounds { min: f64, max: f64 },
    #[error("step must be a positive finite number, got {0}")]
    InvalidStep(f64),
}

/// Behaviour of a numeric stepper field.
///
/// The configuration is immutable per call: every engine operation takes it
/// by reference and never stores it. Bounds that are `None` are not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StepperConfig {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: f64,
    pub integer_only: bool,
    /// Values are stored and displayed as negative magnitudes. Bounds keep
    /// their ordinary meaning (`min` is the most negative limit); see
    /// [`to_absolute_bounds`].
    pub always_negative: bool,
    pub show_sign: bool,
    pub use_min_as_default: bool,
    pub default_to_zero: bool,
    pub required: bool,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            step: DEFAULT_STEP,
            integer_only: false,
            always_negative: false,
            show_sign: false,
            use_min_as_default: false,
            default_to_zero: false,
            required: false,
        }
    }
}

impl StepperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_bounds(self, min: f64, max: f64) -> Self {
        self.with_min(min).with_max(max)
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn integer_only(mut self) -> Self {
        self.integer_only = true;
        self
    }

    pub fn always_negative(mut self) -> Self {
        self.always_negative = true;
        self
    }

    pub fn show_sign(mut self) -> Self {
        self.show_sign = true;
        self
    }

    pub fn use_min_as_default(mut self) -> Self {
        self.use_min_as_default = true;
        self
    }

    pub fn default_to_zero(mut self) -> Self {
        self.default_to_zero = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: StepperConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the assumptions the engine relies on but never enforces itself.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::InvalidStep(self.step));
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(ConfigError::InvertedBounds { min, max });
            }
        }
        Ok(())
    }

    /// Number of decimals used by the formatter.
    pub fn decimals(&self) -> u32 {
        if self.integer_only {
            0
        } else {
            2
        }
    }

    /// Absolute-space bounds of an always-negative field.
    pub fn absolute_bounds(&self) -> (f64, f64) {
        to_absolute_bounds(self.min, self.max)
    }
}

/// Reinterpret the ordinary bounds of an always-negative field as magnitude bounds.
///
/// The least-negative limit is passed as `max`, so it becomes the smallest
/// magnitude: `abs_min = |max|` and `abs_max = |min|`. Missing bounds fall back
/// to [`DEFAULT_NEGATIVE_MAX`] and [`DEFAULT_NEGATIVE_MIN`].
pub fn to_absolute_bounds(min: Option<f64>, max: Option<f64>) -> (f64, f64) {
    let abs_min = max.unwrap_or(DEFAULT_NEGATIVE_MAX).abs();
    let abs_max = min.unwrap_or(DEFAULT_NEGATIVE_MIN).abs();
    (abs_min, abs_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = StepperConfig::default();
        assert_eq!(config.step, 0.01);
        assert_eq!(config.min, None);
        assert_eq!(config.max, None);
        assert!(!config.integer_only);
        assert_eq!(config.decimals(), 2);
    }

    #[test]
    fn test_builder_chain() {
        let config = StepperConfig::new()
            .with_bounds(-10.0, -0.25)
            .with_step(0.25)
            .always_negative()
            .required();
        assert_eq!(config.min, Some(-10.0));
        assert_eq!(config.max, Some(-0.25));
        assert_eq!(config.step, 0.25);
        assert!(config.always_negative);
        assert!(config.required);
    }

    #[test]
    fn test_absolute_bounds_swap_min_and_max() {
        assert_eq!(to_absolute_bounds(Some(-6.0), Some(-0.5)), (0.5, 6.0));
    }

    #[test]
    fn test_absolute_bounds_defaults() {
        assert_eq!(to_absolute_bounds(None, None), (0.25, 10.0));
        assert_eq!(to_absolute_bounds(Some(-4.0), None), (0.25, 4.0));
    }

    #[test]
    fn test_from_json_camel_case_and_defaults() {
        let config = StepperConfig::from_json(
            r#"{"min": 0, "max": 180, "step": 1, "integerOnly": true}"#,
        )
        .unwrap();
        assert_eq!(config.min, Some(0.0));
        assert_eq!(config.max, Some(180.0));
        assert!(config.integer_only);
        assert!(!config.show_sign);
    }

    #[test]
    fn test_from_json_missing_step_uses_default() {
        let config = StepperConfig::from_json(r#"{"required": true}"#).unwrap();
        assert_eq!(config.step, DEFAULT_STEP);
        assert!(config.required);
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let err = StepperConfig::new().with_bounds(5.0, 1.0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvertedBounds { .. }));
        assert_eq!(err.to_string(), "minimum 5 is greater than maximum 1");
    }

    #[test]
    fn test_validate_rejects_bad_step() {
        assert!(matches!(
            StepperConfig::new().with_step(0.0).validate(),
            Err(ConfigError::InvalidStep(_))
        ));
        assert!(matches!(
            StepperConfig::new().with_step(f64::NAN).validate(),
            Err(ConfigError::InvalidStep(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            StepperConfig::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
