use super::config::StepperConfig;
use super::format::round_to;

/// Apply the field's bounds, sign convention and rounding to a complete value.
///
/// Used by blur-commit only; stepping rejects out-of-range moves instead of
/// clamping them.
pub fn resolve(n: f64, config: &StepperConfig) -> f64 {
    let decimals = config.decimals();
    let resolved = if config.always_negative {
        let (abs_min, abs_max) = config.absolute_bounds();
        let magnitude = clamp_defined(n.abs(), Some(abs_min), Some(abs_max));
        -round_within(magnitude, Some(abs_min), Some(abs_max), decimals)
    } else {
        let snapped = snap_to_min(clamp_defined(n, config.min, config.max), config);
        round_within(snapped, config.min, config.max, decimals)
    };

    if resolved != n {
        log::debug!("commit adjusted {} to {}", n, resolved);
    }
    resolved
}

/// Clamp against whichever bounds are defined.
///
/// The lower bound wins if the two cross, matching the order in which a user
/// would see the limits applied.
pub fn clamp_defined(n: f64, lower: Option<f64>, upper: Option<f64>) -> f64 {
    let mut value = n;
    if let Some(upper) = upper {
        if value > upper {
            value = upper;
        }
    }
    if let Some(lower) = lower {
        if value < lower {
            value = lower;
        }
    }
    value
}

/// Round a value already inside the bounds without leaving them.
///
/// A bound finer than the output precision (`0.125` at two decimals) can
/// round outward; the result then moves one unit back inside. When no
/// representable value lies within the bounds the rounded value is kept.
fn round_within(value: f64, lower: Option<f64>, upper: Option<f64>, decimals: u32) -> f64 {
    let unit = 10f64.powi(-(decimals as i32));
    let rounded = round_to(value, decimals);
    if upper.is_some_and(|upper| rounded > upper) {
        let inside = round_to(rounded - unit, decimals);
        if lower.map_or(true, |lower| inside >= lower) {
            return inside;
        }
    }
    if lower.is_some_and(|lower| rounded < lower) {
        let inside = round_to(rounded + unit, decimals);
        if upper.map_or(true, |upper| inside <= upper) {
            return inside;
        }
    }
    rounded
}

/// Use-min-as-default: a committed value still below `min` becomes `min`.
fn snap_to_min(value: f64, config: &StepperConfig) -> f64 {
    if !config.use_min_as_default || config.always_negative {
        return value;
    }
    match config.min {
        Some(min) if value < min => min,
        _ => value,
    }
}

/// Value a field starts from when it holds nothing usable.
///
/// `default_to_zero` wins; otherwise stepping up starts at `min` and stepping
/// down at `max`, each falling back to zero.
///
/// The seed is not clamped. An always-negative field without bounds seeds
/// zero, stored as `"-0.00"`, which lies outside its default magnitude range
/// and is reported by `validate_range` until the user steps or commits.
pub fn seed(direction: Direction, config: &StepperConfig) -> f64 {
    if config.default_to_zero {
        return 0.0;
    }
    let bound = match direction {
        Direction::Up => config.min,
        Direction::Down => config.max,
    };
    bound.unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clamps_to_defined_bounds() {
        let config = StepperConfig::new().with_bounds(0.0, 100.0);
        assert_eq!(resolve(150.0, &config), 100.0);
        assert_eq!(resolve(-3.0, &config), 0.0);
        assert_eq!(resolve(42.5, &config), 42.5);
    }

    #[test]
    fn test_missing_bound_is_not_enforced() {
        let only_min = StepperConfig::new().with_min(1.0);
        assert_eq!(resolve(1_000.0, &only_min), 1_000.0);
        assert_eq!(resolve(0.0, &only_min), 1.0);

        let only_max = StepperConfig::new().with_max(1.0);
        assert_eq!(resolve(-1_000.0, &only_max), -1_000.0);
    }

    #[test]
    fn test_always_negative_clamps_magnitude() {
        let config = StepperConfig::new().with_bounds(-6.0, -0.5).always_negative();
        assert_eq!(resolve(-8.0, &config), -6.0);
        assert_eq!(resolve(8.0, &config), -6.0);
        assert_eq!(resolve(-0.25, &config), -0.5);
        assert_eq!(resolve(2.0, &config), -2.0);
    }

    #[test]
    fn test_always_negative_default_bounds() {
        let config = StepperConfig::new().always_negative();
        assert_eq!(resolve(0.0, &config), -0.25);
        assert_eq!(resolve(-12.0, &config), -10.0);
    }

    #[test]
    fn test_integer_only_rounds_half_away_from_zero() {
        let config = StepperConfig::new().integer_only();
        assert_eq!(resolve(2.5, &config), 3.0);
        assert_eq!(resolve(-2.5, &config), -3.0);
        assert_eq!(resolve(2.4, &config), 2.0);
    }

    #[test]
    fn test_use_min_as_default_snaps_below_min() {
        let config = StepperConfig::new().with_min(1.0).use_min_as_default();
        assert_eq!(resolve(0.2, &config), 1.0);
        assert_eq!(resolve(3.0, &config), 3.0);
    }

    #[test]
    fn test_rounding_stays_inside_fine_bounds() {
        let config = StepperConfig::new().with_bounds(0.0, 0.125);
        assert_eq!(resolve(1.0, &config), 0.12);

        let lower = StepperConfig::new().with_bounds(0.125, 1.0);
        assert_eq!(resolve(0.0, &lower), 0.13);

        let negative = StepperConfig::new().with_bounds(-0.125, -0.005).always_negative();
        assert_eq!(resolve(-1.0, &negative), -0.12);
        assert_eq!(resolve(0.0, &negative), -0.01);
    }

    #[test]
    fn test_rounding_keeps_value_when_bounds_hold_no_step() {
        let config = StepperConfig::new().with_bounds(0.121, 0.124);
        assert_eq!(resolve(1.0, &config), 0.12);
    }

    #[test]
    fn test_seed_priority() {
        let bounded = StepperConfig::new().with_bounds(15.0, 25.0);
        assert_eq!(seed(Direction::Up, &bounded), 15.0);
        assert_eq!(seed(Direction::Down, &bounded), 25.0);

        let zero = bounded.clone().default_to_zero();
        assert_eq!(seed(Direction::Up, &zero), 0.0);
        assert_eq!(seed(Direction::Down, &zero), 0.0);

        let unbounded = StepperConfig::default();
        assert_eq!(seed(Direction::Up, &unbounded), 0.0);
        assert_eq!(seed(Direction::Down, &unbounded), 0.0);
    }
}
