//! The four entry points of the stepper engine.
//!
//! Every operation takes the value the caller currently stores and the field
//! configuration, and returns the next value to store. Nothing is retained
//! between calls.

use super::config::StepperConfig;
use super::format::{format_for_storage, round_to};
use super::resolve::{resolve, seed, Direction};
use super::value::{parse, parse_magnitude, Input, ParsedValue};

/// Step the value up by `config.step`.
///
/// Returns `None` when the step would leave the allowed range; the caller
/// must then leave its value untouched. An empty value is seeded instead of
/// stepped, so the first press from blank yields `min` itself.
/// For always-negative fields "up" moves towards zero.
pub fn increment<'a>(value: impl Into<Input<'a>>, config: &StepperConfig) -> Option<String> {
    step(value.into(), Direction::Up, config)
}

/// Step the value down by `config.step`. Mirror image of [`increment`].
pub fn decrement<'a>(value: impl Into<Input<'a>>, config: &StepperConfig) -> Option<String> {
    step(value.into(), Direction::Down, config)
}

/// Whether the increment control should be enabled.
pub fn can_increment<'a>(value: impl Into<Input<'a>>, config: &StepperConfig) -> bool {
    increment(value, config).is_some()
}

/// Whether the decrement control should be enabled.
pub fn can_decrement<'a>(value: impl Into<Input<'a>>, config: &StepperConfig) -> bool {
    decrement(value, config).is_some()
}

/// Sanitize a keystroke-level edit without clamping or formatting it.
///
/// Blank text and a lone `-` pass through untouched as transient states.
/// `show_sign` fields lose a leading `+`; always-negative fields get exactly
/// one leading `-`.
pub fn on_direct_input(raw: &str, config: &StepperConfig) -> String {
    if raw.is_empty() || raw == "-" {
        return raw.to_string();
    }

    let text = if config.show_sign {
        raw.strip_prefix('+').unwrap_or(raw)
    } else {
        raw
    };

    if config.always_negative {
        let digits: String = text.chars().filter(|c| *c != '-' && *c != '+').collect();
        if digits.is_empty() {
            return "-".to_string();
        }
        return format!("-{digits}");
    }

    text.to_string()
}

/// Finalize a value when the field loses focus.
///
/// Complete values are clamped and rendered at canonical precision. A blank
/// field stays blank unless it is required (or uses min as default), in which
/// case it is seeded. Partial or unparseable text is always replaced by the
/// seed: the typed text is discarded without an error.
pub fn on_blur_commit<'a>(value: impl Into<Input<'a>>, config: &StepperConfig) -> String {
    let input = value.into();
    let parsed = parse_for(input, config);

    if let ParsedValue::Numeric(n) = parsed {
        let signed = if config.always_negative { -n } else { n };
        return format_for_storage(resolve(signed, config), config);
    }

    if is_blank(input) && !config.required && !config.use_min_as_default {
        return String::new();
    }

    let seeded = seed(Direction::Up, config);
    log::debug!("commit of {} seeded with {}", parsed, seeded);
    format_for_storage(resolve(seeded, config), config)
}

fn step(input: Input<'_>, direction: Direction, config: &StepperConfig) -> Option<String> {
    let current = match parse_for(input, config) {
        ParsedValue::Numeric(n) => n,
        _ => return Some(format_for_storage(seed(direction, config), config)),
    };

    let decimals = config.decimals();
    let next = if config.always_negative {
        let (abs_min, abs_max) = config.absolute_bounds();
        let magnitude = match direction {
            Direction::Up => round_to(current - config.step, decimals),
            Direction::Down => round_to(current + config.step, decimals),
        };
        let rejected = match direction {
            Direction::Up => magnitude < abs_min,
            Direction::Down => magnitude > abs_max,
        };
        if rejected {
            log::debug!(
                "{:?} step rejected: magnitude {} outside [{}, {}]",
                direction,
                magnitude,
                abs_min,
                abs_max
            );
            return None;
        }
        -magnitude
    } else {
        let next = match direction {
            Direction::Up => round_to(current + config.step, decimals),
            Direction::Down => round_to(current - config.step, decimals),
        };
        let rejected = match direction {
            Direction::Up => config.max.is_some_and(|max| next > max),
            Direction::Down => config.min.is_some_and(|min| next < min),
        };
        if rejected {
            log::debug!("{:?} step rejected: {} is out of range", direction, next);
            return None;
        }
        next
    };

    // A step finer than the field's precision rounds back to where it started.
    let before = if config.always_negative { -current } else { current };
    if next == before {
        log::debug!("{:?} step of {} does not move {}", direction, config.step, current);
        return None;
    }

    Some(format_for_storage(next, config))
}

fn parse_for(input: Input<'_>, config: &StepperConfig) -> ParsedValue {
    if config.always_negative {
        parse_magnitude(input)
    } else {
        parse(input)
    }
}

fn is_blank(input: Input<'_>) -> bool {
    match input {
        Input::Absent => true,
        Input::Number(_) => false,
        Input::Text(text) => {
            let text = text.trim();
            text.is_empty() || text == "-"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn steps_of_one() -> StepperConfig {
        StepperConfig::new().with_step(1.0)
    }

    #[test]
    fn test_increment_unbounded() {
        assert_eq!(increment("5", &steps_of_one()), Some("6.00".to_string()));
    }

    #[test]
    fn test_decrement_at_min_is_rejected() {
        let config = steps_of_one().with_min(0.0);
        assert_eq!(decrement("0", &config), None);
        assert!(!can_decrement("0", &config));
        assert!(can_increment("0", &config));
    }

    #[test]
    fn test_increment_at_max_is_rejected() {
        let config = steps_of_one().with_max(10.0);
        assert_eq!(increment("10", &config), None);
        assert_eq!(increment("9.50", &config), None);
        assert_eq!(increment("9", &config), Some("10.00".to_string()));
    }

    #[test]
    fn test_step_does_not_clamp_to_boundary() {
        let config = StepperConfig::new().with_step(0.25).with_bounds(0.0, 1.0);
        assert_eq!(increment("0.90", &config), None);
        assert_eq!(decrement("0.10", &config), None);
    }

    #[test]
    fn test_empty_seeds_from_bounds() {
        let config = steps_of_one().with_bounds(15.0, 25.0);
        assert_eq!(increment("", &config), Some("15.00".to_string()));
        assert_eq!(decrement("", &config), Some("25.00".to_string()));
        assert_eq!(increment("-", &config), Some("15.00".to_string()));
    }

    #[test]
    fn test_empty_seeds_zero_when_unbounded_or_default_to_zero() {
        assert_eq!(increment("", &steps_of_one()), Some("0.00".to_string()));
        assert_eq!(decrement("", &steps_of_one()), Some("0.00".to_string()));

        let config = steps_of_one().with_bounds(15.0, 25.0).default_to_zero();
        assert_eq!(increment("", &config), Some("0.00".to_string()));
    }

    #[test]
    fn test_always_negative_increment_moves_towards_zero() {
        let config = StepperConfig::new()
            .with_bounds(-10.0, -0.25)
            .with_step(0.25)
            .always_negative();
        assert_eq!(increment("-2.00", &config), Some("-1.75".to_string()));
        assert_eq!(decrement("-2.00", &config), Some("-2.25".to_string()));
    }

    #[test]
    fn test_always_negative_rejects_at_absolute_bounds() {
        let config = StepperConfig::new()
            .with_bounds(-10.0, -0.25)
            .with_step(0.25)
            .always_negative();
        assert_eq!(increment("-0.25", &config), None);
        assert_eq!(decrement("-10.00", &config), None);
        assert_eq!(increment("-0.50", &config), Some("-0.25".to_string()));
    }

    #[test]
    fn test_step_that_rounds_away_is_rejected() {
        let config = StepperConfig::new().integer_only();
        assert_eq!(increment("5", &config), None);
        assert_eq!(decrement("5", &config), None);
        assert!(!can_increment("5", &config));

        let negative = StepperConfig::new().always_negative().integer_only();
        assert_eq!(increment("-3", &negative), None);

        assert_eq!(increment("1e307", &StepperConfig::default()), None);
    }

    #[test]
    fn test_step_across_zero() {
        let config = steps_of_one();
        assert_eq!(decrement("0.5", &config), Some("-0.50".to_string()));
    }

    #[test]
    fn test_integer_only_increment() {
        let config = steps_of_one().integer_only();
        assert_eq!(increment("5", &config), Some("6".to_string()));
        assert_eq!(decrement("5", &config), Some("4".to_string()));
    }

    #[test]
    fn test_step_avoids_float_drift() {
        let config = StepperConfig::new().with_step(0.1);
        assert_eq!(increment("0.20", &config), Some("0.30".to_string()));
        assert_eq!(increment(0.2, &config), Some("0.30".to_string()));
    }

    #[test]
    fn test_direct_input_passthrough() {
        let config = StepperConfig::new().with_bounds(0.0, 100.0);
        assert_eq!(on_direct_input("150", &config), "150");
        assert_eq!(on_direct_input("0.", &config), "0.");
        assert_eq!(on_direct_input("", &config), "");
        assert_eq!(on_direct_input("-", &config), "-");
    }

    #[test]
    fn test_direct_input_strips_plus_for_show_sign() {
        let config = StepperConfig::new().show_sign();
        assert_eq!(on_direct_input("+1.25", &config), "1.25");
        assert_eq!(on_direct_input("-1.25", &config), "-1.25");
    }

    #[test]
    fn test_direct_input_forces_single_minus() {
        let config = StepperConfig::new().always_negative();
        assert_eq!(on_direct_input("2", &config), "-2");
        assert_eq!(on_direct_input("--2.5", &config), "-2.5");
        assert_eq!(on_direct_input("1-", &config), "-1");
        assert_eq!(on_direct_input("-", &config), "-");
    }

    #[test]
    fn test_commit_clamps() {
        let config = StepperConfig::new().with_bounds(0.0, 100.0);
        assert_eq!(on_blur_commit("150", &config), "100.00");
        assert_eq!(on_blur_commit("-5", &config), "0.00");
        assert_eq!(on_blur_commit("42.129", &config), "42.13");
    }

    #[test]
    fn test_commit_required_empty_seeds_min() {
        let config = StepperConfig::new().with_bounds(1.0, 100.0).required();
        assert_eq!(on_blur_commit("", &config), "1.00");
    }

    #[test]
    fn test_commit_optional_empty_stays_empty() {
        let config = StepperConfig::new().with_bounds(1.0, 100.0);
        assert_eq!(on_blur_commit("", &config), "");
        assert_eq!(on_blur_commit("-", &config), "");
        assert_eq!(on_blur_commit(Input::Absent, &config), "");
    }

    #[test]
    fn test_commit_use_min_as_default_seeds_empty() {
        let config = StepperConfig::new().with_min(3.0).use_min_as_default();
        assert_eq!(on_blur_commit("", &config), "3.00");
        assert_eq!(on_blur_commit("1", &config), "3.00");
    }

    #[test]
    fn test_commit_invalid_text_resets() {
        let bounded = StepperConfig::new().with_bounds(2.0, 8.0);
        assert_eq!(on_blur_commit("abc", &bounded), "2.00");
        assert_eq!(on_blur_commit(".", &bounded), "2.00");

        let unbounded = StepperConfig::new().integer_only();
        assert_eq!(on_blur_commit("abc", &unbounded), "0");
    }

    #[test]
    fn test_commit_default_to_zero_is_clamped() {
        let config = StepperConfig::new()
            .with_bounds(5.0, 10.0)
            .default_to_zero()
            .required();
        assert_eq!(on_blur_commit("", &config), "5.00");
    }

    #[test]
    fn test_commit_always_negative() {
        let config = StepperConfig::new()
            .with_bounds(-6.0, -0.25)
            .always_negative();
        assert_eq!(on_blur_commit("2", &config), "-2.00");
        assert_eq!(on_blur_commit("-9", &config), "-6.00");
        assert_eq!(on_blur_commit("0", &config), "-0.25");

        let reaching_zero = StepperConfig::new().with_bounds(-6.0, 0.0).always_negative();
        assert_eq!(on_blur_commit("0", &reaching_zero), "-0.00");
    }

    #[test]
    fn test_commit_reformats_numbers() {
        let config = StepperConfig::default();
        assert_eq!(on_blur_commit(3.0, &config), "3.00");
        assert_eq!(on_blur_commit("+1.5", &config), "1.50");
    }
}
