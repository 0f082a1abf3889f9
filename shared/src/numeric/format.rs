use super::config::StepperConfig;
use super::value::{parse, ParsedValue};

/// Round half away from zero to `decimals` places and drop negative zero.
///
/// Values too large to scale are returned as they are; they carry no
/// fraction at that magnitude.
pub fn round_to(n: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = n * factor;
    if !scaled.is_finite() {
        return n;
    }
    let rounded = scaled.round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Canonical text handed to the caller's change handler and stored by it.
///
/// Integer-only fields carry no decimal point, all others exactly two
/// decimals. Always-negative fields are prefixed with `-` unconditionally,
/// so a zero magnitude renders as `"-0.00"`. Never adds a `+`.
pub fn format_for_storage(n: f64, config: &StepperConfig) -> String {
    let decimals = config.decimals();
    if config.always_negative {
        let magnitude = round_to(n.abs(), decimals);
        return format!("-{}", render(magnitude, decimals));
    }
    render(round_to(n, decimals), decimals)
}

/// Text shown in the input while it is not being edited.
///
/// Only differs from the stored text for `show_sign` fields holding a
/// strictly positive value, which gain a leading `+`.
pub fn format_for_display(stored: &str, config: &StepperConfig) -> String {
    if !config.show_sign || config.always_negative || stored.starts_with('+') {
        return stored.to_string();
    }
    match parse(stored) {
        ParsedValue::Numeric(n) if n > 0.0 => format!("+{}", stored.trim()),
        _ => stored.to_string(),
    }
}

fn render(value: f64, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, value)
}
