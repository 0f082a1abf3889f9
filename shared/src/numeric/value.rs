use std::fmt;

/// A field value as handed over by the caller: text from an input element,
/// or an already numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    Text(&'a str),
    Number(f64),
    Absent,
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text.as_str())
    }
}

impl From<f64> for Input<'_> {
    fn from(number: f64) -> Self {
        Input::Number(number)
    }
}

impl<'a, T> From<Option<T>> for Input<'a>
where
    T: Into<Input<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Input::Absent)
    }
}

/// Classification of a field value, normalized once at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    /// Nothing usable: blank, a lone sign, or text that cannot become a number.
    Empty,
    /// A prefix of a number that is not itself a number yet (`"."`, `"1e"`).
    Partial(String),
    Numeric(f64),
}

impl ParsedValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParsedValue::Numeric(n) => Some(*n),
            _ => None,
        }
    }

    /// Empty and partial values both fall back to seeded defaults.
    pub fn is_complete(&self) -> bool {
        matches!(self, ParsedValue::Numeric(_))
    }
}

impl fmt::Display for ParsedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedValue::Empty => write!(f, "empty"),
            ParsedValue::Partial(text) => write!(f, "partial({text})"),
            ParsedValue::Numeric(n) => write!(f, "{n}"),
        }
    }
}

/// Classify a caller value.
///
/// Unparseable text is reported as `Empty`, so committing `"abc"` behaves like
/// committing a blank field.
pub fn parse<'a>(input: impl Into<Input<'a>>) -> ParsedValue {
    let parsed = match input.into() {
        Input::Absent => ParsedValue::Empty,
        Input::Number(n) if n.is_finite() => ParsedValue::Numeric(n),
        Input::Number(_) => ParsedValue::Empty,
        Input::Text(text) => classify(text.trim()),
    };
    log::trace!("parsed value as {}", parsed);
    parsed
}

/// Classify a value of an always-negative field in magnitude space.
///
/// Every `-` is stripped before parsing; the sign is reapplied by the formatter.
pub fn parse_magnitude<'a>(input: impl Into<Input<'a>>) -> ParsedValue {
    match input.into() {
        Input::Text(text) => {
            let stripped: String = text.chars().filter(|c| *c != '-').collect();
            match parse(stripped.as_str()) {
                ParsedValue::Numeric(n) => ParsedValue::Numeric(n.abs()),
                other => other,
            }
        }
        other => match parse(other) {
            ParsedValue::Numeric(n) => ParsedValue::Numeric(n.abs()),
            other => other,
        },
    }
}

fn classify(text: &str) -> ParsedValue {
    if text.is_empty() || text == "-" || text == "+" {
        return ParsedValue::Empty;
    }
    if !is_plain_numeric(text) {
        return if is_numeric_prefix(text) {
            ParsedValue::Partial(text.to_string())
        } else {
            ParsedValue::Empty
        };
    }
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => ParsedValue::Numeric(n),
        _ if is_numeric_prefix(text) => ParsedValue::Partial(text.to_string()),
        _ => ParsedValue::Empty,
    }
}

/// Only digits, one sign, one point and an exponent: keeps `"inf"` and `"NaN"` out.
fn is_plain_numeric(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
}

fn is_sign(c: char) -> bool {
    c == '-' || c == '+'
}

/// True for text a user could still be typing towards a number.
fn is_numeric_prefix(text: &str) -> bool {
    let body = text.strip_prefix(is_sign).unwrap_or(text);
    let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
        Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
        None => (body, None),
    };

    let mut seen_point = false;
    for c in mantissa.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }

    match exponent {
        None => true,
        Some(exp) => {
            let has_digit = mantissa.chars().any(|c| c.is_ascii_digit());
            let digits = exp.strip_prefix(is_sign).unwrap_or(exp);
            has_digit && digits.chars().all(|c| c.is_ascii_digit())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_and_lone_minus_are_empty() {
        assert_eq!(parse(""), ParsedValue::Empty);
        assert_eq!(parse("   "), ParsedValue::Empty);
        assert_eq!(parse("-"), ParsedValue::Empty);
        assert_eq!(parse(Input::Absent), ParsedValue::Empty);
        assert_eq!(parse(None::<&str>), ParsedValue::Empty);
    }

    #[test]
    fn test_complete_numbers() {
        assert_eq!(parse("5"), ParsedValue::Numeric(5.0));
        assert_eq!(parse("-2.00"), ParsedValue::Numeric(-2.0));
        assert_eq!(parse("+1.25"), ParsedValue::Numeric(1.25));
        assert_eq!(parse(" 7 "), ParsedValue::Numeric(7.0));
        assert_eq!(parse("0."), ParsedValue::Numeric(0.0));
        assert_eq!(parse(".5"), ParsedValue::Numeric(0.5));
    }

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(parse(3.5), ParsedValue::Numeric(3.5));
        assert_eq!(parse(Some(-1.0)), ParsedValue::Numeric(-1.0));
        assert_eq!(parse(f64::NAN), ParsedValue::Empty);
        assert_eq!(parse(f64::INFINITY), ParsedValue::Empty);
    }

    #[test]
    fn test_partial_prefixes() {
        assert_eq!(parse("."), ParsedValue::Partial(".".to_string()));
        assert_eq!(parse("-."), ParsedValue::Partial("-.".to_string()));
        assert_eq!(parse("1e"), ParsedValue::Partial("1e".to_string()));
        assert_eq!(parse("1e-"), ParsedValue::Partial("1e-".to_string()));
    }

    #[test]
    fn test_invalid_text_is_empty() {
        assert_eq!(parse("abc"), ParsedValue::Empty);
        assert_eq!(parse("1.2.3"), ParsedValue::Empty);
        assert_eq!(parse("inf"), ParsedValue::Empty);
        assert_eq!(parse("NaN"), ParsedValue::Empty);
        assert_eq!(parse("--1"), ParsedValue::Empty);
    }

    #[test]
    fn test_magnitude_strips_every_minus() {
        assert_eq!(parse_magnitude("-2.00"), ParsedValue::Numeric(2.0));
        assert_eq!(parse_magnitude("--1.5"), ParsedValue::Numeric(1.5));
        assert_eq!(parse_magnitude("1-.5"), ParsedValue::Numeric(1.5));
        assert_eq!(parse_magnitude("-"), ParsedValue::Empty);
        assert_eq!(parse_magnitude(-0.75), ParsedValue::Numeric(0.75));
    }

    #[test]
    fn test_is_complete() {
        assert!(ParsedValue::Numeric(0.0).is_complete());
        assert!(!ParsedValue::Empty.is_complete());
        assert!(!ParsedValue::Partial(".".to_string()).is_complete());
    }
}
