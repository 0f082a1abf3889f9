pub mod timezone;

pub use timezone::{age_on, parse_timezone, today_in_tz};
