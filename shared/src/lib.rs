//! UI-agnostic logic behind the optic-ui components.
//!
//! Nothing here touches the DOM: the frontend crate renders these types and
//! feeds user events back into them.

pub mod calendar;
pub mod navigation;
pub mod numeric;
pub mod prescription;
pub mod search;
