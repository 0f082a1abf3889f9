//! Patient search combobox: query normalization and result types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inactivity before a typed query is sent to the caller's search handler.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Queries shorter than this are not searched.
pub const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub reference: Option<String>,
}

impl PatientSummary {
    /// "Last, First", or whichever part is present.
    pub fn display_name(&self) -> String {
        match (self.last_name.trim(), self.first_name.trim()) {
            ("", first) => first.to_string(),
            (last, "") => last.to_string(),
            (last, first) => format!("{last}, {first}"),
        }
    }

    /// Date of birth and reference, separated by a bullet.
    pub fn secondary_line(&self) -> Option<String> {
        let parts: Vec<String> = self
            .date_of_birth
            .map(|dob| dob.format("%d/%m/%Y").to_string())
            .into_iter()
            .chain(self.reference.clone().filter(|r| !r.trim().is_empty()))
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" • "))
        }
    }
}

/// Trim and collapse whitespace; `None` when the query is too short to search.
pub fn normalize_query(text: &str) -> Option<String> {
    let query = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if query.chars().count() < MIN_QUERY_LEN {
        None
    } else {
        Some(query)
    }
}
