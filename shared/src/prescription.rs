//! Spectacle prescription shown by the summary card.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::numeric::{
    format_for_display, format_for_storage, validate_range, RangeViolation, StepperConfig,
};

#[derive(Debug, Error)]
pub enum PrescriptionError {
    #[error("invalid prescription: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{eye} eye has an axis but no cylinder")]
    AxisWithoutCylinder { eye: Eye },
    #[error("{eye} eye {field}: {source}")]
    FieldOutOfRange {
        eye: Eye,
        field: &'static str,
        #[source]
        source: RangeViolation,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Eye {
    Right,
    Left,
}

impl Eye {
    /// Abbreviation used on prescriptions ("R" / "L").
    pub fn short_label(&self) -> &'static str {
        match self {
            Eye::Right => "R",
            Eye::Left => "L",
        }
    }
}

impl std::fmt::Display for Eye {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Eye::Right => write!(f, "right"),
            Eye::Left => write!(f, "left"),
        }
    }
}

/// Sphere power in dioptres, shown with an explicit sign.
pub fn sphere_config() -> StepperConfig {
    StepperConfig::new()
        .with_bounds(-20.0, 20.0)
        .with_step(0.25)
        .show_sign()
}

/// Cylinder power, always written as a negative value.
pub fn cylinder_config() -> StepperConfig {
    StepperConfig::new()
        .with_bounds(-10.0, -0.25)
        .with_step(0.25)
        .always_negative()
}

/// Cylinder axis in whole degrees.
pub fn axis_config() -> StepperConfig {
    StepperConfig::new()
        .with_bounds(0.0, 180.0)
        .with_step(1.0)
        .integer_only()
}

/// Near addition.
pub fn addition_config() -> StepperConfig {
    StepperConfig::new()
        .with_bounds(0.75, 3.5)
        .with_step(0.25)
        .show_sign()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EyePrescription {
    pub sphere: Option<f64>,
    pub cylinder: Option<f64>,
    pub axis: Option<u16>,
    pub addition: Option<f64>,
}

impl EyePrescription {
    pub fn sphere_text(&self) -> Option<String> {
        self.sphere.map(|v| display(v, &sphere_config()))
    }

    pub fn cylinder_text(&self) -> Option<String> {
        self.cylinder.map(|v| display(v, &cylinder_config()))
    }

    pub fn axis_text(&self) -> Option<String> {
        self.axis.map(|v| format!("{}°", display(f64::from(v), &axis_config())))
    }

    pub fn addition_text(&self) -> Option<String> {
        self.addition.map(|v| display(v, &addition_config()))
    }

    /// One-line form, e.g. `+1.25 / -0.50 × 90° Add +2.00`.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(sphere) = self.sphere_text() {
            parts.push(sphere);
        }
        if let Some(cylinder) = self.cylinder_text() {
            let with_axis = match self.axis_text() {
                Some(axis) => format!("{cylinder} × {axis}"),
                None => cylinder,
            };
            parts.push(with_axis);
        }
        let mut line = if parts.is_empty() {
            "—".to_string()
        } else {
            parts.join(" / ")
        };
        if let Some(addition) = self.addition_text() {
            line.push_str(&format!(" Add {addition}"));
        }
        line
    }

    fn validate(&self, eye: Eye) -> Result<(), PrescriptionError> {
        if self.axis.is_some() && self.cylinder.is_none() {
            return Err(PrescriptionError::AxisWithoutCylinder { eye });
        }
        let fields = [
            ("sphere", self.sphere, sphere_config()),
            ("cylinder", self.cylinder, cylinder_config()),
            ("axis", self.axis.map(f64::from), axis_config()),
            ("addition", self.addition, addition_config()),
        ];
        for (field, value, config) in fields {
            let Some(value) = value else { continue };
            let text = value.to_string();
            validate_range(&text, &config, true)
                .map_err(|source| PrescriptionError::FieldOutOfRange { eye, field, source })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: Uuid,
    pub patient_id: Option<Uuid>,
    pub issued_on: NaiveDate,
    pub expires_on: Option<NaiveDate>,
    #[serde(default)]
    pub right: EyePrescription,
    #[serde(default)]
    pub left: EyePrescription,
    /// Markdown.
    #[serde(default)]
    pub notes: Option<String>,
}

impl Prescription {
    pub fn from_json(json: &str) -> Result<Self, PrescriptionError> {
        let prescription: Prescription = serde_json::from_str(json)?;
        prescription.validate()?;
        Ok(prescription)
    }

    pub fn validate(&self) -> Result<(), PrescriptionError> {
        self.right.validate(Eye::Right)?;
        self.left.validate(Eye::Left)
    }

    pub fn eye(&self, eye: Eye) -> &EyePrescription {
        match eye {
            Eye::Right => &self.right,
            Eye::Left => &self.left,
        }
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires_on.is_some_and(|expires| expires < today)
    }

    /// Plain-text form used when copying the card.
    pub fn summary(&self) -> String {
        let mut lines: Vec<String> = [Eye::Right, Eye::Left]
            .iter()
            .map(|eye| format!("{}: {}", eye.short_label(), self.eye(*eye).summary()))
            .collect();
        let issued = self.issued_on.format("%d/%m/%Y");
        match self.expires_on {
            Some(expires) => lines.push(format!(
                "Issued {issued}, expires {}",
                expires.format("%d/%m/%Y")
            )),
            None => lines.push(format!("Issued {issued}")),
        }
        lines.join("\n")
    }
}

fn display(value: f64, config: &StepperConfig) -> String {
    format_for_display(&format_for_storage(value, config), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Prescription {
        Prescription {
            id: Uuid::new_v4(),
            patient_id: None,
            issued_on: date(2024, 2, 1),
            expires_on: Some(date(2026, 2, 1)),
            right: EyePrescription {
                sphere: Some(1.25),
                cylinder: Some(-0.5),
                axis: Some(90),
                addition: Some(2.0),
            },
            left: EyePrescription {
                sphere: Some(-0.75),
                ..Default::default()
            },
            notes: None,
        }
    }

    #[test]
    fn test_eye_summary_formats_through_engine() {
        let rx = sample();
        assert_eq!(rx.right.summary(), "+1.25 / -0.50 × 90° Add +2.00");
        assert_eq!(rx.left.summary(), "-0.75");
        assert_eq!(EyePrescription::default().summary(), "—");
    }

    #[test]
    fn test_cylinder_is_always_negative() {
        let eye = EyePrescription {
            cylinder: Some(0.75),
            ..Default::default()
        };
        assert_eq!(eye.cylinder_text(), Some("-0.75".to_string()));
    }

    #[test]
    fn test_full_summary() {
        assert_eq!(
            sample().summary(),
            "R: +1.25 / -0.50 × 90° Add +2.00\nL: -0.75\nIssued 01/02/2024, expires 01/02/2026"
        );
    }

    #[test]
    fn test_is_expired() {
        let rx = sample();
        assert!(!rx.is_expired(date(2026, 2, 1)));
        assert!(rx.is_expired(date(2026, 2, 2)));
    }

    #[test]
    fn test_validate_axis_without_cylinder() {
        let mut rx = sample();
        rx.left.axis = Some(45);
        let err = rx.validate().unwrap_err();
        assert_eq!(err.to_string(), "left eye has an axis but no cylinder");
    }

    #[test]
    fn test_validate_field_range() {
        let mut rx = sample();
        rx.right.sphere = Some(25.0);
        let err = rx.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "right eye sphere: Value must be between -20 and 20"
        );
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "id": "7f0c1a4e-2d8b-4c39-9a51-3e1f6b2c9d07",
            "patient_id": null,
            "issued_on": "2024-02-01",
            "expires_on": null,
            "right": {"sphere": -2.5, "cylinder": -1.0, "axis": 180},
            "notes": "Anti-reflective coating"
        }"#;
        let rx = Prescription::from_json(json).unwrap();
        assert_eq!(rx.right.summary(), "-2.50 / -1.00 × 180°");
        assert_eq!(rx.left, EyePrescription::default());
        assert!(!rx.is_expired(date(2030, 1, 1)));
    }

    #[test]
    fn test_from_json_rejects_out_of_range_axis() {
        let json = r#"{
            "id": "7f0c1a4e-2d8b-4c39-9a51-3e1f6b2c9d07",
            "patient_id": null,
            "issued_on": "2024-02-01",
            "expires_on": null,
            "left": {"cylinder": -1.0, "axis": 200}
        }"#;
        assert!(matches!(
            Prescription::from_json(json),
            Err(PrescriptionError::FieldOutOfRange { field: "axis", .. })
        ));
    }
}
