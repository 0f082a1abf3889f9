use std::time::Duration;

use chrono::NaiveDate;
use leptos::*;
use shared::prescription::{Eye, EyePrescription, Prescription};

use super::icon::{Icon, IconName};
use super::markdown::MarkdownView;
use crate::utils::today_in_tz;

/// How long the "Copied" confirmation stays visible.
const COPY_FEEDBACK: Duration = Duration::from_secs(2);

const MISSING: &str = "—";

/// Cells of one eye row: sphere, cylinder, axis, addition.
fn eye_cells(eye: &EyePrescription) -> [String; 4] {
    [
        eye.sphere_text(),
        eye.cylinder_text(),
        eye.axis_text(),
        eye.addition_text(),
    ]
    .map(|cell| cell.unwrap_or_else(|| MISSING.to_string()))
}

fn card_class(expired: bool) -> &'static str {
    if expired {
        "card prescription-card expired"
    } else {
        "card prescription-card"
    }
}

/// Read-only summary of a spectacle prescription.
#[component]
pub fn PrescriptionCard(
    prescription: Prescription,
    #[prop(optional, into)] patient_name: Option<String>,
    #[prop(optional)] today: Option<NaiveDate>,
    #[prop(optional, into)] timezone: Option<String>,
    #[prop(optional)] on_copy: Option<Callback<String>>,
) -> impl IntoView {
    let today = today.unwrap_or_else(|| today_in_tz(timezone.as_deref().unwrap_or("UTC")));
    let expired = prescription.is_expired(today);
    let summary = prescription.summary();
    let copied = create_rw_signal(false);

    let copy = move |_| {
        if let Some(callback) = on_copy {
            callback.call(summary.clone());
        }
        copied.set(true);
        set_timeout(move || copied.set(false), COPY_FEEDBACK);
    };

    let issued = prescription.issued_on.format("%d/%m/%Y").to_string();
    let expires = prescription
        .expires_on
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| MISSING.to_string());

    let rows = [Eye::Right, Eye::Left].map(|eye| {
        let cells = eye_cells(prescription.eye(eye));
        view! {
            <tr>
                <th scope="row">{eye.short_label()}</th>
                {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
            </tr>
        }
    });

    view! {
        <div class=card_class(expired)>
            <div class="card-header">
                <Icon name=IconName::Glasses />
                <h3 class="card-title">
                    {patient_name.unwrap_or_else(|| "Prescription".to_string())}
                </h3>
                {expired.then(|| view! { <span class="badge badge-danger">"Expired"</span> })}
                {on_copy.map(|_| view! {
                    <button type="button" class="btn btn-icon" title="Copy summary" on:click=copy>
                        {move || if copied.get() {
                            view! { <Icon name=IconName::Check /> <span>"Copied"</span> }.into_view()
                        } else {
                            view! { <Icon name=IconName::Copy /> }.into_view()
                        }}
                    </button>
                })}
            </div>
            <table class="prescription-table">
                <thead>
                    <tr>
                        <th></th>
                        <th scope="col">"Sph"</th>
                        <th scope="col">"Cyl"</th>
                        <th scope="col">"Axis"</th>
                        <th scope="col">"Add"</th>
                    </tr>
                </thead>
                <tbody>{rows.into_iter().collect_view()}</tbody>
            </table>
            <div class="prescription-dates">
                <span>"Issued " {issued}</span>
                <span>"Expires " {expires}</span>
            </div>
            {prescription.notes.filter(|n| !n.trim().is_empty()).map(|notes| view! {
                <MarkdownView content=notes />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_eye_cells_fill_missing_values() {
        let eye = EyePrescription {
            sphere: Some(-1.5),
            cylinder: Some(-0.75),
            axis: Some(5),
            addition: None,
        };
        assert_eq!(
            eye_cells(&eye),
            [
                "-1.50".to_string(),
                "-0.75".to_string(),
                "5°".to_string(),
                MISSING.to_string()
            ]
        );
    }

    #[wasm_bindgen_test]
    fn test_prescription_card_css_classes() {
        assert_eq!(card_class(false), "card prescription-card");
        assert_eq!(card_class(true), "card prescription-card expired");
    }
}
