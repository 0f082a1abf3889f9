use leptos::*;
use shared::prescription::Prescription;

use crate::components::PrescriptionCard;

const SAMPLE: &str = r#"{
    "id": "7f0c1a4e-2d8b-4c39-9a51-3e1f6b2c9d07",
    "patient_id": null,
    "issued_on": "2024-02-01",
    "expires_on": "2026-02-01",
    "right": {"sphere": 1.25, "cylinder": -0.5, "axis": 90, "addition": 2.0},
    "left": {"sphere": 0.75, "cylinder": -0.25, "axis": 85, "addition": 2.0},
    "notes": "**Varifocal**, anti-reflective coating.\n\nReview in two years."
}"#;

#[component]
pub fn PrescriptionPage() -> impl IntoView {
    let copied = create_rw_signal(Option::<String>::None);
    let on_copy = Callback::new(move |summary: String| copied.set(Some(summary)));

    let card = match Prescription::from_json(SAMPLE) {
        Ok(prescription) => view! {
            <PrescriptionCard
                prescription=prescription
                patient_name="Doe, Jane"
                timezone="Europe/Berlin"
                on_copy=on_copy
            />
        }
        .into_view(),
        Err(e) => {
            log::error!("sample prescription rejected: {}", e);
            view! { <div class="alert alert-error">{e.to_string()}</div> }.into_view()
        }
    };

    view! {
        <div class="dashboard-header">
            <h1 class="dashboard-title">"Prescription"</h1>
        </div>

        {card}

        {move || copied.get().map(|summary| view! {
            <pre class="card copied-summary">{summary}</pre>
        })}
    }
}
