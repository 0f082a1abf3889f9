use chrono::NaiveDate;
use leptos::*;
use shared::search::PatientSummary;
use uuid::Uuid;

use crate::components::PatientSearch;
use crate::utils::{age_on, today_in_tz};

fn sample_patients() -> Vec<PatientSummary> {
    [
        ("Jane", "Doe", (1980, 4, 2), "MRN-0042"),
        ("John", "Dorian", (1975, 11, 19), "MRN-0107"),
        ("Amira", "Haddad", (1992, 7, 30), "MRN-0311"),
        ("Lukas", "Schmidt", (1968, 1, 14), "MRN-0499"),
        ("Mei", "Lin", (2001, 9, 5), "MRN-0520"),
    ]
    .into_iter()
    .map(|(first, last, (y, m, d), reference)| PatientSummary {
        id: Uuid::new_v4(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(y, m, d),
        reference: Some(reference.to_string()),
    })
    .collect()
}

/// Case-insensitive match on name or reference. Stands in for a search service.
fn filter_patients(patients: &[PatientSummary], query: &str) -> Vec<PatientSummary> {
    let needle = query.to_lowercase();
    patients
        .iter()
        .filter(|p| {
            p.display_name().to_lowercase().contains(&needle)
                || format!("{} {}", p.first_name, p.last_name).to_lowercase().contains(&needle)
                || p.reference
                    .as_deref()
                    .is_some_and(|r| r.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[component]
pub fn PatientsPage() -> impl IntoView {
    let directory = store_value(sample_patients());
    let results = create_rw_signal(Vec::<PatientSummary>::new());
    let selected = create_rw_signal(Option::<PatientSummary>::None);
    let today = today_in_tz("UTC");

    let on_search = Callback::new(move |query: String| {
        let matches = directory.with_value(|all| filter_patients(all, &query));
        results.set(matches);
    });
    let on_select = Callback::new(move |patient: PatientSummary| selected.set(Some(patient)));

    view! {
        <div class="dashboard-header">
            <h1 class="dashboard-title">"Patient search"</h1>
        </div>

        <div class="card">
            <PatientSearch
                results=results
                on_search=on_search
                on_select=on_select
                label="Patient"
            />
            {move || selected.get().map(|patient| {
                let age = patient.date_of_birth.and_then(|dob| age_on(dob, today));
                view! {
                    <div class="selected-patient">
                        <strong>{patient.display_name()}</strong>
                        {age.map(|a| view! { <span class="form-hint">{format!(" ({a} years)")}</span> })}
                        {patient.secondary_line().map(|line| view! { <p class="form-hint">{line}</p> })}
                    </div>
                }
            })}
        </div>
    }
}
