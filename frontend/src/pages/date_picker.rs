use chrono::{Months, NaiveDate};
use leptos::*;
use shared::calendar::DatePickerConfig;

use crate::components::DatePicker;
use crate::utils::today_in_tz;

#[component]
pub fn DatePickerPage() -> impl IntoView {
    let today = today_in_tz("Europe/Berlin");
    let examination = create_rw_signal(Some(today));
    let recall = create_rw_signal(Option::<NaiveDate>::None);

    let recall_config = DatePickerConfig {
        min_date: Some(today),
        max_date: today.checked_add_months(Months::new(36)),
        ..Default::default()
    };

    view! {
        <div class="dashboard-header">
            <h1 class="dashboard-title">"Date picker"</h1>
        </div>

        <div class="card">
            <DatePicker value=examination label="Examination date" id="examination-date" timezone="Europe/Berlin" />
            <DatePicker
                value=recall
                config=recall_config
                label="Recall date"
                id="recall-date"
                timezone="Europe/Berlin"
            />
            <p class="form-hint">
                "Recall: "
                {move || recall.get().map(|d| d.format("%d %B %Y").to_string()).unwrap_or_else(|| "not set".to_string())}
            </p>
        </div>
    }
}
