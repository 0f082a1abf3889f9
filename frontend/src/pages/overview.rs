use leptos::*;
use leptos_router::A;

use crate::app::SHOWCASE_ROUTES;

#[component]
pub fn Overview() -> impl IntoView {
    view! {
        <div class="dashboard-header">
            <h1 class="dashboard-title">"Components"</h1>
        </div>

        <div class="card">
            <p style="color: var(--text-muted);">
                "Form controls for optical practice software. Each page below renders one component family with sample data."
            </p>
            <ul class="overview-links">
                {SHOWCASE_ROUTES.iter().map(|(href, label)| view! {
                    <li><A href=*href>{*label}</A></li>
                }).collect_view()}
            </ul>
        </div>
    }
}
