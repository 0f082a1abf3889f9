use leptos::*;
use leptos_router::*;

use crate::pages::{
    controls::ControlsPage, date_picker::DatePickerPage, overview::Overview,
    patients::PatientsPage, prescription::PrescriptionPage, stepper::StepperPage,
};

/// Showcase of the component library, one route per component family.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="container">
                <Routes>
                    <Route path="/" view=Overview />
                    <Route path="/stepper" view=StepperPage />
                    <Route path="/date-picker" view=DatePickerPage />
                    <Route path="/patients" view=PatientsPage />
                    <Route path="/prescription" view=PrescriptionPage />
                    <Route path="/controls" view=ControlsPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Routes listed in the navigation bar.
pub const SHOWCASE_ROUTES: &[(&str, &str)] = &[
    ("/stepper", "Stepper"),
    ("/date-picker", "Date picker"),
    ("/patients", "Patient search"),
    ("/prescription", "Prescription"),
    ("/controls", "Controls"),
];

#[component]
fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="container navbar-content">
                <A href="/" class="navbar-brand">"optic-ui"</A>
                <div class="navbar-links">
                    {SHOWCASE_ROUTES.iter().map(|(href, label)| view! {
                        <A href=*href active_class="active">{*label}</A>
                    }).collect_view()}
                </div>
            </div>
        </nav>
    }
}
