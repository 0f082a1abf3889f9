use leptos::*;
use shared::numeric::StepperConfig;
use shared::prescription::{addition_config, axis_config, cylinder_config, sphere_config};

use crate::components::NumberStepper;

#[component]
pub fn StepperPage() -> impl IntoView {
    let sphere = create_rw_signal(String::new());
    let cylinder = create_rw_signal("-0.50".to_string());
    let axis = create_rw_signal(String::new());
    let addition = create_rw_signal(String::new());
    let pupillary = create_rw_signal(String::new());
    let last_change = create_rw_signal(Option::<String>::None);

    let on_change = Callback::new(move |value: String| last_change.set(Some(value)));

    view! {
        <div class="dashboard-header">
            <h1 class="dashboard-title">"Number stepper"</h1>
        </div>

        <div class="card">
            <h3 class="card-title">"Prescription fields"</h3>
            <NumberStepper value=sphere config=sphere_config() label="Sphere" unit="D" on_change=on_change />
            <NumberStepper value=cylinder config=cylinder_config() label="Cylinder" unit="D" on_change=on_change />
            <NumberStepper value=axis config=axis_config() label="Axis" unit="°" on_change=on_change />
            <NumberStepper value=addition config=addition_config() label="Addition" unit="D" on_change=on_change />
        </div>

        <div class="card">
            <h3 class="card-title">"Required with bounds"</h3>
            <NumberStepper
                value=pupillary
                config=StepperConfig::new().with_bounds(50.0, 75.0).with_step(0.5).required()
                label="Pupillary distance"
                unit="mm"
                on_change=on_change
            />
        </div>

        <p class="form-hint">
            "Last stored value: "
            {move || last_change.get().unwrap_or_else(|| "—".to_string())}
        </p>
    }
}
