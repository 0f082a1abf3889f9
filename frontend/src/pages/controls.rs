use leptos::*;

use crate::components::{Icon, IconName, MenuItem, RadioGroup, RadioOption};

#[component]
pub fn ControlsPage() -> impl IntoView {
    let lens_type = create_rw_signal("distance".to_string());
    let eye = create_rw_signal("both".to_string());
    let last_action = create_rw_signal(Option::<&'static str>::None);

    let lens_options = vec![
        RadioOption::new("distance", "Distance"),
        RadioOption::new("reading", "Reading"),
        RadioOption::new("varifocal", "Varifocal"),
        RadioOption::new("contact", "Contact lenses").disabled(),
    ];
    let eye_options = vec![
        RadioOption::new("right", "Right"),
        RadioOption::new("left", "Left"),
        RadioOption::new("both", "Both"),
    ];

    view! {
        <div class="dashboard-header">
            <h1 class="dashboard-title">"Controls"</h1>
        </div>

        <div class="card">
            <h3 class="card-title">"Icons"</h3>
            <div class="icon-gallery">
                {IconName::ALL.iter().map(|icon| view! {
                    <figure class="icon-tile">
                        <Icon name=*icon size=24 title=icon.name() />
                        <figcaption>{icon.name()}</figcaption>
                    </figure>
                }).collect_view()}
            </div>
        </div>

        <div class="card">
            <h3 class="card-title">"Menu items"</h3>
            <ul class="menu" role="listbox">
                <MenuItem label="Edit prescription" icon=IconName::Glasses
                    on_select=Callback::new(move |_| last_action.set(Some("edit"))) />
                <MenuItem label="Copy summary" icon=IconName::Copy selected=true
                    on_select=Callback::new(move |_| last_action.set(Some("copy"))) />
                <MenuItem label="Archive" disabled=true
                    on_select=Callback::new(move |_| last_action.set(Some("archive"))) />
                <MenuItem label="Delete" icon=IconName::Close danger=true
                    on_select=Callback::new(move |_| last_action.set(Some("delete"))) />
            </ul>
            <p class="form-hint">
                "Last action: " {move || last_action.get().unwrap_or("—")}
            </p>
        </div>

        <div class="card">
            <h3 class="card-title">"Radio groups"</h3>
            <RadioGroup value=lens_type options=lens_options name="lens-type" label="Lens type" />
            <RadioGroup value=eye options=eye_options name="eye" label="Eye" inline=true />
            <p class="form-hint">
                {move || format!("{} / {}", lens_type.get(), eye.get())}
            </p>
        </div>
    }
}
