use leptos::*;
use shared::navigation::ListCursor;

#[derive(Debug, Clone, PartialEq)]
pub struct RadioOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl RadioOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Arrow keys move forward (`Some(true)`) or backward (`Some(false)`).
fn arrow_direction(key: &str) -> Option<bool> {
    match key {
        "ArrowDown" | "ArrowRight" => Some(true),
        "ArrowUp" | "ArrowLeft" => Some(false),
        _ => None,
    }
}

/// Value selected after moving from `current`, wrapping and skipping disabled options.
pub fn next_selection(options: &[RadioOption], current: &str, forward: bool) -> Option<String> {
    let mut cursor = ListCursor::with_disabled(options.iter().map(|o| o.disabled).collect());
    if let Some(idx) = options.iter().position(|o| o.value == current) {
        cursor.highlight(idx);
    }
    let idx = if forward { cursor.next() } else { cursor.previous() }?;
    options.get(idx).map(|o| o.value.clone())
}

/// A single radio input with its label.
#[component]
pub fn RadioButton(
    #[prop(into)] name: String,
    #[prop(into)] value: String,
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] disabled: bool,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let radio_id = format!("radio-{}-{}", name, value.replace(' ', "-").to_lowercase());
    let selected_value = value.clone();

    view! {
        <div class="radio-option" class:disabled=disabled>
            <input
                type="radio"
                id=radio_id.clone()
                name=name
                value=value
                disabled=disabled
                tabindex=move || if checked.get() { "0" } else { "-1" }
                prop:checked=move || checked.get()
                on:change=move |_| {
                    on_select.call(selected_value.clone());
                }
            />
            <label for=radio_id>{label}</label>
        </div>
    }
}

/// Group of mutually exclusive options bound to one value.
#[component]
pub fn RadioGroup(
    #[prop(into)] value: RwSignal<String>,
    options: Vec<RadioOption>,
    #[prop(into)] name: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] inline: bool,
) -> impl IntoView {
    let options = store_value(options);
    let select = Callback::new(move |selected: String| {
        let allowed = options.with_value(|opts| {
            opts.iter().any(|o| o.value == selected && !o.disabled)
        });
        if allowed {
            value.set(selected);
        }
    });

    let group_class = if inline {
        "radio-group radio-group-inline"
    } else {
        "radio-group"
    };

    view! {
        <div
            class=group_class
            role="radiogroup"
            aria-label=label.clone()
            on:keydown=move |ev| {
                if let Some(forward) = arrow_direction(&ev.key()) {
                    ev.prevent_default();
                    let current = value.get_untracked();
                    if let Some(next) = options.with_value(|opts| next_selection(opts, &current, forward)) {
                        value.set(next);
                    }
                }
            }
        >
            {label.map(|l| view! { <span class="form-label">{l}</span> })}
            {options.get_value().into_iter().map(|option| {
                let option_value = option.value.clone();
                view! {
                    <RadioButton
                        name=name.clone()
                        value=option.value
                        label=option.label
                        disabled=option.disabled
                        checked=Signal::derive(move || value.get() == option_value)
                        on_select=select
                    />
                }
            }).collect_view()}
        </div>
    }
}
