use leptos::*;
use shared::numeric::resolve::Direction;
use shared::numeric::{
    can_decrement, can_increment, decrement, format_for_display, increment, on_blur_commit,
    on_direct_input, validate_range, StepperConfig,
};

use super::icon::{Icon, IconName};

/// Map a keyboard key to a step direction.
pub fn step_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        _ => None,
    }
}

fn stepper_class(has_error: bool, disabled: bool) -> String {
    let mut class = String::from("stepper");
    if has_error {
        class.push_str(" stepper-error");
    }
    if disabled {
        class.push_str(" stepper-disabled");
    }
    class
}

/// Numeric input with decrement/increment buttons.
///
/// `value` holds the canonical stored text. Edits are sanitized as they are
/// typed, committed on blur, and stepped by the buttons or the arrow keys.
#[component]
pub fn NumberStepper(
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional)] config: StepperConfig,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] unit: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_focus: Option<Callback<()>>,
    #[prop(optional)] on_blur: Option<Callback<()>>,
) -> impl IntoView {
    let input_id = id.unwrap_or_else(|| {
        let base = label.as_deref().unwrap_or("value");
        format!("stepper-{}", base.replace(' ', "-").to_lowercase())
    });
    let required = config.required;
    let input_mode = if config.integer_only { "numeric" } else { "decimal" };
    let config = store_value(config);
    let disabled = Signal::derive(move || disabled.get());

    let touched = create_rw_signal(false);
    let focused = create_rw_signal(false);

    let store = move |next: Option<String>| {
        if let Some(next) = next {
            value.set(next.clone());
            if let Some(callback) = on_change {
                callback.call(next);
            }
        }
    };

    let step = move |direction: Direction| {
        if disabled.get_untracked() {
            return;
        }
        touched.set(true);
        let current = value.get_untracked();
        let next = config.with_value(|c| match direction {
            Direction::Up => increment(current.as_str(), c),
            Direction::Down => decrement(current.as_str(), c),
        });
        store(next);
    };

    let can_step_up = move || config.with_value(|c| can_increment(value.get().as_str(), c));
    let can_step_down = move || config.with_value(|c| can_decrement(value.get().as_str(), c));

    let error = move || {
        let touched = touched.get();
        config.with_value(|c| validate_range(&value.get(), c, touched).err().map(|e| e.to_string()))
    };

    let displayed = move || {
        let current = value.get();
        if focused.get() {
            current
        } else {
            config.with_value(|c| format_for_display(&current, c))
        }
    };

    view! {
        <div class="form-group number-stepper">
            {label.map(|l| view! {
                <label class="form-label" for=input_id.clone()>
                    {l}
                    {required.then(|| view! { <span style="color: var(--danger-color);">" *"</span> })}
                </label>
            })}
            <div class=move || stepper_class(error().is_some(), disabled.get())>
                <button
                    type="button"
                    class="btn btn-icon stepper-button"
                    aria-label="Decrease"
                    tabindex="-1"
                    disabled=move || disabled.get() || !can_step_down()
                    on:click=move |_| step(Direction::Down)
                >
                    <Icon name=IconName::Minus />
                </button>
                <input
                    type="text"
                    class="form-input stepper-input"
                    id=input_id.clone()
                    inputmode=input_mode
                    placeholder=placeholder
                    required=required
                    disabled=disabled
                    aria-invalid=move || error().is_some().to_string()
                    prop:value=displayed
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        let sanitized = config.with_value(|c| on_direct_input(&raw, c));
                        store(Some(sanitized));
                    }
                    on:keydown=move |ev| {
                        if let Some(direction) = step_for_key(&ev.key()) {
                            ev.prevent_default();
                            step(direction);
                        }
                    }
                    on:focus=move |_| {
                        focused.set(true);
                        if let Some(callback) = on_focus {
                            callback.call(());
                        }
                    }
                    on:blur=move |_| {
                        focused.set(false);
                        touched.set(true);
                        let current = value.get_untracked();
                        let committed = config.with_value(|c| on_blur_commit(current.as_str(), c));
                        if committed != current {
                            store(Some(committed));
                        }
                        if let Some(callback) = on_blur {
                            callback.call(());
                        }
                    }
                />
                {unit.map(|u| view! { <span class="stepper-unit">{u}</span> })}
                <button
                    type="button"
                    class="btn btn-icon stepper-button"
                    aria-label="Increase"
                    tabindex="-1"
                    disabled=move || disabled.get() || !can_step_up()
                    on:click=move |_| step(Direction::Up)
                >
                    <Icon name=IconName::Plus />
                </button>
            </div>
            {move || error().map(|e| view! {
                <small class="form-error" style="color: var(--error-color, #dc3545);">{e}</small>
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
    fn test_arrow_keys_map_to_steps() {
        assert_eq!(step_for_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(step_for_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(step_for_key("Enter"), None);
    }

    #[wasm_bindgen_test]
    fn test_stepper_css_classes() {
        assert_eq!(stepper_class(false, false), "stepper");
        assert_eq!(stepper_class(true, false), "stepper stepper-error");
        assert_eq!(stepper_class(true, true), "stepper stepper-error stepper-disabled");
    }
}
