use gloo_timers::callback::Timeout;
use leptos::*;
use shared::navigation::ListCursor;
use shared::search::{normalize_query, PatientSummary, SEARCH_DEBOUNCE_MS};

use super::icon::{Icon, IconName};
use super::menu_item::MenuItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComboKey {
    Down,
    Up,
    Enter,
    Escape,
}

fn combo_key(key: &str) -> Option<ComboKey> {
    match key {
        "ArrowDown" => Some(ComboKey::Down),
        "ArrowUp" => Some(ComboKey::Up),
        "Enter" => Some(ComboKey::Enter),
        "Escape" => Some(ComboKey::Escape),
        _ => None,
    }
}

/// Combobox searching patients by name or reference.
///
/// The component performs no I/O: `on_search` is called with the normalized
/// query once typing pauses for [`SEARCH_DEBOUNCE_MS`], and the caller feeds
/// matches back through `results`.
#[component]
pub fn PatientSearch(
    #[prop(into)] results: MaybeSignal<Vec<PatientSummary>>,
    #[prop(into)] on_search: Callback<String>,
    #[prop(into)] on_select: Callback<PatientSummary>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let input_id = id.unwrap_or_else(|| "patient-search".to_string());
    let listbox_id = format!("{}-listbox", input_id);
    let placeholder = placeholder.unwrap_or_else(|| "Search patients…".to_string());
    let results = Signal::derive(move || results.get());
    let loading = Signal::derive(move || loading.get());

    let query = create_rw_signal(String::new());
    let is_open = create_rw_signal(false);
    let cursor = create_rw_signal(ListCursor::default());
    let pending = store_value(Option::<Timeout>::None);

    // New results invalidate the keyboard highlight
    create_effect(move |_| {
        let len = results.with(|r| r.len());
        cursor.update(|c| c.reset(vec![false; len]));
    });

    let select = move |patient: PatientSummary| {
        pending.set_value(None);
        query.set(patient.display_name());
        is_open.set(false);
        cursor.update(|c| c.clear());
        on_select.call(patient);
    };

    let on_input = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        query.set(text.clone());
        // Replacing the pending timeout cancels it
        match normalize_query(&text) {
            Some(normalized) => {
                let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                    log::debug!("searching patients for {:?}", normalized);
                    on_search.call(normalized);
                    is_open.set(true);
                });
                pending.set_value(Some(timeout));
            }
            None => {
                pending.set_value(None);
                is_open.set(false);
            }
        }
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let Some(key) = combo_key(&ev.key()) else {
            return;
        };
        match key {
            ComboKey::Down => {
                ev.prevent_default();
                is_open.set(true);
                cursor.update(|c| {
                    c.next();
                });
            }
            ComboKey::Up => {
                ev.prevent_default();
                cursor.update(|c| {
                    c.previous();
                });
            }
            ComboKey::Enter => {
                let highlighted = cursor.with_untracked(|c| c.highlighted());
                let patient = highlighted.and_then(|idx| results.with_untracked(|r| r.get(idx).cloned()));
                if let Some(patient) = patient {
                    ev.prevent_default();
                    select(patient);
                }
            }
            ComboKey::Escape => is_open.set(false),
        }
    };

    view! {
        <div class="form-group patient-search">
            {label.map(|l| view! { <label class="form-label" for=input_id.clone()>{l}</label> })}
            <div class="patient-search-field">
                <Icon name=IconName::Search class="patient-search-icon" />
                <input
                    type="search"
                    class="form-input"
                    id=input_id.clone()
                    role="combobox"
                    autocomplete="off"
                    aria-autocomplete="list"
                    aria-controls=listbox_id.clone()
                    aria-expanded=move || is_open.get().to_string()
                    placeholder=placeholder
                    prop:value=move || query.get()
                    on:input=on_input
                    on:keydown=on_keydown
                    on:blur=move |_| is_open.set(false)
                />
            </div>
            <Show when=move || is_open.get() fallback=|| ()>
                <ul class="patient-search-results" id=listbox_id.clone() role="listbox">
                    {move || {
                        if loading.get() {
                            return view! { <li class="menu-empty">"Searching…"</li> }.into_view();
                        }
                        let patients = results.get();
                        if patients.is_empty() {
                            return view! { <li class="menu-empty">"No patients found"</li> }.into_view();
                        }
                        patients.into_iter().enumerate().map(|(idx, patient)| {
                            let hint = patient.secondary_line();
                            let label = patient.display_name();
                            view! {
                                <MenuItem
                                    label=label
                                    icon=IconName::User
                                    hint=hint.unwrap_or_default()
                                    highlighted=Signal::derive(move || cursor.with(|c| c.highlighted() == Some(idx)))
                                    on_select=Callback::new(move |_| select(patient.clone()))
                                />
                            }
                        }).collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_combo_keys() {
        assert_eq!(combo_key("ArrowDown"), Some(ComboKey::Down));
        assert_eq!(combo_key("ArrowUp"), Some(ComboKey::Up));
        assert_eq!(combo_key("Enter"), Some(ComboKey::Enter));
        assert_eq!(combo_key("Escape"), Some(ComboKey::Escape));
        assert_eq!(combo_key("a"), None);
    }

    #[wasm_bindgen_test]
    fn test_debounce_window() {
        assert_eq!(SEARCH_DEBOUNCE_MS, 300);
    }
}
