use leptos::*;

use super::icon::{Icon, IconName};

/// Compute the class list for a menu entry.
pub fn menu_item_class(selected: bool, disabled: bool, danger: bool) -> String {
    let mut class = String::from("menu-item");
    if selected {
        class.push_str(" selected");
    }
    if disabled {
        class.push_str(" disabled");
    }
    if danger {
        class.push_str(" danger");
    }
    class
}

/// A selectable entry in a menu or listbox.
#[component]
pub fn MenuItem(
    #[prop(into)] label: String,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] highlighted: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] danger: bool,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    let selected = Signal::derive(move || selected.get());
    let highlighted = Signal::derive(move || highlighted.get());
    let disabled = Signal::derive(move || disabled.get());

    let class = move || {
        let mut class = menu_item_class(selected.get(), disabled.get(), danger);
        if highlighted.get() {
            class.push_str(" highlighted");
        }
        class
    };

    view! {
        <li
            class=class
            role="option"
            aria-selected=move || selected.get().to_string()
            aria-disabled=move || disabled.get().to_string()
            on:mousedown=|ev| ev.prevent_default()
            on:click=move |ev| {
                ev.stop_propagation();
                if disabled.get_untracked() {
                    return;
                }
                if let Some(callback) = on_select {
                    callback.call(());
                }
            }
        >
            {icon.map(|name| view! { <Icon name=name class="menu-item-icon" /> })}
            <span class="menu-item-label">{label}</span>
            {hint.filter(|h| !h.is_empty()).map(|h| view! { <span class="menu-item-hint">{h}</span> })}
        </li>
    }
}
