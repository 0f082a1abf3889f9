use chrono::{Month, NaiveDate, Weekday};
use leptos::*;
use shared::calendar::{parse_date_input, CalendarDay, CalendarState, CalendarView, DatePickerConfig};
use wasm_bindgen::JsCast;

use super::icon::{Icon, IconName};
use crate::utils::today_in_tz;

fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

fn month_label(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| &m.name()[..3])
        .unwrap_or("")
}

/// "%d/%m/%Y" -> "dd/mm/yyyy"
fn format_hint(format: &str) -> String {
    format.replace("%d", "dd").replace("%m", "mm").replace("%Y", "yyyy")
}

fn day_class(day: &CalendarDay) -> String {
    let mut class = String::from("calendar-day");
    if !day.in_month {
        class.push_str(" outside");
    }
    if day.selected {
        class.push_str(" selected");
    }
    if day.today {
        class.push_str(" today");
    }
    if day.disabled {
        class.push_str(" disabled");
    }
    class
}

/// Date input with a calendar dropdown.
///
/// Typed text is parsed with the configured display format when the input
/// loses focus or Enter is pressed. Open/closed state belongs to this
/// component.
#[component]
pub fn DatePicker(
    #[prop(into)] value: RwSignal<Option<NaiveDate>>,
    #[prop(optional)] config: DatePickerConfig,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] timezone: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let input_id = id.unwrap_or_else(|| "date-picker".to_string());
    let timezone = timezone.unwrap_or_else(|| "UTC".to_string());
    let placeholder = placeholder.unwrap_or_else(|| format_hint(&config.display_format));
    let config = store_value(config);
    let disabled = Signal::derive(move || disabled.get());

    let is_open = create_rw_signal(false);
    let error = create_rw_signal(Option::<String>::None);
    let text = create_rw_signal(
        value
            .get_untracked()
            .map(|d| config.with_value(|c| c.format(d)))
            .unwrap_or_default(),
    );
    let calendar = create_rw_signal(CalendarState::new(value.get_untracked(), today_in_tz(&timezone)));

    let commit_text = move || {
        let typed = text.get_untracked();
        if typed.trim().is_empty() {
            value.set(None);
            error.set(None);
            return;
        }
        match config.with_value(|c| parse_date_input(&typed, c)) {
            Some(date) => {
                value.set(Some(date));
                text.set(config.with_value(|c| c.format(date)));
                error.set(None);
            }
            None => {
                log::debug!("rejected date input {:?}", typed);
                error.set(Some("Invalid date".to_string()));
            }
        }
    };

    let toggle = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if !is_open.get_untracked() {
            calendar.set(CalendarState::new(value.get_untracked(), today_in_tz(&timezone)));
        }
        is_open.update(|open| *open = !*open);
    };

    let pick = move |date: NaiveDate| {
        let chosen = config.with_value(|c| calendar.try_update(|state| state.choose_day(date, c)));
        if let Some(Some(date)) = chosen {
            value.set(Some(date));
            text.set(config.with_value(|c| c.format(date)));
            error.set(None);
            is_open.set(false);
        }
    };

    let picker_ref = create_node_ref::<html::Div>();

    // Close when clicking outside the picker
    create_effect(move |_| {
        if is_open.get() {
            let handler = wasm_bindgen::closure::Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
                if let (Some(picker), Some(target)) = (picker_ref.get(), event.target()) {
                    let target_node: web_sys::Node = target.unchecked_into();
                    if !picker.contains(Some(&target_node)) {
                        is_open.set(false);
                    }
                }
            }) as Box<dyn FnMut(_)>);

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
                on_cleanup(move || {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            handler.as_ref().unchecked_ref(),
                        );
                    }
                    drop(handler);
                });
            }
        }
    });

    view! {
        <div class="form-group date-picker" node_ref=picker_ref>
            {label.map(|l| view! { <label class="form-label" for=input_id.clone()>{l}</label> })}
            <div class="date-picker-field">
                <input
                    type="text"
                    class="form-input"
                    id=input_id.clone()
                    placeholder=placeholder
                    disabled=disabled
                    aria-invalid=move || error.get().is_some().to_string()
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                    on:blur=move |_| commit_text()
                    on:keydown=move |ev| match ev.key().as_str() {
                        "Enter" => {
                            ev.prevent_default();
                            commit_text();
                        }
                        "Escape" => is_open.set(false),
                        _ => {}
                    }
                />
                <button
                    type="button"
                    class="btn btn-icon date-picker-trigger"
                    aria-label="Open calendar"
                    disabled=disabled
                    on:click=toggle
                >
                    <Icon name=IconName::Calendar />
                </button>
            </div>
            {move || error.get().map(|e| view! {
                <small class="form-error" style="color: var(--error-color, #dc3545);">{e}</small>
            })}
            <Show when=move || is_open.get() fallback=|| ()>
                <div class="calendar-dropdown" on:keydown=move |ev| {
                    if ev.key() == "Escape" {
                        is_open.set(false);
                    }
                }>
                    <div class="calendar-header">
                        <button type="button" class="btn btn-icon" aria-label="Previous"
                            on:click=move |_| calendar.update(|c| c.previous())>
                            <Icon name=IconName::ChevronLeft />
                        </button>
                        <button type="button" class="calendar-heading"
                            on:click=move |_| calendar.update(|c| c.zoom_out())>
                            {move || calendar.with(|c| c.heading())}
                        </button>
                        <button type="button" class="btn btn-icon" aria-label="Next"
                            on:click=move |_| calendar.update(|c| c.next())>
                            <Icon name=IconName::ChevronRight />
                        </button>
                    </div>
                    {move || match calendar.with(|c| c.view()) {
                        CalendarView::Days => {
                            let days = config.with_value(|c| calendar.with(|state| state.day_grid(c)));
                            let headers = config.with_value(CalendarState::weekday_headers);
                            view! {
                                <div class="calendar-grid calendar-days">
                                    {headers.into_iter().map(|d| view! {
                                        <span class="calendar-weekday">{weekday_label(d)}</span>
                                    }).collect_view()}
                                    {days.into_iter().map(|day| {
                                        let date = day.date;
                                        view! {
                                            <button
                                                type="button"
                                                class=day_class(&day)
                                                disabled=day.disabled
                                                on:click=move |_| pick(date)
                                            >
                                                {date.format("%-d").to_string()}
                                            </button>
                                        }
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }
                        CalendarView::Months => view! {
                            <div class="calendar-grid calendar-months">
                                {(1..=12u32).map(|month| view! {
                                    <button
                                        type="button"
                                        class="calendar-cell"
                                        on:click=move |_| calendar.update(|c| c.choose_month(month))
                                    >
                                        {month_label(month)}
                                    </button>
                                }).collect_view()}
                            </div>
                        }.into_view(),
                        CalendarView::Years => {
                            let years = calendar.with(|c| c.year_page());
                            view! {
                                <div class="calendar-grid calendar-years">
                                    {years.into_iter().map(|year| view! {
                                        <button
                                            type="button"
                                            class="calendar-cell"
                                            on:click=move |_| calendar.update(|c| c.choose_year(year))
                                        >
                                            {year}
                                        </button>
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }
                    }}
                    <div class="calendar-footer">
                        <button type="button" class="btn btn-outline"
                            on:click=move |_| {
                                calendar.update(|c| c.go_to_today());
                            }>
                            "Today"
                        </button>
                        <button type="button" class="btn btn-outline"
                            on:click=move |_| {
                                value.set(None);
                                text.set(String::new());
                                is_open.set(false);
                            }>
                            "Clear"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
