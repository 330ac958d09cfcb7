use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_action_icons::MdDateRange};

use common::date_range::{format_date_for_api, parse_input_date};

use crate::data_definitions::dashboard_control::DashboardControl;

#[derive(Debug, Clone, Copy, PartialEq)]
enum RangeEnd {
    Start,
    End,
}

#[component]
pub fn DateRangePicker() -> Element {
    let control = use_context::<DashboardControl>();
    let date_range = control.date_range;
    let start_value = use_memo(move || format_date_for_api(&date_range.read().start_date));
    let end_value = use_memo(move || format_date_for_api(&date_range.read().end_date));
    let label = use_memo(move || date_range.read().display_label());

    let on_change = move |end: RangeEnd, event: Event<FormData>| {
        let value = event.value();
        let day = match parse_input_date(&value) {
            Ok(day) => day,
            Err(e) => {
                tracing::warn!("Ignoring date input {value:?}: {e}");
                return;
            }
        };
        let current = *date_range.peek();
        let new_range = match end {
            RangeEnd::Start => current.with_start_day(day),
            RangeEnd::End => current.with_end_day(day),
        };
        control.set_date_range.call(new_range);
    };

    rsx! {
        div {
            id: "x-date-range-picker",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                gap: 16px;
            ",
            div {
                style: "display: flex; align-items: center; gap: 8px; color: #6B7280;",
                Icon { icon: MdDateRange, style: "width: 20px; height: 20px;" }
                span {
                    style: "font-size: 14px; font-weight: 500; color: #374151;",
                    "Date Range:"
                }
            }
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                input {
                    r#type: "date",
                    class: "x-form-input",
                    value: "{start_value}",
                    onchange: move |event| on_change(RangeEnd::Start, event),
                }
                span { style: "color: #6B7280;", "to" }
                input {
                    r#type: "date",
                    class: "x-form-input",
                    value: "{end_value}",
                    onchange: move |event| on_change(RangeEnd::End, event),
                }
            }
            div {
                style: "font-size: 14px; color: #4B5563;",
                "{label}"
            }
        }
    }
}
