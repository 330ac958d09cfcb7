use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::data_definitions::dashboard_control::DashboardControl;

/// Free-text filter. Keystrokes are shown immediately; the dashboard only
/// applies the text once typing pauses.
#[component]
pub fn QueryFilter(placeholder: Option<String>) -> Element {
    let control = use_context::<DashboardControl>();
    let raw_filter = control.raw_filter;
    let placeholder = placeholder.unwrap_or("Filter queries...".to_string());

    rsx! {
        div {
            id: "x-query-filter",
            style: "display: flex; align-items: center; gap: 12px;",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #6B7280;" }
            input {
                r#type: "text",
                class: "x-form-input",
                style: "width: 256px;",
                placeholder: "{placeholder}",
                value: "{raw_filter}",
                oninput: move |event: Event<FormData>| {
                    control.edit_filter.call(event.value());
                },
            }
        }
    }
}
