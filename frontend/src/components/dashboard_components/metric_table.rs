//! Sortable top-queries table.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape};
use dioxus_free_icons::icons::md_action_icons::{MdTouchApp, MdTrackChanges, MdTrendingUp, MdVisibility};
use dioxus_free_icons::icons::md_navigation_icons::{MdArrowDropDown, MdArrowDropUp};

use common::{
    analytics::SearchQuery,
    summary::{format_ctr, format_number, format_position},
    table_view::{SortDirection, SortField, TableRow, TableSort},
};

#[component]
pub fn MetricTable(rows: Vec<TableRow>, sort: TableSort, on_sort: Callback<SortField>, on_row_click: Callback<SearchQuery>) -> Element {
    rsx! {
        div {
            id: "x-metric-table",
            class: "x-metric-card",
            style: "padding: 0; overflow: hidden;",
            div {
                style: "overflow-x: auto;",
                table {
                    style: "min-width: 100%; border-collapse: collapse;",
                    thead {
                        style: "background-color: #F9FAFB; border-bottom: 1px solid #E5E7EB;",
                        tr {
                            SortableHeader { field: SortField::Query, sort, on_sort }
                            for field in SortField::METRICS {
                                SortableHeader { key: "{field.label()}", field, sort, on_sort }
                            }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr {
                                td {
                                    colspan: "5",
                                    style: "padding: 32px; text-align: center; color: #6B7280; font-size: 14px;",
                                    "No queries match the current filter."
                                }
                            }
                        }
                        for (index, row) in rows.iter().cloned().enumerate() {
                            MetricRow { key: "{row.query.query}-{index}", row, on_row_click }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SortableHeader(field: SortField, sort: TableSort, on_sort: Callback<SortField>) -> Element {
    let indicator = sort.indicator(field);
    rsx! {
        th {
            class: "x-sortable-header",
            style: "
                padding: 16px 24px;
                text-align: left;
                font-size: 12px;
                font-weight: 500;
                color: #6B7280;
                text-transform: uppercase;
                letter-spacing: 0.05em;
            ",
            onclick: move |_| on_sort.call(field),
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                match field {
                    SortField::Query => rsx! {},
                    SortField::Clicks => rsx! { MetricIcon { icon: MdTouchApp } },
                    SortField::Impressions => rsx! { MetricIcon { icon: MdVisibility } },
                    SortField::Ctr => rsx! { MetricIcon { icon: MdTrendingUp } },
                    SortField::Position => rsx! { MetricIcon { icon: MdTrackChanges } },
                }
                span { "{field.label()}" }
                match indicator {
                    Some(SortDirection::Asc) => rsx! { Icon { icon: MdArrowDropUp, style: "width: 20px; height: 20px; color: #2563EB;" } },
                    Some(SortDirection::Desc) => rsx! { Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; color: #2563EB;" } },
                    None => rsx! { Icon { icon: MdArrowDropUp, style: "width: 20px; height: 20px; opacity: 0.3;" } },
                }
            }
        }
    }
}

#[component]
fn MetricIcon<I: IconShape + Clone + PartialEq + 'static>(icon: I) -> Element {
    rsx! {
        Icon { icon: icon, style: "width: 16px; height: 16px;" }
    }
}

#[component]
fn MetricRow(row: TableRow, on_row_click: Callback<SearchQuery>) -> Element {
    let TableRow { query, selected } = row;
    let ctr_color = query.ctr_grade().color();
    let position_color = query.position_grade().color();
    let row_class = if selected { "x-table-row selected" } else { "x-table-row" };
    let clicked = query.clone();

    rsx! {
        tr {
            class: "{row_class}",
            style: "border-bottom: 1px solid #E5E7EB;",
            onclick: move |_| on_row_click.call(clicked.clone()),
            td {
                style: "padding: 16px 24px; white-space: nowrap;",
                div {
                    style: "font-size: 14px; font-weight: 500; color: #111827; max-width: 320px; overflow: hidden; text-overflow: ellipsis;",
                    "{query.query}"
                }
            }
            td {
                style: "padding: 16px 24px; white-space: nowrap; font-size: 14px; font-weight: 600; color: #059669;",
                "{format_number(query.clicks)}"
            }
            td {
                style: "padding: 16px 24px; white-space: nowrap; font-size: 14px; font-weight: 500; color: #2563EB;",
                "{format_number(query.impressions)}"
            }
            td {
                style: "padding: 16px 24px; white-space: nowrap; font-size: 14px; font-weight: 500; color: {ctr_color};",
                "{format_ctr(query.ctr)}"
            }
            td {
                style: "padding: 16px 24px; white-space: nowrap; font-size: 14px; font-weight: 500; color: {position_color};",
                "{format_position(query.position)}"
            }
        }
    }
}
