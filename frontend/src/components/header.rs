//! Top header bar wrapping every page.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_editor_icons::MdInsertChart;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

#[component]
pub fn DashboardHeader() -> Element {
    rsx! {
        div {
            id: "x-page-root",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                min-height: 100vh;
            ",

            div {
                id: "x-dashboard-header",
                style: "
                    background-color: white;
                    border-bottom: 1px solid #E5E7EB;
                    box-shadow: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
                    flex-shrink: 0;
                ",
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 12px;
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 24px 16px;
                    ",
                    HeaderIcon {}
                    div {
                        h1 {
                            style: "font-size: 24px; font-weight: 700; color: #111827; margin: 0;",
                            "Search Analytics Dashboard"
                        }
                        p {
                            style: "font-size: 16px; color: #4B5563; margin: 4px 0 0 0;",
                            "Monitor and analyze your search performance metrics"
                        }
                    }
                }
            }

            div {
                id: "x-page-container",
                style: "flex-grow: 1; width: 100%;",
                GlobalErrorBoundary {
                    boundary_name: "Header".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn HeaderIcon() -> Element {
    rsx! {
        div {
            style: "
                width: 48px;
                height: 48px;
                border-radius: 8px;
                background-color: #DBEAFE;
                color: #2563EB;
                display: flex;
                align-items: center;
                justify-content: center;
            ",
            Icon { icon: MdInsertChart, style: "width: 28px; height: 28px;" }
        }
    }
}
