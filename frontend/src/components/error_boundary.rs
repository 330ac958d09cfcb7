//! Error boundary component for rendering failures.

use dioxus::{logger::tracing, prelude::*};

/// First captured error as a readable line.
fn error_text(error: Option<String>) -> String {
    match error {
        Some(message) if !message.trim().is_empty() => message,
        _ => "Unknown error".to_string(),
    }
}

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let error_txt = error_text(err.error().map(|e| e.0.to_string()));
                tracing::error!("{} failed to render: {}", boundary_name, error_txt);
                rsx! {
                    div {
                        class: "x-metric-card",
                        style: "max-width: 640px; margin: 48px auto;",
                        ComponentErrorDisplay {
                            title: "The dashboard could not be displayed".to_string(),
                            error_txt,
                            a {
                                href: "/",
                                style: "color:#2563EB; font-size: 16px; border: 1px solid #2563EB; padding: 8px 16px; border-radius: 5px; margin: 15px; text-decoration: none;",
                                "Reload dashboard"
                            }
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = error_text(err.error().map(|e| e.0.to_string()));
                rsx! {
                    ComponentErrorDisplay {
                        title: "This panel failed to load".to_string(),
                        error_txt,
                        button {
                            style: "color:#2563EB; font-size: 16px; border: 1px solid #2563EB; background: white; padding: 8px 16px; border-radius: 5px; margin: 15px; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

/// Blocking message shown instead of the content it replaces.
#[component]
pub fn ComponentErrorDisplay(title: String, error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            min_height: "300px",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            h3 {
                style: "color:#111827; font-size: 20px; font-weight: 600; margin: 5px;",
                "{title}",
            }

            p {
                style: "color:#4B5563; padding: 10px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto; text-align: center;",
                "{error_txt}"
            }

            {children}
        }
    }
}
