use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator(label: String) -> Element {
    rsx! {
        div {
            class: "x-metric-card",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 16px;
                padding: 48px;
            ",
            div {
                style: "
                    width: 40px;
                    height: 40px;
                    border: 4px solid #DBEAFE;
                    border-top-color: #2563EB;
                    border-radius: 9999px;
                    animation: x-spin 0.8s linear infinite;
                ",
            }
            p {
                style: "color: #4B5563; font-size: 16px; margin: 0;",
                "{label}"
            }
        }
    }
}
