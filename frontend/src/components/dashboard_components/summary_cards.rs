use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdTrendingUp, md_editor_icons::MdInsertChart}};

use common::summary::{AggregateSummary, SummaryCard};

#[component]
pub fn SummaryCards(summary: AggregateSummary) -> Element {
    let cards = summary.cards();
    rsx! {
        div {
            id: "x-summary-cards",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                gap: 24px;
            ",
            for (i, card) in cards.into_iter().enumerate() {
                SummaryCardView { key: "{card.label}", card, accent: CARD_ACCENTS[i % CARD_ACCENTS.len()], trend_icon: i % 3 == 0 }
            }
        }
    }
}

/// (background, foreground) per card, in card order.
const CARD_ACCENTS: [(&str, &str); 4] = [
    ("#D1FAE5", "#059669"),
    ("#DBEAFE", "#2563EB"),
    ("#EDE9FE", "#7C3AED"),
    ("#FEF3C7", "#D97706"),
];

#[component]
fn SummaryCardView(card: SummaryCard, accent: (&'static str, &'static str), trend_icon: bool) -> Element {
    let (background, foreground) = accent;
    rsx! {
        div {
            class: "x-metric-card",
            style: "display: flex; align-items: center; gap: 12px;",
            div {
                style: "
                    width: 40px;
                    height: 40px;
                    border-radius: 8px;
                    background-color: {background};
                    color: {foreground};
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                ",
                if trend_icon {
                    Icon { icon: MdTrendingUp, style: "width: 20px; height: 20px;" }
                } else {
                    Icon { icon: MdInsertChart, style: "width: 20px; height: 20px;" }
                }
            }
            div {
                p {
                    style: "font-size: 14px; color: #4B5563; margin: 0;",
                    "{card.label}"
                }
                p {
                    style: "font-size: 24px; font-weight: 700; color: #111827; margin: 4px 0 0 0;",
                    "{card.value}"
                }
            }
        }
    }
}
