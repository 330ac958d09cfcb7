//! Drill-down line chart for the selected query.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use common::{
    chart::{ChartDimensions, ChartLayout, ChartPoint, polyline_points},
    dashboard_view::DetailChartPayload,
    date_range::format_tooltip_date,
    summary::format_number,
};

const CLICKS_COLOR: &str = "#10B981";
const IMPRESSIONS_COLOR: &str = "#3B82F6";

#[component]
pub fn DetailChart(payload: DetailChartPayload, on_close: Callback<()>) -> Element {
    let layout = ChartLayout::compute(&payload.time_series, ChartDimensions::default());
    let query_name = payload.query_name.clone();

    rsx! {
        div {
            id: "x-detail-chart",
            class: "x-metric-card",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 24px;",
                div {
                    h3 {
                        style: "font-size: 18px; font-weight: 600; color: #111827; margin: 0;",
                        "Performance Over Time"
                    }
                    p {
                        style: "font-size: 14px; color: #4B5563; margin: 4px 0 0 0;",
                        "Query: "
                        span { style: "font-weight: 500;", "{query_name}" }
                    }
                }
                button {
                    style: "border: none; background: none; cursor: pointer; padding: 6px; border-radius: 6px; color: #6B7280;",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: MdClose, style: "width: 20px; height: 20px;" }
                }
            }
            if layout.is_empty() {
                div {
                    style: "height: 120px; display: flex; align-items: center; justify-content: center; color: #6B7280; font-size: 14px;",
                    "No daily data in the selected range."
                }
            } else {
                LineChartSvg { layout, payload }
                ChartLegend {}
            }
        }
    }
}

#[component]
fn LineChartSvg(layout: ChartLayout, payload: DetailChartPayload) -> Element {
    let mut hovered = use_signal(|| None::<usize>);
    let dims = layout.dimensions;
    let view_box = format!("0 0 {} {}", dims.width, dims.height);
    let clicks_points = polyline_points(&layout.clicks);
    let impressions_points = polyline_points(&layout.impressions);
    let bands = layout.hover_bands();
    let hovered_index = hovered().filter(|i| *i < payload.time_series.len());
    let y_label_x = dims.margin_left - 8.0;
    let x_label_y = dims.bottom() + 18.0;

    rsx! {
        div {
            style: "position: relative; width: 100%;",
            svg {
                "viewBox": "{view_box}",
                width: "100%",
                height: "{dims.height}",
                "preserveAspectRatio": "none",
                onmouseleave: move |_| hovered.set(None),

                for tick in layout.y_ticks.iter() {
                    line {
                        x1: "{dims.margin_left}",
                        x2: "{dims.right()}",
                        y1: "{tick.position}",
                        y2: "{tick.position}",
                        stroke: "#F0F0F0",
                        "stroke-dasharray": "3 3",
                    }
                    text {
                        x: "{y_label_x}",
                        y: "{tick.position}",
                        fill: "#666666",
                        "font-size": "12",
                        "text-anchor": "end",
                        "dominant-baseline": "middle",
                        "{tick.label}"
                    }
                }
                for tick in layout.x_ticks.iter() {
                    text {
                        x: "{tick.position}",
                        y: "{x_label_y}",
                        fill: "#666666",
                        "font-size": "12",
                        "text-anchor": "middle",
                        "{tick.label}"
                    }
                }
                line {
                    x1: "{dims.margin_left}",
                    x2: "{dims.right()}",
                    y1: "{dims.bottom()}",
                    y2: "{dims.bottom()}",
                    stroke: "#666666",
                }

                SeriesLine { points: clicks_points, dots: layout.clicks.clone(), color: CLICKS_COLOR, hovered: hovered_index }
                SeriesLine { points: impressions_points, dots: layout.impressions.clone(), color: IMPRESSIONS_COLOR, hovered: hovered_index }

                for (i, (left, width)) in bands.into_iter().enumerate() {
                    rect {
                        key: "{i}",
                        x: "{left}",
                        y: "{dims.margin_top}",
                        width: "{width}",
                        height: "{dims.inner_height()}",
                        fill: "transparent",
                        onmouseenter: move |_| hovered.set(Some(i)),
                    }
                }
            }
            if let Some(i) = hovered_index {
                ChartTooltip {
                    date: payload.time_series[i].date.clone(),
                    clicks: payload.time_series[i].clicks,
                    impressions: payload.time_series[i].impressions,
                    left_percent: layout.clicks[i].x / dims.width * 100.0,
                }
            }
        }
    }
}

#[component]
fn SeriesLine(points: String, dots: Vec<ChartPoint>, color: &'static str, #[props(!optional)] hovered: Option<usize>) -> Element {
    rsx! {
        polyline {
            points: "{points}",
            fill: "none",
            stroke: "{color}",
            "stroke-width": "3",
            "stroke-linejoin": "round",
        }
        for (i, dot) in dots.iter().enumerate() {
            circle {
                key: "{i}",
                cx: "{dot.x}",
                cy: "{dot.y}",
                r: "{dot_radius(hovered, i)}",
                fill: "white",
                stroke: "{color}",
                "stroke-width": "2",
            }
        }
    }
}

fn dot_radius(hovered: Option<usize>, index: usize) -> u32 {
    if hovered == Some(index) { 6 } else { 4 }
}

#[component]
fn ChartTooltip(date: String, clicks: u64, impressions: u64, left_percent: f64) -> Element {
    let side = if left_percent > 60.0 { "right" } else { "left" };
    let offset = if left_percent > 60.0 { 100.0 - left_percent } else { left_percent };
    rsx! {
        div {
            style: "
                position: absolute;
                top: 8px;
                {side}: calc({offset}% + 12px);
                background: white;
                padding: 16px;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
                box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                pointer-events: none;
            ",
            p {
                style: "font-weight: 500; color: #111827; margin: 0 0 8px 0;",
                "{format_tooltip_date(&date)}"
            }
            p {
                style: "font-size: 14px; color: {CLICKS_COLOR}; margin: 0;",
                "Clicks: "
                span { style: "font-weight: 600;", "{format_number(clicks)}" }
            }
            p {
                style: "font-size: 14px; color: {IMPRESSIONS_COLOR}; margin: 4px 0 0 0;",
                "Impressions: "
                span { style: "font-weight: 600;", "{format_number(impressions)}" }
            }
        }
    }
}

#[component]
fn ChartLegend() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; gap: 24px; margin-top: 12px; font-size: 14px;",
            LegendItem { label: "Clicks", color: CLICKS_COLOR }
            LegendItem { label: "Impressions", color: IMPRESSIONS_COLOR }
        }
    }
}

#[component]
fn LegendItem(label: &'static str, color: &'static str) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 6px; color: {color};",
            span { style: "display: inline-block; width: 14px; height: 3px; background-color: {color};" }
            "{label}"
        }
    }
}
