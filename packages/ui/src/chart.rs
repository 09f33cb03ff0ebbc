//! # Trend chart — inline SVG
//!
//! Plots the filtered weight series: the weight line with its points, the
//! one-week rolling average as a dashed line, and BMI dots against a
//! secondary axis with the category bands shaded behind them. Axis bounds
//! come from [`store::metrics::axis_bounds`], so the weight and BMI scales
//! pad their observed extremes independently.

use dioxus::prelude::*;
use store::metrics::{axis_bounds, ChartPoint, BMI_ZONES};

use crate::theme::{chart_colors, theme_colors};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 300.0;
const PAD_LEFT: f64 = 46.0;
const PAD_RIGHT: f64 = 46.0;
const PAD_TOP: f64 = 14.0;
const PAD_BOTTOM: f64 = 28.0;

/// Linear projection from a value interval onto a pixel interval.
struct Scale {
    lo: f64,
    hi: f64,
    px_lo: f64,
    px_hi: f64,
}

impl Scale {
    fn project(&self, value: f64) -> f64 {
        if self.hi == self.lo {
            return (self.px_lo + self.px_hi) / 2.0;
        }
        self.px_lo + (value - self.lo) / (self.hi - self.lo) * (self.px_hi - self.px_lo)
    }
}

struct Plotted {
    x: f64,
    y_weight: f64,
    y_bmi: Option<f64>,
    band_x: f64,
    band_w: f64,
}

struct ZoneRect {
    y: f64,
    height: f64,
    label_y: f64,
    fill: &'static str,
    opacity: f64,
    label: &'static str,
}

#[component]
pub fn TrendChart(points: Vec<ChartPoint>) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    if points.is_empty() {
        return rsx! {
            div {
                class: "chart-empty",
                span { "No entries in this range yet" }
            }
        };
    }

    let colors = theme_colors();
    let [weight_color, average_color, bmi_color] = chart_colors(&colors);

    let weight_values = points
        .iter()
        .map(|p| p.weight)
        .chain(points.iter().filter_map(|p| p.week_average));
    let (weight_lo, weight_hi) = axis_bounds(weight_values).unwrap_or((0.0, 100.0));

    let day_lo = points[0].day as f64;
    let day_hi = points[points.len() - 1].day as f64;
    let x = Scale {
        lo: day_lo,
        hi: day_hi,
        px_lo: PAD_LEFT,
        px_hi: WIDTH - PAD_RIGHT,
    };
    let y_weight = Scale {
        lo: weight_lo,
        hi: weight_hi,
        px_lo: HEIGHT - PAD_BOTTOM,
        px_hi: PAD_TOP,
    };
    let y_bmi = axis_bounds(points.iter().filter_map(|p| p.bmi)).map(|(lo, hi)| Scale {
        lo,
        hi,
        px_lo: HEIGHT - PAD_BOTTOM,
        px_hi: PAD_TOP,
    });

    // Project every sample once; hover bands split the plot at the
    // midpoints between neighbouring samples.
    let plotted: Vec<Plotted> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let px = x.project(p.day as f64);
            let left = if i == 0 {
                PAD_LEFT
            } else {
                (x.project(points[i - 1].day as f64) + px) / 2.0
            };
            let right = if i == points.len() - 1 {
                WIDTH - PAD_RIGHT
            } else {
                (x.project(points[i + 1].day as f64) + px) / 2.0
            };
            Plotted {
                x: px,
                y_weight: y_weight.project(p.weight),
                y_bmi: p
                    .bmi
                    .and_then(|bmi| y_bmi.as_ref().map(|scale| scale.project(bmi))),
                band_x: left,
                band_w: (right - left).max(1.0),
            }
        })
        .collect();

    let zones: Vec<ZoneRect> = match &y_bmi {
        Some(scale) => BMI_ZONES
            .iter()
            .filter(|zone| zone.to > scale.lo && zone.from < scale.hi)
            .map(|zone| {
                let top = scale.project(zone.to.min(scale.hi));
                let bottom = scale.project(zone.from.max(scale.lo));
                ZoneRect {
                    y: top,
                    height: bottom - top,
                    label_y: top + 11.0,
                    fill: zone.fill,
                    opacity: zone.opacity,
                    label: zone.label,
                }
            })
            .collect(),
        None => Vec::new(),
    };

    let weight_line = plotted
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y_weight))
        .collect::<Vec<_>>()
        .join(" ");
    let average_line = points
        .iter()
        .zip(plotted.iter())
        .filter_map(|(point, plot)| {
            point
                .week_average
                .map(|avg| format!("{:.1},{:.1}", plot.x, y_weight.project(avg)))
        })
        .collect::<Vec<_>>()
        .join(" ");

    let plot_width = WIDTH - PAD_LEFT - PAD_RIGHT;
    let first_label = points[0].label.clone();
    let last_label = points[points.len() - 1].label.clone();

    let right_edge_x = WIDTH - PAD_RIGHT;
    let zone_label_x = WIDTH - PAD_RIGHT - 4.0;
    let left_axis_x = PAD_LEFT - 6.0;
    let right_axis_x = WIDTH - PAD_RIGHT + 6.0;
    let top_axis_y = PAD_TOP + 4.0;
    let bottom_axis_y = HEIGHT - PAD_BOTTOM + 4.0;
    let x_label_y = HEIGHT - 8.0;

    rsx! {
        div {
            class: "chart-container",
            onmouseleave: move |_| hovered.set(None),
            svg {
                class: "trend-chart",
                view_box: "0 0 {WIDTH} {HEIGHT}",

                for (i, zone) in zones.iter().enumerate() {
                    rect {
                        key: "zone-{i}",
                        x: "{PAD_LEFT}",
                        y: "{zone.y}",
                        width: "{plot_width}",
                        height: "{zone.height}",
                        fill: "{zone.fill}",
                        opacity: "{zone.opacity}",
                    }
                    text {
                        x: "{zone_label_x}",
                        y: "{zone.label_y}",
                        class: "chart-zone-label",
                        text_anchor: "end",
                        "{zone.label}"
                    }
                }

                polyline {
                    points: "{weight_line}",
                    fill: "none",
                    stroke: "{weight_color}",
                    stroke_width: "2.5",
                }
                if !average_line.is_empty() {
                    polyline {
                        points: "{average_line}",
                        fill: "none",
                        stroke: "{average_color}",
                        stroke_width: "2",
                        stroke_dasharray: "6 4",
                    }
                }

                for (i, p) in plotted.iter().enumerate() {
                    circle {
                        key: "w-{i}",
                        cx: "{p.x}",
                        cy: "{p.y_weight}",
                        r: if hovered() == Some(i) { "4.5" } else { "3" },
                        fill: "{weight_color}",
                    }
                    if let Some(y) = p.y_bmi {
                        circle {
                            key: "b-{i}",
                            cx: "{p.x}",
                            cy: "{y}",
                            r: "2.5",
                            fill: "{bmi_color}",
                        }
                    }
                }

                // Invisible hover bands, one per sample.
                for (i, p) in plotted.iter().enumerate() {
                    rect {
                        key: "hover-{i}",
                        x: "{p.band_x}",
                        y: "0",
                        width: "{p.band_w}",
                        height: "{HEIGHT}",
                        fill: "transparent",
                        onmouseenter: move |_| hovered.set(Some(i)),
                    }
                }

                // Axis extremes.
                text {
                    x: "{left_axis_x}",
                    y: "{top_axis_y}",
                    class: "chart-axis-label",
                    text_anchor: "end",
                    "{weight_hi:.1}"
                }
                text {
                    x: "{left_axis_x}",
                    y: "{bottom_axis_y}",
                    class: "chart-axis-label",
                    text_anchor: "end",
                    "{weight_lo:.1}"
                }
                if let Some(scale) = &y_bmi {
                    text {
                        x: "{right_axis_x}",
                        y: "{top_axis_y}",
                        class: "chart-axis-label",
                        "{scale.hi:.1}"
                    }
                    text {
                        x: "{right_axis_x}",
                        y: "{bottom_axis_y}",
                        class: "chart-axis-label",
                        "{scale.lo:.1}"
                    }
                }
                text {
                    x: "{PAD_LEFT}",
                    y: "{x_label_y}",
                    class: "chart-axis-label",
                    "{first_label}"
                }
                text {
                    x: "{right_edge_x}",
                    y: "{x_label_y}",
                    class: "chart-axis-label",
                    text_anchor: "end",
                    "{last_label}"
                }
            }

            if let Some(i) = hovered() {
                if let Some(point) = points.get(i) {
                    ChartTooltip {
                        point: point.clone(),
                        left_pct: plotted[i].x / WIDTH * 100.0,
                        weight_color: weight_color.clone(),
                        average_color: average_color.clone(),
                        bmi_color: bmi_color.clone(),
                    }
                }
            }
        }
    }
}

/// Hover readout for one sample: date plus the series values present on it.
#[component]
fn ChartTooltip(
    point: ChartPoint,
    left_pct: f64,
    weight_color: String,
    average_color: String,
    bmi_color: String,
) -> Element {
    let entries: Vec<(&str, String, String)> = [
        ("Weight", Some(format!("{:.1} kg", point.weight)), weight_color),
        (
            "Avg",
            point.week_average.map(|avg| format!("{avg:.1} kg")),
            average_color,
        ),
        ("BMI", point.bmi.map(|bmi| format!("{bmi:.1} kg/m²")), bmi_color),
    ]
    .into_iter()
    .filter_map(|(name, value, color)| value.map(|v| (name, v, color)))
    .collect();

    rsx! {
        div {
            class: "chart-tooltip",
            style: "left: {left_pct}%",
            p { class: "chart-tooltip-date", "{point.label}" }
            for (name, value, color) in entries {
                div {
                    key: "{name}",
                    class: "chart-tooltip-row",
                    div {
                        class: "chart-tooltip-swatch",
                        style: "background-color: {color}",
                    }
                    span { "{name}:" }
                    span { class: "chart-tooltip-value", "{value}" }
                }
            }
        }
    }
}
