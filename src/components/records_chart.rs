//! Revenue vs expenses line chart for one batch.
//!
//! Drawn as inline SVG. The records are fetched again whenever the batch
//! key changes; only the newest fetch is ever applied.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpAnalysisClient;
use crate::config::ApiConfig;
use crate::state::chart::{load_chart, ChartData, ChartState};
use crate::state::guard::RequestGuard;

const REVENUE_COLOR: &str = "rgb(75, 192, 192)";
const EXPENSES_COLOR: &str = "rgb(255, 99, 132)";
const Y_TICKS: usize = 5;

/// SVG canvas size and the margin reserved for axis labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 300.0,
            padding: 56.0,
        }
    }
}

impl ChartFrame {
    fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.padding
    }

    /// Horizontal position of the `index`th of `count` evenly spaced points.
    /// A single point sits in the middle.
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            self.padding + self.plot_width() / 2.0
        } else {
            self.padding + (index as f64 / (count - 1) as f64) * self.plot_width()
        }
    }

    /// Vertical position of `value` within `range`; larger values sit higher.
    pub fn y_at(&self, value: f64, range: (f64, f64)) -> f64 {
        let (lo, hi) = range;
        if hi > lo {
            self.padding + self.plot_height() - ((value - lo) / (hi - lo)) * self.plot_height()
        } else {
            self.padding + self.plot_height() / 2.0
        }
    }

    /// SVG path data joining the series' points.
    pub fn line_path(&self, values: &[f64], range: (f64, f64)) -> String {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let cmd = if i == 0 { "M" } else { "L" };
                format!(
                    "{} {:.1} {:.1}",
                    cmd,
                    self.x_at(i, values.len()),
                    self.y_at(v, range)
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Widen a value range by 5% each way so lines never touch the frame.
pub fn padded_range(range: (f64, f64)) -> (f64, f64) {
    let (lo, hi) = range;
    let span = hi - lo;
    if span > 0.0 {
        (lo - span * 0.05, hi + span * 0.05)
    } else {
        (lo - 1.0, hi + 1.0)
    }
}

/// `count + 1` evenly spaced values from top to bottom of the range.
pub fn tick_values(range: (f64, f64), count: usize) -> Vec<f64> {
    let (lo, hi) = range;
    (0..=count)
        .map(|i| hi - (i as f64 / count.max(1) as f64) * (hi - lo))
        .collect()
}

/// Compact axis label: `1.2M`, `45.0k`, `900`.
pub fn format_amount(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

#[component]
pub fn RecordsChart(
    /// Key of the batch whose records are plotted
    #[prop(into)]
    batch_key: Signal<String>,
) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let guard = RequestGuard::new();
    let (state, set_state) = signal(ChartState::Loading);

    {
        let guard = guard.clone();
        Effect::new(move |_| {
            let key = batch_key.get();
            let guard = guard.clone();
            let client = HttpAnalysisClient::new(config.clone());
            set_state.set(ChartState::Loading);
            spawn_local(async move {
                // A failed fetch leaves the placeholder up.
                if let Some(Some(data)) = guard.run(load_chart(&client, &key)).await {
                    set_state.set(ChartState::Ready(data));
                }
            });
        });
    }
    on_cleanup(move || guard.retire());

    view! {
        <div class="records-chart">
            <style>{include_str!("records_chart.css")}</style>
            {move || match state.get() {
                ChartState::Loading => view! {
                    <div class="chart-placeholder"></div>
                }.into_any(),
                ChartState::Ready(data) if data.is_empty() => view! {
                    <p class="chart-empty">"No records for this batch."</p>
                }.into_any(),
                ChartState::Ready(data) => render_chart(&data, ChartFrame::default()).into_any(),
            }}
        </div>
    }
}

fn render_chart(data: &ChartData, frame: ChartFrame) -> impl IntoView {
    let range = padded_range(data.value_range().unwrap_or((0.0, 0.0)));
    let count = data.periods.len();

    let grid = tick_values(range, Y_TICKS)
        .into_iter()
        .map(|value| {
            let y = format!("{:.1}", frame.y_at(value, range));
            view! {
                <g>
                    <line
                        x1=format!("{:.1}", frame.padding)
                        y1=y.clone()
                        x2=format!("{:.1}", frame.width - frame.padding)
                        y2=y.clone()
                        class="chart-grid"
                    />
                    <text
                        x=format!("{:.1}", frame.padding - 8.0)
                        y=y
                        dy="4"
                        text-anchor="end"
                        class="chart-axis-label"
                    >
                        {format_amount(value)}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    let period_labels = data
        .periods
        .iter()
        .enumerate()
        .map(|(i, period)| {
            view! {
                <text
                    x=format!("{:.1}", frame.x_at(i, count))
                    y=format!("{:.1}", frame.bottom() + 18.0)
                    text-anchor="middle"
                    class="chart-axis-label"
                >
                    {period.clone()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let series = [
        (&data.revenue, REVENUE_COLOR),
        (&data.expenses, EXPENSES_COLOR),
    ]
    .into_iter()
    .map(|(values, color)| {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                view! {
                    <circle
                        cx=format!("{:.1}", frame.x_at(i, count))
                        cy=format!("{:.1}", frame.y_at(v, range))
                        r="3.5"
                        fill=color
                    />
                }
            })
            .collect::<Vec<_>>();
        view! {
            <g>
                <path d=frame.line_path(values, range) fill="none" stroke=color stroke-width="2" />
                {points}
            </g>
        }
    })
    .collect::<Vec<_>>();

    view! {
        <div class="chart-frame">
            <p class="chart-title">"Revenue vs Expenses Trend"</p>
            <div class="chart-legend">
                <span class="legend-item">
                    <span class="legend-swatch" style=format!("background: {}", REVENUE_COLOR)></span>
                    "Total Revenue"
                </span>
                <span class="legend-item">
                    <span class="legend-swatch" style=format!("background: {}", EXPENSES_COLOR)></span>
                    "Total Expenses"
                </span>
            </div>
            <svg
                class="chart-svg"
                viewBox=format!("0 0 {} {}", frame.width, frame.height)
                preserveAspectRatio="xMidYMid meet"
            >
                {grid}
                {period_labels}
                {series}
            </svg>
        </div>
    }
}
