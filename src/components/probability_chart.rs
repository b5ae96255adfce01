//! Probability bar chart.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Proportionally-filled bars, sorted descending by probability.
///
/// The viewport class decides the row limit: narrow screens show the top
/// five, wide screens show every class.
#[component]
pub fn ProbabilityChart(probabilities: Vec<f32>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div id="probability-chart" class="chart">
            {move || {
                classify::render::chart_rows(&probabilities, ui.get().chart_limit())
                    .into_iter()
                    .map(|row| {
                        let width = format!("{:.2}%", row.fraction * 100.0);
                        let percent = format!("{}%", row.percent);
                        view! {
                            <div class="chart__row">
                                <span class="chart__label">{row.label}</span>
                                <div class="chart__bar">
                                    <div class="chart__fill" style:width=width></div>
                                </div>
                                <span class="chart__percent">{percent}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
