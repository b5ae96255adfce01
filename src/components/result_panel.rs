//! Classification result card.

use leptos::prelude::*;

use crate::components::probability_chart::ProbabilityChart;
use crate::state::result::ResultState;
use crate::state::upload::{UploadPhase, UploadState};

/// Result container: character identity, stats, confidence badge, and the
/// probability chart. Hidden until a cycle reaches `ResultShown`; an error
/// cycle leaves the previous fields untouched but keeps the panel hidden.
#[component]
pub fn ResultPanel() -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();
    let result = expect_context::<RwSignal<ResultState>>();

    let container_ref = NodeRef::<leptos::html::Div>::new();

    // Bring the result into view once it appears.
    Effect::new(move || {
        let shown = upload.get().phase == UploadPhase::ResultShown;
        #[cfg(feature = "hydrate")]
        {
            if shown {
                if let Some(el) = container_ref.get() {
                    el.scroll_into_view();
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = shown;
    });

    let visible =
        move || upload.get().phase == UploadPhase::ResultShown && result.get().current.is_some();

    view! {
        <Show when=visible>
            {move || {
                result
                    .get()
                    .current
                    .map(|prediction| {
                        let resolved = classify::render::resolve(&prediction);
                        let probabilities = prediction.probabilities;
                        let name = resolved.name;
                        view! {
                            <div id="result-container" class="result" node_ref=container_ref>
                                <div class="result__header">
                                    <img
                                        id="character-img"
                                        class="result__image"
                                        src=resolved.image
                                        alt=name.clone()
                                    />
                                    <div class="result__identity">
                                        <h3 id="character-name">{name}</h3>
                                        {resolved
                                            .confidence
                                            .map(|confidence| {
                                                let badge = format!(
                                                    "{}% Confidence",
                                                    classify::render::percent(confidence),
                                                );
                                                view! {
                                                    <span id="confidence-badge" class="result__confidence">
                                                        {badge}
                                                    </span>
                                                }
                                            })}
                                    </div>
                                </div>
                                <p id="character-description">{resolved.description}</p>
                                <dl class="result__stats">
                                    <dt>"Bounty"</dt>
                                    <dd id="character-bounty">{resolved.bounty}</dd>
                                    <dt>"Crew"</dt>
                                    <dd id="character-crew">{resolved.crew}</dd>
                                    <dt>"Devil Fruit"</dt>
                                    <dd id="character-fruit">{resolved.fruit}</dd>
                                </dl>
                                {(!probabilities.is_empty())
                                    .then(|| {
                                        view! {
                                            <h4 class="result__chart-title">"Top Predictions"</h4>
                                            <ProbabilityChart probabilities=probabilities.clone()/>
                                        }
                                    })}
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
