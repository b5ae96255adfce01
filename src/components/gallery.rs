//! Static character gallery with a detail modal.

use classify::characters::{CHARACTERS, CharacterRecord};
use leptos::prelude::*;

/// Gallery grid: one card per character, in table order. Tapping a card
/// opens the detail modal the old mobile variant rendered.
#[component]
pub fn Gallery() -> impl IntoView {
    let selected = RwSignal::new(None::<&'static CharacterRecord>);

    view! {
        <div class="gallery-grid" id="gallery-grid">
            {CHARACTERS
                .iter()
                .map(|record| view! { <GalleryCard record=record selected=selected/> })
                .collect::<Vec<_>>()}
        </div>

        <Show when=move || selected.get().is_some()>
            {move || {
                selected.get().map(|record| view! { <CharacterModal record=record selected=selected/> })
            }}
        </Show>
    }
}

#[component]
fn GalleryCard(
    record: &'static CharacterRecord,
    selected: RwSignal<Option<&'static CharacterRecord>>,
) -> impl IntoView {
    view! {
        <div class="gallery-item" on:click=move |_| selected.set(Some(record))>
            <img src=record.image alt=record.name/>
            <div class="gallery-item__content">
                <h3>{record.name}</h3>
                <p>{record.description}</p>
                <div class="gallery-item__stats">
                    <span>
                        <strong>"Bounty: "</strong>
                        {record.bounty}
                    </span>
                    <span>
                        <strong>"Crew: "</strong>
                        {record.crew}
                    </span>
                </div>
            </div>
        </div>
    }
}

/// Modal dialog with the full character record.
#[component]
fn CharacterModal(
    record: &'static CharacterRecord,
    selected: RwSignal<Option<&'static CharacterRecord>>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| selected.set(None)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{record.name}</h2>
                <img class="dialog__image" src=record.image alt=record.name/>
                <p class="dialog__description">{record.description}</p>
                <dl class="dialog__stats">
                    <dt>"Bounty"</dt>
                    <dd>{record.bounty}</dd>
                    <dt>"Crew"</dt>
                    <dd>{record.crew}</dd>
                    <dt>"Devil Fruit"</dt>
                    <dd>{record.fruit}</dd>
                </dl>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| selected.set(None)>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
