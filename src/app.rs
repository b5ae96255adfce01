//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::notify::NotifyState;
use crate::state::result::ResultState;
use crate::state::ui::UiState;
use crate::state::upload::UploadState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let upload = RwSignal::new(UploadState::default());
    let result = RwSignal::new(ResultState::default());
    let notify = RwSignal::new(NotifyState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(upload);
    provide_context(result);
    provide_context(notify);
    provide_context(ui);

    // Classify the viewport once on mount; it picks the chart row limit.
    Effect::new(move || {
        let narrow = crate::util::viewport::is_narrow();
        ui.update(|state| state.narrow_viewport = narrow);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/mugiwara-ui.css"/>
        <Title text="One Piece Character Classifier"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
