//! Single home page: hero, classifier, gallery, and about sections.
//!
//! The previous implementation shipped separate desktop and mobile pages
//! with duplicated flows; this page is the one parameterized version.

use leptos::prelude::*;

use crate::components::gallery::Gallery;
use crate::components::nav_bar::NavBar;
use crate::components::notifications::Notifications;
use crate::components::result_panel::ResultPanel;
use crate::components::upload_panel::UploadPanel;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <NavBar/>
        <Notifications/>

        <header id="home" class="hero">
            <h1 class="hero__title">"One Piece Character Classifier"</h1>
            <p class="hero__subtitle">
                "Upload an image and find out which pirate it shows."
            </p>
        </header>

        <main>
            <section id="classifier" class="section section--classifier">
                <h2 class="section__title">"Classifier"</h2>
                <UploadPanel/>
                <ResultPanel/>
            </section>

            <section id="gallery" class="section section--gallery">
                <h2 class="section__title">"Character Gallery"</h2>
                <Gallery/>
            </section>

            <section id="about" class="section section--about">
                <h2 class="section__title">"About"</h2>
                <p>
                    "The classifier recognizes 17 One Piece characters. "
                    "All model logic lives behind the prediction endpoint; "
                    "this page only uploads images and renders results."
                </p>
            </section>
        </main>
    }
}
