//! Top navigation bar with a mobile hamburger menu.

use leptos::prelude::*;

use crate::state::ui::UiState;

const LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#classifier", "Classifier"),
    ("#gallery", "Gallery"),
    ("#about", "About"),
];

/// Navigation bar. The hamburger toggles the menu on narrow viewports and
/// following any link closes it again.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let menu_class = move || {
        if ui.get().menu_open {
            "nav__menu nav__menu--open"
        } else {
            "nav__menu"
        }
    };

    view! {
        <nav class="nav">
            <span class="nav__brand">"One Piece Classifier"</span>
            <button
                class="nav__hamburger"
                aria-label="Toggle menu"
                on:click=move |_| ui.update(UiState::toggle_menu)
            >
                <span class="nav__hamburger-bar"></span>
                <span class="nav__hamburger-bar"></span>
                <span class="nav__hamburger-bar"></span>
            </button>
            <ul class=menu_class>
                {LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <li class="nav__item">
                                <a
                                    class="nav__link"
                                    href=*href
                                    on:click=move |_| ui.update(UiState::close_menu)
                                >
                                    {*label}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
