//! Fallback page for unknown routes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::paths::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();
    let on_go_home = move |_| navigate(HOME_PATH, NavigateOptions::default());

    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <button class="btn btn--primary" on:click=on_go_home>
                "Go Home"
            </button>
        </div>
    }
}
