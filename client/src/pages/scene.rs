//! Scene editor shell for a single project.
//!
//! Only the route parameter is wired up here; the editor itself lives
//! elsewhere.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn ScenePage() -> impl IntoView {
    let params = use_params_map();
    let project_id = move || params.read().get("project_id").unwrap_or_default();

    view! {
        <div class="scene-page">
            <header class="scene-page__header">
                <h1>"Scene Editor"</h1>
                <span class="scene-page__project">"Project " {project_id}</span>
            </header>
        </div>
    }
}
