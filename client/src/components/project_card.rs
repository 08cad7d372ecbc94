//! Card for one project on the dashboard list.

use leptos::prelude::*;

use crate::net::types::{ProjectId, ProjectSummary};
use crate::util::paths::project_path;

/// Project title, description, an editor link, and a delete request button.
#[component]
pub fn ProjectCard(
    project: ProjectSummary,
    #[prop(optional)] deleting: bool,
    on_delete: Callback<ProjectId>,
) -> impl IntoView {
    let href = project_path(project.id);
    let id = project.id;
    let description = project.description.unwrap_or_default();

    view! {
        <div class="project-card" class:project-card--deleting=deleting>
            <a class="project-card__open" href=href>
                <span class="project-card__title">{project.title}</span>
            </a>
            <span class="project-card__description">{description}</span>
            <span class="project-card__id">{format!("#{}", project.id)}</span>
            <button
                class="btn btn--danger project-card__delete"
                disabled=deleting
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    on_delete.run(id);
                }
                title="Delete project"
                aria-label="Delete project"
            >
                {if deleting { "Deleting..." } else { "Delete" }}
            </button>
        </div>
    }
}
