//! Dashboard page listing the user's projects with create and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind the route guard. Loads the project list once on mount over
//! REST; deletes go through a confirmation dialog and update the list in
//! place. Errors are worded through the status table and clear themselves.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::net::types::ProjectId;
use crate::state::projects::ProjectsState;
use crate::util::paths::NEW_PROJECT_PATH;

/// Steps shown above the list.
pub const INTRO_STEPS: [&str; 3] = [
    "Create a project and give it a clear name.",
    "Choose the video you want to brand.",
    "Open the scene editor to place your logo.",
];

/// Dashboard page with intro steps and the project list.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let projects = RwSignal::new(ProjectsState::default());
    let delete_target = RwSignal::new(None::<ProjectId>);

    projects.update(ProjectsState::begin_list);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::list_projects().await;
        if let Err(err) = &result {
            log::warn!("project list failed: {err}");
        }
        // The page may have been left while the request was in flight.
        let _ = projects.try_update(|s| s.apply_list(result));
        schedule_error_clear(projects);
    });

    let on_delete_request = Callback::new(move |id: ProjectId| delete_target.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));

    view! {
        <div class="dashboard-page">
            <section class="dashboard-page__intro">
                <h1>"Simple steps to place your logo"</h1>
                <ol class="dashboard-page__steps">
                    {INTRO_STEPS.iter().map(|step| view! { <li>{*step}</li> }).collect::<Vec<_>>()}
                </ol>
                <a class="btn btn--primary dashboard-page__new" href=NEW_PROJECT_PATH>
                    "+ New Project"
                </a>
            </section>

            <section class="dashboard-page__projects">
                <h2>"Your Projects"</h2>
                <Show when=move || projects.with(|s| s.error.is_shown())>
                    <p class="dashboard-page__error">
                        {move || projects.with(|s| s.error.text().unwrap_or_default().to_owned())}
                    </p>
                </Show>
                <Show when=move || projects.get().loading>
                    <p>"Loading projects..."</p>
                </Show>
                <Show when=move || projects.get().shows_list()>
                    <Show
                        when=move || !projects.get().items.is_empty()
                        fallback=|| view! { <p class="dashboard-page__empty">"No projects yet."</p> }
                    >
                        <div class="dashboard-page__cards">
                            {move || {
                                let state = projects.get();
                                state
                                    .items
                                    .into_iter()
                                    .map(|project| {
                                        let deleting = state.deleting.as_ref() == Some(&project.id);
                                        view! {
                                            <ProjectCard
                                                project=project
                                                deleting=deleting
                                                on_delete=on_delete_request
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </section>

            <Show when=move || delete_target.get().is_some()>
                <DeleteProjectDialog target=delete_target on_cancel=on_delete_cancel projects=projects/>
            </Show>
        </div>
    }
}

/// Modal confirmation before a project is deleted.
#[component]
fn DeleteProjectDialog(
    target: RwSignal<Option<ProjectId>>,
    on_cancel: Callback<()>,
    projects: RwSignal<ProjectsState>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let Some(id) = target.get_untracked() else {
            return;
        };
        projects.update(|s| s.begin_delete(id));
        on_cancel.run(());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_project(id).await;
            if let Err(err) = &result {
                log::warn!("project delete failed: id={id} {err}");
            }
            let _ = projects.try_update(|s| s.apply_delete(id, result));
            schedule_error_clear(projects);
        });
        #[cfg(not(feature = "hydrate"))]
        projects.update(|s| s.apply_delete(id, Err(crate::net::error::ApiError::Unavailable)));
    });

    let title = move || {
        target
            .get()
            .and_then(|id| {
                projects
                    .get()
                    .items
                    .into_iter()
                    .find(|p| p.id == id)
                    .map(|p| p.title)
            })
            .unwrap_or_default()
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Project"</h2>
                <p class="dialog__danger">
                    "This will permanently delete "
                    <strong>{title}</strong>
                    " and its uploaded media."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Clear the list error after the flash delay, unless a newer one replaced it.
#[cfg(feature = "hydrate")]
fn schedule_error_clear(projects: RwSignal<ProjectsState>) {
    let Some(generation) = projects.try_with_untracked(|s| s.error.current()).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::util::flash::FLASH_CLEAR_MS).await;
        let _ = projects.try_update(|s| s.error.expire(generation));
    });
}
