//! New-project page: title, description and an optional source video.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits one multipart request. On success the form is reset and the
//! visitor is taken to the scene view of the created project.

#[cfg(test)]
#[path = "new_project_test.rs"]
mod new_project_test;

use leptos::html;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{NewProjectForm, ProjectId};
use crate::util::flash::{FlashMessage, flash};
use crate::util::paths::project_path;

pub const CREATE_FAILED_MESSAGE: &str = "Could not create project";

/// Check the text fields before any network call.
pub fn validate_new_project_input(title: &str, description: &str) -> Result<NewProjectForm, &'static str> {
    let title = title.trim();
    let description = description.trim();
    if title.is_empty() || description.is_empty() {
        return Err("Project title and description are required");
    }
    Ok(NewProjectForm { title: title.to_owned(), description: description.to_owned() })
}

#[component]
pub fn NewProjectPage() -> impl IntoView {
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let file_input = NodeRef::<html::Input>::new();
    let error = RwSignal::new(FlashMessage::default());
    let busy = RwSignal::new(false);
    let created = RwSignal::new(None::<ProjectId>);

    Effect::new(move || {
        if let Some(id) = created.get() {
            navigate(&project_path(id), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = match validate_new_project_input(&title.get_untracked(), &description.get_untracked()) {
            Ok(form) => form,
            Err(message) => {
                flash(error, message.to_owned());
                return;
            }
        };
        error.update(FlashMessage::clear);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let file = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            leptos::task::spawn_local(async move {
                match crate::net::api::create_project(&form, file).await {
                    Ok(project) => {
                        log::info!("project created: id={}", project.project_id);
                        let _ = title.try_set(String::new());
                        let _ = description.try_set(String::new());
                        if let Some(input) = file_input.get_untracked() {
                            input.set_value("");
                        }
                        let _ = created.try_set(Some(project.project_id));
                    }
                    Err(err) => {
                        log::warn!("project create failed: {err}");
                        flash(error, err.user_message(CREATE_FAILED_MESSAGE));
                    }
                }
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, file_input);
            busy.set(false);
        }
    };

    view! {
        <div class="new-project-page">
            <div class="login-card">
                <h1>"New Project"</h1>
                <Show when=move || error.with(FlashMessage::is_shown)>
                    <p class="login-message login-message--error">
                        {move || error.with(|f| f.text().unwrap_or_default().to_owned())}
                    </p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Title"
                        <input
                            class="login-input"
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Description"
                        <textarea
                            class="login-input new-project-page__description"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="login-label">
                        "Video"
                        <input class="login-input" type="file" accept="video/*" node_ref=file_input/>
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create Project" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
