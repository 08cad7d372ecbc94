//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation_bar::NavigationBar;
use crate::components::require_auth::RequireAuth;
use crate::pages::{
    dashboard::DashboardPage, landing::LandingPage, login::LoginPage, new_project::NewProjectPage,
    not_found::NotFoundPage, registration::RegistrationPage, scene::ScenePage,
};
use crate::state::auth::Auth;
use crate::state::session::Session;

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
/// Provides the auth facade and sets up client-side routing. The session
/// starts pending on both sides of hydration; verification only runs in the
/// browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = Auth::new(Session::pending());
    provide_context(auth);

    // Effects do not run during server rendering.
    Effect::new(move || auth.bootstrap());

    view! {
        <Stylesheet id="leptos" href="/pkg/logoplace.css"/>
        <Title text="LogoPlace"/>

        <Router>
            <NavigationBar/>
            <main class="app-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("signup") view=RegistrationPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("dashboard") view=ProtectedDashboard/>
                    <Route path=(StaticSegment("new"), StaticSegment("project")) view=ProtectedNewProject/>
                    <Route path=(StaticSegment("project"), ParamSegment("project_id")) view=ProtectedScene/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedNewProject() -> impl IntoView {
    view! { <RequireAuth><NewProjectPage/></RequireAuth> }
}

#[component]
fn ProtectedScene() -> impl IntoView {
    view! { <RequireAuth><ScenePage/></RequireAuth> }
}
