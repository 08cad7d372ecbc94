//! Public landing page.

use leptos::prelude::*;

use crate::util::paths::LOGIN_PATH;

/// Feature highlights as `(headline, detail)`.
const FEATURES: [(&str, &str); 4] = [
    ("Easy logo placement", "Upload a video and a logo, pick the scene, and the tool does the rest."),
    ("Scene replacement", "Swap screens or billboards in the footage for your own content."),
    ("High-quality rendering", "Output up to 4K without losing quality."),
    ("Fast processing", "Your video is ready in minutes."),
];

const HOW_IT_WORKS: [(&str, &str); 4] = [
    ("Upload your video", "Choose the footage you want to brand."),
    ("Select the scene", "Find the surface you want to modify."),
    ("Add your logo", "Upload the image and adjust its size and position."),
    ("Download and share", "Export the result and publish it anywhere."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <header class="landing-page__hero">
                <h1>"Place your logo in any video"</h1>
                <p>"Turn ordinary scenes into branding opportunities."</p>
                <a class="btn btn--primary" href=LOGIN_PATH>
                    "Get Started"
                </a>
            </header>

            <section class="landing-page__section">
                <h2>"Features"</h2>
                <ul>
                    {FEATURES
                        .iter()
                        .map(|(headline, detail)| {
                            view! {
                                <li>
                                    <strong>{*headline}</strong>
                                    " "
                                    {*detail}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>

            <section class="landing-page__section">
                <h2>"How it works"</h2>
                <ol>
                    {HOW_IT_WORKS
                        .iter()
                        .map(|(step, detail)| {
                            view! {
                                <li>
                                    <strong>{*step}</strong>
                                    <p>{*detail}</p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>
            </section>
        </div>
    }
}
