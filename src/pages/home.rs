//! Public landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let logged_in = move || session.get().is_logged_in();

    view! {
        <div class="home-page">
            <h1>"Track where your money goes"</h1>
            <p class="home-page__tagline">
                "Record expenses, sort them into categories, and see the totals add up."
            </p>
            <div class="home-page__actions">
                <Show
                    when=logged_in
                    fallback=|| {
                        view! {
                            <a class="btn btn--primary" href="/register">
                                "Get Started"
                            </a>
                            <a class="btn" href="/login">
                                "Login"
                            </a>
                        }
                    }
                >
                    <a class="btn btn--primary" href="/dashboard">
                        "Go to Dashboard"
                    </a>
                </Show>
            </div>
        </div>
    }
}
