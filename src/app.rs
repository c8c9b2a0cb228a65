//! Root application component with routing, context providers, and the
//! protected-path guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    categories::CategoriesPage, dashboard::DashboardPage, expense_form::ExpenseFormPage,
    home::HomePage, login::LoginPage, register::RegisterPage,
};
use crate::state::session::SessionState;
use crate::util::storage::BrowserStorage;
use crate::util::{browser, route_guard};

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
/// Loads the persisted session record into the shared signal (empty during
/// SSR, real during hydration) and sets up client-side routing behind the
/// protected-path guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::load(&BrowserStorage));
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/spendtrack-client.css"/>
        <Title text="SpendTrack"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route
                        path=(StaticSegment("expenses"), StaticSegment("new"))
                        view=ExpenseFormPage
                    />
                    <Route
                        path=(StaticSegment("expenses"), StaticSegment("edit"), ParamSegment("id"))
                        view=ExpenseFormPage
                    />
                    <Route path=StaticSegment("categories") view=CategoriesPage/>
                </Routes>
            </main>
            <RouteGuard/>
        </Router>
    }
}

/// Invisible component enforcing the protected-path policy on every
/// navigation. Renders inside `Router` so the live pathname is in scope;
/// effects only run in the browser, so SSR output is unaffected.
#[component]
fn RouteGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();

    Effect::new(move || {
        let path = location.pathname.get();
        let logged_in = session.get().is_logged_in();
        route_guard::enforce(&path, logged_in, browser::alert, browser::redirect);
    });
}
