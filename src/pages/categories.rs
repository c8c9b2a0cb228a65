//! Category management screen: list, create, delete.
//!
//! Deletion can be refused server-side while expenses still reference the
//! category; that refusal surfaces as a blocking alert with the server's
//! explanation.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use leptos::prelude::*;

use crate::net::types::CategoryBody;
use crate::state::categories::CategoriesState;
use crate::state::session::SessionState;

/// Build the request body for a category create. An empty description is
/// left unset so the server applies its default.
#[must_use]
pub fn category_body(name: &str, description: &str, user_id: &str) -> CategoryBody {
    CategoryBody {
        name: name.to_owned(),
        user_id: user_id.to_owned(),
        description: (!description.is_empty()).then(|| description.to_owned()),
    }
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let categories = RwSignal::new(CategoriesState::default());
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let Some(user_id) = session.get().user_id else {
            return;
        };
        requested.set(true);
        categories.update(|s| s.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_user_categories(&user_id).await {
                Ok(body) => categories.update(|s| {
                    s.items = body.categories;
                    s.loading = false;
                    s.error = None;
                }),
                Err(e) => categories.update(|s| {
                    s.loading = false;
                    s.error = Some(e);
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
        }
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(user_id) = session.get().user_id else {
            return;
        };
        let name_value = name.get();
        let description_value = description.get();
        busy.set(true);
        errors.set(Vec::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api::SubmitOutcome;

            let body = category_body(&name_value, &description_value, &user_id);
            match crate::net::api::create_category(&body).await {
                Ok(SubmitOutcome::Accepted(())) => {
                    name.set(String::new());
                    description.set(String::new());
                    // Drop the request latch so the list effect refetches.
                    requested.set(false);
                }
                Ok(SubmitOutcome::Rejected(failure)) => {
                    errors.set(failure.lines_or("Failed to create category"));
                }
                Err(e) => log::error!("category create failed: {e}"),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, description_value, user_id);
        }
    };

    let on_delete = move |category_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api::SubmitOutcome;

            match crate::net::api::delete_category(&category_id).await {
                Ok(SubmitOutcome::Accepted(())) => {
                    categories.update(|s| {
                        crate::state::categories::remove_category(&mut s.items, &category_id);
                    });
                }
                Ok(SubmitOutcome::Rejected(failure)) => {
                    crate::util::browser::alert(&failure.message_or("Failed to delete category"));
                }
                Err(e) => log::error!("category delete failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = category_id;
        }
    };

    view! {
        <Show
            when=move || session.get().is_logged_in()
            fallback=|| {
                view! {
                    <div class="categories-page">
                        <p>"Redirecting to login..."</p>
                    </div>
                }
            }
        >
            <div class="categories-page">
                <h1>"Categories"</h1>

                <div class="categories-page__errors">
                    {move || {
                        errors
                            .get()
                            .into_iter()
                            .map(|line| view! { <div class="alert alert-danger">{line}</div> })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <form class="category-form" on:submit=on_create>
                    <input
                        class="category-form__input"
                        type="text"
                        placeholder="Category name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="category-form__input"
                        type="text"
                        placeholder="Description (optional)"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Add Category"
                    </button>
                </form>

                <Show when=move || categories.get().error.is_some()>
                    <p class="categories-page__error">
                        {move || categories.get().error.unwrap_or_default()}
                    </p>
                </Show>

                <Show
                    when=move || !categories.get().loading
                    fallback=move || view! { <p>"Loading categories..."</p> }
                >
                    <ul class="category-list">
                        {move || {
                            categories
                                .get()
                                .items
                                .into_iter()
                                .map(|c| {
                                    let delete_id = c.id.clone();
                                    let description = c.description.unwrap_or_default();
                                    view! {
                                        <li class="category-list__item">
                                            <span class="category-list__name">{c.name}</span>
                                            <span class="category-list__description">{description}</span>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| on_delete(delete_id.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </div>
        </Show>
    }
}
