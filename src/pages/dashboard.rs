//! Dashboard page listing the signed-in user's expenses.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the expense and
//! category lists once a session is present and supports per-row edit and
//! delete. The route guard handles the actual bounce for logged-out
//! visitors; this page only shows a placeholder until that happens.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::expense_row::ExpenseRow;
use crate::net::types::Category;
use crate::state::categories::CategoriesState;
use crate::state::expenses::{ExpensesState, listed_total};
use crate::state::session::SessionState;

/// Date portion of an ISO-8601 datetime string. Anything too short or oddly
/// shaped passes through unchanged.
#[must_use]
pub fn display_date(raw: &str) -> &str {
    raw.get(..10).unwrap_or(raw)
}

/// Dollar rendering with two decimal places.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Display name for a category id, or a placeholder when the id is unknown.
#[must_use]
pub fn category_label(categories: &[Category], category_id: &str) -> String {
    categories
        .iter()
        .find(|c| c.id == category_id)
        .map_or_else(|| "Uncategorized".to_owned(), |c| c.name.clone())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let expenses = RwSignal::new(ExpensesState::default());
    let categories = RwSignal::new(CategoriesState::default());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let Some(user_id) = session.get().user_id else {
            return;
        };
        requested.set(true);
        expenses.update(|s| s.loading = true);
        categories.update(|s| s.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_user_expenses(&user_id).await {
                Ok(body) => expenses.update(|s| {
                    s.items = body.expenses;
                    s.total = body.total;
                    s.loading = false;
                    s.error = None;
                }),
                Err(e) => expenses.update(|s| {
                    s.loading = false;
                    s.error = Some(e);
                }),
            }
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

    let on_delete_request = Callback::new(move |expense_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api::SubmitOutcome;

            match crate::net::api::delete_expense(&expense_id).await {
                Ok(SubmitOutcome::Accepted(())) => expenses.update(|s| {
                    crate::state::expenses::remove_expense(&mut s.items, &expense_id);
                    s.total -= 1;
                }),
                Ok(SubmitOutcome::Rejected(failure)) => {
                    crate::util::browser::alert(&failure.message_or("Failed to delete expense"));
                }
                Err(e) => log::error!("expense delete failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = expense_id;
        }
    });

    view! {
        <Show
            when=move || session.get().is_logged_in()
            fallback=|| {
                view! {
                    <div class="dashboard-page">
                        <p>"Redirecting to login..."</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"Dashboard"</h1>
                    <span class="dashboard-page__spacer"></span>
                    <a class="btn btn--primary" href="/expenses/new">
                        "+ New Expense"
                    </a>
                </header>

                <Show when=move || expenses.get().error.is_some()>
                    <p class="dashboard-page__error">
                        {move || expenses.get().error.unwrap_or_default()}
                    </p>
                </Show>

                <Show
                    when=move || !expenses.get().loading
                    fallback=move || view! { <p>"Loading expenses..."</p> }
                >
                    <p class="dashboard-page__summary">
                        {move || {
                            let state = expenses.get();
                            format!(
                                "{} of {} expenses, {} listed",
                                state.items.len(),
                                state.total,
                                format_amount(listed_total(&state.items)),
                            )
                        }}
                    </p>
                    <Show when=move || expenses.get().items.is_empty()>
                        <p class="dashboard-page__empty">"No expenses yet. Add your first one."</p>
                    </Show>
                    <table class="expense-table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Description"</th>
                                <th>"Category"</th>
                                <th>"Amount"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let names = categories.get().items;
                                expenses
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|e| {
                                        view! {
                                            <ExpenseRow
                                                id=e.id
                                                date=display_date(&e.date).to_owned()
                                                description=e.description
                                                category=category_label(&names, &e.category_id)
                                                amount=format_amount(e.amount)
                                                on_delete=on_delete_request
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </div>
        </Show>
    }
}
