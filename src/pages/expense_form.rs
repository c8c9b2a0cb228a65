//! Create/edit form for a single expense.
//!
//! The same component serves `/expenses/new` and `/expenses/edit/{id}`; the
//! presence of the `id` route param selects edit mode and triggers a
//! prefill fetch. Field values stay raw strings until submit, when they are
//! packed into the JSON body the expenses API expects.

#[cfg(test)]
#[path = "expense_form_test.rs"]
mod expense_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::ExpenseBody;
use crate::state::categories::CategoriesState;
use crate::state::session::SessionState;

/// Offered payment methods. The server defaults to `Cash` when the field is
/// omitted entirely.
pub const PAYMENT_METHODS: [&str; 5] =
    ["Cash", "Credit Card", "Debit Card", "Bank Transfer", "Other"];

/// Editable form fields, kept as raw strings until submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub amount: String,
    pub description: String,
    pub category_id: String,
    pub date: String,
    pub payment_method: String,
}

/// Build the request body for a create or update submit.
///
/// The amount is sent as a JSON number when it parses and as the raw string
/// otherwise, so the server can answer with its own validation message.
/// Empty optional fields are left unset; the server fills their defaults.
#[must_use]
pub fn expense_body(draft: &ExpenseDraft, user_id: &str) -> ExpenseBody {
    let amount = draft.amount.parse::<f64>().map_or_else(
        |_| serde_json::Value::String(draft.amount.clone()),
        |n| serde_json::json!(n),
    );

    ExpenseBody {
        amount,
        description: draft.description.clone(),
        category_id: draft.category_id.clone(),
        user_id: user_id.to_owned(),
        date: (!draft.date.is_empty()).then(|| draft.date.clone()),
        payment_method: (!draft.payment_method.is_empty()).then(|| draft.payment_method.clone()),
    }
}

#[component]
pub fn ExpenseFormPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let expense_id = move || params.read().get("id");

    let amount = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category_id = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let payment_method = RwSignal::new("Cash".to_owned());
    let errors = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);

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

    // Prefill in edit mode.
    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get() {
            return;
        }
        let Some(id) = expense_id() else {
            return;
        };
        loaded.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_expense(&id).await {
                Ok(expense) => {
                    amount.set(expense.amount.to_string());
                    description.set(expense.description);
                    category_id.set(expense.category_id);
                    date.set(crate::pages::dashboard::display_date(&expense.date).to_owned());
                    payment_method.set(expense.payment_method.unwrap_or_else(|| "Cash".to_owned()));
                }
                Err(e) => log::error!("expense load failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(user_id) = session.get().user_id else {
            return;
        };
        let draft = ExpenseDraft {
            amount: amount.get(),
            description: description.get(),
            category_id: category_id.get(),
            date: date.get(),
            payment_method: payment_method.get(),
        };
        let editing = expense_id();
        busy.set(true);
        errors.set(Vec::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api::SubmitOutcome;

            let body = expense_body(&draft, &user_id);
            let result = match &editing {
                Some(id) => crate::net::api::update_expense(id, &body).await,
                None => crate::net::api::create_expense(&body).await,
            };
            match result {
                Ok(SubmitOutcome::Accepted(())) => crate::util::browser::redirect("/dashboard"),
                Ok(SubmitOutcome::Rejected(failure)) => {
                    errors.set(failure.lines_or("Failed to save expense"));
                    busy.set(false);
                }
                Err(e) => {
                    log::error!("expense save failed: {e}");
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, editing, user_id);
        }
    };

    let heading = move || if expense_id().is_some() { "Edit Expense" } else { "New Expense" };
    let submit_label = move || if expense_id().is_some() { "Save Changes" } else { "Add Expense" };

    view! {
        <Show
            when=move || session.get().is_logged_in()
            fallback=|| {
                view! {
                    <div class="expense-form-page">
                        <p>"Redirecting to login..."</p>
                    </div>
                }
            }
        >
            <div class="expense-form-page">
                <header class="expense-form-page__header">
                    <h1>{heading}</h1>
                    <span class="expense-form-page__spacer"></span>
                    <a class="btn" href="/dashboard">
                        "Back"
                    </a>
                </header>

                <div class="expense-form-page__errors">
                    {move || {
                        errors
                            .get()
                            .into_iter()
                            .map(|line| view! { <div class="alert alert-danger">{line}</div> })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <form class="expense-form" on:submit=on_submit>
                    <label class="expense-form__label">
                        "Amount"
                        <input
                            class="expense-form__input"
                            type="number"
                            step="0.01"
                            min="0"
                            prop:value=move || amount.get()
                            on:input=move |ev| amount.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="expense-form__label">
                        "Description"
                        <input
                            class="expense-form__input"
                            type="text"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="expense-form__label">
                        "Category"
                        <select
                            class="expense-form__input"
                            on:change=move |ev| category_id.set(event_target_value(&ev))
                        >
                            <option value="">"Select a category"</option>
                            {move || {
                                let current = category_id.get();
                                categories
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|c| {
                                        let selected = c.id == current;
                                        view! {
                                            <option value=c.id selected=selected>
                                                {c.name}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <label class="expense-form__label">
                        "Date"
                        <input
                            class="expense-form__input"
                            type="date"
                            prop:value=move || date.get()
                            on:input=move |ev| date.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="expense-form__label">
                        "Payment Method"
                        <select
                            class="expense-form__input"
                            on:change=move |ev| payment_method.set(event_target_value(&ev))
                        >
                            {move || {
                                let current = payment_method.get();
                                PAYMENT_METHODS
                                    .iter()
                                    .map(|m| {
                                        view! {
                                            <option value=*m selected=*m == current>
                                                {*m}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {submit_label}
                    </button>
                </form>
            </div>
        </Show>
    }
}
