//! Table row for one expense on the dashboard.
//!
//! DESIGN
//! ======
//! Presentation only: the page formats the fields and supplies the delete
//! callback, so the row stays free of fetch and state concerns.

use leptos::prelude::*;

/// One rendered expense with its edit link and delete action.
#[component]
pub fn ExpenseRow(
    id: String,
    date: String,
    description: String,
    category: String,
    amount: String,
    on_delete: Callback<String>,
) -> impl IntoView {
    let edit_href = format!("/expenses/edit/{id}");
    let delete_id = id;

    view! {
        <tr class="expense-row">
            <td>{date}</td>
            <td>{description}</td>
            <td>{category}</td>
            <td class="expense-row__amount">{amount}</td>
            <td class="expense-row__actions">
                <a class="btn" href=edit_href>
                    "Edit"
                </a>
                <button
                    class="btn btn--danger"
                    on:click=move |_| on_delete.run(delete_id.clone())
                    title="Delete expense"
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
