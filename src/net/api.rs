//! REST API helpers for talking to the expense server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Mutating calls separate transport failures (`Err(String)`) from requests
//! the server examined and rejected with a JSON body
//! (`Ok(SubmitOutcome::Rejected(..))`), so pages can render server-provided
//! messages verbatim and only log the rest.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    ApiFailure, CategoryBody, CategoryListResponse, Expense, ExpenseBody, ExpenseListResponse,
    SessionUser,
};
#[cfg(feature = "hydrate")]
use super::types::{ExpenseEnvelope, LoginResponse};

/// Login endpoint for email/password credentials.
pub const LOGIN_ENDPOINT: &str = "/api/users/login";
/// Account-creation endpoint.
pub const REGISTER_ENDPOINT: &str = "/api/users/register";

/// Outcome of a request the server actually processed.
///
/// `Rejected` carries the decoded failure body so callers can show the
/// server's own wording instead of inventing one.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    Accepted(T),
    Rejected(ApiFailure),
}

#[cfg(any(test, feature = "hydrate"))]
fn user_expenses_endpoint(user_id: &str) -> String {
    format!("/api/expenses/user/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn expense_endpoint(expense_id: &str) -> String {
    format!("/api/expenses/{expense_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_categories_endpoint(user_id: &str) -> String {
    format!("/api/categories/user/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn category_endpoint(category_id: &str) -> String {
    format!("/api/categories/{category_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn expense_list_failed_message(status: u16) -> String {
    format!("expense list request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn expense_fetch_failed_message(status: u16) -> String {
    format!("expense request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn category_list_failed_message(status: u16) -> String {
    format!("category list request failed: {status}")
}

/// Log in via `POST /api/users/login`.
///
/// A `200` yields the authenticated user; any other status yields the
/// server's failure body.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or a response body
/// cannot be decoded.
pub async fn login(email: &str, password: &str) -> Result<SubmitOutcome<SessionUser>, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
            Ok(SubmitOutcome::Accepted(body.user))
        } else {
            let failure: ApiFailure = resp.json().await.map_err(|e| e.to_string())?;
            Ok(SubmitOutcome::Rejected(failure))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Register a new account via `POST /api/users/register`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or a response body
/// cannot be decoded.
pub async fn register(
    username: &str,
    email: &str,
    password: &str,
) -> Result<SubmitOutcome<()>, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload =
            serde_json::json!({ "username": username, "email": email, "password": password });
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            Ok(SubmitOutcome::Accepted(()))
        } else {
            let failure: ApiFailure = resp.json().await.map_err(|e| e.to_string())?;
            Ok(SubmitOutcome::Rejected(failure))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch a user's expenses from `/api/expenses/user/{user_id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the body cannot be decoded.
pub async fn fetch_user_expenses(user_id: &str) -> Result<ExpenseListResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = user_expenses_endpoint(user_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(expense_list_failed_message(resp.status()));
        }
        resp.json::<ExpenseListResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch a single expense from `/api/expenses/{expense_id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the body cannot be decoded.
pub async fn fetch_expense(expense_id: &str) -> Result<Expense, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = expense_endpoint(expense_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(expense_fetch_failed_message(resp.status()));
        }
        let body: ExpenseEnvelope = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.expense)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = expense_id;
        Err("not available on server".to_owned())
    }
}

/// Create an expense via `POST /api/expenses`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or a response body
/// cannot be decoded.
pub async fn create_expense(body: &ExpenseBody) -> Result<SubmitOutcome<()>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/expenses")
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            Ok(SubmitOutcome::Accepted(()))
        } else {
            let failure: ApiFailure = resp.json().await.map_err(|e| e.to_string())?;
            Ok(SubmitOutcome::Rejected(failure))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err("not available on server".to_owned())
    }
}

/// Update an expense via `PUT /api/expenses/{expense_id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or a response body
/// cannot be decoded.
pub async fn update_expense(
    expense_id: &str,
    body: &ExpenseBody,
) -> Result<SubmitOutcome<()>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = expense_endpoint(expense_id);
        let resp = gloo_net::http::Request::put(&url)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            Ok(SubmitOutcome::Accepted(()))
        } else {
            let failure: ApiFailure = resp.json().await.map_err(|e| e.to_string())?;
            Ok(SubmitOutcome::Rejected(failure))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (expense_id, body);
        Err("not available on server".to_owned())
    }
}

/// Delete an expense via `DELETE /api/expenses/{expense_id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or a response body
/// cannot be decoded.
pub async fn delete_expense(expense_id: &str) -> Result<SubmitOutcome<()>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = expense_endpoint(expense_id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            Ok(SubmitOutcome::Accepted(()))
        } else {
            let failure: ApiFailure = resp.json().await.map_err(|e| e.to_string())?;
            Ok(SubmitOutcome::Rejected(failure))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = expense_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch a user's categories from `/api/categories/user/{user_id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the body cannot be decoded.
pub async fn fetch_user_categories(user_id: &str) -> Result<CategoryListResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = user_categories_endpoint(user_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(category_list_failed_message(resp.status()));
        }
        resp.json::<CategoryListResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err("not available on server".to_owned())
    }
}

/// Create a category via `POST /api/categories`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or a response body
/// cannot be decoded.
pub async fn create_category(body: &CategoryBody) -> Result<SubmitOutcome<()>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/categories")
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            Ok(SubmitOutcome::Accepted(()))
        } else {
            let failure: ApiFailure = resp.json().await.map_err(|e| e.to_string())?;
            Ok(SubmitOutcome::Rejected(failure))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err("not available on server".to_owned())
    }
}

/// Delete a category via `DELETE /api/categories/{category_id}`.
///
/// The server refuses to delete categories that still have expenses; that
/// refusal arrives as a `Rejected` outcome with the explanation.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or a response body
/// cannot be decoded.
pub async fn delete_category(category_id: &str) -> Result<SubmitOutcome<()>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = category_endpoint(category_id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            Ok(SubmitOutcome::Accepted(()))
        } else {
            let failure: ApiFailure = resp.json().await.map_err(|e| e.to_string())?;
            Ok(SubmitOutcome::Rejected(failure))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = category_id;
        Err("not available on server".to_owned())
    }
}
