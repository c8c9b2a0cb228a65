//! Serde DTOs for the server's JSON payloads.
//!
//! DESIGN
//! ======
//! Shapes mirror the API responses exactly (Mongo `_id` strings, ISO-8601
//! date strings) so decoding stays lossless. Failure bodies are permissive:
//! the server sends either a single `error` string or a field-to-message
//! `errors` map, and older endpoints send neither, so both are optional.
//! Request bodies for the mutating endpoints live here too, so pages and
//! the API layer share one wire vocabulary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The signed-in user as returned inside a successful login response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Unique user identifier (Mongo ObjectId string).
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name; persisted alongside the id for the nav chrome.
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of a successful `POST /api/users/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: SessionUser,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a rejected request.
///
/// `errors` uses a `BTreeMap` so rendered error lines keep a stable field
/// order; on the wire it is an unordered JSON object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiFailure {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ApiFailure {
    /// The single error message, or `fallback` when the body carried none.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        self.error.clone().unwrap_or_else(|| fallback.to_owned())
    }

    /// One line per field entry when a field map is present (possibly zero
    /// lines for an empty map), otherwise a single line via [`Self::message_or`].
    #[must_use]
    pub fn lines_or(&self, fallback: &str) -> Vec<String> {
        match &self.errors {
            Some(field_errors) => field_errors.values().cloned().collect(),
            None => vec![self.message_or(fallback)],
        }
    }
}

/// An expense as returned by the `/api/expenses` endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "_id")]
    pub id: String,
    pub amount: f64,
    pub description: String,
    /// Owning category (Mongo ObjectId string).
    pub category_id: String,
    /// Owning user (Mongo ObjectId string).
    pub user_id: String,
    /// ISO-8601 timestamp of when the expense occurred.
    pub date: String,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Paginated expense list for one user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListResponse {
    pub expenses: Vec<Expense>,
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
}

/// Envelope around a single expense (`GET /api/expenses/{id}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEnvelope {
    pub expense: Expense,
}

/// Request body for an expense create or update.
///
/// `amount` passes through exactly as typed: input that parses becomes a
/// JSON number, anything else stays a raw string so the server answers with
/// its own validation message. Unset optional fields are omitted and the
/// server fills their defaults.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExpenseBody {
    pub amount: serde_json::Value,
    pub description: String,
    pub category_id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

/// A spending category as returned by the `/api/categories` endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Display color (hex), server-defaulted when absent at creation.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Paginated category list for one user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
}

/// Request body for a category create. An omitted description lets the
/// server apply its default.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryBody {
    pub name: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
