//! Category-list state for the categories screen and the expense form.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use crate::net::types::Category;

/// Category list backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct CategoriesState {
    pub items: Vec<Category>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Drop the category with `category_id` from `items`, if present.
pub fn remove_category(items: &mut Vec<Category>, category_id: &str) {
    items.retain(|c| c.id != category_id);
}
