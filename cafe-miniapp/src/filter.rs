//! Category and restaurant filtering
//!
//! `scope` is the restaurant id resolved from the selected address. Without
//! one nothing is filtered by restaurant. A `restaurant_id` of zero on a
//! category or item means it belongs to no restaurant.

use shared::{Category, MenuItem};

/// Slug of the chip that clears the category filter
pub const ALL_CATEGORIES: &str = "all";

pub fn filter_categories(categories: &[Category], scope: Option<i64>) -> Vec<&Category> {
    categories
        .iter()
        .filter(|category| match (scope, bound_restaurant(category.restaurant_id)) {
            (Some(scope), Some(id)) => id == scope,
            _ => true,
        })
        .collect()
}

/// `None` keeps everything, otherwise exact slug match
pub fn filter_by_category<'a>(items: &'a [MenuItem], active: Option<&str>) -> Vec<&'a MenuItem> {
    items
        .iter()
        .filter(|item| matches_category(item, active))
        .collect()
}

pub fn filter_by_restaurant<'a>(
    items: &'a [MenuItem],
    scope: Option<i64>,
    selected_address_id: Option<&str>,
) -> Vec<&'a MenuItem> {
    items
        .iter()
        .filter(|item| matches_restaurant(item, scope, selected_address_id))
        .collect()
}

/// Items the menu grid shows
pub fn visible_items<'a>(
    items: &'a [MenuItem],
    active: Option<&str>,
    scope: Option<i64>,
    selected_address_id: Option<&str>,
) -> Vec<&'a MenuItem> {
    items
        .iter()
        .filter(|item| {
            matches_category(item, active) && matches_restaurant(item, scope, selected_address_id)
        })
        .collect()
}

fn bound_restaurant(restaurant_id: Option<i64>) -> Option<i64> {
    restaurant_id.filter(|id| *id != 0)
}

fn matches_category(item: &MenuItem, active: Option<&str>) -> bool {
    active.is_none_or(|slug| item.category == slug)
}

fn matches_restaurant(item: &MenuItem, scope: Option<i64>, selected_address_id: Option<&str>) -> bool {
    let Some(scope) = scope else {
        return true;
    };
    match bound_restaurant(item.restaurant_id) {
        Some(id) => id == scope,
        // legacy items are bound to an address id instead
        None => match item.address_id.as_deref() {
            None => true,
            Some(address_id) => Some(address_id) == selected_address_id,
        },
    }
}
