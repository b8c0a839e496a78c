//! # List Router
//!
//! Decides which part of a shopping list a shop receives, based on its category.
//!
//! | Category | Items | List type |
//! |----------|-------|-----------|
//! | Vegetable Shop | vegetables | `Vegetable` |
//! | Grocery Store, Bakery | groceries | `Grocery` |
//! | Supermarket, General Store | vegetables then groceries | `Mixed` |

use crate::model::{ListType, OrderItem, ShopCategory, ShoppingList};
use thiserror::Error;

/// Errors raised while routing a list.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RoutingError {
    /// The selected sub-list has no items. Nothing is written.
    #[error("Your {0} list is empty, nothing to send")]
    EmptyList(ListType),
}

/// The items a shop will receive, all starting as unavailable.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedList {
    items: Vec<OrderItem>,
    list_type: ListType,
}

impl RoutedList {
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn list_type(&self) -> ListType {
        self.list_type
    }

    pub fn into_parts(self) -> (Vec<OrderItem>, ListType) {
        (self.items, self.list_type)
    }
}

/// Picks the sub-list for a shop of `category`.
pub fn route_list(list: &ShoppingList, category: ShopCategory) -> Result<RoutedList, RoutingError> {
    let (ingredients, list_type) = match category {
        ShopCategory::VegetableShop => (list.vegetable_shop.clone(), ListType::Vegetable),
        ShopCategory::GroceryStore | ShopCategory::Bakery => (list.grocery_shop.clone(), ListType::Grocery),
        ShopCategory::Supermarket | ShopCategory::General => {
            let mut all = list.vegetable_shop.clone();
            all.extend(list.grocery_shop.iter().cloned());
            (all, ListType::Mixed)
        }
    };

    if ingredients.is_empty() {
        return Err(RoutingError::EmptyList(list_type));
    }

    Ok(RoutedList {
        items: ingredients.into_iter().map(OrderItem::from).collect(),
        list_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    fn tomato_salt() -> ShoppingList {
        ShoppingList {
            vegetable_shop: vec![Ingredient::new("Tomato", 4.0, "pcs")],
            grocery_shop: vec![Ingredient::new("Salt", 1.0, "tsp")],
        }
    }

    fn names(routed: &RoutedList) -> Vec<&str> {
        routed.items().iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn vegetable_shop_gets_vegetables() {
        let routed = route_list(&tomato_salt(), ShopCategory::VegetableShop).unwrap();
        assert_eq!(names(&routed), vec!["Tomato"]);
        assert_eq!(routed.list_type(), ListType::Vegetable);
    }

    #[test]
    fn bakery_and_grocery_get_groceries() {
        for category in [ShopCategory::Bakery, ShopCategory::GroceryStore] {
            let routed = route_list(&tomato_salt(), category).unwrap();
            assert_eq!(names(&routed), vec!["Salt"]);
            assert_eq!(routed.list_type(), ListType::Grocery);
        }
    }

    #[test]
    fn supermarket_gets_everything_vegetables_first() {
        for category in [ShopCategory::Supermarket, ShopCategory::General] {
            let routed = route_list(&tomato_salt(), category).unwrap();
            assert_eq!(names(&routed), vec!["Tomato", "Salt"]);
            assert_eq!(routed.list_type(), ListType::Mixed);
        }
    }

    #[test]
    fn routed_items_start_unavailable() {
        let routed = route_list(&tomato_salt(), ShopCategory::Supermarket).unwrap();
        assert!(routed.items().iter().all(|item| !item.available));
    }

    #[test]
    fn empty_sub_list_is_rejected() {
        let empty = ShoppingList::default();
        for category in [
            ShopCategory::VegetableShop,
            ShopCategory::GroceryStore,
            ShopCategory::Bakery,
            ShopCategory::Supermarket,
            ShopCategory::General,
        ] {
            assert!(matches!(route_list(&empty, category), Err(RoutingError::EmptyList(_))));
        }

        let groceries_only = ShoppingList {
            vegetable_shop: vec![],
            grocery_shop: vec![Ingredient::new("Salt", 1.0, "tsp")],
        };
        let err = route_list(&groceries_only, ShopCategory::VegetableShop).unwrap_err();
        assert_eq!(err.to_string(), "Your Vegetable list is empty, nothing to send");
    }
}
