//! Shopping list state transitions.
//!
//! Pure operations on the current list and the product history. The Leptos
//! layer wraps a [`ShoppingList`] in a signal and persists it after each
//! change.

use serde::{Deserialize, Serialize};

use crate::models::{Category, Item, ItemStatus, Product, StatusUpdate};

/// Current list plus the products remembered from earlier lists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub items: Vec<Item>,
    pub products: Vec<Product>,
    next_id: u64,
}

impl ShoppingList {
    /// Build a list from persisted parts, repairing the id counter.
    pub fn from_parts(items: Vec<Item>, products: Vec<Product>) -> Self {
        let next_id = items.iter().map(|i| i.id + 1).max().unwrap_or(0);
        Self {
            items,
            products,
            next_id,
        }
    }

    /// Small starter list for first visits.
    pub fn seeded() -> Self {
        let mut list = Self::default();
        for (name, quantity, category, price) in [
            ("Bananas", 6, "produce", 3.99),
            ("Whole milk", 2, "dairy", 5.49),
            ("Sliced bread", 1, "bakery", 4.89),
            ("Rice", 1, "pantry", 7.25),
            ("Dish soap", 1, "cleaning", 2.99),
        ] {
            list.add_item(name, quantity, category, price);
        }
        list
    }

    /// Items in `status`, in insertion order.
    pub fn with_status(&self, status: ItemStatus) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |i| i.status == status)
    }

    /// Ids of items in `status`, grouped by category along the shopping
    /// route. Empty categories are skipped; items keep insertion order
    /// within their group.
    pub fn grouped_by_category(&self, status: ItemStatus) -> Vec<(Category, Vec<u64>)> {
        let mut groups: Vec<(Category, Vec<u64>)> = Vec::new();
        for item in self.with_status(status) {
            let category = Category::from_id(&item.category);
            match groups.iter_mut().find(|(c, _)| *c == category) {
                Some((_, ids)) => ids.push(item.id),
                None => groups.push((category, vec![item.id])),
            }
        }
        groups.sort_by_key(|(category, _)| *category);
        groups
    }

    pub fn get(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Append a pending item and remember it as a product.
    ///
    /// Returns the new id, or `None` when the name is blank.
    pub fn add_item(&mut self, name: &str, quantity: u32, category: &str, price: f64) -> Option<u64> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Item {
            id,
            name: name.to_string(),
            quantity: quantity.max(1),
            category: category.to_string(),
            price,
            status: ItemStatus::Pending,
        });
        self.remember(name, quantity.max(1), category, price);
        Some(id)
    }

    /// Add a remembered product to the list.
    ///
    /// A product already pending in the list is not added twice.
    pub fn add_product(&mut self, name: &str) -> Option<u64> {
        if let Some(item) = self
            .with_status(ItemStatus::Pending)
            .find(|i| i.name.eq_ignore_ascii_case(name))
        {
            return Some(item.id);
        }

        let product = self.product(name)?.clone();
        self.add_item(
            &product.name,
            product.last_quantity,
            &product.category,
            product.suggested_price,
        )
    }

    /// Apply a row status change. Returns whether the item existed.
    pub fn apply(&mut self, id: u64, update: StatusUpdate) -> bool {
        match update {
            StatusUpdate::Delete => {
                let before = self.items.len();
                self.items.retain(|i| i.id != id);
                self.items.len() != before
            }
            StatusUpdate::Completed | StatusUpdate::Missing => {
                let status = if update == StatusUpdate::Completed {
                    ItemStatus::Completed
                } else {
                    ItemStatus::Missing
                };
                match self.items.iter_mut().find(|i| i.id == id) {
                    Some(item) => {
                        item.status = status;
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Rename an item. Blank names are ignored.
    pub fn rename(&mut self, id: u64, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Forget a product permanently. Returns whether it existed.
    pub fn remove_product(&mut self, name: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| !p.name.eq_ignore_ascii_case(name));
        self.products.len() != before
    }

    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    fn remember(&mut self, name: &str, quantity: u32, category: &str, price: f64) {
        match self
            .products
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(name))
        {
            Some(product) => {
                product.last_quantity = quantity;
                product.category = category.to_string();
                if price > 0.0 {
                    product.suggested_price = price;
                }
            }
            None => self.products.push(Product {
                name: name.to_string(),
                last_quantity: quantity,
                category: category.to_string(),
                suggested_price: price,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_rejects_blank_name() {
        let mut list = ShoppingList::default();
        assert_eq!(list.add_item("   ", 1, "", 0.0), None);
        assert!(list.items.is_empty());
        assert!(list.products.is_empty());
    }

    #[test]
    fn test_add_item_remembers_product_once() {
        let mut list = ShoppingList::default();
        list.add_item("Coffee", 1, "pantry", 12.0);
        list.add_item("coffee", 2, "pantry", 0.0);

        assert_eq!(list.items.len(), 2);
        assert_eq!(list.products.len(), 1);
        assert_eq!(list.products[0].last_quantity, 2);
        assert_eq!(list.products[0].suggested_price, 12.0);
    }

    #[test]
    fn test_apply_status_updates() {
        let mut list = ShoppingList::default();
        let a = list.add_item("Eggs", 12, "dairy", 0.0).unwrap();
        let b = list.add_item("Flour", 1, "pantry", 0.0).unwrap();

        assert!(list.apply(a, StatusUpdate::Completed));
        assert!(list.apply(b, StatusUpdate::Missing));
        assert_eq!(list.with_status(ItemStatus::Completed).count(), 1);
        assert_eq!(list.get(b).map(|i| i.status), Some(ItemStatus::Missing));

        assert!(list.apply(a, StatusUpdate::Delete));
        assert!(!list.apply(a, StatusUpdate::Delete));
        assert_eq!(list.items.len(), 1);
    }

    #[test]
    fn test_add_product_skips_duplicate_pending() {
        let mut list = ShoppingList::default();
        let id = list.add_item("Tea", 1, "", 0.0).unwrap();
        assert_eq!(list.add_product("TEA"), Some(id));
        assert_eq!(list.items.len(), 1);

        list.apply(id, StatusUpdate::Completed);
        let again = list.add_product("tea").unwrap();
        assert_ne!(again, id);
        assert_eq!(list.items.len(), 2);
    }

    #[test]
    fn test_add_unknown_product() {
        let mut list = ShoppingList::default();
        assert_eq!(list.add_product("Nope"), None);
    }

    #[test]
    fn test_remove_product_and_rename() {
        let mut list = ShoppingList::seeded();
        assert!(list.remove_product("rice"));
        assert!(list.product("Rice").is_none());

        let id = list.items[0].id;
        assert!(!list.rename(id, "  "));
        assert!(list.rename(id, "Plantains"));
        assert_eq!(list.get(id).map(|i| i.name.as_str()), Some("Plantains"));
    }

    #[test]
    fn test_grouped_by_category_follows_route() {
        let mut list = ShoppingList::default();
        let soap = list.add_item("Soap", 1, "cleaning", 0.0).unwrap();
        let milk = list.add_item("Milk", 1, "dairy", 0.0).unwrap();
        let odd = list.add_item("Batteries", 1, "", 0.0).unwrap();
        let apples = list.add_item("Apples", 1, "produce", 0.0).unwrap();
        let cheese = list.add_item("Cheese", 1, "Dairy", 0.0).unwrap();
        let bought = list.add_item("Yogurt", 1, "dairy", 0.0).unwrap();
        list.apply(bought, StatusUpdate::Completed);

        assert_eq!(
            list.grouped_by_category(ItemStatus::Pending),
            vec![
                (Category::Produce, vec![apples]),
                (Category::Dairy, vec![milk, cheese]),
                (Category::Cleaning, vec![soap]),
                (Category::General, vec![odd]),
            ]
        );
        assert_eq!(
            list.grouped_by_category(ItemStatus::Completed),
            vec![(Category::Dairy, vec![bought])]
        );
    }

    #[test]
    fn test_grouped_by_category_empty_list() {
        assert!(ShoppingList::default()
            .grouped_by_category(ItemStatus::Pending)
            .is_empty());
    }

    #[test]
    fn test_from_parts_continues_ids() {
        let seeded = ShoppingList::seeded();
        let mut list = ShoppingList::from_parts(seeded.items.clone(), seeded.products.clone());
        let id = list.add_item("Salt", 1, "", 0.0).unwrap();
        assert!(seeded.items.iter().all(|i| i.id != id));
    }
}
