//! Shopping list screens.
//!
//! - [`ShoppingListView`] - current list grouped by status
//! - [`NewListView`] - product history for building the next list

mod items;
mod products;

pub use items::ShoppingListView;
pub use products::NewListView;
