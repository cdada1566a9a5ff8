//! Data models for the shopping list.
//!
//! - [`Category`] - supermarket aisles in shopping-route order
//! - [`Item`], [`ItemStatus`] - entries of the current list
//! - [`Product`] - previously bought products offered when building a new list
//! - [`StatusUpdate`] - what a list row gesture does to its item
//! - [`ViewMode`] - which screen is shown

mod category;
mod item;
mod view;

pub use category::Category;
pub use item::{Item, ItemStatus, Product, StatusUpdate};
pub use view::ViewMode;
