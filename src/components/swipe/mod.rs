//! Swipeable rows.
//!
//! - `hook` - gesture state and input adapters for one row
//! - [`SwipeRow`] - list row rendering the gesture feedback and action menu

mod hook;
mod row;

pub use row::SwipeRow;
