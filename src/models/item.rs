//! Shopping list item and product types.

use serde::{Deserialize, Serialize};

use crate::core::gesture::SwipeAction;

/// Purchase state of a list item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Still to buy; the only state that accepts gestures.
    #[default]
    Pending,
    /// Bought.
    Completed,
    /// Not available at the store.
    Missing,
}

impl ItemStatus {
    /// Section heading for the list view.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "To buy",
            Self::Completed => "In the cart",
            Self::Missing => "Missing",
        }
    }

    /// Whether rows in this state accept swipe gestures.
    #[inline]
    pub fn accepts_gestures(self) -> bool {
        self == Self::Pending
    }
}

/// Entry of the current shopping list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub status: ItemStatus,
}

/// Product remembered from earlier lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub last_quantity: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub suggested_price: f64,
}

/// Status change requested by a list row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusUpdate {
    Completed,
    Missing,
    Delete,
}

impl StatusUpdate {
    /// Status change for a list-row action, if the action is one.
    pub fn from_action(action: SwipeAction) -> Option<Self> {
        match action {
            SwipeAction::Complete => Some(Self::Completed),
            SwipeAction::MarkMissing => Some(Self::Missing),
            SwipeAction::Delete => Some(Self::Delete),
            SwipeAction::AddToList | SwipeAction::Edit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pending_accepts_gestures() {
        assert!(ItemStatus::Pending.accepts_gestures());
        assert!(!ItemStatus::Completed.accepts_gestures());
        assert!(!ItemStatus::Missing.accepts_gestures());
    }

    #[test]
    fn test_status_update_from_action() {
        assert_eq!(
            StatusUpdate::from_action(SwipeAction::MarkMissing),
            Some(StatusUpdate::Missing)
        );
        assert_eq!(StatusUpdate::from_action(SwipeAction::Edit), None);
    }

    #[test]
    fn test_item_status_serializes_lowercase() {
        let json = serde_json::to_string(&ItemStatus::Missing).unwrap();
        assert_eq!(json, "\"missing\"");
    }

    #[test]
    fn test_item_defaults_missing_fields() {
        let item: Item = serde_json::from_str(r#"{"id":3,"name":"Arroz","quantity":1}"#).unwrap();
        assert_eq!(item.status, ItemStatus::Pending);
        assert_eq!(item.price, 0.0);
        assert!(item.category.is_empty());
    }
}
