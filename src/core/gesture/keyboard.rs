//! Keyboard bindings for swipeable rows.

use super::types::SwipeAction;

/// Key that aborts a running gesture or closes an open menu.
pub const CANCEL_KEY: &str = "Escape";

/// Whether `key` (a `KeyboardEvent.key` value) cancels the gesture.
#[inline]
pub fn is_cancel_key(key: &str) -> bool {
    key == CANCEL_KEY
}

/// Shortcut for a focused, pending list row.
///
/// Mirrors the swipe outcomes for keyboard users: Enter or Space completes,
/// Delete or Backspace removes, `m` marks missing, `e` edits.
pub fn row_shortcut(key: &str) -> Option<SwipeAction> {
    match key {
        "Enter" | " " => Some(SwipeAction::Complete),
        "Delete" | "Backspace" => Some(SwipeAction::Delete),
        "m" | "M" => Some(SwipeAction::MarkMissing),
        "e" | "E" => Some(SwipeAction::Edit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_shortcuts() {
        assert_eq!(row_shortcut("Enter"), Some(SwipeAction::Complete));
        assert_eq!(row_shortcut(" "), Some(SwipeAction::Complete));
        assert_eq!(row_shortcut("Backspace"), Some(SwipeAction::Delete));
        assert_eq!(row_shortcut("M"), Some(SwipeAction::MarkMissing));
        assert_eq!(row_shortcut("e"), Some(SwipeAction::Edit));
        assert_eq!(row_shortcut("x"), None);
        assert_eq!(row_shortcut("Escape"), None);
    }

    #[test]
    fn test_cancel_key() {
        assert!(is_cancel_key("Escape"));
        assert!(!is_cancel_key("Esc"));
    }
}
