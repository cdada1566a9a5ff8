//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCheck as Check, LuHistory as History, LuList as List, LuPencil as Edit,
        LuPlus as Plus, LuShoppingBasket as Basket, LuTrash2 as Trash, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBasket as Basket, BsCheckLg as Check, BsClockHistory as History, BsListUl as List,
        BsPencil as Edit, BsPlusLg as Plus, BsTrash as Trash, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHECK, Check);
themed_icon!(CLOSE, Close);
themed_icon!(EDIT, Edit);
themed_icon!(PLUS, Plus);
themed_icon!(TRASH, Trash);
themed_icon!(LIST, List);
themed_icon!(HISTORY, History);
themed_icon!(BASKET, Basket);
