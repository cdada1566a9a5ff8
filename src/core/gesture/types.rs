//! Public gesture types: directions, stages, actions and the render snapshot.

/// Horizontal swipe direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Leftward progressive-menu stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Menu not shown
    #[default]
    Hidden,
    /// Edit/delete buttons revealed
    Revealed,
    /// Past the commit threshold; releasing fires the left action
    Action,
}

/// Which kind of row the controller drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeVariant {
    /// Row of the current shopping list.
    ListItem,
    /// Product row in the new-list picker.
    NewListItem,
}

/// Discrete outcome of a gesture or a menu tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeAction {
    /// Mark the item as bought.
    Complete,
    /// Mark the item as missing from the store.
    MarkMissing,
    /// Add the product to the current list.
    AddToList,
    /// Remove the subject.
    Delete,
    /// Open the editor for the subject.
    Edit,
}

/// Buttons of the revealed action menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Edit,
    Add,
    Delete,
}

impl SwipeVariant {
    /// Action committed by a rightward swipe.
    pub fn right_action(self) -> SwipeAction {
        match self {
            Self::ListItem => SwipeAction::Complete,
            Self::NewListItem => SwipeAction::AddToList,
        }
    }

    /// Action committed by a leftward swipe past the menu.
    pub fn left_action(self) -> SwipeAction {
        match self {
            Self::ListItem => SwipeAction::MarkMissing,
            Self::NewListItem => SwipeAction::Delete,
        }
    }

    /// Buttons shown in the revealed menu, in display order.
    pub fn menu_actions(self) -> [MenuAction; 2] {
        match self {
            Self::ListItem => [MenuAction::Edit, MenuAction::Delete],
            Self::NewListItem => [MenuAction::Add, MenuAction::Delete],
        }
    }
}

impl From<MenuAction> for SwipeAction {
    fn from(action: MenuAction) -> Self {
        match action {
            MenuAction::Edit => Self::Edit,
            MenuAction::Add => Self::AddToList,
            MenuAction::Delete => Self::Delete,
        }
    }
}

/// Row feedback while dragging, used to pick a CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragFeedback {
    RightPreview,
    RightComplete,
    LeftPreview,
    LeftComplete,
}

/// Render-facing view of the controller state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSnapshot {
    /// A drag is in progress.
    pub active: bool,
    /// Signed displacement from the press origin (0 when inactive).
    pub offset: f64,
    /// Direction once past the sensitivity floor.
    pub direction: Option<Direction>,
    /// Leftward menu stage.
    pub stage: Stage,
    /// Show the check/cross preview icon.
    pub preview_visible: bool,
    /// Show the edit/delete menu.
    pub menu_visible: bool,
    /// Row feedback class while dragging.
    pub feedback: Option<DragFeedback>,
}
