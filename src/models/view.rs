//! Top-level view selection.

/// Which screen the shell shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Current shopping list (default)
    #[default]
    List,
    /// Product history for building a new list
    NewList,
}

impl ViewMode {
    /// Tab label in the header.
    pub fn label(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::NewList => "New list",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_list() {
        assert_eq!(ViewMode::default(), ViewMode::List);
    }
}
