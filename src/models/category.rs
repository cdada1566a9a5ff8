//! Supermarket categories in shopping-route order.

/// Aisle grouping for list items.
///
/// Declaration order is the order a typical store is walked through, so the
/// derived `Ord` sorts groups along the shopping route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Produce,
    Butcher,
    Dairy,
    Frozen,
    Bakery,
    Pantry,
    Drinks,
    Sweets,
    Cleaning,
    Hygiene,
    /// Anything unknown or uncategorized
    #[default]
    General,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Self::Produce,
        Self::Butcher,
        Self::Dairy,
        Self::Frozen,
        Self::Bakery,
        Self::Pantry,
        Self::Drinks,
        Self::Sweets,
        Self::Cleaning,
        Self::Hygiene,
        Self::General,
    ];

    /// Identifier stored in [`Item::category`](super::Item::category).
    pub fn id(self) -> &'static str {
        match self {
            Self::Produce => "produce",
            Self::Butcher => "butcher",
            Self::Dairy => "dairy",
            Self::Frozen => "frozen",
            Self::Bakery => "bakery",
            Self::Pantry => "pantry",
            Self::Drinks => "drinks",
            Self::Sweets => "sweets",
            Self::Cleaning => "cleaning",
            Self::Hygiene => "hygiene",
            Self::General => "general",
        }
    }

    /// Look up a stored identifier. Unknown or blank ids fall back to
    /// [`Category::General`].
    pub fn from_id(id: &str) -> Self {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(id))
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Produce => "Produce",
            Self::Butcher => "Butcher",
            Self::Dairy => "Dairy",
            Self::Frozen => "Frozen",
            Self::Bakery => "Bakery",
            Self::Pantry => "Pantry",
            Self::Drinks => "Drinks",
            Self::Sweets => "Sweets",
            Self::Cleaning => "Cleaning",
            Self::Hygiene => "Hygiene",
            Self::General => "General",
        }
    }

    /// Short hint shown under the group header.
    pub fn description(self) -> &'static str {
        match self {
            Self::Produce => "Fruit and vegetables",
            Self::Butcher => "Meat, poultry and cold cuts",
            Self::Dairy => "Milk, cheese and yogurt",
            Self::Frozen => "Frozen food",
            Self::Bakery => "Bread, cakes and pastries",
            Self::Pantry => "Canned goods, grains and spices",
            Self::Drinks => "Soda, juice and water",
            Self::Sweets => "Candy and chocolate",
            Self::Cleaning => "Household cleaning",
            Self::Hygiene => "Personal care",
            Self::General => "Everything else",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_route_order() {
        assert!(Category::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_ids_round_trip_through_lookup() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), category);
        }
    }

    #[test]
    fn test_unknown_or_blank_id_is_general() {
        assert_eq!(Category::from_id(""), Category::General);
        assert_eq!(Category::from_id("garden"), Category::General);
        assert_eq!(Category::from_id(" Dairy "), Category::Dairy);
    }
}
