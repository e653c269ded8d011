use once_cell::sync::Lazy;
use serde::{Serialize, Deserialize};

use crate::rarity::Rarity;

/// A purchasable case.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Case {
    pub id: u32,
    pub name: String,
    pub price: u32,
    pub image: String,
    pub rarity: Rarity,
}

impl Case {
    fn new(id: u32, name: &str, price: u32, photo: &str, width: u32, rarity: Rarity) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            image: format!(
                "https://images.unsplash.com/{}?q=80&w={}&auto=format&fit=crop",
                photo, width
            ),
            rarity,
        }
    }
}

static CATALOG: Lazy<Vec<Case>> = Lazy::new(|| {
    vec![
        Case::new(1, "Standard Case", 199, "photo-1605792657660-596af9009e82", 2202, Rarity::Common),
        Case::new(2, "AK-47 Case", 499, "photo-1608270586620-248524c67de9", 2070, Rarity::Rare),
        Case::new(3, "Premium Case", 799, "photo-1587655957037-78defa2fb96c", 2070, Rarity::Epic),
        Case::new(4, "Elite Sniper", 899, "photo-1613591741539-fabb34e6b283", 1974, Rarity::Rare),
        Case::new(5, "Legendary Drop", 1299, "photo-1621975883759-1e027ca54ae3", 2070, Rarity::Legendary),
        Case::new(6, "Knife Case", 1599, "photo-1518709268805-4e9042af9f23", 1884, Rarity::Legendary),
        Case::new(7, "Tactical Kit", 699, "photo-1548269957-ae9d3aebc407", 2028, Rarity::Epic),
        Case::new(8, "Military Case", 599, "photo-1547700055-b61cacebece9", 2070, Rarity::Rare),
        Case::new(9, "Assault Case", 399, "photo-1555661530-68c8e98dbce3", 2073, Rarity::Common),
        Case::new(10, "Golden Collection", 999, "photo-1624454002302-89e325a0cf8a", 1974, Rarity::Epic),
    ]
});

/// All cases, in display order.
pub fn catalog() -> &'static [Case] {
    &CATALOG
}

pub fn find_case(id: u32) -> Option<&'static Case> {
    CATALOG.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<u32> = catalog().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), catalog().len());
        assert_eq!(catalog().len(), 10);
    }

    #[test]
    fn test_find_case() {
        let case = find_case(2).unwrap();
        assert_eq!(case.price, 499);
        assert_eq!(case.rarity, Rarity::Rare);
        assert!(find_case(42).is_none());
    }

    #[test]
    fn test_every_tier_is_on_sale() {
        let tiers: HashSet<Rarity> = catalog().iter().map(|c| c.rarity).collect();
        assert_eq!(tiers.len(), 4);
    }
}
