use serde::{Serialize, Deserialize};

/// Rarity tier of a case or an item, ordered by value.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];

    /// Lowest price an item of this tier can have.
    pub fn base_price(&self) -> u32 {
        match self {
            Self::Common => 100,
            Self::Rare => 300,
            Self::Epic => 700,
            Self::Legendary => 1500,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == name)
    }

    /// Epic and legendary items get the shine overlay on the result card
    pub fn is_premium(&self) -> bool {
        matches!(self, Self::Epic | Self::Legendary)
    }

    pub fn style(&self) -> RarityStyle {
        RarityStyle::from(*self)
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Styling lookup for a rarity, including the fallback used when a tier name
/// does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RarityStyle {
    Known(Rarity),
    Unknown,
}

impl From<Rarity> for RarityStyle {
    fn from(rarity: Rarity) -> Self {
        Self::Known(rarity)
    }
}

impl RarityStyle {
    pub fn from_name(name: &str) -> Self {
        Rarity::from_name(name).map_or(Self::Unknown, Self::Known)
    }

    pub fn border_class(&self) -> &'static str {
        match self {
            Self::Known(Rarity::Common) => "border-blue-500",
            Self::Known(Rarity::Rare) => "border-purple-500",
            Self::Known(Rarity::Epic) => "border-pink-500",
            Self::Known(Rarity::Legendary) => "border-yellow-400",
            Self::Unknown => "border-gray-400",
        }
    }

    /// Gradient stops for item tiles; pair with `bg-gradient-to-b`.
    pub fn gradient_class(&self) -> &'static str {
        match self {
            Self::Known(Rarity::Common) => "from-blue-500/20 to-blue-600/5",
            Self::Known(Rarity::Rare) => "from-purple-500/20 to-purple-600/5",
            Self::Known(Rarity::Epic) => "from-pink-500/20 to-pink-600/5",
            Self::Known(Rarity::Legendary) => "from-yellow-400/30 to-yellow-500/10",
            Self::Unknown => "from-gray-500/20 to-gray-600/5",
        }
    }

    /// Border plus flat tint used by catalog cards.
    pub fn card_class(&self) -> &'static str {
        match self {
            Self::Known(Rarity::Common) => "border-blue-500 bg-blue-500/10",
            Self::Known(Rarity::Rare) => "border-purple-500 bg-purple-500/10",
            Self::Known(Rarity::Epic) => "border-pink-500 bg-pink-500/10",
            Self::Known(Rarity::Legendary) => "border-yellow-400 bg-yellow-400/10",
            Self::Unknown => "border-gray-400 bg-gray-400/10",
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Known(Rarity::Common) => "rgba(59, 130, 246, 0.2)",
            Self::Known(Rarity::Rare) => "rgba(168, 85, 247, 0.2)",
            Self::Known(Rarity::Epic) => "rgba(236, 72, 153, 0.2)",
            Self::Known(Rarity::Legendary) => "rgba(234, 179, 8, 0.2)",
            Self::Unknown => "rgba(156, 163, 175, 0.2)",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Known(Rarity::Common) => "Common",
            Self::Known(Rarity::Rare) => "Rare",
            Self::Known(Rarity::Epic) => "Epic",
            Self::Known(Rarity::Legendary) => "Legendary",
            Self::Unknown => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_prices_grow_with_tier() {
        let prices: Vec<u32> = Rarity::ALL.iter().map(|r| r.base_price()).collect();
        assert_eq!(prices, vec![100, 300, 700, 1500]);
        assert!(Rarity::Common < Rarity::Legendary);
    }

    #[test]
    fn test_name_round_trip_and_fallback() {
        for rarity in Rarity::ALL {
            assert_eq!(Rarity::from_name(rarity.as_str()), Some(rarity));
        }
        let style = RarityStyle::from_name("mythic");
        assert_eq!(style, RarityStyle::Unknown);
        assert_eq!(style.label(), "Unknown");
        assert_eq!(style.border_class(), "border-gray-400");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Rarity::Legendary).unwrap();
        assert_eq!(json, "\"legendary\"");
        let parsed: Rarity = serde_json::from_str("\"epic\"").unwrap();
        assert_eq!(parsed, Rarity::Epic);
    }

    #[test]
    fn test_premium_tiers() {
        assert!(!Rarity::Common.is_premium());
        assert!(!Rarity::Rare.is_premium());
        assert!(Rarity::Epic.is_premium());
        assert!(Rarity::Legendary.is_premium());
    }
}
