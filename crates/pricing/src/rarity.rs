use core::str::FromStr;

use serde::{Deserialize, Serialize};

use plantopedia_core::DomainError;

/// Catalog rarity classification driving a price multiplier.
///
/// The set is closed. Ordering (common < uncommon < rare < exotic) reflects
/// scarcity only; the pricing algorithm never compares rarities, it looks up
/// the multiplier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Exotic,
}

impl Rarity {
    /// All rarities, least to most scarce.
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Uncommon, Rarity::Rare, Rarity::Exotic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Exotic => "exotic",
        }
    }

    /// Price multiplier for this rarity class.
    ///
    /// Monotonically increasing in scarcity; never zero or negative.
    pub fn multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.5,
            Rarity::Rare => 2.5,
            Rarity::Exotic => 4.0,
        }
    }
}

impl core::fmt::Display for Rarity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "common" => Ok(Rarity::Common),
            "uncommon" => Ok(Rarity::Uncommon),
            "rare" => Ok(Rarity::Rare),
            "exotic" => Ok(Rarity::Exotic),
            other => Err(DomainError::invalid_enum(format!(
                "rarity must be one of: common, uncommon, rare, exotic (got '{other}')"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_match_the_catalog_table() {
        assert_eq!(Rarity::Common.multiplier(), 1.0);
        assert_eq!(Rarity::Uncommon.multiplier(), 1.5);
        assert_eq!(Rarity::Rare.multiplier(), 2.5);
        assert_eq!(Rarity::Exotic.multiplier(), 4.0);
    }

    #[test]
    fn multipliers_increase_strictly_with_scarcity() {
        for pair in Rarity::ALL.windows(2) {
            assert!(pair[0].multiplier() < pair[1].multiplier());
        }
    }

    #[test]
    fn parse_rejects_unknown_rarity() {
        let err = "legendary".parse::<Rarity>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidEnum(_)));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for rarity in Rarity::ALL {
            assert_eq!(rarity.to_string().parse::<Rarity>().unwrap(), rarity);
        }
    }
}
