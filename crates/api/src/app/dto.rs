use serde::Deserialize;

use plantopedia_infra::projections::plants::PlantReadModel;
use plantopedia_pricing::{Rarity, Season, compute_price};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlantRequest {
    pub name: String,
    pub scientific_name: Option<String>,
    pub description: String,
    pub category: String,
    pub rarity: Rarity,
    pub peak_season: Season,
    pub available_seasons: Vec<Season>,
    /// Base price in dollars (two fractional digits).
    pub base_price: f64,
    pub care_level: String,
    #[serde(default)]
    pub is_native: bool,
    #[serde(default)]
    pub attracts_pollinators: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepricePlantRequest {
    pub base_price: f64,
    pub rarity: Rarity,
    pub peak_season: Season,
}

// -------------------------
// Money conversion
// -------------------------

/// Convert a dollar amount from the wire into integer cents.
///
/// Rejects negative, non-finite, and out-of-range amounts.
pub fn dollars_to_cents(amount: f64) -> Option<u64> {
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }
    let cents = (amount * 100.0).round();
    if cents > u64::MAX as f64 {
        return None;
    }
    Some(cents as u64)
}

pub fn cents_to_dollars(cents: u64) -> f64 {
    cents as f64 / 100.0
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// Map a plant read model to its wire representation, annotated with the
/// dynamic price computed for `current_season`.
///
/// Field names are camelCase: this is the public response contract.
/// `isInSeason` means the current season is the plant's peak season (no
/// seasonal premium); seasonal availability plays no part in it.
pub fn plant_to_json(rm: &PlantReadModel, current_season: Season) -> serde_json::Value {
    let base = cents_to_dollars(rm.base_price_cents);
    let breakdown = compute_price(base, rm.rarity, rm.peak_season, current_season);
    let is_in_season = rm.peak_season == current_season;

    serde_json::json!({
        "id": rm.plant_id.0.to_string(),
        "name": rm.name,
        "scientificName": rm.scientific_name,
        "description": rm.description,
        "category": rm.category,
        "rarity": rm.rarity,
        "peakSeason": rm.peak_season,
        "availableSeasons": rm.available_seasons,
        "basePrice": breakdown.base,
        "careLevel": rm.care_level,
        "isNative": rm.is_native,
        "attractsPollinators": rm.attracts_pollinators,
        "status": rm.status,
        "dynamicPrice": breakdown.final_price,
        "rarityMultiplier": breakdown.rarity_multiplier,
        "seasonalAdjustment": breakdown.seasonal_adjustment,
        "currentSeason": current_season,
        "isInSeason": is_in_season,
        "priceBreakdown": {
            "base": breakdown.base,
            "afterRarity": breakdown.after_rarity,
            "final": breakdown.final_price,
        },
    })
}
