use plantopedia_core::ValueObject;

use crate::rarity::Rarity;
use crate::season::Season;

/// Itemized result of a pricing computation.
///
/// Derived, never persisted: the breakdown is recomputed on every read, so
/// there is no staleness to manage. `after_rarity` is unrounded; only
/// `final_price` is rounded to cents.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub base: f64,
    pub after_rarity: f64,
    pub final_price: f64,
    pub rarity_multiplier: f64,
    pub seasonal_adjustment: f64,
}

impl ValueObject for PriceBreakdown {}

/// Seasonal adjustment multiplier for an item peaking in `peak` viewed
/// during `current`.
///
/// The diagonal is exactly 1.0 (in-season, no premium); every off-diagonal
/// entry is >= 1.0. The off-diagonal values are hand-tuned business
/// constants, not derived from a formula, and the matrix is not symmetric.
pub fn seasonal_adjustment(peak: Season, current: Season) -> f64 {
    use Season::*;

    match (peak, current) {
        (Spring, Spring) => 1.0,
        (Spring, Summer) => 1.1,
        (Spring, Fall) => 1.3,
        (Spring, Winter) => 1.5,

        (Summer, Spring) => 1.1,
        (Summer, Summer) => 1.0,
        (Summer, Fall) => 1.2,
        (Summer, Winter) => 1.4,

        (Fall, Spring) => 1.3,
        (Fall, Summer) => 1.2,
        (Fall, Fall) => 1.0,
        (Fall, Winter) => 1.2,

        (Winter, Spring) => 1.4,
        (Winter, Summer) => 1.5,
        (Winter, Fall) => 1.2,
        (Winter, Winter) => 1.0,
    }
}

/// Compute the listed price for a catalog item.
///
/// `base_price` must be a finite, non-negative amount with at most two
/// fractional digits of intended precision; callers validate upstream (the
/// catalog schema stores integer cents). The function is pure: identical
/// inputs yield bit-identical output.
pub fn compute_price(
    base_price: f64,
    rarity: Rarity,
    peak_season: Season,
    current_season: Season,
) -> PriceBreakdown {
    let rarity_multiplier = rarity.multiplier();
    let seasonal_adjustment = seasonal_adjustment(peak_season, current_season);

    // No rounding on the intermediate; only the final price rounds to cents.
    let after_rarity = base_price * rarity_multiplier;
    let final_price = round2(base_price * rarity_multiplier * seasonal_adjustment);

    PriceBreakdown {
        base: base_price,
        after_rarity,
        final_price,
        rarity_multiplier,
        seasonal_adjustment,
    }
}

/// Round to 2 decimal places, halves away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
