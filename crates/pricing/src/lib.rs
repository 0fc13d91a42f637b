//! `plantopedia-pricing` — dynamic pricing for the plant catalog.
//!
//! Pure, synchronous price computation: a catalog item's base price, rarity
//! class and peak season are mapped against the viewing season to a final
//! price with an itemized breakdown. No IO, no shared state; safe to call
//! from any number of concurrent callers.

pub mod engine;
pub mod rarity;
pub mod season;

pub use engine::{PriceBreakdown, compute_price, seasonal_adjustment};
pub use rarity::Rarity;
pub use season::Season;
