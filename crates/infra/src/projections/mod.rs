//! Event-driven projections (read model builders).
//!
//! Projections consume event envelopes from the bus and maintain queryable
//! read models. They track a per-stream cursor so delivery can be
//! at-least-once: already-seen sequence numbers are skipped, gaps are
//! rejected.

pub mod plants;

pub use plants::{PlantCatalogProjection, PlantProjectionError, PlantReadModel};
