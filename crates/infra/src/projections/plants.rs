use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use thiserror::Error;

use plantopedia_catalog::{PlantEvent, PlantId, PlantStatus};
use plantopedia_core::AggregateId;
use plantopedia_events::EventEnvelope;
use plantopedia_pricing::{Rarity, Season};

/// Queryable plant read model (catalog entry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantReadModel {
    pub plant_id: PlantId,
    pub name: String,
    pub scientific_name: Option<String>,
    pub description: String,
    pub category: String,
    pub rarity: Rarity,
    pub peak_season: Season,
    pub available_seasons: Vec<Season>,
    pub base_price_cents: u64,
    pub care_level: String,
    pub is_native: bool,
    pub attracts_pollinators: bool,
    pub status: PlantStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum PlantProjectionError {
    #[error("failed to deserialize plant event: {0}")]
    Deserialize(String),

    #[error("event plant_id does not match envelope aggregate_id")]
    AggregateMismatch,

    #[error("non-monotonic sequence number (last={last}, found={found})")]
    NonMonotonicSequence { last: u64, found: u64 },

    #[error("event arrived for unknown plant stream")]
    MissingReadModel,
}

/// Projection that maintains the plant catalog read model.
///
/// Tracks a per-stream cursor so envelope delivery can be at-least-once:
/// duplicates are skipped, gaps are rejected.
#[derive(Debug)]
pub struct PlantCatalogProjection<S>
where
    S: crate::read_model::ReadModelStore<PlantId, PlantReadModel>,
{
    store: S,
    cursors: RwLock<HashMap<AggregateId, u64>>,
}

impl<S> PlantCatalogProjection<S>
where
    S: crate::read_model::ReadModelStore<PlantId, PlantReadModel>,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            cursors: RwLock::new(HashMap::new()),
        }
    }

    fn get_cursor(&self, aggregate_id: AggregateId) -> u64 {
        match self.cursors.read() {
            Ok(cursors) => *cursors.get(&aggregate_id).unwrap_or(&0),
            Err(_) => 0,
        }
    }

    fn update_cursor(&self, aggregate_id: AggregateId, sequence_number: u64) {
        if let Ok(mut cursors) = self.cursors.write() {
            cursors.insert(aggregate_id, sequence_number);
        }
    }

    pub fn get(&self, plant_id: &PlantId) -> Option<PlantReadModel> {
        self.store.get(plant_id)
    }

    pub fn list(&self) -> Vec<PlantReadModel> {
        self.store.list()
    }

    /// Apply one event envelope. Envelopes for other aggregate types are
    /// ignored; stale envelopes (seq <= cursor) are treated as duplicates.
    pub fn apply_envelope(
        &self,
        envelope: &EventEnvelope<JsonValue>,
    ) -> Result<(), PlantProjectionError> {
        if envelope.aggregate_type() != "catalog.plant" {
            return Ok(());
        }

        let aggregate_id = envelope.aggregate_id();
        let seq = envelope.sequence_number();

        let last = self.get_cursor(aggregate_id);
        if seq == 0 {
            return Err(PlantProjectionError::NonMonotonicSequence { last, found: seq });
        }
        if seq <= last {
            return Ok(());
        }
        // Streams start at 1, so a fresh cursor (last == 0) still requires
        // the next envelope to be exactly last + 1.
        if seq != last + 1 {
            return Err(PlantProjectionError::NonMonotonicSequence { last, found: seq });
        }

        let ev: PlantEvent = serde_json::from_value(envelope.payload().clone())
            .map_err(|e| PlantProjectionError::Deserialize(e.to_string()))?;

        let plant_id = match &ev {
            PlantEvent::PlantCreated(e) => e.plant_id,
            PlantEvent::PlantListed(e) => e.plant_id,
            PlantEvent::PlantRepriced(e) => e.plant_id,
            PlantEvent::PlantArchived(e) => e.plant_id,
        };

        if plant_id.0 != aggregate_id {
            return Err(PlantProjectionError::AggregateMismatch);
        }

        match ev {
            PlantEvent::PlantCreated(e) => {
                self.store.upsert(
                    e.plant_id,
                    PlantReadModel {
                        plant_id: e.plant_id,
                        name: e.name,
                        scientific_name: e.scientific_name,
                        description: e.description,
                        category: e.category,
                        rarity: e.rarity,
                        peak_season: e.peak_season,
                        available_seasons: e.available_seasons,
                        base_price_cents: e.base_price_cents,
                        care_level: e.care_level,
                        is_native: e.is_native,
                        attracts_pollinators: e.attracts_pollinators,
                        status: PlantStatus::Draft,
                        created_at: e.occurred_at,
                    },
                );
            }
            PlantEvent::PlantListed(e) => {
                let mut rm = self
                    .store
                    .get(&e.plant_id)
                    .ok_or(PlantProjectionError::MissingReadModel)?;
                rm.status = PlantStatus::Listed;
                self.store.upsert(e.plant_id, rm);
            }
            PlantEvent::PlantRepriced(e) => {
                let mut rm = self
                    .store
                    .get(&e.plant_id)
                    .ok_or(PlantProjectionError::MissingReadModel)?;
                rm.base_price_cents = e.base_price_cents;
                rm.rarity = e.rarity;
                rm.peak_season = e.peak_season;
                self.store.upsert(e.plant_id, rm);
            }
            PlantEvent::PlantArchived(e) => {
                let mut rm = self
                    .store
                    .get(&e.plant_id)
                    .ok_or(PlantProjectionError::MissingReadModel)?;
                rm.status = PlantStatus::Archived;
                self.store.upsert(e.plant_id, rm);
            }
        }

        self.update_cursor(aggregate_id, seq);
        Ok(())
    }

    /// Rebuild the read model from a full set of envelopes (deterministic).
    pub fn rebuild_from_scratch(
        &self,
        envelopes: impl IntoIterator<Item = EventEnvelope<JsonValue>>,
    ) -> Result<(), PlantProjectionError> {
        self.store.clear();
        if let Ok(mut cursors) = self.cursors.write() {
            cursors.clear();
        }

        let mut envs: Vec<_> = envelopes.into_iter().collect();
        envs.sort_by_key(|e| (*e.aggregate_id().as_uuid().as_bytes(), e.sequence_number()));

        for env in &envs {
            self.apply_envelope(env)?;
        }
        Ok(())
    }
}
