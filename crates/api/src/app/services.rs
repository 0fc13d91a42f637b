use std::sync::Arc;

use plantopedia_catalog::{PlantId, PlantStatus};
use plantopedia_core::{AggregateId, DomainError};
use plantopedia_events::{EventBus, EventEnvelope, InMemoryEventBus};
use plantopedia_infra::{
    command_dispatcher::{CommandDispatcher, DispatchError},
    event_store::{InMemoryEventStore, StoredEvent},
    projections::plants::{PlantCatalogProjection, PlantReadModel},
    read_model::InMemoryStore,
};

type InMemoryDispatcher = CommandDispatcher<
    Arc<InMemoryEventStore>,
    Arc<InMemoryEventBus<EventEnvelope<serde_json::Value>>>,
>;

type PlantsProjection = PlantCatalogProjection<Arc<InMemoryStore<PlantId, PlantReadModel>>>;

/// Application services: dispatcher + plant catalog projection.
#[derive(Clone)]
pub struct AppServices {
    dispatcher: Arc<InMemoryDispatcher>,
    plants_projection: Arc<PlantsProjection>,
}

/// Wire up in-memory infra: store + bus + projection + background subscriber.
pub fn build_services() -> AppServices {
    let store = Arc::new(InMemoryEventStore::new());
    let bus: Arc<InMemoryEventBus<EventEnvelope<serde_json::Value>>> =
        Arc::new(InMemoryEventBus::new());

    let rm_store: Arc<InMemoryStore<PlantId, PlantReadModel>> = Arc::new(InMemoryStore::new());
    let plants_projection: Arc<PlantsProjection> =
        Arc::new(PlantCatalogProjection::new(rm_store));

    // Background subscriber: bus -> projection.
    {
        let sub = bus.subscribe();
        let plants_projection = plants_projection.clone();
        tokio::task::spawn_blocking(move || {
            loop {
                match sub.recv() {
                    Ok(env) => {
                        if let Err(e) = plants_projection.apply_envelope(&env) {
                            tracing::warn!("projection apply failed: {e}");
                        }
                    }
                    Err(_) => break,
                }
            }
        });
    }

    let dispatcher: Arc<InMemoryDispatcher> =
        Arc::new(CommandDispatcher::new(store, bus));

    AppServices {
        dispatcher,
        plants_projection,
    }
}

impl AppServices {
    pub fn dispatch<A>(
        &self,
        aggregate_id: AggregateId,
        aggregate_type: &str,
        command: A::Command,
        make_aggregate: impl FnOnce(AggregateId) -> A,
    ) -> Result<Vec<StoredEvent>, DispatchError>
    where
        A: plantopedia_core::Aggregate<Error = DomainError>,
        A::Event: plantopedia_events::Event + serde::Serialize + serde::de::DeserializeOwned,
    {
        self.dispatcher
            .dispatch::<A>(aggregate_id, aggregate_type, command, make_aggregate)
    }

    pub fn plants_get(&self, plant_id: &PlantId) -> Option<PlantReadModel> {
        self.plants_projection.get(plant_id)
    }

    pub fn plants_list(&self) -> Vec<PlantReadModel> {
        let mut plants = self.plants_projection.list();
        // Stable ordering for list responses.
        plants.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.plant_id.0.as_uuid().cmp(b.plant_id.0.as_uuid()))
        });
        plants
    }

    /// Listed (publicly visible) plants only.
    pub fn plants_list_visible(&self) -> Vec<PlantReadModel> {
        self.plants_list()
            .into_iter()
            .filter(|rm| rm.status == PlantStatus::Listed)
            .collect()
    }
}
