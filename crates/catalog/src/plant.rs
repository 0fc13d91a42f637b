use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use plantopedia_core::{Aggregate, AggregateId, AggregateRoot, DomainError};
use plantopedia_events::Event;
use plantopedia_pricing::{Rarity, Season};

/// Plant identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(pub AggregateId);

impl PlantId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for PlantId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Plant listing lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantStatus {
    Draft,
    Listed,
    Archived,
}

/// Aggregate root: Plant (one catalog entry).
///
/// Base price is stored in integer cents; the two-fractional-digit
/// constraint on prices is therefore structural, not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plant {
    id: PlantId,
    name: String,
    scientific_name: Option<String>,
    description: String,
    category: String,
    rarity: Rarity,
    peak_season: Season,
    available_seasons: Vec<Season>,
    base_price_cents: u64,
    care_level: String,
    is_native: bool,
    attracts_pollinators: bool,
    status: PlantStatus,
    version: u64,
    created: bool,
}

impl Plant {
    /// Create an empty, not-yet-created aggregate instance for rehydration.
    pub fn empty(id: PlantId) -> Self {
        Self {
            id,
            name: String::new(),
            scientific_name: None,
            description: String::new(),
            category: String::new(),
            rarity: Rarity::Common,
            peak_season: Season::Spring,
            available_seasons: Vec::new(),
            base_price_cents: 0,
            care_level: String::new(),
            is_native: false,
            attracts_pollinators: false,
            status: PlantStatus::Draft,
            version: 0,
            created: false,
        }
    }

    pub fn id_typed(&self) -> PlantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scientific_name(&self) -> Option<&str> {
        self.scientific_name.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn peak_season(&self) -> Season {
        self.peak_season
    }

    pub fn available_seasons(&self) -> &[Season] {
        &self.available_seasons
    }

    pub fn base_price_cents(&self) -> u64 {
        self.base_price_cents
    }

    pub fn care_level(&self) -> &str {
        &self.care_level
    }

    pub fn is_native(&self) -> bool {
        self.is_native
    }

    pub fn attracts_pollinators(&self) -> bool {
        self.attracts_pollinators
    }

    pub fn status(&self) -> PlantStatus {
        self.status
    }

    /// Check if the plant appears in the public catalog (must be Listed).
    pub fn is_listed(&self) -> bool {
        self.status == PlantStatus::Listed
    }
}

impl AggregateRoot for Plant {
    type Id = PlantId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: CreatePlant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlant {
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
    pub occurred_at: DateTime<Utc>,
}

/// Command: ListPlant (publish a draft to the catalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPlant {
    pub plant_id: PlantId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RepricePlant (edit the pricing attributes of an entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepricePlant {
    pub plant_id: PlantId,
    pub base_price_cents: u64,
    pub rarity: Rarity,
    pub peak_season: Season,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ArchivePlant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivePlant {
    pub plant_id: PlantId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantCommand {
    CreatePlant(CreatePlant),
    ListPlant(ListPlant),
    RepricePlant(RepricePlant),
    ArchivePlant(ArchivePlant),
}

/// Event: PlantCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantCreated {
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
    pub occurred_at: DateTime<Utc>,
}

/// Event: PlantListed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantListed {
    pub plant_id: PlantId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PlantRepriced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantRepriced {
    pub plant_id: PlantId,
    pub base_price_cents: u64,
    pub rarity: Rarity,
    pub peak_season: Season,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PlantArchived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantArchived {
    pub plant_id: PlantId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantEvent {
    PlantCreated(PlantCreated),
    PlantListed(PlantListed),
    PlantRepriced(PlantRepriced),
    PlantArchived(PlantArchived),
}

impl Event for PlantEvent {
    fn event_type(&self) -> &'static str {
        match self {
            PlantEvent::PlantCreated(_) => "catalog.plant.created",
            PlantEvent::PlantListed(_) => "catalog.plant.listed",
            PlantEvent::PlantRepriced(_) => "catalog.plant.repriced",
            PlantEvent::PlantArchived(_) => "catalog.plant.archived",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            PlantEvent::PlantCreated(e) => e.occurred_at,
            PlantEvent::PlantListed(e) => e.occurred_at,
            PlantEvent::PlantRepriced(e) => e.occurred_at,
            PlantEvent::PlantArchived(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Plant {
    type Command = PlantCommand;
    type Event = PlantEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            PlantEvent::PlantCreated(e) => {
                self.id = e.plant_id;
                self.name = e.name.clone();
                self.scientific_name = e.scientific_name.clone();
                self.description = e.description.clone();
                self.category = e.category.clone();
                self.rarity = e.rarity;
                self.peak_season = e.peak_season;
                self.available_seasons = e.available_seasons.clone();
                self.base_price_cents = e.base_price_cents;
                self.care_level = e.care_level.clone();
                self.is_native = e.is_native;
                self.attracts_pollinators = e.attracts_pollinators;
                self.status = PlantStatus::Draft;
                self.created = true;
            }
            PlantEvent::PlantListed(_) => {
                self.status = PlantStatus::Listed;
            }
            PlantEvent::PlantRepriced(e) => {
                self.base_price_cents = e.base_price_cents;
                self.rarity = e.rarity;
                self.peak_season = e.peak_season;
            }
            PlantEvent::PlantArchived(_) => {
                self.status = PlantStatus::Archived;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            PlantCommand::CreatePlant(cmd) => self.handle_create(cmd),
            PlantCommand::ListPlant(cmd) => self.handle_list(cmd),
            PlantCommand::RepricePlant(cmd) => self.handle_reprice(cmd),
            PlantCommand::ArchivePlant(cmd) => self.handle_archive(cmd),
        }
    }
}

impl Plant {
    fn ensure_plant_id(&self, plant_id: PlantId) -> Result<(), DomainError> {
        if self.id != plant_id {
            return Err(DomainError::invariant("plant_id mismatch"));
        }
        Ok(())
    }

    fn handle_create(&self, cmd: &CreatePlant) -> Result<Vec<PlantEvent>, DomainError> {
        if self.created {
            return Err(DomainError::conflict("plant already exists"));
        }

        if cmd.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        if cmd.description.trim().is_empty() {
            return Err(DomainError::validation("description cannot be empty"));
        }

        if cmd.category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }

        if cmd.available_seasons.is_empty() {
            return Err(DomainError::validation("available seasons cannot be empty"));
        }

        if !cmd.available_seasons.contains(&cmd.peak_season) {
            return Err(DomainError::invariant(
                "peak season must be one of the available seasons",
            ));
        }

        Ok(vec![PlantEvent::PlantCreated(PlantCreated {
            plant_id: cmd.plant_id,
            name: cmd.name.clone(),
            scientific_name: cmd.scientific_name.clone(),
            description: cmd.description.clone(),
            category: cmd.category.clone(),
            rarity: cmd.rarity,
            peak_season: cmd.peak_season,
            available_seasons: cmd.available_seasons.clone(),
            base_price_cents: cmd.base_price_cents,
            care_level: cmd.care_level.clone(),
            is_native: cmd.is_native,
            attracts_pollinators: cmd.attracts_pollinators,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_list(&self, cmd: &ListPlant) -> Result<Vec<PlantEvent>, DomainError> {
        if !self.created {
            return Err(DomainError::not_found());
        }
        self.ensure_plant_id(cmd.plant_id)?;

        if self.status == PlantStatus::Listed {
            return Err(DomainError::conflict("plant is already listed"));
        }

        if self.status == PlantStatus::Archived {
            return Err(DomainError::invariant("archived plants cannot be listed"));
        }

        Ok(vec![PlantEvent::PlantListed(PlantListed {
            plant_id: cmd.plant_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_reprice(&self, cmd: &RepricePlant) -> Result<Vec<PlantEvent>, DomainError> {
        if !self.created {
            return Err(DomainError::not_found());
        }
        self.ensure_plant_id(cmd.plant_id)?;

        if self.status == PlantStatus::Archived {
            return Err(DomainError::invariant("archived plants cannot be repriced"));
        }

        if !self.available_seasons.contains(&cmd.peak_season) {
            return Err(DomainError::invariant(
                "peak season must be one of the available seasons",
            ));
        }

        Ok(vec![PlantEvent::PlantRepriced(PlantRepriced {
            plant_id: cmd.plant_id,
            base_price_cents: cmd.base_price_cents,
            rarity: cmd.rarity,
            peak_season: cmd.peak_season,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_archive(&self, cmd: &ArchivePlant) -> Result<Vec<PlantEvent>, DomainError> {
        if !self.created {
            return Err(DomainError::not_found());
        }
        self.ensure_plant_id(cmd.plant_id)?;

        if self.status == PlantStatus::Archived {
            return Err(DomainError::conflict("plant is already archived"));
        }

        Ok(vec![PlantEvent::PlantArchived(PlantArchived {
            plant_id: cmd.plant_id,
            occurred_at: cmd.occurred_at,
        })])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantopedia_core::AggregateId;

    fn test_plant_id() -> PlantId {
        PlantId::new(AggregateId::new())
    }

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn create_cmd(plant_id: PlantId) -> CreatePlant {
        CreatePlant {
            plant_id,
            name: "Japanese Maple".to_string(),
            scientific_name: Some("Acer palmatum".to_string()),
            description: "Small ornamental tree with deep red foliage.".to_string(),
            category: "tree".to_string(),
            rarity: Rarity::Rare,
            peak_season: Season::Fall,
            available_seasons: vec![Season::Spring, Season::Summer, Season::Fall],
            base_price_cents: 4999,
            care_level: "moderate".to_string(),
            is_native: false,
            attracts_pollinators: false,
            occurred_at: test_time(),
        }
    }

    #[test]
    fn create_plant_emits_plant_created_event() {
        let plant_id = test_plant_id();
        let plant = Plant::empty(plant_id);
        let cmd = create_cmd(plant_id);

        let events = plant.handle(&PlantCommand::CreatePlant(cmd.clone())).unwrap();
        assert_eq!(events.len(), 1);

        match &events[0] {
            PlantEvent::PlantCreated(e) => {
                assert_eq!(e.plant_id, plant_id);
                assert_eq!(e.name, "Japanese Maple");
                assert_eq!(e.rarity, Rarity::Rare);
                assert_eq!(e.peak_season, Season::Fall);
                assert_eq!(e.base_price_cents, 4999);
            }
            _ => panic!("Expected PlantCreated event"),
        }
    }

    #[test]
    fn create_plant_rejects_empty_name() {
        let plant_id = test_plant_id();
        let plant = Plant::empty(plant_id);
        let mut cmd = create_cmd(plant_id);
        cmd.name = "   ".to_string();

        let err = plant.handle(&PlantCommand::CreatePlant(cmd)).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn create_plant_rejects_empty_available_seasons() {
        let plant_id = test_plant_id();
        let plant = Plant::empty(plant_id);
        let mut cmd = create_cmd(plant_id);
        cmd.available_seasons = vec![];

        let err = plant.handle(&PlantCommand::CreatePlant(cmd)).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty seasons"),
        }
    }

    #[test]
    fn create_plant_rejects_peak_season_outside_availability() {
        let plant_id = test_plant_id();
        let plant = Plant::empty(plant_id);
        let mut cmd = create_cmd(plant_id);
        cmd.peak_season = Season::Winter;

        let err = plant.handle(&PlantCommand::CreatePlant(cmd)).unwrap_err();
        match err {
            DomainError::InvariantViolation(_) => {}
            _ => panic!("Expected InvariantViolation for out-of-availability peak"),
        }
    }

    #[test]
    fn create_plant_rejects_duplicate_creation() {
        let plant_id = test_plant_id();
        let mut plant = Plant::empty(plant_id);
        let cmd = create_cmd(plant_id);

        let events = plant.handle(&PlantCommand::CreatePlant(cmd.clone())).unwrap();
        plant.apply(&events[0]);

        let err = plant.handle(&PlantCommand::CreatePlant(cmd)).unwrap_err();
        match err {
            DomainError::Conflict(_) => {}
            _ => panic!("Expected Conflict error for duplicate creation"),
        }
    }

    #[test]
    fn list_plant_updates_status_to_listed() {
        let plant_id = test_plant_id();
        let mut plant = Plant::empty(plant_id);

        let events = plant
            .handle(&PlantCommand::CreatePlant(create_cmd(plant_id)))
            .unwrap();
        plant.apply(&events[0]);
        assert_eq!(plant.status(), PlantStatus::Draft);
        assert!(!plant.is_listed());

        let list_cmd = ListPlant {
            plant_id,
            occurred_at: test_time(),
        };
        let events = plant.handle(&PlantCommand::ListPlant(list_cmd)).unwrap();
        plant.apply(&events[0]);

        assert_eq!(plant.status(), PlantStatus::Listed);
        assert!(plant.is_listed());
    }

    #[test]
    fn list_plant_rejects_already_listed() {
        let plant_id = test_plant_id();
        let mut plant = Plant::empty(plant_id);

        let events = plant
            .handle(&PlantCommand::CreatePlant(create_cmd(plant_id)))
            .unwrap();
        plant.apply(&events[0]);

        let list_cmd = ListPlant {
            plant_id,
            occurred_at: test_time(),
        };
        let events = plant.handle(&PlantCommand::ListPlant(list_cmd.clone())).unwrap();
        plant.apply(&events[0]);

        let err = plant.handle(&PlantCommand::ListPlant(list_cmd)).unwrap_err();
        match err {
            DomainError::Conflict(_) => {}
            _ => panic!("Expected Conflict error for already listed plant"),
        }
    }

    #[test]
    fn list_plant_rejects_archived_plant() {
        let plant_id = test_plant_id();
        let mut plant = Plant::empty(plant_id);

        let events = plant
            .handle(&PlantCommand::CreatePlant(create_cmd(plant_id)))
            .unwrap();
        plant.apply(&events[0]);

        let archive_cmd = ArchivePlant {
            plant_id,
            occurred_at: test_time(),
        };
        let events = plant.handle(&PlantCommand::ArchivePlant(archive_cmd)).unwrap();
        plant.apply(&events[0]);

        let list_cmd = ListPlant {
            plant_id,
            occurred_at: test_time(),
        };
        let err = plant.handle(&PlantCommand::ListPlant(list_cmd)).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("archived plants cannot be listed") => {}
            _ => panic!("Expected InvariantViolation error for archived plant"),
        }
    }

    #[test]
    fn reprice_plant_updates_pricing_attributes() {
        let plant_id = test_plant_id();
        let mut plant = Plant::empty(plant_id);

        let events = plant
            .handle(&PlantCommand::CreatePlant(create_cmd(plant_id)))
            .unwrap();
        plant.apply(&events[0]);

        let reprice_cmd = RepricePlant {
            plant_id,
            base_price_cents: 6500,
            rarity: Rarity::Exotic,
            peak_season: Season::Summer,
            occurred_at: test_time(),
        };
        let events = plant.handle(&PlantCommand::RepricePlant(reprice_cmd)).unwrap();
        plant.apply(&events[0]);

        assert_eq!(plant.base_price_cents(), 6500);
        assert_eq!(plant.rarity(), Rarity::Exotic);
        assert_eq!(plant.peak_season(), Season::Summer);
        // Non-pricing attributes are untouched.
        assert_eq!(plant.name(), "Japanese Maple");
        assert_eq!(
            plant.available_seasons(),
            &[Season::Spring, Season::Summer, Season::Fall]
        );
    }

    #[test]
    fn reprice_plant_rejects_peak_season_outside_availability() {
        let plant_id = test_plant_id();
        let mut plant = Plant::empty(plant_id);

        let events = plant
            .handle(&PlantCommand::CreatePlant(create_cmd(plant_id)))
            .unwrap();
        plant.apply(&events[0]);

        let reprice_cmd = RepricePlant {
            plant_id,
            base_price_cents: 6500,
            rarity: Rarity::Rare,
            peak_season: Season::Winter,
            occurred_at: test_time(),
        };
        let err = plant.handle(&PlantCommand::RepricePlant(reprice_cmd)).unwrap_err();
        match err {
            DomainError::InvariantViolation(_) => {}
            _ => panic!("Expected InvariantViolation for out-of-availability peak"),
        }
    }

    #[test]
    fn reprice_plant_rejects_archived_plant() {
        let plant_id = test_plant_id();
        let mut plant = Plant::empty(plant_id);

        let events = plant
            .handle(&PlantCommand::CreatePlant(create_cmd(plant_id)))
            .unwrap();
        plant.apply(&events[0]);

        let archive_cmd = ArchivePlant {
            plant_id,
            occurred_at: test_time(),
        };
        let events = plant.handle(&PlantCommand::ArchivePlant(archive_cmd)).unwrap();
        plant.apply(&events[0]);

        let reprice_cmd = RepricePlant {
            plant_id,
            base_price_cents: 100,
            rarity: Rarity::Common,
            peak_season: Season::Fall,
            occurred_at: test_time(),
        };
        let err = plant.handle(&PlantCommand::RepricePlant(reprice_cmd)).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("archived plants cannot be repriced") => {}
            _ => panic!("Expected InvariantViolation error for archived plant"),
        }
    }

    #[test]
    fn archive_plant_rejects_already_archived() {
        let plant_id = test_plant_id();
        let mut plant = Plant::empty(plant_id);

        let events = plant
            .handle(&PlantCommand::CreatePlant(create_cmd(plant_id)))
            .unwrap();
        plant.apply(&events[0]);

        let archive_cmd = ArchivePlant {
            plant_id,
            occurred_at: test_time(),
        };
        let events = plant.handle(&PlantCommand::ArchivePlant(archive_cmd.clone())).unwrap();
        plant.apply(&events[0]);

        let err = plant.handle(&PlantCommand::ArchivePlant(archive_cmd)).unwrap_err();
        match err {
            DomainError::Conflict(_) => {}
            _ => panic!("Expected Conflict error for already archived plant"),
        }
    }

    #[test]
    fn archive_plant_rejects_non_existent_plant() {
        let plant = Plant::empty(test_plant_id());
        let archive_cmd = ArchivePlant {
            plant_id: test_plant_id(),
            occurred_at: test_time(),
        };

        let err = plant.handle(&PlantCommand::ArchivePlant(archive_cmd)).unwrap_err();
        match err {
            DomainError::NotFound => {}
            _ => panic!("Expected NotFound error for non-existent plant"),
        }
    }

    #[test]
    fn version_increments_on_apply() {
        let plant_id = test_plant_id();
        let mut plant = Plant::empty(plant_id);
        assert_eq!(plant.version(), 0);

        let events = plant
            .handle(&PlantCommand::CreatePlant(create_cmd(plant_id)))
            .unwrap();
        plant.apply(&events[0]);
        assert_eq!(plant.version(), 1);

        let list_cmd = ListPlant {
            plant_id,
            occurred_at: test_time(),
        };
        let events = plant.handle(&PlantCommand::ListPlant(list_cmd)).unwrap();
        plant.apply(&events[0]);
        assert_eq!(plant.version(), 2);

        let archive_cmd = ArchivePlant {
            plant_id,
            occurred_at: test_time(),
        };
        let events = plant.handle(&PlantCommand::ArchivePlant(archive_cmd)).unwrap();
        plant.apply(&events[0]);
        assert_eq!(plant.version(), 3);
    }

    #[test]
    fn handle_does_not_mutate_state() {
        let plant_id = test_plant_id();
        let mut plant = Plant::empty(plant_id);

        let events = plant
            .handle(&PlantCommand::CreatePlant(create_cmd(plant_id)))
            .unwrap();
        plant.apply(&events[0]);
        let state_before = plant.clone();

        let list_cmd = ListPlant {
            plant_id,
            occurred_at: test_time(),
        };

        let events1 = plant.handle(&PlantCommand::ListPlant(list_cmd.clone())).unwrap();
        assert_eq!(plant, state_before);

        let events2 = plant.handle(&PlantCommand::ListPlant(list_cmd)).unwrap();
        assert_eq!(plant, state_before);

        assert_eq!(events1, events2);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_rarity() -> impl Strategy<Value = Rarity> {
            prop::sample::select(&Rarity::ALL[..])
        }

        fn any_season_set() -> impl Strategy<Value = Vec<Season>> {
            prop::sample::subsequence(Season::ALL.to_vec(), 1..=4)
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: apply is deterministic (same events = same final state).
            #[test]
            fn apply_is_deterministic(
                name in "[A-Za-z][A-Za-z0-9 ]{0,99}",
                cents in 0u64..=1_000_000,
                rarity in any_rarity(),
                seasons in any_season_set(),
            ) {
                let plant_id = test_plant_id();
                let peak_season = seasons[0];

                let events: Vec<PlantEvent> = vec![
                    PlantEvent::PlantCreated(PlantCreated {
                        plant_id,
                        name: name.clone(),
                        scientific_name: None,
                        description: "generated".to_string(),
                        category: "shrub".to_string(),
                        rarity,
                        peak_season,
                        available_seasons: seasons.clone(),
                        base_price_cents: cents,
                        care_level: "easy".to_string(),
                        is_native: false,
                        attracts_pollinators: true,
                        occurred_at: Utc::now(),
                    }),
                    PlantEvent::PlantListed(PlantListed {
                        plant_id,
                        occurred_at: Utc::now(),
                    }),
                ];

                let mut plant1 = Plant::empty(plant_id);
                for event in &events {
                    plant1.apply(event);
                }

                let mut plant2 = Plant::empty(plant_id);
                for event in &events {
                    plant2.apply(event);
                }

                prop_assert_eq!(&plant1, &plant2);
                prop_assert_eq!(plant1.version(), 2);
                prop_assert!(plant1.is_listed());
            }

            /// Property: created plants always keep peak season inside availability.
            #[test]
            fn created_peak_is_always_available(
                name in "[A-Za-z][A-Za-z0-9 ]{0,99}",
                cents in 0u64..=1_000_000,
                rarity in any_rarity(),
                seasons in any_season_set(),
                peak_idx in 0usize..4,
            ) {
                let plant_id = test_plant_id();
                let plant = Plant::empty(plant_id);
                let peak_season = Season::ALL[peak_idx];

                let cmd = CreatePlant {
                    plant_id,
                    name,
                    scientific_name: None,
                    description: "generated".to_string(),
                    category: "shrub".to_string(),
                    rarity,
                    peak_season,
                    available_seasons: seasons.clone(),
                    base_price_cents: cents,
                    care_level: "easy".to_string(),
                    is_native: true,
                    attracts_pollinators: false,
                    occurred_at: Utc::now(),
                };

                let result = plant.handle(&PlantCommand::CreatePlant(cmd));
                if seasons.contains(&peak_season) {
                    prop_assert!(result.is_ok());
                } else {
                    prop_assert!(matches!(result, Err(DomainError::InvariantViolation(_))));
                }
            }

            /// Property: handle never mutates state, even across repeated calls.
            #[test]
            fn handle_is_deterministic(
                name in "[A-Za-z][A-Za-z0-9 ]{0,99}",
                cents in 0u64..=1_000_000,
            ) {
                let plant_id = test_plant_id();
                let mut plant = Plant::empty(plant_id);

                let cmd = CreatePlant {
                    plant_id,
                    name,
                    scientific_name: None,
                    description: "generated".to_string(),
                    category: "perennial".to_string(),
                    rarity: Rarity::Uncommon,
                    peak_season: Season::Summer,
                    available_seasons: vec![Season::Spring, Season::Summer],
                    base_price_cents: cents,
                    care_level: "easy".to_string(),
                    is_native: false,
                    attracts_pollinators: true,
                    occurred_at: Utc::now(),
                };
                let events = plant.handle(&PlantCommand::CreatePlant(cmd)).unwrap();
                plant.apply(&events[0]);

                let state_before = plant.clone();
                let list_cmd = ListPlant {
                    plant_id,
                    occurred_at: Utc::now(),
                };

                let events1 = plant.handle(&PlantCommand::ListPlant(list_cmd.clone()));
                prop_assert_eq!(&plant, &state_before);

                let events2 = plant.handle(&PlantCommand::ListPlant(list_cmd));
                prop_assert_eq!(&plant, &state_before);

                prop_assert_eq!(events1, events2);
            }
        }
    }
}
