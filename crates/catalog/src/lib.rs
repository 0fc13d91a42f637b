//! `plantopedia-catalog` — plant catalog domain (aggregate, commands, events).

pub mod plant;

pub use plant::{
    ArchivePlant, CreatePlant, ListPlant, Plant, PlantArchived, PlantCommand, PlantCreated,
    PlantEvent, PlantId, PlantListed, PlantRepriced, PlantStatus, RepricePlant,
};
