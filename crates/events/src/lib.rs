//! `plantopedia-events` — domain event plumbing.
//!
//! Event trait, envelope, and pub/sub abstractions shared between the
//! catalog domain and infrastructure.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use in_memory_bus::InMemoryEventBus;
