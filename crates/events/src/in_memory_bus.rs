//! Process-local event bus backing the in-memory service wiring.

use std::sync::{Mutex, mpsc};

use thiserror::Error;

use crate::bus::{EventBus, Subscription};

#[derive(Debug, Error)]
pub enum InMemoryBusError {
    #[error("event bus subscriber list lock poisoned")]
    Poisoned,
}

/// Channel-backed broadcast bus.
///
/// Every subscriber gets its own `mpsc` channel; publishing clones the
/// message once per live subscriber and prunes channels whose receiver
/// has gone away. Nothing is buffered for subscribers that join later,
/// so a consumer that needs history rebuilds from the event store.
#[derive(Debug)]
pub struct InMemoryEventBus<M> {
    subscribers: Mutex<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Clone + Send + 'static,
{
    type Error = InMemoryBusError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut subscribers = self
            .subscribers
            .lock()
            .map_err(|_| InMemoryBusError::Poisoned)?;

        // A send failure is the only signal that a subscriber is gone,
        // so pruning happens here rather than on subscription drop.
        subscribers.retain(|sender| sender.send(message.clone()).is_ok());

        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (sender, receiver) = mpsc::channel();

        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(sender);
        }

        Subscription::new(receiver)
    }
}
