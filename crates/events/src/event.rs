use chrono::{DateTime, Utc};

/// Behaviour shared by every catalog event payload.
///
/// An event is a fact that already happened: once appended to a stream it
/// is never edited, only superseded by later events. `version` names the
/// payload schema so that old streams stay readable after a field changes.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable identifier for the event kind, e.g. `"catalog.plant.repriced"`.
    fn event_type(&self) -> &'static str;

    /// Payload schema version, starting at 1.
    fn version(&self) -> u32;

    /// Business time: when the change took place, not when it was stored.
    fn occurred_at(&self) -> DateTime<Utc>;
}
