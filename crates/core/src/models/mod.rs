//! Domain records owned by the entity store.

pub mod enquiry;
pub mod property;

use chrono::{DateTime, Utc};

pub use enquiry::{Enquiry, EnquiryPayload};
pub use property::{PLACEHOLDER_IMAGE, Property, PropertyPayload};

/// A record kept in a [`crate::store::Collection`].
///
/// Each entity type names its ID, the payload that carries every mutable
/// field, and the statuses it may be set to.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + std::fmt::Display + From<i64> + Into<i64> + Send + Sync;
    type Payload;
    type Status: Copy + std::fmt::Display;

    /// Name used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> Self::Id;

    /// Build a fresh record. `now` is the creation time.
    fn create(id: Self::Id, payload: Self::Payload, now: DateTime<Utc>) -> Self;

    /// Replace every mutable field with the payload's values.
    fn apply(&mut self, payload: Self::Payload);

    fn status(&self) -> Self::Status;

    fn set_status(&mut self, status: Self::Status);
}
