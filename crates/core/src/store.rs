//! In-memory entity store.
//!
//! Each [`Collection`] keeps its records in insertion order behind a
//! read/write lock. Mutations take the write lock, so there is a single
//! writer at a time; reads clone a consistent snapshot under the read lock.
//! An operation either applies completely or returns an error and leaves
//! the collection untouched.
//!
//! Nothing is persisted: the store lives as long as the process.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{Enquiry, Entity, Property};

/// Errors returned by store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with this ID exists in the collection.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// A writer panicked while holding the lock.
    #[error("{entity} store lock poisoned")]
    LockPoisoned { entity: &'static str },
}

struct Records<E> {
    items: Vec<E>,
    last_id: i64,
}

/// An ordered collection of one entity type.
pub struct Collection<E: Entity> {
    records: RwLock<Records<E>>,
}

impl<E: Entity> Default for Collection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> std::fmt::Debug for Collection<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection").field("kind", &E::KIND).finish()
    }
}

impl<E: Entity> Collection<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Start from existing records (seed data). Later IDs are allocated
    /// above the largest ID given here.
    #[must_use]
    pub fn with_records(items: Vec<E>) -> Self {
        let last_id = items
            .iter()
            .map(|record| Into::<i64>::into(record.id()))
            .max()
            .unwrap_or(0);
        Self {
            records: RwLock::new(Records { items, last_id }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records<E>>, StoreError> {
        self.records
            .read()
            .map_err(|_| StoreError::LockPoisoned { entity: E::KIND })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records<E>>, StoreError> {
        self.records
            .write()
            .map_err(|_| StoreError::LockPoisoned { entity: E::KIND })
    }

    fn not_found(id: E::Id) -> impl FnOnce() -> StoreError {
        move || StoreError::NotFound {
            entity: E::KIND,
            id: id.into(),
        }
    }

    /// Snapshot of every record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LockPoisoned`] if a writer panicked.
    pub fn list(&self) -> Result<Vec<E>, StoreError> {
        Ok(self.read()?.items.clone())
    }

    /// Number of records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LockPoisoned`] if a writer panicked.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.items.len())
    }

    /// # Errors
    ///
    /// Returns [`StoreError::LockPoisoned`] if a writer panicked.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.items.is_empty())
    }

    /// Look up one record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this ID.
    pub fn get(&self, id: E::Id) -> Result<E, StoreError> {
        self.read()?
            .items
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(Self::not_found(id))
    }

    /// Create a record stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LockPoisoned`] if a writer panicked.
    pub fn create(&self, payload: E::Payload) -> Result<E, StoreError> {
        self.create_at(payload, Utc::now())
    }

    /// Create a record as of `now`.
    ///
    /// The ID is derived from `now` in milliseconds and bumped past the last
    /// allocated ID, so IDs are unique and strictly increasing even when two
    /// records are created in the same millisecond.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LockPoisoned`] if a writer panicked.
    pub fn create_at(&self, payload: E::Payload, now: DateTime<Utc>) -> Result<E, StoreError> {
        let mut records = self.write()?;
        let id = now.timestamp_millis().max(records.last_id + 1);
        records.last_id = id;

        let record = E::create(E::Id::from(id), payload, now);
        records.items.push(record.clone());
        drop(records);

        tracing::info!(entity = E::KIND, id, "record created");
        Ok(record)
    }

    /// Replace every mutable field of a record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this ID.
    pub fn update(&self, id: E::Id, payload: E::Payload) -> Result<E, StoreError> {
        let mut records = self.write()?;
        let record = records
            .items
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(Self::not_found(id))?;
        record.apply(payload);
        let updated = record.clone();
        drop(records);

        tracing::info!(entity = E::KIND, %id, "record updated");
        Ok(updated)
    }

    /// Remove a record for good.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this ID, including
    /// when it was already deleted.
    pub fn delete(&self, id: E::Id) -> Result<(), StoreError> {
        let mut records = self.write()?;
        let index = records
            .items
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(Self::not_found(id))?;
        records.items.remove(index);
        drop(records);

        tracing::info!(entity = E::KIND, %id, "record deleted");
        Ok(())
    }

    /// Set a record's status. Any status of the entity type is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this ID.
    pub fn set_status(&self, id: E::Id, status: E::Status) -> Result<E, StoreError> {
        self.set_status_with(id, |_| Ok::<_, StoreError>(status))
    }

    /// Compute the new status from the current one under the write lock.
    ///
    /// `decide` sees the current status and either returns the next status
    /// or rejects the change; a rejection leaves the record untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] (converted into `R`) if no record
    /// has this ID, or whatever `decide` returns.
    pub fn set_status_with<R>(
        &self,
        id: E::Id,
        decide: impl FnOnce(E::Status) -> Result<E::Status, R>,
    ) -> Result<E, R>
    where
        R: From<StoreError>,
    {
        let mut records = self.write()?;
        let record = records
            .items
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(Self::not_found(id))?;
        let next = decide(record.status())?;
        record.set_status(next);
        let updated = record.clone();
        drop(records);

        tracing::info!(entity = E::KIND, %id, status = %next, "status changed");
        Ok(updated)
    }
}

/// Both collections the site manages.
#[derive(Debug, Default)]
pub struct EntityStore {
    pub properties: Collection<Property>,
    pub enquiries: Collection<Enquiry>,
}

impl EntityStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the demo listings and enquiries.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            properties: Collection::with_records(crate::seed::properties()),
            enquiries: Collection::with_records(crate::seed::enquiries()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::models::{EnquiryPayload, PropertyPayload};
    use crate::types::{
        Email, EnquiryId, EnquiryStatus, Price, PropertyId, PropertyStatus, PropertyType,
    };

    fn villa() -> PropertyPayload {
        PropertyPayload {
            title: "Villa".to_string(),
            description: "Stunning views".to_string(),
            location: "Beverly Hills".to_string(),
            property_type: PropertyType::Villa,
            price: Price::from_dollars(2_500_000),
            bedrooms: 5,
            bathrooms: 4,
            image: None,
        }
    }

    fn enquiry_payload(name: &str) -> EnquiryPayload {
        EnquiryPayload {
            name: name.to_string(),
            email: Email::parse("buyer@email.com").unwrap(),
            phone: String::new(),
            message: "Is this still available?".to_string(),
            property_interest: None,
        }
    }

    #[test]
    fn test_create_assigns_fresh_id_and_grows_by_one() {
        let store = Collection::<Property>::with_records(crate::seed::properties());
        let before = store.list().unwrap();

        let created = store.create(villa()).unwrap();

        let after = store.list().unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert!(before.iter().all(|p| p.id != created.id));
        assert_eq!(after.last().unwrap(), &created);
    }

    #[test]
    fn test_ids_stay_unique_within_one_millisecond() {
        let store = Collection::<Property>::new();
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();

        let a = store.create_at(villa(), now).unwrap();
        let b = store.create_at(villa(), now).unwrap();
        let c = store.create_at(villa(), now).unwrap();

        assert!(a.id < b.id && b.id < c.id);
        assert_eq!(a.id.as_i64(), now.timestamp_millis());
    }

    #[test]
    fn test_ids_never_go_backwards_when_clock_does() {
        let store = Collection::<Property>::new();
        let later = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let first = store.create_at(villa(), later).unwrap();
        let second = store.create_at(villa(), earlier).unwrap();

        assert!(second.id > first.id);
    }

    #[test]
    fn test_update_replaces_fields_and_keeps_id() {
        let store = Collection::<Property>::new();
        let created = store.create(villa()).unwrap();

        let mut payload = villa();
        payload.title = "Hillside Estate".to_string();
        payload.price = Price::from_dollars(8_500_000);
        payload.bedrooms = 6;
        let updated = store.update(created.id, payload.clone()).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, payload.title);
        assert_eq!(updated.price, payload.price);
        assert_eq!(updated.bedrooms, 6);
        assert_eq!(store.get(created.id).unwrap(), updated);
    }

    #[test]
    fn test_unknown_id_is_not_found_and_leaves_collection_unchanged() {
        let store = Collection::<Property>::with_records(crate::seed::properties());
        let before = store.list().unwrap();
        let missing = PropertyId::new(999);
        let expected = StoreError::NotFound {
            entity: "property",
            id: 999,
        };

        assert_eq!(store.update(missing, villa()).unwrap_err(), expected);
        assert_eq!(store.delete(missing).unwrap_err(), expected);
        assert_eq!(
            store
                .set_status(missing, PropertyStatus::Inactive)
                .unwrap_err(),
            expected
        );
        assert_eq!(store.get(missing).unwrap_err(), expected);

        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn test_second_delete_is_not_found() {
        let store = Collection::<Enquiry>::new();
        let enquiry = store.create(enquiry_payload("Robert Wilson")).unwrap();

        store.delete(enquiry.id).unwrap();

        assert!(matches!(
            store.delete(enquiry.id),
            Err(StoreError::NotFound { .. })
        ));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_delete_keeps_insertion_order_of_the_rest() {
        let store = Collection::<Enquiry>::new();
        let a = store.create(enquiry_payload("A")).unwrap();
        let b = store.create(enquiry_payload("B")).unwrap();
        let c = store.create(enquiry_payload("C")).unwrap();

        store.delete(b.id).unwrap();

        let ids: Vec<EnquiryId> = store.list().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[test]
    fn test_villa_scenario_status_change_touches_only_status() {
        let store = Collection::<Property>::new();
        let created = store.create(villa()).unwrap();
        assert_eq!(store.len().unwrap(), 1);

        let inactive = store
            .set_status(created.id, PropertyStatus::Inactive)
            .unwrap();

        assert_eq!(inactive.status, PropertyStatus::Inactive);
        assert_eq!(
            Property {
                status: PropertyStatus::Active,
                ..inactive
            },
            created
        );
    }

    #[test]
    fn test_store_allows_any_enquiry_status() {
        let store = Collection::<Enquiry>::new();
        let enquiry = store.create(enquiry_payload("Emily Davis")).unwrap();

        store.set_status(enquiry.id, EnquiryStatus::Archived).unwrap();
        let reopened = store.set_status(enquiry.id, EnquiryStatus::New).unwrap();

        assert_eq!(reopened.status, EnquiryStatus::New);
    }

    #[test]
    fn test_rejected_status_change_leaves_record_untouched() {
        let store = Collection::<Enquiry>::new();
        let enquiry = store.create(enquiry_payload("Sarah Smith")).unwrap();

        let result = store.set_status_with(enquiry.id, |_| {
            Err::<EnquiryStatus, StoreError>(StoreError::LockPoisoned { entity: "test" })
        });

        assert!(result.is_err());
        assert_eq!(store.get(enquiry.id).unwrap().status, EnquiryStatus::New);
    }

    #[test]
    fn test_seeded_store_allocates_above_seed_ids() {
        let store = EntityStore::seeded();
        let max_seed = store
            .properties
            .list()
            .unwrap()
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap();

        let created = store
            .properties
            .create_at(villa(), DateTime::<Utc>::UNIX_EPOCH)
            .unwrap();

        assert!(created.id > max_seed);
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = std::sync::Arc::new(Collection::<Property>::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..25)
                        .map(|_| store.create(villa()).unwrap().id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<PropertyId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 200);
        assert_eq!(store.len().unwrap(), 200);
    }
}
