//! Direct list actions on the admin tables.
//!
//! Property delete and toggle go straight to the store. Enquiry status
//! changes go through the lifecycle policy here: the store itself accepts
//! any status.

use thiserror::Error;

use crate::models::{Enquiry, Property};
use crate::store::{Collection, StoreError};
use crate::types::{EnquiryId, EnquiryStatus, PropertyId};

pub const PROPERTY_DELETED: &str = "Property deleted successfully!";
pub const ENQUIRY_READ: &str = "Enquiry marked as read";
pub const ENQUIRY_ARCHIVED: &str = "Enquiry archived";
pub const ENQUIRY_DELETED: &str = "Enquiry deleted";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// The enquiry lifecycle does not allow this change.
    #[error("enquiry cannot move from {from} to {to}")]
    IllegalTransition {
        from: EnquiryStatus,
        to: EnquiryStatus,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Remove a listing. Returns the notification text.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] if the listing does not exist.
pub fn delete_property(
    properties: &Collection<Property>,
    id: PropertyId,
) -> Result<&'static str, StoreError> {
    properties.delete(id)?;
    Ok(PROPERTY_DELETED)
}

/// Flip a listing between active and inactive. No notification is posted.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] if the listing does not exist.
pub fn toggle_property_status(
    properties: &Collection<Property>,
    id: PropertyId,
) -> Result<Property, StoreError> {
    properties.set_status_with(id, |current| Ok::<_, StoreError>(current.toggled()))
}

fn transition(
    enquiries: &Collection<Enquiry>,
    id: EnquiryId,
    to: EnquiryStatus,
) -> Result<Enquiry, PolicyError> {
    enquiries.set_status_with(id, |from| {
        if from.can_become(to) {
            Ok(to)
        } else {
            tracing::warn!(%id, %from, %to, "illegal enquiry transition");
            Err(PolicyError::IllegalTransition { from, to })
        }
    })
}

/// `new -> read`.
///
/// # Errors
///
/// Returns [`PolicyError::IllegalTransition`] unless the enquiry is new.
pub fn mark_enquiry_read(
    enquiries: &Collection<Enquiry>,
    id: EnquiryId,
) -> Result<&'static str, PolicyError> {
    transition(enquiries, id, EnquiryStatus::Read)?;
    Ok(ENQUIRY_READ)
}

/// `new | read -> archived`.
///
/// # Errors
///
/// Returns [`PolicyError::IllegalTransition`] if already archived.
pub fn archive_enquiry(
    enquiries: &Collection<Enquiry>,
    id: EnquiryId,
) -> Result<&'static str, PolicyError> {
    transition(enquiries, id, EnquiryStatus::Archived)?;
    Ok(ENQUIRY_ARCHIVED)
}

/// Remove an enquiry in any status.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] if the enquiry does not exist.
pub fn delete_enquiry(
    enquiries: &Collection<Enquiry>,
    id: EnquiryId,
) -> Result<&'static str, StoreError> {
    enquiries.delete(id)?;
    Ok(ENQUIRY_DELETED)
}

/// Counts shown above the enquiries table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnquiryStats {
    pub total: usize,
    pub new: usize,
    pub read: usize,
    pub archived: usize,
}

impl EnquiryStats {
    #[must_use]
    pub fn of(enquiries: &[Enquiry]) -> Self {
        enquiries.iter().fold(
            Self {
                total: enquiries.len(),
                ..Self::default()
            },
            |mut stats, enquiry| {
                match enquiry.status {
                    EnquiryStatus::New => stats.new += 1,
                    EnquiryStatus::Read => stats.read += 1,
                    EnquiryStatus::Archived => stats.archived += 1,
                }
                stats
            },
        )
    }
}
