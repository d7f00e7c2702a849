//! Add/edit form lifecycle shared by the admin management screens.
//!
//! A [`FormController`] moves `Idle -> Editing -> Submitting -> Idle`. While
//! editing it holds a draft buffer of raw form text; nothing reaches the
//! store until [`FormController::submit`] validates the draft.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Enquiry, EnquiryPayload, Entity, Property, PropertyPayload};
use crate::store::{Collection, StoreError};
use crate::types::{Email, EmailError, Price, PriceError, PropertyType, UnknownVariant};

/// Errors found in a draft before any store call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be a positive whole number")]
    NotAPositiveInteger { field: &'static str },

    #[error(transparent)]
    Price(#[from] PriceError),

    #[error("invalid email: {0}")]
    Email(#[from] EmailError),

    #[error(transparent)]
    Choice(#[from] UnknownVariant),
}

/// Why a submit did not go through.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The draft is invalid. The form is still open with the draft intact.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store rejected the write. The form has been closed.
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("no form is open")]
    NotEditing,
}

/// Raw form input for one entity type.
pub trait Draft: Default + Clone + Serialize + DeserializeOwned {
    type Entity: Entity;

    /// Notification text after a create.
    const CREATED: &'static str;
    /// Notification text after an update.
    const UPDATED: &'static str;

    /// Pre-fill from an existing record.
    fn from_record(record: &Self::Entity) -> Self;

    /// Parse the draft into a store payload.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    fn validate(&self) -> Result<<Self::Entity as Entity>::Payload, ValidationError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "D: Serialize", deserialize = "D: DeserializeOwned"))]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FormState<D> {
    #[default]
    Idle,
    /// `target` is the ID of the record being edited, or `None` for a new one.
    Editing { target: Option<i64>, draft: D },
    Submitting { target: Option<i64> },
}

/// Form lifecycle for one management screen.
///
/// The controller is plain data so the web layer can keep it in the
/// visitor's session between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "D: Serialize", deserialize = "D: DeserializeOwned"))]
pub struct FormController<D> {
    state: FormState<D>,
}

impl<D: Draft> FormController<D> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FormState::Idle,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &FormState<D> {
        &self.state
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.state, FormState::Editing { .. })
    }

    /// The draft being edited, if the form is open.
    #[must_use]
    pub const fn draft(&self) -> Option<&D> {
        match &self.state {
            FormState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// ID of the record being edited. `None` when idle or creating.
    #[must_use]
    pub fn editing_id(&self) -> Option<<D::Entity as Entity>::Id> {
        match self.state {
            FormState::Editing {
                target: Some(id), ..
            } => Some(id.into()),
            _ => None,
        }
    }

    /// Open an empty form for a new record.
    pub fn begin_create(&mut self) {
        self.state = FormState::Editing {
            target: None,
            draft: D::default(),
        };
    }

    /// Open the form pre-filled from `record`.
    pub fn begin_edit(&mut self, record: &D::Entity) {
        self.state = FormState::Editing {
            target: Some(record.id().into()),
            draft: D::from_record(record),
        };
    }

    /// Replace the staged fields. Ignored unless the form is open.
    pub fn update_draft(&mut self, next: D) {
        if let FormState::Editing { draft, .. } = &mut self.state {
            *draft = next;
        }
    }

    /// Validate the draft and write it to `store`.
    ///
    /// On success the form closes and the notification text is returned.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Validation`]: the form stays open, the store is not
    ///   touched.
    /// - [`SubmitError::Store`]: the record vanished or the store failed; the
    ///   form is closed.
    /// - [`SubmitError::NotEditing`]: there was nothing to submit.
    pub fn submit(&mut self, store: &Collection<D::Entity>) -> Result<&'static str, SubmitError> {
        let FormState::Editing { target, draft } = &self.state else {
            return Err(SubmitError::NotEditing);
        };
        let target = *target;
        let payload = draft.validate()?;

        self.state = FormState::Submitting { target };
        let result = match target {
            None => store.create(payload).map(|_| D::CREATED),
            Some(id) => store.update(id.into(), payload).map(|_| D::UPDATED),
        };
        self.state = FormState::Idle;

        result.map_err(SubmitError::from)
    }

    /// Close the form and discard the draft.
    pub fn cancel(&mut self) {
        self.state = FormState::Idle;
    }
}

/// Admin form fields for a [`Property`], as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub property_type: String,
    pub price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    #[serde(default)]
    pub image: String,
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(value)
}

fn positive_integer(field: &'static str, value: &str) -> Result<u32, ValidationError> {
    match required(field, value)?.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ValidationError::NotAPositiveInteger { field }),
    }
}

impl Draft for PropertyDraft {
    type Entity = Property;

    const CREATED: &'static str = "Property added successfully!";
    const UPDATED: &'static str = "Property updated successfully!";

    fn from_record(record: &Property) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            location: record.location.clone(),
            property_type: record.property_type.to_string(),
            price: record.price.amount().normalize().to_string(),
            bedrooms: record.bedrooms.to_string(),
            bathrooms: record.bathrooms.to_string(),
            image: record.image.clone(),
        }
    }

    fn validate(&self) -> Result<PropertyPayload, ValidationError> {
        let title = required("title", &self.title)?;
        let location = required("location", &self.location)?;
        let property_type: PropertyType = required("property type", &self.property_type)?.parse()?;
        let price = Price::parse(&self.price)?;
        let bedrooms = positive_integer("bedrooms", &self.bedrooms)?;
        let bathrooms = positive_integer("bathrooms", &self.bathrooms)?;
        let description = required("description", &self.description)?;

        Ok(PropertyPayload {
            title: title.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            property_type,
            price,
            bedrooms,
            bathrooms,
            image: Some(self.image.clone()),
        })
    }
}

/// Enquiry form fields from the public contact and property pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryDraft {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Contact page only. Prefixed to the message when present.
    #[serde(default)]
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub property_interest: String,
}

impl Draft for EnquiryDraft {
    type Entity = Enquiry;

    const CREATED: &'static str = "Thank you! Your message has been sent.";
    const UPDATED: &'static str = "Enquiry updated";

    fn from_record(record: &Enquiry) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.to_string(),
            phone: record.phone.clone(),
            subject: String::new(),
            message: record.message.clone(),
            property_interest: record.property_interest.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<EnquiryPayload, ValidationError> {
        let name = required("name", &self.name)?;
        let email = Email::parse(required("email", &self.email)?)?;
        let message = required("message", &self.message)?;
        let message = match self.subject.trim() {
            "" => message.to_string(),
            subject => format!("{subject}: {message}"),
        };
        let property_interest = Some(self.property_interest.trim())
            .filter(|label| !label.is_empty())
            .map(str::to_string);

        Ok(EnquiryPayload {
            name: name.to_string(),
            email,
            phone: self.phone.trim().to_string(),
            message,
            property_interest,
        })
    }
}
