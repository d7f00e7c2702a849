//! Property listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::types::{Price, PropertyId, PropertyStatus, PropertyType};

/// Image shown when a listing has none.
pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

/// A property listed by the brokerage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub property_type: PropertyType,
    pub price: Price,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub image: String,
    pub status: PropertyStatus,
}

/// Every field of a [`Property`] that an update replaces.
///
/// Status is excluded: it changes only through the toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyPayload {
    pub title: String,
    pub description: String,
    pub location: String,
    pub property_type: PropertyType,
    pub price: Price,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub image: Option<String>,
}

impl Property {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, PropertyStatus::Active)
    }
}

fn image_or_placeholder(image: Option<String>) -> String {
    image
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

impl Entity for Property {
    type Id = PropertyId;
    type Payload = PropertyPayload;
    type Status = PropertyStatus;

    const KIND: &'static str = "property";

    fn id(&self) -> PropertyId {
        self.id
    }

    fn create(id: PropertyId, payload: PropertyPayload, _now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: payload.title,
            description: payload.description,
            location: payload.location,
            property_type: payload.property_type,
            price: payload.price,
            bedrooms: payload.bedrooms,
            bathrooms: payload.bathrooms,
            image: image_or_placeholder(payload.image),
            status: PropertyStatus::Active,
        }
    }

    fn apply(&mut self, payload: PropertyPayload) {
        self.title = payload.title;
        self.description = payload.description;
        self.location = payload.location;
        self.property_type = payload.property_type;
        self.price = payload.price;
        self.bedrooms = payload.bedrooms;
        self.bathrooms = payload.bathrooms;
        self.image = image_or_placeholder(payload.image);
    }

    fn status(&self) -> PropertyStatus {
        self.status
    }

    fn set_status(&mut self, status: PropertyStatus) {
        self.status = status;
    }
}
