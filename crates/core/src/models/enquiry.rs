//! Customer enquiries sent from the public site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::types::{Email, EnquiryId, EnquiryStatus};

/// A message from a prospective buyer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enquiry {
    pub id: EnquiryId,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub message: String,
    /// When the enquiry was received. Never changes.
    pub date: DateTime<Utc>,
    pub status: EnquiryStatus,
    /// Display label of the listing the visitor asked about, if any.
    pub property_interest: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryPayload {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub message: String,
    pub property_interest: Option<String>,
}

impl Enquiry {
    /// Date as shown in the admin table, e.g. `Jan 15, 2024, 10:30 AM`.
    #[must_use]
    pub fn date_display(&self) -> String {
        self.date.format("%b %-d, %Y, %I:%M %p").to_string()
    }
}

impl Entity for Enquiry {
    type Id = EnquiryId;
    type Payload = EnquiryPayload;
    type Status = EnquiryStatus;

    const KIND: &'static str = "enquiry";

    fn id(&self) -> EnquiryId {
        self.id
    }

    fn create(id: EnquiryId, payload: EnquiryPayload, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            message: payload.message,
            date: now,
            status: EnquiryStatus::New,
            property_interest: payload.property_interest,
        }
    }

    fn apply(&mut self, payload: EnquiryPayload) {
        self.name = payload.name;
        self.email = payload.email;
        self.phone = payload.phone;
        self.message = payload.message;
        self.property_interest = payload.property_interest;
    }

    fn status(&self) -> EnquiryStatus {
        self.status
    }

    fn set_status(&mut self, status: EnquiryStatus) {
        self.status = status;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_create_stamps_date_and_starts_new() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let enquiry = Enquiry::create(
            EnquiryId::new(1),
            EnquiryPayload {
                name: "John Doe".to_string(),
                email: Email::parse("john.doe@email.com").unwrap(),
                phone: "+1 (555) 123-4567".to_string(),
                message: "Could you schedule a viewing?".to_string(),
                property_interest: Some("Modern Luxury Villa".to_string()),
            },
            now,
        );

        assert_eq!(enquiry.status, EnquiryStatus::New);
        assert_eq!(enquiry.date, now);
        assert_eq!(enquiry.date_display(), "Jan 15, 2024, 10:30 AM");
    }
}
