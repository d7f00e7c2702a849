//! Status and category enums for listings and enquiries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing one of the enums in this module fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Listing visibility. Only active properties appear on the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    #[default]
    Active,
    Inactive,
}

impl PropertyStatus {
    /// The other status, used by the admin table's toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enquiry handling status.
///
/// The intended lifecycle is `New -> Read -> Archived`, with `New -> Archived`
/// also allowed. The store accepts any status; [`EnquiryStatus::can_become`]
/// is the policy the admin actions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnquiryStatus {
    #[default]
    New,
    Read,
    Archived,
}

impl EnquiryStatus {
    /// Whether the lifecycle allows moving from `self` to `next`.
    #[must_use]
    pub const fn can_become(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::New, Self::Read) | (Self::New | Self::Read, Self::Archived)
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for EnquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of property offered by the brokerage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Villa,
    Apartment,
    House,
    Condo,
    Townhouse,
    Penthouse,
    Mansion,
}

impl PropertyType {
    pub const ALL: [Self; 7] = [
        Self::Villa,
        Self::Apartment,
        Self::House,
        Self::Condo,
        Self::Townhouse,
        Self::Penthouse,
        Self::Mansion,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Villa => "Villa",
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Condo => "Condo",
            Self::Townhouse => "Townhouse",
            Self::Penthouse => "Penthouse",
            Self::Mansion => "Mansion",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = UnknownVariant;

    /// Case-insensitive, so both the admin select (`Villa`) and the public
    /// filter (`villa`) parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownVariant {
                kind: "property type",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(PropertyStatus::Active.toggled(), PropertyStatus::Inactive);
        assert_eq!(PropertyStatus::Inactive.toggled(), PropertyStatus::Active);
    }

    #[test]
    fn test_enquiry_lifecycle_policy() {
        use EnquiryStatus::{Archived, New, Read};

        assert!(New.can_become(Read));
        assert!(New.can_become(Archived));
        assert!(Read.can_become(Archived));

        assert!(!Read.can_become(New));
        assert!(!Archived.can_become(New));
        assert!(!Archived.can_become(Read));
        assert!(!New.can_become(New));
        assert!(!Archived.can_become(Archived));
    }

    #[test]
    fn test_property_type_parse_ignores_case() {
        assert_eq!("villa".parse::<PropertyType>().unwrap(), PropertyType::Villa);
        assert_eq!(
            "Townhouse".parse::<PropertyType>().unwrap(),
            PropertyType::Townhouse
        );
        assert!("castle".parse::<PropertyType>().is_err());
    }

    #[test]
    fn test_status_serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&EnquiryStatus::Archived).unwrap(),
            "\"archived\""
        );
        assert_eq!(
            serde_json::to_string(&PropertyStatus::Inactive).unwrap(),
            "\"inactive\""
        );
    }
}
