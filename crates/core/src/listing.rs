//! Filters for the public property listing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Property;
use crate::types::PropertyType;

/// Number of listings shown on the home page.
pub const FEATURED_COUNT: usize = 3;

/// Price bucket offered by the listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRange {
    UnderOneMillion,
    OneToThree,
    ThreeToFive,
    FiveToTen,
    OverTen,
}

impl PriceRange {
    pub const ALL: [Self; 5] = [
        Self::UnderOneMillion,
        Self::OneToThree,
        Self::ThreeToFive,
        Self::FiveToTen,
        Self::OverTen,
    ];

    /// Query-string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnderOneMillion => "0-1m",
            Self::OneToThree => "1m-3m",
            Self::ThreeToFive => "3m-5m",
            Self::FiveToTen => "5m-10m",
            Self::OverTen => "10m+",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderOneMillion => "Under $1M",
            Self::OneToThree => "$1M - $3M",
            Self::ThreeToFive => "$3M - $5M",
            Self::FiveToTen => "$5M - $10M",
            Self::OverTen => "$10M+",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.as_str() == value.trim())
    }

    /// Bounds in millions: lower inclusive, upper exclusive.
    const fn bounds(self) -> (i64, Option<i64>) {
        match self {
            Self::UnderOneMillion => (0, Some(1)),
            Self::OneToThree => (1, Some(3)),
            Self::ThreeToFive => (3, Some(5)),
            Self::FiveToTen => (5, Some(10)),
            Self::OverTen => (10, None),
        }
    }

    #[must_use]
    pub fn contains(self, amount: Decimal) -> bool {
        let million = Decimal::from(1_000_000);
        let (low, high) = self.bounds();
        amount >= Decimal::from(low) * million
            && high.is_none_or(|high| amount < Decimal::from(high) * million)
    }
}

/// Location choices in the listing filter: `(query value, label)`.
pub const LOCATIONS: [(&str, &str); 3] = [
    ("manhattan", "Manhattan, NY"),
    ("beverly-hills", "Beverly Hills, CA"),
    ("miami-beach", "Miami Beach, FL"),
];

/// Query parameters of `GET /properties`.
///
/// Every field is optional; blank or unrecognised values do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingFilter {
    pub search: String,
    pub location: String,
    pub property_type: String,
    pub price_range: String,
    pub bedrooms: String,
}

impl ListingFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.search,
            &self.location,
            &self.property_type,
            &self.price_range,
            &self.bedrooms,
        ]
        .iter()
        .all(|value| value.trim().is_empty())
    }

    /// Whether `property` should be listed. Inactive listings never are.
    #[must_use]
    pub fn matches(&self, property: &Property) -> bool {
        if !property.is_active() {
            return false;
        }

        let search = self.search.trim().to_lowercase();
        if !search.is_empty()
            && !property.title.to_lowercase().contains(&search)
            && !property.location.to_lowercase().contains(&search)
        {
            return false;
        }

        let location = self.location.trim().replace('-', " ").to_lowercase();
        if !location.is_empty() && !property.location.to_lowercase().contains(&location) {
            return false;
        }

        if let Ok(wanted) = self.property_type.parse::<PropertyType>()
            && property.property_type != wanted
        {
            return false;
        }

        if let Some(range) = PriceRange::parse(&self.price_range)
            && !range.contains(property.price.amount())
        {
            return false;
        }

        if let Ok(min) = self.bedrooms.trim().parse::<u32>()
            && property.bedrooms < min
        {
            return false;
        }

        true
    }

    /// Matching listings, in store order.
    #[must_use]
    pub fn apply(&self, properties: Vec<Property>) -> Vec<Property> {
        properties.into_iter().filter(|p| self.matches(p)).collect()
    }
}

/// Listings for the home page: the first few active ones.
#[must_use]
pub fn featured(properties: Vec<Property>) -> Vec<Property> {
    properties
        .into_iter()
        .filter(Property::is_active)
        .take(FEATURED_COUNT)
        .collect()
}
