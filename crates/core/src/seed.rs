//! Demo listings and enquiries loaded at startup.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Enquiry, PLACEHOLDER_IMAGE, Property};
use crate::types::{
    Email, EnquiryId, EnquiryStatus, Price, PropertyId, PropertyStatus, PropertyType,
};

struct Listing {
    title: &'static str,
    description: &'static str,
    location: &'static str,
    property_type: PropertyType,
    price: u64,
    bedrooms: u32,
    bathrooms: u32,
    status: PropertyStatus,
}

const LISTINGS: &[Listing] = &[
    Listing {
        title: "Modern Luxury Villa",
        description: "Beautiful villa with stunning views",
        location: "Beverly Hills, CA",
        property_type: PropertyType::Villa,
        price: 2_500_000,
        bedrooms: 5,
        bathrooms: 4,
        status: PropertyStatus::Active,
    },
    Listing {
        title: "Downtown Apartment",
        description: "Spacious apartment in city center",
        location: "Manhattan, NY",
        property_type: PropertyType::Apartment,
        price: 850_000,
        bedrooms: 2,
        bathrooms: 2,
        status: PropertyStatus::Active,
    },
    Listing {
        title: "Suburban House",
        description: "Family-friendly house with garden",
        location: "Austin, TX",
        property_type: PropertyType::House,
        price: 450_000,
        bedrooms: 3,
        bathrooms: 2,
        status: PropertyStatus::Inactive,
    },
    Listing {
        title: "Modern Downtown Penthouse",
        description: "Floor-to-ceiling windows and a private terrace over Midtown",
        location: "Manhattan, New York",
        property_type: PropertyType::Penthouse,
        price: 2_850_000,
        bedrooms: 3,
        bathrooms: 2,
        status: PropertyStatus::Active,
    },
    Listing {
        title: "Luxury Rooftop Apartment",
        description: "Rooftop living with panoramic canyon views",
        location: "Beverly Hills, CA",
        property_type: PropertyType::Apartment,
        price: 4_200_000,
        bedrooms: 4,
        bathrooms: 3,
        status: PropertyStatus::Active,
    },
    Listing {
        title: "Waterfront Modern Villa",
        description: "Private dock, infinity pool and direct bay access",
        location: "Miami Beach, FL",
        property_type: PropertyType::Villa,
        price: 6_750_000,
        bedrooms: 5,
        bathrooms: 4,
        status: PropertyStatus::Active,
    },
    Listing {
        title: "Contemporary City Loft",
        description: "Open-plan loft with exposed brick and skyline views",
        location: "Manhattan, New York",
        property_type: PropertyType::Apartment,
        price: 1_950_000,
        bedrooms: 2,
        bathrooms: 2,
        status: PropertyStatus::Active,
    },
    Listing {
        title: "Hillside Luxury Estate",
        description: "Gated estate with guest house and tennis court",
        location: "Beverly Hills, CA",
        property_type: PropertyType::Mansion,
        price: 8_500_000,
        bedrooms: 6,
        bathrooms: 5,
        status: PropertyStatus::Active,
    },
    Listing {
        title: "Ocean View Penthouse",
        description: "Full-floor residence facing the Atlantic",
        location: "Miami Beach, FL",
        property_type: PropertyType::Penthouse,
        price: 5_200_000,
        bedrooms: 4,
        bathrooms: 3,
        status: PropertyStatus::Active,
    },
];

/// Demo listings with IDs `1..=9`.
#[must_use]
pub fn properties() -> Vec<Property> {
    LISTINGS
        .iter()
        .zip(1_i64..)
        .map(|(listing, id)| Property {
            id: PropertyId::new(id),
            title: listing.title.to_string(),
            description: listing.description.to_string(),
            location: listing.location.to_string(),
            property_type: listing.property_type,
            price: Price::from_dollars(listing.price),
            bedrooms: listing.bedrooms,
            bathrooms: listing.bathrooms,
            image: PLACEHOLDER_IMAGE.to_string(),
            status: listing.status,
        })
        .collect()
}

struct Message {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    message: &'static str,
    received: (u32, u32, u32, u32),
    status: EnquiryStatus,
    property_interest: Option<&'static str>,
}

const MESSAGES: &[Message] = &[
    Message {
        name: "John Doe",
        email: "john.doe@email.com",
        phone: "+1 (555) 123-4567",
        message: "I am interested in the Modern Luxury Villa. Could you please provide more details about the property and schedule a viewing?",
        received: (15, 10, 30, 0),
        status: EnquiryStatus::New,
        property_interest: Some("Modern Luxury Villa"),
    },
    Message {
        name: "Sarah Smith",
        email: "sarah.smith@email.com",
        phone: "+1 (555) 987-6543",
        message: "Hello, I would like to know more about financing options for the Downtown Apartment. What are the available mortgage rates?",
        received: (14, 15, 45, 0),
        status: EnquiryStatus::Read,
        property_interest: Some("Downtown Apartment"),
    },
    Message {
        name: "Michael Johnson",
        email: "michael.j@email.com",
        phone: "+1 (555) 456-7890",
        message: "I am looking for a family home in a quiet neighborhood. Do you have any properties that match this criteria?",
        received: (13, 9, 15, 0),
        status: EnquiryStatus::Read,
        property_interest: None,
    },
    Message {
        name: "Emily Davis",
        email: "emily.davis@email.com",
        phone: "+1 (555) 234-5678",
        message: "Can you send me the floor plans for the Suburban House? Also, is the garden suitable for children to play?",
        received: (12, 14, 20, 0),
        status: EnquiryStatus::Archived,
        property_interest: Some("Suburban House"),
    },
    Message {
        name: "Robert Wilson",
        email: "robert.wilson@email.com",
        phone: "+1 (555) 345-6789",
        message: "I would like to schedule a property tour for this weekend. What times are available?",
        received: (11, 11, 0, 0),
        status: EnquiryStatus::New,
        property_interest: None,
    },
];

fn january_2024((day, hour, minute, second): (u32, u32, u32, u32)) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, minute, second)
        .single()
}

/// Demo enquiries with IDs `1..=5`, newest first.
///
/// Entries whose fixed email or date would not parse are skipped rather than
/// failing startup.
#[must_use]
pub fn enquiries() -> Vec<Enquiry> {
    MESSAGES
        .iter()
        .zip(1_i64..)
        .filter_map(|(message, id)| {
            let email = Email::parse(message.email).ok()?;
            let date = january_2024(message.received)?;
            Some(Enquiry {
                id: EnquiryId::new(id),
                name: message.name.to_string(),
                email,
                phone: message.phone.to_string(),
                message: message.message.to_string(),
                date,
                status: message.status,
                property_interest: message.property_interest.map(str::to_string),
            })
        })
        .collect()
}
