//! Static content pages and the not-found page.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::StatusCode;

use crate::filters;
use crate::routes::context::PageContext;

/// A service offered by the brokerage.
#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

const SERVICES: [Service; 6] = [
    Service {
        title: "Property Search",
        description: "Comprehensive property search with advanced filters and personalized recommendations based on your preferences.",
        features: [
            "Advanced search filters",
            "Market analysis",
            "Property comparisons",
            "Neighborhood insights",
        ],
    },
    Service {
        title: "Buying Services",
        description: "End-to-end support for property purchases, from initial search to closing and beyond.",
        features: [
            "Property evaluation",
            "Negotiation support",
            "Legal assistance",
            "Closing coordination",
        ],
    },
    Service {
        title: "Selling Services",
        description: "Maximize your property value with our comprehensive selling services and marketing expertise.",
        features: [
            "Property valuation",
            "Professional photography",
            "Marketing strategy",
            "Buyer screening",
        ],
    },
    Service {
        title: "Property Management",
        description: "Professional property management services to maintain and optimize your real estate investments.",
        features: [
            "Tenant screening",
            "Rent collection",
            "Maintenance coordination",
            "Financial reporting",
        ],
    },
    Service {
        title: "Investment Advisory",
        description: "Expert guidance on real estate investments with market analysis and portfolio optimization.",
        features: [
            "Market research",
            "Investment analysis",
            "Portfolio planning",
            "Risk assessment",
        ],
    },
    Service {
        title: "Rental Services",
        description: "Complete rental solutions for both landlords and tenants with transparent processes.",
        features: [
            "Tenant placement",
            "Lease agreements",
            "Property inspections",
            "Renewal management",
        ],
    },
];

/// A step of the buying process.
#[derive(Debug, Clone, Copy)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const PROCESS: [ProcessStep; 4] = [
    ProcessStep {
        step: "01",
        title: "Initial Consultation",
        description: "We start with a comprehensive consultation to understand your needs, preferences, and budget.",
    },
    ProcessStep {
        step: "02",
        title: "Property Search",
        description: "Our team conducts a targeted search based on your criteria, presenting only the best options.",
    },
    ProcessStep {
        step: "03",
        title: "Property Tours",
        description: "We arrange and accompany you on property tours, providing expert insights and guidance.",
    },
    ProcessStep {
        step: "04",
        title: "Negotiation & Closing",
        description: "We handle negotiations and coordinate the entire closing process for a smooth transaction.",
    },
];

/// A member of the team on the about page.
#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub experience: &'static str,
    pub specialties: &'static str,
}

const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Sarah Johnson",
        role: "CEO & Founder",
        experience: "15+ years",
        specialties: "Luxury Properties, Commercial Real Estate",
    },
    TeamMember {
        name: "Michael Chen",
        role: "Senior Real Estate Agent",
        experience: "12+ years",
        specialties: "Residential Sales, Investment Properties",
    },
    TeamMember {
        name: "Emily Rodriguez",
        role: "Property Manager",
        experience: "8+ years",
        specialties: "Property Management, Rental Services",
    },
];

#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub ctx: PageContext,
    pub team: &'static [TeamMember],
}

#[derive(Template, WebTemplate)]
#[template(path = "pages/services.html")]
pub struct ServicesTemplate {
    pub ctx: PageContext,
    pub services: &'static [Service],
    pub process: &'static [ProcessStep],
}

#[derive(Template, WebTemplate)]
#[template(path = "pages/legal.html")]
pub struct LegalTemplate {
    pub ctx: PageContext,
}

/// Friendly 404 page.
#[derive(Template, WebTemplate, Default)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
}

pub async fn about(ctx: PageContext) -> AboutTemplate {
    AboutTemplate { ctx, team: &TEAM }
}

pub async fn services(ctx: PageContext) -> ServicesTemplate {
    ServicesTemplate {
        ctx,
        services: &SERVICES,
        process: &PROCESS,
    }
}

pub async fn legal(ctx: PageContext) -> LegalTemplate {
    LegalTemplate { ctx }
}

/// Router fallback for any unmatched path.
pub async fn not_found(ctx: PageContext) -> (StatusCode, NotFoundTemplate) {
    tracing::debug!(path = %ctx.current_path, "no route");
    (StatusCode::NOT_FOUND, NotFoundTemplate { ctx })
}
