//! Wenz Homez Core - domain engine for the listings site.
//!
//! This crate holds everything the site needs that is not HTTP:
//! - the in-memory entity store for properties and enquiries
//! - the session guard that gates the admin area
//! - the navigation state machine that classifies request paths
//! - the admin form controller and enquiry lifecycle policy
//! - the transient notification channel
//!
//! # Architecture
//!
//! No I/O, no HTTP types, no global state. The web crate owns one
//! [`store::EntityStore`] in its application state and plugs its cookie
//! session into [`session::SessionGuard`] through the
//! [`session::SessionStorage`] trait.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, emails, prices and status enums
//! - [`models`] - `Property` and `Enquiry` records with their payloads
//! - [`store`] - Lock-guarded collections with CRUD and status operations
//! - [`session`] - Authentication flag over injectable storage
//! - [`navigation`] - Path to route-state resolution and guarded navigation
//! - [`form`] - Draft buffers and the add/edit form lifecycle
//! - [`actions`] - List actions and the enquiry lifecycle policy
//! - [`notify`] - Auto-dismissing notifications
//! - [`listing`] - Public listing filters
//! - [`seed`] - Demo data loaded at startup

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod actions;
pub mod form;
pub mod listing;
pub mod models;
pub mod navigation;
pub mod notify;
pub mod seed;
pub mod session;
pub mod store;
pub mod types;

pub use models::*;
pub use types::*;
