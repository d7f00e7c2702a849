//! Reusable view components shared across templates.

pub mod form_controls;
pub mod pagination;

pub use form_controls::SelectOption;
pub use pagination::Pagination;
