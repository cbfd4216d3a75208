//! Utility functions shared across the application.
//!
//! - [`validation`] - Input checks applied by the services
//! - [`workday`] - Calendar-day resolution for check-ins

pub mod validation;
pub mod workday;
