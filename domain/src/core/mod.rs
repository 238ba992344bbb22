//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: language models the personas and the judge are bound to
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
