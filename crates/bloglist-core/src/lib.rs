//! # Bloglist Core
//!
//! The domain layer of the bloglist service.
//! Blog and user entities, the aggregation helpers, and the ports that
//! infrastructure implements. No I/O lives here.

pub mod domain;
pub mod error;
pub mod ports;
pub mod stats;

pub use error::DomainError;
