//! Infrastructure resource catalog and locator.
//!
//! Resources (databases, queues, clusters, web services) are declared once
//! per environment in a JSON catalog and looked up by identifier:
//!
//! ```text
//! arn://storage/postgres/main-db
//!       ^^^^^^^^^^^^^^^^ ^^^^^^^
//!       category path    instance name (an optional /role may follow)
//! ```
//!
//! Lookups never fail outright. [`Locator::locate`] always returns a
//! definition; when the identifier is malformed, the instance is unknown or
//! the definition is invalid, the error travels inside the returned value
//! and surfaces through [`Definition::validate`]. This lets callers wire many
//! resources first and decide later which failures matter.

pub mod arn;
pub mod catalog;
pub mod error;
pub mod kinds;
pub mod lenient;
pub mod locator;
pub mod naming;
pub mod params;
pub mod provider;
pub mod resource;

pub use arn::Arn;
pub use catalog::Catalog;
pub use error::{ArnError, ResourceError};
pub use kinds::*;
pub use locator::{Check, Locator};
pub use naming::NameRule;
pub use params::{Param, Params};
pub use provider::ResourceProvider;
pub use resource::{Definition, Resource};
