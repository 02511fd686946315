//! Response models for the site front end.
//!
//! Field names serialize in camelCase to match what the front end reads.

mod country;
mod post;

pub use country::*;
pub use post::*;
