//! Content repository.
//!
//! Notion is the source of truth for all site content; this module turns its pages and
//! blocks into the shapes the front end reads.

mod repository;

pub use repository::*;

/// Property names used in the Notion databases.
pub mod properties {
    pub const TITLE: &str = "Title";
    pub const SLUG: &str = "Slug";
    pub const DATE: &str = "Date";
    pub const PUBLISHED: &str = "Published";
    pub const TAG: &str = "Tag";
    pub const EXCERPT: &str = "Excerpt";

    pub const COUNTRY_NAME: &str = "Name";
    pub const COUNTRY_CODE: &str = "Code";
    pub const COUNTRY_FLAG: &str = "Flag";
    pub const COUNTRY_NOTE: &str = "Note";
}
