#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod builtin;
pub mod config;
pub mod embed;
pub mod error;
pub mod observability;
pub mod style;

pub use config::*;
pub use embed::{DisplayUnit, EmbedField, EmbedFooter, EmbedMedia};
pub use error::CatalogSchemaError;
