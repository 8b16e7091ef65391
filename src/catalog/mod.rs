//! Catalog access: wire types and the HTTP subject fetcher.

mod client;
mod wire;

pub use client::{CatalogClient, SubjectSource};
pub use wire::GENUS_LOCALE;
