//! Catalog exporters.

pub mod json;
pub mod xml;
