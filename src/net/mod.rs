//! Network boundary: REST DTOs and HTTP helpers.

pub mod api;
pub mod types;
