//! File adapters: CSV for orders, stock and outcomes, JSON for the catalog.

pub mod csv;
pub mod json;
