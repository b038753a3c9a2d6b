//! Catalog, session cart and order domain with its `PostgreSQL` persistence.

pub mod context;
pub mod database;
pub mod domain;
pub mod money;
pub mod paging;
pub mod presentation;
pub mod storage;

pub use domain::{carts, items, orders};

#[cfg(test)]
mod test;

mod uuids;
