//! Item Catalog

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::ItemsServiceError;
pub use service::*;
