//! Carts

pub mod data;
pub mod engine;
pub mod errors;
pub mod records;
mod repositories;
pub mod service;

pub use errors::CartsServiceError;
pub use service::*;
