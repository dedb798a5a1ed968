//! Day Offs

pub mod data;
pub mod dates;
pub mod errors;
pub mod records;
mod repository;
mod rules;
pub mod service;

pub use errors::DayOffsServiceError;
pub use service::*;
