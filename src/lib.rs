pub mod config;
pub mod core;

pub use crate::config::Config;
pub use crate::core::api::{ApiError, HttpQuantityStore, QuantityStore};
pub use crate::core::model::{CountryRef, QuantityRecord, ViewCountry};

#[cfg(feature = "gui")]
pub mod gui;
