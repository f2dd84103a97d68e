pub mod api;
pub mod auth;
pub mod countries;
pub mod model;
pub mod view;

pub use api::{ApiError, HttpQuantityStore, QuantityStore};
pub use auth::{AuthSnapshot, AuthStore, LocalAuthStore, User};
pub use model::{CountryRef, QuantityRecord, ViewCountry};
