mod fixtures;
pub use fixtures::*;

// Re-export commonly used items from tallymap for tests
pub use tallymap::core::api::{ApiError, QuantityStore};
pub use tallymap::core::model::{CountryRef, QuantityRecord, ViewCountry};
pub use tallymap::core::view::{
    filter_countries, max_quantity_country, merge_quantities, refresh, total_quantity,
};
