use std::sync::Mutex;

use tallymap::core::api::{ApiError, QuantityStore};
use tallymap::core::model::{CountryRef, QuantityRecord};

/// In-memory stand-in for the quantity backend, with the backend's
/// create-or-increment semantics: an unknown name becomes a record with
/// quantity 1, a known name gains 1.
#[derive(Debug, Default)]
pub struct MemoryQuantityStore {
    records: Mutex<Vec<QuantityRecord>>,
}

impl MemoryQuantityStore {
    pub fn new(records: Vec<QuantityRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl QuantityStore for MemoryQuantityStore {
    async fn fetch_all(&self) -> Result<Vec<QuantityRecord>, ApiError> {
        Ok(self.records.lock().expect("store mutex poisoned").clone())
    }

    async fn add_or_update(&self, name: &str) -> Result<QuantityRecord, ApiError> {
        let mut records = self.records.lock().expect("store mutex poisoned");
        if let Some(record) = records.iter_mut().find(|record| record.name == name) {
            record.quantity += 1;
            Ok(record.clone())
        } else {
            let record = QuantityRecord {
                name: name.to_string(),
                quantity: 1,
            };
            records.push(record.clone());
            Ok(record)
        }
    }
}

/// Store whose requests always fail, for error-path tests.
#[derive(Debug, Default)]
pub struct FailingQuantityStore;

impl QuantityStore for FailingQuantityStore {
    async fn fetch_all(&self) -> Result<Vec<QuantityRecord>, ApiError> {
        Err(ApiError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            endpoint: "/getAll",
        })
    }

    async fn add_or_update(&self, _name: &str) -> Result<QuantityRecord, ApiError> {
        Err(ApiError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            endpoint: "/addOrUpdateQuantity",
        })
    }
}

/// Shorthand constructors for test data.
pub fn country(name: &str, alpha2: &str) -> CountryRef {
    CountryRef {
        name: name.to_string(),
        alpha2: alpha2.to_string(),
    }
}

pub fn record(name: &str, quantity: u64) -> QuantityRecord {
    QuantityRecord {
        name: name.to_string(),
        quantity,
    }
}

/// Three-country catalog used by the ordering and aggregate tests.
pub fn sample_catalog() -> Vec<CountryRef> {
    vec![
        country("Austria", "at"),
        country("Belgium", "be"),
        country("Croatia", "hr"),
    ]
}
