use serde::{Deserialize, Serialize};

/// Static country metadata from the bundled reference dataset. Immutable,
/// loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRef {
    pub name: String,
    /// ISO 3166-1 alpha-2 code, lowercase, used for flag display.
    pub alpha2: String,
}

/// Server-held counter for a single country. The backend keys these by
/// country name, not by code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRecord {
    pub name: String,
    pub quantity: u64,
}

/// A country as shown on the dashboard: reference data plus the server
/// quantity. Rebuilt in full on every successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewCountry {
    pub name: String,
    pub alpha2: String,
    pub quantity: u64,
}

impl ViewCountry {
    pub fn from_ref(country: &CountryRef, quantity: u64) -> Self {
        Self {
            name: country.name.clone(),
            alpha2: country.alpha2.clone(),
            quantity,
        }
    }
}
