use anyhow::Context;

use crate::core::model::CountryRef;

const COUNTRY_DATA: &str = include_str!("../../assets/countries.json");

/// Parses the bundled country reference dataset.
///
/// The dataset is embedded in the binary and static; callers load it once at
/// startup and share the result.
pub fn load_catalog() -> anyhow::Result<Vec<CountryRef>> {
    serde_json::from_str(COUNTRY_DATA).context("bundled country dataset is malformed")
}

/// Maps an ISO 3166-1 alpha-2 code to its Unicode regional-indicator flag.
///
/// Returns `None` when the code is not exactly two ASCII letters.
pub fn flag(alpha2: &str) -> Option<String> {
    if alpha2.len() != 2 {
        return None;
    }
    let mut flag = String::with_capacity(8);
    for c in alpha2.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let offset = c.to_ascii_uppercase() as u32 - 'A' as u32;
        flag.push(char::from_u32(0x1F1E6 + offset)?);
    }
    Some(flag)
}
