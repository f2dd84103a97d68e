//! Merge, search, and aggregate logic for the country quantity view.
//!
//! Everything here is a pure function of the reference catalog, the server
//! records, and the current query string. The merged list is rebuilt in full
//! on every fetch; the filter and the aggregates are recomputed per render.

use crate::core::api::{ApiError, QuantityStore};
use crate::core::model::{CountryRef, QuantityRecord, ViewCountry};

/// Merges the reference catalog with server-held quantities.
///
/// Every catalog entry appears exactly once in the result; countries the
/// server has no record for get a quantity of 0. Matching is exact,
/// case-sensitive name equality. Entries with a non-zero quantity precede the
/// zero-quantity block, each side keeping catalog order.
pub fn merge_quantities(catalog: &[CountryRef], records: &[QuantityRecord]) -> Vec<ViewCountry> {
    let merged = catalog.iter().map(|country| {
        let quantity = records
            .iter()
            .find(|record| record.name == country.name)
            .map(|record| record.quantity)
            .unwrap_or(0);
        ViewCountry::from_ref(country, quantity)
    });

    let (mut tracked, untracked): (Vec<_>, Vec<_>) = merged.partition(|c| c.quantity > 0);
    tracked.extend(untracked);
    tracked
}

/// Case-insensitive substring filter over country names.
///
/// An empty query returns the full list. The merged list is never mutated;
/// this is a view projection.
pub fn filter_countries<'a>(countries: &'a [ViewCountry], query: &str) -> Vec<&'a ViewCountry> {
    let query = query.to_lowercase();
    countries
        .iter()
        .filter(|country| country.name.to_lowercase().contains(&query))
        .collect()
}

/// Sum of quantities over the full, unfiltered list.
pub fn total_quantity(countries: &[ViewCountry]) -> u64 {
    countries.iter().map(|country| country.quantity).sum()
}

/// The first entry holding the maximum quantity, or `None` when every
/// quantity is zero.
///
/// Ties break toward the earlier entry, so `max_by_key` (which keeps the last
/// maximum) is not usable here.
pub fn max_quantity_country(countries: &[ViewCountry]) -> Option<&ViewCountry> {
    countries.iter().fold(None, |best, country| match best {
        Some(b) if b.quantity >= country.quantity => Some(b),
        _ if country.quantity > 0 => Some(country),
        _ => best,
    })
}

/// One full fetch-and-merge cycle: pulls all records from the store and
/// rebuilds the view list.
pub async fn refresh<S: QuantityStore>(
    store: &S,
    catalog: &[CountryRef],
) -> Result<Vec<ViewCountry>, ApiError> {
    let records = store.fetch_all().await?;
    Ok(merge_quantities(catalog, &records))
}
