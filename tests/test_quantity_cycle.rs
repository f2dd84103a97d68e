//! Integration tests for the fetch/increment/re-fetch cycle against an
//! in-memory quantity store with the backend's create-or-increment
//! semantics.
//!
//! Covers:
//! - Incrementing a country with no prior record creates it with quantity 1
//! - A subsequent fetch reflects the new record and reorders the list
//! - Repeated increments accumulate
//! - Store failures surface as errors instead of partial data

mod common;

use common::*;

#[tokio::test]
async fn increment_creates_missing_record_with_quantity_one() -> Result<(), ApiError> {
    let store = MemoryQuantityStore::default();

    let created = store.add_or_update("Denmark").await?;
    assert_eq!(created.name, "Denmark");
    assert_eq!(created.quantity, 1);

    let records = store.fetch_all().await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].quantity, 1);
    Ok(())
}

#[tokio::test]
async fn refetch_after_increment_reorders_the_merged_list() -> Result<(), ApiError> {
    let catalog = sample_catalog();
    let store = MemoryQuantityStore::default();

    // 1. Initial cycle: nothing tracked, catalog order preserved.
    let merged = refresh(&store, &catalog).await?;
    let names: Vec<&str> = merged.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["Austria", "Belgium", "Croatia"]);

    // 2. Increment Croatia, then re-fetch.
    store.add_or_update("Croatia").await?;
    let merged = refresh(&store, &catalog).await?;

    // 3. Croatia moved to the front; the rest keep catalog order.
    let names: Vec<&str> = merged.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["Croatia", "Austria", "Belgium"]);
    assert_eq!(merged[0].quantity, 1);
    Ok(())
}

#[tokio::test]
async fn repeated_increments_accumulate() -> Result<(), ApiError> {
    let store = MemoryQuantityStore::new(vec![record("Austria", 2)]);

    store.add_or_update("Austria").await?;
    let updated = store.add_or_update("Austria").await?;
    assert_eq!(updated.quantity, 4);

    let merged = refresh(&store, &sample_catalog()).await?;
    assert_eq!(total_quantity(&merged), 4);
    assert_eq!(max_quantity_country(&merged).unwrap().name, "Austria");
    Ok(())
}

#[tokio::test]
async fn fetch_failure_propagates_as_an_error() {
    let catalog = sample_catalog();
    let result = refresh(&FailingQuantityStore, &catalog).await;
    assert!(matches!(result, Err(ApiError::Status { .. })));
}
