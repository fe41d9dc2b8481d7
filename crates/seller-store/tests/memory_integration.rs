//! Integration tests for the in-memory seller repository.
//!
//! These go through the `SellerRepository` trait, including as a trait
//! object, and exercise concurrent saves.

use std::collections::HashSet;
use std::sync::Arc;

use domain::{Money, Seller};
use seller_store::{InMemorySellerRepository, SellerId, SellerRepository};

fn create_test_seller(name: &str, product_type: &str, payout: i64) -> Seller {
    Seller::create(
        name,
        "test description",
        true,
        product_type,
        Money::of_minor(payout, "GBP").unwrap(),
    )
    .unwrap()
}

#[tokio::test]
async fn acme_scenario_round_trips_through_the_store() {
    let store: Arc<dyn SellerRepository> = Arc::new(InMemorySellerRepository::new());
    let seller = create_test_seller("Acme", "digital", 10_000);

    let id = store.save(&seller).await.unwrap();
    let found = store.find_by_id(&id).await.unwrap().unwrap();

    let json = serde_json::to_value(&found).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["payout_amount"], 10_000);
    assert_eq!(json["payout_currency"], "GBP");
    assert_eq!(json["sold_product_type"], "digital");
}

#[tokio::test]
async fn find_all_on_empty_store_is_empty() {
    let store = InMemorySellerRepository::new();
    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn find_all_returns_one_entry_per_save() {
    let store = InMemorySellerRepository::new();
    let mut ids = Vec::new();
    for (i, product_type) in ["digital", "gambling", "financial"].iter().enumerate() {
        let seller = create_test_seller(&format!("Seller {i}"), product_type, 10_000 + i as i64);
        ids.push(store.save(&seller).await.unwrap());
    }

    let all = store.find_all().await.unwrap();

    assert_eq!(all.len(), ids.len());
    for id in &ids {
        assert_eq!(all[id].id(), Some(*id));
    }
}

#[tokio::test]
async fn unknown_id_is_absent_not_an_error() {
    let store = InMemorySellerRepository::new();
    store
        .save(&create_test_seller("Acme", "digital", 10_000))
        .await
        .unwrap();

    let missing = SellerId::new();
    assert!(store.find_by_id(&missing).await.unwrap().is_none());
    assert!(!store.exists(&missing).await.unwrap());
}

#[tokio::test]
async fn created_at_is_preserved_by_save() {
    let store = InMemorySellerRepository::new();
    let seller = create_test_seller("Acme", "gambling", 20_000);

    let id = store.save(&seller).await.unwrap();
    let found = store.find_by_id(&id).await.unwrap().unwrap();

    assert_eq!(found.created_at(), seller.created_at());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_saves_never_share_an_id() {
    let store = InMemorySellerRepository::new();
    let tasks = 16;
    let saves_per_task = 50;

    let mut handles = Vec::new();
    for t in 0..tasks {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let mut ids = Vec::new();
            for i in 0..saves_per_task {
                let seller = create_test_seller(&format!("Seller {t}-{i}"), "digital", 10_000);
                ids.push(store.save(&seller).await.unwrap());
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        for id in handle.await.unwrap() {
            assert!(all_ids.insert(id), "duplicate id {id}");
        }
    }

    assert_eq!(all_ids.len(), tasks * saves_per_task);
    assert_eq!(store.len().await, tasks * saves_per_task);
    let stored = store.find_all().await.unwrap();
    assert!(all_ids.iter().all(|id| stored.contains_key(id)));
}
