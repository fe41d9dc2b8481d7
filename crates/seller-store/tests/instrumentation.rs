//! Every repository operation opens its own tracing span.

use std::sync::{Arc, Mutex};

use domain::{Money, Seller};
use seller_store::{InMemorySellerRepository, SellerId, SellerRepository};
use tracing::span;
use tracing::subscriber::Subscriber;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Records the name of every span opened while it is installed.
#[derive(Clone, Default)]
struct SpanNames(Arc<Mutex<Vec<&'static str>>>);

impl SpanNames {
    fn recorded(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

impl<S: Subscriber> Layer<S> for SpanNames {
    fn on_new_span(&self, attrs: &span::Attributes<'_>, _id: &span::Id, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(attrs.metadata().name());
    }
}

#[tokio::test]
async fn repository_operations_are_instrumented() {
    let names = SpanNames::default();
    let subscriber = tracing_subscriber::registry().with(names.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let store = InMemorySellerRepository::new();
    let seller = Seller::create(
        "Acme",
        "desc",
        true,
        "digital",
        Money::of_minor(10_000, "GBP").unwrap(),
    )
    .unwrap();

    let id = store.save(&seller).await.unwrap();
    store.find_by_id(&id).await.unwrap();
    store.find_all().await.unwrap();
    store.exists(&SellerId::new()).await.unwrap();

    let recorded = names.recorded();
    for operation in ["save", "find_by_id", "find_all", "exists"] {
        assert!(
            recorded.contains(&operation),
            "no span for {operation}, got {recorded:?}"
        );
    }
}
