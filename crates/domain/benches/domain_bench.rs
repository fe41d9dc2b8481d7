use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Money, Seller, SellerId};

fn payout() -> Money {
    Money::of_minor(500_000, "GBP").unwrap()
}

fn bench_create_seller(c: &mut Criterion) {
    c.bench_function("domain/create_seller", |b| {
        b.iter(|| {
            Seller::create("Acme", "Digital goods", true, "digital", payout()).unwrap();
        });
    });
}

fn bench_hydrate_seller(c: &mut Criterion) {
    let seller = Seller::create("Acme", "Digital goods", true, "digital", payout()).unwrap();
    let record = seller.to_record().with_id(SellerId::new());

    c.bench_function("domain/hydrate_seller", |b| {
        b.iter(|| {
            Seller::hydrate(record.clone()).unwrap();
        });
    });
}

fn bench_json_round_trip(c: &mut Criterion) {
    let seller = Seller::create("Acme", "Digital goods", true, "digital", payout()).unwrap();
    let json = serde_json::to_string(&seller.to_record().with_id(SellerId::new())).unwrap();

    c.bench_function("domain/hydrate_from_json", |b| {
        b.iter(|| {
            let record = serde_json::from_str(&json).unwrap();
            Seller::hydrate(record).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_create_seller,
    bench_hydrate_seller,
    bench_json_round_trip,
);
criterion_main!(benches);
