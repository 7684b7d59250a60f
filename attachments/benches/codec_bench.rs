// Codec benchmarks for NOVA attachments.
//
// Covers binary encode/decode of the fixed-size variants, asset issuance with
// a description URL, multi-transfer tables of increasing size, and the JSON
// form.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use nova_attachments::appendix::{from_bytes, from_json, to_bytes, to_json};
use nova_attachments::attachment::*;
use nova_attachments::{AnyAttachment, TransactionType};

fn issuance() -> AssetIssuance {
    AssetIssuance::builder()
        .description_url("https://nova.example/assets/gold.json")
        .description_hash(vec![0x5a; 32])
        .quantity(1_000_000_000_000)
        .decimals(8)
        .dilutable(true)
        .build()
        .expect("valid issuance")
}

fn multi_transfer(n: usize) -> AtomicMultiTransfer {
    AtomicMultiTransfer::new(
        (0..n as u64)
            .map(|i| Transfer::new(u64::MAX - i, i, i as i64 * 100))
            .collect(),
    )
}

fn bench_fixed_size(c: &mut Criterion) {
    let order = AskOrderPlacement::new(OrderPlacement::new(u64::MAX, 42, 1_000, 25, 1_440));
    let bytes = to_bytes(&order).expect("encode");

    c.bench_function("binary/order_placement_encode", |b| {
        b.iter(|| to_bytes(&order));
    });
    c.bench_function("binary/order_placement_decode", |b| {
        b.iter(|| from_bytes::<AskOrderPlacement>(&bytes));
    });
}

fn bench_issuance(c: &mut Criterion) {
    let asset = issuance();
    let bytes = to_bytes(&asset).expect("encode");

    c.bench_function("binary/asset_issuance_encode", |b| {
        b.iter(|| to_bytes(&asset));
    });
    c.bench_function("binary/asset_issuance_decode", |b| {
        b.iter(|| from_bytes::<AssetIssuance>(&bytes));
    });
}

fn bench_multi_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary/multi_transfer_decode");

    for n in [1usize, 16, 64, 255] {
        let bytes = to_bytes(&multi_transfer(n)).expect("encode");
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &bytes, |b, bytes| {
            b.iter(|| from_bytes::<AtomicMultiTransfer>(bytes));
        });
    }

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let bytes = to_bytes(&WhitelistAccountAddition::new(1, 2, 3)).expect("encode");

    c.bench_function("dispatch/parse_tagged", |b| {
        b.iter(|| {
            let tx_type = TransactionType::WhitelistAccountAddition;
            let mut cursor = bytes.as_slice();
            AnyAttachment::parse_tagged(tx_type.type_code(), tx_type.subtype_code(), &mut cursor)
        });
    });
}

fn bench_json(c: &mut Criterion) {
    let asset = issuance();
    let map = to_json(&asset);
    let multi = multi_transfer(64);
    let multi_map = to_json(&multi);

    c.bench_function("json/asset_issuance_encode", |b| {
        b.iter(|| to_json(&asset));
    });
    c.bench_function("json/asset_issuance_decode", |b| {
        b.iter(|| from_json::<AssetIssuance>(&map));
    });
    c.bench_function("json/multi_transfer_64_decode", |b| {
        b.iter(|| from_json::<AtomicMultiTransfer>(&multi_map));
    });
}

criterion_group!(
    benches,
    bench_fixed_size,
    bench_issuance,
    bench_multi_transfer,
    bench_dispatch,
    bench_json,
);
criterion_main!(benches);
