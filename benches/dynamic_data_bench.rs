use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use dynamic_data::loader::{ColumnarLoader, LoaderConfig};
use dynamic_data::{DataValue, DynamicData};
use rust_decimal::Decimal;
use std::hint::black_box;

// ─── Test Data ──────────────────────────────────────────────────────────────

const HEADER: &str = "Date,Open,High,Low,Close,Volume,Ex-Dividend,Split Ratio,Adj. Close";
const ROW: &str = "2014-06-02,187.95,188.07,186.39,187.125,91293000,0.0,1.0,180.49";

/// Record with a realistic set of dynamic columns.
fn make_record() -> DynamicData {
    let mut loader = ColumnarLoader::new(LoaderConfig::default().with_symbol("SPY"));
    loader.read_header(HEADER).unwrap();
    loader.read_row(ROW).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// Group 1: Reading by name
// ═══════════════════════════════════════════════════════════════════════════

fn bench_get_by_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_by_name");
    let record = make_record();

    group.bench_function("reserved (Price)", |b| {
        b.iter(|| record.get_by_name(black_box("Price")).unwrap())
    });

    group.bench_function("reserved (Symbol)", |b| {
        b.iter(|| record.get_by_name(black_box("Symbol")).unwrap())
    });

    group.bench_function("dynamic (Volume)", |b| {
        b.iter(|| record.get_by_name(black_box("Volume")).unwrap())
    });

    group.bench_function("dynamic typed (Adj. Close)", |b| {
        b.iter(|| record.get::<Decimal>(black_box("Adj. Close")).unwrap())
    });

    group.bench_function("dynamic miss", |b| {
        b.iter(|| record.get_by_name(black_box("OpenInterest")).is_err())
    });

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// Group 2: Writing by name
// ═══════════════════════════════════════════════════════════════════════════

fn bench_set_by_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_by_name");
    let t = Utc.with_ymd_and_hms(2014, 6, 2, 0, 0, 0).unwrap();

    group.bench_function("reserved (Time)", |b| {
        let mut record = make_record();
        b.iter(|| record.set_by_name(black_box("Time"), t).unwrap())
    });

    group.bench_function("reserved (Value, from i64)", |b| {
        let mut record = make_record();
        b.iter(|| record.set_by_name(black_box("Value"), black_box(1523i64)).unwrap())
    });

    group.bench_function("dynamic overwrite", |b| {
        let mut record = make_record();
        b.iter(|| record.set_by_name(black_box("Volume"), black_box(1i64)).unwrap())
    });

    group.bench_function("dynamic insert (fresh record)", |b| {
        b.iter(|| {
            let mut record = DynamicData::new();
            record
                .set_by_name(black_box("OpenInterest"), DataValue::from(1523i64))
                .unwrap()
        })
    });

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// Group 3: Loading rows
// ═══════════════════════════════════════════════════════════════════════════

fn bench_load_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_row");
    let mut loader = ColumnarLoader::new(LoaderConfig::default().with_symbol("SPY"));
    loader.read_header(HEADER).unwrap();

    group.bench_function("columnar read_row", |b| {
        b.iter(|| loader.read_row(black_box(ROW)).unwrap())
    });

    group.finish();
}

// ─── Criterion Main ─────────────────────────────────────────────────────────

criterion_group!(benches, bench_get_by_name, bench_set_by_name, bench_load_row);
criterion_main!(benches);
