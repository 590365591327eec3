// crates/wordnet_db/benches/parse_bench.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::path::PathBuf;
use wordnet_db::{Database, DbOptions, parse_data_line, parse_index_line};

const VERB_LINE: &str = "00000424 31 v 06 test 0 prove 0 try 0 try_out 0 examine 0 essay 0 003 @ 00000300 v 0000 + 00000436 n 0101 $ 00000686 v 0000 02 + 08 00 + 11 01 | put to the test, as for its quality, or give experimental use to; \"This approach has been tried with good results\"  ";
const INDEX_LINE: &str = "test n 2 3 @ ~ + 2 1 00000436 00000687  ";

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/db")
}

fn bench_parsers(c: &mut Criterion) {
    c.bench_function("parse_data_line/verb", |b| {
        b.iter(|| parse_data_line(black_box(VERB_LINE)).unwrap())
    });
    c.bench_function("parse_index_line", |b| {
        b.iter(|| parse_index_line(black_box(INDEX_LINE)).unwrap())
    });
}

fn bench_lookup(c: &mut Criterion) {
    let db = Database::load(fixture_dir(), &DbOptions::default()).unwrap();
    c.bench_function("lookup/test/resolved", |b| {
        b.iter(|| db.lookup(black_box("test"), false).unwrap())
    });
    c.bench_function("lookup/test/skip_pointers", |b| {
        b.iter(|| db.lookup(black_box("test"), true).unwrap())
    });
}

criterion_group!(benches, bench_parsers, bench_lookup);
criterion_main!(benches);
