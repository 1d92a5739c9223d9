use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use ledgercheck_core::{Amount, Directive, Open, Posting, Source, Transaction};
use ledgercheck_plugins::{OptionsMap, validate_leaf_only};

/// Ledger with `accounts` leaf accounts under a few parents, one posting per
/// leaf, and every tenth parent posted to directly.
fn build_ledger(accounts: usize) -> Vec<Directive> {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let mut entries = Vec::with_capacity(accounts * 2);

    for i in 0..accounts {
        let parent = format!("Expenses:Group{}", i / 10);
        let leaf = format!("{parent}:Item{i}");
        entries.push(Directive::Open(Open {
            source: Source::new("bench", i as u32),
            date,
            account: leaf.parse().expect("valid account"),
            currencies: vec![],
        }));

        let mut postings = vec![Posting::new(leaf.parse().expect("valid account"), Amount::new(100, "USD"))];
        if i % 100 == 0 {
            postings.push(Posting::new(parent.parse().expect("valid account"), Amount::new(-100, "USD")));
        }
        entries.push(Directive::Transaction(Transaction {
            source: Source::new("bench", i as u32),
            date,
            flag: '*',
            payee: None,
            narration: String::new(),
            postings,
        }));
    }

    entries
}

fn bench_validate_leaf_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("leafonly");
    let options = OptionsMap::default();

    for size in [100usize, 1_000, 10_000] {
        let entries = build_ledger(size);
        group.throughput(Throughput::Elements(entries.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| validate_leaf_only(black_box(entries.clone()), &options))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validate_leaf_only);
criterion_main!(benches);
