use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use rand::Rng;

use fpminer::fp::{association_rules, fp_growth_fraction, TransactionSet};

/// Generate a synthetic binary transaction matrix
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
/// - density: Chance that each drawn item is kept
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> TransactionSet {
    let mut rng = rand::thread_rng();
    let mut data = vec![0i32; num_transactions * num_items];

    for tx_idx in 0..num_transactions {
        let random_factor: f64 = rng.gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        for _ in 0..num_items_in_tx {
            let density_check: f64 = rng.gen();
            if density_check < density {
                let item = rng.gen_range(0..num_items);
                data[tx_idx * num_items + item] = 1;
            }
        }
    }

    let matrix = Array2::from_shape_vec((num_transactions, num_items), data)
        .expect("shape matches data length");
    TransactionSet::from_dense(matrix.view())
}

fn bench_fp_growth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, set| {
            b.iter(|| fp_growth_fraction(black_box(set), black_box(0.1)));
        });
    }

    group.finish();
}

fn bench_fp_growth_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_min_support");

    let transactions = generate_transactions(1000, 50, 10, 0.7);

    for &min_sup in &[0.05, 0.1, 0.2, 0.3, 0.5] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &min_sup,
            |b, &sup| {
                b.iter(|| fp_growth_fraction(black_box(&transactions), black_box(sup)));
            },
        );
    }

    group.finish();
}

fn bench_rule_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_generation");

    // Dense grocery-like baskets
    let grocery = generate_transactions(1000, 30, 8, 0.8);
    let itemsets = fp_growth_fraction(&grocery, 0.15).expect("valid support");

    for &min_conf in &[0.3, 0.6, 0.9] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.1}", min_conf)),
            &min_conf,
            |b, &conf| {
                b.iter(|| association_rules(black_box(&grocery), black_box(&itemsets), conf));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fp_growth_scaling,
    bench_fp_growth_min_support,
    bench_rule_generation
);
criterion_main!(benches);
