use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use joker_holdem::cards::{parse_cards, Card};
use joker_holdem::deck::Deck;
use joker_holdem::evaluator::{evaluate, Classifier, FullHouse, Straight, CLASSIFIERS};

fn pool(player: &str, table: &str) -> (Vec<Card>, Vec<Card>) {
    (parse_cards(player).unwrap(), parse_cards(table).unwrap())
}

fn bench_evaluate(c: &mut Criterion) {
    let cases = [
        ("high_card", pool("As Kd", "9c 7h 5s 3d 2c")),
        ("royal_flush", pool("As Ks", "Qs Js Ts 3d 2c")),
        ("five_of_a_kind", pool("2d 7c", "8c 7h 7s Xh Xc")),
        ("joker_straight", pool("Xh Xc", "9d 8s 6h 2c Kd")),
    ];

    let mut g = c.benchmark_group("evaluate");
    for (name, (player, table)) in &cases {
        g.bench_with_input(BenchmarkId::new("pool", name), &(player, table), |b, (p, t)| {
            b.iter(|| evaluate(black_box(p), black_box(t)))
        });
    }
    g.finish();
}

fn bench_classifiers(c: &mut Criterion) {
    let (player, table) = pool("Xh 6s", "6d Kc Kd 9h 2c");
    let mut g = c.benchmark_group("classifier");
    g.bench_function("straight", |b| b.iter(|| Straight.check(black_box(&player), black_box(&table))));
    g.bench_function("full_house", |b| b.iter(|| FullHouse.check(black_box(&player), black_box(&table))));
    g.bench_function("all_eleven", |b| {
        b.iter(|| {
            CLASSIFIERS.iter().filter(|cl| cl.check(black_box(&player), black_box(&table)).is_winning_hand()).count()
        })
    });
    g.finish();
}

fn bench_seeded_deals(c: &mut Criterion) {
    let pools: Vec<(Vec<Card>, Vec<Card>)> = (0..256u64)
        .map(|seed| {
            let mut deck = Deck::with_jokers(2);
            deck.shuffle_seeded(seed);
            (deck.draw_n(2), deck.draw_n(5))
        })
        .collect();
    c.bench_function("evaluate_256_seeded_pools", |b| {
        b.iter(|| pools.iter().map(|(p, t)| evaluate(p, t).value as u64).sum::<u64>())
    });
}

criterion_group!(benches, bench_evaluate, bench_classifiers, bench_seeded_deals);
criterion_main!(benches);
