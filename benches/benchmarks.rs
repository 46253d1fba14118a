criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        sampling_river_evaluation,
        sampling_river_classification,
        exhausting_five_card_census,
        enumerating_turn_equity,
        simulating_preflop_equity,
}

fn sampling_river_evaluation(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card Hand", |b| {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let hand = Deck::new().deal(7, rng);
        b.iter(|| evaluate(hand))
    });
}

fn sampling_river_classification(c: &mut criterion::Criterion) {
    c.bench_function("classify a 7-card Hand", |b| {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let hand = Deck::new().deal(7, rng);
        b.iter(|| hand.classify())
    });
}

fn exhausting_five_card_census(c: &mut criterion::Criterion) {
    c.bench_function("exhaust every 5-card Hand", |b| {
        b.iter(|| Census::exhaust(5))
    });
}

fn enumerating_turn_equity(c: &mut criterion::Criterion) {
    let holes = [hand("Ah Kh"), hand("Qs Qc")];
    let board = hand("2h 7h Jd 4c");
    c.bench_function("enumerate Turn equity", |b| {
        b.iter(|| Equity::enumerate(&holes, board))
    });
}

fn simulating_preflop_equity(c: &mut criterion::Criterion) {
    let holes = [hand("As Ah"), hand("Kd Kc")];
    c.bench_function("simulate Preflop equity", |b| {
        b.iter(|| Equity::simulate(&holes, Hand::empty(), 10_000))
    });
}

fn hand(s: &str) -> Hand {
    Hand::try_from(s).expect("valid hand")
}

use holdem::cards::Deck;
use holdem::cards::Hand;
use holdem::cards::evaluate;
use holdem::census::Census;
use holdem::equity::Equity;
use rand::SeedableRng;
use rand::rngs::SmallRng;
