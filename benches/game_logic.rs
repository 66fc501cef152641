use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashMap;

use pelmanism::cards::{CardCatalog, CardId};
use pelmanism::core::{GameRng, SessionConfig};
use pelmanism::deck::{build_deck, shuffle};
use pelmanism::session::GameSession;

fn bench_build_and_shuffle(c: &mut Criterion) {
    let catalog = CardCatalog::demo();
    let mut rng = GameRng::new(42);

    c.bench_function("build_and_shuffle_6_pairs", |b| {
        b.iter(|| {
            let deck = build_deck(black_box(&catalog), 6, &mut rng).unwrap();
            shuffle(&deck, &mut rng)
        })
    });
}

fn bench_deal_session(c: &mut Criterion) {
    let catalog = CardCatalog::demo();

    c.bench_function("deal_session", |b| {
        b.iter(|| {
            GameSession::new(black_box(catalog.clone()), SessionConfig::default(), 42).unwrap()
        })
    });
}

fn bench_full_round(c: &mut Criterion) {
    let catalog = CardCatalog::demo();

    c.bench_function("play_full_round", |b| {
        b.iter(|| {
            let mut session =
                GameSession::new(catalog.clone(), SessionConfig::default(), 42).unwrap();

            let mut by_id: HashMap<CardId, Vec<usize>> = HashMap::new();
            for entry in session.state().entries() {
                by_id.entry(entry.card_id).or_default().push(entry.position);
            }
            for (_, positions) in by_id {
                session.flip_card(positions[0]).unwrap();
                session.flip_card(positions[1]).unwrap();
            }
            session.attempts()
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let catalog = CardCatalog::demo();
    let mut session = GameSession::new(catalog, SessionConfig::default(), 42).unwrap();
    session.flip_card(0).unwrap();

    c.bench_function("snapshot", |b| b.iter(|| black_box(session.snapshot())));
}

criterion_group!(
    benches,
    bench_build_and_shuffle,
    bench_deal_session,
    bench_full_round,
    bench_snapshot
);
criterion_main!(benches);
