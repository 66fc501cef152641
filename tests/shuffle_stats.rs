//! Statistical distribution checks for sampling and shuffling.
//!
//! Tolerance tests over many seeded trials, not exact checks. Expected
//! counts are 1000 per bucket; the accepted band of 800..=1200 sits
//! roughly seven standard deviations out, so a correct implementation
//! cannot realistically flake while a biased one cannot realistically
//! pass.

use std::collections::HashMap;

use pelmanism::cards::{CardCatalog, CardId};
use pelmanism::core::GameRng;
use pelmanism::deck::{build_deck, shuffle, DeckEntry};

const TRIALS: usize = 6000;
const LOW: usize = 800;
const HIGH: usize = 1200;

fn catalog_of(size: usize) -> CardCatalog {
    let mut catalog = CardCatalog::new();
    for i in 0..size {
        catalog.register_auto(format!("Card {}", i));
    }
    catalog
}

#[test]
fn shuffle_orderings_are_near_uniform() {
    // 3 entries have 6 orderings, each expected TRIALS / 6 times
    let deck = vec![
        DeckEntry::new(0, CardId::new(0)),
        DeckEntry::new(1, CardId::new(1)),
        DeckEntry::new(2, CardId::new(2)),
    ];
    let mut rng = GameRng::new(42);

    let mut counts: HashMap<Vec<u32>, usize> = HashMap::new();
    for _ in 0..TRIALS {
        let shuffled = shuffle(&deck, &mut rng);
        let ordering: Vec<u32> = shuffled.iter().map(|e| e.card_id.raw()).collect();
        *counts.entry(ordering).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 6, "some ordering never occurred");
    for (ordering, &count) in &counts {
        assert!(
            (LOW..=HIGH).contains(&count),
            "ordering {:?} occurred {} times, expected about {}",
            ordering,
            count,
            TRIALS / 6
        );
    }
}

#[test]
fn single_identity_sampling_is_near_uniform() {
    // Picking 1 of 6 identities: each expected TRIALS / 6 times
    let catalog = catalog_of(6);
    let mut rng = GameRng::new(42);

    let mut counts: HashMap<CardId, usize> = HashMap::new();
    for _ in 0..TRIALS {
        let deck = build_deck(&catalog, 1, &mut rng).unwrap();
        *counts.entry(deck[0].card_id).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 6, "some identity was never selected");
    for (card_id, &count) in &counts {
        assert!(
            (LOW..=HIGH).contains(&count),
            "{} selected {} times, expected about {}",
            card_id,
            count,
            TRIALS / 6
        );
    }
}

#[test]
fn pair_subset_sampling_is_near_uniform() {
    // Choosing 2 of 4 identities: each of the 6 unordered subsets
    // expected TRIALS / 6 times
    let catalog = catalog_of(4);
    let mut rng = GameRng::new(42);

    let mut counts: HashMap<(u32, u32), usize> = HashMap::new();
    for _ in 0..TRIALS {
        let deck = build_deck(&catalog, 2, &mut rng).unwrap();
        let mut picked = [deck[0].card_id.raw(), deck[1].card_id.raw()];
        picked.sort_unstable();
        assert_ne!(picked[0], picked[1], "sampled the same identity twice");
        *counts.entry((picked[0], picked[1])).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 6, "some subset was never selected");
    for (subset, &count) in &counts {
        assert!(
            (LOW..=HIGH).contains(&count),
            "subset {:?} selected {} times, expected about {}",
            subset,
            count,
            TRIALS / 6
        );
    }
}
