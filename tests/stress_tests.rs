//! Stress tests that push the heap through long random workloads
//!
//! Every round fills a main heap and a fresh secondary heap with random keys,
//! applies random deletes, decreases and delete-mins to both, and melds the
//! secondary into the main heap. The structure is validated after each step
//! and the heap contents are checked against a key -> handle model.

use fibheap::validate::validate;
use fibheap::{FibonacciHeap, Key, NodeId};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, HashSet};

const ROUNDS: i64 = 5;
const CHANGES: usize = 35;
const BATCH: usize = 1000;

/// Keys are unique across both heaps, so the live set is tracked globally.
struct Model {
    handles: BTreeMap<Key, NodeId>,
}

impl Model {
    fn new() -> Self {
        Model {
            handles: BTreeMap::new(),
        }
    }

    fn check(&self, heap: &FibonacciHeap) {
        let census = validate(heap).unwrap_or_else(|v| panic!("invalid heap: {v}"));
        assert_eq!(census.size, self.handles.len());
        assert_eq!(heap.min_key(), self.handles.keys().next().copied());
    }
}

fn insert_random(
    rng: &mut StdRng,
    heap: &mut FibonacciHeap,
    model: &mut Model,
    live: &mut HashSet<Key>,
    range: std::ops::Range<Key>,
) {
    for _ in 0..BATCH {
        let key = rng.gen_range(range.clone());
        if live.insert(key) {
            model.handles.insert(key, heap.insert(key));
        }
    }
}

fn random_change(
    rng: &mut StdRng,
    heap: &mut FibonacciHeap,
    model: &mut Model,
    live: &mut HashSet<Key>,
) {
    if heap.is_empty() {
        return;
    }
    match rng.gen_range(0..3) {
        0 => {
            let (&key, &id) = model.handles.iter().choose(rng).unwrap();
            assert_eq!(heap.delete(id), Ok(key));
            model.handles.remove(&key);
            live.remove(&key);
        }
        1 => {
            let (&key, &id) = model.handles.iter().choose(rng).unwrap();
            let delta = rng.gen_range(0..2000);
            let target = key - delta;
            if delta == 0 || live.insert(target) {
                heap.decrease_key(id, delta).unwrap();
                if delta != 0 {
                    live.remove(&key);
                    model.handles.remove(&key);
                    model.handles.insert(target, id);
                }
                assert_eq!(heap.key(id), Some(target));
            }
        }
        _ => {
            let expected = model.handles.keys().next().copied();
            assert_eq!(heap.delete_min(), expected);
            if let Some(key) = expected {
                model.handles.remove(&key);
                live.remove(&key);
            }
        }
    }
    model.check(heap);
}

fn run_stress(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut heap = FibonacciHeap::new();
    let mut model = Model::new();
    let mut live = HashSet::new();

    for round in 0..ROUNDS {
        let mut other = FibonacciHeap::new();
        let mut other_model = Model::new();

        insert_random(&mut rng, &mut heap, &mut model, &mut live, 0..(round + 1) * 1000);
        insert_random(
            &mut rng,
            &mut other,
            &mut other_model,
            &mut live,
            (round + 1) * 1000 + 1..(round + 2) * 1000,
        );
        model.check(&heap);
        other_model.check(&other);

        for _ in 0..CHANGES {
            random_change(&mut rng, &mut heap, &mut model, &mut live);
            random_change(&mut rng, &mut other, &mut other_model, &mut live);
        }

        heap.meld(other);
        model.handles.extend(other_model.handles);
        model.check(&heap);
        for (&key, &id) in &model.handles {
            assert_eq!(heap.key(id), Some(key));
        }
    }

    // Drain and confirm global order.
    let mut previous = None;
    while let Some(key) = heap.delete_min() {
        if let Some(previous) = previous {
            assert!(previous < key);
        }
        previous = Some(key);
    }
    assert!(heap.is_empty());
}

#[test]
fn test_stress_random_workloads() {
    for seed in 0..8 {
        run_stress(seed);
    }
}

#[test]
fn test_descending_inserts_pop_in_order() {
    let mut heap = FibonacciHeap::new();
    for key in (0..10_000).rev() {
        heap.insert(key);
    }
    assert_eq!(heap.len(), 10_000);
    for key in 0..10_000 {
        assert_eq!(heap.delete_min(), Some(key));
    }
    assert!(heap.is_empty());
    assert_eq!(heap.potential(), 0);
}

#[test]
fn test_reverse_decreases_cut_deep_nodes() {
    let mut heap = FibonacciHeap::new();
    let handles: Vec<NodeId> = (0..2_000).map(|i| heap.insert(10_000 + i)).collect();
    heap.insert(-1);
    heap.delete_min();

    // Reverse order forces cuts from deep inside the consolidated trees.
    for (i, &id) in handles.iter().enumerate().rev() {
        heap.decrease_key(id, 10_000).unwrap();
        assert_eq!(heap.key(id), Some(i as Key));
    }
    validate(&heap).unwrap();
    for i in 0..2_000 {
        assert_eq!(heap.delete_min(), Some(i));
    }
}

#[test]
fn test_dropping_heap_releases_its_nodes() {
    let mut heap = FibonacciHeap::new();
    let base = heap.arena().len();
    heap.extend(0..100);
    {
        let mut other = FibonacciHeap::new();
        other.extend(1_000..1_050);
        other.delete_min();
        assert_eq!(heap.arena().len(), base + 149);
    }
    assert_eq!(heap.arena().len(), base + 100);
    validate(&heap).unwrap();
}
