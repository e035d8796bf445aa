//! Experiment harness for the amortized bounds.
//!
//! Each experiment runs a fixed workload on a fresh heap and reports the
//! structural work (links and cuts), the final potential and the wall-clock
//! time. Counters are per heap, so runs never see each other's counts.

use crate::error::HeapError;
use crate::fibonacci::FibonacciHeap;
use crate::node::{Key, NodeId};
use log::debug;
use std::time::{Duration, Instant};

/// Outcome of one experiment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentReport {
    /// Number of keys inserted by the workload
    pub inserted: usize,
    /// Nodes left in the heap at the end
    pub remaining: usize,
    pub links: u64,
    pub cuts: u64,
    pub potential: usize,
    pub elapsed: Duration,
}

impl ExperimentReport {
    fn capture(heap: &FibonacciHeap, inserted: usize, started: Instant) -> Self {
        ExperimentReport {
            inserted,
            remaining: heap.len(),
            links: heap.total_links(),
            cuts: heap.total_cuts(),
            potential: heap.potential(),
            elapsed: started.elapsed(),
        }
    }
}

/// Builds one binomial tree of rank `k` and then forces a cascade of cuts.
///
/// Inserts `m - 1, ..., 0` with `m = 2^k`, plus a sentinel `-1`, deletes the
/// sentinel (which links the rest into a single tree), then decreases the
/// keys `m - 2^i + 1` for `i = k, ..., 1` by `m + 1`. Every decrease cuts
/// exactly one node and marks its parent, ending with `links = m - 1`,
/// `cuts = k` and `potential = 3k - 1`.
pub fn cascading_cut_experiment(k: u32) -> Result<ExperimentReport, HeapError> {
    let started = Instant::now();
    let m = 1usize << k;
    let mut heap = FibonacciHeap::new();

    let mut nodes: Vec<NodeId> = Vec::with_capacity(m);
    for key in (0..m as Key).rev() {
        nodes.push(heap.insert(key));
    }
    nodes.reverse();
    heap.insert(-1);
    heap.delete_min();

    for i in (1..=k).rev() {
        heap.decrease_key(nodes[m - (1usize << i) + 1], m as Key + 1)?;
    }

    let report = ExperimentReport::capture(&heap, m + 1, started);
    debug!("cascading-cut experiment k={}: {:?}", k, report);
    Ok(report)
}

/// Inserts `0..=m` and then deletes the minimum `⌊3m/4⌋` times.
///
/// No cuts happen, so every surviving tree is binomial and the trees left
/// have pairwise distinct ranks: the potential equals the number of set bits
/// in the remaining size.
pub fn delete_min_experiment(m: usize) -> ExperimentReport {
    let started = Instant::now();
    let mut heap: FibonacciHeap = (0..=m as Key).collect();
    for _ in 0..(3 * m / 4) {
        heap.delete_min();
    }

    let report = ExperimentReport::capture(&heap, m + 1, started);
    debug!("delete-min experiment m={}: {:?}", m, report);
    report
}
