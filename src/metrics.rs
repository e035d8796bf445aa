//! Link and cut counters.
//!
//! Every heap owns its own [`Metrics`], so experiment runs and tests can
//! assert exact counts per scenario and reset them between runs.

/// Structural work performed by a heap since creation or the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Number of link operations (two equal-rank roots merged into one tree)
    pub links: u64,
    /// Number of cut operations (a subtree detached from its parent)
    pub cuts: u64,
}

impl Metrics {
    /// Zero both counters.
    pub fn reset(&mut self) {
        *self = Metrics::default();
    }

    pub(crate) fn record_link(&mut self) {
        self.links += 1;
    }

    pub(crate) fn record_cut(&mut self) {
        self.cuts += 1;
    }

    /// Fold another heap's counters into these ones.
    pub(crate) fn absorb(&mut self, other: Metrics) {
        self.links += other.links;
        self.cuts += other.cuts;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_reset() {
        let mut m = Metrics::default();
        m.record_link();
        m.record_link();
        m.record_cut();
        assert_eq!(m, Metrics { links: 2, cuts: 1 });

        m.absorb(Metrics { links: 3, cuts: 4 });
        assert_eq!(m, Metrics { links: 5, cuts: 5 });

        m.reset();
        assert_eq!(m, Metrics::default());
    }
}
