use std::collections::HashMap;

/// Depth recorded for values that hold at every depth, such as decided games.
pub const ANY_DEPTH: usize = usize::MAX;

/// How a stored value relates to the true minimax value of its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// The search failed high; the true value is at least the stored value.
    Lower,
    /// The search failed low; the true value is at most the stored value.
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TranspositionEntry {
    pub depth: usize,
    pub value: f32,
    pub bound: Bound,
}

#[derive(Default, Debug)]
pub struct TranspositionTable {
    entries: HashMap<u64, TranspositionEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a stored value usable at `depth` within the `(alpha, beta)` window.
    ///
    /// Only entries searched to exactly `depth`, or valid at any depth, are used. A shallower
    /// result must never stand in for a deeper search, and a deeper one would make the result
    /// depend on the order the tree was visited in.
    pub fn probe(&self, hash: u64, depth: usize, alpha: f32, beta: f32) -> Option<f32> {
        let entry = self.entries.get(&hash)?;

        if entry.depth != depth && entry.depth != ANY_DEPTH {
            return None;
        }

        match entry.bound {
            Bound::Exact => Some(entry.value),
            Bound::Lower if entry.value >= beta => Some(entry.value),
            Bound::Upper if entry.value <= alpha => Some(entry.value),
            _ => None,
        }
    }

    /// Stores the result of a search. Entries valid at any depth are never replaced.
    pub fn store(&mut self, hash: u64, depth: usize, value: f32, bound: Bound) {
        let entry = TranspositionEntry {
            depth,
            value,
            bound,
        };

        match self.entries.get(&hash) {
            Some(existing) if existing.depth == ANY_DEPTH => {}
            _ => {
                self.entries.insert(hash, entry);
            }
        }
    }

    pub fn get(&self, hash: u64) -> Option<&TranspositionEntry> {
        self.entries.get(&hash)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_entry_is_reused_at_equal_depth() {
        let mut table = TranspositionTable::new();
        table.store(7, 3, 1.5, Bound::Exact);

        assert_eq!(table.probe(7, 3, f32::NEG_INFINITY, f32::INFINITY), Some(1.5));
    }

    #[test]
    fn test_entry_is_not_reused_at_other_depths() {
        let mut table = TranspositionTable::new();
        table.store(7, 1, 1.5, Bound::Exact);

        assert_eq!(table.probe(7, 2, f32::NEG_INFINITY, f32::INFINITY), None);
        assert_eq!(table.probe(7, 0, f32::NEG_INFINITY, f32::INFINITY), None);
    }

    #[test]
    fn test_any_depth_entry_is_reused_everywhere() {
        let mut table = TranspositionTable::new();
        table.store(7, ANY_DEPTH, f32::INFINITY, Bound::Exact);

        assert_eq!(table.probe(7, 0, 0.0, 1.0), Some(f32::INFINITY));
        assert_eq!(table.probe(7, 5, 0.0, 1.0), Some(f32::INFINITY));

        table.store(7, 2, 1.0, Bound::Exact);
        assert_eq!(table.get(7).map(|e| e.depth), Some(ANY_DEPTH));
    }

    #[test]
    fn test_lower_bound_only_used_on_cutoff() {
        let mut table = TranspositionTable::new();
        table.store(7, 2, 4.0, Bound::Lower);

        assert_eq!(table.probe(7, 2, 0.0, 3.0), Some(4.0));
        assert_eq!(table.probe(7, 2, 0.0, 5.0), None);
    }

    #[test]
    fn test_upper_bound_only_used_on_cutoff() {
        let mut table = TranspositionTable::new();
        table.store(7, 2, -4.0, Bound::Upper);

        assert_eq!(table.probe(7, 2, -3.0, 10.0), Some(-4.0));
        assert_eq!(table.probe(7, 2, -5.0, 10.0), None);
    }

    #[test]
    fn test_latest_entry_replaces_previous() {
        let mut table = TranspositionTable::new();
        table.store(7, 4, 2.0, Bound::Exact);
        table.store(7, 1, 9.0, Bound::Upper);

        assert_eq!(
            table.get(7),
            Some(&TranspositionEntry {
                depth: 1,
                value: 9.0,
                bound: Bound::Upper
            })
        );
        assert_eq!(table.len(), 1);

        table.clear();
        assert!(table.is_empty());
    }
}
