use std::collections::HashMap;

// Sequence of length n whose slot at 1-indexed position p starts out as p.
// Reversal flips the direction indices are read in; assigned values stay in
// their physical slot, so all three operations are O(1).
pub struct ReversibleSeq {
    n: usize,
    reversed: bool,
    overrides: HashMap<usize, i64>,
}

impl ReversibleSeq {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            reversed: false,
            overrides: HashMap::new(),
        }
    }

    // logical 1-indexed position -> physical 0-indexed slot
    fn slot(&self, x: usize) -> usize {
        debug_assert!(1 <= x && x <= self.n);
        if self.reversed {
            self.n - x
        } else {
            x - 1
        }
    }

    pub fn assign(&mut self, x: usize, y: i64) {
        let slot = self.slot(x);
        self.overrides.insert(slot, y);
    }

    pub fn reverse(&mut self) {
        self.reversed = !self.reversed;
    }

    pub fn get(&self, x: usize) -> i64 {
        let slot = self.slot(x);
        match self.overrides.get(&slot) {
            Some(&y) => y,
            None => (slot + 1) as i64,
        }
    }
}
