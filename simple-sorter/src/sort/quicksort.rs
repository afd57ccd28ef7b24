use std::mem;

use log::trace;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Partition-exchange sort with the last item of each range as pivot.
///
/// A fixed pivot rule is quadratic on sorted input, so by default the items are
/// shuffled once before sorting. Pass a seed to make the shuffle reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickSort {
    randomize: bool,
    seed: Option<u64>,
}

impl Default for QuickSort {
    fn default() -> Self {
        Self {
            randomize: true,
            seed: None,
        }
    }
}

impl QuickSort {
    pub fn new(randomize: bool) -> Self {
        Self {
            randomize,
            seed: None,
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    pub fn randomize(&self) -> bool {
        self.randomize
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn sort<T: PartialOrd>(&self, items: Vec<T>) -> Vec<T> {
        let mut items = items;

        if self.randomize {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            items.shuffle(&mut rng);
            trace!("shuffled {} items before partitioning", items.len());
        }

        quick_sort(&mut items);
        items
    }
}

/// Recurses only into the smaller side of the pivot and loops on the larger one,
/// so the stack stays within log2(n) frames even when every partition is lopsided.
fn quick_sort<T: PartialOrd>(items: &mut [T]) {
    let mut items = items;

    while items.len() > 1 {
        let pivot_index = partition(items);
        let (left, right) = mem::take(&mut items).split_at_mut(pivot_index);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left);
            items = right;
        } else {
            quick_sort(right);
            items = left;
        }
    }
}

/// Moves items less than the pivot (the last item) in front of it and returns
/// the pivot's final position. Expects a non-empty slice.
fn partition<T: PartialOrd>(items: &mut [T]) -> usize {
    let high = items.len() - 1;
    let mut boundary = 0;

    for i in 0..high {
        if items[i] < items[high] {
            items.swap(boundary, i);
            boundary += 1;
        }
    }

    items.swap(boundary, high);
    boundary
}
