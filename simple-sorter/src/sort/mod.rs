use std::{
    fmt,
    time::{Duration, Instant},
};

use log::debug;

mod bubblesort;
mod insertionsort;
mod mergesort;
mod quicksort;
mod selectionsort;

pub use quicksort::QuickSort;

/// Human readable name and complexity class of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub name: &'static str,
    pub complexity: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    Merge,
    Insertion,
    Quick(QuickSort),
    Selection,
}

impl Algorithm {
    pub fn descriptor(&self) -> Descriptor {
        let (name, complexity) = match self {
            Algorithm::Bubble => ("Bubble Sort", "O(n^2)"),
            Algorithm::Merge => ("Merge Sort", "O(n * log(n))"),
            Algorithm::Insertion => ("Insertion Sort", "O(n^2)"),
            Algorithm::Quick(_) => ("Quick Sort", "O(n * log(n))"),
            Algorithm::Selection => ("Selection Sort", "O(n^2)"),
        };
        Descriptor { name, complexity }
    }

    /// Whether items that compare equal keep their relative order.
    pub fn is_stable(&self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Merge | Algorithm::Insertion
        )
    }

    pub fn sort<T: PartialOrd>(&self, items: Vec<T>) -> Vec<T> {
        match self {
            Algorithm::Bubble => bubblesort::sort(items),
            Algorithm::Merge => mergesort::sort(items),
            Algorithm::Insertion => insertionsort::sort(items),
            Algorithm::Quick(quick_sort) => quick_sort.sort(items),
            Algorithm::Selection => selectionsort::sort(items),
        }
    }

    /// Sorts the items, timing the sort when `measure_time` is set.
    pub fn invoke<T: PartialOrd>(&self, items: Vec<T>, measure_time: bool) -> Sorted<T> {
        let descriptor = self.descriptor();
        debug!("sorting {} items with {}", items.len(), descriptor.name);
        if let Algorithm::Quick(quick_sort) = self {
            debug!(
                "quick sort shuffle: {}, seed: {:?}",
                quick_sort.randomize(),
                quick_sort.seed()
            );
        }

        let (items, elapsed) = if measure_time {
            let start = Instant::now();
            let items = self.sort(items);
            let elapsed = start.elapsed();
            debug!("{} took {}ns", descriptor.name, elapsed.as_nanos());
            (items, Some(elapsed))
        } else {
            (self.sort(items), None)
        };

        Sorted {
            items,
            summary: Summary {
                descriptor,
                elapsed,
            },
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.descriptor().name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sorted<T> {
    pub items: Vec<T>,
    pub summary: Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub descriptor: Descriptor,
    pub elapsed: Option<Duration>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sorting algorithm: {}", self.descriptor.name)?;
        writeln!(f, "Complexity: {}", self.descriptor.complexity)?;
        if let Some(elapsed) = self.elapsed {
            writeln!(f, "Elapsed time: {}ns", elapsed.as_nanos())?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cmp::Ordering;

    /// An item that is ordered by `key` alone, with `tag` recording where it started.
    #[derive(Debug, Clone)]
    pub struct Keyed {
        pub key: i32,
        pub tag: char,
    }

    impl Keyed {
        pub fn new(key: i32, tag: char) -> Self {
            Self { key, tag }
        }
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.key.partial_cmp(&other.key)
        }
    }

    /// Tags the keys 'a', 'b', 'c', ... in order.
    pub fn keyed(keys: &[i32]) -> Vec<Keyed> {
        keys.iter()
            .zip('a'..)
            .map(|(key, tag)| Keyed::new(*key, tag))
            .collect()
    }

    pub fn tags(items: &[Keyed]) -> String {
        items.iter().map(|item| item.tag).collect()
    }
}
