pub mod error;
pub mod input;
pub mod sort;

pub use sort::{Algorithm, Descriptor, QuickSort, Sorted, Summary};
