use log::trace;

pub fn sort<T: PartialOrd>(items: Vec<T>) -> Vec<T> {
    let (items, passes) = sort_counting_passes(items);
    trace!("bubble sort finished after {passes} passes");
    items
}

/// Sorts the items and reports how many passes over them were needed.
///
/// Each pass pushes the largest remaining item to the end of the unsorted range,
/// so the range shrinks by one per pass. A pass without swaps ends the sort.
fn sort_counting_passes<T: PartialOrd>(items: Vec<T>) -> (Vec<T>, usize) {
    let mut items = items;
    let mut end = items.len();
    let mut passes = 0;
    let mut swapped = true;

    while swapped && end > 1 {
        swapped = false;
        passes += 1;

        for i in 1..end {
            if items[i - 1] > items[i] {
                items.swap(i - 1, i);
                swapped = true;
            }
        }

        end -= 1;
    }

    (items, passes)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{sort, sort_counting_passes};

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![5], vec![5])]
    #[case(vec![2, 1], vec![1, 2])]
    #[case(vec![5, 1, 4, 2, 8], vec![1, 2, 4, 5, 8])]
    #[case(vec![3, -1, 3, 0], vec![-1, 0, 3, 3])]
    fn test_sort(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(sort(input), expected);
    }

    #[test]
    fn test_sorted_input_takes_a_single_pass() {
        let (items, passes) = sort_counting_passes(vec![1, 2, 3, 4, 5]);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(passes, 1);
    }

    #[test]
    fn test_reversed_input_shrinks_the_range_every_pass() {
        let (items, passes) = sort_counting_passes(vec![5, 4, 3, 2, 1]);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(passes, 4);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![7])]
    fn test_trivial_input_needs_no_pass(#[case] input: Vec<i32>) {
        let (items, passes) = sort_counting_passes(input.clone());
        assert_eq!(items, input);
        assert_eq!(passes, 0);
    }
}
