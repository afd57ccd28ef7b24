pub fn sort<T: PartialOrd>(items: Vec<T>) -> Vec<T> {
    let mut items = items;
    let n = items.len();

    for i in 0..n {
        let mut smallest = i;
        for j in (i + 1)..n {
            if items[j] < items[smallest] {
                smallest = j;
            }
        }
        items.swap(i, smallest);
    }

    items
}
