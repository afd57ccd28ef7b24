pub fn sort<T: PartialOrd>(items: Vec<T>) -> Vec<T> {
    let mut items = items;

    for i in 1..items.len() {
        let mut current = i;
        while current > 0 && items[current - 1] > items[current] {
            items.swap(current - 1, current);
            current -= 1;
        }
    }

    items
}
