pub fn sort<T: PartialOrd>(items: Vec<T>) -> Vec<T> {
    if items.len() < 2 {
        return items;
    }

    let mut left = items;
    let right = left.split_off(left.len() / 2);

    merge(sort(left), sort(right))
}

/// Combines two sorted runs. Ties are taken from `left` so equal items keep their order.
fn merge<T: PartialOrd>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut sorted = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            _ => break,
        };

        let next = if take_left { left.next() } else { right.next() };
        sorted.extend(next);
    }

    sorted.extend(left);
    sorted.extend(right);

    sorted
}
