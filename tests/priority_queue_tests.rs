use lazy_dijkstra::data_structures::MinQueue;
use lazy_dijkstra::Error;

#[test]
fn test_pop_min_on_empty_queue() {
    let mut queue: MinQueue<usize, u32> = MinQueue::new();
    assert!(queue.is_empty());
    assert!(matches!(queue.pop_min(), Err(Error::EmptyQueue)));
    assert_eq!(queue.pop(), None);
    assert_eq!(queue.peek(), None);
}

#[test]
fn test_pops_in_ascending_priority() {
    let mut queue = MinQueue::new();
    for (vertex, priority) in [(0usize, 40u32), (1, 5), (2, 17), (3, 0), (4, 99)] {
        queue.push(vertex, priority);
    }
    assert_eq!(queue.len(), 5);
    assert_eq!(queue.peek(), Some((3, 0)));

    let mut order = Vec::new();
    while !queue.is_empty() {
        order.push(queue.pop_min().unwrap());
    }
    assert_eq!(order, vec![(3, 0), (1, 5), (2, 17), (0, 40), (4, 99)]);
}

#[test]
fn test_equal_priorities_pop_in_insertion_order() {
    let mut queue = MinQueue::new();
    queue.push(10usize, 5u32);
    queue.push(11, 5);
    queue.push(12, 5);
    queue.push(13, 1);

    assert_eq!(queue.pop(), Some((13, 1)));
    assert_eq!(queue.pop(), Some((10, 5)));
    assert_eq!(queue.pop(), Some((11, 5)));
    assert_eq!(queue.pop(), Some((12, 5)));
}

#[test]
fn test_duplicates_are_not_merged() {
    let mut queue = MinQueue::with_capacity(4);
    queue.push(7usize, 9i64);
    queue.push(7, 3);
    queue.push(7, 9);

    assert_eq!(queue.len(), 3, "lazy deletion keeps every entry");
    assert_eq!(queue.pop_min().unwrap(), (7, 3));
    assert_eq!(queue.pop_min().unwrap(), (7, 9));
    assert_eq!(queue.pop_min().unwrap(), (7, 9));
    assert!(queue.is_empty());

    queue.push(1, 1);
    queue.clear();
    assert!(queue.is_empty());
}
