use logmerge::MergeHeap;

#[test]
fn test_pop_returns_global_minimum() {
    let mut heap = MergeHeap::new(3);
    heap.push(0, 5, "five");
    heap.push(1, 1, "one");
    heap.push(2, 3, "three");

    assert_eq!(heap.len(), 3);
    assert_eq!(heap.pop_min(), Some((1, "one")));
    assert_eq!(heap.pop_min(), Some((2, "three")));
    assert_eq!(heap.pop_min(), Some((0, "five")));
    assert_eq!(heap.pop_min(), None);
    assert!(heap.is_empty());
}

#[test]
fn test_equal_keys_pop_in_insertion_order() {
    let mut heap = MergeHeap::new(3);
    heap.push(2, 7, "first");
    heap.push(0, 7, "second");
    heap.push(1, 7, "third");

    assert_eq!(heap.pop_min(), Some((2, "first")));
    assert_eq!(heap.pop_min(), Some((0, "second")));
    assert_eq!(heap.pop_min(), Some((1, "third")));
}

#[test]
fn test_popping_vacates_the_source_slot() {
    let mut heap = MergeHeap::new(2);
    heap.push(0, 1, "a");
    assert!(heap.has_entry(0));
    assert!(!heap.has_entry(1));

    assert_eq!(heap.pop_min(), Some((0, "a")));
    assert!(!heap.has_entry(0));

    // The slot is free again, so the same source can be refilled.
    heap.push(0, 2, "b");
    assert_eq!(heap.pop_min(), Some((0, "b")));
}

#[test]
#[should_panic(expected = "already has a pending record")]
fn test_second_entry_for_a_source_panics() {
    let mut heap = MergeHeap::new(2);
    heap.push(0, 1, "a");
    heap.push(0, 2, "b");
}

#[test]
fn test_interleaved_push_pop_stays_ordered() {
    let mut heap = MergeHeap::new(2);
    heap.push(0, 1, 1);
    heap.push(1, 2, 2);

    assert_eq!(heap.pop_min(), Some((0, 1)));
    heap.push(0, 3, 3);
    assert_eq!(heap.pop_min(), Some((1, 2)));
    heap.push(1, 4, 4);
    assert_eq!(heap.pop_min(), Some((0, 3)));
    assert_eq!(heap.pop_min(), Some((1, 4)));
}
