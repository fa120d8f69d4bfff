extern crate ordered_collections;
extern crate rand;

use ordered_collections::min_heap::MinHeap;
use self::rand::Rng;
use std::vec::Vec;

#[test]
fn int_test_min_heap() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut heap = MinHeap::new();
    let mut expected = Vec::new();
    for _ in 0..100_000 {
        let value = rng.gen::<u32>();

        heap.push(value);
        expected.push(value);
    }

    expected.sort();

    assert_eq!(heap.len(), expected.len());
    assert_eq!(heap.peek(), Some(&expected[0]));

    let mut expected_len = expected.len();
    for value in expected {
        assert_eq!(heap.pop(), Some(value));
        expected_len -= 1;
        assert_eq!(heap.len(), expected_len);
    }

    assert!(heap.is_empty());
    assert_eq!(heap.pop(), None);
}

#[test]
fn int_test_min_heap_from_vec() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
    let mut values = Vec::new();
    for _ in 0..10_000 {
        values.push(rng.gen::<u32>());
    }

    let mut expected = values.clone();
    expected.sort();

    let heap = MinHeap::from(values);
    assert_eq!(heap.into_iter().collect::<Vec<u32>>(), expected);
}
