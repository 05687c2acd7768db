use memslice::{Slice, SliceMut};

fn check_construction() {
    let values = [10u32, 20, 30, 40, 50];
    let view = Slice::new(&values);
    assert_eq!(view.len(), 5);
    assert_eq!(view.first(), Some(&10));
    assert_eq!(view.last(), Some(&50));
    assert!(Slice::<u32>::empty().is_empty());
}

fn check_sub_slicing() {
    let values = [10u32, 20, 30, 40, 50];
    let view = Slice::new(&values);
    let mid = view.slice_range(1, 4).unwrap();
    assert_eq!(mid, [20, 30, 40]);
    let (head, tail) = mid.split_at(1).unwrap();
    assert_eq!(head, [20]);
    assert_eq!(tail, [30, 40]);
    assert!(view.slice_range(3, 1).is_err());
    assert!(view.slice_range(1, 6).is_err());
}

fn check_equality_and_ordering() {
    let values = vec![1u32, 2, 3];
    let view = Slice::new(&values);
    assert_eq!(view, values);
    assert!(view < Slice::new(&[1u32, 2, 4]));
}

fn check_iteration() {
    let values = [1u32, 2, 3, 4, 5];
    let view = Slice::new(&values);
    assert_eq!(view.iter().copied().sum::<u32>(), 15);
    assert_eq!(view.iter().rev().next(), Some(&5));
    let mut chunks = view.chunks_exact(2);
    assert_eq!(chunks.by_ref().count(), 2);
    assert_eq!(chunks.remainder(), [5]);
}

fn check_mutation() {
    let mut values = [1u32, 2, 3];
    let mut view = SliceMut::new(&mut values);
    for elem in view.iter_mut() {
        *elem *= 2;
    }
    view.swap(0, 2).unwrap();
    assert_eq!(values, [6, 4, 2]);
}

fn check_serialization() {
    let values = [1u8, 2, 3];
    let view = Slice::new(&values);
    let json = serde_json::to_string(&view).unwrap();
    assert_eq!(json, "[1,2,3]");
}

fn main() {
    check_construction();
    check_sub_slicing();
    check_equality_and_ordering();
    check_iteration();
    check_mutation();
    check_serialization();
    println!("memslice conformance: ok");
}
