use memslice::{OutOfRange, Slice, SliceMut};
use proptest::prelude::*;

fn values() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(any::<u32>(), 0..64)
}

fn values_with_split() -> impl Strategy<Value = (Vec<u32>, usize)> {
    values().prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 0..=len)
    })
}

fn values_with_range() -> impl Strategy<Value = (Vec<u32>, usize, usize)> {
    values()
        .prop_flat_map(|values| {
            let len = values.len();
            (Just(values), 0..=len, 0..=len)
        })
        .prop_map(|(values, a, b)| (values, a.min(b), a.max(b)))
}

fn values_with_inverted_range() -> impl Strategy<Value = (Vec<u32>, usize, usize)> {
    values()
        .prop_flat_map(|values| {
            let len = values.len();
            (Just(values), 0..=len, 1usize..16)
        })
        .prop_map(|(values, end, delta)| (values, end + delta, end))
}

fn values_with_nested_ranges() -> impl Strategy<Value = (Vec<u32>, usize, usize, usize, usize)> {
    values_with_range()
        .prop_flat_map(|(values, start, end)| {
            let width = end - start;
            (Just(values), Just(start), Just(end), 0..=width, 0..=width)
        })
        .prop_map(|(values, start, end, a, b)| (values, start, end, a.min(b), a.max(b)))
}

fn nonempty_values_with_position() -> impl Strategy<Value = (Vec<u32>, usize)> {
    prop::collection::vec(any::<u32>(), 1..64).prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 0..len)
    })
}

fn nonempty_values_with_two_positions() -> impl Strategy<Value = (Vec<u32>, usize, usize)> {
    prop::collection::vec(any::<u32>(), 1..64).prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 0..len, 0..len)
    })
}

proptest! {
    #[test]
    fn whole_range_is_the_identity(values in values()) {
        let view = Slice::new(&values);
        let whole = view.slice_range(0, view.len()).unwrap();
        prop_assert_eq!(whole, &values[..]);
    }

    #[test]
    fn at_succeeds_exactly_within_bounds(values in values()) {
        let view = Slice::new(&values);
        for index in 0..values.len() + 2 {
            match view.at(index) {
                Ok(element) => {
                    prop_assert!(index < values.len());
                    prop_assert_eq!(element, &values[index]);
                }
                Err(err) => {
                    prop_assert!(index >= values.len());
                    prop_assert_eq!(
                        err,
                        OutOfRange::Index {
                            index,
                            len: values.len(),
                        }
                    );
                }
            }
        }
    }

    #[test]
    fn split_at_reconstructs_the_original((values, index) in values_with_split()) {
        let view = Slice::new(&values);
        let (head, tail) = view.split_at(index).unwrap();
        prop_assert_eq!(head.len(), index);
        prop_assert_eq!(head.len() + tail.len(), values.len());
        let rejoined: Vec<u32> = head.iter().chain(tail.iter()).copied().collect();
        prop_assert_eq!(&rejoined, &values);
    }

    #[test]
    fn prefix_and_suffix_are_range_shorthands((values, count) in values_with_split()) {
        let view = Slice::new(&values);
        prop_assert_eq!(
            view.prefix(count).unwrap(),
            view.slice_range(0, count).unwrap()
        );
        prop_assert_eq!(
            view.suffix(count).unwrap(),
            view.slice_range(values.len() - count, values.len()).unwrap()
        );
    }

    #[test]
    fn inverted_ranges_always_fail((values, start, end) in values_with_inverted_range()) {
        let view = Slice::new(&values);
        prop_assert_eq!(
            view.slice_range(start, end),
            Err(OutOfRange::Inverted { start, end })
        );
    }

    #[test]
    fn nested_sub_slices_compose(
        (values, start, end, inner_start, inner_end) in values_with_nested_ranges()
    ) {
        let view = Slice::new(&values);
        let mid = view.slice_range(start, end).unwrap();
        let inner = mid.slice_range(inner_start, inner_end).unwrap();
        let direct = view
            .slice_range(start + inner_start, start + inner_end)
            .unwrap();
        prop_assert_eq!(inner, direct);
    }

    #[test]
    fn views_compare_equal_to_their_source(values in values()) {
        let view = Slice::new(&values);
        prop_assert!(view == values);
        prop_assert_eq!(view, &values[..]);
    }

    #[test]
    fn ordering_matches_the_standard_slice_ordering(a in values(), b in values()) {
        let left = Slice::new(&a);
        let right = Slice::new(&b);
        prop_assert_eq!(left.cmp(&right), a[..].cmp(&b[..]));
        prop_assert_eq!(left.partial_cmp(&right), a[..].partial_cmp(&b[..]));
    }

    #[test]
    fn reverse_iteration_agrees_with_forward(values in values()) {
        let view = Slice::new(&values);
        let forward: Vec<u32> = view.iter().copied().collect();
        let mut backward: Vec<u32> = view.iter().rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(&forward, &values);
        prop_assert_eq!(&backward, &values);
    }

    #[test]
    fn chunks_account_for_every_element((values, chunk_size) in (values(), 1usize..8)) {
        let view = Slice::new(&values);
        let mut chunks = view.chunks_exact(chunk_size);
        let mut seen = Vec::new();
        let mut count = 0;
        for chunk in &mut chunks {
            prop_assert_eq!(chunk.len(), chunk_size);
            seen.extend(chunk.iter().copied());
            count += 1;
        }
        let remainder = chunks.remainder();
        prop_assert!(remainder.len() < chunk_size);
        prop_assert_eq!(count * chunk_size + remainder.len(), values.len());
        seen.extend(remainder.iter().copied());
        prop_assert_eq!(&seen, &values);
    }

    #[test]
    fn writes_land_at_the_written_position(
        (mut values, index) in nonempty_values_with_position(),
        replacement in any::<u32>(),
    ) {
        let expected: Vec<u32> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| if i == index { replacement } else { v })
            .collect();
        let mut view = SliceMut::new(&mut values);
        *view.at_mut(index).unwrap() = replacement;
        prop_assert_eq!(&values, &expected);
    }

    #[test]
    fn swapping_twice_restores_the_region(
        (mut values, a, b) in nonempty_values_with_two_positions()
    ) {
        let original = values.clone();
        let mut view = SliceMut::new(&mut values);
        view.swap(a, b).unwrap();
        view.swap(a, b).unwrap();
        prop_assert_eq!(&values, &original);
    }
}
