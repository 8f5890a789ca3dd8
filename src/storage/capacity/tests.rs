#![cfg(test)]

use super::*;
use crate::storage::error::{CapacityOverflow, IndexOutOfBounds, LinearStorageError};
use crate::storage::linear::LinearStorage;

/// Builds storage holding `items` with exactly `head` free slots before them and `tail` free
/// slots after them.
fn with_slack(items: &[i32], head: usize, tail: usize) -> LinearStorage<i32> {
    let mut storage = LinearStorage::with_capacity(head + items.len() + tail)
        .expect("capacity within test sizes");

    for _ in 0..head {
        storage.push_tail(0).expect("slack padding");
    }
    for &item in items {
        storage.push_tail(item).expect("push within capacity");
    }
    for _ in 0..head {
        storage.pop_head();
    }

    assert_eq!(storage.head_slack(), head);
    assert_eq!(storage.tail_slack(), tail);
    storage
}

/// Opens a split gap and fills it with `fill`, checking the unsafe two-step contract in one
/// place.
fn split_and_fill(storage: &mut LinearStorage<i32>, split_index: usize, fill: &[i32]) {
    // SAFETY: Every gap slot is written immediately below, before any other use.
    unsafe {
        storage
            .ensure_split_capacity(split_index, fill.len())
            .expect("split within test sizes");
        for (offset, &item) in fill.iter().enumerate() {
            storage.write_gap(split_index + offset, item);
        }
    }
}

#[test]
fn split_reallocates_when_no_slack_exists() {
    let mut storage = with_slack(&[1, 2, 3, 4, 5], 0, 0);
    let old_capacity = storage.capacity();

    split_and_fill(&mut storage, 2, &[8, 9]);

    assert_eq!(storage.as_slice(), &[1, 2, 8, 9, 3, 4, 5]);
    assert_eq!(storage.capacity(), old_capacity + 2, "Reallocation should add exactly the gap.");
}

#[test]
fn split_shifts_post_segment_into_tail_slack() {
    let mut storage = with_slack(&[1, 2, 3, 4, 5], 0, 3);
    let old_capacity = storage.capacity();

    split_and_fill(&mut storage, 2, &[8, 9]);

    assert_eq!(storage.as_slice(), &[1, 2, 8, 9, 3, 4, 5]);
    assert_eq!(storage.capacity(), old_capacity, "Slack should be consumed, not reallocated.");
    assert_eq!(storage.bounds().first_index(), 0, "The pre-segment should not have moved.");
}

#[test]
fn split_shifts_pre_segment_into_head_slack() {
    let mut storage = with_slack(&[1, 2, 3, 4, 5], 3, 0);
    let old_capacity = storage.capacity();
    let old_first = storage.bounds().first_index();

    split_and_fill(&mut storage, 2, &[8, 9]);

    assert_eq!(storage.as_slice(), &[1, 2, 8, 9, 3, 4, 5]);
    assert_eq!(storage.capacity(), old_capacity);
    assert_eq!(
        storage.bounds().first_index(),
        old_first - 2,
        "The pre-segment should have moved into the head slack."
    );
}

#[test]
fn split_shifts_both_segments_when_only_the_combination_fits() {
    let mut storage = with_slack(&[1, 2, 3, 4, 5], 1, 1);
    let old_capacity = storage.capacity();

    split_and_fill(&mut storage, 2, &[8, 9]);

    assert_eq!(storage.as_slice(), &[1, 2, 8, 9, 3, 4, 5]);
    assert_eq!(storage.capacity(), old_capacity);
    assert_eq!(storage.head_slack(), 0, "All head slack should have been consumed.");
    assert_eq!(storage.tail_slack(), 0, "All tail slack should have been consumed.");
}

#[test]
fn split_prefers_the_shorter_segment() {
    // Both sides have room; the one-item pre-segment is cheaper to move.
    let mut storage = with_slack(&[1, 2, 3, 4, 5], 2, 2);
    let old_first = storage.bounds().first_index();

    split_and_fill(&mut storage, 1, &[9]);

    assert_eq!(storage.as_slice(), &[1, 9, 2, 3, 4, 5]);
    assert_eq!(storage.bounds().first_index(), old_first - 1);
}

#[test]
fn split_tie_breaks_towards_more_slack() {
    // Equal segment lengths; more slack at the head, so the pre-segment moves.
    let mut storage = with_slack(&[1, 2, 3, 4], 3, 2);
    let old_first = storage.bounds().first_index();
    split_and_fill(&mut storage, 2, &[8, 9]);
    assert_eq!(storage.as_slice(), &[1, 2, 8, 9, 3, 4]);
    assert_eq!(storage.bounds().first_index(), old_first - 2);

    // And the mirror image: more slack at the tail leaves the pre-segment alone.
    let mut storage = with_slack(&[1, 2, 3, 4], 2, 3);
    let old_first = storage.bounds().first_index();
    split_and_fill(&mut storage, 2, &[8, 9]);
    assert_eq!(storage.as_slice(), &[1, 2, 8, 9, 3, 4]);
    assert_eq!(storage.bounds().first_index(), old_first);
}

#[test]
fn split_at_the_ends_degenerates_to_head_and_tail_growth() {
    let mut storage = with_slack(&[1, 2, 3], 0, 0);
    split_and_fill(&mut storage, 0, &[8, 9]);
    assert_eq!(storage.as_slice(), &[8, 9, 1, 2, 3]);

    let mut storage = with_slack(&[1, 2, 3], 0, 0);
    split_and_fill(&mut storage, 3, &[8, 9]);
    assert_eq!(storage.as_slice(), &[1, 2, 3, 8, 9]);
}

#[test]
fn split_checks_the_index_before_anything_else() {
    let mut storage = with_slack(&[1, 2, 3], 0, 0);
    let old_capacity = storage.capacity();

    // SAFETY: A failed split opens no gap, so there is nothing to fill.
    let result = unsafe { storage.ensure_split_capacity(4, 2) };

    assert_eq!(
        result,
        Err(LinearStorageError::IndexOutOfBounds(IndexOutOfBounds { index: 4, size: 3 }))
    );
    assert_eq!(storage.capacity(), old_capacity);
    assert_eq!(storage.as_slice(), &[1, 2, 3]);

    // A zero-width request is still range checked, but a valid one is a no-op.
    // SAFETY: A zero-width gap has no slots to fill.
    let result = unsafe { storage.ensure_split_capacity(1, 0) };
    assert_eq!(result, Ok(()));
    assert_eq!(storage.as_slice(), &[1, 2, 3]);
}

#[test]
fn split_surfaces_capacity_overflow() {
    let mut storage = with_slack(&[1, 2, 3], 0, 0);

    // SAFETY: A failed split opens no gap, so there is nothing to fill.
    let result = unsafe { storage.ensure_split_capacity(1, usize::MAX) };

    assert_eq!(result, Err(LinearStorageError::CapacityOverflow(CapacityOverflow)));
    assert_eq!(storage.as_slice(), &[1, 2, 3]);
}

#[test]
fn close_gap_discards_unfilled_slots() {
    let mut storage = with_slack(&[1, 2, 3, 4], 0, 0);

    // SAFETY: One gap slot is written and the remaining two are closed before any other use.
    unsafe {
        storage.ensure_split_capacity(2, 3).unwrap();
        storage.write_gap(2, 9);
        storage.close_gap(3, 2);
    }

    assert_eq!(storage.as_slice(), &[1, 2, 9, 3, 4]);
}

#[test]
fn initial_strategy_only_sizes_unallocated_storage() {
    let mut storage: LinearStorage<u8> = LinearStorage::new();

    InitialCapacityStrategy.ensure_capacity(&mut storage, 0).unwrap();
    assert_eq!(storage.capacity(), 0, "A zero minimum should allocate nothing.");

    InitialCapacityStrategy.ensure_capacity(&mut storage, 8).unwrap();
    assert_eq!(storage.capacity(), 8);

    InitialCapacityStrategy.ensure_capacity(&mut storage, 100).unwrap();
    assert_eq!(storage.capacity(), 8, "Sized storage should be left alone.");
}

#[test]
fn head_growth_preserves_tail_slack() {
    let mut storage = with_slack(&[1, 2, 3], 0, 2);

    HeadCapacityStrategy.ensure_capacity(&mut storage, 4).unwrap();

    assert_eq!(storage.head_slack(), 4);
    assert_eq!(storage.tail_slack(), 2, "Growing the head should not discard tail slack.");
    assert_eq!(storage.capacity(), 9);
    assert_eq!(storage.as_slice(), &[1, 2, 3]);
}

#[test]
fn tail_growth_preserves_head_slack() {
    let mut storage = with_slack(&[1, 2, 3], 2, 0);

    TailCapacityStrategy.ensure_capacity(&mut storage, 4).unwrap();

    assert_eq!(storage.tail_slack(), 4);
    assert_eq!(storage.head_slack(), 2, "Growing the tail should not discard head slack.");
    assert_eq!(storage.capacity(), 9);
    assert_eq!(storage.as_slice(), &[1, 2, 3]);
}

#[test]
fn bulk_reservation_matches_repeated_growth() {
    let mut incremental = LinearStorage::new();
    for i in 0..50 {
        incremental.push_tail(i).unwrap();
    }

    let mut reserved = LinearStorage::new();
    reserved.ensure_tail_capacity(50).unwrap();
    let reserved_capacity = reserved.capacity();
    for i in 0..50 {
        reserved.push_tail(i).unwrap();
    }

    assert_eq!(incremental, reserved);
    assert_eq!(reserved.capacity(), reserved_capacity, "The reservation should cover all pushes.");
}
