//! Ownership transfer: moves, `mem::take`, and owned iteration.

use gravel_array::Array;
use gravel_test_utils::DropTally;

#[test]
fn move_construction_transfers_the_buffer() {
    let source = Array::from_slice(&[1, 2, 3]).unwrap();
    let ptr = source.as_ptr();
    let target = source;
    assert_eq!(target.as_ptr(), ptr, "the buffer moved, not its contents");
    assert_eq!(target, [1, 2, 3]);
}

#[test]
fn mem_take_leaves_an_empty_source() {
    let mut source = Array::from_slice(&[1, 2, 3]).unwrap();
    let taken = std::mem::take(&mut source);
    assert_eq!(source.len(), 0);
    assert!(source.first().is_none());
    assert_eq!(taken, [1, 2, 3]);
}

#[test]
fn move_assignment_releases_the_old_contents() {
    let tally = DropTally::new();
    let mut target = Array::new();
    target.push(tally.track(1)).unwrap();
    target.push(tally.track(2)).unwrap();
    let mut replacement = Array::new();
    replacement.push(tally.track(3)).unwrap();
    target = replacement;
    assert_eq!(tally.live(), 1, "the replaced elements were destroyed");
    assert_eq!(target.len(), 1);
}

#[test]
fn into_iter_round_trips_through_collect() {
    let array = Array::from_slice(&[1, 2, 3, 4]).unwrap();
    let doubled: Array<i32> = array.into_iter().map(|v| v * 2).collect();
    assert_eq!(doubled, [2, 4, 6, 8]);
}

#[test]
fn partially_consumed_into_iter_destroys_the_rest() {
    let tally = DropTally::new();
    let mut array = Array::new();
    for i in 0..8 {
        array.push(tally.track(i)).unwrap();
    }
    let mut iter = array.into_iter();
    let first = iter.next().unwrap();
    assert_eq!(first.value, 0);
    assert_eq!(tally.live(), 8, "yielded element still live");
    drop(iter);
    drop(first);
    assert_eq!(tally.live(), 0);
}

#[test]
fn reverse_iteration_sees_the_same_elements() {
    let array = Array::from_slice(&[1, 2, 3]).unwrap();
    let backwards: Vec<i32> = array.into_iter().rev().collect();
    assert_eq!(backwards, [3, 2, 1]);
}

#[test]
fn borrowing_iteration_through_deref() {
    let mut array = Array::from_slice(&[1, 2, 3]).unwrap();
    let sum: i32 = (&array).into_iter().sum();
    assert_eq!(sum, 6);
    for value in &mut array {
        *value += 10;
    }
    assert_eq!(array, [11, 12, 13]);
}
