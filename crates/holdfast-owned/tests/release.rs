//! Allocation accounting for `Owned`, measured with a counting global allocator.

use holdfast_owned::Owned;
use holdfast_test_utils::{measure, CountingAllocator};

#[global_allocator]
static ALLOC: CountingAllocator = CountingAllocator::new();

#[test]
fn scope_exit_releases_the_allocation_once() {
    let ((), delta) = measure(|| {
        let mut p = Owned::new(0_i32);
        *p = 100;
        assert_eq!(*p, 100);
    });
    assert_eq!(delta.allocations, 1);
    assert_eq!(delta.deallocations, 1);
    assert!(delta.is_balanced());
}

#[test]
fn moves_do_not_allocate_or_free() {
    fn hand_over<T>(p: Owned<T>) -> Owned<T> {
        p
    }

    let (p, delta) = measure(|| hand_over(hand_over(Owned::new([0_u64; 4]))));
    assert_eq!(delta.allocations, 1);
    assert_eq!(delta.deallocations, 0);

    let ((), delta) = measure(move || drop(p));
    assert_eq!(delta.allocations, 0);
    assert_eq!(delta.deallocations, 1);
}

#[test]
fn reset_reuses_the_allocation() {
    let (mut p, _) = measure(|| Owned::new(1_u32));
    let ((), delta) = measure(|| {
        Owned::reset(&mut p, 2);
        Owned::reset(&mut p, 3);
    });
    assert_eq!(delta.allocations, 0);
    assert_eq!(delta.deallocations, 0);
    assert_eq!(*p, 3);
}

#[test]
fn release_frees_the_allocation_and_keeps_the_value() {
    let (p, _) = measure(|| Owned::new(77_i64));
    let (value, delta) = measure(move || Owned::release(p));
    assert_eq!(value, 77);
    assert_eq!(delta.deallocations, 1);
}

#[test]
fn raw_round_trip_is_balanced() {
    let ((), delta) = measure(|| {
        let raw = Box::into_raw(Box::new(String::new()));
        // SAFETY: `raw` is a fresh allocation that nothing else owns.
        let p = unsafe { Owned::from_raw(raw) };
        let raw = Owned::into_raw(p);
        // SAFETY: `raw` was just given up by `into_raw`.
        drop(unsafe { Owned::from_raw(raw) });
    });
    assert_eq!(delta.allocations, 1);
    assert_eq!(delta.deallocations, 1);
}

#[test]
fn empty_option_releases_nothing_twice() {
    let (mut slot, _) = measure(|| Some(Owned::new(5_u8)));
    let ((), delta) = measure(|| {
        drop(slot.take());
        drop(slot.take());
    });
    assert_eq!(delta.deallocations, 1);
    assert!(slot.is_none());
}
