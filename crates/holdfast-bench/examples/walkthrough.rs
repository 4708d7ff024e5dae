//! End-to-end walkthrough of both primitives.
//!
//! Demonstrates: own a value → write through the handle → move it → let it
//! drop; build an array → write slots → read them back → handle an
//! out-of-range index at the caller.

use holdfast_array::{ArrayConfig, ArrayError, BoundedArray};
use holdfast_owned::Owned;

#[derive(Debug, Default)]
struct Reading {
    sensor: String,
    value: f64,
}

fn main() {
    println!("=== Holdfast Walkthrough ===\n");

    // --- Single-owner handle ---
    println!("Owned<i32>");
    {
        let mut p = Owned::new(0_i32);
        *p = 100;
        println!("  value after write: {}", *p);

        let moved = p;
        println!("  value after move:  {}", *moved);

        let mut slot = Some(moved);
        if let Some(released) = slot.take() {
            println!("  released value:    {}", Owned::release(released));
        }
        println!("  slot is empty:     {}", slot.is_none());
    }

    // --- Bounded array of integers ---
    println!("\nBoundedArray<i32>, capacity 3");
    let mut ints = BoundedArray::<i32>::new(3);
    for (index, value) in [(0, 1), (1, 2), (3, 4)] {
        match ints.set(index, value) {
            Ok(()) => println!("  set [{index}] = {value}"),
            Err(err) => println!("  set [{index}] rejected: {err}"),
        }
    }
    for index in 0..=ints.capacity() {
        match ints.at(index) {
            Ok(v) => println!("  at  [{index}] -> {v}"),
            Err(ArrayError::IndexOutOfRange { index, capacity }) => {
                println!("  at  [{index}] -> out of range (capacity {capacity})")
            }
            Err(err) => println!("  at  [{index}] -> {err}"),
        }
    }

    // --- Bounded array of a two-field type ---
    println!("\nBoundedArray<Reading>, capacity from untrusted input");
    let config = ArrayConfig::new(64);
    for requested in [4, 1_000] {
        match BoundedArray::<Reading>::with_config(requested, &config) {
            Ok(mut readings) => {
                for (i, sensor) in ["north", "south"].into_iter().enumerate() {
                    let _ = readings.set(
                        i,
                        Reading {
                            sensor: sensor.to_string(),
                            value: 20.5 + i as f64,
                        },
                    );
                }
                for r in readings.iter().filter(|r| !r.sensor.is_empty()) {
                    println!("  {:<6} {:>5.1}", r.sensor, r.value);
                }
                let untouched = readings.iter().filter(|r| r.sensor.is_empty()).count();
                println!(
                    "  {untouched} of {} slots still default",
                    readings.capacity()
                );
            }
            Err(err) => println!("  capacity {requested} rejected: {err}"),
        }
    }

    // --- Handles inside an array ---
    println!("\nBoundedArray<Option<Owned<String>>>, capacity 2");
    let mut handles = BoundedArray::<Option<Owned<String>>>::new(2);
    let _ = handles.set(0, Some(Owned::new("kept".to_string())));
    for (i, h) in handles.iter().enumerate() {
        match h {
            Some(s) => println!("  [{i}] owns {:?}", s.as_str()),
            None => println!("  [{i}] empty"),
        }
    }
    drop(handles);
    println!("  array dropped: every handle released, then the storage");

    println!("\nDone.");
}
