//! Model-checked ordering tests, run with:
//!
//! ```sh
//! RUSTFLAGS="--cfg loom" cargo test --test loom_handoff --release
//! ```
//!
//! Loom explores every interleaving (and every stale value a relaxed load may
//! legally return) that its memory model allows, so these exercise exactly
//! the reorderings the stress tests can only hope to hit.
#![cfg(loom)]

use loom::sync::Arc;
use loom::thread;

use ringfence::{full_barrier, OrderedCell};

/// Everything written before a release store is visible after the matching
/// acquire load observes the stored value.
#[test]
fn release_acquire_publishes_payload() {
    loom::model(|| {
        let payload = Arc::new(OrderedCell::new(0u64));
        let flag = Arc::new(OrderedCell::new(0u32));

        let reader = {
            let (payload, flag) = (Arc::clone(&payload), Arc::clone(&flag));
            thread::spawn(move || (flag.acquire_load(), payload.read_once()))
        };

        payload.write_once(0xfeed);
        flag.release_store(1);

        let (flag_seen, payload_seen) = reader.join().unwrap();
        if flag_seen == 1 {
            assert_eq!(payload_seen, 0xfeed);
        }
    });
}

/// The pairing rule is load-bearing: publishing with a plain once-store
/// instead of a release store lets the reader observe the flag without the
/// payload, and loom finds that execution.
#[test]
#[should_panic(expected = "left == right")]
fn relaxed_publish_is_observably_broken() {
    loom::model(|| {
        let payload = Arc::new(OrderedCell::new(0u64));
        let flag = Arc::new(OrderedCell::new(0u32));

        let reader = {
            let (payload, flag) = (Arc::clone(&payload), Arc::clone(&flag));
            thread::spawn(move || (flag.read_once(), payload.read_once()))
        };

        payload.write_once(0xfeed);
        flag.write_once(1); // missing release

        let (flag_seen, payload_seen) = reader.join().unwrap();
        if flag_seen == 1 {
            assert_eq!(payload_seen, 0xfeed);
        }
    });
}

/// Store-buffering litmus: with a full barrier between each thread's store
/// and its read of the other thread's cell, at least one thread must observe
/// the other's store.
#[test]
fn full_barrier_forbids_store_buffering() {
    loom::model(|| {
        let x = Arc::new(OrderedCell::new(0u32));
        let y = Arc::new(OrderedCell::new(0u32));

        let other = {
            let (x, y) = (Arc::clone(&x), Arc::clone(&y));
            thread::spawn(move || {
                x.write_once(1);
                full_barrier();
                y.read_once()
            })
        };

        y.write_once(1);
        full_barrier();
        let saw_y_store = x.read_once();

        let saw_x_store = other.join().unwrap();
        assert!(
            saw_x_store == 1 || saw_y_store == 1,
            "both threads read 0 across a full barrier"
        );
    });
}

/// Concurrent once-stores are indivisible: a reader sees one of the written
/// values, never a mixture.
#[test]
fn write_once_is_indivisible() {
    loom::model(|| {
        let cell = Arc::new(OrderedCell::new(0u64));

        let writer = {
            let cell = Arc::clone(&cell);
            thread::spawn(move || cell.write_once(u64::MAX))
        };

        let v = cell.read_once();
        assert!(v == 0 || v == u64::MAX, "torn read: {v:#x}");
        writer.join().unwrap();
    });
}
