//! # `ringfence` - memory-ordering primitives for lock-free handoff
//!
//! A tiny library of the ordering operations a producer/consumer ring buffer
//! needs to share its indices across CPUs without a lock: "once" loads and
//! stores that the compiler may not elide, reorder, cache, or split; full and
//! one-directional hardware fences; and the paired release-store /
//! acquire-load that forms the publish/observe protocol.
//!
//! ## The handoff protocol
//!
//! A release store guarantees that every load and store the writing thread
//! issued before it - including writes to unrelated shared state, such as the
//! slot an index points at - is visible to any thread that observes the
//! stored value through a matching acquire load. The update to the cell is
//! the publish signal for the payload written beforehand:
//!
//! ```
//! use std::sync::Arc;
//! use ringfence::{cpu_relax, OrderedCell};
//!
//! let payload = Arc::new(OrderedCell::new(0u64));
//! let flag = Arc::new(OrderedCell::new(0u32));
//!
//! let reader = {
//!     let (payload, flag) = (Arc::clone(&payload), Arc::clone(&flag));
//!     std::thread::spawn(move || {
//!         while flag.acquire_load() == 0 {
//!             cpu_relax();
//!         }
//!         payload.read_once()
//!     })
//! };
//!
//! payload.write_once(0xfeed);
//! flag.release_store(1);
//! assert_eq!(reader.join().unwrap(), 0xfeed);
//! ```
//!
//! The pair must be matched on both sides: a plain store where a release
//! store is required, or a plain load where an acquire load is required,
//! silently breaks the protocol with no symptom until cross-core reordering
//! strikes. The cell type therefore exposes no unordered shared accessor at
//! all.
//!
//! ## Backends
//!
//! Two implementations provide identical ordering semantics, selected at
//! compile time:
//!
//! - the default backend lowers every operation to [`core::sync::atomic`]
//!   (and to `loom`'s model-checked atomics under `--cfg loom`);
//! - the `inline-asm` feature lowers "once" accesses to volatile loads and
//!   stores and fences to a per-architecture instruction table, for
//!   freestanding targets where the native atomic model is unavailable.
//!   Architectures without a table entry fail at build time.
//!
//! Nothing here blocks, allocates, or performs I/O; every operation completes
//! in a handful of instructions.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::inline_always)]

mod backend;
pub mod cell;
pub mod fence;
pub mod hint;
pub mod scalar;

pub use cell::OrderedCell;
pub use fence::{full_barrier, load_barrier, store_barrier};
pub use hint::cpu_relax;
pub use scalar::Scalar;

// Layout claims the shared-memory constructors rely on: a cell is exactly its
// scalar, nothing more. Loom's instrumented atomics are exempt.
#[cfg(not(loom))]
const _: () = {
    use core::mem;

    assert!(mem::size_of::<OrderedCell<u8>>() == mem::size_of::<u8>());
    assert!(mem::size_of::<OrderedCell<u32>>() == mem::size_of::<u32>());
    assert!(mem::size_of::<OrderedCell<usize>>() == mem::size_of::<usize>());

    assert!(mem::align_of::<OrderedCell<u8>>() == mem::align_of::<u8>());
    assert!(mem::align_of::<OrderedCell<u32>>() == mem::align_of::<u32>());
    assert!(mem::align_of::<OrderedCell<usize>>() == mem::align_of::<usize>());
};
