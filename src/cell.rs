//! The shared-memory cell type.

use crate::backend::active;
use crate::scalar::Scalar;

/// A shared memory location accessed only through ordered operations.
///
/// An `OrderedCell<T>` holds one fixed-width scalar, typically a ring index,
/// that two threads hand off without a lock. Every accessor carries an
/// explicit ordering contract; there is deliberately no plain shared load or
/// store, because a single unordered access to a shared location is a data
/// race.
///
/// The cell has the same size and alignment as `T` on the default backend's
/// native atomics, which is what makes [`from_ptr`](Self::from_ptr) usable on
/// externally owned memory such as a mapped ring header.
#[repr(transparent)]
pub struct OrderedCell<T: Scalar> {
    inner: active::Cell<T>,
}

impl<T: Scalar> OrderedCell<T> {
    /// Creates a cell holding `value`.
    #[inline(always)]
    pub fn new(value: T) -> Self {
        Self {
            inner: active::Cell::new(value),
        }
    }

    /// Reinterprets an externally owned location as an ordered cell.
    ///
    /// Intended for locations that are not Rust values owned by this crate's
    /// caller, such as the head/tail fields of a memory-mapped ring header
    /// shared with another process or the kernel.
    ///
    /// # Safety
    ///
    /// - `ptr` must be non-null and valid for reads and writes for the whole
    ///   of `'a`.
    /// - `ptr` must be aligned for `T`'s native atomic counterpart. That
    ///   alignment equals `T`'s except for 8-byte scalars on targets where
    ///   `u64` is under-aligned; ring headers laid out with naturally aligned
    ///   fields satisfy it.
    /// - For the whole of `'a`, the location must be accessed only through
    ///   this cell or through matching ordering primitives in other threads
    ///   or processes - never through plain loads or stores.
    #[cfg(not(loom))]
    #[inline(always)]
    pub unsafe fn from_ptr<'a>(ptr: *mut T) -> &'a Self {
        // SAFETY: obligations forwarded to the caller; the reference cast is
        // sound because `OrderedCell` is `repr(transparent)` over the backend
        // cell.
        unsafe { &*(active::Cell::from_ptr(ptr) as *const active::Cell<T>).cast::<Self>() }
    }

    /// Reads the value exactly once.
    ///
    /// The compiler may not elide, reorder past other once-accesses, cache,
    /// or split the load. No cross-thread ordering is implied beyond relaxed
    /// atomicity: the load is indivisible, nothing more. Polling a location
    /// for a value published by [`release_store`](Self::release_store)
    /// requires [`acquire_load`](Self::acquire_load) instead.
    #[inline(always)]
    pub fn read_once(&self) -> T {
        self.inner.read_once()
    }

    /// Stores `value` exactly once.
    ///
    /// The dual of [`read_once`](Self::read_once): a single indivisible
    /// store, protected from compiler misbehavior but carrying no visibility
    /// guarantee toward other cores. Publishing data written beforehand
    /// requires [`release_store`](Self::release_store).
    #[inline(always)]
    pub fn write_once(&self, value: T) {
        self.inner.write_once(value);
    }

    /// Stores `value` with release semantics.
    ///
    /// Every load and store this thread issued before the call - including
    /// writes to unrelated shared state, such as the slot a published index
    /// refers to - is visible to any thread that observes `value` (or any
    /// later value) through a matching [`acquire_load`](Self::acquire_load).
    /// Stores that had already propagated to this CPU from third parties
    /// propagate onward with it.
    #[inline(always)]
    pub fn release_store(&self, value: T) {
        self.inner.release_store(value);
    }

    /// Loads the value with acquire semantics.
    ///
    /// Every load and store this thread issues after the call is ordered
    /// after the load completes. Combined with a matching
    /// [`release_store`](Self::release_store) on the writer side, everything
    /// the writer did before publishing is visible here once the stored value
    /// is observed - the lock-free handoff this crate exists for.
    #[inline(always)]
    pub fn acquire_load(&self) -> T {
        self.inner.acquire_load()
    }

    /// Returns a plain reference to the value.
    ///
    /// Safe because `&mut self` proves no sharing: while the borrow lives, no
    /// other thread can touch the cell.
    #[cfg(not(loom))]
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut T {
        self.inner.get_mut()
    }

    /// Consumes the cell and returns the value.
    #[cfg(not(loom))]
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}
