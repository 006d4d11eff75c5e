//! Assembly backend: volatile accesses plus architecture fence instructions.
//!
//! "Once" accesses are volatile loads and stores, which the compiler may not
//! elide, reorder, cache, or split. Cross-CPU ordering comes from the fence
//! table below: one entry per supported architecture, each naming the exact
//! instruction sequence for the full, load-only, and store-only barriers and
//! for the release/acquire halves of the handoff pair.

use core::cell::UnsafeCell;

use crate::scalar::Scalar;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
compile_error!(
    "the inline-asm backend has no fence table entry for this architecture; \
     use the default atomic backend instead"
);

/// x86-64 entry. Loads are not reordered with older loads, and stores are not
/// reordered with older stores, so the one-directional barriers and the
/// handoff halves only need the compiler restrained. The full barrier must
/// still drain the store buffer before later loads.
#[cfg(target_arch = "x86_64")]
mod fences {
    use core::sync::atomic::{compiler_fence, Ordering};

    #[inline(always)]
    pub(super) fn full() {
        // SAFETY: a lone MFENCE; no registers, stack, or flags touched.
        unsafe { core::arch::asm!("mfence", options(nostack, preserves_flags)) }
    }

    #[inline(always)]
    pub(super) fn load() {
        compiler_fence(Ordering::SeqCst);
    }

    #[inline(always)]
    pub(super) fn store() {
        compiler_fence(Ordering::SeqCst);
    }

    /// Ordering in front of a publishing store.
    #[inline(always)]
    pub(super) fn release() {
        compiler_fence(Ordering::SeqCst);
    }

    /// Ordering behind an observing load.
    #[inline(always)]
    pub(super) fn acquire() {
        compiler_fence(Ordering::SeqCst);
    }
}

/// AArch64 entry. The memory model is weak, so every barrier is a real DMB.
/// `ISHLD` orders prior loads against later loads and stores; a release needs
/// prior loads *and* stores ordered before the publishing store, which only
/// the full `ISH` provides (`ISHST` covers stores alone).
#[cfg(target_arch = "aarch64")]
mod fences {
    #[inline(always)]
    pub(super) fn full() {
        // SAFETY: a lone DMB; no registers, stack, or flags touched.
        unsafe { core::arch::asm!("dmb ish", options(nostack, preserves_flags)) }
    }

    #[inline(always)]
    pub(super) fn load() {
        // SAFETY: as above.
        unsafe { core::arch::asm!("dmb ishld", options(nostack, preserves_flags)) }
    }

    #[inline(always)]
    pub(super) fn store() {
        // SAFETY: as above.
        unsafe { core::arch::asm!("dmb ishst", options(nostack, preserves_flags)) }
    }

    #[inline(always)]
    pub(super) fn release() {
        full();
    }

    #[inline(always)]
    pub(super) fn acquire() {
        load();
    }
}

#[repr(transparent)]
pub(crate) struct Cell<T: Scalar> {
    value: UnsafeCell<T>,
}

// SAFETY: every shared access goes through whole-value volatile loads and
// stores paired with the fence protocol; no plain shared accessor exists.
unsafe impl<T: Scalar> Send for Cell<T> {}
unsafe impl<T: Scalar> Sync for Cell<T> {}

impl<T: Scalar> Cell<T> {
    #[inline(always)]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value: UnsafeCell::new(value),
        }
    }

    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes, aligned for `T`, and for
    /// `'a` the location must not be accessed through anything but ordering
    /// primitives.
    #[inline(always)]
    pub(crate) unsafe fn from_ptr<'a>(ptr: *mut T) -> &'a Self {
        // SAFETY: validity, alignment, and exclusivity are forwarded to the
        // caller; the cast is sound because `Cell` is `repr(transparent)`
        // over `UnsafeCell<T>`, which is `repr(transparent)` over `T`.
        unsafe { &*ptr.cast::<Self>() }
    }

    #[inline(always)]
    pub(crate) fn read_once(&self) -> T {
        // SAFETY: the pointer comes from a live cell and is valid for reads;
        // concurrent writers only use whole-value volatile stores.
        unsafe { self.value.get().read_volatile() }
    }

    #[inline(always)]
    pub(crate) fn write_once(&self, value: T) {
        // SAFETY: the pointer comes from a live cell and is valid for
        // writes; concurrent readers only use whole-value volatile loads.
        unsafe { self.value.get().write_volatile(value) }
    }

    #[inline(always)]
    pub(crate) fn release_store(&self, value: T) {
        fences::release();
        self.write_once(value);
    }

    #[inline(always)]
    pub(crate) fn acquire_load(&self) -> T {
        let value = self.read_once();
        fences::acquire();
        value
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }

    #[inline(always)]
    pub(crate) fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

#[inline(always)]
pub(crate) fn full_barrier() {
    fences::full();
}

#[inline(always)]
pub(crate) fn load_barrier() {
    fences::load();
}

#[inline(always)]
pub(crate) fn store_barrier() {
    fences::store();
}
