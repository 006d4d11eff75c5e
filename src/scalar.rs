//! Scalar types eligible for ordered shared-memory cells.

use core::sync::atomic::Ordering;

#[cfg(loom)]
use loom::sync::atomic;
#[cfg(not(loom))]
use core::sync::atomic;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width scalar that can live in an [`OrderedCell`].
///
/// Sealed: implemented for the fixed-width integers and the pointer-sized
/// pair, the types whose single-instruction loads and stores the ordering
/// contracts are defined over. The 64-bit impls exist only on targets with
/// native 64-bit atomics; everything else is excluded at compile time rather
/// than degraded.
///
/// The associated items map each scalar to its native atomic counterpart and
/// are implementation detail of the default backend.
///
/// [`OrderedCell`]: crate::OrderedCell
pub trait Scalar: Copy + sealed::Sealed {
    #[doc(hidden)]
    type Atomic: Sized;

    #[doc(hidden)]
    fn atomic_new(value: Self) -> Self::Atomic;

    #[doc(hidden)]
    fn atomic_load(atomic: &Self::Atomic, order: Ordering) -> Self;

    #[doc(hidden)]
    fn atomic_store(atomic: &Self::Atomic, value: Self, order: Ordering);

    #[doc(hidden)]
    #[cfg(not(loom))]
    unsafe fn atomic_from_ptr<'a>(ptr: *mut Self) -> &'a Self::Atomic;

    #[doc(hidden)]
    #[cfg(not(loom))]
    fn atomic_get_mut(atomic: &mut Self::Atomic) -> &mut Self;

    #[doc(hidden)]
    #[cfg(not(loom))]
    fn atomic_into_inner(atomic: Self::Atomic) -> Self;
}

macro_rules! impl_scalar {
    ($($(#[$attr:meta])* $ty:ty => $atomic:ident),+ $(,)?) => {
        $(
            $(#[$attr])*
            impl sealed::Sealed for $ty {}

            $(#[$attr])*
            impl Scalar for $ty {
                type Atomic = atomic::$atomic;

                #[inline(always)]
                fn atomic_new(value: Self) -> Self::Atomic {
                    atomic::$atomic::new(value)
                }

                #[inline(always)]
                fn atomic_load(atomic: &Self::Atomic, order: Ordering) -> Self {
                    atomic.load(order)
                }

                #[inline(always)]
                fn atomic_store(atomic: &Self::Atomic, value: Self, order: Ordering) {
                    atomic.store(value, order);
                }

                #[cfg(not(loom))]
                #[inline(always)]
                unsafe fn atomic_from_ptr<'a>(ptr: *mut Self) -> &'a Self::Atomic {
                    // SAFETY: forwarded to the caller; `ptr` must be valid,
                    // aligned for the atomic type, and free of concurrent
                    // plain accesses for 'a.
                    unsafe { atomic::$atomic::from_ptr(ptr) }
                }

                #[cfg(not(loom))]
                #[inline(always)]
                fn atomic_get_mut(atomic: &mut Self::Atomic) -> &mut Self {
                    atomic.get_mut()
                }

                #[cfg(not(loom))]
                #[inline(always)]
                fn atomic_into_inner(atomic: Self::Atomic) -> Self {
                    atomic.into_inner()
                }
            }
        )+
    };
}

impl_scalar! {
    u8 => AtomicU8,
    i8 => AtomicI8,
    u16 => AtomicU16,
    i16 => AtomicI16,
    u32 => AtomicU32,
    i32 => AtomicI32,
    #[cfg(target_has_atomic = "64")]
    u64 => AtomicU64,
    #[cfg(target_has_atomic = "64")]
    i64 => AtomicI64,
    usize => AtomicUsize,
    isize => AtomicIsize,
}
