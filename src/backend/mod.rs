//! Backend selection.
//!
//! Both backends provide identical ordering semantics through different
//! mechanisms; the choice is made here at compile time, never at runtime.
//! Loom builds always take the atomic backend, since inline assembly cannot
//! be model-checked.

#[cfg(any(loom, not(feature = "inline-asm")))]
pub(crate) mod atomic;
#[cfg(any(loom, not(feature = "inline-asm")))]
pub(crate) use self::atomic as active;

#[cfg(all(feature = "inline-asm", not(loom)))]
pub(crate) mod asm;
#[cfg(all(feature = "inline-asm", not(loom)))]
pub(crate) use self::asm as active;
