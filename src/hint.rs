//! Spin-wait hint.

/// Backoff hint for polling loops.
///
/// Emits the architecture's spin-wait instruction (PAUSE on x86-64, YIELD on
/// AArch64) between [`acquire_load`] polls. Not a fence: it orders nothing
/// and exists only to keep a spinning core friendly to its hyperthread
/// sibling and the power budget.
///
/// [`acquire_load`]: crate::OrderedCell::acquire_load
#[inline(always)]
pub fn cpu_relax() {
    core::hint::spin_loop();
}
