/// Largest element size, in bytes, whose scratch key lives on the stack.
pub const INLINE_SCRATCH_BYTES: usize = 64;

#[cfg(feature = "heap_scratch")]
pub const USE_INLINE_SCRATCH: bool = false;
#[cfg(not(feature = "heap_scratch"))]
pub const USE_INLINE_SCRATCH: bool = true;
