//! In-place insertion sort in three calling conventions: over a byte buffer of
//! fixed-size opaque elements, over a sequence of handles to elements stored
//! elsewhere, and over a statically typed slice.
use std::{cmp::Ordering, ops::Deref, slice};

use bytes::insertion_sort_bytes;
use handles::insertion_sort_handles;
use typed::insertion_sort;
use util::{is_sorted_by_greater, is_sorted_bytes};

mod bytes;
mod constants;
mod handles;
mod scratch;
mod typed;
mod util;

pub use constants::INLINE_SCRATCH_BYTES;

/// Ordering capability: `is_greater(a, b)` is true when `a` belongs strictly after `b`.
pub trait Greater<T: ?Sized>: Fn(&T, &T) -> bool {}
impl<T: ?Sized, F: Fn(&T, &T) -> bool> Greater<T> for F {}

/// Sorts `v` in non-descending order of `T`'s own ordering.
///
/// Stable: an element only moves past elements that compare strictly greater.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: PartialOrd,
{
    insertion_sort(v, &T::gt);
    debug_assert!(is_sorted_by_greater(v, &T::gt));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let is_greater = |a: &T, b: &T| compare(a, b) == Ordering::Greater;
    insertion_sort(v, &is_greater);
    debug_assert!(is_sorted_by_greater(v, &is_greater));
}

#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], f: F)
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    let is_greater = |a: &T, b: &T| f(a).gt(&f(b));
    insertion_sort(v, &is_greater);
    debug_assert!(is_sorted_by_greater(v, &is_greater));
}

/// Sorts `v` with a caller-supplied "belongs after" predicate.
#[inline]
pub fn sort_by_greater<T, F>(v: &mut [T], is_greater: F)
where
    F: Fn(&T, &T) -> bool,
{
    insertion_sort(v, &is_greater);
    debug_assert!(is_sorted_by_greater(v, &is_greater));
}

/// Sorts a sequence of handles (`&T`, `Box<T>`, `Rc<T>`, ...) by the elements
/// they refer to. Only the handles are reordered; `T` may be unsized.
///
/// ```
/// let records = [3, 1, 2];
/// let mut handles: Vec<&i32> = records.iter().collect();
/// insertion_sort::sort_handles(&mut handles, |a: &i32, b: &i32| a > b);
/// assert_eq!(handles, [&1, &2, &3]);
/// ```
#[inline]
pub fn sort_handles<H, T, F>(handles: &mut [H], is_greater: F)
where
    H: Deref<Target = T>,
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    insertion_sort_handles(handles, &is_greater);
    debug_assert!(is_sorted_by_greater(handles, &|a: &H, b: &H| {
        is_greater(&**a, &**b)
    }));
}

#[inline]
pub fn sort_handles_by<H, T, F>(handles: &mut [H], compare: F)
where
    H: Deref<Target = T>,
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    sort_handles(handles, |a: &T, b: &T| compare(a, b) == Ordering::Greater);
}

/// Sorts `buf` as a sequence of `buf.len() / size` elements of `size` bytes each.
///
/// `is_greater(a, b)` receives two `size`-byte elements and returns true when
/// `a` belongs strictly after `b`. A zero `size` is a no-op.
///
/// # Panics
///
/// Panics if `size` is non-zero and `buf.len()` is not a multiple of it.
///
/// ```
/// let mut buf = [5u8, 2, 4, 6, 1, 3];
/// insertion_sort::sort_bytes(&mut buf, 1, |a, b| a[0] > b[0]);
/// assert_eq!(buf, [1, 2, 3, 4, 5, 6]);
/// ```
#[inline]
pub fn sort_bytes<F>(buf: &mut [u8], size: usize, is_greater: F)
where
    F: Fn(&[u8], &[u8]) -> bool,
{
    assert!(
        size == 0 || buf.len() % size == 0,
        "buffer of {} bytes does not hold whole elements of {} bytes",
        buf.len(),
        size
    );
    insertion_sort_bytes(buf, size, &is_greater);
    debug_assert!(is_sorted_bytes(buf, size, &is_greater));
}

#[inline]
pub fn sort_bytes_by<F>(buf: &mut [u8], size: usize, compare: F)
where
    F: Fn(&[u8], &[u8]) -> Ordering,
{
    sort_bytes(buf, size, |a: &[u8], b: &[u8]| {
        compare(a, b) == Ordering::Greater
    });
}

/// Sorts `n` elements of `size` bytes starting at `base`.
///
/// Pointer-and-count form of [sort_bytes], for buffers that do not come from a
/// Rust slice. `base` may be null when `n` is zero.
///
/// # Safety
///
/// Unless `n` is zero or `size` is zero, `base` must be valid for reads and
/// writes of `n * size` bytes, and nothing else may access that memory for the
/// duration of the call.
#[inline]
pub unsafe fn sort_raw<F>(base: *mut u8, n: usize, size: usize, is_greater: F)
where
    F: Fn(&[u8], &[u8]) -> bool,
{
    if n < 2 || size == 0 {
        return;
    }
    // SAFETY: guaranteed by the caller.
    let buf = unsafe { slice::from_raw_parts_mut(base, n * size) };
    sort_bytes(buf, size, is_greater);
}
