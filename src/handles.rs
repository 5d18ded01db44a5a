use std::ops::Deref;

use crate::Greater;

/// Sorts a sequence of handles by the elements they refer to.
///
/// Only the handles move. The referred-to elements are read by the comparator
/// and never copied, so this is the form to use for large or non-`Copy` data.
pub(crate) fn insertion_sort_handles<H, T, F>(v: &mut [H], is_greater: &F)
where
    H: Deref<Target = T>,
    T: ?Sized,
    F: Greater<T>,
{
    for i in 1..v.len() {
        let mut hole = i;
        while hole > 0 && is_greater(&*v[hole - 1], &*v[i]) {
            hole -= 1;
        }
        // shift `v[hole..i]` one place right and drop the key into `hole`
        v[hole..=i].rotate_right(1);
    }
}
