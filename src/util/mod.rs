#[macro_export]
macro_rules! debug {
    ($($x:tt)*) => {
        {
            #[cfg(debug_assertions)]
            {
                std::println!("{:?}", $($x)*);
            }
        }
    };
}

/// Returns true if no adjacent pair of `v` is reported as out of order by `is_greater`.
pub(crate) fn is_sorted_by_greater<T, F>(v: &[T], is_greater: &F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    v.windows(2).all(|w| !is_greater(&w[0], &w[1]))
}

/// Same as [is_sorted_by_greater], for a buffer of `size` byte elements.
pub(crate) fn is_sorted_bytes<F>(buf: &[u8], size: usize, is_greater: &F) -> bool
where
    F: Fn(&[u8], &[u8]) -> bool,
{
    if size == 0 {
        return true;
    }
    let elems = buf.chunks_exact(size);
    elems
        .clone()
        .zip(elems.skip(1))
        .all(|(a, b)| !is_greater(a, b))
}
