use crate::{scratch::KeyScratch, Greater};

/// Vacated slot of the byte-buffer sort. When dropped, writes the held key
/// into element slot `pos` of `buf`.
struct Hole<'a> {
    buf: &'a mut [u8],
    key: &'a [u8],
    pos: usize,
}

impl Hole<'_> {
    fn elem(&self, index: usize) -> &[u8] {
        let size = self.key.len();
        &self.buf[index * size..(index + 1) * size]
    }

    /// Copies the element left of the hole into it, moving the hole one slot left.
    fn shift_left(&mut self) {
        let size = self.key.len();
        let prev = (self.pos - 1) * size;
        self.buf.copy_within(prev..prev + size, prev + size);
        self.pos -= 1;
    }
}

impl Drop for Hole<'_> {
    fn drop(&mut self) {
        let size = self.key.len();
        self.buf[self.pos * size..(self.pos + 1) * size].copy_from_slice(self.key);
    }
}

/// Sorts `buf`, viewed as consecutive elements of `size` bytes, with insertion sort.
///
/// The element at each position is copied into a scratch key, every greater
/// element before it shifts one slot to the right, and the key is written into
/// the vacated slot. The scratch key is acquired once for the whole call.
/// A trailing partial element, if any, is left untouched.
pub(crate) fn insertion_sort_bytes<F>(buf: &mut [u8], size: usize, is_greater: &F)
where
    F: Greater<[u8]>,
{
    if size == 0 {
        return;
    }
    let len = buf.len() / size;
    if len < 2 {
        return;
    }
    let mut scratch = KeyScratch::new(size);
    debug_assert_eq!(scratch.len(), size);

    for i in 1..len {
        let key = scratch.hold(&buf[i * size..(i + 1) * size]);
        // If a comparison panics, `hole` is dropped and writes the key back,
        // so the buffer stays a permutation of its input.
        let mut hole = Hole {
            buf: &mut *buf,
            key,
            pos: i,
        };
        while hole.pos > 0 && is_greater(hole.elem(hole.pos - 1), hole.key) {
            hole.shift_left();
        }
    }
}
