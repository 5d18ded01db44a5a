use crate::constants::{INLINE_SCRATCH_BYTES, USE_INLINE_SCRATCH};

/// One-element scratch region holding the key of the byte-buffer sort.
///
/// Acquired once per sort call and reused for every outer iteration. Small
/// elements stay on the stack, larger ones get a single heap allocation.
#[derive(Debug)]
pub(crate) enum KeyScratch {
    Inline {
        buf: [u8; INLINE_SCRATCH_BYTES],
        len: usize,
    },
    Heap(Box<[u8]>),
}

impl KeyScratch {
    pub(crate) fn new(size: usize) -> Self {
        if USE_INLINE_SCRATCH && size <= INLINE_SCRATCH_BYTES {
            Self::Inline {
                buf: [0; INLINE_SCRATCH_BYTES],
                len: size,
            }
        } else {
            Self::Heap(vec![0; size].into_boxed_slice())
        }
    }

    /// Copies `elem` into the scratch region and returns the held copy.
    pub(crate) fn hold(&mut self, elem: &[u8]) -> &[u8] {
        let slot = self.as_mut_slice();
        slot.copy_from_slice(elem);
        slot
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Inline { len, .. } => *len,
            Self::Heap(buf) => buf.len(),
        }
    }

    #[allow(unused)]
    pub(crate) fn is_inline(&self) -> bool {
        matches!(self, Self::Inline { .. })
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Self::Inline { buf, len } => &mut buf[..*len],
            Self::Heap(buf) => buf,
        }
    }
}
