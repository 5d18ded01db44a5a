use std::{mem, ptr};

use crate::Greater;

/// Sorts a slice using insertion sort, which is *O*(*n*^2) worst-case.
///
/// Each key is moved out of its slot by value, every greater element to its
/// left shifts one place to the right, and the key is moved into the hole.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_greater: &F)
where
    F: Greater<T>,
{
    // Sorting has no meaningful behavior on zero-sized types. Do nothing.
    if mem::size_of::<T>() == 0 {
        return;
    }
    for i in 1..v.len() {
        insert_tail(&mut v[..i + 1], is_greater);
    }
}

/// When dropped, copies from `src` into `dest`.
struct CopyOnDrop<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for CopyOnDrop<T> {
    fn drop(&mut self) {
        // SAFETY: `src` points at the key held on the stack and `dest` at the
        // hole in the slice, so the two never overlap.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}

/// Moves the last element to the left past every element greater than it.
fn insert_tail<T, F>(v: &mut [T], is_greater: &F)
where
    F: Greater<T>,
{
    let len = v.len();
    // SAFETY: every index below is in `0..len`, and `len >= 2` is checked
    // before the first access. Copies always go between distinct slots, or
    // between the stack-held key and a slot, so they never overlap.
    unsafe {
        if len >= 2 && is_greater(v.get_unchecked(len - 2), v.get_unchecked(len - 1)) {
            // Move the key onto the stack. If a comparison below panics,
            // `hole` is dropped and writes the key back, so the slice stays
            // a permutation of its input.
            let key = mem::ManuallyDrop::new(ptr::read(v.get_unchecked(len - 1)));
            let v = v.as_mut_ptr();
            let mut hole = CopyOnDrop {
                src: &*key,
                dest: v.add(len - 2),
            };
            ptr::copy_nonoverlapping(v.add(len - 2), v.add(len - 1), 1);

            for j in (0..len - 2).rev() {
                if !is_greater(&*v.add(j), &*key) {
                    break;
                }
                ptr::copy_nonoverlapping(v.add(j), v.add(j + 1), 1);
                hole.dest = v.add(j);
            }
            // `hole` gets dropped and moves the key into its final slot.
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::Cell,
        panic::{self, AssertUnwindSafe},
        rc::Rc,
    };

    use super::insertion_sort;

    #[test]
    fn integers() {
        let mut v = vec![5, 2, 4, 6, 1, 3];
        insertion_sort(&mut v, &|a: &i32, b: &i32| a > b);
        assert_eq!(v, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn strings() {
        let mut v = vec!["banana".to_string(), "apple".into(), "cherry".into()];
        insertion_sort(&mut v, &|a: &String, b: &String| a > b);
        assert_eq!(v, ["apple", "banana", "cherry"]);
    }

    #[test]
    fn stable_for_equal_keys() {
        let mut v = vec![(2, "a"), (1, "b"), (2, "c")];
        insertion_sort(&mut v, &|a: &(i32, &str), b: &(i32, &str)| a.0 > b.0);
        assert_eq!(v, [(1, "b"), (2, "a"), (2, "c")]);
    }

    #[test]
    fn empty_and_singleton() {
        let mut v: Vec<u8> = vec![];
        insertion_sort(&mut v, &|a: &u8, b: &u8| a > b);
        assert!(v.is_empty());

        let mut v = vec![42];
        insertion_sort(&mut v, &|a: &i32, b: &i32| a > b);
        assert_eq!(v, [42]);
    }

    #[test]
    fn zero_sized() {
        let mut v = vec![(); 10];
        insertion_sort(&mut v, &|_: &(), _: &()| true);
        assert_eq!(v.len(), 10);
    }

    #[test]
    fn reverse_sorted_moves_to_front() {
        let mut v: Vec<u32> = (0..64).rev().collect();
        insertion_sort(&mut v, &|a: &u32, b: &u32| a > b);
        assert_eq!(v, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn panicking_comparator_keeps_permutation() {
        let drops = Rc::new(Cell::new(0));

        #[derive(Debug)]
        struct Tracked(u32, Rc<Cell<usize>>);
        impl Drop for Tracked {
            fn drop(&mut self) {
                self.1.set(self.1.get() + 1);
            }
        }

        let mut v: Vec<Tracked> = [9, 3, 7, 1, 8, 2, 6]
            .into_iter()
            .map(|x| Tracked(x, drops.clone()))
            .collect();
        let calls = Cell::new(0);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            insertion_sort(&mut v, &|a: &Tracked, b: &Tracked| {
                calls.set(calls.get() + 1);
                if calls.get() == 6 {
                    panic!("comparator gave up");
                }
                a.0 > b.0
            });
        }));
        assert!(result.is_err());
        assert_eq!(drops.get(), 0);

        let mut values: Vec<u32> = v.iter().map(|t| t.0).collect();
        values.sort();
        assert_eq!(values, [1, 2, 3, 6, 7, 8, 9]);

        drop(v);
        assert_eq!(drops.get(), 7);
    }
}
