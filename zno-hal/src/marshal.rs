use std::slice;

use crate::layouts::{NativeOptional, NativeSeq};

/// Copies a host sequence into an owned native `i64` sequence.
///
/// The result never aliases `foreign`: later changes to the source are
/// not observed, and the copy outlives any borrow of it.
pub fn marshal_seq<T>(foreign: &[T]) -> Vec<i64>
where
    T: Copy + Into<i64>,
{
    let mut owned: Vec<i64> = Vec::with_capacity(foreign.len());
    owned.extend(foreign.iter().map(|&x| x.into()));
    owned
}

/// Views a `(pointer, length)` pair handed over by a C caller as a slice,
/// ready to go through [marshal_seq].
///
/// An empty sequence may come with a null pointer. `None` when a non-zero
/// length is paired with a null pointer.
///
/// # Safety
/// A non-null `ptr` must be valid for reads of `len` elements for `'a`.
pub unsafe fn borrow_raw_seq<'a>(ptr: *const i64, len: usize) -> Option<&'a [i64]> {
    if len == 0 {
        return Some(&[]);
    }
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { slice::from_raw_parts(ptr, len) })
}

/// Copies a borrowed native sequence out before its owner can go away.
pub fn copy_native_seq(view: NativeSeq<'_>) -> Vec<i64> {
    view.as_slice().to_vec()
}

/// Converts a native optional into `Option`, reading the value only when
/// the presence flag is set.
pub fn to_optional<T: Copy>(native: NativeOptional<T>) -> Option<T> {
    if native.has_value() {
        Some(unsafe { native.value_unchecked() })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widens_narrow_integers() {
        let gens: [i32; 3] = [2341, 3277, 911];
        assert_eq!(marshal_seq(&gens), vec![2341, 3277, 911]);
        let ords: [i8; 3] = [6, 4, -6];
        assert_eq!(marshal_seq(&ords), vec![6, 4, -6]);
        let mvec: [u32; 2] = [u32::MAX, 7];
        assert_eq!(marshal_seq(&mvec), vec![u32::MAX as i64, 7]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let empty: [i64; 0] = [];
        assert!(marshal_seq(&empty).is_empty());
        assert_eq!(unsafe { borrow_raw_seq(std::ptr::null(), 0) }, Some(&[][..]));
    }

    #[test]
    fn copy_does_not_track_source() {
        let mut source: Vec<i64> = vec![7, 5, 9, 13];
        let copy: Vec<i64> = marshal_seq(&source);
        source[0] = 0;
        source.push(11);
        assert_eq!(copy, vec![7, 5, 9, 13]);
    }

    #[test]
    fn raw_null_with_length_is_rejected() {
        assert_eq!(unsafe { borrow_raw_seq(std::ptr::null(), 3) }, None);
        let values: [i64; 2] = [3, 4];
        let view: &[i64] = unsafe { borrow_raw_seq(values.as_ptr(), 2) }.unwrap();
        assert_eq!(marshal_seq(view), vec![3, 4]);
    }

    #[test]
    fn native_view_is_copied() {
        let backing: Vec<i64> = vec![1, 2, 3];
        let copied: Vec<i64> = copy_native_seq(NativeSeq::from_slice(&backing));
        drop(backing);
        assert_eq!(copied, vec![1, 2, 3]);
        assert!(copy_native_seq(NativeSeq::empty()).is_empty());
    }

    #[test]
    fn optional_respects_flag() {
        assert_eq!(to_optional(NativeOptional::present(4096u32)), Some(4096));
        assert_eq!(to_optional(NativeOptional::<u32>::absent()), None);
        assert_eq!(to_optional(NativeOptional::from(Some(0u64))), Some(0));
        assert_eq!(to_optional(NativeOptional::<u64>::from(None)), None);
    }
}
