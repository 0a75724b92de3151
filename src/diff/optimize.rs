// SPDX-License-Identifier: MIT

use super::data::DiffData;

/// Slide runs of modified elements towards the end of the sequence where
/// that does not change the result.
///
/// If a run of modified elements starts with the same content as the element
/// that follows it, then marking the following element instead describes the
/// same edit. Doing so repeatedly tends to put hunk boundaries where a reader
/// expects them, e.g. an inserted function is reported from its first line
/// rather than from the closing brace of the previous one.
///
/// Running the pass again on its own output changes nothing.
pub(super) fn optimize(data: &mut DiffData) {
    let len = data.len();
    let mut start = 0;

    while start < len {
        while start < len && !data.modified[start] {
            start += 1;
        }

        let mut end = start;
        while end < len && data.modified[end] {
            end += 1;
        }

        if end < len && data.data[start] == data.data[end] {
            data.modified[start] = false;
            data.modified[end] = true;
        } else {
            start = end;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn with_flags(data: &[u32], modified: &[bool]) -> DiffData {
        let mut result = DiffData::new(data.to_vec());
        result.modified[..modified.len()].copy_from_slice(modified);
        result
    }

    fn flags(data: &DiffData) -> Vec<bool> {
        data.modified[..data.len()].to_vec()
    }

    #[test]
    fn test_shift_once() {
        // "x [a] a y" becomes "x a [a] y".
        let mut data = with_flags(&[9, 1, 1, 8], &[false, true, false, false]);
        optimize(&mut data);
        assert_eq!(flags(&data), vec![false, false, true, false]);
    }

    #[test]
    fn test_slide_run() {
        // "1 [2 1] 2 3" becomes "1 2 [1 2] 3".
        let mut data = with_flags(&[1, 2, 1, 2, 3], &[false, true, true, false, false]);
        optimize(&mut data);
        assert_eq!(flags(&data), vec![false, false, true, true, false]);
    }

    #[test]
    fn test_no_shift() {
        let mut data = with_flags(&[1, 2, 3], &[true, false, false]);
        optimize(&mut data);
        assert_eq!(flags(&data), vec![true, false, false]);

        // A run at the very end has nowhere to go.
        let mut data = with_flags(&[1, 1], &[false, true]);
        optimize(&mut data);
        assert_eq!(flags(&data), vec![false, true]);
    }

    #[test]
    fn test_idempotent() {
        let mut data = with_flags(
            &[1, 1, 1, 2, 3, 3, 4, 3],
            &[true, false, false, false, true, false, false, true],
        );
        optimize(&mut data);
        let once = flags(&data);
        optimize(&mut data);
        assert_eq!(flags(&data), once);
        assert_eq!(data.num_unmodified(), 5);
    }
}
