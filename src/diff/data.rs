// SPDX-License-Identifier: MIT

use super::Code;

/// One side of a comparison: the codes being compared plus the per-element
/// result flags.
///
/// `modified[i]` means element `i` is not part of the common subsequence, so
/// it is deleted when this is the old side and inserted when this is the new
/// side. The flags array carries two extra slots past the end of the data.
#[derive(Debug, Clone)]
pub(super) struct DiffData {
    pub(super) data: Vec<Code>,
    pub(super) modified: Vec<bool>,
}
impl DiffData {
    pub(super) fn new(data: Vec<Code>) -> Self {
        let modified = vec![false; data.len() + 2];
        Self { data, modified }
    }

    pub(super) fn len(&self) -> usize {
        self.data.len()
    }

    /// Number of elements that survive into the common subsequence.
    pub(super) fn num_unmodified(&self) -> usize {
        self.modified[..self.len()].iter().filter(|m| !**m).count()
    }
}
