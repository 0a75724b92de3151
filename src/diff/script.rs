// SPDX-License-Identifier: MIT

use super::data::DiffData;
use super::Item;

/// Scan the modified flags of both sides in lockstep and collect the edit
/// script in forward order.
pub(super) fn create_diffs(a: &DiffData, b: &DiffData) -> Vec<Item> {
    debug_assert_eq!(a.num_unmodified(), b.num_unmodified());

    let mut items = Vec::new();
    let mut line_a = 0;
    let mut line_b = 0;

    while line_a < a.len() || line_b < b.len() {
        if line_a < a.len() && !a.modified[line_a] && line_b < b.len() && !b.modified[line_b] {
            // Equal lines.
            line_a += 1;
            line_b += 1;
            continue;
        }

        let start_a = line_a;
        let start_b = line_b;

        while line_a < a.len() && (line_b >= b.len() || a.modified[line_a]) {
            line_a += 1;
        }
        while line_b < b.len() && (line_a >= a.len() || b.modified[line_b]) {
            line_b += 1;
        }

        if start_a < line_a || start_b < line_b {
            items.push(Item {
                start_a,
                start_b,
                deleted_a: line_a - start_a,
                inserted_b: line_b - start_b,
            });
        }
    }

    items
}
