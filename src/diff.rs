// SPDX-License-Identifier: MIT

//! Line-based difference engine.
//!
//! Texts are split into lines and every distinct line is replaced by an
//! integer [`Code`]. The two code sequences are compared with Myers' O(ND)
//! algorithm, hunk boundaries are normalized, and the result is reported as a
//! list of [`Item`]s.

use clap::Args;

mod data;
mod myers;
mod optimize;
mod script;
mod tokenize;

pub use tokenize::{char_codes, split_lines, CodeTable};

use data::DiffData;
use myers::SearchVectors;

/// Comparable stand-in for one element (usually a line) of an input.
pub type Code = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Insert,
    Delete,
    Replace,
}

/// One hunk of the edit script.
///
/// Positions are 0-based indices into the original (un-normalized) inputs.
/// `deleted_a` elements starting at `start_a` are replaced by `inserted_b`
/// elements starting at `start_b`. At least one of the counts is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub start_a: usize,
    pub start_b: usize,
    pub deleted_a: usize,
    pub inserted_b: usize,
}
impl Item {
    pub fn kind(&self) -> ItemKind {
        if self.deleted_a == 0 {
            ItemKind::Insert
        } else if self.inserted_b == 0 {
            ItemKind::Delete
        } else {
            ItemKind::Replace
        }
    }

    pub fn end_a(&self) -> usize {
        self.start_a + self.deleted_a
    }

    pub fn end_b(&self) -> usize {
        self.start_b + self.inserted_b
    }
}
impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "-{},{} +{},{}",
            self.start_a, self.deleted_a, self.start_b, self.inserted_b
        )
    }
}

/// Normalizations applied to each line before lines are compared.
///
/// Reported positions always refer to the un-normalized lines.
#[derive(Debug, Clone, Default, Args)]
pub struct DiffOptions {
    /// Ignore leading and trailing whitespace of lines
    #[clap(long)]
    pub trim_space: bool,

    /// Treat every run of whitespace as a single space
    #[clap(long)]
    pub ignore_space: bool,

    /// Compare lines case-insensitively
    #[clap(long)]
    pub ignore_case: bool,
}

/// Compare two texts line by line.
pub fn diff_text(a: &str, b: &str) -> Vec<Item> {
    diff_text_with(a, b, &DiffOptions::default())
}

/// Compare two texts line by line after normalizing each line.
///
/// See [`split_lines`] for how texts are split.
pub fn diff_text_with(a: &str, b: &str, options: &DiffOptions) -> Vec<Item> {
    diff_lines(&split_lines(a), &split_lines(b), options)
}

/// Compare two sequences of lines.
pub fn diff_lines<S: AsRef<str>>(a: &[S], b: &[S], options: &DiffOptions) -> Vec<Item> {
    // Both sides must share one table so that equal lines get equal codes.
    let mut table = CodeTable::new();
    let data_a = DiffData::new(table.line_codes(a, options));
    let data_b = DiffData::new(table.line_codes(b, options));

    run(data_a, data_b, true)
}

/// Compare two sequences of pre-computed codes.
///
/// Unlike the line-based functions, the result is the raw edit script: hunk
/// boundaries are not slid to their canonical position.
pub fn diff_int(a: &[Code], b: &[Code]) -> Vec<Item> {
    run(DiffData::new(a.to_vec()), DiffData::new(b.to_vec()), false)
}

fn run(mut a: DiffData, mut b: DiffData, optimize_hunks: bool) -> Vec<Item> {
    let mut vectors = SearchVectors::new(a.len(), b.len());
    myers::mark_modified(&mut a, &mut b, &mut vectors);

    if optimize_hunks {
        optimize::optimize(&mut a);
        optimize::optimize(&mut b);
    }

    let items = script::create_diffs(&a, &b);
    log::debug!(
        "compared {} against {} elements: {} hunk(s)",
        a.len(),
        b.len(),
        items.len()
    );
    items
}

/// Replay an edit script: copy the unchanged parts of `a` and take every
/// inserted run from `b`.
///
/// Applying the result of a diff of `a` and `b` yields `b`. Panics if `items`
/// is not ordered or does not fit the inputs.
pub fn apply<T: Clone>(a: &[T], b: &[T], items: &[Item]) -> Vec<T> {
    let mut result = Vec::with_capacity(b.len());
    let mut pos_a = 0;

    for item in items {
        assert!(item.start_a >= pos_a, "hunks are not in order");
        assert!(item.end_a() <= a.len(), "hunk is out of range");

        result.extend_from_slice(&a[pos_a..item.start_a]);
        assert_eq!(result.len(), item.start_b, "hunk does not line up with the new side");
        result.extend_from_slice(&b[item.start_b..item.end_b()]);
        pos_a = item.end_a();
    }
    result.extend_from_slice(&a[pos_a..]);

    result
}

#[cfg(test)]
mod test {
    use super::*;

    fn item(start_a: usize, start_b: usize, deleted_a: usize, inserted_b: usize) -> Item {
        Item {
            start_a,
            start_b,
            deleted_a,
            inserted_b,
        }
    }

    #[test]
    fn test_scenarios() {
        let options = DiffOptions::default();
        assert_eq!(
            diff_lines(&["a", "b", "c"], &["a", "x", "c"], &options),
            vec![item(1, 1, 1, 1)]
        );
        assert_eq!(
            diff_lines(&["a", "b"], &["a", "b", "c"], &options),
            vec![item(2, 2, 0, 1)]
        );
        assert_eq!(
            diff_lines(&["a", "b", "c"], &["a"], &options),
            vec![item(1, 1, 2, 0)]
        );

        let empty: [&str; 0] = [];
        assert_eq!(diff_lines(&empty, &["x", "y"], &options), vec![item(0, 0, 0, 2)]);
        assert_eq!(diff_lines(&["x", "y"], &empty, &options), vec![item(0, 0, 2, 0)]);
        assert!(diff_lines(&empty, &empty, &options).is_empty());
    }

    #[test]
    fn test_identity() {
        let text = "fn main() {\n    println!(\"hi\");\n}\n";
        assert!(diff_text(text, text).is_empty());
        assert!(diff_text("", "").is_empty());
        assert!(diff_int(&[3, 1, 2], &[3, 1, 2]).is_empty());
    }

    #[test]
    fn test_ignore_case() {
        let options = DiffOptions {
            ignore_case: true,
            ..Default::default()
        };
        assert!(diff_text_with("Hello", "hello", &options).is_empty());
        assert_eq!(diff_text("Hello", "hello"), vec![item(0, 0, 1, 1)]);
    }

    #[test]
    fn test_whitespace_options() {
        let a = "  one\ntwo  three\n";
        let b = "one\ntwo three\n";
        assert_eq!(diff_text(a, b), vec![item(0, 0, 2, 2)]);

        let trim = DiffOptions {
            trim_space: true,
            ..Default::default()
        };
        assert_eq!(diff_text_with(a, b, &trim), vec![item(1, 1, 1, 1)]);

        let both = DiffOptions {
            trim_space: true,
            ignore_space: true,
            ..Default::default()
        };
        assert!(diff_text_with(a, b, &both).is_empty());
    }

    #[test]
    fn test_line_endings() {
        assert!(diff_text("a\r\nb\r\n", "a\nb\n").is_empty());
        assert_eq!(diff_text("", "x"), vec![item(0, 0, 1, 1)]);
    }

    #[test]
    fn test_optimized_boundary() {
        // An inserted block ending in a copy of the preceding line is
        // reported after that line.
        let a = ["x", "}", "y"];
        let b = ["x", "}", "z", "}", "y"];
        let items = diff_lines(&a, &b, &DiffOptions::default());
        assert_eq!(items, vec![item(2, 2, 0, 2)]);
    }

    #[test]
    fn test_char_codes_diff() {
        let items = diff_int(&char_codes("kitten", false), &char_codes("sitting", false));
        let a: Vec<char> = "kitten".chars().collect();
        let b: Vec<char> = "sitting".chars().collect();
        assert_eq!(apply(&a, &b, &items), b);
        assert_eq!(items.iter().map(|i| i.deleted_a + i.inserted_b).sum::<usize>(), 5);

        assert!(diff_int(&char_codes("MiXeD", true), &char_codes("mixed", true)).is_empty());
    }

    #[test]
    fn test_item_kind_and_display() {
        assert_eq!(item(0, 0, 0, 2).kind(), ItemKind::Insert);
        assert_eq!(item(1, 1, 2, 0).kind(), ItemKind::Delete);
        assert_eq!(item(1, 1, 1, 1).kind(), ItemKind::Replace);
        assert_eq!(item(3, 4, 1, 2).to_string(), "-3,1 +4,2");
        assert_eq!(item(3, 4, 1, 2).end_a(), 4);
        assert_eq!(item(3, 4, 1, 2).end_b(), 6);
    }

    #[test]
    fn test_apply() {
        let a = ["a", "b", "c", "d"];
        let b = ["b", "x", "d", "e"];
        let items = diff_lines(&a, &b, &DiffOptions::default());
        assert_eq!(apply(&a, &b, &items), b.to_vec());
        assert_eq!(apply(&a, &a, &[]), a.to_vec());
    }

    #[test]
    #[should_panic]
    fn test_apply_rejects_misaligned_hunks() {
        apply(&["a"], &["b", "c"], &[item(0, 1, 1, 1)]);
    }
}
