// SPDX-License-Identifier: MIT

//! Conversion of text into sequences of comparable codes.
//!
//! Lines are interned in a [`CodeTable`]. Both sides of one comparison must
//! be tokenized through the same table so that equal lines get equal codes.

use std::borrow::Cow;
use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use super::{Code, DiffOptions};

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Split text into lines.
///
/// Carriage returns are dropped everywhere and only `\n` separates lines, so
/// `\r\n` and `\n` line endings compare equal. A trailing newline produces a
/// final empty line, and the empty text is a single empty line.
pub fn split_lines(text: &str) -> Vec<Cow<'_, str>> {
    text.split('\n')
        .map(|line| {
            if line.contains('\r') {
                Cow::Owned(line.replace('\r', ""))
            } else {
                Cow::Borrowed(line)
            }
        })
        .collect()
}

fn normalize<'a>(line: &'a str, options: &DiffOptions) -> Cow<'a, str> {
    let mut line = Cow::Borrowed(if options.trim_space { line.trim() } else { line });
    if options.ignore_space {
        let collapsed = match WHITESPACE_RUN.replace_all(&line, " ") {
            Cow::Owned(collapsed) => Some(collapsed),
            Cow::Borrowed(_) => None,
        };
        if let Some(collapsed) = collapsed {
            line = Cow::Owned(collapsed);
        }
    }
    if options.ignore_case {
        line = Cow::Owned(line.to_lowercase());
    }
    line
}

/// Interning table that assigns a code to every distinct (normalized) line.
///
/// Codes are handed out on first sight, counting up from 1.
#[derive(Debug, Default)]
pub struct CodeTable {
    codes: HashMap<String, Code>,
}
impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Return the code of `line`, assigning a fresh one if it was never seen.
    pub fn code(&mut self, line: &str) -> Code {
        if let Some(&code) = self.codes.get(line) {
            return code;
        }

        assert!(self.codes.len() < Code::MAX as usize, "too many distinct lines");
        let code = self.codes.len() as Code + 1;
        self.codes.insert(line.to_owned(), code);
        code
    }

    /// Tokenize already-split lines, one code per line.
    pub fn line_codes<S: AsRef<str>>(&mut self, lines: &[S], options: &DiffOptions) -> Vec<Code> {
        lines
            .iter()
            .map(|line| {
                let line = normalize(line.as_ref(), options);
                self.code(&line)
            })
            .collect()
    }
}

/// Tokenize text character by character, using each character's scalar value
/// as its code.
///
/// With `ignore_case`, characters are compared by their uppercase form. A
/// character whose uppercase form is more than one character keeps its own
/// code so that positions in the result remain character indices.
pub fn char_codes(text: &str, ignore_case: bool) -> Vec<Code> {
    text.chars()
        .map(|ch| {
            let ch = if ignore_case { upper_single(ch) } else { ch };
            ch as Code
        })
        .collect()
}

fn upper_single(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}
