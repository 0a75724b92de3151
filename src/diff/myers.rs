// SPDX-License-Identifier: MIT

//! Myers' O(ND) difference algorithm ("An O(ND) Difference Algorithm and its
//! Variations", Algorithmica 1, 1986), in its linear-space divide-and-conquer
//! form.
//!
//! The edit graph of a sub-problem is the box spanned by `lower_a..upper_a` on
//! the old side and `lower_b..upper_b` on the new side. Diagonal `k` holds the
//! points with `x - y == k`. A forward search from the top-left corner and a
//! backward search from the bottom-right corner are advanced one edit at a
//! time until their frontiers overlap on some diagonal. The overlap point lies
//! on a shortest edit path, which splits the box into two smaller boxes.

use super::data::DiffData;

/// Frontier vectors of the forward ("down") and backward ("up") searches.
///
/// Each holds, per diagonal, the furthest old-side index reached so far.
/// Diagonals may be negative, so every search addresses the vectors relative
/// to an offset derived from its starting diagonal.
///
/// The vectors are scratch space sized for the whole comparison and are
/// reused by every box of one comparison.
#[derive(Debug)]
pub(super) struct SearchVectors {
    max: isize,
    down: Vec<isize>,
    up: Vec<isize>,
}
impl SearchVectors {
    pub(super) fn new(len_a: usize, len_b: usize) -> Self {
        let max = len_a + len_b + 1;
        Self {
            max: max as isize,
            down: vec![0; 2 * max + 2],
            up: vec![0; 2 * max + 2],
        }
    }
}

/// A point on a shortest edit path through a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct MiddleSnake {
    pub(super) x: usize,
    pub(super) y: usize,
}

/// Find the shortest middle snake of the box `lower_a..upper_a` x
/// `lower_b..upper_b`.
///
/// Both ranges must be non-empty for the result to be useful to the caller,
/// but any well-formed box converges.
pub(super) fn middle_snake(
    a: &DiffData,
    lower_a: usize,
    upper_a: usize,
    b: &DiffData,
    lower_b: usize,
    upper_b: usize,
    vectors: &mut SearchVectors,
) -> MiddleSnake {
    assert!(lower_a <= upper_a && upper_a <= a.len());
    assert!(lower_b <= upper_b && upper_b <= b.len());

    let data_a = &a.data;
    let data_b = &b.data;
    let (lower_a, upper_a) = (lower_a as isize, upper_a as isize);
    let (lower_b, upper_b) = (lower_b as isize, upper_b as isize);

    let max = vectors.max;
    let down = &mut vectors.down;
    let up = &mut vectors.up;

    let down_k = lower_a - lower_b;
    let up_k = upper_a - upper_b;

    let delta = (upper_a - lower_a) - (upper_b - lower_b);
    let odd_delta = (delta & 1) != 0;

    let down_offset = max - down_k;
    let up_offset = max - up_k;
    let di = |k: isize| (down_offset + k) as usize;
    let ui = |k: isize| (up_offset + k) as usize;

    let max_d = (upper_a - lower_a + upper_b - lower_b) / 2 + 1;

    down[di(down_k + 1)] = lower_a;
    up[ui(up_k - 1)] = upper_a;

    for d in 0..=max_d {
        // Extend the forward path.
        let mut k = down_k - d;
        while k <= down_k + d {
            let mut x = if k == down_k - d {
                down[di(k + 1)] // down
            } else {
                let right = down[di(k - 1)] + 1;
                if k < down_k + d && down[di(k + 1)] >= right {
                    down[di(k + 1)] // down
                } else {
                    right
                }
            };
            let mut y = x - k;

            while x < upper_a && y < upper_b && data_a[x as usize] == data_b[y as usize] {
                x += 1;
                y += 1;
            }
            down[di(k)] = x;

            if odd_delta && up_k - d < k && k < up_k + d && up[ui(k)] <= down[di(k)] {
                let x = down[di(k)];
                return MiddleSnake {
                    x: x as usize,
                    y: (x - k) as usize,
                };
            }

            k += 2;
        }

        // Extend the reverse path.
        let mut k = up_k - d;
        while k <= up_k + d {
            let mut x = if k == up_k + d {
                up[ui(k - 1)] // up
            } else {
                let left = up[ui(k + 1)] - 1;
                if k > up_k - d && up[ui(k - 1)] < left {
                    up[ui(k - 1)] // up
                } else {
                    left
                }
            };
            let mut y = x - k;

            while x > lower_a && y > lower_b && data_a[x as usize - 1] == data_b[y as usize - 1] {
                x -= 1;
                y -= 1;
            }
            up[ui(k)] = x;

            if !odd_delta && down_k - d <= k && k <= down_k + d && up[ui(k)] <= down[di(k)] {
                let x = down[di(k)];
                return MiddleSnake {
                    x: x as usize,
                    y: (x - k) as usize,
                };
            }

            k += 2;
        }
    }

    unreachable!(
        "middle snake search did not converge in box A[{}..{}] B[{}..{}]",
        lower_a, upper_a, lower_b, upper_b
    );
}

/// A sub-problem of the longest common subsequence search.
#[derive(Debug, Clone, Copy)]
struct Subproblem {
    lower_a: usize,
    upper_a: usize,
    lower_b: usize,
    upper_b: usize,
}

/// Mark the `modified` flags of `a` and `b` so that the unmarked elements form
/// a longest common subsequence of the two sequences.
///
/// Boxes are processed from an explicit stack rather than by recursion, so
/// inputs with very many change regions cannot exhaust the call stack. Boxes
/// never overlap, so the order in which they are processed does not affect
/// the result.
pub(super) fn mark_modified(a: &mut DiffData, b: &mut DiffData, vectors: &mut SearchVectors) {
    let mut stack = vec![Subproblem {
        lower_a: 0,
        upper_a: a.len(),
        lower_b: 0,
        upper_b: b.len(),
    }];

    while let Some(Subproblem {
        mut lower_a,
        mut upper_a,
        mut lower_b,
        mut upper_b,
    }) = stack.pop()
    {
        // Skip over equal elements at the start.
        while lower_a < upper_a && lower_b < upper_b && a.data[lower_a] == b.data[lower_b] {
            lower_a += 1;
            lower_b += 1;
        }

        // Skip over equal elements at the end.
        while lower_a < upper_a && lower_b < upper_b && a.data[upper_a - 1] == b.data[upper_b - 1] {
            upper_a -= 1;
            upper_b -= 1;
        }

        if lower_a == upper_a {
            // Only insertions remain.
            b.modified[lower_b..upper_b].fill(true);
        } else if lower_b == upper_b {
            // Only deletions remain.
            a.modified[lower_a..upper_a].fill(true);
        } else {
            let snake = middle_snake(a, lower_a, upper_a, b, lower_b, upper_b, vectors);

            #[cfg(feature = "debug-diff")]
            log::trace!(
                "box A[{}..{}] B[{}..{}] split at ({}, {})",
                lower_a, upper_a, lower_b, upper_b, snake.x, snake.y
            );

            // Push the tail first so that the head is processed first.
            stack.push(Subproblem {
                lower_a: snake.x,
                upper_a,
                lower_b: snake.y,
                upper_b,
            });
            stack.push(Subproblem {
                lower_a,
                upper_a: snake.x,
                lower_b,
                upper_b: snake.y,
            });
        }
    }
}
