//! Line reconstruction from positioned fragments.
//!
//! 1. Drop blank fragments.
//! 2. Sort by `top` descending, treating tops within [`SAME_ROW_TOLERANCE`]
//!    as one row ordered by `left`.
//! 3. Fold each fragment into the most recent line whose top is within
//!    [`LINE_TOLERANCE`], or start a new line.
//! 4. Sort lines top-to-bottom and fragments left-to-right, then annotate
//!    each line with its dominant font.

use std::cmp::Ordering;

use super::fonts::dominant_font;
use super::types::{Fragment, Line};

/// Vertical distance (in PDF points) under which two fragments sort as one row.
pub const SAME_ROW_TOLERANCE: f64 = 2.0;

/// Vertical distance (in PDF points) under which a fragment joins a line.
pub const LINE_TOLERANCE: f64 = 3.0;

/// Group a page's fragments into ordered, font-annotated lines.
///
/// Input order is irrelevant. The returned lines are non-increasing in
/// `top`, and fragments within each line are non-decreasing in `left`.
pub fn group_lines(fragments: Vec<Fragment>) -> Vec<Line> {
    let mut sorted: Vec<Fragment> = fragments.into_iter().filter(|f| !f.is_blank()).collect();
    insertion_sort_by(&mut sorted, reading_order);

    let mut lines: Vec<Line> = Vec::new();
    for fragment in sorted {
        let joined = lines
            .iter()
            .rposition(|line| (line.top - fragment.top).abs() < LINE_TOLERANCE);

        if let Some(idx) = joined {
            let line = &mut lines[idx];
            line.left = line.left.min(fragment.left);
            line.fragments.push(fragment);
        } else {
            lines.push(Line {
                top: fragment.top,
                bottom: fragment.bottom,
                left: fragment.left,
                fragments: vec![fragment],
                font_size: 0.0,
                font_name: String::new(),
            });
        }
    }

    lines.sort_by(|a, b| b.top.total_cmp(&a.top));

    for line in &mut lines {
        line.fragments.sort_by(|a, b| a.left.total_cmp(&b.left));
        let (size, name) = dominant_font(&line.fragments);
        line.font_size = size;
        line.font_name = name;
    }

    lines
}

/// Top-down, then left-to-right within the same row.
fn reading_order(a: &Fragment, b: &Fragment) -> Ordering {
    if (a.top - b.top).abs() < SAME_ROW_TOLERANCE {
        a.left.total_cmp(&b.left)
    } else {
        b.top.total_cmp(&a.top)
    }
}

/// Stable insertion sort.
///
/// [`reading_order`] is not transitive (the row tolerance chains), which
/// `slice::sort_by` is allowed to panic on.
fn insertion_sort_by<T>(items: &mut [T], mut compare: impl FnMut(&T, &T) -> Ordering) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
