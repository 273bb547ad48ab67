//! Mixed-type row ordering
//!
//! Each pair of cells independently picks numeric or text comparison: if
//! both sides are numeric they compare as numbers, otherwise as their
//! printable text. A column mixing numbers and words is therefore not
//! transitively ordered: `9 < 10` numerically, yet `"10" < "1a"` and
//! `"1a" < "9"` as text. The per-pair fallback is kept as is.
//!
//! Ties are never broken here. [`RowComparator::sort_rows`] keeps equal keys
//! in ingestion order.
//!
//! `slice::sort_by` may panic on a comparator that is not a total order, so
//! it is only used when every key is numeric or every key is text. Those
//! columns compare by a single rule and are totally ordered. Mixed columns
//! go through an insertion sort that never assumes transitivity.

use crate::data::coercion::{is_numeric, to_comparable, to_number};
use crate::types::{DataRow, RawValue};
use std::cmp::Ordering;

/// Compares rows by the cell in one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowComparator {
    column: usize,
}

impl RowComparator {
    pub fn new(column: usize) -> Self {
        Self { column }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn compare(&self, a: &DataRow, b: &DataRow) -> Ordering {
        compare_values(a.cell(self.column), b.cell(self.column))
    }

    /// Stable ascending sort of `rows` by this column.
    pub fn sort_rows(&self, rows: &mut [&DataRow]) {
        let mut numeric = rows.iter().map(|row| is_numeric(row.cell(self.column)));
        let homogeneous = match numeric.next() {
            Some(first) => numeric.all(|n| n == first),
            None => true,
        };

        if homogeneous {
            rows.sort_by(|a, b| self.compare(a, b));
        } else {
            self.insertion_sort(rows);
        }
    }

    /// Each row moves left only past rows strictly greater than it, so a row
    /// never overtakes an earlier row it compares equal to.
    fn insertion_sort(&self, rows: &mut [&DataRow]) {
        for i in 1..rows.len() {
            let mut j = i;
            while j > 0 && self.compare(rows[j - 1], rows[j]) == Ordering::Greater {
                rows.swap(j - 1, j);
                j -= 1;
            }
        }
    }
}

/// Order two raw values using the per-pair numeric-or-text policy.
pub fn compare_values(a: &RawValue, b: &RawValue) -> Ordering {
    if is_numeric(a) && is_numeric(b) {
        // Both finite, so partial_cmp only fails on a raw NaN number
        return to_number(a)
            .partial_cmp(&to_number(b))
            .unwrap_or(Ordering::Equal);
    }
    // Locale-neutral: plain code point order
    to_comparable(a).cmp(&to_comparable(b))
}
