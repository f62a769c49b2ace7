//! Row selections over a generator table or matrix.
//!
//! A selection is either [`RowSelection::All`], the identity selection that
//! keeps full length and order, or an explicit ordered list of row positions.
//! Explicit lists may be empty, unsorted, non-contiguous and may repeat rows.

use crate::error::{GenTableError, GenTableResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowSelection<'a> {
    /// Every row `0..n` in order.
    #[default]
    All,
    /// The listed row positions, in the order given.
    Rows(&'a [usize]),
}

impl<'a> RowSelection<'a> {
    #[inline]
    pub fn rows(rows: &'a [usize]) -> Self {
        RowSelection::Rows(rows)
    }

    #[inline]
    pub fn is_all(&self) -> bool {
        matches!(self, RowSelection::All)
    }

    /// Number of selected rows out of `n` available.
    pub fn len(&self, n: usize) -> usize {
        match self {
            RowSelection::All => n,
            RowSelection::Rows(rows) => rows.len(),
        }
    }

    /// Row positions the selection resolves to over `n` rows.
    pub fn positions(&self, n: usize) -> Positions<'a> {
        match *self {
            RowSelection::All => Positions::All(0..n),
            RowSelection::Rows(rows) => Positions::Rows(rows.iter()),
        }
    }

    /// First selected position that does not fit in `len` rows, if any.
    pub fn first_out_of_range(&self, len: usize) -> Option<usize> {
        match self {
            RowSelection::All => None,
            RowSelection::Rows(rows) => rows.iter().copied().find(|&row| row >= len),
        }
    }

    /// Fails with [`GenTableError::IndexOutOfRange`] unless every selected
    /// position lies in `[0, len)`.
    pub fn check_bounds(&self, len: usize) -> GenTableResult<()> {
        match self.first_out_of_range(len) {
            Some(index) => Err(GenTableError::IndexOutOfRange { index, len }),
            None => Ok(()),
        }
    }
}

impl<'a> From<&'a [usize]> for RowSelection<'a> {
    fn from(rows: &'a [usize]) -> Self {
        RowSelection::Rows(rows)
    }
}

impl<'a> From<&'a Vec<usize>> for RowSelection<'a> {
    fn from(rows: &'a Vec<usize>) -> Self {
        RowSelection::Rows(rows.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [usize; N]> for RowSelection<'a> {
    fn from(rows: &'a [usize; N]) -> Self {
        RowSelection::Rows(rows.as_slice())
    }
}

/// Iterator over the row positions of a [`RowSelection`].
#[derive(Debug, Clone)]
pub enum Positions<'a> {
    All(std::ops::Range<usize>),
    Rows(std::slice::Iter<'a, usize>),
}

impl Iterator for Positions<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        match self {
            Positions::All(range) => range.next(),
            Positions::Rows(iter) => iter.next().copied(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Positions::All(range) => range.size_hint(),
            Positions::Rows(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Positions<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_resolves_to_identity() {
        let sel = RowSelection::All;
        assert_eq!(sel.positions(4).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(sel.len(4), 4);
        assert!(sel.check_bounds(0).is_ok());
    }

    #[test]
    fn explicit_rows_keep_order_and_repeats() {
        let rows = [2, 0, 2];
        let sel = RowSelection::from(&rows);
        assert_eq!(sel.positions(3).collect::<Vec<_>>(), vec![2, 0, 2]);
        assert_eq!(sel.len(100), 3);
    }

    #[test]
    fn empty_selection_is_valid() {
        let rows: Vec<usize> = Vec::new();
        let sel = RowSelection::from(&rows);
        assert_eq!(sel.positions(3).count(), 0);
        assert!(sel.check_bounds(0).is_ok());
    }

    #[test]
    fn bounds_report_first_offender() {
        let rows = [1, 5, 7];
        let err = RowSelection::from(&rows).check_bounds(3).unwrap_err();
        assert_eq!(err, GenTableError::IndexOutOfRange { index: 5, len: 3 });
    }
}
