//! Dense matrix adapter consumed by the generator table.
//!
//! The table never owns a matrix; it only needs the shape, element reads and
//! column extraction over a row selection. [`GenMatrix`] captures that
//! contract and is implemented for `faer` matrices and for row-major
//! `Vec<Vec<f64>>` data as produced by case-file parsers.

use faer::{Mat, MatRef};

use crate::schema::GenColumn;
use crate::selection::RowSelection;

/// Read-only view of a schema-ordered numeric matrix.
pub trait GenMatrix {
    fn nrows(&self) -> usize;

    fn ncols(&self) -> usize;

    /// Element at `(row, col)`. Callers keep both indices in bounds.
    fn get(&self, row: usize, col: usize) -> f64;

    /// Values of `column` at the selected rows, in selection order.
    fn column(&self, column: GenColumn, selection: RowSelection<'_>) -> Vec<f64> {
        let col = column.offset();
        selection
            .positions(self.nrows())
            .map(|row| self.get(row, col))
            .collect()
    }
}

impl GenMatrix for Mat<f64> {
    #[inline]
    fn nrows(&self) -> usize {
        Mat::<f64>::nrows(self)
    }

    #[inline]
    fn ncols(&self) -> usize {
        Mat::<f64>::ncols(self)
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> f64 {
        self.read(row, col)
    }
}

impl GenMatrix for MatRef<'_, f64> {
    #[inline]
    fn nrows(&self) -> usize {
        MatRef::<'_, f64>::nrows(self)
    }

    #[inline]
    fn ncols(&self) -> usize {
        MatRef::<'_, f64>::ncols(self)
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> f64 {
        self.read(row, col)
    }
}

/// Row-major rows. Ragged input is treated as being as wide as its shortest
/// row; an empty slice has no columns.
impl GenMatrix for [Vec<f64>] {
    fn nrows(&self) -> usize {
        self.len()
    }

    fn ncols(&self) -> usize {
        self.iter().map(Vec::len).min().unwrap_or(0)
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> f64 {
        self[row][col]
    }
}

impl GenMatrix for Vec<Vec<f64>> {
    fn nrows(&self) -> usize {
        self.as_slice().nrows()
    }

    fn ncols(&self) -> usize {
        self.as_slice().ncols()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> f64 {
        self[row][col]
    }
}

impl<T: GenMatrix + ?Sized> GenMatrix for &T {
    fn nrows(&self) -> usize {
        (**self).nrows()
    }

    fn ncols(&self) -> usize {
        (**self).ncols()
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        (**self).get(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::BASE_COLUMNS;

    fn sample_rows() -> Vec<Vec<f64>> {
        (0..3)
            .map(|r| (0..BASE_COLUMNS).map(|c| (r * 100 + c) as f64).collect())
            .collect()
    }

    #[test]
    fn row_major_shape_and_column() {
        let rows = sample_rows();
        assert_eq!(GenMatrix::nrows(&rows), 3);
        assert_eq!(GenMatrix::ncols(&rows), BASE_COLUMNS);
        assert_eq!(
            rows.column(GenColumn::Pg, RowSelection::All),
            vec![1.0, 101.0, 201.0]
        );
        let pick = [2, 0];
        assert_eq!(
            rows.column(GenColumn::Vg, RowSelection::from(&pick)),
            vec![205.0, 5.0]
        );
    }

    #[test]
    fn ragged_rows_use_shortest_width() {
        let mut rows = sample_rows();
        rows[1].truncate(10);
        assert_eq!(GenMatrix::ncols(&rows), 10);
        let empty: Vec<Vec<f64>> = Vec::new();
        assert_eq!(GenMatrix::ncols(&empty), 0);
    }

    #[test]
    fn faer_matches_row_major() {
        let rows = sample_rows();
        let mat = Mat::from_fn(3, BASE_COLUMNS, |i, j| rows[i][j]);
        assert_eq!(GenMatrix::nrows(&mat), 3);
        assert_eq!(GenMatrix::ncols(&mat), BASE_COLUMNS);
        assert_eq!(
            GenMatrix::column(&mat, GenColumn::Apf, RowSelection::All),
            rows.column(GenColumn::Apf, RowSelection::All)
        );
        let view = mat.as_ref();
        assert_eq!(GenMatrix::get(&view, 2, 7), 207.0);
    }
}
