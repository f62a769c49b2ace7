//! Columnar generator table.
//!
//! [`GenTable`] keeps one array per MATPOWER `gen` column, all of the same
//! length N. Base columns are stored in a registry indexed by
//! [`GenColumn::offset`], so copy, sync and matrix updates run one generic
//! select/assign loop over the registry instead of a hand-written block per
//! attribute. The four Kuhn-Tucker multiplier columns form a single optional
//! block: either all present or all absent.
//!
//! Every mutating operation validates its preconditions first; an error
//! leaves the table exactly as it was.
//!
//! # Example
//!
//! ```
//! use gentab::{GenTable, RowSelection, BASE_COLUMNS};
//!
//! let mut rows = vec![vec![0.0; BASE_COLUMNS]; 3];
//! for (i, row) in rows.iter_mut().enumerate() {
//!     row[0] = (i + 1) as f64; // GEN_BUS
//!     row[7] = 1.0; // GEN_STATUS
//! }
//!
//! let table = GenTable::from_matrix(&rows).unwrap();
//! assert_eq!(table.size(), 3);
//!
//! let subset = table.copy(RowSelection::from(&[2, 0])).unwrap();
//! assert_eq!(subset.gen_bus(), &[3, 1]);
//! ```

use faer::Mat;
use gentab_core::{
    carries_multipliers, ColumnKind, GenColumn, GenMatrix, GenTableError, GenTableResult,
    RowSelection, ALL_COLUMNS, BASE_COLUMNS, MULTIPLIER_COLUMNS,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Accepted matrix widths, for error messages.
const WIDTH_REQUIREMENT: &str = "21 (base) or at least 25 (with multipliers)";

/// Storage of one base column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ColumnData {
    Integer(Vec<i64>),
    Real(Vec<f64>),
}

impl ColumnData {
    fn zeros(kind: ColumnKind, len: usize) -> Self {
        match kind {
            ColumnKind::Integer => ColumnData::Integer(vec![0; len]),
            ColumnKind::Real | ColumnKind::Multiplier => ColumnData::Real(vec![0.0; len]),
        }
    }

    fn len(&self) -> usize {
        match self {
            ColumnData::Integer(values) => values.len(),
            ColumnData::Real(values) => values.len(),
        }
    }

    fn value(&self, row: usize) -> f64 {
        match self {
            ColumnData::Integer(values) => values[row] as f64,
            ColumnData::Real(values) => values[row],
        }
    }

    fn select(&self, selection: RowSelection<'_>) -> Self {
        match self {
            ColumnData::Integer(values) => ColumnData::Integer(select_rows(values, selection)),
            ColumnData::Real(values) => ColumnData::Real(select_rows(values, selection)),
        }
    }

    fn assign_from(&mut self, other: &ColumnData, selection: RowSelection<'_>) {
        match (self, other) {
            (ColumnData::Integer(dst), ColumnData::Integer(src)) => {
                assign_rows(dst, src, selection)
            }
            (ColumnData::Real(dst), ColumnData::Real(src)) => assign_rows(dst, src, selection),
            // Kinds are fixed per offset by construction.
            _ => unreachable!("column kinds diverged between tables"),
        }
    }

    /// Assigns matrix values (in selection order) to the selected rows.
    /// Integer columns truncate toward zero.
    fn assign_values(&mut self, selection: RowSelection<'_>, values: &[f64]) {
        match self {
            ColumnData::Integer(dst) => {
                let n = dst.len();
                for (row, &value) in selection.positions(n).zip(values) {
                    dst[row] = value as i64;
                }
            }
            ColumnData::Real(dst) => assign_values(dst, selection, values),
        }
    }

    /// Coerces to the storage kind the schema expects at this offset.
    fn into_kind(self, kind: ColumnKind) -> Self {
        match (self, kind) {
            (ColumnData::Real(values), ColumnKind::Integer) => {
                ColumnData::Integer(values.into_iter().map(|v| v as i64).collect())
            }
            (ColumnData::Integer(values), ColumnKind::Real | ColumnKind::Multiplier) => {
                ColumnData::Real(values.into_iter().map(|v| v as f64).collect())
            }
            (data, _) => data,
        }
    }
}

fn select_rows<T: Copy>(values: &[T], selection: RowSelection<'_>) -> Vec<T> {
    selection
        .positions(values.len())
        .map(|row| values[row])
        .collect()
}

fn assign_rows<T: Copy>(dst: &mut [T], src: &[T], selection: RowSelection<'_>) {
    let n = dst.len();
    for row in selection.positions(n) {
        dst[row] = src[row];
    }
}

fn assign_values(dst: &mut [f64], selection: RowSelection<'_>, values: &[f64]) {
    let n = dst.len();
    for (row, &value) in selection.positions(n).zip(values) {
        dst[row] = value;
    }
}

type MultiplierBlock = [Vec<f64>; MULTIPLIER_COLUMNS];

/// Generator data as parallel column arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGenTable")]
pub struct GenTable {
    base: Vec<ColumnData>,
    multipliers: Option<MultiplierBlock>,
}

/// Unchecked serialized form; validated into a [`GenTable`].
#[derive(Deserialize)]
struct RawGenTable {
    base: Vec<ColumnData>,
    multipliers: Option<MultiplierBlock>,
}

impl TryFrom<RawGenTable> for GenTable {
    type Error = GenTableError;

    fn try_from(raw: RawGenTable) -> GenTableResult<Self> {
        if raw.base.len() != BASE_COLUMNS {
            return Err(GenTableError::SchemaMismatch {
                found: raw.base.len(),
                required: "21 base columns",
            });
        }
        let base: Vec<ColumnData> = raw
            .base
            .into_iter()
            .zip(GenColumn::base())
            .map(|(data, col)| data.into_kind(col.kind()))
            .collect();

        let n = base[GenColumn::GenBus.offset()].len();
        let lengths = base
            .iter()
            .map(ColumnData::len)
            .chain(raw.multipliers.iter().flatten().map(Vec::len));
        for found in lengths {
            if found != n {
                return Err(GenTableError::LengthMismatch {
                    context: "parallel columns",
                    expected: n,
                    found,
                });
            }
        }

        Ok(GenTable {
            base,
            multipliers: raw.multipliers,
        })
    }
}

impl Default for GenTable {
    fn default() -> Self {
        Self::new()
    }
}

impl GenTable {
    /// Uninitialized table: zero rows, no multiplier block.
    pub fn new() -> Self {
        Self {
            base: GenColumn::base()
                .iter()
                .map(|col| ColumnData::zeros(col.kind(), 0))
                .collect(),
            multipliers: None,
        }
    }

    /// Builds a table holding every row of `matrix`.
    pub fn from_matrix<M: GenMatrix + ?Sized>(matrix: &M) -> GenTableResult<Self> {
        let mut table = Self::new();
        table.update_from_matrix(matrix, RowSelection::All)?;
        Ok(table)
    }

    /// Number of generators.
    pub fn size(&self) -> usize {
        self.base[GenColumn::GenBus.offset()].len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Deep copy of the selected rows, in selection order.
    ///
    /// The multiplier block is carried over only if the source has one.
    pub fn copy(&self, selection: RowSelection<'_>) -> GenTableResult<GenTable> {
        selection.check_bounds(self.size())?;

        let base = self.base.iter().map(|col| col.select(selection)).collect();
        let multipliers = self
            .multipliers
            .as_ref()
            .map(|block| std::array::from_fn(|k| select_rows(&block[k], selection)));

        let copy = GenTable { base, multipliers };
        debug!(
            source_rows = self.size(),
            copied_rows = copy.size(),
            multipliers = copy.has_multipliers(),
            "copied generator table"
        );
        Ok(copy)
    }

    /// Overwrites the selected rows with `other`'s rows at the same positions.
    ///
    /// The multiplier block is synchronized only when both tables carry one;
    /// otherwise it is skipped and the base columns are still updated.
    pub fn update_from_table(
        &mut self,
        other: &GenTable,
        selection: RowSelection<'_>,
    ) -> GenTableResult<()> {
        let n = self.size();
        match selection {
            RowSelection::All if other.size() != n => {
                return Err(GenTableError::LengthMismatch {
                    context: "table sync",
                    expected: n,
                    found: other.size(),
                });
            }
            RowSelection::All => {}
            RowSelection::Rows(_) => {
                selection.check_bounds(n)?;
                if let Some(index) = selection.first_out_of_range(other.size()) {
                    return Err(GenTableError::LengthMismatch {
                        context: "table sync",
                        expected: index + 1,
                        found: other.size(),
                    });
                }
            }
        }

        for (dst, src) in self.base.iter_mut().zip(&other.base) {
            dst.assign_from(src, selection);
        }

        match (&mut self.multipliers, &other.multipliers) {
            (Some(dst), Some(src)) => {
                for (dst, src) in dst.iter_mut().zip(src) {
                    assign_rows(dst, src, selection);
                }
            }
            (dst, src) => debug!(
                target_has = dst.is_some(),
                source_has = src.is_some(),
                "multiplier block not synchronized"
            ),
        }

        debug!(
            rows = selection.len(n),
            total = n,
            "updated generator table from table"
        );
        Ok(())
    }

    /// Overwrites the selected rows from a schema-ordered matrix.
    ///
    /// Row positions address the matrix and the table alike. `GEN_BUS` and
    /// `GEN_STATUS` are truncated toward zero. The multiplier columns are
    /// read only when the matrix is at least [`ALL_COLUMNS`] wide; a
    /// [`BASE_COLUMNS`]-wide matrix leaves an existing multiplier block
    /// untouched, stale values included.
    ///
    /// An uninitialized table is sized to the matrix by an `All` update. A
    /// table without a multiplier block gets a zero-filled one the first
    /// time a matrix carries multipliers.
    pub fn update_from_matrix<M: GenMatrix + ?Sized>(
        &mut self,
        matrix: &M,
        selection: RowSelection<'_>,
    ) -> GenTableResult<()> {
        let ncols = matrix.ncols();
        let with_multipliers =
            carries_multipliers(ncols).ok_or(GenTableError::SchemaMismatch {
                found: ncols,
                required: WIDTH_REQUIREMENT,
            })?;

        let n = self.size();
        let mrows = matrix.nrows();
        let allocate = n == 0 && selection.is_all();
        match selection {
            RowSelection::All if !allocate && mrows != n => {
                return Err(GenTableError::LengthMismatch {
                    context: "matrix rows",
                    expected: n,
                    found: mrows,
                });
            }
            RowSelection::All => {}
            RowSelection::Rows(_) => {
                selection.check_bounds(n)?;
                if let Some(index) = selection.first_out_of_range(mrows) {
                    return Err(GenTableError::LengthMismatch {
                        context: "matrix rows",
                        expected: index + 1,
                        found: mrows,
                    });
                }
            }
        }

        if allocate {
            self.resize_rows(mrows);
        }
        let n = self.size();

        for col in GenColumn::base() {
            let values = matrix.column(*col, selection);
            self.base[col.offset()].assign_values(selection, &values);
        }

        if with_multipliers {
            let block = self.multipliers.get_or_insert_with(|| {
                debug!(rows = n, "allocating multiplier block");
                std::array::from_fn(|_| vec![0.0; n])
            });
            for (dst, col) in block.iter_mut().zip(GenColumn::multipliers()) {
                let values = matrix.column(*col, selection);
                assign_values(dst, selection, &values);
            }
        } else if self.multipliers.is_some() {
            trace!(
                ncols,
                "matrix has no multiplier columns; keeping existing multiplier values"
            );
        }

        debug!(
            rows = selection.len(n),
            total = n,
            ncols,
            "updated generator table from matrix"
        );
        Ok(())
    }

    /// Zero-fills every column (and the multiplier block, if any) to `len`.
    fn resize_rows(&mut self, len: usize) {
        for (data, col) in self.base.iter_mut().zip(GenColumn::base()) {
            *data = ColumnData::zeros(col.kind(), len);
        }
        if let Some(block) = self.multipliers.as_mut() {
            for values in block.iter_mut() {
                *values = vec![0.0; len];
            }
        }
    }

    // =========================================================================
    // Column access
    // =========================================================================

    /// Bus numbers (`GEN_BUS`).
    pub fn gen_bus(&self) -> &[i64] {
        self.integer(GenColumn::GenBus)
    }

    /// In-service flags (`GEN_STATUS`).
    pub fn gen_status(&self) -> &[i64] {
        self.integer(GenColumn::GenStatus)
    }

    fn integer(&self, col: GenColumn) -> &[i64] {
        match &self.base[col.offset()] {
            ColumnData::Integer(values) => values,
            ColumnData::Real(_) => &[],
        }
    }

    /// A real-valued column. `None` for the integer columns and for
    /// multiplier columns on a table without a multiplier block.
    pub fn column(&self, col: GenColumn) -> Option<&[f64]> {
        match col.kind() {
            ColumnKind::Integer => None,
            ColumnKind::Real => match &self.base[col.offset()] {
                ColumnData::Real(values) => Some(values),
                ColumnData::Integer(_) => None,
            },
            ColumnKind::Multiplier => self
                .multipliers
                .as_ref()
                .map(|block| block[col.offset() - BASE_COLUMNS].as_slice()),
        }
    }

    /// Mutable access to a real-valued column. The slice length is fixed, so
    /// writes through it cannot break row alignment.
    pub fn column_mut(&mut self, col: GenColumn) -> Option<&mut [f64]> {
        match col.kind() {
            ColumnKind::Integer => None,
            ColumnKind::Real => match &mut self.base[col.offset()] {
                ColumnData::Real(values) => Some(values),
                ColumnData::Integer(_) => None,
            },
            ColumnKind::Multiplier => self
                .multipliers
                .as_mut()
                .map(|block| block[col.offset() - BASE_COLUMNS].as_mut_slice()),
        }
    }

    fn real(&self, col: GenColumn) -> &[f64] {
        self.column(col).unwrap_or(&[])
    }

    pub fn pg(&self) -> &[f64] {
        self.real(GenColumn::Pg)
    }

    pub fn qg(&self) -> &[f64] {
        self.real(GenColumn::Qg)
    }

    pub fn qmax(&self) -> &[f64] {
        self.real(GenColumn::Qmax)
    }

    pub fn qmin(&self) -> &[f64] {
        self.real(GenColumn::Qmin)
    }

    pub fn vg(&self) -> &[f64] {
        self.real(GenColumn::Vg)
    }

    pub fn mbase(&self) -> &[f64] {
        self.real(GenColumn::Mbase)
    }

    pub fn pmax(&self) -> &[f64] {
        self.real(GenColumn::Pmax)
    }

    pub fn pmin(&self) -> &[f64] {
        self.real(GenColumn::Pmin)
    }

    /// Whether the Kuhn-Tucker multiplier block is populated.
    pub fn has_multipliers(&self) -> bool {
        self.multipliers.is_some()
    }

    /// Multiplier on the upper Pg limit (u/MW).
    pub fn mu_pmax(&self) -> Option<&[f64]> {
        self.column(GenColumn::MuPmax)
    }

    /// Multiplier on the lower Pg limit (u/MW).
    pub fn mu_pmin(&self) -> Option<&[f64]> {
        self.column(GenColumn::MuPmin)
    }

    /// Multiplier on the upper Qg limit (u/MVAr).
    pub fn mu_qmax(&self) -> Option<&[f64]> {
        self.column(GenColumn::MuQmax)
    }

    /// Multiplier on the lower Qg limit (u/MVAr).
    pub fn mu_qmin(&self) -> Option<&[f64]> {
        self.column(GenColumn::MuQmin)
    }

    /// Drops the multiplier block. Matrix updates never do this on their own.
    pub fn clear_multipliers(&mut self) {
        if self.multipliers.take().is_some() {
            debug!(rows = self.size(), "cleared multiplier block");
        }
    }

    /// Row positions of in-service generators (`GEN_STATUS > 0`).
    pub fn in_service_rows(&self) -> Vec<usize> {
        self.gen_status()
            .iter()
            .enumerate()
            .filter(|(_, &status)| status > 0)
            .map(|(row, _)| row)
            .collect()
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Matrix width this table exports to.
    pub fn width(&self) -> usize {
        if self.has_multipliers() {
            ALL_COLUMNS
        } else {
            BASE_COLUMNS
        }
    }

    fn cell(&self, row: usize, col: usize) -> f64 {
        if col < BASE_COLUMNS {
            self.base[col].value(row)
        } else {
            self.multipliers
                .as_ref()
                .map_or(0.0, |block| block[col - BASE_COLUMNS][row])
        }
    }

    /// Values of one row in matrix column order.
    pub fn row_values(&self, row: usize) -> Option<Vec<f64>> {
        (row < self.size()).then(|| (0..self.width()).map(|col| self.cell(row, col)).collect())
    }

    /// Exports the table in schema column order.
    pub fn to_matrix(&self) -> Mat<f64> {
        Mat::from_fn(self.size(), self.width(), |row, col| self.cell(row, col))
    }

    /// Row-major export, same layout as [`GenTable::to_matrix`].
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.size())
            .map(|row| (0..self.width()).map(|col| self.cell(row, col)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen_row(bus: f64, pg: f64, status: f64) -> Vec<f64> {
        let mut row = vec![0.0; BASE_COLUMNS];
        row[GenColumn::GenBus.offset()] = bus;
        row[GenColumn::Pg.offset()] = pg;
        row[GenColumn::Vg.offset()] = 1.0;
        row[GenColumn::Mbase.offset()] = 100.0;
        row[GenColumn::GenStatus.offset()] = status;
        row[GenColumn::Pmax.offset()] = 250.0;
        row
    }

    fn solved(mut row: Vec<f64>, mu: [f64; 4]) -> Vec<f64> {
        row.extend_from_slice(&mu);
        row
    }

    fn three_gens() -> GenTable {
        GenTable::from_matrix(&vec![
            gen_row(1.0, 10.0, 1.0),
            gen_row(2.0, 20.0, 1.0),
            gen_row(3.0, 30.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn new_table_is_uninitialized() {
        let table = GenTable::new();
        assert_eq!(table.size(), 0);
        assert!(table.is_empty());
        assert!(!table.has_multipliers());
        assert_eq!(table.width(), BASE_COLUMNS);
    }

    #[test]
    fn first_full_update_allocates() {
        let table = three_gens();
        assert_eq!(table.size(), 3);
        assert_eq!(table.gen_bus(), &[1, 2, 3]);
        assert_eq!(table.pg(), &[10.0, 20.0, 30.0]);
        assert_eq!(table.gen_status(), &[1, 1, 0]);
        for col in GenColumn::base() {
            let len = table.column(*col).map_or(3, <[f64]>::len);
            assert_eq!(len, 3, "{} has wrong length", col);
        }
    }

    #[test]
    fn bus_and_status_truncate_toward_zero() {
        let table = GenTable::from_matrix(&vec![gen_row(3.9, 0.0, 0.6), gen_row(-1.7, 0.0, 1.2)])
            .unwrap();
        assert_eq!(table.gen_bus(), &[3, -1]);
        assert_eq!(table.gen_status(), &[0, 1]);
    }

    #[test]
    fn narrow_matrix_is_rejected() {
        let rows = vec![vec![0.0; BASE_COLUMNS - 1]; 2];
        let err = GenTable::from_matrix(&rows).unwrap_err();
        assert!(matches!(err, GenTableError::SchemaMismatch { found: 20, .. }));
    }

    #[test]
    fn partial_multiplier_block_is_rejected() {
        let mut table = three_gens();
        let before = table.clone();
        let rows: Vec<Vec<f64>> = (0..3)
            .map(|i| {
                let mut row = gen_row(i as f64 + 1.0, 0.0, 1.0);
                row.extend_from_slice(&[1.0, 2.0]);
                row
            })
            .collect();
        let err = table.update_from_matrix(&rows, RowSelection::All).unwrap_err();
        assert!(matches!(err, GenTableError::SchemaMismatch { found: 23, .. }));
        assert_eq!(table, before);
    }

    #[test]
    fn full_update_with_different_row_count_fails() {
        let mut table = three_gens();
        let rows = vec![gen_row(1.0, 0.0, 1.0); 2];
        let err = table.update_from_matrix(&rows, RowSelection::All).unwrap_err();
        assert_eq!(
            err,
            GenTableError::LengthMismatch {
                context: "matrix rows",
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn selected_matrix_update_touches_only_selection() {
        let mut table = three_gens();
        let rows = vec![
            gen_row(7.0, 70.0, 1.0),
            gen_row(8.0, 80.0, 1.0),
            gen_row(9.0, 90.0, 1.0),
        ];
        table
            .update_from_matrix(&rows, RowSelection::from(&[1]))
            .unwrap();
        assert_eq!(table.gen_bus(), &[1, 8, 3]);
        assert_eq!(table.pg(), &[10.0, 80.0, 30.0]);
    }

    #[test]
    fn matrix_row_beyond_selection_is_length_mismatch() {
        let mut table = three_gens();
        let rows = vec![gen_row(7.0, 70.0, 1.0); 2];
        let err = table
            .update_from_matrix(&rows, RowSelection::from(&[2]))
            .unwrap_err();
        assert!(matches!(err, GenTableError::LengthMismatch { found: 2, .. }));
    }

    #[test]
    fn multiplier_block_created_zero_filled_on_partial_update() {
        let mut table = three_gens();
        let rows = vec![
            solved(gen_row(1.0, 10.0, 1.0), [1.0, 2.0, 3.0, 4.0]),
            solved(gen_row(2.0, 20.0, 1.0), [5.0, 6.0, 7.0, 8.0]),
            solved(gen_row(3.0, 30.0, 0.0), [9.0, 9.0, 9.0, 9.0]),
        ];
        table
            .update_from_matrix(&rows, RowSelection::from(&[1]))
            .unwrap();
        assert_eq!(table.mu_pmax(), Some(&[0.0, 5.0, 0.0][..]));
        assert_eq!(table.mu_qmin(), Some(&[0.0, 8.0, 0.0][..]));
        assert_eq!(table.width(), ALL_COLUMNS);
    }

    #[test]
    fn wide_matrix_extra_columns_are_ignored() {
        let mut row = solved(gen_row(1.0, 10.0, 1.0), [1.0, 2.0, 3.0, 4.0]);
        row.extend_from_slice(&[99.0, 98.0]);
        let table = GenTable::from_matrix(&vec![row]).unwrap();
        assert_eq!(table.width(), ALL_COLUMNS);
        assert_eq!(table.mu_qmin(), Some(&[4.0][..]));
    }

    #[test]
    fn copy_of_empty_selection_keeps_shape() {
        let table = GenTable::from_matrix(&vec![solved(
            gen_row(1.0, 10.0, 1.0),
            [1.0, 2.0, 3.0, 4.0],
        )])
        .unwrap();
        let rows: Vec<usize> = Vec::new();
        let copy = table.copy(RowSelection::from(&rows)).unwrap();
        assert_eq!(copy.size(), 0);
        assert!(copy.has_multipliers());
        assert_eq!(copy.mu_pmin(), Some(&[][..]));
    }

    #[test]
    fn table_sync_skips_multipliers_when_one_side_lacks_them() {
        let mut target = three_gens();
        let source = GenTable::from_matrix(&vec![
            solved(gen_row(4.0, 40.0, 1.0), [1.0; 4]),
            solved(gen_row(5.0, 50.0, 1.0), [1.0; 4]),
            solved(gen_row(6.0, 60.0, 1.0), [1.0; 4]),
        ])
        .unwrap();
        target
            .update_from_table(&source, RowSelection::All)
            .unwrap();
        assert_eq!(target.gen_bus(), &[4, 5, 6]);
        assert!(!target.has_multipliers());
    }

    #[test]
    fn table_sync_row_beyond_other_is_length_mismatch() {
        let mut target = three_gens();
        let source = target.copy(RowSelection::from(&[0, 1])).unwrap();
        let before = target.clone();
        let err = target
            .update_from_table(&source, RowSelection::from(&[0, 2]))
            .unwrap_err();
        assert_eq!(
            err,
            GenTableError::LengthMismatch {
                context: "table sync",
                expected: 3,
                found: 2
            }
        );
        assert_eq!(target, before);
    }

    #[test]
    fn column_mut_writes_through() {
        let mut table = three_gens();
        table.column_mut(GenColumn::Qg).unwrap()[2] = -12.5;
        assert_eq!(table.qg(), &[0.0, 0.0, -12.5]);
        assert!(table.column_mut(GenColumn::GenBus).is_none());
        assert!(table.column_mut(GenColumn::MuPmax).is_none());
    }

    #[test]
    fn clear_multipliers_returns_to_base_width() {
        let mut table =
            GenTable::from_matrix(&vec![solved(gen_row(1.0, 0.0, 1.0), [1.0; 4])]).unwrap();
        assert_eq!(table.width(), ALL_COLUMNS);
        table.clear_multipliers();
        assert_eq!(table.width(), BASE_COLUMNS);
        assert_eq!(table.mu_pmax(), None);
    }

    #[test]
    fn in_service_rows_follow_status() {
        assert_eq!(three_gens().in_service_rows(), vec![0, 1]);
    }

    #[test]
    fn row_values_follow_schema_order() {
        let table = three_gens();
        assert_eq!(table.row_values(1), Some(gen_row(2.0, 20.0, 1.0)));
        assert_eq!(table.row_values(3), None);
    }

    #[test]
    fn serde_roundtrip_preserves_table() {
        let table = GenTable::from_matrix(&vec![solved(gen_row(2.0, 5.0, 1.0), [0.5; 4])]).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        let back: GenTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn deserialize_rejects_ragged_columns() {
        let table = three_gens();
        let mut value = serde_json::to_value(&table).unwrap();
        value["base"][4]["real"]
            .as_array_mut()
            .unwrap()
            .pop();
        let err = serde_json::from_value::<GenTable>(value).unwrap_err();
        assert!(err.to_string().contains("Length mismatch"));
    }
}
