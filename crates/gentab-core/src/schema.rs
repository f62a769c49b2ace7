//! MATPOWER `gen` matrix column layout.
//!
//! Every generator attribute lives at a fixed 0-based column offset. The first
//! [`BASE_COLUMNS`] columns are always present; the trailing Kuhn-Tucker
//! multiplier block is only present once an OPF solve has filled it in, so a
//! matrix is either [`BASE_COLUMNS`] wide ("unsolved") or at least
//! [`ALL_COLUMNS`] wide ("solved").
//!
//! ```
//! use gentab_core::schema::{GenColumn, ColumnKind, BASE_COLUMNS};
//!
//! assert_eq!(GenColumn::GenStatus.offset(), 7);
//! assert_eq!(GenColumn::GenStatus.kind(), ColumnKind::Integer);
//! assert_eq!(GenColumn::Apf.offset() + 1, BASE_COLUMNS);
//! ```

use serde::{Deserialize, Serialize};

/// Number of columns every generator matrix must carry (`GEN_BUS..=APF`).
pub const BASE_COLUMNS: usize = 21;

/// Number of columns including the optional multiplier block (`..=MU_QMIN`).
pub const ALL_COLUMNS: usize = 25;

/// Number of Kuhn-Tucker multiplier columns.
pub const MULTIPLIER_COLUMNS: usize = ALL_COLUMNS - BASE_COLUMNS;

/// How a column is stored in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Read from the matrix as `f64` and truncated toward zero.
    Integer,
    /// Plain `f64` base column.
    Real,
    /// Optional OPF output column.
    Multiplier,
}

/// A named column of the generator matrix.
///
/// The discriminant is the column offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(usize)]
pub enum GenColumn {
    /// Bus number
    GenBus = 0,
    /// Real power output (MW)
    Pg = 1,
    /// Reactive power output (MVAr)
    Qg = 2,
    /// Maximum reactive power output at Pmin (MVAr)
    Qmax = 3,
    /// Minimum reactive power output at Pmin (MVAr)
    Qmin = 4,
    /// Voltage magnitude setpoint (p.u.)
    Vg = 5,
    /// Total MVA base of the machine
    Mbase = 6,
    /// 1 = in service, 0 = out of service
    GenStatus = 7,
    /// Maximum real power output (MW)
    Pmax = 8,
    /// Minimum real power output (MW)
    Pmin = 9,
    /// Lower real power output of the PQ capability curve (MW)
    Pc1 = 10,
    /// Upper real power output of the PQ capability curve (MW)
    Pc2 = 11,
    /// Minimum reactive power output at Pc1 (MVAr)
    Qc1min = 12,
    /// Maximum reactive power output at Pc1 (MVAr)
    Qc1max = 13,
    /// Minimum reactive power output at Pc2 (MVAr)
    Qc2min = 14,
    /// Maximum reactive power output at Pc2 (MVAr)
    Qc2max = 15,
    /// Ramp rate for load following/AGC (MW/min)
    RampAgc = 16,
    /// Ramp rate for 10 minute reserves (MW)
    #[serde(rename = "RAMP_10")]
    Ramp10 = 17,
    /// Ramp rate for 30 minute reserves (MW)
    #[serde(rename = "RAMP_30")]
    Ramp30 = 18,
    /// Ramp rate for reactive power, 2 sec timescale (MVAr/min)
    RampQ = 19,
    /// Area participation factor
    Apf = 20,
    /// Kuhn-Tucker multiplier on upper Pg limit (u/MW)
    MuPmax = 21,
    /// Kuhn-Tucker multiplier on lower Pg limit (u/MW)
    MuPmin = 22,
    /// Kuhn-Tucker multiplier on upper Qg limit (u/MVAr)
    MuQmax = 23,
    /// Kuhn-Tucker multiplier on lower Qg limit (u/MVAr)
    MuQmin = 24,
}

impl GenColumn {
    /// Every column in matrix order.
    pub const ALL: [GenColumn; ALL_COLUMNS] = [
        GenColumn::GenBus,
        GenColumn::Pg,
        GenColumn::Qg,
        GenColumn::Qmax,
        GenColumn::Qmin,
        GenColumn::Vg,
        GenColumn::Mbase,
        GenColumn::GenStatus,
        GenColumn::Pmax,
        GenColumn::Pmin,
        GenColumn::Pc1,
        GenColumn::Pc2,
        GenColumn::Qc1min,
        GenColumn::Qc1max,
        GenColumn::Qc2min,
        GenColumn::Qc2max,
        GenColumn::RampAgc,
        GenColumn::Ramp10,
        GenColumn::Ramp30,
        GenColumn::RampQ,
        GenColumn::Apf,
        GenColumn::MuPmax,
        GenColumn::MuPmin,
        GenColumn::MuQmax,
        GenColumn::MuQmin,
    ];

    /// Always-present columns in matrix order.
    pub fn base() -> &'static [GenColumn] {
        &Self::ALL[..BASE_COLUMNS]
    }

    /// Optional multiplier columns in matrix order.
    pub fn multipliers() -> &'static [GenColumn] {
        &Self::ALL[BASE_COLUMNS..]
    }

    #[inline]
    pub const fn offset(self) -> usize {
        self as usize
    }

    /// Look up a column by its matrix offset.
    pub fn from_offset(offset: usize) -> Option<GenColumn> {
        Self::ALL.get(offset).copied()
    }

    pub const fn kind(self) -> ColumnKind {
        match self {
            GenColumn::GenBus | GenColumn::GenStatus => ColumnKind::Integer,
            GenColumn::MuPmax | GenColumn::MuPmin | GenColumn::MuQmax | GenColumn::MuQmin => {
                ColumnKind::Multiplier
            }
            _ => ColumnKind::Real,
        }
    }

    #[inline]
    pub const fn is_multiplier(self) -> bool {
        matches!(self.kind(), ColumnKind::Multiplier)
    }

    /// MATPOWER index constant name (e.g. `"GEN_STATUS"`).
    pub const fn name(self) -> &'static str {
        match self {
            GenColumn::GenBus => "GEN_BUS",
            GenColumn::Pg => "PG",
            GenColumn::Qg => "QG",
            GenColumn::Qmax => "QMAX",
            GenColumn::Qmin => "QMIN",
            GenColumn::Vg => "VG",
            GenColumn::Mbase => "MBASE",
            GenColumn::GenStatus => "GEN_STATUS",
            GenColumn::Pmax => "PMAX",
            GenColumn::Pmin => "PMIN",
            GenColumn::Pc1 => "PC1",
            GenColumn::Pc2 => "PC2",
            GenColumn::Qc1min => "QC1MIN",
            GenColumn::Qc1max => "QC1MAX",
            GenColumn::Qc2min => "QC2MIN",
            GenColumn::Qc2max => "QC2MAX",
            GenColumn::RampAgc => "RAMP_AGC",
            GenColumn::Ramp10 => "RAMP_10",
            GenColumn::Ramp30 => "RAMP_30",
            GenColumn::RampQ => "RAMP_Q",
            GenColumn::Apf => "APF",
            GenColumn::MuPmax => "MU_PMAX",
            GenColumn::MuPmin => "MU_PMIN",
            GenColumn::MuQmax => "MU_QMAX",
            GenColumn::MuQmin => "MU_QMIN",
        }
    }

    /// Unit label, empty for dimensionless columns.
    pub const fn unit(self) -> &'static str {
        match self {
            GenColumn::GenBus | GenColumn::GenStatus | GenColumn::Apf => "",
            GenColumn::Pg
            | GenColumn::Pmax
            | GenColumn::Pmin
            | GenColumn::Pc1
            | GenColumn::Pc2
            | GenColumn::Ramp10
            | GenColumn::Ramp30 => "MW",
            GenColumn::Qg
            | GenColumn::Qmax
            | GenColumn::Qmin
            | GenColumn::Qc1min
            | GenColumn::Qc1max
            | GenColumn::Qc2min
            | GenColumn::Qc2max => "MVAr",
            GenColumn::Vg => "p.u.",
            GenColumn::Mbase => "MVA",
            GenColumn::RampAgc => "MW/min",
            GenColumn::RampQ => "MVAr/min",
            GenColumn::MuPmax | GenColumn::MuPmin => "u/MW",
            GenColumn::MuQmax | GenColumn::MuQmin => "u/MVAr",
        }
    }
}

impl std::fmt::Display for GenColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a matrix of the given width carries the multiplier block.
///
/// `None` means the width is invalid: narrower than the base schema, or a
/// partial multiplier block.
pub fn carries_multipliers(ncols: usize) -> Option<bool> {
    match ncols {
        n if n < BASE_COLUMNS => None,
        BASE_COLUMNS => Some(false),
        n if n < ALL_COLUMNS => None,
        _ => Some(true),
    }
}
