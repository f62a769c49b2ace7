//! # gentab-core: generator matrix contracts
//!
//! The pieces the generator table consumes from the rest of a power-flow
//! toolkit:
//!
//! - [`schema`] - MATPOWER `gen` column offsets ([`GenColumn`]) and widths
//! - [`matrix`] - the [`GenMatrix`] adapter over `faer` and row-major data
//! - [`selection`] - [`RowSelection`], "all rows" or an explicit row list
//! - [`error`] - [`GenTableError`] and [`GenTableResult`]
//! - [`units`] - unit newtypes for typed generator rows
//!
//! The table itself lives in the `gentab` crate.

pub mod error;
pub mod matrix;
pub mod schema;
pub mod selection;
pub mod units;

pub use error::{GenTableError, GenTableResult};
pub use matrix::GenMatrix;
pub use schema::{
    carries_multipliers, ColumnKind, GenColumn, ALL_COLUMNS, BASE_COLUMNS, MULTIPLIER_COLUMNS,
};
pub use selection::{Positions, RowSelection};
pub use units::{Megavars, MegavoltAmperes, Megawatts, PerUnit};
