//! # gentab: columnar generator table
//!
//! Holds the generator data of a power-flow case as parallel column arrays,
//! one per MATPOWER `gen` column, and keeps them synchronized with
//! schema-ordered matrices coming from parsers and solvers.
//!
//! ## Quick Start
//!
//! ```rust
//! use gentab::{GenColumn, GenTable, RowSelection, ALL_COLUMNS};
//!
//! // Three unsolved generators (21 columns)
//! let mut rows = vec![vec![0.0; 21]; 3];
//! for (i, row) in rows.iter_mut().enumerate() {
//!     row[GenColumn::GenBus.offset()] = (i + 1) as f64;
//!     row[GenColumn::Pg.offset()] = 10.0 * (i + 1) as f64;
//!     row[GenColumn::GenStatus.offset()] = 1.0;
//! }
//! let mut table = GenTable::from_matrix(&rows).unwrap();
//!
//! // An OPF result for the same generators (25 columns)
//! let solved: Vec<Vec<f64>> = rows
//!     .iter()
//!     .map(|row| {
//!         let mut row = row.clone();
//!         row.extend_from_slice(&[0.0, 0.0, 1.5, 0.0]);
//!         row
//!     })
//!     .collect();
//! table.update_from_matrix(&solved, RowSelection::All).unwrap();
//! assert_eq!(table.mu_qmax(), Some(&[1.5, 1.5, 1.5][..]));
//! assert_eq!(table.to_matrix().ncols(), ALL_COLUMNS);
//!
//! // Branch off the first and last generator for separate processing
//! let subset = table.copy(RowSelection::from(&[0, 2])).unwrap();
//! assert_eq!(subset.pg(), &[10.0, 30.0]);
//! ```
//!
//! ## Modules
//!
//! - [`table`] - [`GenTable`]: size, copy, table and matrix updates, export
//! - [`record`] - [`GenRecord`], one typed row
//! - [`diagnostics`] - opt-in consistency report
//! - [`config`] - TOML configuration
//! - [`telemetry`] - tracing subscriber setup
//!
//! Concurrency: a [`GenTable`] owns plain vectors and is `Send + Sync`.
//! Updates take `&mut self`; share a table across threads behind a lock.

pub mod config;
pub mod diagnostics;
pub mod record;
pub mod table;
pub mod telemetry;

pub use config::{DiagnosticsConfig, GentabConfig, LoggingConfig};
pub use diagnostics::{DiagnosticIssue, Diagnostics, Severity};
pub use gentab_core::*;
pub use record::{CapabilityCurve, GenRecord, KtMultipliers, RampRates};
pub use table::GenTable;
pub use telemetry::init_tracing;
