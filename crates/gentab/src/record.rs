//! Typed view of a single generator row.

use gentab_core::{
    carries_multipliers, GenColumn, GenTableError, GenTableResult, Megavars, MegavoltAmperes,
    Megawatts, PerUnit, RowSelection, ALL_COLUMNS,
};
use serde::{Deserialize, Serialize};

use crate::table::GenTable;

/// PQ capability curve corner points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CapabilityCurve {
    pub pc1: Megawatts,
    pub pc2: Megawatts,
    pub qc1min: Megavars,
    pub qc1max: Megavars,
    pub qc2min: Megavars,
    pub qc2max: Megavars,
}

/// Ramp limits.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RampRates {
    /// Load following/AGC (MW/min)
    pub agc: f64,
    /// 10 minute reserves (MW)
    pub ten_minute: f64,
    /// 30 minute reserves (MW)
    pub thirty_minute: f64,
    /// Reactive power, 2 sec timescale (MVAr/min)
    pub reactive: f64,
}

/// Kuhn-Tucker multipliers from an OPF solve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KtMultipliers {
    pub mu_pmax: f64,
    pub mu_pmin: f64,
    pub mu_qmax: f64,
    pub mu_qmin: f64,
}

/// One generator, as stored in one row of a [`GenTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenRecord {
    pub bus: i64,
    pub pg: Megawatts,
    pub qg: Megavars,
    pub qmax: Megavars,
    pub qmin: Megavars,
    pub vg: PerUnit,
    pub mbase: MegavoltAmperes,
    pub status: i64,
    pub pmax: Megawatts,
    pub pmin: Megawatts,
    pub capability: CapabilityCurve,
    pub ramp: RampRates,
    /// Area participation factor
    pub apf: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multipliers: Option<KtMultipliers>,
}

impl GenRecord {
    /// In-service generator at `bus` with a 1.0 pu setpoint on a 100 MVA base.
    pub fn new(bus: i64) -> Self {
        Self {
            bus,
            pg: Megawatts(0.0),
            qg: Megavars(0.0),
            qmax: Megavars(0.0),
            qmin: Megavars(0.0),
            vg: PerUnit::ONE,
            mbase: MegavoltAmperes(100.0),
            status: 1,
            pmax: Megawatts(0.0),
            pmin: Megawatts(0.0),
            capability: CapabilityCurve::default(),
            ramp: RampRates::default(),
            apf: 0.0,
            multipliers: None,
        }
    }

    /// Set dispatch (MW, MVAr)
    pub fn with_dispatch(mut self, pg: f64, qg: f64) -> Self {
        self.pg = Megawatts(pg);
        self.qg = Megavars(qg);
        self
    }

    /// Set active power limits (in MW)
    pub fn with_p_limits(mut self, pmin: f64, pmax: f64) -> Self {
        self.pmin = Megawatts(pmin);
        self.pmax = Megawatts(pmax);
        self
    }

    /// Set reactive power limits (in MVAr)
    pub fn with_q_limits(mut self, qmin: f64, qmax: f64) -> Self {
        self.qmin = Megavars(qmin);
        self.qmax = Megavars(qmax);
        self
    }

    pub fn with_status(mut self, status: i64) -> Self {
        self.status = status;
        self
    }

    pub fn with_multipliers(mut self, multipliers: KtMultipliers) -> Self {
        self.multipliers = Some(multipliers);
        self
    }

    pub fn in_service(&self) -> bool {
        self.status > 0
    }

    /// Parses a schema-ordered matrix row. Integer fields truncate.
    pub fn from_row(row: &[f64]) -> GenTableResult<Self> {
        let with_multipliers =
            carries_multipliers(row.len()).ok_or(GenTableError::SchemaMismatch {
                found: row.len(),
                required: "21 (base) or at least 25 (with multipliers)",
            })?;
        let at = |col: GenColumn| row[col.offset()];

        Ok(Self {
            bus: at(GenColumn::GenBus) as i64,
            pg: Megawatts(at(GenColumn::Pg)),
            qg: Megavars(at(GenColumn::Qg)),
            qmax: Megavars(at(GenColumn::Qmax)),
            qmin: Megavars(at(GenColumn::Qmin)),
            vg: PerUnit(at(GenColumn::Vg)),
            mbase: MegavoltAmperes(at(GenColumn::Mbase)),
            status: at(GenColumn::GenStatus) as i64,
            pmax: Megawatts(at(GenColumn::Pmax)),
            pmin: Megawatts(at(GenColumn::Pmin)),
            capability: CapabilityCurve {
                pc1: Megawatts(at(GenColumn::Pc1)),
                pc2: Megawatts(at(GenColumn::Pc2)),
                qc1min: Megavars(at(GenColumn::Qc1min)),
                qc1max: Megavars(at(GenColumn::Qc1max)),
                qc2min: Megavars(at(GenColumn::Qc2min)),
                qc2max: Megavars(at(GenColumn::Qc2max)),
            },
            ramp: RampRates {
                agc: at(GenColumn::RampAgc),
                ten_minute: at(GenColumn::Ramp10),
                thirty_minute: at(GenColumn::Ramp30),
                reactive: at(GenColumn::RampQ),
            },
            apf: at(GenColumn::Apf),
            multipliers: with_multipliers.then(|| KtMultipliers {
                mu_pmax: at(GenColumn::MuPmax),
                mu_pmin: at(GenColumn::MuPmin),
                mu_qmax: at(GenColumn::MuQmax),
                mu_qmin: at(GenColumn::MuQmin),
            }),
        })
    }

    /// Schema-ordered row: 21 values, or 25 with multipliers.
    pub fn to_row(&self) -> Vec<f64> {
        let mut row = vec![0.0; ALL_COLUMNS];
        let mut set = |col: GenColumn, value: f64| row[col.offset()] = value;

        set(GenColumn::GenBus, self.bus as f64);
        set(GenColumn::Pg, self.pg.value());
        set(GenColumn::Qg, self.qg.value());
        set(GenColumn::Qmax, self.qmax.value());
        set(GenColumn::Qmin, self.qmin.value());
        set(GenColumn::Vg, self.vg.value());
        set(GenColumn::Mbase, self.mbase.value());
        set(GenColumn::GenStatus, self.status as f64);
        set(GenColumn::Pmax, self.pmax.value());
        set(GenColumn::Pmin, self.pmin.value());
        set(GenColumn::Pc1, self.capability.pc1.value());
        set(GenColumn::Pc2, self.capability.pc2.value());
        set(GenColumn::Qc1min, self.capability.qc1min.value());
        set(GenColumn::Qc1max, self.capability.qc1max.value());
        set(GenColumn::Qc2min, self.capability.qc2min.value());
        set(GenColumn::Qc2max, self.capability.qc2max.value());
        set(GenColumn::RampAgc, self.ramp.agc);
        set(GenColumn::Ramp10, self.ramp.ten_minute);
        set(GenColumn::Ramp30, self.ramp.thirty_minute);
        set(GenColumn::RampQ, self.ramp.reactive);
        set(GenColumn::Apf, self.apf);

        match self.multipliers {
            Some(mu) => {
                set(GenColumn::MuPmax, mu.mu_pmax);
                set(GenColumn::MuPmin, mu.mu_pmin);
                set(GenColumn::MuQmax, mu.mu_qmax);
                set(GenColumn::MuQmin, mu.mu_qmin);
            }
            None => row.truncate(GenColumn::base().len()),
        }
        row
    }
}

impl GenTable {
    /// Builds a table from typed rows.
    ///
    /// Either every record carries multipliers or none does; a mix would
    /// leave the multiplier block shorter than the base columns.
    pub fn from_records(records: &[GenRecord]) -> GenTableResult<Self> {
        if records.is_empty() {
            return Ok(GenTable::new());
        }
        let solved = records.iter().filter(|r| r.multipliers.is_some()).count();
        if solved != 0 && solved != records.len() {
            return Err(GenTableError::LengthMismatch {
                context: "multiplier block",
                expected: records.len(),
                found: solved,
            });
        }
        let rows: Vec<Vec<f64>> = records.iter().map(GenRecord::to_row).collect();
        GenTable::from_matrix(&rows)
    }

    /// Typed copy of one row.
    pub fn record(&self, row: usize) -> Option<GenRecord> {
        self.row_values(row)
            .and_then(|values| GenRecord::from_row(&values).ok())
    }

    /// Typed copies of the selected rows.
    pub fn records(&self, selection: RowSelection<'_>) -> GenTableResult<Vec<GenRecord>> {
        selection.check_bounds(self.size())?;
        Ok(selection
            .positions(self.size())
            .filter_map(|row| self.record(row))
            .collect())
    }
}
