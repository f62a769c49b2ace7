//! Advisory consistency report for a generator table.
//!
//! The table operations never validate cross-field consistency; callers who
//! want to know about out-of-service units still carrying dispatch, inverted
//! limits or dangling bus numbers ask for a report explicitly:
//!
//! ```
//! use gentab::{DiagnosticsConfig, GenRecord, GenTable};
//!
//! let table = GenTable::from_records(&[
//!     GenRecord::new(1).with_dispatch(50.0, 0.0),
//!     GenRecord::new(2).with_dispatch(30.0, 0.0).with_status(0),
//! ])
//! .unwrap();
//!
//! let diag = table.diagnose(&DiagnosticsConfig::default());
//! assert_eq!(diag.warning_count(), 1);
//! assert_eq!(diag.warnings().next().unwrap().entity.as_deref(), Some("Gen 1"));
//! ```

use serde::Serialize;

use crate::config::DiagnosticsConfig;
use crate::table::GenTable;

/// Severity level for diagnostic issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suspicious but usable (e.g., dispatch on an out-of-service unit)
    Warning,
    /// Violates a data contract (e.g., status outside {0, 1})
    Error,
}

/// A single issue found in a table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticIssue {
    pub severity: Severity,
    /// Category for grouping ("reference", "validation", "physical", "limits")
    pub category: String,
    pub message: String,
    /// Row the issue refers to, e.g. "Gen 3"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
}

impl DiagnosticIssue {
    pub fn new(
        severity: Severity,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category: category.into(),
            message: message.into(),
            entity: None,
        }
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }
}

impl std::fmt::Display for DiagnosticIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };

        write!(f, "[{}:{}] {}", severity, self.category, self.message)?;

        if let Some(entity) = &self.entity {
            write!(f, " ({})", entity)?;
        }

        Ok(())
    }
}

/// Collection of diagnostic issues
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<DiagnosticIssue>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, issue: DiagnosticIssue) {
        self.issues.push(issue);
    }

    pub fn add_warning_with_entity(&mut self, category: &str, message: &str, entity: &str) {
        self.issues
            .push(DiagnosticIssue::new(Severity::Warning, category, message).with_entity(entity));
    }

    pub fn add_error_with_entity(&mut self, category: &str, message: &str, entity: &str) {
        self.issues
            .push(DiagnosticIssue::new(Severity::Error, category, message).with_entity(entity));
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn issues_by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a DiagnosticIssue> {
        self.issues.iter().filter(move |i| i.category == category)
    }

    pub fn errors(&self) -> impl Iterator<Item = &DiagnosticIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &DiagnosticIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    pub fn summary(&self) -> String {
        let plural = |n: usize| if n == 1 { "" } else { "s" };
        match (self.warning_count(), self.error_count()) {
            (0, 0) => "No issues".to_string(),
            (w, 0) => format!("{} warning{}", w, plural(w)),
            (0, e) => format!("{} error{}", e, plural(e)),
            (w, e) => format!("{} warning{}, {} error{}", w, plural(w), e, plural(e)),
        }
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Diagnostics: {}", self.summary())?;
        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }
        Ok(())
    }
}

impl GenTable {
    /// Checks every row for contract and consistency problems. Read-only.
    pub fn diagnose(&self, config: &DiagnosticsConfig) -> Diagnostics {
        let mut diag = Diagnostics::new();
        let (bus, status) = (self.gen_bus(), self.gen_status());
        let (pg, qg, vg) = (self.pg(), self.qg(), self.vg());
        let (pmin, pmax, qmin, qmax) = (self.pmin(), self.pmax(), self.qmin(), self.qmax());

        for row in 0..self.size() {
            let entity = format!("Gen {}", row);

            if bus[row] < 1 {
                diag.add_error_with_entity(
                    "reference",
                    &format!("bus number {} is not a positive id", bus[row]),
                    &entity,
                );
            }

            match status[row] {
                0 => {
                    let tol = config.dispatch_tolerance;
                    if pg[row].abs() > tol || qg[row].abs() > tol {
                        diag.add_warning_with_entity(
                            "physical",
                            &format!(
                                "out of service but dispatched at {} MW / {} MVAr",
                                pg[row], qg[row]
                            ),
                            &entity,
                        );
                    }
                }
                1 => {
                    if vg[row] <= 0.0 {
                        diag.add_warning_with_entity(
                            "physical",
                            &format!("non-positive voltage setpoint {} pu", vg[row]),
                            &entity,
                        );
                    }
                }
                other => diag.add_error_with_entity(
                    "validation",
                    &format!("status {} is not 0 or 1", other),
                    &entity,
                ),
            }

            if config.check_limits {
                if pmin[row] > pmax[row] {
                    diag.add_warning_with_entity(
                        "limits",
                        &format!("PMIN {} exceeds PMAX {}", pmin[row], pmax[row]),
                        &entity,
                    );
                }
                if qmin[row] > qmax[row] {
                    diag.add_warning_with_entity(
                        "limits",
                        &format!("QMIN {} exceeds QMAX {}", qmin[row], qmax[row]),
                        &entity,
                    );
                }
            }
        }

        diag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::GenRecord;

    fn table(records: &[GenRecord]) -> GenTable {
        GenTable::from_records(records).unwrap()
    }

    #[test]
    fn clean_table_has_no_issues() {
        let t = table(&[
            GenRecord::new(1)
                .with_dispatch(50.0, 10.0)
                .with_p_limits(0.0, 100.0)
                .with_q_limits(-30.0, 30.0),
            GenRecord::new(2).with_status(0),
        ]);
        let diag = t.diagnose(&DiagnosticsConfig::default());
        assert!(!diag.has_issues(), "{}", diag);
        assert_eq!(diag.summary(), "No issues");
    }

    #[test]
    fn out_of_service_dispatch_is_flagged() {
        let t = table(&[GenRecord::new(3).with_dispatch(25.0, 0.0).with_status(0)]);
        let diag = t.diagnose(&DiagnosticsConfig::default());
        assert_eq!(diag.warning_count(), 1);
        let issue = diag.issues_by_category("physical").next().unwrap();
        assert_eq!(issue.entity.as_deref(), Some("Gen 0"));

        let loose = DiagnosticsConfig {
            dispatch_tolerance: 50.0,
            ..DiagnosticsConfig::default()
        };
        assert!(!t.diagnose(&loose).has_issues());
    }

    #[test]
    fn bad_bus_and_status_are_errors() {
        let t = table(&[GenRecord::new(0).with_status(2)]);
        let diag = t.diagnose(&DiagnosticsConfig::default());
        assert_eq!(diag.error_count(), 2);
        assert!(diag.has_errors());
        assert_eq!(diag.issues_by_category("reference").count(), 1);
        assert_eq!(diag.issues_by_category("validation").count(), 1);
    }

    #[test]
    fn inverted_limits_respect_config() {
        let t = table(&[GenRecord::new(1)
            .with_p_limits(80.0, 20.0)
            .with_q_limits(10.0, -10.0)]);
        let diag = t.diagnose(&DiagnosticsConfig::default());
        assert_eq!(diag.issues_by_category("limits").count(), 2);
        assert_eq!(diag.summary(), "2 warnings");

        let off = DiagnosticsConfig {
            check_limits: false,
            ..DiagnosticsConfig::default()
        };
        assert!(!t.diagnose(&off).has_issues());
    }

    #[test]
    fn display_lists_each_issue() {
        let t = table(&[GenRecord::new(-4)]);
        let text = t.diagnose(&DiagnosticsConfig::default()).to_string();
        assert!(text.contains("Diagnostics: 1 error"));
        assert!(text.contains("[error:reference] bus number -4 is not a positive id (Gen 0)"));
    }
}
