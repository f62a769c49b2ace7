//! Unit-tagged quantities for typed generator rows.
//!
//! The table stores raw `f64` columns; the typed row (`gentab::GenRecord`)
//! wraps the dispatch, limit, voltage and base fields in these newtypes so a
//! reactive limit cannot be passed where an active one is expected.
//!
//! ```
//! use gentab_core::units::{Megawatts, Megavars};
//!
//! let p = Megawatts(80.0) + Megawatts(20.0);
//! let q = Megavars(30.0);
//! assert_eq!(p.value(), 100.0);
//! assert!((p.apparent_power(q).value() - 104.403).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

macro_rules! impl_unit_ops {
    ($type:ty, $unit_name:literal) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $type {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:.4} {}", self.0, $unit_name)
            }
        }

        impl From<$type> for f64 {
            #[inline]
            fn from(value: $type) -> f64 {
                value.0
            }
        }

        impl $type {
            #[inline]
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn value(self) -> f64 {
                self.0
            }

            #[inline]
            pub fn abs(self) -> Self {
                Self(self.0.abs())
            }
        }
    };
}

/// Active power (MW)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Megawatts(pub f64);

impl_unit_ops!(Megawatts, "MW");

/// Reactive power (MVAr)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Megavars(pub f64);

impl_unit_ops!(Megavars, "MVAr");

/// Apparent power (MVA), used for machine bases.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MegavoltAmperes(pub f64);

impl_unit_ops!(MegavoltAmperes, "MVA");

/// Voltage magnitude in per-unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PerUnit(pub f64);

impl_unit_ops!(PerUnit, "pu");

impl Megawatts {
    /// S = sqrt(P² + Q²)
    #[inline]
    pub fn apparent_power(self, q: Megavars) -> MegavoltAmperes {
        MegavoltAmperes(self.0.hypot(q.0))
    }
}

impl PerUnit {
    pub const ONE: Self = Self(1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_stays_in_unit() {
        let q = Megavars(10.0) - Megavars(25.0);
        assert_eq!(q, Megavars(-15.0));
        assert_eq!(q.abs(), Megavars(15.0));
        assert_eq!(-Megawatts(2.0) * 3.0, Megawatts(-6.0));
    }

    #[test]
    fn display_carries_unit_label() {
        assert_eq!(MegavoltAmperes(100.0).to_string(), "100.0000 MVA");
        assert_eq!(PerUnit::ONE.to_string(), "1.0000 pu");
    }

    #[test]
    fn serde_is_transparent_number() {
        let json = serde_json::to_string(&Megawatts(42.5)).unwrap();
        assert_eq!(json, "42.5");
    }
}
