use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

// ============================================================================
// Physical Unit Newtypes
// ============================================================================

/// Area in square meters (m²)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct SquareMeters(pub f64);

impl SquareMeters {
    pub fn new(sq_m: f64) -> Self {
        Self(sq_m)
    }

    pub fn as_sq_m(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for SquareMeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} m²", self.0)
    }
}

/// Rainfall depth in millimeters (mm)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Millimeters(pub f64);

impl Millimeters {
    pub fn new(mm: f64) -> Self {
        Self(mm)
    }

    pub fn as_meters(&self) -> f64 {
        self.0 / 1000.0
    }
}

impl fmt::Display for Millimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} mm", self.0)
    }
}

/// Water volume in liters (L)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Liters(pub f64);

impl Liters {
    pub fn new(l: f64) -> Self {
        Self(l)
    }

    pub fn as_liters(&self) -> f64 {
        self.0
    }

    pub fn as_kiloliters(&self) -> f64 {
        self.0 / 1000.0
    }
}

impl fmt::Display for Liters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.abs() >= 1000.0 {
            write!(f, "{:.2} kL", self.as_kiloliters())
        } else {
            write!(f, "{:.1} L", self.0)
        }
    }
}

impl Mul<f64> for Liters {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// Excavated volume in cubic meters (m³)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct CubicMeters(pub f64);

impl CubicMeters {
    pub fn new(m3: f64) -> Self {
        Self(m3)
    }

    pub fn as_m3(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for CubicMeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} m³", self.0)
    }
}

/// Amount in Indian rupees (INR)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Rupees(pub f64);

impl Rupees {
    pub fn inr(amount: f64) -> Self {
        Self(amount)
    }

    pub fn as_inr(&self) -> f64 {
        self.0
    }

    /// Whole rupees as reported to the user, never below zero
    pub fn to_whole(&self) -> u64 {
        round_whole(self.0)
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{:.0}", self.0)
    }
}

/// Percentage (0-100%)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Percentage(pub f64);

impl Percentage {
    pub fn from_ratio(ratio: f64) -> Self {
        Self((ratio * 100.0).clamp(0.0, 100.0))
    }

    pub fn full() -> Self {
        Self(100.0)
    }

    pub fn as_percent(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

// ============================================================================
// Rounding
// ============================================================================

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round to a non-negative whole number.
///
/// Saturates at `u64::MAX` (about 1.8e19); a household figure never gets close.
pub fn round_whole(value: f64) -> u64 {
    value.round().max(0.0) as u64
}
