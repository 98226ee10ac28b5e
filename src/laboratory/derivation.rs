//! Physical quantities derived from operator-entered measurements

use crate::core::validation::filters::round_to;

/// kN → N
pub const NEWTONS_PER_KILONEWTON: f64 = 1000.0;

/// Decimal places kept for compressive strength, MPa
pub const STRENGTH_DECIMALS: u32 = 2;

/// A measurement counts only when present, numeric and non-zero
fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

/// Working cross-sectional area, mm² (length × width)
pub fn working_area(length: Option<f64>, width: Option<f64>) -> Option<f64> {
    Some(usable(length)? * usable(width)?)
}

/// Compressive strength, MPa: load (kN) × 1000 / area (mm²), two decimals
pub fn compressive_strength(destructive_load: Option<f64>, area: Option<f64>) -> Option<f64> {
    let load = usable(destructive_load)?;
    let area = usable(area)?;
    Some(round_to(load * NEWTONS_PER_KILONEWTON / area, STRENGTH_DECIMALS))
}
