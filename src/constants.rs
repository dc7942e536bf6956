//! # Constants and type definitions for skydome
//!
//! This module centralizes the **reference epochs**, **conversion factors**, and the
//! **unit type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Angle unit conversions (degrees, arcseconds, hours ↔ radians)
//! - Reference epochs expressed as Modified Julian Dates on the UTC scale
//! - Type aliases documenting the unit carried by a plain `f64`

// -------------------------------------------------------------------------------------------------
// Angles and unit conversions
// -------------------------------------------------------------------------------------------------

/// τ = 2π, one full turn in radians
pub const TAU: f64 = std::f64::consts::TAU;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = TAU / 1_296_000.0;

/// Arcminutes → radians
pub const RADMIN: f64 = TAU / 21_600.0;

/// Hours → radians
pub const RADH: f64 = TAU / 24.0;

// -------------------------------------------------------------------------------------------------
// Time
// -------------------------------------------------------------------------------------------------

/// MJD (UTC) of J2000.0 (2000-01-01 12:00:00)
pub const T2000: f64 = 51544.5;

/// MJD (UTC) of J2010.0 (2009-12-31 00:00:00)
pub const T2010: f64 = 55196.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// Number of hours in a day
pub const HOURS_PER_DAY: f64 = 24.0;

/// Length of the tropical year in days
pub const TROPICAL_YEAR: f64 = 365.242191;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Angle or duration in hours
pub type Hour = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
