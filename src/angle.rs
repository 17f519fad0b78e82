//! Angle encoding and unit conversions
//!
//! All angles are unsigned 16-bit integers where 16384 represents one full
//! turn (2π). Only the low 14 bits are significant; the fold in the
//! evaluators masks anything above. The encoding makes the common
//! operations bit manipulation:
//! - wrap to one period: `angle & ANGLE_MASK`
//! - quadrant: top 2 of the 14 bits
//! - position inside the quadrant: low 12 bits
//!
//! One angle unit is 360/16384 ≈ 0.0220 degrees.

/// One full turn (2π) in angle units.
pub const FULL_TURN: u16 = 16384;

/// Half a turn (π) in angle units.
pub const HALF_TURN: u16 = 8192;

/// A quarter turn (π/2) in angle units.
pub const QUARTER_TURN: u16 = 4096;

/// Mask selecting the 14 significant bits of an angle.
pub const ANGLE_MASK: u16 = 0x3FFF;

/// Full-scale sine/cosine output: `sin(QUARTER_TURN)` returns exactly this.
pub const SIN_SCALE: i16 = 16384;

/// Tangent output scale: a true tangent of 1.0 is encoded as 8192.
pub const TAN_SCALE: i16 = 8192;

/// Arcsine/arccosine input scale: 8192 encodes 1.0, inputs clamp at ±8192.
pub const ASIN_SCALE: i16 = 8192;

/// One full turn in milliradians, truncated (2π ≈ 6.283 rad).
const MILLIRADIAN_TURN: i32 = 6283;

/// Converts degrees to angle units, normalizing into [0°, 360°) first.
///
/// `from_degrees(-90)` and `from_degrees(270)` produce the same angle.
pub const fn from_degrees(degrees: i16) -> u16 {
    let mut d = degrees as i32;
    while d < 0 {
        d += 360;
    }
    while d >= 360 {
        d -= 360;
    }
    ((d as u32 * FULL_TURN as u32) / 360) as u16
}

/// Converts angle units to whole degrees in [0, 360), truncating.
pub const fn to_degrees(angle: u16) -> i16 {
    (((angle & ANGLE_MASK) as u32 * 360) / FULL_TURN as u32) as i16
}

/// Converts milliradians to angle units (3141 mrad ≈ π rad ≈ half a turn).
///
/// Negative and over-full inputs are folded into one turn by Euclidean
/// remainder before scaling.
pub const fn from_milliradians(mrad: i32) -> u16 {
    let mut m = mrad % MILLIRADIAN_TURN;
    if m < 0 {
        m += MILLIRADIAN_TURN;
    }
    ((m as u32 * FULL_TURN as u32) / MILLIRADIAN_TURN as u32) as u16
}
