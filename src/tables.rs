//! Compile-time quarter-table builders
//!
//! All three lookup tables are produced by `const fn` evaluation, so every
//! instantiation is materialized by the compiler and placed in read-only
//! storage. Nothing here runs at program startup and nothing uses floating
//! point; the builders are pure integer arithmetic and yield bit-identical
//! tables for a given size on every platform.
//!
//! The three builders:
//! - sine: a Bhaskara-style rational approximation plus a small cubic
//!   residual trim, exact at both ends of the quadrant
//! - arctangent: a 16-step vectoring CORDIC per entry
//! - arcsine: binary search over the same rational sine, so that
//!   `sin(asin(v))` round-trips to within interpolation error

/// Cache-line aligned backing store for a generated table.
#[repr(align(64))]
pub struct Aligned<T>(pub T);

/// Denominator constant of the rational sine core.
///
/// With the half-wave argument scaling used below, 20480 makes the rational
/// hit 16384 exactly at the quarter-turn endpoint, so no division-by-zero
/// or clamp case exists on the nominal domain.
const SINE_DEN: i64 = 20480;

/// Residual trim constants. The plain rational is off by up to 1.65e-3;
/// the cubic term `t(4096-t)(t-2068)*34 >> 32` cancels the bulk of that
/// and leaves a worst case of 4.1e-4 before interpolation.
const TRIM_ROOT: i64 = 2068;
const TRIM_MUL: i64 = 34;
const TRIM_SHIFT: u32 = 32;

/// Integer sine over one quadrant.
///
/// `q` ranges over [0, 16384] representing [0, π/2]; the result is the
/// sine scaled to [0, 16384]. Both endpoints are exact: `0 -> 0` and
/// `16384 -> 16384`, and the value is monotone in between.
pub(crate) const fn sine_quarter_value(q: u32) -> i16 {
    // Fold the quarter argument into Bhaskara's half-wave domain where
    // 16384 represents π, then form the symmetric product term.
    let half = (q >> 1) as i64;
    let t = (half * (16384 - half)) >> 14;

    let num = t << 2;
    let den = SINE_DEN - t;
    let mut value = (num * 16384) / den;

    value += (t * (4096 - t) * (t - TRIM_ROOT) * TRIM_MUL) >> TRIM_SHIFT;

    if value < 0 {
        value = 0;
    }
    if value > 16384 {
        value = 16384;
    }
    value as i16
}

/// Arctangent of 2^-k for k = 0..16, in angle units (16384 per turn).
///
/// The k = 0 entry is exactly one eighth of a turn; entries below one half
/// unit round to zero and only serve to keep the rotation count fixed.
pub(crate) const ATAN_STEPS: [u16; 16] = [
    2048, 1209, 639, 324, 163, 81, 41, 20, 10, 5, 3, 1, 1, 0, 0, 0,
];

/// Angle whose tangent is `i / last`, via vectoring CORDIC.
///
/// Starts from the unit vector on the +x axis and rotates it toward the
/// ray `y/x = i/last` for 16 shift-and-add steps, accumulating the step
/// angles from [`ATAN_STEPS`]. Steering compares the cross product
/// `y*last` vs `x*i`, which is invariant under the CORDIC gain, so the
/// accumulated angle converges on the true arctangent to within a few
/// angle units (the non-restoring residual plus step rounding). The
/// rotation can land one unit outside [0, 2048] at the range ends; the
/// result is clamped back in, which also pins both endpoints exactly.
pub(crate) const fn atan_quarter_value(i: u64, last: u64) -> u16 {
    let mut x: i64 = 1 << 16;
    let mut y: i64 = 0;
    let mut angle: i32 = 0;

    let mut k = 0;
    while k < 16 {
        if y * (last as i64) < x * (i as i64) {
            let x_new = x - (y >> k);
            y += x >> k;
            x = x_new;
            angle += ATAN_STEPS[k] as i32;
        } else {
            let x_new = x + (y >> k);
            y -= x >> k;
            x = x_new;
            angle -= ATAN_STEPS[k] as i32;
        }
        k += 1;
    }

    if angle < 0 {
        0
    } else if angle > 2048 {
        2048
    } else {
        angle as u16
    }
}

/// Angle in [0, 4096] whose sine is closest to `i * 16384 / last`.
///
/// Binary-searches the rational sine rather than the true sine, which
/// biases the table toward the kernel's own forward direction and keeps
/// the `sin(asin(v))` identity tight.
pub(crate) const fn asin_quarter_value(i: u64, last: u64) -> u16 {
    let target = ((i * 16384) / last) as i32;

    let mut low: u32 = 0;
    let mut high: u32 = 4096;
    while high - low > 1 {
        let mid = (low + high) / 2;
        if (sine_quarter_value(mid << 2) as i32) < target {
            low = mid;
        } else {
            high = mid;
        }
    }

    ((low + high) / 2) as u16
}
