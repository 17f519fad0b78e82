//! Vectoring-mode CORDIC magnitude
//!
//! Rotates the vector onto the +x axis with shift-and-add steps; the x
//! coordinate then carries the length, inflated by the fixed CORDIC gain.
//! Independent of the lookup tables and of the table-size parameter.

/// Number of vectoring iterations.
const ITERATIONS: u32 = 12;

/// Reciprocal of the 12-step CORDIC gain, as a Q16 factor.
///
/// 39797/65536 ≈ 0.6072, the product of 1/sqrt(1 + 2^-2k) for k = 0..11.
/// Changing [`ITERATIONS`] requires recomputing this constant.
const GAIN_RECIPROCAL: i64 = 39797;

/// Euclidean magnitude of (x, y) to within 1% relative error.
///
/// Total over the full i32 domain, including `i32::MIN`. The result
/// preserves the input scale, so (3000, 4000) comes back as ~5000.
pub const fn magnitude(x: i32, y: i32) -> u32 {
    let mut x = x.unsigned_abs() as i64;
    let mut y = y.unsigned_abs() as i64;

    let mut k = 0;
    while k < ITERATIONS {
        let x_shift = x >> k;
        let y_shift = y >> k;
        if y >= 0 {
            x += y_shift;
            y -= x_shift;
        } else {
            x -= y_shift;
            y += x_shift;
        }
        k += 1;
    }

    ((x * GAIN_RECIPROCAL) >> 16) as u32
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    #[test]
    fn test_pythagorean_triples() {
        assert_eq!(magnitude(3000, 4000), 5002);
        assert_eq!(magnitude(5000, 12000), 13001);
        assert_eq!(magnitude(8000, 15000), 16999);
    }

    #[test]
    fn test_axis_aligned_inputs() {
        assert_eq!(magnitude(0, 0), 0);
        let h = magnitude(1000, 0);
        let v = magnitude(0, 1000);
        assert!((h as i32 - 1000).abs() <= 10, "horizontal: {}", h);
        assert!((v as i32 - 1000).abs() <= 10, "vertical: {}", v);
    }

    #[test]
    fn test_diagonal() {
        let m = magnitude(1000, 1000) as i32;
        assert!((m - 1414).abs() <= 14, "diagonal: {}", m);
    }

    #[test]
    fn test_sign_invariance() {
        let reference = magnitude(3000, 4000);
        assert_eq!(magnitude(-3000, 4000), reference);
        assert_eq!(magnitude(3000, -4000), reference);
        assert_eq!(magnitude(-3000, -4000), reference);
    }

    #[test]
    fn test_extreme_inputs_stay_in_range() {
        // |i32::MIN| has no i32 representation; the unsigned fold must
        // still produce the right length.
        let m = magnitude(i32::MIN, 0) as i64;
        assert!((m - 2147483648).abs() <= 21474836, "i32::MIN: {}", m);

        let d = magnitude(i32::MIN, i32::MIN) as i64;
        assert!((d - 3037000499).abs() <= 30370004, "full diagonal: {}", d);
    }
}
