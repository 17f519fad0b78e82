//! Table-driven integer trigonometry kernel
//!
//! [`IntegerTrig`] is monomorphic on the table size `N`: each instantiation
//! carries its own three compile-time quarter tables (6·N bytes total) and
//! publishes the full function surface as `const fn`s. There is no runtime
//! state, no allocation and no branch whose direction depends on input
//! magnitude, so every operation is safe to call from interrupt context
//! and costs the same number of cycles for every input.
//!
//! Sizes must be powers of two between 8 and 4096; anything else is
//! rejected when the instantiation is compiled. The aliases [`Trig32`]
//! through [`Trig512`] cover the usual footprint/accuracy trade-offs,
//! with [`Trig`] (128 entries, 768 bytes) as the balanced default.

use crate::angle::{ANGLE_MASK, ASIN_SCALE, FULL_TURN, HALF_TURN, QUARTER_TURN, TAN_SCALE};
use crate::cordic;
use crate::fold::{apply_sign, fold_angle, interpolate};
use crate::tables::{asin_quarter_value, atan_quarter_value, sine_quarter_value, Aligned};

/// Integer trigonometry over `N`-entry quarter tables.
///
/// Angles are u16 with 16384 per turn; see the crate docs for the full
/// scaling conventions.
pub struct IntegerTrig<const N: usize>;

impl<const N: usize> IntegerTrig<N> {
    const SIZE_CHECK: () = {
        assert!(N.is_power_of_two(), "table size must be a power of two");
        assert!(
            N >= 8 && N <= 4096,
            "table size must be between 8 and 4096 entries"
        );
    };

    const TABLE_MASK: usize = N - 1;

    // (N-1) entries span one quadrant of 4096 angle units; both
    // reciprocals turn the index scaling into a single multiply.
    const RECIPROCAL_QUADRANT: u32 = (((N - 1) as u32) << 16) / QUARTER_TURN as u32;
    const ASIN_RECIPROCAL: u32 = (((N - 1) as u32) << 16) / ASIN_SCALE as u32;

    /// Quarter-wave sine samples over [0, π/2], scaled to [0, 16384].
    pub const SINE_TABLE: Aligned<[i16; N]> = {
        let _ = Self::SIZE_CHECK;
        let mut table = [0i16; N];
        let mut i = 0;
        while i < N {
            let q = ((i as u64 * 16384) / (N as u64 - 1)) as u32;
            table[i] = sine_quarter_value(q);
            i += 1;
        }
        Aligned(table)
    };

    /// Arctangent samples for ratios in [0, 1], as angles in [0, 2048].
    pub const ATAN_TABLE: Aligned<[u16; N]> = {
        let _ = Self::SIZE_CHECK;
        let mut table = [0u16; N];
        let mut i = 0;
        while i < N {
            table[i] = atan_quarter_value(i as u64, N as u64 - 1);
            i += 1;
        }
        Aligned(table)
    };

    /// Arcsine samples for inputs in [0, 1], as angles in [0, 4096].
    pub const ASIN_TABLE: Aligned<[u16; N]> = {
        let _ = Self::SIZE_CHECK;
        let mut table = [0u16; N];
        let mut i = 0;
        while i < N {
            table[i] = asin_quarter_value(i as u64, N as u64 - 1);
            i += 1;
        }
        Aligned(table)
    };

    /// Sine of an angle. Output spans ±16384 for ±1.0.
    ///
    /// Total over all u16 inputs; bits above the 14 angle bits are masked.
    #[inline(always)]
    pub const fn sin(angle: u16) -> i16 {
        let (index, fraction, sign_mask) =
            fold_angle(angle, Self::RECIPROCAL_QUADRANT, N - 1);
        let y0 = Self::SINE_TABLE.0[index] as i32;
        let y1 = Self::SINE_TABLE.0[(index + 1) & Self::TABLE_MASK] as i32;
        let value = interpolate(y0, y1, fraction) as i16;
        apply_sign(value, sign_mask)
    }

    /// Cosine of an angle, as the sine shifted a quarter turn.
    #[inline(always)]
    pub const fn cos(angle: u16) -> i16 {
        Self::sin(angle.wrapping_add(QUARTER_TURN))
    }

    /// Sine and cosine together, from the same folded angle.
    #[inline(always)]
    pub const fn sincos(angle: u16) -> (i16, i16) {
        (Self::sin(angle), Self::cos(angle))
    }

    /// Tangent of an angle, scaled so 8192 encodes 1.0.
    ///
    /// Near the asymptotes (|cos| < 100) the result saturates to ±32767
    /// with the sign taken from the sine; callers detect saturation by
    /// comparing against those two values.
    pub const fn tan(angle: u16) -> i16 {
        let sin_val = Self::sin(angle) as i32;
        let cos_val = Self::cos(angle) as i32;

        if cos_val > -100 && cos_val < 100 {
            return if sin_val >= 0 { i16::MAX } else { -i16::MAX };
        }

        let result = (sin_val * TAN_SCALE as i32) / cos_val;
        if result > i16::MAX as i32 {
            i16::MAX
        } else if result < -i16::MAX as i32 {
            -i16::MAX
        } else {
            result as i16
        }
    }

    /// Angle of the vector (x, y), in [0, 16384).
    ///
    /// The octant with |x| >= |y| looks up |y|/|x| directly; the other
    /// one looks up the reciprocal ratio and reflects off the quarter
    /// turn. A per-quadrant offset and sign then place the result on the
    /// full circle. `atan2(0, 0)` returns 0 by convention.
    pub const fn atan2(y: i32, x: i32) -> u16 {
        if x == 0 {
            return if y > 0 {
                QUARTER_TURN
            } else if y < 0 {
                HALF_TURN + QUARTER_TURN
            } else {
                0
            };
        }

        let abs_x = x.unsigned_abs() as u64;
        let abs_y = y.unsigned_abs() as u64;
        let quadrant = (((x < 0) as usize) << 1) | ((y < 0) as usize);

        let angle = if abs_x >= abs_y {
            Self::atan_lookup(abs_y, abs_x) as i32
        } else {
            QUARTER_TURN as i32 - Self::atan_lookup(abs_x, abs_y) as i32
        };

        const QUADRANT_OFFSET: [i32; 4] = [0, 16384, 8192, 8192];
        const ANGLE_SIGN: [i32; 4] = [1, -1, -1, 1];

        ((QUADRANT_OFFSET[quadrant] + angle * ANGLE_SIGN[quadrant]) as u16) & ANGLE_MASK
    }

    /// Interpolated arctangent of `num / den` for 0 <= num <= den, den > 0.
    #[inline(always)]
    const fn atan_lookup(num: u64, den: u64) -> u16 {
        let scaled = num * (N as u64 - 1);
        let index = (scaled / den) as usize;
        let fraction = (((scaled << 8) / den) & 0xFF) as u32;
        let y0 = Self::ATAN_TABLE.0[index] as i32;
        let y1 = Self::ATAN_TABLE.0[(index + 1) & Self::TABLE_MASK] as i32;
        interpolate(y0, y1, fraction) as u16
    }

    /// Arctangent of `value / 16384`.
    #[inline(always)]
    pub const fn atan(value: i16) -> u16 {
        Self::atan2(value as i32, 16384)
    }

    /// Arcsine of `value / 8192`, clamped to ±8192.
    ///
    /// Non-negative inputs map into [0, 4096]; negative inputs reflect
    /// into [12288, 16384), i.e. the angle measured backwards from a full
    /// turn.
    pub const fn asin(value: i16) -> u16 {
        let mut abs_val = value.unsigned_abs() as u32;
        if abs_val > ASIN_SCALE as u32 {
            abs_val = ASIN_SCALE as u32;
        }

        let scaled = abs_val * Self::ASIN_RECIPROCAL;
        let mut index = (scaled >> 16) as usize;
        let fraction = (scaled >> 8) & 0xFF;
        if index > N - 1 {
            index = N - 1;
        }

        let y0 = Self::ASIN_TABLE.0[index] as i32;
        let y1 = Self::ASIN_TABLE.0[(index + 1) & Self::TABLE_MASK] as i32;
        let angle = interpolate(y0, y1, fraction) as u16;

        if value < 0 {
            (FULL_TURN - angle) & ANGLE_MASK
        } else {
            angle
        }
    }

    /// Arccosine of `value / 8192`, as a quarter turn minus the arcsine.
    #[inline(always)]
    pub const fn acos(value: i16) -> u16 {
        ((QUARTER_TURN as i32 - Self::asin(value) as i32) as u16) & ANGLE_MASK
    }

    /// Euclidean magnitude of (x, y); see [`cordic::magnitude`].
    #[inline(always)]
    pub const fn magnitude(x: i32, y: i32) -> u32 {
        let _ = Self::SIZE_CHECK;
        cordic::magnitude(x, y)
    }

    /// Number of entries per table.
    pub const fn table_size() -> usize {
        let _ = Self::SIZE_CHECK;
        N
    }

    /// Bytes of read-only storage used by the three tables.
    pub const fn table_memory() -> usize {
        let _ = Self::SIZE_CHECK;
        N * (core::mem::size_of::<i16>() + 2 * core::mem::size_of::<u16>())
    }
}

/// 32-entry tables, 192 bytes. For the tightest footprints.
pub type Trig32 = IntegerTrig<32>;
/// 64-entry tables, 384 bytes.
pub type Trig64 = IntegerTrig<64>;
/// 128-entry tables, 768 bytes. The balanced default.
pub type Trig128 = IntegerTrig<128>;
/// 256-entry tables, 1536 bytes.
pub type Trig256 = IntegerTrig<256>;
/// 512-entry tables, 3072 bytes. For the tightest error budgets.
pub type Trig512 = IntegerTrig<512>;

/// Default instantiation.
pub type Trig = Trig128;

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    #[test]
    fn test_sin_cardinal_angles() {
        assert_eq!(Trig::sin(0), 0);
        assert_eq!(Trig::sin(QUARTER_TURN), 16384);
        assert_eq!(Trig::sin(HALF_TURN), 0);
        assert_eq!(Trig::sin(12288), -16384);
    }

    #[test]
    fn test_sin_wraps_full_turns() {
        for angle in [0u16, 1, 37, 2048, 4096, 9000] {
            assert_eq!(Trig::sin(angle), Trig::sin(angle.wrapping_add(FULL_TURN)));
            assert_eq!(
                Trig::sin(angle),
                Trig::sin(angle.wrapping_add(FULL_TURN).wrapping_add(FULL_TURN))
            );
        }
    }

    #[test]
    fn test_cos_cardinal_angles() {
        assert_eq!(Trig::cos(0), 16384);
        assert_eq!(Trig::cos(QUARTER_TURN), 0);
        assert_eq!(Trig::cos(HALF_TURN), -16384);
        assert_eq!(Trig::cos(12288), 0);
    }

    #[test]
    fn test_sin_output_never_leaves_full_scale() {
        for angle in 0..FULL_TURN {
            let s = Trig::sin(angle);
            assert!((-16384..=16384).contains(&s), "sin({}) = {}", angle, s);
        }
    }

    #[test]
    fn test_sincos_matches_individual_calls() {
        for angle in (0..FULL_TURN).step_by(41) {
            let (s, c) = Trig::sincos(angle);
            assert_eq!(s, Trig::sin(angle));
            assert_eq!(c, Trig::cos(angle));
        }
    }

    #[test]
    fn test_tan_spot_values() {
        assert_eq!(Trig::tan(0), 0);
        // tan(45 deg) is exactly 1.0 at the 8192 scale.
        assert_eq!(Trig::tan(2048), 8192);
        assert_eq!(Trig::tan(6144), -8192);
        // tan(pi) has cos = -16384, well away from saturation.
        assert_eq!(Trig::tan(HALF_TURN), 0);
    }

    #[test]
    fn test_tan_saturates_at_asymptotes() {
        assert_eq!(Trig::tan(QUARTER_TURN), i16::MAX);
        assert_eq!(Trig::tan(12288), -i16::MAX);
        assert_eq!(Trig::tan(4095), i16::MAX);
        assert_eq!(Trig::tan(4097), i16::MAX);
    }

    #[test]
    fn test_atan2_axes() {
        assert_eq!(Trig::atan2(0, 1000), 0);
        assert_eq!(Trig::atan2(1000, 0), QUARTER_TURN);
        assert_eq!(Trig::atan2(0, -1000), HALF_TURN);
        assert_eq!(Trig::atan2(-1000, 0), 12288);
        assert_eq!(Trig::atan2(0, 0), 0);
    }

    #[test]
    fn test_atan2_diagonals() {
        assert_eq!(Trig::atan2(1000, 1000), 2048);
        assert_eq!(Trig::atan2(1000, -1000), 6144);
        assert_eq!(Trig::atan2(-1000, -1000), 10240);
        assert_eq!(Trig::atan2(-1000, 1000), 14336);
    }

    #[test]
    fn test_atan_interprets_input_as_tangent() {
        assert_eq!(Trig::atan(0), 0);
        // 16383/16384 is a hair under a unit tangent, an eighth of a turn.
        assert_eq!(Trig::atan(16383), 2047);
        assert_eq!(Trig::atan(-16383), 14337);
        assert_eq!(Trig::atan(8192), 1210);
        assert_eq!(Trig::atan(i16::MAX), 2886);
        assert_eq!(Trig::atan(-i16::MAX), 13498);
    }

    #[test]
    fn test_asin_boundaries_and_clamp() {
        assert_eq!(Trig::asin(0), 0);
        assert_eq!(Trig::asin(8192), 4095);
        assert_eq!(Trig::asin(-8192), 12289);
        // Out-of-range inputs clamp to the boundary result.
        assert_eq!(Trig::asin(9000), Trig::asin(8192));
        assert_eq!(Trig::asin(i16::MAX), Trig::asin(8192));
        assert_eq!(Trig::asin(i16::MIN), Trig::asin(-8192));
    }

    #[test]
    fn test_acos_boundaries() {
        assert_eq!(Trig::acos(0), QUARTER_TURN);
        assert_eq!(Trig::acos(8192), 1);
        assert_eq!(Trig::acos(-8192), 8191);
    }

    #[test]
    fn test_table_introspection() {
        assert_eq!(Trig::table_size(), 128);
        assert_eq!(Trig::table_memory(), 768);
        assert_eq!(Trig32::table_memory(), 192);
        assert_eq!(Trig512::table_memory(), 3072);
    }

    #[test]
    fn test_tables_are_cache_line_aligned() {
        assert_eq!(core::mem::align_of_val(&Trig::SINE_TABLE), 64);
        assert_eq!(core::mem::align_of_val(&Trig::ATAN_TABLE), 64);
        assert_eq!(core::mem::align_of_val(&Trig::ASIN_TABLE), 64);
    }
}
