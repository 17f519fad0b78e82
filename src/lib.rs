//! Integer-only trigonometry for targets without an FPU
//!
//! Sine, cosine, tangent, their inverses, and a CORDIC vector magnitude,
//! all on fixed-width integers with compile-time lookup tables. Built for
//! microcontrollers, deterministic control loops and DSP inner loops
//! where floating point is absent, slow or banned: results are bit-exact
//! across platforms, every call is constant-time, and nothing runs before
//! main or allocates.
//!
//! # Conventions
//! - Angles: u16, 16384 per turn (wraps by masking the low 14 bits)
//! - sin/cos output: i16, ±16384 full scale
//! - tan output: i16, 8192 per unit tangent, saturating at ±32767
//! - asin/acos input: i16, ±8192 full scale, clamped
//! - magnitude: i32 components in, u32 length out, input scale preserved
//!
//! # Picking a table size
//! The kernel is monomorphic on the table entry count `N` (a power of two
//! in 8..=4096, checked at compile time). Larger tables cost 6·N bytes of
//! flash and buy accuracy; [`Trig`] (N = 128, 768 bytes, ~0.05% worst-case
//! sine error) is the usual choice.
//!
//! ```
//! use embedded_trig::{Trig, from_degrees};
//!
//! let heading = from_degrees(30);
//! let (s, c) = Trig::sincos(heading);
//! assert!((s as i32 - 8192).abs() <= 2); // sin(30°) == 0.5
//! assert!((c as i32 - 14189).abs() <= 8); // cos(30°) == 0.866
//! assert_eq!(Trig::atan2(1000, 1000), from_degrees(45));
//! ```

#![no_std]

pub mod angle;
pub mod cordic;
mod fold;
pub mod tables;
pub mod trig;
pub mod vector;

pub use angle::{from_degrees, from_milliradians, to_degrees};
pub use angle::{ANGLE_MASK, ASIN_SCALE, FULL_TURN, HALF_TURN, QUARTER_TURN, SIN_SCALE, TAN_SCALE};
pub use cordic::magnitude;
pub use trig::{IntegerTrig, Trig, Trig128, Trig256, Trig32, Trig512, Trig64};
pub use vector::{Polar, Vec2};
