//! Tolerance-based floating-point equivalence.
//!
//! `soft_equiv(x, y)` asks "is `x` close enough to the reference value `y`?". Closeness is
//! relative to `|y|`, except when `y` is itself indistinguishable from zero, where an absolute
//! threshold on `|x|` is used instead:
//!
//! 1. `|x - y| < |y| * precision` → equivalent.
//! 2. `|y| < epsilon` and `|x| < precision` → equivalent.
//! 3. otherwise → not equivalent.
//!
//! The default precision is `sqrt(epsilon)` of the float type, looser than epsilon to absorb
//! accumulated rounding error in numerical code.
//!
//! ## Notes
//!
//! - The comparison is **not** symmetric: `y` is the reference.
//! - NaN and infinite inputs give an undefined comparison result; they are not special-cased.
//!
//! ## Examples
//!
//! ```rust
//! use dbc_core::{soft_equiv, soft_equiv_with};
//! assert!(soft_equiv(1.0_f64, 1.0 + 1e-10));
//! assert!(!soft_equiv(1.0_f64, 1.0 + 1e-3));
//! assert!(soft_equiv_with(100.0_f64, 101.0, 0.05));
//! ```

use std::ops::{Mul, Sub};

mod sealed {
    /// Sealing trait to restrict external implementations.
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Float types `soft_equiv` is defined for.
pub trait SoftFloat: sealed::Sealed + Copy + PartialOrd + Sub<Output = Self> + Mul<Output = Self> {
    /// Machine epsilon of the type.
    const EPSILON: Self;

    fn abs(self) -> Self;

    /// `sqrt(EPSILON)`.
    fn default_precision() -> Self;
}

macro_rules! impl_soft_float {
    ($($t:ty),*) => {
        $(
            impl SoftFloat for $t {
                const EPSILON: Self = <$t>::EPSILON;

                #[inline]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }

                #[inline]
                fn default_precision() -> Self {
                    <$t>::EPSILON.sqrt()
                }
            }
        )*
    };
}

impl_soft_float!(f32, f64);

/// Compare `x` to the reference `y` with the default precision (`sqrt(epsilon)`).
#[inline]
pub fn soft_equiv<T: SoftFloat>(x: T, y: T) -> bool {
    soft_equiv_with(x, y, T::default_precision())
}

/// Compare `x` to the reference `y` within `precision` relative to `y`.
///
/// ## Parameters
/// - `x`: the computed value.
/// - `y`: the reference value.
/// - `precision`: relative tolerance; also the absolute threshold on `|x|` when `|y| < epsilon`.
///
/// ## Returns
/// - (`bool`): whether `x` is equivalent to `y`.
#[inline]
pub fn soft_equiv_with<T: SoftFloat>(x: T, y: T, precision: T) -> bool {
    if (x - y).abs() < y.abs() * precision {
        return true;
    }
    y.abs() < T::EPSILON && x.abs() < precision
}
