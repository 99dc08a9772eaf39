//! Physical quantities tagged with their unit.
//!
//! Every family (distance, angle, voltage, ...) has a quantity type, a unit enum and an
//! extension trait that turns plain numbers into quantities:
//!
//! ```
//! use robot_command::units::prelude::*;
//!
//! let wheel = 2.0_f64.inches();
//! assert!((wheel.centimeters() - 5.08).abs() < 1e-9);
//!
//! let quarter_turn = 0.25_f64.rotations();
//! assert!((quarter_turn.degrees() - 90.0).abs() < 1e-9);
//! ```
//!
//! Nothing here validates magnitudes. Negative, zero and non-finite values pass through
//! every conversion unchanged in kind.

/// Defines a unit family: the unit enum, the quantity type, its conversions and
/// arithmetic, and the extension trait for plain numbers.
///
/// The first unit listed is expected to be the base unit, with a factor of `1.0`.
macro_rules! quantity {
    (
        $(#[$meta:meta])*
        $quantity:ident / $unit:ident / $ext:ident {
            $($variant:ident => $factor:expr, $symbol:literal, $accessor:ident;)+
        }
    ) => {
        #[doc = concat!("Units of [`", stringify!($quantity), "`].")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $unit {
            $($variant,)+
        }

        impl $unit {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Size of one of this unit in the family's base unit.
            pub fn factor(self) -> f64 {
                match self {
                    $(Self::$variant => $factor,)+
                }
            }

            pub const fn symbol(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)+
                }
            }

            pub const fn of(self, magnitude: f64) -> $quantity {
                $quantity::new(magnitude, self)
            }
        }

        impl ::core::fmt::Display for $unit {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.symbol())
            }
        }

        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $quantity {
            magnitude: f64,
            unit: $unit,
        }

        impl $quantity {
            pub const fn new(magnitude: f64, unit: $unit) -> Self {
                Self { magnitude, unit }
            }

            /// Builds a quantity in `unit` from a magnitude in the base unit.
            pub fn from_base(base: f64, unit: $unit) -> Self {
                Self::new(base / unit.factor(), unit)
            }

            /// The magnitude in [`unit`](Self::unit).
            pub const fn magnitude(self) -> f64 {
                self.magnitude
            }

            pub const fn unit(self) -> $unit {
                self.unit
            }

            pub fn base_magnitude(self) -> f64 {
                self.magnitude * self.unit.factor()
            }

            pub fn in_units(self, unit: $unit) -> f64 {
                if unit == self.unit {
                    self.magnitude
                } else {
                    self.base_magnitude() / unit.factor()
                }
            }

            /// The same quantity expressed in `unit`.
            #[must_use]
            pub fn to(self, unit: $unit) -> Self {
                Self::new(self.in_units(unit), unit)
            }

            $(
                #[doc = concat!("The magnitude in ", $symbol, ".")]
                pub fn $accessor(self) -> f64 {
                    self.in_units($unit::$variant)
                }
            )+

            /// Whether both quantities are the same value once float rounding is ignored.
            ///
            /// Base magnitudes may differ by at most [`EQUIVALENCE_THRESHOLD`] relative to
            /// the larger of the two.
            ///
            /// [`EQUIVALENCE_THRESHOLD`]: crate::units::EQUIVALENCE_THRESHOLD
            pub fn is_equivalent(self, other: Self) -> bool {
                let (lhs, rhs) = (self.base_magnitude(), other.base_magnitude());
                lhs == rhs
                    || (lhs - rhs).abs()
                        <= $crate::units::EQUIVALENCE_THRESHOLD * lhs.abs().max(rhs.abs())
            }
        }

        /// Exact comparison of base magnitudes, consistent with the ordering. Conversions
        /// through inexact factors can round apart; use
        #[doc = concat!("[`", stringify!($quantity), "::is_equivalent`] for those.")]
        impl PartialEq for $quantity {
            fn eq(&self, other: &Self) -> bool {
                self.base_magnitude() == other.base_magnitude()
            }
        }

        impl PartialOrd for $quantity {
            fn partial_cmp(&self, other: &Self) -> Option<::core::cmp::Ordering> {
                self.base_magnitude().partial_cmp(&other.base_magnitude())
            }
        }

        impl ::core::ops::Add for $quantity {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self::new(self.magnitude + rhs.in_units(self.unit), self.unit)
            }
        }

        impl ::core::ops::Sub for $quantity {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self::new(self.magnitude - rhs.in_units(self.unit), self.unit)
            }
        }

        impl ::core::ops::Neg for $quantity {
            type Output = Self;

            fn neg(self) -> Self {
                Self::new(-self.magnitude, self.unit)
            }
        }

        impl ::core::ops::Mul<f64> for $quantity {
            type Output = Self;

            fn mul(self, rhs: f64) -> Self {
                Self::new(self.magnitude * rhs, self.unit)
            }
        }

        impl ::core::ops::Mul<$quantity> for f64 {
            type Output = $quantity;

            fn mul(self, rhs: $quantity) -> $quantity {
                rhs * self
            }
        }

        impl ::core::ops::Div<f64> for $quantity {
            type Output = Self;

            fn div(self, rhs: f64) -> Self {
                Self::new(self.magnitude / rhs, self.unit)
            }
        }

        /// Ratio of two quantities of the same family.
        impl ::core::ops::Div for $quantity {
            type Output = f64;

            fn div(self, rhs: Self) -> f64 {
                self.base_magnitude() / rhs.base_magnitude()
            }
        }

        impl ::core::fmt::Display for $quantity {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match f.precision() {
                    Some(precision) => write!(f, "{:.*} {}", precision, self.magnitude, self.unit),
                    None => write!(f, "{} {}", self.magnitude, self.unit),
                }
            }
        }

        #[doc = concat!("Builds [`", stringify!($quantity), "`]s from plain numbers.")]
        pub trait $ext: $crate::units::Magnitude {
            $(
                #[doc = concat!("This many ", $symbol, ".")]
                fn $accessor(self) -> $quantity {
                    $unit::$variant.of(self.into_magnitude())
                }
            )+
        }

        impl<T: $crate::units::Magnitude> $ext for T {}
    };
}

mod derived;
mod families;

pub use families::*;

/// Relative tolerance used by the quantities' `is_equivalent`.
pub const EQUIVALENCE_THRESHOLD: f64 = 1e-12;

/// A plain number that can become a quantity's magnitude.
pub trait Magnitude: Copy {
    fn into_magnitude(self) -> f64;
}

macro_rules! impl_magnitude {
    ($($number:ty),+) => {
        $(
            impl Magnitude for $number {
                #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
                fn into_magnitude(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}

impl_magnitude!(f64, f32, i8, u8, i16, u16, i32, u32, i64, u64);

/// The extension traits, for `5.0.inches()`-style construction.
pub mod prelude {
    pub use super::{
        AngleExt, AngularAccelerationExt, AngularJerkExt, AngularVelocityExt, CurrentExt,
        DistanceExt, LinearAccelerationExt, LinearVelocityExt, MassExt, MomentOfInertiaExt,
        TimeExt, VoltageExt, VoltageRateExt,
    };
}
