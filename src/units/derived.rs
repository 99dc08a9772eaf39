//! Conversions between families.

use core::ops::{Div, Mul};

use super::families::*;

impl Angle {
    /// Arc length swept by this angle at `radius`, in the radius's unit.
    pub fn to_distance(self, radius: Distance) -> Distance {
        Distance::new(radius.magnitude() * self.radians(), radius.unit())
    }
}

impl Distance {
    /// Angle subtended by this arc length at `radius`.
    ///
    /// A zero radius gives an infinite (or NaN) angle.
    pub fn to_angle(self, radius: Distance) -> Angle {
        AngleUnit::Radians.of(self.meters() / radius.meters())
    }
}

impl LinearVelocity {
    /// Angular velocity of a wheel of `radius` whose rim moves at this speed.
    pub fn to_angular_velocity(self, radius: Distance) -> AngularVelocity {
        AngularVelocityUnit::RadiansPerSecond.of(self.meters_per_second() / radius.meters())
    }
}

impl AngularVelocity {
    /// Rim speed of a wheel of `radius` spinning at this rate.
    pub fn to_linear_velocity(self, radius: Distance) -> LinearVelocity {
        LinearVelocityUnit::MetersPerSecond.of(self.radians_per_second() * radius.meters())
    }
}

/// `quantity / time = rate` and `rate * time = quantity`, both in base units.
macro_rules! per_time {
    ($($quantity:ident => $rate:ident, $quantity_base:path, $rate_base:path;)+) => {
        $(
            impl Div<Time> for $quantity {
                type Output = $rate;

                fn div(self, rhs: Time) -> $rate {
                    $rate::from_base(self.base_magnitude() / rhs.seconds(), $rate_base)
                }
            }

            impl Mul<Time> for $rate {
                type Output = $quantity;

                fn mul(self, rhs: Time) -> $quantity {
                    $quantity::from_base(self.base_magnitude() * rhs.seconds(), $quantity_base)
                }
            }

            impl $quantity {
                /// The rate of a change of this size every `period`.
                pub fn per(self, period: Time) -> $rate {
                    self / period
                }
            }
        )+
    };
}

per_time! {
    Distance => LinearVelocity, DistanceUnit::Meters, LinearVelocityUnit::MetersPerSecond;
    LinearVelocity => LinearAcceleration, LinearVelocityUnit::MetersPerSecond, LinearAccelerationUnit::MetersPerSecondPerSecond;
    Angle => AngularVelocity, AngleUnit::Radians, AngularVelocityUnit::RadiansPerSecond;
    AngularVelocity => AngularAcceleration, AngularVelocityUnit::RadiansPerSecond, AngularAccelerationUnit::RadiansPerSecondPerSecond;
    AngularAcceleration => AngularJerk, AngularAccelerationUnit::RadiansPerSecondPerSecond, AngularJerkUnit::RadiansPerSecondCubed;
    Voltage => VoltageRate, VoltageUnit::Volts, VoltageRateUnit::VoltsPerSecond;
}

#[cfg(test)]
mod tests {
    use core::f64::consts::PI;

    use super::*;
    use crate::units::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        let difference = a - b;
        difference < 1e-9 && difference > -1e-9
    }

    #[test]
    fn half_turn_at_two_meters_is_two_pi_meters() {
        let arc = PI.radians().to_distance(2.0_f64.meters());
        assert!(close(arc.meters(), 2.0 * PI));
        assert_eq!(arc.unit(), DistanceUnit::Meters);
    }

    #[test]
    fn arc_length_keeps_the_radius_unit() {
        let arc = 1.0_f64.rotations().to_distance(2.0_f64.inches());
        assert_eq!(arc.unit(), DistanceUnit::Inches);
        assert!(close(arc.magnitude(), 4.0 * PI));
    }

    #[test]
    fn distance_to_angle_mixes_units() {
        let angle = 2.54_f64.centimeters().to_angle(1.0_f64.inches());
        assert!(close(angle.radians(), 1.0));
    }

    #[test]
    fn zero_radius_is_not_clamped() {
        assert!(1.0_f64.meters().to_angle(0.0_f64.meters()).radians().is_infinite());
        assert!(0.0_f64.meters().to_angle(0.0_f64.meters()).radians().is_nan());
        assert!(
            3.0_f64
                .meters_per_second()
                .to_angular_velocity(0.0_f64.meters())
                .radians_per_second()
                .is_infinite()
        );
    }

    #[test]
    fn wheel_speed_conversions() {
        let omega = 3.0_f64.meters_per_second().to_angular_velocity(1.5_f64.meters());
        assert!(close(omega.radians_per_second(), 2.0));

        let speed = 2.0_f64.radians_per_second().to_linear_velocity(1.5_f64.meters());
        assert!(close(speed.meters_per_second(), 3.0));
    }

    #[test]
    fn rates_per_second() {
        let jerk = 5.0_f64
            .rotations_per_second_per_second()
            .per(1.0_f64.seconds());
        assert!(close(jerk.rotations_per_second_cubed(), 5.0));

        let ramp = 12.0_f64.volts() / 500.0_f64.milliseconds();
        assert!(close(ramp.volts_per_second(), 24.0));

        let travelled = 2.0_f64.feet_per_second() * 1.5_f64.seconds();
        assert!(close(travelled.feet(), 3.0));
    }
}
