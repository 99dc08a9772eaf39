use core::f64::consts::PI;

use robot_command::units::{prelude::*, *};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= EPSILON * expected.abs().max(1.0),
        "{actual} is not close to {expected}"
    );
}

const MAGNITUDES: [f64; 9] = [0.0, 1.0, -1.0, 0.5, 12.7, -273.15, 1e-6, 42_000.0, PI];

#[test]
fn five_inches_is_twelve_point_seven_centimeters() {
    assert_close(5.0_f64.inches().centimeters(), 12.7);
    assert_close(5_i32.inches().centimeters(), 12.7);
}

#[test]
fn one_rotation_is_360_degrees() {
    assert_close(1.0_f64.rotations().degrees(), 360.0);
    assert_close(AngleUnit::Rotations.of(0.5).in_units(AngleUnit::Radians), PI);
}

/// Runs `$check` with every unit of every family bound to `$units`.
macro_rules! for_each_family {
    (|$units:ident| $check:block) => {
        for_each_family!(@each $units $check;
            DistanceUnit, TimeUnit, LinearVelocityUnit, LinearAccelerationUnit, VoltageUnit,
            VoltageRateUnit, CurrentUnit, AngleUnit, AngularVelocityUnit,
            AngularAccelerationUnit, AngularJerkUnit, MassUnit, MomentOfInertiaUnit)
    };
    (@each $units:ident $check:block; $($family:ident),+) => {
        $({
            let $units = $family::ALL;
            $check
        })+
    };
}

#[test]
fn raw_round_trip_is_exact() {
    assert_eq!(1.5_f64.inches().inches(), 1.5);
    assert_eq!(3_u8.volts_per_second().volts_per_second(), 3.0);

    for magnitude in MAGNITUDES {
        for_each_family!(|units| {
            for &unit in units {
                assert_eq!(unit.of(magnitude).in_units(unit), magnitude, "{unit}");
            }
        });
    }
}

#[test]
fn cross_unit_round_trip() {
    for magnitude in MAGNITUDES {
        for_each_family!(|units| {
            for &from in units {
                for &to in units {
                    assert_close(from.of(magnitude).to(to).in_units(from), magnitude);
                }
            }
        });
    }
}

#[test]
fn conversion_keeps_the_original_unit() {
    let length = 3.0_f64.feet();
    let meters = length.to(DistanceUnit::Meters);

    assert_eq!(length.unit(), DistanceUnit::Feet);
    assert_eq!(length.magnitude(), 3.0);
    assert_eq!(meters.unit(), DistanceUnit::Meters);
    assert_close(meters.magnitude(), 0.9144);
}

#[test]
fn named_accessors() {
    assert_close(1.0_f64.meters().inches(), 39.370_078_740_157_48);
    assert_close(60.0_f64.rpm().rotations_per_second(), 1.0);
    assert_close(1.0_f64.rotations_per_second().radians_per_second(), 2.0 * PI);
    assert_close(
        1.0_f64
            .rotations_per_second_per_second()
            .radians_per_second_per_second(),
        2.0 * PI,
    );
    assert_close(10.0_f64.feet_per_second().meters_per_second(), 3.048);
    assert_close(4.0_f64.inches_per_second().meters_per_second(), 0.1016);
    assert_close(9.81_f64.meters_per_second_per_second().meters_per_second_per_second(), 9.81);
    assert_close(12_000_u32.millivolts().volts(), 12.0);
    assert_close(40.0_f32.amps().amps(), 40.0);
    assert_close(1.0_f64.pounds().kilograms(), 0.453_592_37);
    assert_close(2.0_f64.kilogram_square_meters().kilogram_square_meters(), 2.0);
    assert_close(250_i64.milliseconds().seconds(), 0.25);
}

#[test]
fn pound_square_inches_is_mass_times_length_squared() {
    let inertia = 1.0_f64.pound_square_inches();
    let expected = 1.0_f64.pounds().kilograms() * 1.0_f64.inches().meters().powi(2);
    assert_close(inertia.kilogram_square_meters(), expected);
    assert_close(inertia.kilogram_square_meters(), 2.926_396_534_292e-4);
}

#[test]
fn no_validation_on_magnitudes() {
    assert_eq!((-2.0_f64).pounds().pounds(), -2.0);
    assert!(f64::INFINITY.meters_per_second().meters_per_second().is_infinite());
    assert!(f64::NAN.degrees().radians().is_nan());
}

#[test]
fn equality_and_ordering_compare_values() {
    assert_close(1.0_f64.rotations() / 360.0_f64.degrees(), 1.0);
    assert_eq!(1.0_f64.minutes(), 60.0_f64.seconds());
    assert_ne!(1.0_f64.feet(), 1.0_f64.meters());
    assert!(1.0_f64.feet() < 1.0_f64.meters());
    assert!(1.0_f64.minutes() > 59.0_f64.seconds());
}

#[test]
fn equivalence_ignores_float_rounding() {
    let foot = 1.0_f64.feet();
    let twelve_inches = 12.0_f64.inches();

    assert!(twelve_inches.is_equivalent(foot));
    assert!(3.0_f64.feet().is_equivalent(36.0_f64.inches()));
    assert!((0.1_f64.meters() + 0.2_f64.meters()).is_equivalent(0.3_f64.meters()));
    assert!(60.0_f64.rpm().is_equivalent(1.0_f64.rotations_per_second()));
    assert!(0.0_f64.volts().is_equivalent(0.0_f64.millivolts()));

    assert!(!foot.is_equivalent(1.0_f64.meters()));
    assert!(!1.0_f64.seconds().is_equivalent(1.000_001_f64.seconds()));
    assert!(!f64::NAN.amps().is_equivalent(f64::NAN.amps()));
}

#[test]
fn arithmetic_keeps_the_left_unit() {
    let total = 1.0_f64.meters() + 50.0_f64.centimeters();
    assert_eq!(total.unit(), DistanceUnit::Meters);
    assert_close(total.magnitude(), 1.5);

    let left = 90.0_f64.degrees() - 0.25_f64.rotations();
    assert_close(left.degrees(), 0.0);

    assert_close((-(2.0_f64.volts()) * 3.0).volts(), -6.0);
    assert_close((2.0 * 3.0_f64.amps()).amps(), 6.0);
    assert_close((10.0_f64.kilograms() / 4.0).kilograms(), 2.5);
}

#[test]
fn display_uses_the_unit_symbol() {
    assert_eq!(5.0_f64.inches().to_string(), "5 in");
    assert_eq!(format!("{:.2}", PI.radians()), "3.14 rad");
    assert_eq!(3000.0_f64.rpm().to_string(), "3000 RPM");
    assert_eq!(AngularVelocityUnit::DegreesPerSecond.to_string(), "°/s");
}
