use core::f64::consts::{PI, TAU};

const INCH: f64 = 0.0254;
const FOOT: f64 = 0.3048;
const POUND: f64 = 0.453_592_37;
const DEGREE: f64 = PI / 180.0;

quantity! {
    /// A length.
    Distance / DistanceUnit / DistanceExt {
        Meters => 1.0, "m", meters;
        Centimeters => 0.01, "cm", centimeters;
        Millimeters => 0.001, "mm", millimeters;
        Inches => INCH, "in", inches;
        Feet => FOOT, "ft", feet;
    }
}

quantity! {
    /// A span of time.
    Time / TimeUnit / TimeExt {
        Seconds => 1.0, "s", seconds;
        Milliseconds => 0.001, "ms", milliseconds;
        Minutes => 60.0, "min", minutes;
    }
}

quantity! {
    LinearVelocity / LinearVelocityUnit / LinearVelocityExt {
        MetersPerSecond => 1.0, "m/s", meters_per_second;
        InchesPerSecond => INCH, "in/s", inches_per_second;
        FeetPerSecond => FOOT, "ft/s", feet_per_second;
    }
}

quantity! {
    LinearAcceleration / LinearAccelerationUnit / LinearAccelerationExt {
        MetersPerSecondPerSecond => 1.0, "m/s²", meters_per_second_per_second;
        FeetPerSecondPerSecond => FOOT, "ft/s²", feet_per_second_per_second;
    }
}

quantity! {
    /// An electric potential.
    Voltage / VoltageUnit / VoltageExt {
        Volts => 1.0, "V", volts;
        Millivolts => 0.001, "mV", millivolts;
    }
}

quantity! {
    /// How quickly a voltage changes, e.g. a ramp rate.
    VoltageRate / VoltageRateUnit / VoltageRateExt {
        VoltsPerSecond => 1.0, "V/s", volts_per_second;
    }
}

quantity! {
    /// An electric current.
    Current / CurrentUnit / CurrentExt {
        Amps => 1.0, "A", amps;
        Milliamps => 0.001, "mA", milliamps;
    }
}

quantity! {
    Angle / AngleUnit / AngleExt {
        Radians => 1.0, "rad", radians;
        Degrees => DEGREE, "°", degrees;
        Rotations => TAU, "rot", rotations;
    }
}

quantity! {
    AngularVelocity / AngularVelocityUnit / AngularVelocityExt {
        RadiansPerSecond => 1.0, "rad/s", radians_per_second;
        DegreesPerSecond => DEGREE, "°/s", degrees_per_second;
        RotationsPerSecond => TAU, "rot/s", rotations_per_second;
        Rpm => TAU / 60.0, "RPM", rpm;
    }
}

quantity! {
    AngularAcceleration / AngularAccelerationUnit / AngularAccelerationExt {
        RadiansPerSecondPerSecond => 1.0, "rad/s²", radians_per_second_per_second;
        DegreesPerSecondPerSecond => DEGREE, "°/s²", degrees_per_second_per_second;
        RotationsPerSecondPerSecond => TAU, "rot/s²", rotations_per_second_per_second;
    }
}

quantity! {
    /// Rate of change of an angular acceleration, used for motion profile limits.
    AngularJerk / AngularJerkUnit / AngularJerkExt {
        RadiansPerSecondCubed => 1.0, "rad/s³", radians_per_second_cubed;
        RotationsPerSecondCubed => TAU, "rot/s³", rotations_per_second_cubed;
    }
}

quantity! {
    Mass / MassUnit / MassExt {
        Kilograms => 1.0, "kg", kilograms;
        Grams => 0.001, "g", grams;
        Pounds => POUND, "lb", pounds;
    }
}

quantity! {
    /// Resistance to angular acceleration, mass × distance².
    MomentOfInertia / MomentOfInertiaUnit / MomentOfInertiaExt {
        KilogramSquareMeters => 1.0, "kg·m²", kilogram_square_meters;
        PoundSquareInches => POUND * INCH * INCH, "lb·in²", pound_square_inches;
    }
}
