//! Strict wrappers over primitive floating-point types.
//!
//! The remainder operator `%` of floating-point wrappers is the remainder of the representation,
//! which has the sign of the dividend and the semantics of C's `fmod`.

/// Defines a strict wrapper over a primitive floating-point type.
///
/// The wrapper may be constructed implicitly (via `From`) only from the types listed after `from`.
/// Each listed type must be a primitive floating-point type or a strict floating-point wrapper.
/// When no list is given, the representation is the only qualified source.
///
/// # Examples
///
/// ```rust
/// use stricture::float;
///
/// float! {
///     /// A probability.
///     pub struct Probability(f64) from f64, f32;
/// }
///
/// let p = Probability::from(0.25f32);
/// assert_eq!(p * 2.0, 0.5);
/// assert_eq!(Probability::new(10.0) % 5.4, 10.0f64 % 5.4);
/// assert!(Probability::NAN.is_nan());
/// ```
///
/// Integers are not qualified, even when they convert exactly.
///
/// ```rust,compile_fail
/// use stricture::float;
///
/// float! {
///     pub struct Probability(f64);
/// }
///
/// let p = Probability::new(0.5) + 1i32;
/// ```
#[macro_export]
macro_rules! float {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($repr:ty);) => {
        $crate::float! {
            $(#[$attr])*
            $vis struct $name($repr) from $repr;
        }
    };
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident($repr:ty) from $($source:ty),+ $(,)?;
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Default)]
        #[repr(transparent)]
        $vis struct $name {
            value: $repr,
        }

        $crate::__scalar!(
            definition => $name,
            $repr,
            $crate::kind::FloatKind,
            float,
            [$($source),+],
            [f32, f64],
        );
        $crate::__float!(definition => $name, $repr);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __float {
    (definition => $name:ident, $repr:ty) => {
        impl $name {
            /// The smallest positive normal value.
            pub const MIN_POSITIVE: Self =
                $name::new(<$repr as $crate::FloatPrimitive>::MIN_POSITIVE);
            /// The smallest positive subnormal value.
            pub const DENORM_MIN: Self =
                $name::new(<$repr as $crate::FloatPrimitive>::DENORM_MIN);
            pub const EPSILON: Self = $name::new(<$repr as $crate::FloatPrimitive>::EPSILON);
            pub const INFINITY: Self = $name::new(<$repr as $crate::FloatPrimitive>::INFINITY);
            pub const NEG_INFINITY: Self =
                $name::new(<$repr as $crate::FloatPrimitive>::NEG_INFINITY);
            /// A quiet `NaN`.
            pub const NAN: Self = $name::new(<$repr as $crate::FloatPrimitive>::NAN);
            /// A signaling `NaN`.
            pub const SIGNALING_NAN: Self =
                $name::new(<$repr as $crate::FloatPrimitive>::SIGNALING_NAN);

            $crate::__float!(
                predicate =>
                is_nan,
                is_infinite,
                is_finite,
                is_normal,
                is_sign_positive,
                is_sign_negative,
            );
            $crate::__float!(
                unary => $name;
                abs,
                signum,
                floor,
                ceil,
                round,
                trunc,
                fract,
                recip,
                to_degrees,
                to_radians,
            );

            pub fn classify(self) -> ::core::num::FpCategory {
                $crate::__private::num_traits::float::FloatCore::classify(self.value)
            }

            pub fn powi(self, exponent: i32) -> Self {
                $name::new($crate::__private::num_traits::float::FloatCore::powi(
                    self.value, exponent,
                ))
            }

            pub fn min(self, other: Self) -> Self {
                $name::new($crate::__private::num_traits::float::FloatCore::min(
                    self.value,
                    other.value,
                ))
            }

            pub fn max(self, other: Self) -> Self {
                $name::new($crate::__private::num_traits::float::FloatCore::max(
                    self.value,
                    other.value,
                ))
            }
        }

        $crate::__float_std!(definition => $name);

        impl ::core::ops::Neg for $name {
            type Output = $name;

            fn neg(self) -> Self::Output {
                $name::new(-self.value)
            }
        }

        impl $crate::__private::num_traits::Signed for $name {
            fn abs(&self) -> Self {
                $name::new($crate::__private::num_traits::Signed::abs(&self.value))
            }

            fn abs_sub(&self, other: &Self) -> Self {
                $name::new($crate::__private::num_traits::Signed::abs_sub(
                    &self.value,
                    &other.value,
                ))
            }

            fn signum(&self) -> Self {
                $name::new($crate::__private::num_traits::Signed::signum(&self.value))
            }

            fn is_positive(&self) -> bool {
                $crate::__private::num_traits::Signed::is_positive(&self.value)
            }

            fn is_negative(&self) -> bool {
                $crate::__private::num_traits::Signed::is_negative(&self.value)
            }
        }

        $crate::__scalar!(forward_format => $name; LowerExp, UpperExp);
        $crate::__approx!(float => $name, $repr);
    };
    (predicate => $($method:ident),+ $(,)?) => {
        $(
            pub fn $method(self) -> bool {
                $crate::__private::num_traits::float::FloatCore::$method(self.value)
            }
        )+
    };
    (unary => $name:ident; $($method:ident),+ $(,)?) => {
        $(
            pub fn $method(self) -> Self {
                $name::new($crate::__private::num_traits::float::FloatCore::$method(self.value))
            }
        )+
    };
}

#[cfg(feature = "std")]
#[doc(hidden)]
#[macro_export]
macro_rules! __float_std {
    (definition => $name:ident) => {
        impl $name {
            $crate::__float_std!(
                unary => $name;
                sqrt,
                cbrt,
                exp,
                exp2,
                ln,
                log2,
                log10,
                sin,
                cos,
                tan,
                asin,
                acos,
                atan,
                sinh,
                cosh,
                tanh,
            );
            $crate::__float_std!(binary => $name; powf, hypot, atan2, log);

            pub fn mul_add(self, a: Self, b: Self) -> Self {
                $name::new($crate::__private::num_traits::Float::mul_add(
                    self.value,
                    a.value,
                    b.value,
                ))
            }
        }
    };
    (unary => $name:ident; $($method:ident),+ $(,)?) => {
        $(
            pub fn $method(self) -> Self {
                $name::new($crate::__private::num_traits::Float::$method(self.value))
            }
        )+
    };
    (binary => $name:ident; $($method:ident),+ $(,)?) => {
        $(
            pub fn $method(self, other: Self) -> Self {
                $name::new($crate::__private::num_traits::Float::$method(self.value, other.value))
            }
        )+
    };
}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __float_std {
    (definition => $name:ident) => {};
}

#[cfg(feature = "approx")]
#[doc(hidden)]
#[macro_export]
macro_rules! __approx {
    (float => $name:ident, $repr:ty) => {
        impl $crate::__private::approx::AbsDiffEq for $name {
            type Epsilon = $name;

            fn default_epsilon() -> Self::Epsilon {
                $name::new(<$repr as $crate::__private::approx::AbsDiffEq>::default_epsilon())
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $crate::__private::approx::AbsDiffEq::abs_diff_eq(
                    &self.value,
                    &other.value,
                    epsilon.value,
                )
            }
        }

        impl $crate::__private::approx::RelativeEq for $name {
            fn default_max_relative() -> Self::Epsilon {
                $name::new(<$repr as $crate::__private::approx::RelativeEq>::default_max_relative())
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $crate::__private::approx::RelativeEq::relative_eq(
                    &self.value,
                    &other.value,
                    epsilon.value,
                    max_relative.value,
                )
            }
        }

        impl $crate::__private::approx::UlpsEq for $name {
            fn default_max_ulps() -> u32 {
                <$repr as $crate::__private::approx::UlpsEq>::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                $crate::__private::approx::UlpsEq::ulps_eq(
                    &self.value,
                    &other.value,
                    epsilon.value,
                    max_ulps,
                )
            }
        }
    };
}

#[cfg(not(feature = "approx"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __approx {
    (float => $name:ident, $repr:ty) => {};
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;
    use core::num::FpCategory;
    use num_traits::{Signed, Zero};

    use crate::stringify::Stringify;

    crate::float! {
        struct Ratio(f64) from f64, f32;
    }

    crate::float! {
        struct Scale(f64);
    }

    crate::float! {
        struct Narrow(f32);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn arithmetic_matches_representation() {
        let a = Ratio::new(7.5);
        let b = Ratio::new(2.5);

        assert_eq!(a + b, 7.5 + 2.5);
        assert_eq!(a - b, 7.5 - 2.5);
        assert_eq!(a * b, 7.5 * 2.5);
        assert_eq!(a / b, 7.5 / 2.5);
        assert_eq!(-a, -7.5);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn remainder_is_fmod() {
        assert_eq!(Ratio::new(10.0) % Ratio::new(5.4), 10.0f64 % 5.4);
        assert_eq!(Ratio::new(-10.0) % 5.4, -10.0f64 % 5.4);
        assert_eq!(10.0f64 % Ratio::new(5.4), 10.0f64 % 5.4);
        assert!((Ratio::new(1.0) % 0.0).is_nan());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn mixed_operands_follow_left_type() {
        let a = Ratio::new(1.5);
        let b = Scale::new(2.0);

        let x: Ratio = a * b;
        let y: Scale = b * a;
        let z: f32 = 2.0f32 * a;
        let w: Narrow = Narrow::new(1.0) + a;
        assert_eq!(x, 3.0);
        assert_eq!(y, 3.0);
        assert_eq!(z, 3.0f32);
        assert_eq!(w, 2.5f32);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn compound_assignment_and_increment() {
        let mut a = Ratio::new(1.0);
        a += 0.5;
        a *= Scale::new(4.0);
        a /= 2.0f32;
        assert_eq!(a, 3.0);

        let previous = a.post_increment();
        assert_eq!(previous, 3.0);
        assert_eq!(a, 4.0);
        assert_eq!(*a.decrement(), 3.0);

        let mut x = 1.0f64;
        x -= Ratio::new(0.25);
        assert_eq!(x, 0.75);
    }

    #[test]
    fn comparison() {
        assert!(Ratio::new(1.0) < Scale::new(2.0));
        assert!(Ratio::new(1.0) >= 1.0);
        assert!(0.5f64 < Ratio::new(1.0));
        assert!(Ratio::NAN != Ratio::NAN);
        assert!(Ratio::NAN.partial_cmp(&Ratio::ZERO).is_none());
    }

    #[test]
    fn comparison_across_representations() {
        let narrow = Narrow::new(1.0);
        let wide = Ratio::new(1.0 + 1e-12);

        assert!(narrow != wide);
        assert!(wide != narrow);
        assert!(narrow < wide);
        assert!(wide > narrow);
        assert!(1.0f32 < wide);
        assert!(wide > 1.0f32);
        assert!(Narrow::new(0.1) == 0.1f32);
        assert!(Narrow::new(0.1) != 0.1f64);
        assert!(Narrow::MAX < Ratio::MAX);
        assert!(Narrow::INFINITY > Ratio::MAX);
        assert!(Narrow::NAN.partial_cmp(&Ratio::ZERO).is_none());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn arithmetic_across_representations() {
        assert_eq!(Narrow::new(1.0) + 1e-12f64, 1.0f32);
        assert_eq!(Narrow::new(3.0) / Ratio::new(1e-40), (3.0f64 / 1e-40) as f32);
        assert_eq!(Narrow::new(0.1) * Narrow::new(3.0), 0.1f32 * 3.0);
        assert_eq!(1.0f32 / Ratio::new(3.0), 1.0f32 / 3.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn bounds() {
        assert_eq!(Ratio::MIN, f64::MIN);
        assert_eq!(Ratio::MAX, f64::MAX);
        assert_eq!(Ratio::MIN_POSITIVE, f64::MIN_POSITIVE);
        assert_eq!(Ratio::EPSILON, f64::EPSILON);
        assert_eq!(Narrow::INFINITY, f32::INFINITY);
        assert_eq!(Narrow::NEG_INFINITY, f32::NEG_INFINITY);
        assert_eq!(Ratio::DENORM_MIN.classify(), FpCategory::Subnormal);
        assert!(Ratio::SIGNALING_NAN.is_nan());
        assert!(Ratio::default().is_zero());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn rounding_and_sign() {
        let a = Ratio::new(-2.75);

        assert_eq!(a.abs(), 2.75);
        assert_eq!(a.floor(), -3.0);
        assert_eq!(a.ceil(), -2.0);
        assert_eq!(a.round(), -3.0);
        assert_eq!(a.trunc(), -2.0);
        assert_eq!(a.fract(), -0.75);
        assert_eq!(a.powi(2), 7.5625);
        assert_eq!(a.min(Ratio::ZERO), a);
        assert!(Signed::is_negative(&a));
        assert!(a.is_sign_negative());
    }

    #[cfg(feature = "std")]
    #[test]
    #[allow(clippy::float_cmp)]
    fn transcendental() {
        assert_eq!(Ratio::new(9.0).sqrt(), 3.0);
        assert_eq!(Ratio::new(2.0).powf(Ratio::new(3.0)), 8.0);
        assert_eq!(Ratio::new(0.0).exp(), 1.0);
        assert_eq!(Ratio::new(1.0).ln(), 0.0);
        assert_eq!(Ratio::new(2.0).mul_add(Ratio::new(3.0), Ratio::new(1.0)), 7.0);
    }

    #[cfg(feature = "approx")]
    #[test]
    fn approximate_equality() {
        use approx::{assert_abs_diff_eq, assert_relative_eq, assert_ulps_eq};

        let a = Ratio::new(0.1) + 0.2;
        assert_abs_diff_eq!(a, Ratio::new(0.3));
        assert_relative_eq!(a, Ratio::new(0.3));
        assert_ulps_eq!(a, Ratio::new(0.3));
    }

    #[test]
    fn formatting() {
        let a = Ratio::new(1.5);

        assert_eq!(a.to_string(), 1.5f64.to_string());
        assert_eq!(a.stringify(), "1.5");
        assert_eq!(format!("{:.3}", a), "1.500");
        assert_eq!(format!("{:e}", Ratio::new(1500.0)), "1.5e3");
        assert_eq!(format!("{:?}", a), "Ratio(1.5)");
        assert_eq!(Ratio::NAN.stringify(), f64::NAN.to_string());
    }

    #[cfg(feature = "serde")]
    #[test]
    #[allow(clippy::float_cmp)]
    fn serialize_as_representation() {
        let json = serde_json::to_string(&Ratio::new(0.5)).unwrap();
        assert_eq!(json, "0.5");
        let a: Ratio = serde_json::from_str("2.25").unwrap();
        assert_eq!(a, 2.25);
    }
}
