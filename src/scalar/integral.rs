//! Strict wrappers over primitive integers.

/// Defines a strict wrapper over a primitive integer.
///
/// The wrapper may be constructed implicitly (via `From`) only from the types listed after `from`.
/// Each listed type must be a primitive integer or a strict integral wrapper. When no list is
/// given, the representation is the only qualified source.
///
/// # Examples
///
/// ```rust
/// use stricture::integral;
///
/// integral! {
///     /// A count of items.
///     pub struct Count(u32);
/// }
///
/// integral! {
///     pub struct Index(usize) from usize, u32, Count;
/// }
///
/// let count = Count::new(3);
/// let index = Index::from(count);
/// assert_eq!(index, 3usize);
/// assert_eq!(index << 2u8, 12usize);
/// ```
///
/// Only integral types may be listed.
///
/// ```rust,compile_fail
/// use stricture::integral;
///
/// integral! {
///     pub struct Count(u32) from u32, f32;
/// }
/// ```
#[macro_export]
macro_rules! integral {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($repr:ty);) => {
        $crate::integral! {
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
            $crate::kind::IntegralKind,
            integral,
            [$($source),+],
            [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize],
        );
        $crate::__integral!(
            definition => $name,
            $repr,
            [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize],
        );
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __integral {
    (definition => $name:ident, $repr:ty, [$($native:ty),+] $(,)?) => {
        impl $name {
            pub const BITS: u32 = <$repr as $crate::IntegralPrimitive>::BITS;

            pub fn count_ones(self) -> u32 {
                $crate::__private::num_traits::PrimInt::count_ones(self.value)
            }

            pub fn count_zeros(self) -> u32 {
                $crate::__private::num_traits::PrimInt::count_zeros(self.value)
            }

            pub fn leading_zeros(self) -> u32 {
                $crate::__private::num_traits::PrimInt::leading_zeros(self.value)
            }

            pub fn trailing_zeros(self) -> u32 {
                $crate::__private::num_traits::PrimInt::trailing_zeros(self.value)
            }

            pub fn pow(self, exponent: u32) -> Self {
                $name::new($crate::__private::num_traits::PrimInt::pow(self.value, exponent))
            }
        }

        $crate::__scalar!(
            binary => $name, zip_map_bits;
            BitAnd::bitand, BitAndAssign::bitand_assign => ::core::ops::BitAnd::bitand;
            BitOr::bitor, BitOrAssign::bitor_assign => ::core::ops::BitOr::bitor;
            BitXor::bitxor, BitXorAssign::bitxor_assign => ::core::ops::BitXor::bitxor;
        );
        $crate::__scalar!(
            binary => $name, zip_map_shift;
            Shl::shl, ShlAssign::shl_assign => ::core::ops::Shl::shl;
            Shr::shr, ShrAssign::shr_assign => ::core::ops::Shr::shr;
        );
        $(
            $crate::__scalar!(
                primitive_binary => $name, $native, zip_map_bits;
                BitAnd::bitand, BitAndAssign::bitand_assign => ::core::ops::BitAnd::bitand;
                BitOr::bitor, BitOrAssign::bitor_assign => ::core::ops::BitOr::bitor;
                BitXor::bitxor, BitXorAssign::bitxor_assign => ::core::ops::BitXor::bitxor;
            );
            $crate::__scalar!(
                primitive_binary => $name, $native, zip_map_shift;
                Shl::shl, ShlAssign::shl_assign => ::core::ops::Shl::shl;
                Shr::shr, ShrAssign::shr_assign => ::core::ops::Shr::shr;
            );
        )+

        impl ::core::ops::Not for $name {
            type Output = $name;

            fn not(self) -> Self::Output {
                $name::new(!self.value)
            }
        }

        impl ::core::ops::Neg for $name {
            type Output = $name;

            fn neg(self) -> Self::Output {
                $name::new($crate::IntegralPrimitive::negate(self.value))
            }
        }

        impl ::core::cmp::Eq for $name {}

        impl ::core::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                ::core::cmp::Ord::cmp(&self.value, &other.value)
            }
        }

        impl ::core::hash::Hash for $name {
            fn hash<H>(&self, state: &mut H)
            where
                H: ::core::hash::Hasher,
            {
                ::core::hash::Hash::hash(&self.value, state)
            }
        }

        $crate::__scalar!(forward_format => $name; Binary, LowerHex, Octal, UpperHex);
    };
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use core::hash::{Hash, Hasher};
    use core::str::FromStr;
    use num_traits::{Bounded, Num, NumCast, ToPrimitive, Zero};

    use crate::error::CastError;
    use crate::stringify::Stringify;

    crate::integral! {
        struct Distance(i64) from i64, i32;
    }

    crate::integral! {
        struct Weight(i64);
    }

    crate::integral! {
        struct Mask(u8);
    }

    #[test]
    fn arithmetic_matches_representation() {
        let a = Distance::new(17);
        let b = Distance::new(5);

        assert_eq!(a + b, 17 + 5);
        assert_eq!(a - b, 17 - 5);
        assert_eq!(a * b, 17 * 5);
        assert_eq!(a / b, 17 / 5);
        assert_eq!(a % b, 17 % 5);
        assert_eq!(-a, -17);
        assert_eq!(Distance::new(-17) % b, -17 % 5);
    }

    #[test]
    fn bitwise_matches_representation() {
        let a = Mask::new(0b1100);
        let b = Mask::new(0b1010);

        assert_eq!(a & b, 0b1000);
        assert_eq!(a | b, 0b1110);
        assert_eq!(a ^ b, 0b0110);
        assert_eq!(a << 2, 0b11_0000);
        assert_eq!(a >> Mask::new(2), 0b11);
        assert_eq!(!a, !0b1100u8);
        assert_eq!(-Mask::new(1), u8::MAX);
    }

    #[test]
    fn wrapper_on_left_yields_wrapper() {
        let a = Distance::new(40);
        let b = Weight::new(2);

        let x: Distance = a + b;
        let y: Weight = b + a;
        let z: Distance = a + 2i8;
        assert_eq!(x, 42);
        assert_eq!(y, 42);
        assert_eq!(z, 42);
    }

    // A primitive on the left keeps its own type and drops the identity of the wrapper on the
    // right.
    #[test]
    fn primitive_on_left_yields_primitive() {
        let a = Distance::new(40);

        let x: i64 = 2i64 + a;
        let y: u8 = 2u8 * Distance::new(3);
        let z: i32 = 1i32 << Distance::new(4);
        assert_eq!(x, 42);
        assert_eq!(y, 6);
        assert_eq!(z, 16);
        assert_eq!(a + 2, 2i64 + a);
    }

    #[test]
    fn compound_assignment() {
        let mut a = Distance::new(1);
        a += 2;
        a *= Weight::new(5);
        a -= Distance::new(3);
        a <<= 1u32;
        a |= 1;
        assert_eq!(a, 25);

        let mut x = 10i64;
        x += Distance::new(5);
        x %= Weight::new(4);
        assert_eq!(x, 3);
    }

    #[test]
    fn increment_and_decrement() {
        let mut a = Distance::new(1);
        assert_eq!(*a.increment(), 2);
        assert_eq!(a.post_increment(), 2);
        assert_eq!(a, 3);
        assert_eq!(a.post_decrement(), 3);
        assert_eq!(*a.decrement(), 1);
    }

    #[test]
    fn comparison() {
        let a = Distance::new(1);
        let b = Distance::new(2);

        assert!(a < b);
        assert!(b > 1);
        assert!(0i64 < a);
        assert!(a == Weight::new(1));
        assert!(2u8 == b);
        assert_eq!(a.max(b), b);

        let mut xs: Vec<Distance> = [3, 1, 2].into_iter().map(Distance::new).collect();
        xs.sort();
        assert_eq!(xs, [1, 2, 3].map(Distance::new));
    }

    #[test]
    fn comparison_across_representations() {
        let small = Mask::new(44);
        let large = Distance::new(300);

        assert!(small != large);
        assert!(large != small);
        assert!(small < large);
        assert!(large > small);
        assert!(44u8 != large);
        assert!(large != 44u8);
        assert!(Mask::new(255) != -1i32);
        assert!(Mask::new(255) > -1i32);
        assert!(-1i32 < Mask::new(255));
        assert!(Mask::new(44) < 300i32);
        assert!(Distance::new(-1) < Mask::new(0));
        assert!(Distance::new(44) == small);
        assert!(small == Distance::new(44));
        assert!(Distance::MAX < u64::MAX);
        assert!(u128::MAX > Distance::MAX);
    }

    #[test]
    fn division_by_operand_out_of_range() {
        assert_eq!(Mask::new(5) / 256i32, 0);
        assert_eq!(Mask::new(5) % Distance::new(256), 5);
        assert_eq!(Mask::new(200) / Distance::new(-2), (200i64 / -2) as u8);
        assert_eq!(5u8 / Distance::new(256), 0u8);

        let mut a = Mask::new(5);
        a /= 1000i32;
        assert_eq!(a, 0);
    }

    #[test]
    fn arithmetic_out_of_range_truncates_output() {
        assert_eq!(Mask::new(100) + 300i32, (100i32 + 300) as u8);
        assert_eq!(Mask::new(3) - Distance::new(260), (3i64 - 260) as u8);
        assert_eq!(Mask::new(2) * Distance::new(i64::MAX), (2i128 * i64::MAX as i128) as u8);
    }

    #[test]
    fn shift_amount_is_not_truncated() {
        assert_eq!(Distance::new(1) << Mask::new(40), 1i64 << 40);
        assert_eq!(Mask::new(0x80) >> Distance::new(7), 1);
        assert_eq!(1u8 << Distance::new(3), 8u8);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn shift_amount_out_of_range_overflows() {
        let _ = Mask::new(1) << 256u32;
    }

    #[test]
    fn bounds() {
        assert_eq!(Distance::MIN, i64::MIN);
        assert_eq!(Distance::MAX, i64::MAX);
        assert_eq!(Mask::MAX, u8::MAX);
        assert_eq!(Mask::BITS, 8);
        assert_eq!(Distance::ZERO, 0);
        assert_eq!(<Mask as Bounded>::max_value(), 255u8);
        assert!(Distance::default().is_zero());
    }

    #[test]
    fn conversion_to_representation() {
        let x: i64 = Distance::new(5).into();
        assert_eq!(x, 5);

        let mut a = Distance::new(5);
        *a.as_mut() = 6;
        assert_eq!(*a.as_ref(), 6);
        assert_eq!(a.value(), 6);
        assert_eq!(a.cast::<u8>(), 6u8);
        assert_eq!(a.convert::<Weight>(), 6);
        assert_eq!(Mask::cast_from(Distance::new(257)), 1);
    }

    #[test]
    fn checked_explicit_construction() {
        assert_eq!(Mask::try_cast_from(255i64), Ok(Mask::new(255)));
        assert_eq!(Mask::try_cast_from(256i64), Err(CastError::new("Mask")));
        assert_eq!(
            Mask::try_cast_from(Distance::new(-1)).map_err(|error| error.target()),
            Err("Mask")
        );
        assert_eq!(<Mask as NumCast>::from(3.7f64), Some(Mask::new(3)));
        assert_eq!(Distance::new(-3).to_u32(), None);
    }

    #[test]
    fn formatting() {
        let a = Distance::new(-255);

        assert_eq!(a.to_string(), (-255i64).to_string());
        assert_eq!(a.stringify(), "-255");
        assert_eq!(format!("{:?}", a), "Distance(-255)");
        assert_eq!(format!("{:x}", Mask::new(255)), "ff");
        assert_eq!(format!("{:#b}", Mask::new(5)), "0b101");
        assert_eq!(format!("{:>5}", Mask::new(7)), "    7");
    }

    #[test]
    fn parsing() {
        assert_eq!(Distance::from_str("-12"), Ok(Distance::new(-12)));
        assert!(Mask::from_str("256").is_err());
        assert_eq!(<Mask as Num>::from_str_radix("ff", 16), Ok(Mask::new(255)));
    }

    #[test]
    fn sum_and_product() {
        let xs = [1, 2, 3, 4].map(Distance::new);
        assert_eq!(xs.iter().sum::<Distance>(), 10);
        assert_eq!(xs.into_iter().product::<Distance>(), 24);
    }

    #[test]
    fn hash_matches_representation() {
        #[derive(Default)]
        struct Fnv(u64);

        impl Hasher for Fnv {
            fn finish(&self) -> u64 {
                self.0
            }

            fn write(&mut self, bytes: &[u8]) {
                for byte in bytes {
                    let byte = <u64 as From<u8>>::from(*byte);
                    self.0 = (self.0 ^ byte).wrapping_mul(0x100_0000_01b3);
                }
            }
        }

        let mut wrapped = Fnv::default();
        Distance::new(99).hash(&mut wrapped);
        let mut native = Fnv::default();
        99i64.hash(&mut native);
        assert_eq!(wrapped.finish(), native.finish());
    }

    #[test]
    fn slice_views() {
        let mut xs = [1i64, 2, 3];
        assert_eq!(Distance::from_slice(&xs), &[1, 2, 3].map(Distance::new));

        for x in Distance::from_mut_slice(&mut xs) {
            *x += 1;
        }
        assert_eq!(xs, [2, 3, 4]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_as_representation() {
        let json = serde_json::to_string(&Distance::new(-4)).unwrap();
        assert_eq!(json, "-4");
        let a: Distance = serde_json::from_str("12").unwrap();
        assert_eq!(a, 12);
        assert!(serde_json::from_str::<Mask>("300").is_err());
    }
}
