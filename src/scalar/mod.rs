//! Strict wrappers over primitive numeric types.
//!
//! Scalar wrappers are defined with the [`integral!`] and [`float!`] macros. A definition names the
//! wrapper, its primitive representation, and optionally the types that may construct it
//! implicitly. Each definition produces a `#[repr(transparent)]` newtype with the following
//! behavior.
//!
//! - **Construction**: `From` is implemented only for the qualified sources (by default the
//!   representation alone). `new` constructs from the representation, `cast_from` constructs from
//!   anything that converts to the representation with `as` semantics, and `try_cast_from`
//!   constructs only when the value is representable.
//! - **Conversion**: `From<Wrapper>` is implemented for the representation. `cast` and `convert`
//!   convert to other primitives and wrappers. `AsPrimitive` is implemented for all primitive
//!   targets.
//! - **Operators**: arithmetic, comparison, and compound assignment with a wrapper on either side
//!   (see [`operand`]). Integral wrappers add bitwise operators and shifts.
//! - **Bounds**: numeric limits are associated constants (`MIN`, `MAX`, etc.).
//! - **Formatting**: `Display` and the numeric formatting traits forward to the representation.
//!   `Debug` writes `Name(value)`.
//!
//! [`float!`]: crate::float!
//! [`integral!`]: crate::integral!
//! [`operand`]: crate::operand

pub mod float;
pub mod integral;

#[doc(hidden)]
#[macro_export]
macro_rules! __scalar {
    (
        definition => $name:ident,
        $repr:ty,
        $kind:ty,
        $convert:ident,
        [$($source:ty),+],
        [$($native:ty),+] $(,)?
    ) => {
        $crate::__scalar!(strict => $name, $repr, $kind);
        $crate::__scalar!(construction => $name, $repr);
        $(
            $crate::__scalar!(qualified => $name, $repr, $convert, $source);
        )+
        $crate::__scalar!(conversion => $name, $repr);
        $crate::__scalar!(format => $name);
        $crate::__scalar!(num_traits => $name, $repr);
        $crate::__scalar!(iter => $name);
        $crate::__scalar!(
            binary => $name, zip_map;
            Add::add, AddAssign::add_assign => $crate::operand::Addition;
            Div::div, DivAssign::div_assign => $crate::operand::Division;
            Mul::mul, MulAssign::mul_assign => $crate::operand::Multiplication;
            Rem::rem, RemAssign::rem_assign => $crate::operand::Remainder;
            Sub::sub, SubAssign::sub_assign => $crate::operand::Subtraction;
        );
        $crate::__scalar!(comparison => $name);
        $(
            $crate::__scalar!(
                primitive_binary => $name, $native, zip_map;
                Add::add, AddAssign::add_assign => $crate::operand::Addition;
                Div::div, DivAssign::div_assign => $crate::operand::Division;
                Mul::mul, MulAssign::mul_assign => $crate::operand::Multiplication;
                Rem::rem, RemAssign::rem_assign => $crate::operand::Remainder;
                Sub::sub, SubAssign::sub_assign => $crate::operand::Subtraction;
            );
            $crate::__scalar!(primitive_comparison => $name, $native);
        )+
        $crate::__serde!(scalar => $name, $repr);
    };
    (strict => $name:ident, $repr:ty, $kind:ty) => {
        impl $crate::kind::Strict for $name {
            type Kind = $kind;
            type Repr = $repr;

            const NAME: &'static str = ::core::stringify!($name);

            fn from_repr(repr: $repr) -> Self {
                $name { value: repr }
            }

            fn into_repr(self) -> $repr {
                self.value
            }

            fn as_repr(&self) -> &$repr {
                &self.value
            }

            fn as_repr_mut(&mut self) -> &mut $repr {
                &mut self.value
            }
        }
    };
    (construction => $name:ident, $repr:ty) => {
        impl $name {
            pub const ZERO: Self = $name {
                value: <$repr as $crate::Primitive>::ZERO,
            };
            pub const ONE: Self = $name {
                value: <$repr as $crate::Primitive>::ONE,
            };
            /// The lowest finite value.
            pub const MIN: Self = $name {
                value: <$repr as $crate::Primitive>::MIN,
            };
            /// The greatest finite value.
            pub const MAX: Self = $name {
                value: <$repr as $crate::Primitive>::MAX,
            };

            /// Constructs a wrapper from its representation.
            pub const fn new(value: $repr) -> Self {
                $name { value }
            }

            /// Gets the representation of the wrapper.
            pub const fn value(self) -> $repr {
                self.value
            }

            /// Constructs a wrapper from any value that converts to its representation with `as`
            /// semantics, including other wrappers.
            pub fn cast_from<S>(source: S) -> Self
            where
                S: $crate::__private::num_traits::AsPrimitive<$repr>,
            {
                $name {
                    value: $crate::__private::num_traits::AsPrimitive::as_(source),
                }
            }

            /// Constructs a wrapper from a value if that value is representable.
            ///
            /// # Errors
            ///
            /// Returns an error if the value is out of the range of the representation.
            pub fn try_cast_from<S>(source: S) -> ::core::result::Result<Self, $crate::CastError>
            where
                S: $crate::__private::num_traits::ToPrimitive,
            {
                <$repr as $crate::__private::num_traits::NumCast>::from(source)
                    .map($name::new)
                    .ok_or_else(|| $crate::CastError::new(::core::stringify!($name)))
            }

            /// Converts the representation to a primitive with `as` semantics.
            pub fn cast<U>(self) -> U
            where
                U: 'static + ::core::marker::Copy,
                $repr: $crate::__private::num_traits::AsPrimitive<U>,
            {
                $crate::__private::num_traits::AsPrimitive::as_(self.value)
            }

            /// Converts the wrapper into another wrapper with `as` semantics.
            pub fn convert<W>(self) -> W
            where
                W: $crate::kind::Strict,
                W::Repr: 'static + ::core::marker::Copy,
                $repr: $crate::__private::num_traits::AsPrimitive<W::Repr>,
            {
                W::from_repr($crate::__private::num_traits::AsPrimitive::as_(self.value))
            }

            /// Adds one to the wrapper and returns it.
            pub fn increment(&mut self) -> &mut Self {
                self.value = self.value + <$repr as $crate::Primitive>::ONE;
                self
            }

            /// Subtracts one from the wrapper and returns it.
            pub fn decrement(&mut self) -> &mut Self {
                self.value = self.value - <$repr as $crate::Primitive>::ONE;
                self
            }

            /// Adds one to the wrapper and returns its previous value.
            pub fn post_increment(&mut self) -> Self {
                let previous = *self;
                self.increment();
                previous
            }

            /// Subtracts one from the wrapper and returns its previous value.
            pub fn post_decrement(&mut self) -> Self {
                let previous = *self;
                self.decrement();
                previous
            }

            /// Converts a slice of representations into a slice of wrappers.
            pub fn from_slice<'a>(slice: &'a [$repr]) -> &'a [Self] {
                // SAFETY: The wrapper is `repr(transparent)` and has the same binary
                //         representation as its representation type.
                unsafe { ::core::mem::transmute::<&'a [$repr], &'a [Self]>(slice) }
            }

            /// Converts a mutable slice of representations into a mutable slice of wrappers.
            pub fn from_mut_slice<'a>(slice: &'a mut [$repr]) -> &'a mut [Self] {
                // SAFETY: The wrapper is `repr(transparent)` and has the same binary
                //         representation as its representation type.
                unsafe { ::core::mem::transmute::<&'a mut [$repr], &'a mut [Self]>(slice) }
            }
        }
    };
    (qualified => $name:ident, $repr:ty, $convert:ident, $source:ty) => {
        impl ::core::convert::From<$source> for $name {
            fn from(source: $source) -> Self {
                $name {
                    value: $crate::qualify::$convert::<$source, $repr>(source),
                }
            }
        }

        impl $crate::qualify::Qualified<$source> for $name {}
    };
    (conversion => $name:ident, $repr:ty) => {
        impl ::core::convert::AsRef<$repr> for $name {
            fn as_ref(&self) -> &$repr {
                &self.value
            }
        }

        impl ::core::convert::AsMut<$repr> for $name {
            fn as_mut(&mut self) -> &mut $repr {
                &mut self.value
            }
        }

        impl ::core::convert::From<$name> for $repr {
            fn from(wrapper: $name) -> Self {
                wrapper.value
            }
        }

        impl<U> $crate::__private::num_traits::AsPrimitive<U> for $name
        where
            U: 'static + ::core::marker::Copy,
            $repr: $crate::__private::num_traits::AsPrimitive<U>,
        {
            fn as_(self) -> U {
                $crate::__private::num_traits::AsPrimitive::as_(self.value)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = <$repr as ::core::str::FromStr>::Err;

            fn from_str(text: &str) -> ::core::result::Result<Self, Self::Err> {
                <$repr as ::core::str::FromStr>::from_str(text).map($name::new)
            }
        }
    };
    (format => $name:ident) => {
        impl ::core::fmt::Debug for $name {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                formatter
                    .debug_tuple(::core::stringify!($name))
                    .field(&self.value)
                    .finish()
            }
        }

        $crate::__scalar!(forward_format => $name; Display);
    };
    (forward_format => $name:ident; $($format:ident),+ $(,)?) => {
        $(
            impl ::core::fmt::$format for $name {
                fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::$format::fmt(&self.value, formatter)
                }
            }
        )+
    };
    (num_traits => $name:ident, $repr:ty) => {
        impl $crate::__private::num_traits::Zero for $name {
            fn zero() -> Self {
                $name::ZERO
            }

            fn is_zero(&self) -> bool {
                self.value == <$repr as $crate::Primitive>::ZERO
            }
        }

        impl $crate::__private::num_traits::One for $name {
            fn one() -> Self {
                $name::ONE
            }
        }

        impl $crate::__private::num_traits::Bounded for $name {
            fn min_value() -> Self {
                $name::MIN
            }

            fn max_value() -> Self {
                $name::MAX
            }
        }

        impl $crate::__private::num_traits::Num for $name {
            type FromStrRadixErr = <$repr as $crate::__private::num_traits::Num>::FromStrRadixErr;

            fn from_str_radix(
                text: &str,
                radix: u32,
            ) -> ::core::result::Result<Self, Self::FromStrRadixErr> {
                <$repr as $crate::__private::num_traits::Num>::from_str_radix(text, radix)
                    .map($name::new)
            }
        }

        impl $crate::__private::num_traits::NumCast for $name {
            fn from<N>(n: N) -> ::core::option::Option<Self>
            where
                N: $crate::__private::num_traits::ToPrimitive,
            {
                <$repr as $crate::__private::num_traits::NumCast>::from(n).map($name::new)
            }
        }

        impl $crate::__private::num_traits::ToPrimitive for $name {
            $crate::__scalar!(
                to_primitive =>
                to_isize: isize,
                to_i8: i8,
                to_i16: i16,
                to_i32: i32,
                to_i64: i64,
                to_i128: i128,
                to_usize: usize,
                to_u8: u8,
                to_u16: u16,
                to_u32: u32,
                to_u64: u64,
                to_u128: u128,
                to_f32: f32,
                to_f64: f64,
            );
        }

        impl $crate::__private::num_traits::FromPrimitive for $name {
            $crate::__scalar!(
                from_primitive => $name, $repr;
                from_isize: isize,
                from_i8: i8,
                from_i16: i16,
                from_i32: i32,
                from_i64: i64,
                from_i128: i128,
                from_usize: usize,
                from_u8: u8,
                from_u16: u16,
                from_u32: u32,
                from_u64: u64,
                from_u128: u128,
                from_f32: f32,
                from_f64: f64,
            );
        }
    };
    (to_primitive => $($method:ident: $t:ty),+ $(,)?) => {
        $(
            fn $method(&self) -> ::core::option::Option<$t> {
                $crate::__private::num_traits::ToPrimitive::$method(&self.value)
            }
        )+
    };
    (from_primitive => $name:ident, $repr:ty; $($method:ident: $t:ty),+ $(,)?) => {
        $(
            fn $method(n: $t) -> ::core::option::Option<Self> {
                <$repr as $crate::__private::num_traits::FromPrimitive>::$method(n).map($name::new)
            }
        )+
    };
    (iter => $name:ident) => {
        impl ::core::iter::Sum for $name {
            fn sum<I>(iter: I) -> Self
            where
                I: ::core::iter::Iterator<Item = Self>,
            {
                iter.fold($name::ZERO, |sum, x| sum + x)
            }
        }

        impl<'a> ::core::iter::Sum<&'a $name> for $name {
            fn sum<I>(iter: I) -> Self
            where
                I: ::core::iter::Iterator<Item = &'a $name>,
            {
                iter.fold($name::ZERO, |sum, x| sum + *x)
            }
        }

        impl ::core::iter::Product for $name {
            fn product<I>(iter: I) -> Self
            where
                I: ::core::iter::Iterator<Item = Self>,
            {
                iter.fold($name::ONE, |product, x| product * x)
            }
        }

        impl<'a> ::core::iter::Product<&'a $name> for $name {
            fn product<I>(iter: I) -> Self
            where
                I: ::core::iter::Iterator<Item = &'a $name>,
            {
                iter.fold($name::ONE, |product, x| product * *x)
            }
        }
    };
    // Operators with a wrapper on the left. The right operand is either a wrapper of the same kind
    // (`BothStrict`) or a primitive of the same kind (`LeftStrict`). `$zip` is the function in
    // `operand` that applies `$operation`.
    (
        binary => $name:ident, $zip:ident;
        $(
            $trait:ident :: $method:ident, $assign:ident :: $assign_method:ident
            => $operation:expr
        );+
        $(;)?
    ) => {
        $(
            impl<R> ::core::ops::$trait<R> for $name
            where
                R: $crate::operand::Operand<$name>,
            {
                type Output = $name;

                fn $method(self, other: R) -> Self::Output {
                    $crate::operand::$zip(self, other, $operation)
                }
            }

            impl<R> ::core::ops::$assign<R> for $name
            where
                R: $crate::operand::Operand<$name>,
            {
                fn $assign_method(&mut self, other: R) {
                    *self = $crate::operand::$zip(*self, other, $operation);
                }
            }
        )+
    };
    // Operators with a primitive on the left (`RightStrict`). The output is the primitive.
    (
        primitive_binary => $name:ident, $native:ty, $zip:ident;
        $(
            $trait:ident :: $method:ident, $assign:ident :: $assign_method:ident
            => $operation:expr
        );+
        $(;)?
    ) => {
        $(
            impl ::core::ops::$trait<$name> for $native {
                type Output = $native;

                fn $method(self, other: $name) -> Self::Output {
                    $crate::operand::$zip(self, other, $operation)
                }
            }

            impl ::core::ops::$assign<$name> for $native {
                fn $assign_method(&mut self, other: $name) {
                    *self = $crate::operand::$zip(*self, other, $operation);
                }
            }
        )+
    };
    (comparison => $name:ident) => {
        impl<R> ::core::cmp::PartialEq<R> for $name
        where
            R: $crate::operand::Operand<$name>,
        {
            fn eq(&self, other: &R) -> bool {
                $crate::operand::compare(*self, *other) == ::core::option::Option::Some(
                    ::core::cmp::Ordering::Equal,
                )
            }
        }

        impl<R> ::core::cmp::PartialOrd<R> for $name
        where
            R: $crate::operand::Operand<$name>,
        {
            fn partial_cmp(&self, other: &R) -> ::core::option::Option<::core::cmp::Ordering> {
                $crate::operand::compare(*self, *other)
            }
        }
    };
    (primitive_comparison => $name:ident, $native:ty) => {
        impl ::core::cmp::PartialEq<$name> for $native {
            fn eq(&self, other: &$name) -> bool {
                $crate::operand::compare(*self, *other) == ::core::option::Option::Some(
                    ::core::cmp::Ordering::Equal,
                )
            }
        }

        impl ::core::cmp::PartialOrd<$name> for $native {
            fn partial_cmp(&self, other: &$name) -> ::core::option::Option<::core::cmp::Ordering> {
                $crate::operand::compare(*self, *other)
            }
        }
    };
}

#[cfg(feature = "serde")]
#[doc(hidden)]
#[macro_export]
macro_rules! __serde {
    (scalar => $name:ident, $repr:ty) => {
        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&self.value, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <$repr as $crate::__private::serde::Deserialize<'de>>::deserialize(deserializer)
                    .map($name::new)
            }
        }
    };
}

#[cfg(not(feature = "serde"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __serde {
    (scalar => $name:ident, $repr:ty) => {};
}
