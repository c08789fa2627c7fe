//! Strict wrappers over arbitrary values.
//!
//! Aliases are defined with the [`alias!`] macro. An alias owns a single value and dereferences to
//! it, so methods and fields of the aliased value are available through the alias. When the
//! aliased value is itself a pointer (`Box`, `Rc`, etc.), dereferencing continues to its referent.
//!
//! Other behavior is forwarded only when the aliased value supports it:
//!
//! - `Index` and `IndexMut` for each index type of the aliased value.
//! - `IntoIterator` for shared and mutable references.
//! - `FromIterator` and `Extend`.
//! - The [capabilities](crate::alias::capability) `Length`, `Capacity`, `MaxSize`, `Data`, and
//!   `Ends`.
//!
//! Aliases always implement `Display`, which writes the aliased value when it implements `Display`
//! and the placeholder `<Name>` otherwise. Any other trait can be derived as usual.
//!
//! [`alias!`]: crate::alias!

pub mod capability;
#[doc(hidden)]
pub mod probe;

pub use crate::alias::capability::{Capacity, Data, Ends, Length, MaxSize};
#[cfg(all(nightly, feature = "unstable"))]
pub use crate::alias::capability::Allocated;

/// Defines a strict wrapper over an arbitrary value.
///
/// Attributes, including derives, are applied to the definition. Generic type parameters define a
/// family of aliases.
///
/// # Examples
///
/// ```rust
/// use stricture::alias;
/// use stricture::alias::{Capacity, Ends};
///
/// alias! {
///     #[derive(Clone, Debug, Default, PartialEq)]
///     pub struct Queue<T>(Vec<T>);
/// }
///
/// let mut queue: Queue<u32> = (1..4).collect();
/// queue.extend([4]);
/// assert_eq!(queue[0], 1);
/// assert_eq!(queue.back(), Some(&4));
/// assert!(queue.capacity() >= 4);
/// assert_eq!((&queue).into_iter().sum::<u32>(), 10);
/// ```
///
/// Aliases of the same value are not interchangeable.
///
/// ```rust,compile_fail
/// use stricture::alias;
///
/// alias! {
///     pub struct Origin(Box<(f64, f64)>);
/// }
/// alias! {
///     pub struct Target(Box<(f64, f64)>);
/// }
///
/// let origin = Origin::new(Box::new((0.0, 0.0)));
/// let target: Target = origin;
/// ```
///
/// Capabilities are only forwarded when the aliased value has them.
///
/// ```rust,compile_fail
/// use stricture::alias;
/// use stricture::alias::Capacity;
///
/// alias! {
///     pub struct Triple([i32; 3]);
/// }
///
/// let triple = Triple::new([1, 2, 3]);
/// let capacity = triple.capacity();
/// ```
#[macro_export]
macro_rules! alias {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident $(<$($param:ident),+ $(,)?>)? ($repr:ty);
    ) => {
        $(#[$attr])*
        #[repr(transparent)]
        $vis struct $name $(<$($param),+>)? {
            value: $repr,
        }

        impl $(<$($param),+>)? $crate::kind::Strict for $name $(<$($param),+>)? {
            type Kind = $crate::kind::AliasKind;
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

        impl $(<$($param),+>)? $name $(<$($param),+>)? {
            /// Constructs an alias from its value.
            pub const fn new(value: $repr) -> Self {
                $name { value }
            }

            /// Gets the aliased value.
            pub fn into_inner(self) -> $repr {
                self.value
            }

            /// Replaces the aliased value and returns the previous value.
            pub fn replace(&mut self, value: $repr) -> $repr {
                ::core::mem::replace(&mut self.value, value)
            }

            /// Converts the aliased value into another type.
            pub fn convert<U>(self) -> U
            where
                $repr: ::core::convert::Into<U>,
            {
                ::core::convert::Into::into(self.value)
            }
        }

        impl $(<$($param),+>)? ::core::convert::From<$repr> for $name $(<$($param),+>)? {
            fn from(value: $repr) -> Self {
                $name { value }
            }
        }

        impl $(<$($param),+>)? ::core::ops::Deref for $name $(<$($param),+>)? {
            type Target = $repr;

            fn deref(&self) -> &Self::Target {
                &self.value
            }
        }

        impl $(<$($param),+>)? ::core::ops::DerefMut for $name $(<$($param),+>)? {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.value
            }
        }

        impl $(<$($param),+>)? ::core::convert::AsRef<$repr> for $name $(<$($param),+>)? {
            fn as_ref(&self) -> &$repr {
                &self.value
            }
        }

        impl $(<$($param),+>)? ::core::convert::AsMut<$repr> for $name $(<$($param),+>)? {
            fn as_mut(&mut self) -> &mut $repr {
                &mut self.value
            }
        }

        impl<__I, $($($param),+)?> ::core::ops::Index<__I> for $name $(<$($param),+>)?
        where
            $repr: ::core::ops::Index<__I>,
        {
            type Output = <$repr as ::core::ops::Index<__I>>::Output;

            fn index(&self, index: __I) -> &Self::Output {
                ::core::ops::Index::index(&self.value, index)
            }
        }

        impl<__I, $($($param),+)?> ::core::ops::IndexMut<__I> for $name $(<$($param),+>)?
        where
            $repr: ::core::ops::IndexMut<__I>,
        {
            fn index_mut(&mut self, index: __I) -> &mut Self::Output {
                ::core::ops::IndexMut::index_mut(&mut self.value, index)
            }
        }

        impl<'a, $($($param),+)?> ::core::iter::IntoIterator for &'a $name $(<$($param),+>)?
        where
            &'a $repr: ::core::iter::IntoIterator,
        {
            type Item = <&'a $repr as ::core::iter::IntoIterator>::Item;
            type IntoIter = <&'a $repr as ::core::iter::IntoIterator>::IntoIter;

            fn into_iter(self) -> Self::IntoIter {
                ::core::iter::IntoIterator::into_iter(&self.value)
            }
        }

        impl<'a, $($($param),+)?> ::core::iter::IntoIterator for &'a mut $name $(<$($param),+>)?
        where
            &'a mut $repr: ::core::iter::IntoIterator,
        {
            type Item = <&'a mut $repr as ::core::iter::IntoIterator>::Item;
            type IntoIter = <&'a mut $repr as ::core::iter::IntoIterator>::IntoIter;

            fn into_iter(self) -> Self::IntoIter {
                ::core::iter::IntoIterator::into_iter(&mut self.value)
            }
        }

        impl<__E, $($($param),+)?> ::core::iter::FromIterator<__E> for $name $(<$($param),+>)?
        where
            $repr: ::core::iter::FromIterator<__E>,
        {
            fn from_iter<__T>(iter: __T) -> Self
            where
                __T: ::core::iter::IntoIterator<Item = __E>,
            {
                $name {
                    value: ::core::iter::FromIterator::from_iter(iter),
                }
            }
        }

        impl<__E, $($($param),+)?> ::core::iter::Extend<__E> for $name $(<$($param),+>)?
        where
            $repr: ::core::iter::Extend<__E>,
        {
            fn extend<__T>(&mut self, iter: __T)
            where
                __T: ::core::iter::IntoIterator<Item = __E>,
            {
                ::core::iter::Extend::extend(&mut self.value, iter)
            }
        }

        impl $(<$($param),+>)? ::core::fmt::Display for $name $(<$($param),+>)? {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #[allow(unused_imports)]
                use $crate::alias::probe::{DisplayPlaceholder as _, DisplayValue as _};

                (&$crate::alias::probe::Probe(&self.value))
                    .fmt_alias(formatter, <Self as $crate::kind::Strict>::NAME)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::{BTreeSet, VecDeque};
    use alloc::format;
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use num::BigInt;

    use crate::alias::{Capacity, Data, Ends, Length, MaxSize};
    use crate::kind::Strict;
    use crate::stringify::Stringify;

    #[derive(Clone, Debug, PartialEq)]
    struct Point {
        x: f64,
        y: f64,
    }

    impl Point {
        fn norm(&self) -> f64 {
            self.x.abs() + self.y.abs()
        }
    }

    crate::alias! {
        #[derive(Clone, Debug, Default, PartialEq)]
        struct Sequence<T>(Vec<T>);
    }

    crate::alias! {
        #[derive(Clone, Debug, Default)]
        struct Label(String);
    }

    crate::alias! {
        struct Origin(Box<Point>);
    }

    crate::alias! {
        struct Target(Box<Point>);
    }

    crate::alias! {
        struct Shared(Rc<Point>);
    }

    crate::alias! {
        struct Triple([i32; 3]);
    }

    crate::alias! {
        #[derive(Default)]
        struct Tags(BTreeSet<&'static str>);
    }

    crate::alias! {
        struct Balance(BigInt);
    }

    crate::alias! {
        #[derive(Default)]
        struct Nested(Sequence<u8>);
    }

    crate::alias! {
        struct Wrap<T>(T);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut xs: Sequence<i32> = Sequence::default();
        for x in 0..=4 {
            xs.push(x);
        }

        let ys: Vec<i32> = xs.iter().copied().collect();
        assert_eq!(ys, [0, 1, 2, 3, 4]);
        assert!((&xs).into_iter().eq(xs.as_ref().iter()));
        assert!((&xs).into_iter().rev().eq([4, 3, 2, 1, 0].iter()));

        for x in &mut xs {
            *x *= 2;
        }
        assert_eq!(xs.into_inner(), [0, 2, 4, 6, 8]);
    }

    #[test]
    fn construction_and_assignment() {
        let xs: Sequence<u8> = vec![1, 2].into();
        let mut ys: Sequence<u8> = (1..=2).collect();
        assert_eq!(xs, ys);

        ys.extend([3]);
        assert_eq!(ys.replace(vec![7]), [1, 2, 3]);
        assert_eq!(*ys, [7]);

        ys = xs.clone();
        assert_eq!(ys, xs);

        let deque: VecDeque<u8> = xs.convert();
        assert_eq!(deque, [1, 2]);
    }

    #[test]
    fn index_forwarding() {
        let mut xs = Sequence::new(vec![10, 20, 30]);
        xs[1] += 1;
        assert_eq!(xs[1], 21);
        assert_eq!(&xs[1..], [21, 30]);

        let triple = Triple::new([1, 2, 3]);
        assert_eq!(triple[2], 3);
    }

    #[test]
    fn capability_forwarding() {
        let mut xs: Sequence<u32> = Sequence::new(Vec::with_capacity(8));
        assert!(Length::is_empty(&xs));
        xs.extend([1, 2, 3]);

        assert_eq!(Length::len(&xs), 3);
        assert!(Capacity::capacity(&xs) >= 8);
        assert_eq!(MaxSize::max_size(&xs), isize::MAX as usize / 4);
        assert_eq!(Data::data(&xs), [1, 2, 3]);
        assert_eq!(Ends::front(&xs), Some(&1));
        assert_eq!(Ends::back(&xs), Some(&3));

        let triple = Triple::new([4, 5, 6]);
        assert_eq!(Length::len(&triple), 3);
        assert_eq!(MaxSize::max_size(&triple), 3);
        assert_eq!(Data::data(&triple), [4, 5, 6]);

        let mut tags = Tags::default();
        tags.insert("b");
        tags.insert("a");
        assert_eq!(Length::len(&tags), 2);
        assert_eq!(Ends::front(&tags), Some(&"a"));

        let label = Label::new(String::from("abc"));
        assert_eq!(Data::data(&label), b"abc");
    }

    #[test]
    fn nested_aliases_forward_capabilities() {
        let mut nested = Nested::default();
        nested.push(1);
        nested.push(2);
        assert_eq!(Length::len(&nested), 2);
        assert_eq!(Ends::back(&nested), Some(&2));
        assert_eq!(nested[0], 1);
    }

    #[test]
    fn member_access_through_pointers() {
        let origin = Origin::new(Box::new(Point { x: 0.0, y: 0.0 }));
        let mut target = Target::new(Box::new(Point { x: 3.0, y: -4.0 }));

        assert_eq!(origin.x, 0.0);
        assert_eq!(target.norm(), 7.0);
        target.x = 1.0;
        assert_eq!(target.norm(), 5.0);
        assert_eq!(**target, Point { x: 1.0, y: -4.0 });

        let shared = Shared::new(Rc::new(Point { x: 2.0, y: 2.0 }));
        assert_eq!(shared.norm(), 4.0);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn display_forwards_or_writes_placeholder() {
        let label = Label::new(String::from("ferris"));
        assert_eq!(label.to_string(), "ferris");
        assert_eq!(label.stringify(), "ferris");
        assert_eq!(format!("{:>8}", label), "  ferris");

        let xs = Sequence::new(vec![1]);
        assert_eq!(xs.to_string(), "<Sequence>");
        assert_eq!(xs.wstringify(), "<Sequence>".encode_utf16().collect::<Vec<_>>());

        let origin = Origin::new(Box::new(Point { x: 0.0, y: 0.0 }));
        assert_eq!(origin.stringify(), "<Origin>");

        let balance = Balance::new(BigInt::from(10).pow(20));
        assert_eq!(balance.stringify(), "100000000000000000000");
    }

    #[test]
    fn generic_alias_writes_placeholder_for_displayable_values() {
        assert_eq!(Wrap::new(String::from("text")).to_string(), "<Wrap>");
        assert_eq!(Wrap::new(5).to_string(), "<Wrap>");
        assert_eq!(Wrap::new(Label::new(String::from("text"))).stringify(), "<Wrap>");
        assert_eq!(Label::new(String::from("text")).to_string(), "text");
    }

    #[test]
    fn strict_metadata() {
        assert_eq!(Sequence::<u8>::NAME, "Sequence");
        assert_eq!(Label::NAME, "Label");

        let mut label = Label::from_repr(String::from("a"));
        label.as_repr_mut().push('b');
        assert_eq!(label.into_repr(), "ab");
    }
}
