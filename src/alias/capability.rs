//! Capabilities forwarded by aliases.
//!
//! Each capability is a trait that is implemented for common collections and for every alias
//! whose aliased value implements it. Capabilities are independent: an alias over an array has a
//! length but no capacity, and an alias over a `BTreeSet` has a length and ends but no contiguous
//! data.

use alloc::collections::{BTreeMap, BTreeSet, BinaryHeap, LinkedList, VecDeque};
use alloc::string::String;
use alloc::vec::Vec;
use core::mem;
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

use crate::kind::StrictAlias;

/// A collection with a number of elements.
pub trait Length {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A collection with allocated storage.
pub trait Capacity {
    /// Gets the number of elements that can be held without reallocating.
    fn capacity(&self) -> usize;
}

/// A collection with a theoretical limit on its number of elements.
pub trait MaxSize {
    fn max_size(&self) -> usize;
}

/// A collection with contiguous storage.
pub trait Data {
    type Element;

    fn data(&self) -> &[Self::Element];
}

/// A sequence with first and last elements.
pub trait Ends {
    type Element;

    fn front(&self) -> Option<&Self::Element>;

    fn back(&self) -> Option<&Self::Element>;
}

/// A collection with an allocator.
#[cfg(all(nightly, feature = "unstable"))]
pub trait Allocated {
    type Allocator: core::alloc::Allocator;

    fn allocator(&self) -> &Self::Allocator;
}

impl<W> Length for W
where
    W: StrictAlias,
    W::Repr: Length,
{
    fn len(&self) -> usize {
        Length::len(self.as_repr())
    }
}

impl<W> Capacity for W
where
    W: StrictAlias,
    W::Repr: Capacity,
{
    fn capacity(&self) -> usize {
        Capacity::capacity(self.as_repr())
    }
}

impl<W> MaxSize for W
where
    W: StrictAlias,
    W::Repr: MaxSize,
{
    fn max_size(&self) -> usize {
        MaxSize::max_size(self.as_repr())
    }
}

impl<W> Data for W
where
    W: StrictAlias,
    W::Repr: Data,
{
    type Element = <W::Repr as Data>::Element;

    fn data(&self) -> &[Self::Element] {
        Data::data(self.as_repr())
    }
}

impl<W> Ends for W
where
    W: StrictAlias,
    W::Repr: Ends,
{
    type Element = <W::Repr as Ends>::Element;

    fn front(&self) -> Option<&Self::Element> {
        Ends::front(self.as_repr())
    }

    fn back(&self) -> Option<&Self::Element> {
        Ends::back(self.as_repr())
    }
}

#[cfg(all(nightly, feature = "unstable"))]
impl<W> Allocated for W
where
    W: StrictAlias,
    W::Repr: Allocated,
{
    type Allocator = <W::Repr as Allocated>::Allocator;

    fn allocator(&self) -> &Self::Allocator {
        Allocated::allocator(self.as_repr())
    }
}

// Allocations are limited to `isize::MAX` bytes.
const fn max_elements<T>() -> usize {
    match mem::size_of::<T>() {
        0 => usize::MAX,
        size => isize::MAX as usize / size,
    }
}

macro_rules! impl_length {
    ($(<$($param:ident),+> $t:ty),+ $(,)?) => {
        $(
            impl<$($param),+> Length for $t {
                fn len(&self) -> usize {
                    <$t>::len(self)
                }
            }
        )+
    };
}
impl_length!(
    <T> Vec<T>,
    <T> VecDeque<T>,
    <T> LinkedList<T>,
    <T> BinaryHeap<T>,
    <T> BTreeSet<T>,
    <K, V> BTreeMap<K, V>,
);

#[cfg(feature = "std")]
impl_length!(<T, S> HashSet<T, S>, <K, V, S> HashMap<K, V, S>);

impl Length for String {
    fn len(&self) -> usize {
        String::len(self)
    }
}

impl<T, const N: usize> Length for [T; N] {
    fn len(&self) -> usize {
        N
    }
}

impl<T> Capacity for Vec<T> {
    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }
}

impl<T> Capacity for VecDeque<T> {
    fn capacity(&self) -> usize {
        VecDeque::capacity(self)
    }
}

impl<T> Capacity for BinaryHeap<T> {
    fn capacity(&self) -> usize {
        BinaryHeap::capacity(self)
    }
}

impl Capacity for String {
    fn capacity(&self) -> usize {
        String::capacity(self)
    }
}

#[cfg(feature = "std")]
impl<T, S> Capacity for HashSet<T, S> {
    fn capacity(&self) -> usize {
        HashSet::capacity(self)
    }
}

#[cfg(feature = "std")]
impl<K, V, S> Capacity for HashMap<K, V, S> {
    fn capacity(&self) -> usize {
        HashMap::capacity(self)
    }
}

impl<T> MaxSize for Vec<T> {
    fn max_size(&self) -> usize {
        max_elements::<T>()
    }
}

impl<T> MaxSize for VecDeque<T> {
    fn max_size(&self) -> usize {
        max_elements::<T>()
    }
}

impl MaxSize for String {
    fn max_size(&self) -> usize {
        max_elements::<u8>()
    }
}

impl<T, const N: usize> MaxSize for [T; N] {
    fn max_size(&self) -> usize {
        N
    }
}

impl<T> Data for Vec<T> {
    type Element = T;

    fn data(&self) -> &[T] {
        self.as_slice()
    }
}

impl Data for String {
    type Element = u8;

    fn data(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<T, const N: usize> Data for [T; N] {
    type Element = T;

    fn data(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Ends for Vec<T> {
    type Element = T;

    fn front(&self) -> Option<&T> {
        self.first()
    }

    fn back(&self) -> Option<&T> {
        self.last()
    }
}

impl<T> Ends for VecDeque<T> {
    type Element = T;

    fn front(&self) -> Option<&T> {
        VecDeque::front(self)
    }

    fn back(&self) -> Option<&T> {
        VecDeque::back(self)
    }
}

impl<T> Ends for LinkedList<T> {
    type Element = T;

    fn front(&self) -> Option<&T> {
        LinkedList::front(self)
    }

    fn back(&self) -> Option<&T> {
        LinkedList::back(self)
    }
}

impl<T> Ends for BTreeSet<T>
where
    T: Ord,
{
    type Element = T;

    fn front(&self) -> Option<&T> {
        self.first()
    }

    fn back(&self) -> Option<&T> {
        self.last()
    }
}

impl<T, const N: usize> Ends for [T; N] {
    type Element = T;

    fn front(&self) -> Option<&T> {
        self.first()
    }

    fn back(&self) -> Option<&T> {
        self.last()
    }
}

#[cfg(all(nightly, feature = "unstable"))]
impl<T, A> Allocated for Vec<T, A>
where
    A: core::alloc::Allocator,
{
    type Allocator = A;

    fn allocator(&self) -> &A {
        Vec::allocator(self)
    }
}

#[cfg(all(nightly, feature = "unstable"))]
impl<T, A> Allocated for VecDeque<T, A>
where
    A: core::alloc::Allocator,
{
    type Allocator = A;

    fn allocator(&self) -> &A {
        VecDeque::allocator(self)
    }
}
