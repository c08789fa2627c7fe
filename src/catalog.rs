//! Predefined scalar wrappers.
//!
//! Each wrapper is qualified only by its own representation. The platform wrappers (`CInt`,
//! `CLong`, etc.) are represented by the corresponding types in [`core::ffi`], so their widths
//! follow the target.

use core::ffi::{
    c_char, c_double, c_float, c_int, c_long, c_longlong, c_schar, c_short, c_uchar, c_uint,
    c_ulong, c_ulonglong, c_ushort,
};

crate::integral! {
    /// A signed 8-bit integer.
    pub struct Int8(i8);
}

crate::integral! {
    /// A signed 16-bit integer.
    pub struct Int16(i16);
}

crate::integral! {
    /// A signed 32-bit integer.
    pub struct Int32(i32);
}

crate::integral! {
    /// A signed 64-bit integer.
    pub struct Int64(i64);
}

crate::integral! {
    /// A signed 128-bit integer.
    pub struct Int128(i128);
}

crate::integral! {
    /// A signed pointer-sized integer.
    pub struct IntSize(isize);
}

crate::integral! {
    /// An unsigned 8-bit integer.
    pub struct UInt8(u8);
}

crate::integral! {
    /// An unsigned 16-bit integer.
    pub struct UInt16(u16);
}

crate::integral! {
    /// An unsigned 32-bit integer.
    pub struct UInt32(u32);
}

crate::integral! {
    /// An unsigned 64-bit integer.
    pub struct UInt64(u64);
}

crate::integral! {
    /// An unsigned 128-bit integer.
    pub struct UInt128(u128);
}

crate::integral! {
    /// An unsigned pointer-sized integer.
    pub struct UIntSize(usize);
}

crate::float! {
    /// A 32-bit floating-point number.
    pub struct Float32(f32);
}

crate::float! {
    /// A 64-bit floating-point number.
    pub struct Float64(f64);
}

crate::integral! {
    /// C's `char`.
    pub struct CChar(c_char);
}

crate::integral! {
    /// C's `signed char`.
    pub struct CSChar(c_schar);
}

crate::integral! {
    /// C's `unsigned char`.
    pub struct CUChar(c_uchar);
}

crate::integral! {
    /// C's `short`.
    pub struct CShort(c_short);
}

crate::integral! {
    /// C's `unsigned short`.
    pub struct CUShort(c_ushort);
}

crate::integral! {
    /// C's `int`.
    pub struct CInt(c_int);
}

crate::integral! {
    /// C's `unsigned int`.
    pub struct CUInt(c_uint);
}

crate::integral! {
    /// C's `long`.
    pub struct CLong(c_long);
}

crate::integral! {
    /// C's `unsigned long`.
    pub struct CULong(c_ulong);
}

crate::integral! {
    /// C's `long long`.
    pub struct CLongLong(c_longlong);
}

crate::integral! {
    /// C's `unsigned long long`.
    pub struct CULongLong(c_ulonglong);
}

crate::float! {
    /// C's `float`.
    pub struct CFloat(c_float);
}

crate::float! {
    /// C's `double`.
    pub struct CDouble(c_double);
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;
    use core::ffi::c_int;
    use core::mem;

    use crate::catalog::{CDouble, CInt, Float32, Float64, Int32, Int8, UInt128, UInt8};
    use crate::kind::Strict;

    #[test]
    fn wrappers_with_equal_representations_are_distinct() {
        assert_ne!(TypeId::of::<Int32>(), TypeId::of::<CInt>());
        assert_ne!(TypeId::of::<Float64>(), TypeId::of::<CDouble>());
        assert_eq!(TypeId::of::<<CInt as Strict>::Repr>(), TypeId::of::<c_int>());
    }

    #[test]
    fn layout_matches_representation() {
        assert_eq!(mem::size_of::<Int8>(), 1);
        assert_eq!(mem::size_of::<UInt128>(), 16);
        assert_eq!(mem::size_of::<Float32>(), 4);
        assert_eq!(mem::align_of::<CDouble>(), mem::align_of::<f64>());
    }

    #[test]
    fn mixed_catalog_arithmetic() {
        let x = Int32::new(300) + UInt8::new(44);
        let y = CInt::new(2) * Int8::new(-3);
        assert_eq!(x, 344);
        assert_eq!(y, -6);
        assert_eq!(Float64::new(0.5) + Float32::new(0.25), 0.75);
    }
}
