use std::{any::Any, fmt::Display};

use crate::{
    number::NumKind,
    typeinfo::{Described, Kind, TypeDesc},
};

mod pointer;

/// A value whose concrete type is only known at runtime.
pub trait Dynamic: Any {
    fn as_any(&self) -> &dyn Any;

    fn type_desc(&self) -> TypeDesc;

    /// Whether the pointer behind this value is null. Only meaningful for pointer kinds.
    fn is_null(&self) -> bool {
        false
    }

    /// The "render to string" capability.
    fn as_display(&self) -> Option<&dyn Display> {
        None
    }
}

/// Implements [`Dynamic`] and [`Described`] for a concrete type.
///
/// `dynamic!(Meters)` makes `Meters` usable as an open value. `dynamic!(Meters: Display)`
/// additionally exposes its `Display` impl to [`cast_to_string`](crate::cast_to_string).
#[macro_export]
macro_rules! dynamic {
    (@leaf $ty:ty => $kind:expr) => {
        impl $crate::Described for $ty {
            fn descriptor() -> $crate::TypeDesc {
                $crate::TypeDesc::leaf::<$ty>(stringify!($ty), $kind)
            }
        }

        impl $crate::Dynamic for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn type_desc(&self) -> $crate::TypeDesc {
                <$ty as $crate::Described>::descriptor()
            }
        }
    };
    ($ty:ty: Display) => {
        impl $crate::Described for $ty {
            fn descriptor() -> $crate::TypeDesc {
                $crate::TypeDesc::leaf::<$ty>(stringify!($ty), $crate::Kind::Other)
            }
        }

        impl $crate::Dynamic for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn type_desc(&self) -> $crate::TypeDesc {
                <$ty as $crate::Described>::descriptor()
            }

            fn as_display(&self) -> ::std::option::Option<&dyn ::std::fmt::Display> {
                ::std::option::Option::Some(self)
            }
        }
    };
    ($ty:ty) => {
        $crate::dynamic!(@leaf $ty => $crate::Kind::Other);
    };
}

dynamic!(@leaf i8 => Kind::Number(NumKind::I8));
dynamic!(@leaf i16 => Kind::Number(NumKind::I16));
dynamic!(@leaf i32 => Kind::Number(NumKind::I32));
dynamic!(@leaf i64 => Kind::Number(NumKind::I64));
dynamic!(@leaf isize => Kind::Number(NumKind::Isize));
dynamic!(@leaf u8 => Kind::Number(NumKind::U8));
dynamic!(@leaf u16 => Kind::Number(NumKind::U16));
dynamic!(@leaf u32 => Kind::Number(NumKind::U32));
dynamic!(@leaf u64 => Kind::Number(NumKind::U64));
dynamic!(@leaf usize => Kind::Number(NumKind::Usize));
dynamic!(@leaf f32 => Kind::Number(NumKind::F32));
dynamic!(@leaf f64 => Kind::Number(NumKind::F64));
dynamic!(@leaf bool => Kind::Bool);
dynamic!(@leaf char => Kind::Char);
dynamic!(@leaf String => Kind::String);
dynamic!(@leaf &'static str => Kind::String);

/// The universal "no value" sentinel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Nil;

impl Described for Nil {
    fn descriptor() -> TypeDesc {
        TypeDesc::leaf::<Nil>("nil", Kind::Nil)
    }
}

impl Dynamic for Nil {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_desc(&self) -> TypeDesc {
        Self::descriptor()
    }

    fn is_null(&self) -> bool {
        true
    }
}
