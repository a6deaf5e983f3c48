use std::fmt::Debug;

use super::{NumClass, NumKind, Number, Wide};
use crate::{
    common::{
        trace::trace,
        try_as::{TryAs, TryCast},
    },
    dynamic::Dynamic,
    nil::is_nil,
    typeinfo::Described,
};

/// A numeric target of the coercion engine.
pub trait Numeric: Described + Copy + Default + PartialEq + Debug + TryCast<Number> {
    const KIND: NumKind;

    /// Plain conversion. Integer targets only get values already checked against their bounds.
    fn from_int(value: i128) -> Self;

    /// `None` for integer targets: floats never narrow into integers.
    fn from_float(value: f64) -> Option<Self>;
}

/// Coerces `value` into `T`, falling back to `T`'s zero.
pub fn cast_to_number<T: Numeric>(value: &dyn Dynamic) -> T {
    try_cast_to_number(value).unwrap_or_default()
}

/// Like [`cast_to_number`], but reports a rejected coercion as `None` instead of zero.
pub fn try_cast_to_number<T: Numeric>(value: &dyn Dynamic) -> Option<T> {
    if is_nil(value) {
        trace!("Nil value coerces to zero {}", T::KIND);
        return None;
    }
    let Some(number) = Number::of(value) else {
        trace!("{} is not a number", value.type_desc());
        return None;
    };
    T::try_cast(number)
}

fn convert<T: Numeric>(number: Number) -> Option<T> {
    match (number.widen(), T::KIND.class()) {
        (Wide::Signed(n), NumClass::Signed | NumClass::Unsigned) => checked(n.into()),
        (Wide::Unsigned(n), NumClass::Signed | NumClass::Unsigned) => checked(n.into()),
        (Wide::Signed(n), NumClass::Float) => Some(T::from_int(n.into())),
        (Wide::Unsigned(n), NumClass::Float) => Some(T::from_int(n.into())),
        (Wide::Float(n), NumClass::Float) => T::from_float(n),
        (Wide::Float(_), NumClass::Signed | NumClass::Unsigned) => {
            trace!("Refusing to narrow {number} into {}", T::KIND);
            None
        }
    }
}

fn checked<T: Numeric>(value: i128) -> Option<T> {
    let bounds = T::KIND.bounds()?;
    if bounds.contains(&value) {
        Some(T::from_int(value))
    } else {
        trace!("{value} is out of range for {}", T::KIND);
        None
    }
}

macro_rules! integer {
    ($($ty:ty => $variant:ident),+ $(,)?) => {$(
        impl Numeric for $ty {
            const KIND: NumKind = NumKind::$variant;

            fn from_int(value: i128) -> Self {
                value as $ty
            }

            fn from_float(_: f64) -> Option<Self> {
                None
            }
        }
    )+};
}

macro_rules! float {
    ($($ty:ty => $variant:ident),+ $(,)?) => {$(
        impl Numeric for $ty {
            const KIND: NumKind = NumKind::$variant;

            fn from_int(value: i128) -> Self {
                value as $ty
            }

            fn from_float(value: f64) -> Option<Self> {
                Some(value as $ty)
            }
        }
    )+};
}

macro_rules! number {
    ($($ty:ty => $variant:ident),+ $(,)?) => {$(
        impl TryAs<$ty> for Number {
            fn try_as(self) -> Option<$ty> {
                convert(self)
            }
        }

        impl From<$ty> for Number {
            fn from(value: $ty) -> Self {
                Self::$variant(value)
            }
        }
    )+};
}

integer!(
    i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64, usize => Usize,
);
float!(f32 => F32, f64 => F64);
number!(
    i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64, usize => Usize,
    f32 => F32, f64 => F64,
);

#[cfg(test)]
mod tests {
    use std::{ptr, rc::Rc};

    use super::*;
    use crate::{
        common::test_util::{setup_test, twice},
        dynamic::Nil,
    };

    #[test]
    fn narrows_in_range_integers() {
        setup_test();
        assert_eq!(cast_to_number::<i8>(&127i32), 127);
        assert_eq!(cast_to_number::<i8>(&-128i64), -128);
        assert_eq!(cast_to_number::<u16>(&65_535u64), u16::MAX);
        assert_eq!(cast_to_number::<usize>(&3u8), 3);
    }

    #[test]
    fn out_of_range_is_zero_not_wrapped() {
        setup_test();
        assert_eq!(cast_to_number::<i8>(&128i32), 0);
        assert_eq!(cast_to_number::<i8>(&-129i32), 0);
        assert_eq!(cast_to_number::<u8>(&256u16), 0);
        assert_eq!(cast_to_number::<i64>(&u64::MAX), 0);
        assert_eq!(cast_to_number::<u32>(&(u32::MAX as u64 + 1)), 0);
    }

    #[test]
    fn negative_never_fits_unsigned() {
        setup_test();
        assert_eq!(cast_to_number::<u8>(&-1i32), 0);
        assert_eq!(cast_to_number::<u64>(&i64::MIN), 0);
        assert_eq!(cast_to_number::<usize>(&-1isize), 0);
        assert_eq!(try_cast_to_number::<u8>(&-1i32), None);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(cast_to_number::<i16>(&(i16::MIN as i32)), i16::MIN);
        assert_eq!(cast_to_number::<i16>(&(i16::MAX as i32)), i16::MAX);
        assert_eq!(cast_to_number::<u64>(&i64::MAX), i64::MAX as u64);
        assert_eq!(cast_to_number::<u8>(&0i8), 0);
        assert_eq!(try_cast_to_number::<u8>(&0i8), Some(0));
    }

    #[test]
    fn integers_always_become_floats() {
        assert_eq!(cast_to_number::<f32>(&5i64), 5.0);
        assert_eq!(cast_to_number::<f64>(&-7i8), -7.0);
        assert_eq!(cast_to_number::<f64>(&u64::MAX), u64::MAX as f64);
        assert_eq!(cast_to_number::<f32>(&u64::MAX), u64::MAX as f32);
    }

    #[test]
    fn floats_convert_between_widths() {
        assert_eq!(cast_to_number::<f64>(&1.5f32), 1.5);
        assert_eq!(cast_to_number::<f32>(&5.9f64), 5.9f32);
        assert!(cast_to_number::<f64>(&f32::NAN).is_nan());
        assert_eq!(cast_to_number::<f32>(&f64::INFINITY), f32::INFINITY);
    }

    #[test]
    fn floats_never_become_integers() {
        setup_test();
        assert_eq!(cast_to_number::<i32>(&5.9f64), 0);
        assert_eq!(cast_to_number::<i32>(&5.0f64), 0);
        assert_eq!(cast_to_number::<u8>(&1.0f32), 0);
        assert_eq!(try_cast_to_number::<i64>(&2.0f64), None);
    }

    #[test]
    fn non_numbers_are_zero() {
        setup_test();
        assert_eq!(cast_to_number::<i32>(&"12"), 0);
        assert_eq!(cast_to_number::<i32>(&String::from("12")), 0);
        assert_eq!(cast_to_number::<f64>(&true), 0.0);
        assert_eq!(cast_to_number::<u8>(&'a'), 0);
        assert_eq!(cast_to_number::<i64>(&Box::new(5i64)), 0);
        assert_eq!(cast_to_number::<i64>(&Rc::new(5i64)), 0);
    }

    #[test]
    fn nil_values_are_zero() {
        setup_test();
        assert_eq!(cast_to_number::<i32>(&Nil), 0);
        assert_eq!(cast_to_number::<f64>(&None::<Box<f64>>), 0.0);
        assert_eq!(cast_to_number::<u8>(&ptr::null::<u8>()), 0);
    }

    #[test]
    fn same_kind_is_identity() {
        assert_eq!(cast_to_number::<i64>(&i64::MIN), i64::MIN);
        assert_eq!(cast_to_number::<u64>(&u64::MAX), u64::MAX);
        assert_eq!(cast_to_number::<f64>(&f64::MAX), f64::MAX);
    }

    #[test]
    fn number_views_through_try_as() {
        let small: Option<u8> = Number::from(200i32).try_as();
        let big: Option<u8> = Number::from(300i32).try_as();
        assert_eq!(small, Some(200));
        assert_eq!(big, None);
        assert_eq!(i16::try_cast(Number::from(-5i8)), Some(-5));
        assert_eq!(i16::try_cast(Number::from(0.5f32)), None);
    }

    #[test]
    fn coercion_is_idempotent() {
        assert_eq!(twice(|| cast_to_number::<i8>(&128i32)), 0);
        assert_eq!(twice(|| cast_to_number::<f32>(&5i64)), 5.0);
        assert_eq!(twice(|| try_cast_to_number::<u16>(&70_000u32)), None);
    }

    macro_rules! zero_for_nil {
        ($($ty:ident),+) => {
            paste::paste! {$(
                #[test]
                fn [<nil_is_zero_ $ty>]() {
                    assert_eq!(cast_to_number::<$ty>(&Nil), $ty::default());
                    assert_eq!(cast_to_number::<$ty>(&None::<Rc<$ty>>), $ty::default());
                }

                #[test]
                fn [<own_kind_round_trips_ $ty>]() {
                    let max = $ty::MAX;
                    assert_eq!(cast_to_number::<$ty>(&max), max);
                    assert_eq!(<$ty as Numeric>::KIND.name(), stringify!($ty));
                }
            )+}
        };
    }

    zero_for_nil!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
}
