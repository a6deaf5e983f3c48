use std::{fmt::Display, ops::RangeInclusive};

use arbitrary::Arbitrary;

use crate::{cast::try_cast, dynamic::Dynamic, typeinfo::Described};

pub mod coerce;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NumClass {
    Signed,
    Unsigned,
    Float,
}

impl NumKind {
    /// Order in which an open value is tested against each kind. First match wins.
    pub const PROBE_ORDER: [NumKind; 12] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::Isize,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::Usize,
        Self::F32,
        Self::F64,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    pub fn class(self) -> NumClass {
        match self {
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize => NumClass::Signed,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize => NumClass::Unsigned,
            Self::F32 | Self::F64 => NumClass::Float,
        }
    }

    pub fn is_integer(self) -> bool {
        self.class() != NumClass::Float
    }

    /// Inclusive range of an integer kind. i128 holds both ends of every signed and unsigned kind.
    pub fn bounds(self) -> Option<RangeInclusive<i128>> {
        let (min, max) = match self {
            Self::I8 => (i8::MIN as i128, i8::MAX as i128),
            Self::I16 => (i16::MIN as i128, i16::MAX as i128),
            Self::I32 => (i32::MIN as i128, i32::MAX as i128),
            Self::I64 => (i64::MIN as i128, i64::MAX as i128),
            Self::Isize => (isize::MIN as i128, isize::MAX as i128),
            Self::U8 => (0, u8::MAX as i128),
            Self::U16 => (0, u16::MAX as i128),
            Self::U32 => (0, u32::MAX as i128),
            Self::U64 => (0, u64::MAX as i128),
            Self::Usize => (0, usize::MAX as i128),
            Self::F32 | Self::F64 => return None,
        };
        Some(min..=max)
    }

    fn probe(self, value: &dyn Dynamic) -> Option<Number> {
        match self {
            Self::I8 => view(value).map(Number::I8),
            Self::I16 => view(value).map(Number::I16),
            Self::I32 => view(value).map(Number::I32),
            Self::I64 => view(value).map(Number::I64),
            Self::Isize => view(value).map(Number::Isize),
            Self::U8 => view(value).map(Number::U8),
            Self::U16 => view(value).map(Number::U16),
            Self::U32 => view(value).map(Number::U32),
            Self::U64 => view(value).map(Number::U64),
            Self::Usize => view(value).map(Number::Usize),
            Self::F32 => view(value).map(Number::F32),
            Self::F64 => view(value).map(Number::F64),
        }
    }
}

fn view<T: Described + Copy>(value: &dyn Dynamic) -> Option<T> {
    try_cast::<T>(value).ok().copied()
}

impl Display for NumKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A number pulled out of an open value, tagged with its exact runtime kind.
#[derive(Copy, Clone, Debug, PartialEq, Arbitrary)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
}

/// Widest representation of a number within its class.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Wide {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl Number {
    pub fn of(value: &dyn Dynamic) -> Option<Self> {
        NumKind::PROBE_ORDER
            .into_iter()
            .find_map(|kind| kind.probe(value))
    }

    pub fn kind(self) -> NumKind {
        match self {
            Self::I8(_) => NumKind::I8,
            Self::I16(_) => NumKind::I16,
            Self::I32(_) => NumKind::I32,
            Self::I64(_) => NumKind::I64,
            Self::Isize(_) => NumKind::Isize,
            Self::U8(_) => NumKind::U8,
            Self::U16(_) => NumKind::U16,
            Self::U32(_) => NumKind::U32,
            Self::U64(_) => NumKind::U64,
            Self::Usize(_) => NumKind::Usize,
            Self::F32(_) => NumKind::F32,
            Self::F64(_) => NumKind::F64,
        }
    }

    /// The value itself, back in open form.
    pub fn as_dynamic(&self) -> &dyn Dynamic {
        match self {
            Self::I8(n) => n,
            Self::I16(n) => n,
            Self::I32(n) => n,
            Self::I64(n) => n,
            Self::Isize(n) => n,
            Self::U8(n) => n,
            Self::U16(n) => n,
            Self::U32(n) => n,
            Self::U64(n) => n,
            Self::Usize(n) => n,
            Self::F32(n) => n,
            Self::F64(n) => n,
        }
    }

    // isize/usize are at most 64 bits on every supported target
    pub fn widen(self) -> Wide {
        match self {
            Self::I8(n) => Wide::Signed(n.into()),
            Self::I16(n) => Wide::Signed(n.into()),
            Self::I32(n) => Wide::Signed(n.into()),
            Self::I64(n) => Wide::Signed(n),
            Self::Isize(n) => Wide::Signed(n as i64),
            Self::U8(n) => Wide::Unsigned(n.into()),
            Self::U16(n) => Wide::Unsigned(n.into()),
            Self::U32(n) => Wide::Unsigned(n.into()),
            Self::U64(n) => Wide::Unsigned(n),
            Self::Usize(n) => Wide::Unsigned(n as u64),
            Self::F32(n) => Wide::Float(n.into()),
            Self::F64(n) => Wide::Float(n),
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n: &dyn Display = match self {
            Self::I8(n) => n,
            Self::I16(n) => n,
            Self::I32(n) => n,
            Self::I64(n) => n,
            Self::Isize(n) => n,
            Self::U8(n) => n,
            Self::U16(n) => n,
            Self::U32(n) => n,
            Self::U64(n) => n,
            Self::Usize(n) => n,
            Self::F32(n) => n,
            Self::F64(n) => n,
        };
        write!(f, "{n}{}", self.kind())
    }
}
