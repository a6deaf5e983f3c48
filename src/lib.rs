//! Views values of unknown type as a requested type, falling back instead of failing.
//!
//! Casts ([`try_cast`], [`is`]) only succeed on the exact runtime type. Numeric coercion
//! ([`cast_to_number`]) converts between kinds but never wraps, truncates, or narrows a float
//! into an integer: anything it can't represent becomes zero.

pub mod cast;
pub mod common;
pub mod dynamic;
pub mod nil;
pub mod number;
pub mod typeinfo;

pub use cast::{cast_then, cast_to, cast_to_string, is, try_cast, CastError, CastExt};
pub use dynamic::{Dynamic, Nil};
pub use nil::{is_nil, is_pointer};
pub use number::{
    coerce::{cast_to_number, try_cast_to_number, Numeric},
    NumClass, NumKind, Number, Wide,
};
pub use typeinfo::{actual_type_of, type_of, Described, Kind, TypeDesc};
