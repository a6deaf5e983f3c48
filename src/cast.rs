use std::fmt::Display;

use tracing::error;

use crate::{
    common::trace::trace,
    dynamic::Dynamic,
    nil,
    number::coerce::{self, Numeric},
    typeinfo::{Described, Kind, TypeDesc},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CastError {
    pub expected: TypeDesc,
    pub found: TypeDesc,
}

impl Display for CastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "can't cast object of type<{}> as type<{}>",
            self.found, self.expected
        )
    }
}

impl std::error::Error for CastError {}

/// Views `value` as exactly `T`. Never converts between kinds.
pub fn try_cast<T: Described>(value: &dyn Dynamic) -> Result<&T, CastError> {
    value.as_any().downcast_ref::<T>().ok_or_else(|| CastError {
        expected: T::descriptor(),
        found: value.type_desc(),
    })
}

/// Like [`try_cast`], for call sites where a mismatch is a bug.
///
/// # Panics
/// If `value` is not a `T`.
#[track_caller]
pub fn cast_to<T: Described>(value: &dyn Dynamic) -> &T {
    match try_cast(value) {
        Ok(value) => value,
        Err(e) => {
            error!("{e}");
            panic!("{e}")
        }
    }
}

pub fn is<T: Described>(value: &dyn Dynamic) -> bool {
    try_cast::<T>(value).is_ok()
}

/// Runs `then` on the cast value. A failed cast skips it.
pub fn cast_then<T: Described>(value: &dyn Dynamic, then: impl FnOnce(&T)) {
    if let Ok(value) = try_cast(value) {
        then(value)
    }
}

/// The string behind `value`, its rendering if it has one, or `""`.
pub fn cast_to_string(value: &dyn Dynamic) -> String {
    if let Ok(s) = try_cast::<String>(value) {
        return s.clone();
    }
    if let Ok(s) = try_cast::<&'static str>(value) {
        return String::from(*s);
    }
    match value.as_display() {
        Some(display) => display.to_string(),
        None => {
            trace!("{} has no string form", value.type_desc());
            String::new()
        }
    }
}

/// Method-call spelling of the free functions, for `&dyn Dynamic` receivers.
pub trait CastExt {
    fn cast<T: Described>(&self) -> Result<&T, CastError>;
    fn is<T: Described>(&self) -> bool;
    fn cast_then<T: Described>(&self, then: impl FnOnce(&T));
    fn cast_to_string(&self) -> String;
    fn coerce<T: Numeric>(&self) -> T;
    fn try_coerce<T: Numeric>(&self) -> Option<T>;
    fn is_nil(&self) -> bool;
    fn kind(&self) -> Kind;
}

impl CastExt for dyn Dynamic {
    fn cast<T: Described>(&self) -> Result<&T, CastError> {
        try_cast(self)
    }

    fn is<T: Described>(&self) -> bool {
        is::<T>(self)
    }

    fn cast_then<T: Described>(&self, then: impl FnOnce(&T)) {
        cast_then(self, then)
    }

    fn cast_to_string(&self) -> String {
        cast_to_string(self)
    }

    fn coerce<T: Numeric>(&self) -> T {
        coerce::cast_to_number(self)
    }

    fn try_coerce<T: Numeric>(&self) -> Option<T> {
        coerce::try_cast_to_number(self)
    }

    fn is_nil(&self) -> bool {
        nil::is_nil(self)
    }

    fn kind(&self) -> Kind {
        self.type_desc().kind()
    }
}
