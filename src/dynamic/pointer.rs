use std::{
    any::{type_name, Any},
    fmt::Display,
    ptr::NonNull,
    rc::Rc,
    sync::Arc,
};

use super::Dynamic;
use crate::typeinfo::{Described, TypeDesc};

// Owning pointers are never null, their nullable form is Option<_>
macro_rules! smart_pointer {
    ($($ptr:ident),+ $(,)?) => {$(
        impl<T: Dynamic + Described> Described for $ptr<T> {
            fn descriptor() -> TypeDesc {
                TypeDesc::pointer::<Self, T>(type_name::<Self>())
            }
        }

        impl<T: Dynamic + Described> Dynamic for $ptr<T> {
            fn as_any(&self) -> &dyn Any {
                self
            }

            fn type_desc(&self) -> TypeDesc {
                Self::descriptor()
            }

            fn as_display(&self) -> Option<&dyn Display> {
                (**self).as_display()
            }
        }

        impl<T: Dynamic + Described> Described for Option<$ptr<T>> {
            fn descriptor() -> TypeDesc {
                TypeDesc::pointer::<Self, T>(type_name::<Self>())
            }
        }

        impl<T: Dynamic + Described> Dynamic for Option<$ptr<T>> {
            fn as_any(&self) -> &dyn Any {
                self
            }

            fn type_desc(&self) -> TypeDesc {
                Self::descriptor()
            }

            fn is_null(&self) -> bool {
                self.is_none()
            }

            fn as_display(&self) -> Option<&dyn Display> {
                self.as_deref().and_then(|inner| inner.as_display())
            }
        }
    )+};
}

smart_pointer!(Box, Rc, Arc);

// Raw pointers are never dereferenced here, so they never render
macro_rules! raw_pointer {
    ($($ptr:ty),+ $(,)?) => {$(
        impl<T: Described> Described for $ptr {
            fn descriptor() -> TypeDesc {
                TypeDesc::pointer::<Self, T>(type_name::<Self>())
            }
        }

        impl<T: Described> Dynamic for $ptr {
            fn as_any(&self) -> &dyn Any {
                self
            }

            fn type_desc(&self) -> TypeDesc {
                Self::descriptor()
            }

            fn is_null(&self) -> bool {
                <$ptr>::is_null(*self)
            }
        }
    )+};
}

raw_pointer!(*const T, *mut T);

impl<T: Described> Described for NonNull<T> {
    fn descriptor() -> TypeDesc {
        TypeDesc::pointer::<Self, T>(type_name::<Self>())
    }
}

impl<T: Described> Dynamic for NonNull<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_desc(&self) -> TypeDesc {
        Self::descriptor()
    }
}

impl<T: Described> Described for Option<NonNull<T>> {
    fn descriptor() -> TypeDesc {
        TypeDesc::pointer::<Self, T>(type_name::<Self>())
    }
}

impl<T: Described> Dynamic for Option<NonNull<T>> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_desc(&self) -> TypeDesc {
        Self::descriptor()
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }
}
