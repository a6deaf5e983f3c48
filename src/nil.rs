use crate::dynamic::Dynamic;

/// True for the [`Nil`](crate::Nil) sentinel and for any pointer-shaped value.
pub fn is_pointer(value: &dyn Dynamic) -> bool {
    value.type_desc().kind().is_pointer_like()
}

/// True for the sentinel and for pointer-shaped values whose pointer is null.
pub fn is_nil(value: &dyn Dynamic) -> bool {
    is_pointer(value) && value.is_null()
}
