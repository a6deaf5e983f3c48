use std::{
    any::{Any, TypeId},
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
};

use crate::number::NumKind;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Nil,
    Bool,
    Char,
    String,
    Number(NumKind),
    Pointer,
    Other,
}

impl Kind {
    /// The sentinel counts as pointer-shaped: it is what a null pointer looks like once erased.
    pub fn is_pointer_like(self) -> bool {
        matches!(self, Self::Nil | Self::Pointer)
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool => write!(f, "bool"),
            Self::Char => write!(f, "char"),
            Self::String => write!(f, "string"),
            Self::Number(kind) => Display::fmt(kind, f),
            Self::Pointer => write!(f, "pointer"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Runtime handle for a type. Two descriptors are equal iff they describe the same type.
#[derive(Copy, Clone)]
pub struct TypeDesc {
    id: TypeId,
    name: &'static str,
    kind: Kind,
    // Lazy so that pointer chains don't need to be materialized up front
    elem: Option<fn() -> TypeDesc>,
}

impl TypeDesc {
    pub fn leaf<T: Any>(name: &'static str, kind: Kind) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name,
            kind,
            elem: None,
        }
    }

    pub fn pointer<P: Any, T: Described>(name: &'static str) -> Self {
        Self {
            id: TypeId::of::<P>(),
            name,
            kind: Kind::Pointer,
            elem: Some(T::descriptor as fn() -> TypeDesc),
        }
    }

    pub fn id(self) -> TypeId {
        self.id
    }

    pub fn name(self) -> &'static str {
        self.name
    }

    pub fn kind(self) -> Kind {
        self.kind
    }

    pub fn is_pointer(self) -> bool {
        self.kind == Kind::Pointer
    }

    /// The pointee, one level down. `None` for anything that isn't a pointer.
    pub fn elem(self) -> Option<TypeDesc> {
        self.elem.map(|elem| elem())
    }

    /// Follows pointees until a non-pointer type is reached.
    pub fn actual(self) -> TypeDesc {
        let mut desc = self;
        while let Some(elem) = desc.elem() {
            desc = elem;
        }
        desc
    }
}

impl PartialEq for TypeDesc {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDesc {}

impl Hash for TypeDesc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl Debug for TypeDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeDesc({} : {})", self.name, self.kind)
    }
}

impl Display for TypeDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Types whose descriptor is known without a value in hand.
pub trait Described: Any {
    fn descriptor() -> TypeDesc;
}

pub fn type_of<T: Described>() -> TypeDesc {
    T::descriptor()
}

pub fn actual_type_of<T: Described>() -> TypeDesc {
    T::descriptor().actual()
}
