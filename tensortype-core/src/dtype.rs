use std::{any::TypeId, fmt, str::FromStr};

use crate::{Error, Result};

/// The closed set of numeric element kinds a tensor can hold.
///
/// Discriminants are stable and follow the order of the table below, so the
/// raw `u8` tag can be stored and read back with [`ElementKind::try_from`].
///
/// | Kind     | Bytes                   | Name       |
/// |----------|-------------------------|------------|
/// | `Float`  | 4                       | `"float"`  |
/// | `Double` | 8                       | `"double"` |
/// | `Int8`   | 1                       | `"i8"`     |
/// | `Int32`  | 4                       | `"i32"`    |
/// | `Index`  | `size_of::<usize>()`    | `"index"`  |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ElementKind {
    Float = 0,
    Double = 1,
    Int8 = 2,
    Int32 = 3,
    #[default]
    Index = 4,
}

impl ElementKind {
    /// Every kind, in discriminant order.
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Float,
        ElementKind::Double,
        ElementKind::Int8,
        ElementKind::Int32,
        ElementKind::Index,
    ];

    /// Storage size of one element, in bytes.
    pub const fn size(self) -> usize {
        match self {
            Self::Float => std::mem::size_of::<f32>(),
            Self::Double => std::mem::size_of::<f64>(),
            Self::Int8 => std::mem::size_of::<i8>(),
            Self::Int32 => std::mem::size_of::<i32>(),
            Self::Index => std::mem::size_of::<usize>(),
        }
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Double => "double",
            Self::Int8 => "i8",
            Self::Int32 => "i32",
            Self::Index => "index",
        }
    }

    /// Raw discriminant, the inverse of [`ElementKind::try_from`].
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns true if `T` is the native representation of this kind.
    ///
    /// Any `T` is accepted; types outside the table simply never match.
    pub fn is_type<T: 'static>(self) -> bool {
        let id = TypeId::of::<T>();
        match self {
            Self::Float => id == TypeId::of::<f32>(),
            Self::Double => id == TypeId::of::<f64>(),
            Self::Int8 => id == TypeId::of::<i8>(),
            Self::Int32 => id == TypeId::of::<i32>(),
            Self::Index => id == TypeId::of::<usize>(),
        }
    }

    /// The kind whose native representation is `T`.
    pub const fn of<T: NativeElement>() -> Self {
        T::KIND
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl TryFrom<u8> for ElementKind {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self> {
        match Self::ALL.get(tag as usize) {
            Some(kind) => Ok(*kind),
            None => {
                tracing::debug!(tag, "rejecting element kind tag");
                Err(Error::UnknownElementKind(format!("tag {tag}")).bt())
            }
        }
    }
}

impl FromStr for ElementKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match Self::ALL.iter().find(|kind| kind.name() == s) {
            Some(kind) => Ok(*kind),
            None => {
                tracing::debug!(input = s, "rejecting element kind name");
                Err(Error::UnknownElementKind(s.to_string()).bt())
            }
        }
    }
}

pub(crate) mod private {
    pub trait Sealed {}
}

/// Marker trait for the native Rust types backing an [`ElementKind`].
///
/// Sealed: the set of kinds is closed, so is the set of implementors.
pub trait NativeElement: private::Sealed + Copy + Send + Sync + 'static {
    const KIND: ElementKind;
    const NAME: &'static str;
}

macro_rules! dtype {
    ($rt:ident, $kind:expr) => {
        impl private::Sealed for $rt {}
        impl NativeElement for $rt {
            const KIND: ElementKind = $kind;
            const NAME: &'static str = $kind.name();
        }
    };
}

dtype!(f32, ElementKind::Float);
dtype!(f64, ElementKind::Double);
dtype!(i8, ElementKind::Int8);
dtype!(i32, ElementKind::Int32);
dtype!(usize, ElementKind::Index);
