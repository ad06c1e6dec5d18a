use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::{shape::checked_product, Context, ElementKind, Error, NativeElement, Result, Shape};

/// Dimension capacity of a [`Type`]. Ranks must stay strictly below it.
pub const MAX_TENSOR_DIMENSIONS: usize = 6;

/// Borrowed handle to a [`Type`].
pub type TypeRef<'a> = &'a Type;

/// Element kind plus dimension sizes of one tensor.
///
/// Dimensions live inline, so a `Type` is `Copy` and never allocates. Only the
/// first [`Type::rank`] slots are meaningful; equality and hashing ignore the
/// rest.
#[derive(Debug, Clone, Copy)]
pub struct Type {
    sizes: [usize; MAX_TENSOR_DIMENSIONS],
    num_sizes: u8,
    element_type: ElementKind,
}

impl Type {
    /// Create a type of `kind` with shape `dims`.
    ///
    /// # Panics
    /// If `dims.len() >= MAX_TENSOR_DIMENSIONS`.
    pub fn new(kind: ElementKind, dims: &[usize]) -> Self {
        match Self::try_new(kind, dims) {
            Ok(ty) => ty,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible form of [`Type::new`].
    pub fn try_new(kind: ElementKind, dims: &[usize]) -> Result<Self> {
        if dims.len() >= MAX_TENSOR_DIMENSIONS {
            tracing::debug!(
                rank = dims.len(),
                max = MAX_TENSOR_DIMENSIONS,
                "rejecting oversized type"
            );
            return Err(Error::TooManyDims {
                rank: dims.len(),
                max: MAX_TENSOR_DIMENSIONS,
            }
            .bt());
        }
        let mut sizes = [0; MAX_TENSOR_DIMENSIONS];
        sizes[..dims.len()].copy_from_slice(dims);
        Ok(Self {
            sizes,
            num_sizes: dims.len() as u8,
            element_type: kind,
        })
    }

    /// A type with shape `S` holding elements of native type `T`.
    pub fn of<S: Shape, T: NativeElement>() -> Self {
        S::to_type(T::KIND)
    }

    /// Strict structural equality: same kind, same rank, same sizes in order.
    pub fn is_equal(&self, other: TypeRef<'_>) -> bool {
        self.element_type == other.element_type && self.dims() == other.dims()
    }

    /// The kind of every element.
    pub fn element_type(&self) -> ElementKind {
        self.element_type
    }

    /// The populated dimension sizes.
    pub fn dims(&self) -> &[usize] {
        &self.sizes[..self.num_sizes as usize]
    }

    /// Number of populated dimensions.
    pub fn rank(&self) -> usize {
        self.num_sizes as usize
    }

    /// Number of elements. A rank-0 type has no shape and reports 0.
    ///
    /// # Panics
    /// If the product of the dimensions overflows `usize`.
    pub fn size(&self) -> usize {
        match self.try_size() {
            Ok(size) => size,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible form of [`Type::size`].
    pub fn try_size(&self) -> Result<usize> {
        if self.num_sizes == 0 {
            return Ok(0);
        }
        checked_product(self.dims()).ok_or_else(|| {
            Error::SizeOverflow {
                dims: self.dims().to_vec(),
            }
            .bt()
        })
    }

    /// Size of one element, in bytes.
    pub fn element_size(&self) -> usize {
        self.element_type.size()
    }

    /// Canonical name of the element kind, e.g. `"float"`.
    pub fn element_name(&self) -> &'static str {
        self.element_type.name()
    }

    /// Returns true if `T` is the native representation of this type's elements.
    pub fn is_type<T: 'static>(&self) -> bool {
        self.element_type.is_type::<T>()
    }
}

impl Default for Type {
    /// An empty type: no dimensions, [`ElementKind::Index`] elements.
    fn default() -> Self {
        Self {
            sizes: [0; MAX_TENSOR_DIMENSIONS],
            num_sizes: 0,
            element_type: ElementKind::Index,
        }
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.element_type.hash(state);
        self.dims().hash(state);
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<", self.element_name())?;
        for (i, dim) in self.dims().iter().enumerate() {
            if i > 0 {
                f.write_str(" x ")?;
            }
            write!(f, "{dim}")?;
        }
        f.write_str(">")
    }
}

impl FromStr for Type {
    type Err = Error;

    /// Parse the form produced by [`Display`](fmt::Display), e.g. `float<2 x 3>`.
    fn from_str(s: &str) -> Result<Self> {
        let parse_err = |reason: &str| {
            tracing::debug!(input = s, reason, "rejecting type string");
            Error::ParseType {
                input: s.to_string(),
                reason: reason.to_string(),
            }
            .bt()
        };

        let (name, rest) = s.trim().split_once('<').ok_or_else(|| parse_err("missing `<`"))?;
        let body = rest
            .strip_suffix('>')
            .ok_or_else(|| parse_err("missing trailing `>`"))?;
        let kind: ElementKind = name.trim().parse()?;

        let parts: Vec<&str> = match body.trim() {
            "" => Vec::new(),
            _ => body.split('x').collect(),
        };
        if parts.len() >= MAX_TENSOR_DIMENSIONS {
            tracing::debug!(input = s, rank = parts.len(), "rejecting oversized type string");
            return Err(Error::TooManyDims {
                rank: parts.len(),
                max: MAX_TENSOR_DIMENSIONS,
            }
            .bt());
        }

        let mut sizes = [0; MAX_TENSOR_DIMENSIONS];
        for (i, part) in parts.iter().enumerate() {
            sizes[i] = part
                .trim()
                .parse::<usize>()
                .with_context(|| format!("dimension {i} of `{s}`"))?;
        }
        Self::try_new(kind, &sizes[..parts.len()])
    }
}
