use std::fmt;

use crate::{ElementKind, Error, Result, Type};

/// A rank-4 dimension sequence projected onto named fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeNHWC {
    /// Number of samples.
    pub n: usize,
    /// Height.
    pub h: usize,
    /// Width.
    pub w: usize,
    /// Number of channels.
    pub c: usize,
}

impl ShapeNHWC {
    pub const fn new(samples: usize, height: usize, width: usize, channels: usize) -> Self {
        Self {
            n: samples,
            h: height,
            w: width,
            c: channels,
        }
    }

    /// Project `dims` onto `(n, h, w, c)`.
    ///
    /// # Panics
    /// If `dims` does not hold exactly 4 entries.
    pub fn from_dims(dims: &[usize]) -> Self {
        match Self::try_from(dims) {
            Ok(shape) => shape,
            Err(e) => panic!("{e}"),
        }
    }

    pub const fn dims(&self) -> [usize; 4] {
        [self.n, self.h, self.w, self.c]
    }
}

impl TryFrom<&[usize]> for ShapeNHWC {
    type Error = Error;

    fn try_from(dims: &[usize]) -> Result<Self> {
        match *dims {
            [n, h, w, c] => Ok(Self { n, h, w, c }),
            _ => Err(Error::RankMismatch {
                op: "ShapeNHWC",
                expected: "exactly 4",
                got: dims.len(),
            }
            .bt()),
        }
    }
}

impl From<[usize; 4]> for ShapeNHWC {
    fn from([n, h, w, c]: [usize; 4]) -> Self {
        Self { n, h, w, c }
    }
}

impl fmt::Display for ShapeNHWC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nhwc({}, {}, {}, {})", self.n, self.h, self.w, self.c)
    }
}

/// Collapse a shape into its first dimension and the product of the rest.
///
/// `[7, 3, 4, 2]` becomes `(7, 24)`.
///
/// # Panics
/// If `dims` has fewer than 2 entries.
pub fn flatten_cdr(dims: &[usize]) -> (usize, usize) {
    match try_flatten_cdr(dims) {
        Ok(pair) => pair,
        Err(e) => panic!("{e}"),
    }
}

/// Fallible form of [`flatten_cdr`].
pub fn try_flatten_cdr(dims: &[usize]) -> Result<(usize, usize)> {
    match dims {
        [first, rest @ ..] if !rest.is_empty() => match checked_product(rest) {
            Some(rest) => Ok((*first, rest)),
            None => Err(Error::SizeOverflow {
                dims: dims.to_vec(),
            }
            .bt()),
        },
        _ => Err(Error::RankMismatch {
            op: "flatten_cdr",
            expected: "at least 2",
            got: dims.len(),
        }
        .bt()),
    }
}

/// Product of `dims`, or `None` if it does not fit in a `usize`.
pub(crate) fn checked_product(dims: &[usize]) -> Option<usize> {
    dims.iter().try_fold(1usize, |acc, d| acc.checked_mul(*d))
}

/// A shape known at compile time.
pub trait Shape {
    const DIMS: &'static [usize];
    const RANK: usize = Self::DIMS.len();

    /// # Panics
    /// If the element count overflows `usize`.
    fn element_count() -> usize {
        match checked_product(Self::DIMS) {
            Some(count) => count,
            None => panic!("element count of {:?} overflows usize", Self::DIMS),
        }
    }

    /// A [`Type`] of `kind` with this shape.
    fn to_type(kind: ElementKind) -> Type {
        Type::new(kind, Self::DIMS)
    }
}

macro_rules! shape {
    (($($C:ident),*), ($($N:tt),*), $name:ident) => {
        pub struct $name<$($C $N: usize, )*>;

        impl<$($C $N: usize, )*> Shape for $name<$({ $N }, )*> {
            const DIMS: &'static [usize] = &[$($N, )*];
        }
    };
}

shape!((const), (A), R1);
shape!((const, const), (A, B), R2);
shape!((const, const, const), (A, B, C), R3);
shape!((const, const, const, const), (A, B, C, D), R4);
shape!((const, const, const, const, const), (A, B, C, D, E), R5);
