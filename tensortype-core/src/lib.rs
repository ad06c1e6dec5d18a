//! Tensortype describes what a tensor holds: its element kind and its dimension sizes.
//!
//! A [`Type`] stores its sizes inline (rank below [`MAX_TENSOR_DIMENSIONS`]), so it is `Copy`,
//! cheap to compare and never touches the heap. Everything that reasons about tensors
//! (memory layout, operator type-checking, codegen) compares and queries these values.
//!
//! ## A quick guide
//! - Pick an [`ElementKind`] (or a native type implementing [`NativeElement`]).
//! - Build a [`Type`] with [`Type::new`], or from a static shape with [`Type::of`].
//! - Query it with [`Type::dims`], [`Type::size`], [`Type::element_size`] and friends.
//! - Project rank-4 shapes with [`ShapeNHWC`], or collapse them with [`flatten_cdr`].
//!
//! Broken preconditions (too many dimensions, wrong rank for a projection) panic.
//! Callers at a raw boundary can use the `try_*` and [`std::str::FromStr`] forms, which
//! return [`Result`] instead.
//!
//! ```
//! use tensortype_core::{flatten_cdr, ElementKind, ShapeNHWC, Type, R4};
//!
//! let ty = Type::new(ElementKind::Float, &[7, 3, 4, 2]);
//! assert_eq!(ty.size(), 168);
//! assert_eq!(ty.element_size(), 4);
//! assert_eq!(ty.to_string(), "float<7 x 3 x 4 x 2>");
//! assert_eq!(ty, Type::of::<R4<7, 3, 4, 2>, f32>());
//! assert!(ty.is_type::<f32>());
//!
//! assert_eq!(flatten_cdr(ty.dims()), (7, 24));
//! assert_eq!(ShapeNHWC::from_dims(ty.dims()), ShapeNHWC::new(7, 3, 4, 2));
//!
//! let parsed: Type = "float<7 x 3 x 4 x 2>".parse().unwrap();
//! assert_eq!(parsed, ty);
//! ```

mod dtype;
mod error;
mod shape;
mod ty;

pub use dtype::{ElementKind, NativeElement};
pub use error::{Context, Error, Result};
pub use shape::{flatten_cdr, try_flatten_cdr, Shape, ShapeNHWC, R1, R2, R3, R4, R5};
pub use ty::{Type, TypeRef, MAX_TENSOR_DIMENSIONS};
