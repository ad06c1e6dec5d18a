use tensortype_core::{flatten_cdr, try_flatten_cdr, ElementKind, Error, ShapeNHWC, Type};

#[test]
fn nhwc_from_values_and_dims_agree() {
    let a = ShapeNHWC::new(2, 3, 4, 5);
    let b = ShapeNHWC::from_dims(&[2, 3, 4, 5]);
    assert_eq!(a, b);
    assert_eq!((b.n, b.h, b.w, b.c), (2, 3, 4, 5));
}

#[test]
fn nhwc_fieldwise_equality() {
    assert_ne!(ShapeNHWC::new(2, 3, 4, 5), ShapeNHWC::new(2, 3, 5, 4));
    assert_ne!(ShapeNHWC::new(1, 3, 4, 5), ShapeNHWC::new(2, 3, 4, 5));
}

#[test]
fn nhwc_from_type_dims() {
    let ty = Type::new(ElementKind::Float, &[8, 28, 28, 3]);
    let shape = ShapeNHWC::from_dims(ty.dims());
    assert_eq!(shape, ShapeNHWC::new(8, 28, 28, 3));
    assert_eq!(shape.to_string(), "nhwc(8, 28, 28, 3)");
}

#[test]
#[should_panic(expected = "ShapeNHWC expects exactly 4 dimensions, got 3")]
fn nhwc_rank3_panics() {
    ShapeNHWC::from_dims(&[2, 3, 4]);
}

#[test]
fn nhwc_wrong_rank_is_an_error() {
    let cases: [&[usize]; 3] = [&[], &[1, 2, 3], &[1, 2, 3, 4, 5]];
    for dims in cases {
        let err = ShapeNHWC::try_from(dims).unwrap_err();
        assert!(matches!(err.root(), Error::RankMismatch { got, .. } if *got == dims.len()));
    }
}

#[test]
fn flatten() {
    assert_eq!(flatten_cdr(&[7, 3, 4, 2]), (7, 24));
    assert_eq!(flatten_cdr(&[5, 2]), (5, 2));
    assert_eq!(flatten_cdr(&[3, 0, 9]), (3, 0));
}

#[test]
fn flatten_type_dims() {
    let ty = Type::new(ElementKind::Int32, &[7, 3, 4, 2]);
    let (first, rest) = flatten_cdr(ty.dims());
    assert_eq!(first * rest, ty.size());
}

#[test]
#[should_panic(expected = "flatten_cdr expects at least 2 dimensions, got 1")]
fn flatten_rank1_panics() {
    flatten_cdr(&[7]);
}

#[test]
fn flatten_short_is_an_error() {
    assert!(try_flatten_cdr(&[]).is_err());
    assert!(try_flatten_cdr(&[4]).is_err());
    assert_eq!(try_flatten_cdr(&[4, 4]).unwrap(), (4, 4));
}

#[test]
#[should_panic(expected = "overflows usize")]
fn flatten_overflow_panics() {
    flatten_cdr(&[1, usize::MAX, 2]);
}

#[test]
fn flatten_overflow_is_an_error() {
    let err = try_flatten_cdr(&[1, usize::MAX, 2]).unwrap_err();
    assert!(matches!(err.root(), Error::SizeOverflow { dims } if dims == &[1, usize::MAX, 2]));
    // Only the tail is multiplied, so a huge leading dimension is fine.
    assert_eq!(try_flatten_cdr(&[usize::MAX, 2]).unwrap(), (usize::MAX, 2));
}
