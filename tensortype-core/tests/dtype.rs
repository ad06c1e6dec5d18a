use tensortype_core::{ElementKind, Error, NativeElement};

macro_rules! test_kind {
    ($kind:expr, $native:ty, $size:expr, $name:expr, $kind_mod:ident) => {
        mod $kind_mod {
            use super::*;

            #[test]
            fn size() {
                assert_eq!($kind.size(), $size);
                assert_eq!($kind.size(), std::mem::size_of::<$native>());
            }

            #[test]
            fn name() {
                assert_eq!($kind.name(), $name);
                assert_eq!($kind.to_string(), $name);
            }

            #[test]
            fn lookups_are_stable() {
                assert_eq!($kind.size(), $kind.size());
                assert_eq!($kind.name(), $kind.name());
            }

            #[test]
            fn native_type() {
                assert!($kind.is_type::<$native>());
                assert_eq!(<$native as NativeElement>::KIND, $kind);
                assert_eq!(ElementKind::of::<$native>(), $kind);
                for other in ElementKind::ALL.into_iter().filter(|k| *k != $kind) {
                    assert!(!other.is_type::<$native>());
                }
            }

            #[test]
            fn parse_name() {
                assert_eq!($name.parse::<ElementKind>().unwrap(), $kind);
            }

            #[test]
            fn tag() {
                assert_eq!(ElementKind::try_from($kind.as_u8()).unwrap(), $kind);
            }
        }
    };
}

test_kind!(ElementKind::Float, f32, 4, "float", float_test);
test_kind!(ElementKind::Double, f64, 8, "double", double_test);
test_kind!(ElementKind::Int8, i8, 1, "i8", int8_test);
test_kind!(ElementKind::Int32, i32, 4, "i32", int32_test);
test_kind!(
    ElementKind::Index,
    usize,
    std::mem::size_of::<usize>(),
    "index",
    index_test
);

#[test]
fn every_kind_has_metadata() {
    for kind in ElementKind::ALL {
        assert!(kind.size() > 0);
        assert!(!kind.name().is_empty());
    }
}

#[test]
fn default_is_index() {
    assert_eq!(ElementKind::default(), ElementKind::Index);
}

#[test]
fn non_numeric_types_never_match() {
    for kind in ElementKind::ALL {
        assert!(!kind.is_type::<bool>());
        assert!(!kind.is_type::<u8>());
        assert!(!kind.is_type::<String>());
    }
}

#[test]
fn unknown_tag_is_rejected() {
    let err = ElementKind::try_from(5u8).unwrap_err();
    assert!(matches!(err.root(), Error::UnknownElementKind(_)));
}

#[test]
fn unknown_name_is_rejected() {
    for bad in ["f32", "Float", "", "int64"] {
        let err = bad.parse::<ElementKind>().unwrap_err();
        assert!(matches!(err.root(), Error::UnknownElementKind(s) if s == bad));
    }
}
