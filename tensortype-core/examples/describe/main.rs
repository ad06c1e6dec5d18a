use tensortype_core::{flatten_cdr, ElementKind, ShapeNHWC, Type, R2};

fn main() {
    let images = Type::new(ElementKind::Float, &[8, 28, 28, 3]);
    let nhwc = ShapeNHWC::from_dims(images.dims());
    let (batch, features) = flatten_cdr(images.dims());
    println!(
        "{images}: {} elements, {} bytes, {nhwc}, flattened to {batch} x {features}",
        images.size(),
        images.size() * images.element_size(),
    );

    let weights = Type::of::<R2<2352, 10>, f32>();
    assert_eq!(weights.dims()[0], features);
    println!("{weights}");

    for kind in ElementKind::ALL {
        println!("{kind:>6}: {} bytes", kind.size());
    }

    let parsed: Type = "i8<4 x 4>".parse().unwrap();
    dbg!(parsed, Type::default());
}
