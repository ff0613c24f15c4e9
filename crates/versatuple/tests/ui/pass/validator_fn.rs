use versatuple::record;

fn in_range(id: &u32) -> bool {
    (1..=64).contains(id)
}

#[record(
    fields(field(ident = "id", ty = "u32"), field(ident = "color", ty = "&'static str")),
    defaults = [33, "red"],
    validator(field = "id", check = "in_range"),
    shortcut(field = "color", name = "yellow", value = "yellow"),
    preset(name = "id22", values(id = 22)),
    traits(remove(Hash)),
)]
pub struct VTuple;

fn main() {
    let vt = VTuple::id22().yellow();

    assert_eq!(vt.into_tuple(), (22, "yellow"));
    assert!(VTuple::default().is_valid());
    assert!(!VTuple::default().with_id(0).is_valid());
    assert_eq!(VTuple::validators()[0].0, VTupleField::Id);
}
