use versatuple::record;

#[record(
    fields(field(ident = "level", ty = "i8"), field(ident = "label", ty = "Option<String>")),
    defaults = [-1, None],
    preset(name = "blank"),
    shortcut(field = "level", name = "top", value = 10),
    shortcut(field = "level", name = "bottom", value = -10),
)]
pub struct Floor;

fn main() {
    assert_eq!(Floor::blank(), Floor::default());
    assert_eq!(*Floor::blank().top().level(), 10);
    assert_eq!(*Floor::blank().bottom().level(), -10);
    assert!(Floor::default().label().is_none());
}
