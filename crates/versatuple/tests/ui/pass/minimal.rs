use versatuple::record;

#[record(fields(field(ident = "name", ty = "String")))]
pub struct Tag;

fn main() {
    let tag = Tag::new("alpha".to_string()).with_name("beta".to_string());

    assert_eq!(tag.name(), "beta");
    assert!(tag.is_valid());
    assert_eq!(Tag::default().into_tuple(), (String::new(),));
}
