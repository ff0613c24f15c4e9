use versatuple::record;

#[record(
    fields(field(ident = "id", ty = "u32"), field(ident = "color", ty = "&'static str")),
    shortcut(field = "color", name = "with_id", value = "yellow"),
)]
/// Compile-fail fixture for operation collisions.
/// The shortcut takes the name of the setter generated for `id`.
pub struct Paint;

fn main() {}
