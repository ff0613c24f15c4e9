use versatuple::record;

#[record(fields(field(ident = "id", ty = "u32"), field(ident = "validators", ty = "u32")))]
/// Compile-fail fixture for reserved names.
/// `validators` is a built-in operation of every record.
pub struct Checked;

fn main() {}
