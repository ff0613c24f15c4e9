use versatuple::{RecordKind, record};

/// Grid cell.
#[record(
    fields(field(ident = "row", ty = "u16"), field(ident = "col", ty = "u16")),
    traits(add(Copy)),
)]
pub(crate) struct Cell;

fn takes_copy<T: Copy>(value: T) -> T {
    value
}

fn main() {
    let cell = Cell::new(1, 2);
    let copied = takes_copy(cell);

    assert_eq!(cell, copied);
    assert_eq!(Cell::NAME, "Cell");
    assert_eq!(CellField::ALL, [CellField::Row, CellField::Col]);
}
