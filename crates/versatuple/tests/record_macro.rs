use proptest::prelude::*;
use std::collections::HashSet;
use versatuple::{RecordKind, record};

#[record(
    fields(
        field(ident = "id", ty = "u32"),
        field(ident = "color", ty = "String"),
        field(ident = "direction", ty = "&'static str"),
        field(ident = "count", ty = "i64"),
    ),
    defaults = [33, "red", "n", 222],
    validator(field = "count", check = "|count: &i64| (0..100).contains(count)"),
    shortcut(field = "color", name = "yellow", value = "yellow"),
    shortcut(field = "direction", name = "north", value = "n"),
    preset(name = "id22", values(id = 22)),
)]
pub struct VTuple;

/// A record with float fields gives up `Eq`, `Hash` and `Ord`.
#[record(
    fields(field(ident = "x", ty = "f64"), field(ident = "y", ty = "f64")),
    preset(name = "unit_x", values(x = 1.0)),
    traits(remove(Eq, Hash, Ord)),
)]
pub struct Point;

#[record(fields(field(ident = "value", ty = "i32")))]
pub struct Single;

fn sample() -> VTuple {
    VTuple::new(3, "yellow".to_string(), "n", 25)
}

#[test]
fn concrete_scenario() {
    let vt = sample();

    assert_eq!(*vt.id(), 3);
    assert_eq!(vt.color(), "yellow");
    assert_eq!(*vt.direction(), "n");
    assert_eq!(*vt.count(), 25);
    assert!(vt.is_valid());

    let moved = vt.with_count(150);
    assert!(!moved.is_valid());
    assert_eq!(*vt.count(), 25);
}

#[test]
fn setters_leave_the_receiver_untouched() {
    let vt = sample();
    let updated = vt.with_id(4);

    assert_eq!(*updated.id(), 4);
    assert_eq!(updated.color(), vt.color());
    assert_eq!(vt, sample());
    assert_ne!(vt, updated);
}

#[test]
fn default_uses_configured_defaults() {
    assert_eq!(
        VTuple::default().into_tuple(),
        (33, "red".to_string(), "n", 222)
    );
    assert!(!VTuple::default().is_valid());
}

#[test]
fn preset_overrides_only_listed_fields() {
    assert_eq!(
        VTuple::id22().into_tuple(),
        (22, "red".to_string(), "n", 222)
    );
}

#[test]
fn shortcuts_pin_one_field() {
    let vt = VTuple::new(3, "red".to_string(), "s", 25);

    let yellow = vt.yellow();
    assert_eq!(yellow.color(), "yellow");
    assert_eq!(yellow.id(), vt.id());
    assert_eq!(yellow.direction(), vt.direction());
    assert_eq!(yellow.count(), vt.count());

    assert_eq!(*vt.north().direction(), "n");
    assert_eq!(vt.yellow().north(), vt.north().yellow());
}

#[test]
fn validator_table_is_indexed_by_field() {
    let table = VTuple::validators();

    assert_eq!(table.len(), 1);
    assert_eq!(table[0].0, VTupleField::Count);
    assert!((table[0].1)(&sample()));
    assert!(!(table[0].1)(&sample().with_count(-1)));
}

#[test]
fn field_enum_matches_field_order() {
    assert_eq!(VTuple::fields(), ["id", "color", "direction", "count"]);
    assert_eq!(VTupleField::ALL.len(), 4);
    assert_eq!(VTupleField::Count.index(), 3);
    assert_eq!(VTupleField::Direction.name(), "direction");
    assert_eq!(VTupleField::Color.to_string(), "color");

    for (index, field) in VTupleField::ALL.iter().enumerate() {
        assert_eq!(field.index(), index);
        assert_eq!(field.name(), VTuple::fields()[index]);
    }
}

#[test]
fn record_kind_describes_the_type() {
    assert_eq!(VTuple::NAME, "VTuple");
    assert_eq!(VTuple::FIELDS, VTuple::fields());
    assert_eq!(
        &VTuple::OPERATIONS[..6],
        ["new", "default", "fields", "into_tuple", "is_valid", "validators"]
    );
    assert!(VTuple::has_operation("with_direction"));
    assert!(VTuple::has_operation("id22"));
    assert!(VTuple::has_operation("north"));
    assert!(!VTuple::has_operation("with_speed"));

    assert!(RecordKind::is_valid(&sample()));
}

#[test]
fn tuple_conversions() {
    let vt: VTuple = (3, "yellow".to_string(), "n", 25).into();
    assert_eq!(vt, sample());

    let (id, color, direction, count): (u32, String, &str, i64) = vt.into();
    assert_eq!((id, color.as_str(), direction, count), (3, "yellow", "n", 25));

    let single = Single::from((7,));
    assert_eq!(single.into_tuple(), (7,));
}

#[test]
fn records_hash_and_order_like_tuples() {
    let low = sample();
    let high = sample().with_id(4);

    assert!(low < high);
    assert!(low.with_count(26) > low);

    let set: HashSet<VTuple> = [low.clone(), low.clone(), high].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn float_records_without_total_order() {
    let origin = Point::default();
    assert_eq!(origin, Point::new(0.0, 0.0));

    let moved = origin.with_y(2.5);
    assert_eq!(*moved.y(), 2.5);
    assert_eq!(*origin.y(), 0.0);
    assert!(origin < moved);

    assert_eq!(Point::unit_x().into_tuple(), (1.0, 0.0));
    assert!(Point::new(f64::NAN, 0.0).is_valid());
}

#[test]
fn records_without_validators_are_vacuously_valid() {
    assert!(Single::validators().is_empty());
    assert!(Single::new(i32::MIN).is_valid());
}

fn arb_row() -> impl Strategy<Value = (u32, String, i64)> {
    (any::<u32>(), "[a-z]{1,8}", -50_i64..150)
}

proptest! {
    #[test]
    fn independently_built_records_are_equal((id, color, count) in arb_row()) {
        let a = VTuple::new(id, color.clone(), "n", count);
        let b = VTuple::new(id, color, "n", count);

        prop_assert_eq!(a, b);
    }

    #[test]
    fn setters_never_touch_the_receiver((id, color, count) in arb_row(), next in any::<u32>()) {
        let original = VTuple::new(id, color, "n", count);
        let snapshot = original.clone();

        let updated = original.with_id(next);

        prop_assert_eq!(&original, &snapshot);
        prop_assert_eq!(*updated.id(), next);
        prop_assert_eq!(updated.color(), original.color());
    }

    #[test]
    fn validity_matches_count_range((id, color, count) in arb_row()) {
        let record = VTuple::new(id, color, "n", count);

        prop_assert_eq!(record.is_valid(), (0..100).contains(&count));
    }
}
