use crate::node::expand;
use proc_macro2::TokenStream;
use quote::quote;

fn expand_ok(args: TokenStream) -> String {
    let out = expand(args, quote!(pub struct VTuple;)).to_string();
    assert!(!out.contains("compile_error"), "unexpected error: {out}");

    out
}

fn expand_err(args: TokenStream) -> String {
    let out = expand(args, quote!(pub struct VTuple;)).to_string();
    assert!(out.contains("compile_error"), "expected an error: {out}");

    out
}

fn vtuple_fields() -> TokenStream {
    quote! {
        fields(
            field(ident = "id", ty = "u32"),
            field(ident = "color", ty = "&'static str"),
            field(ident = "direction", ty = "&'static str"),
            field(ident = "count", ty = "u32"),
        )
    }
}

#[test]
fn generates_struct_accessors_and_setters() {
    let fields = vtuple_fields();
    let out = expand_ok(quote!(#fields));

    assert!(out.contains("pub struct VTuple"));
    assert!(out.contains("pub const fn new"));
    assert!(out.contains("pub const fn count"));
    assert!(out.contains("pub fn with_count"));
    assert!(out.contains("pub fn into_tuple"));
    assert!(out.contains("pub enum VTupleField"));
    assert!(out.contains("RecordKind for VTuple"));
}

#[test]
fn generates_presets_shortcuts_and_validators() {
    let fields = vtuple_fields();
    let out = expand_ok(quote! {
        #fields,
        defaults = [33, "red", "n", 222],
        validator(field = "count", check = "|c: &u32| *c < 100"),
        shortcut(field = "color", name = "yellow", value = "yellow"),
        preset(name = "id22", values(id = 22)),
    });

    assert!(out.contains("pub fn yellow"));
    assert!(out.contains("pub fn id22"));
    assert!(out.contains("fn __validate_count"));
    assert!(out.contains("VTupleField :: Count"));
}

#[test]
fn operation_table_lists_builtins_first() {
    let fields = vtuple_fields();
    let out = expand_ok(quote! {
        #fields,
        shortcut(field = "color", name = "yellow", value = "yellow"),
    });

    let ops = out
        .split("const OPERATIONS")
        .nth(1)
        .unwrap_or_default()
        .to_string();
    let new = ops.find("\"new\"").unwrap();
    let getter = ops.find("\"count\"").unwrap();
    let setter = ops.find("\"with_count\"").unwrap();
    let shortcut = ops.find("\"yellow\"").unwrap();

    assert!(new < getter && getter < setter && setter < shortcut);
}

#[test]
fn reserved_field_name_is_rejected() {
    let out = expand_err(quote! {
        fields(field(ident = "id", ty = "u32"), field(ident = "validators", ty = "u32"))
    });

    assert!(out.contains("reserved"));
}

#[test]
fn duplicate_field_is_rejected() {
    let out = expand_err(quote! {
        fields(field(ident = "id", ty = "u32"), field(ident = "id", ty = "u64"))
    });

    assert!(out.contains("more than once"));
}

#[test]
fn defaults_length_must_match() {
    let fields = vtuple_fields();
    let out = expand_err(quote!(#fields, defaults = [1, 2]));

    assert!(out.contains("4 fields but 2 defaults"));
}

#[test]
fn shortcut_named_like_a_setter_collides() {
    let fields = vtuple_fields();
    let out = expand_err(quote! {
        #fields,
        shortcut(field = "color", name = "with_id", value = "yellow"),
    });

    assert!(out.contains("collides"));
}

#[test]
fn preset_named_like_a_setter_collides() {
    let fields = vtuple_fields();
    let out = expand_err(quote! {
        #fields,
        preset(name = "with_color", values(color = "blue")),
    });

    assert!(out.contains("collides"));
}

#[test]
fn preset_with_unknown_field_is_rejected() {
    let fields = vtuple_fields();
    let out = expand_err(quote! {
        #fields,
        preset(name = "fast", values(speed = 9)),
    });

    assert!(out.contains("unknown field"));
}

#[test]
fn validator_with_unknown_field_is_rejected() {
    let fields = vtuple_fields();
    let out = expand_err(quote! {
        #fields,
        validator(field = "speed", check = "|_: &u32| true"),
    });

    assert!(out.contains("unknown field"));
}

#[test]
fn colliding_field_variants_are_rejected() {
    let out = expand_err(quote! {
        fields(field(ident = "a1", ty = "u8"), field(ident = "a_1", ty = "u8"))
    });

    assert!(out.contains("same variant"));
}

#[test]
fn item_must_be_a_plain_unit_struct() {
    let fields = vtuple_fields();

    let out = expand(fields.clone(), quote!(pub struct VTuple { id: u32 })).to_string();
    assert!(out.contains("compile_error"));

    let out = expand(fields, quote!(pub struct VTuple<T>;)).to_string();
    assert!(out.contains("cannot be generic"));
}

#[test]
fn removed_traits_leave_the_derive_list() {
    let fields = vtuple_fields();
    let out = expand_ok(quote!(#fields, traits(remove(Hash, Eq, Ord))));
    let derive = out.split("pub struct VTuple").next().unwrap_or_default();

    assert!(derive.contains("PartialOrd"));
    assert!(!derive.contains("Hash"));
}

#[test]
fn required_traits_cannot_be_removed() {
    let fields = vtuple_fields();

    expand_err(quote!(#fields, traits(remove(Clone))));
}

#[test]
fn removing_a_prerequisite_trait_is_rejected() {
    let fields = vtuple_fields();
    let out = expand_err(quote!(#fields, traits(remove(Eq))));

    assert!(out.contains("requires trait"));
}

#[test]
fn shortcut_named_like_a_trait_method_is_rejected() {
    let fields = vtuple_fields();
    let out = expand_err(quote! {
        #fields,
        shortcut(field = "color", name = "clone", value = "yellow"),
    });

    assert!(out.contains("would shadow a trait method"));
}

#[test]
fn field_named_like_a_trait_method_is_rejected() {
    let out = expand_err(quote! {
        fields(field(ident = "id", ty = "u32"), field(ident = "clone", ty = "u32"))
    });

    assert!(out.contains("would shadow a trait method"));
}

#[test]
fn preset_named_like_a_trait_method_is_rejected() {
    let fields = vtuple_fields();
    let out = expand_err(quote! {
        #fields,
        preset(name = "max", values(id = 1)),
    });

    assert!(out.contains("would shadow a trait method"));
}

#[test]
fn field_whose_variant_is_a_keyword_is_rejected() {
    let out = expand_err(quote! {
        fields(field(ident = "id", ty = "u8"), field(ident = "self_", ty = "u8"))
    });

    assert!(out.contains("maps to the keyword"));
}

#[test]
fn preset_constructors_document_their_fields() {
    let fields = vtuple_fields();
    let out = expand_ok(quote! {
        #fields,
        preset(name = "id22", values(count = 1, id = 22)),
        preset(name = "plain"),
    });

    assert!(out.contains("the default record with `id`, `count` set."));
    assert!(out.contains("Factory preset equal to the default record."));
}
