use crate::core::ast::node::{Node, StructDecl, VarDecl};
use crate::core::types::composite::StructType;
use crate::core::types::context::TypeContext;
use crate::core::types::primitive::BasicType;
use crate::core::types::ty::Type;
use crate::error::TypeError;
use codespan::Span;
use std::rc::Rc;

fn field(name: &str, ty: Type) -> Rc<Node> {
    Rc::new(Node::Var(VarDecl {
        name: name.to_string(),
        ty,
        span: Span::new(0, 0),
    }))
}

fn decl(name: &str, elements: Vec<Rc<Node>>) -> StructDecl {
    StructDecl {
        name: name.to_string(),
        generics: Vec::new(),
        elements,
        span: Span::new(0, 0),
    }
}

#[test]
fn test_struct_layout() {
    let ctx = TypeContext::new();
    ctx.register_struct(decl(
        "S",
        vec![
            field("a", Type::Basic(BasicType::Int)),
            field("b", Type::Basic(BasicType::Char)),
            field("c", Type::Basic(BasicType::Double)),
        ],
    ));

    let s = StructType::new("S");
    assert_eq!(s.size_bits(&ctx).unwrap(), 104);
    assert_eq!(s.field_count(&ctx).unwrap(), 3);
    assert!(s.is_simple(&ctx).unwrap());
}

#[test]
fn test_nested_struct_is_not_simple() {
    let ctx = TypeContext::new();
    ctx.register_struct(decl(
        "S",
        vec![
            field("a", Type::Basic(BasicType::Int)),
            field("b", Type::Basic(BasicType::Char)),
            field("c", Type::Basic(BasicType::Double)),
        ],
    ));
    ctx.register_struct(decl(
        "T",
        vec![
            field("a", Type::Basic(BasicType::Int)),
            field("b", Type::Struct(StructType::new("S"))),
        ],
    ));

    let t = StructType::new("T");
    assert!(!t.is_simple(&ctx).unwrap());
    assert_eq!(t.size_bits(&ctx).unwrap(), 136);
    assert_eq!(t.field_count(&ctx).unwrap(), 2);
}

#[test]
fn test_non_var_elements_are_skipped() {
    // nested declarations do not contribute fields
    let ctx = TypeContext::new();
    let nested = Rc::new(Node::Struct(decl("Inner", Vec::new())));
    ctx.register_struct(decl(
        "Outer",
        vec![field("a", Type::Basic(BasicType::Int)), nested],
    ));

    let outer = StructType::new("Outer");
    assert_eq!(outer.size_bits(&ctx).unwrap(), 32);
    assert_eq!(outer.field_count(&ctx).unwrap(), 1);
    assert!(outer.is_simple(&ctx).unwrap());
}

#[test]
fn test_undefined_struct_diagnostic() {
    let ctx = TypeContext::new();
    let err = StructType::new("Nope").size_bits(&ctx).unwrap_err();
    assert_eq!(err.to_string(), "undefined structure 'Nope'");
    assert_eq!(err, TypeError::UndefinedStruct("Nope".to_string()));
}

#[test]
fn test_alias_to_primitive_used_as_struct() {
    // alias Foo = int works wherever Foo appears
    let ctx = TypeContext::new();
    ctx.define_alias("Foo", Type::Basic(BasicType::Int));

    let s = StructType::new("Foo");
    assert_eq!(s.size_bits(&ctx).unwrap(), 32);
    assert!(s.is_simple(&ctx).unwrap());
    assert_eq!(s.field_count(&ctx).unwrap(), 1);
}

#[test]
fn test_pointer_field_breaks_cycle() {
    let ctx = TypeContext::new();
    ctx.register_struct(decl(
        "ListNode",
        vec![
            field("value", Type::Basic(BasicType::Int)),
            field("next", Type::pointer(Type::Struct(StructType::new("ListNode")))),
        ],
    ));

    assert_eq!(StructType::new("ListNode").size_bits(&ctx).unwrap(), 96);
}

#[test]
fn test_struct_containment_cycle_is_rejected() {
    let ctx = TypeContext::new();
    ctx.register_struct(decl(
        "A",
        vec![field("b", Type::Struct(StructType::new("B")))],
    ));
    ctx.register_struct(decl(
        "B",
        vec![field("a", Type::Struct(StructType::new("A")))],
    ));

    assert!(matches!(
        StructType::new("A").size_bits(&ctx),
        Err(TypeError::CircularDependency(_))
    ));
}

#[test]
fn test_struct_size_is_memoized() {
    let ctx = TypeContext::new();
    ctx.register_struct(decl("S", vec![field("a", Type::Basic(BasicType::Long))]));

    let s = StructType::new("S");
    assert_eq!(s.size_bits(&ctx).unwrap(), 64);
    assert!(ctx.size_cache.borrow().contains_key("S"));
    assert_eq!(s.size_bits(&ctx).unwrap(), 64);
}

#[test]
fn test_struct_field_with_array() {
    let ctx = TypeContext::new();
    ctx.register_struct(decl(
        "Buffer",
        vec![field(
            "data",
            Type::array(Rc::new(Node::int(32)), Type::Basic(BasicType::Uchar)),
        )],
    ));

    let s = StructType::new("Buffer");
    assert_eq!(s.size_bits(&ctx).unwrap(), 256);
    assert!(!s.is_simple(&ctx).unwrap());
}
