use crate::core::ast::node::{BinaryOp, Node};
use crate::core::types::composite::{DividedType, FuncArg, FuncType};
use crate::core::types::context::TypeContext;
use crate::core::types::generic::TemplateMember;
use crate::core::types::primitive::BasicType;
use crate::core::types::resolver::name_to_type;
use crate::core::types::ty::Type;
use crate::error::TypeError;
use std::rc::Rc;

#[test]
fn test_primitive_sizes() {
    let ctx = TypeContext::new();
    for (name, bits) in [
        ("bool", 1),
        ("char", 8),
        ("uchar", 8),
        ("short", 16),
        ("ushort", 16),
        ("int", 32),
        ("uint", 32),
        ("long", 64),
        ("ulong", 64),
        ("cent", 128),
        ("ucent", 128),
        ("half", 16),
        ("bhalf", 16),
        ("float", 32),
        ("double", 64),
    ] {
        assert_eq!(name_to_type(name).size_bits(&ctx).unwrap(), bits, "{}", name);
    }
}

#[test]
fn test_float_classification() {
    assert!(BasicType::Float.is_float());
    assert!(BasicType::Double.is_float());
    assert!(BasicType::Half.is_float());
    assert!(BasicType::Bhalf.is_float());
    assert!(!BasicType::Int.is_float());
    assert!(!BasicType::Cent.is_float());
    assert!(BasicType::Uint.is_integer());
    assert!(!BasicType::Bool.is_integer());
    assert!(BasicType::Long.is_signed());
    assert!(!BasicType::Ulong.is_signed());
}

#[test]
fn test_ucent_prints_ucent() {
    // the canonical form distinguishes cent and ucent
    assert_eq!(name_to_type("cent").to_string(), "cent");
    assert_eq!(name_to_type("ucent").to_string(), "ucent");
}

#[test]
fn test_pointer_size_and_form() {
    let ctx = TypeContext::new();
    let ptr = Type::pointer(Type::Basic(BasicType::Int));
    assert_eq!(ptr.size_bits(&ctx).unwrap(), 64);
    assert_eq!(ptr.to_string(), "int*");
}

#[test]
fn test_const_is_transparent() {
    let ctx = TypeContext::new();
    let c = Type::const_of(Type::Basic(BasicType::Double));
    assert_eq!(c.size_bits(&ctx).unwrap(), 64);
    assert_eq!(c.to_string(), "double");
    assert_eq!(c.element_type().to_string(), "double");
}

#[test]
fn test_pointer_to_void_indexes_as_char() {
    let ptr = Type::pointer(Type::const_of(Type::Void));
    assert_eq!(ptr.element_type().to_string(), "char");
}

#[test]
fn test_vector_size_and_form() {
    let ctx = TypeContext::new();
    let v = Type::vector(Type::Basic(BasicType::Float), 4);
    assert_eq!(v.size_bits(&ctx).unwrap(), 128);
    assert_eq!(v.to_string(), "<float x 4>");
}

#[test]
fn test_divided_sums_parts() {
    let ctx = TypeContext::new();
    let d = Type::Divided(DividedType {
        main: Box::new(Type::Basic(BasicType::Cent)),
        parts: vec![Type::Basic(BasicType::Long), Type::Basic(BasicType::Long)],
    });
    assert_eq!(d.size_bits(&ctx).unwrap(), 128);
    assert_eq!(d.to_string(), "cent {2 x long}");
}

#[test]
fn test_array_size_from_comptime_count() {
    let ctx = TypeContext::new();
    let count = Rc::new(Node::binary(BinaryOp::Add, Node::int(3), Node::int(5)));
    let arr = Type::array(count, Type::Basic(BasicType::Int));
    assert_eq!(arr.size_bits(&ctx).unwrap(), 256);
    assert_eq!(arr.to_string(), "int[8]");
}

#[test]
fn test_non_constant_array_length_is_fatal() {
    let ctx = TypeContext::new();
    // division by zero never folds, so the count stays non constant
    let count = Rc::new(Node::binary(BinaryOp::Div, Node::int(1), Node::int(0)));
    let arr = Type::array(count, Type::Basic(BasicType::Int));
    assert!(matches!(
        arr.size_bits(&ctx),
        Err(TypeError::NonConstantArrayLength(_))
    ));
}

#[test]
fn test_comptime_folds_nested_arithmetic() {
    let expr = Node::binary(
        BinaryOp::Mul,
        Node::binary(BinaryOp::Add, Node::int(2), Node::int(2)),
        Node::int(4),
    );
    assert_eq!(expr.comptime(), Node::int(16));
}

#[test]
fn test_copy_is_deep_for_types() {
    let original = Type::pointer(Type::Basic(BasicType::Int));
    let copied = original.clone();
    assert_eq!(copied.to_string(), original.to_string());

    // mutating the copy's slot must not touch the original
    if let Type::Pointer(p) = &copied {
        *p.instance.borrow_mut() = Box::new(Type::Basic(BasicType::Long));
    }
    assert_eq!(original.to_string(), "int*");
    assert_eq!(copied.to_string(), "long*");
}

#[test]
fn test_copy_shares_ast_nodes() {
    let count = Rc::new(Node::int(4));
    let arr = Type::array(count, Type::Basic(BasicType::Int));
    let copied = arr.clone();
    match (&arr, &copied) {
        (Type::Array(a), Type::Array(b)) => assert!(Rc::ptr_eq(&a.count, &b.count)),
        _ => panic!("expected array terms"),
    }
}

#[test]
fn test_template_member_forms() {
    let m = Type::TemplateMember(TemplateMember {
        ty: Box::new(Type::Basic(BasicType::Int)),
        value: Rc::new(Node::int(5)),
    });
    assert_eq!(m.to_string(), "@int5");

    let s = Type::TemplateMember(TemplateMember {
        ty: Box::new(Type::Basic(BasicType::Char)),
        value: Rc::new(Node::str("hi")),
    });
    assert_eq!(s.to_string(), "@char\"hi\"");
}

#[test]
fn test_func_form_and_size() {
    let ctx = TypeContext::new();
    let func = Type::Func(FuncType {
        result: Box::new(Type::Void),
        args: vec![FuncArg {
            ty: Box::new(Type::Basic(BasicType::Int)),
            name: "a".to_string(),
        }],
        variadic: true,
    });
    assert_eq!(func.size_bits(&ctx).unwrap(), 64);
    assert_eq!(func.to_string(), "void(int,...)");
}

#[test]
fn test_name_to_type_facade() {
    assert!(name_to_type("int").is_basic());
    assert_eq!(name_to_type("void"), Type::Void);
    assert_eq!(name_to_type("alias"), Type::Alias);
    assert_eq!(name_to_type("int4").to_string(), "<int x 4>");
    assert_eq!(name_to_type("float4").to_string(), "<float x 4>");
    assert_eq!(name_to_type("short8").to_string(), "<short x 8>");

    // unknown identifiers become unresolved struct terms
    let unknown = name_to_type("Widget");
    assert!(unknown.is_struct());
    assert_eq!(unknown.to_string(), "Widget");
}
