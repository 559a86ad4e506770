use crate::core::ast::node::Node;
use crate::core::types::composite::{
    ArrayType, BuiltinType, CallType, ConstType, DividedType, FuncArg, FuncType, LlvmOpaqueType,
    PointerType, StructType, VectorType,
};
use crate::core::types::context::TypeContext;
use crate::core::types::generic::{TemplateMember, TemplateMemberDef};
use crate::core::types::primitive::BasicType;
use crate::core::types::resolver;
use crate::error::TypeError;
use std::fmt;
use std::rc::Rc;

/// every type term the front end works with; the five operations
/// (size, canonical form, clone, element projection, check) r
/// dispatched by a single match each
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Basic(BasicType),
    Pointer(PointerType),
    Array(ArrayType),
    Const(ConstType),
    Void,
    Alias,
    Struct(StructType),
    Vector(VectorType),
    Divided(DividedType),
    Func(FuncType),
    FuncArg(FuncArg),
    TemplateMember(TemplateMember),
    TemplateMemberDef(TemplateMemberDef),
    Builtin(BuiltinType),
    Call(CallType),
    Auto,
    LlvmOpaque(LlvmOpaqueType),
}

impl Type {
    pub fn pointer(instance: Type) -> Type {
        Type::Pointer(PointerType::new(instance))
    }

    pub fn array(count: Rc<Node>, element: Type) -> Type {
        Type::Array(ArrayType::new(count, element))
    }

    pub fn const_of(instance: Type) -> Type {
        Type::Const(ConstType::new(instance))
    }

    pub fn vector(element: Type, count: u64) -> Type {
        Type::Vector(VectorType {
            element: Box::new(element),
            count,
        })
    }

    /// total size in bits; composites sum their members, no alignment,
    /// no padding
    pub fn size_bits(&self, ctx: &TypeContext) -> Result<u64, TypeError> {
        match self {
            Type::Basic(basic) => Ok(basic.size_bits()),
            Type::Pointer(_) | Type::Func(_) => Ok(64),
            Type::Array(array) => Ok(array.length()? * array.element.borrow().size_bits(ctx)?),
            Type::Const(c) => c.instance.borrow().size_bits(ctx),
            Type::Void | Type::Alias | Type::Auto => Ok(0),
            Type::Builtin(_) | Type::Call(_) | Type::LlvmOpaque(_) => Ok(0),
            Type::Struct(s) => s.size_bits(ctx),
            Type::Vector(v) => Ok(v.element.size_bits(ctx)? * v.count),
            Type::Divided(d) => {
                let mut sum = 0;
                for part in &d.parts {
                    sum += part.size_bits(ctx)?;
                }
                Ok(sum)
            }
            Type::FuncArg(arg) => arg.ty.size_bits(ctx),
            Type::TemplateMember(member) => member.ty.size_bits(ctx),
            Type::TemplateMemberDef(def) => def.ty.size_bits(ctx),
        }
    }

    /// unwraps one constructor level; scalar-like terms project to themselves
    pub fn element_type(&self) -> Type {
        match self {
            Type::Pointer(p) => p.element_type(),
            Type::Array(a) => (**a.element.borrow()).clone(),
            Type::Const(c) => c.instance.borrow().element_type(),
            Type::Vector(v) => (*v.element).clone(),
            Type::FuncArg(arg) => arg.ty.element_type(),
            Type::TemplateMember(member) => member.ty.element_type(),
            Type::TemplateMemberDef(def) => def.ty.element_type(),
            _ => self.clone(),
        }
    }

    /// resolves aliases through the term graph, rebinding pointer,
    /// array and const slots in place; a root level struct term that
    /// names an alias comes back as `Some(resolved)` 4 the caller
    /// (see `TypeContext::check_type`)
    pub fn check(&self, ctx: &TypeContext) -> Result<Option<Type>, TypeError> {
        match self {
            Type::Pointer(p) => {
                p.check(ctx)?;
                Ok(None)
            }
            Type::Array(a) => {
                a.check(ctx)?;
                Ok(None)
            }
            Type::Const(c) => {
                c.check(ctx)?;
                Ok(None)
            }
            Type::Struct(s) => resolver::check_struct(ctx, s),
            _ => Ok(None),
        }
    }

    pub fn is_basic(&self) -> bool {
        matches!(self, Type::Basic(_))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Type::Pointer(_))
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, Type::Struct(_))
    }

    pub fn is_const(&self) -> bool {
        matches!(self, Type::Const(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Type::Basic(basic) if basic.is_float())
    }
}

/// the canonical printable form; this string keys the alias and
/// substitution tables, so it has to stay stable
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Basic(basic) => f.write_str(basic.name()),
            Type::Pointer(p) => write!(f, "{}*", p.instance.borrow()),
            Type::Array(a) => match a.length() {
                Ok(count) => write!(f, "{}[{}]", a.element.borrow(), count),
                Err(_) => write!(f, "{}[]", a.element.borrow()),
            },
            Type::Const(c) => write!(f, "{}", c.instance.borrow()),
            Type::Void => f.write_str("void"),
            Type::Alias => f.write_str("alias"),
            Type::Struct(s) => {
                if s.type_args.is_empty() {
                    f.write_str(&s.name)
                } else {
                    let args: Vec<String> = s.type_args.iter().map(|t| t.to_string()).collect();
                    write!(f, "{}<{}>", s.base_name(), args.join(","))
                }
            }
            Type::Vector(v) => write!(f, "<{} x {}>", v.element, v.count),
            Type::Divided(d) => match d.parts.first() {
                Some(part) => write!(f, "{} {{{} x {}}}", d.main, d.parts.len(), part),
                None => write!(f, "{} {{}}", d.main),
            },
            Type::Func(func) => {
                let mut args: Vec<String> = func.args.iter().map(|a| a.ty.to_string()).collect();
                if func.variadic {
                    args.push("...".to_string());
                }
                write!(f, "{}({})", func.result, args.join(","))
            }
            Type::FuncArg(arg) => f.write_str(&arg.name),
            Type::TemplateMember(member) => match &*member.value {
                Node::Int(n) => write!(f, "@{}{}", member.ty, n.value),
                Node::Float(n) => write!(f, "@{}{}", member.ty, n.value),
                Node::Str(s) => write!(f, "@{}\"{}\"", member.ty, s.value),
                _ => write!(f, "@{}", member.ty),
            },
            Type::TemplateMemberDef(def) => f.write_str(&def.name),
            Type::Builtin(builtin) => f.write_str(&builtin.name),
            Type::Call(_) => f.write_str("FuncCall"),
            Type::Auto | Type::LlvmOpaque(_) => Ok(()),
        }
    }
}
