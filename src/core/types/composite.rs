use crate::core::ast::node::Node;
use crate::core::types::context::TypeContext;
use crate::core::types::primitive::BasicType;
use crate::core::types::ty::Type;
use crate::error::TypeError;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// elaboration rebinds `instance` in place; everything else in the
/// type graph is plain owned data
#[derive(Debug, Clone, PartialEq)]
pub struct PointerType {
    pub instance: RefCell<Box<Type>>,
}

impl PointerType {
    pub fn new(instance: Type) -> Self {
        Self {
            instance: RefCell::new(Box::new(instance)),
        }
    }

    /// strips const wrappers in place; void pointers index like char pointers
    pub fn element_type(&self) -> Type {
        loop {
            let unwrapped = match &**self.instance.borrow() {
                Type::Const(c) => Some(c.instance.borrow().element_type()),
                _ => None,
            };
            match unwrapped {
                Some(t) => *self.instance.borrow_mut() = Box::new(t),
                None => break,
            }
        }
        let inner = self.instance.borrow();
        match &**inner {
            Type::Void => Type::Basic(BasicType::Char),
            other => other.clone(),
        }
    }

    pub fn check(&self, ctx: &TypeContext) -> Result<(), TypeError> {
        let resolved = {
            let inner = self.instance.borrow();
            if inner.is_basic() {
                None
            } else {
                inner.check(ctx)?
            }
        };
        if let Some(t) = resolved {
            *self.instance.borrow_mut() = Box::new(t);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub count: Rc<Node>,
    pub element: RefCell<Box<Type>>,
}

impl ArrayType {
    pub fn new(count: Rc<Node>, element: Type) -> Self {
        Self {
            count,
            element: RefCell::new(Box::new(element)),
        }
    }

    /// the count node must reduce to a nonnegative integer literal
    pub fn length(&self) -> Result<u64, TypeError> {
        match self.count.comptime() {
            Node::Int(n) if n.value >= 0 => Ok(n.value as u64),
            _ => Err(TypeError::NonConstantArrayLength(
                self.element.borrow().to_string(),
            )),
        }
    }

    pub fn check(&self, ctx: &TypeContext) -> Result<(), TypeError> {
        let resolved = {
            let element = self.element.borrow();
            if element.is_basic() {
                None
            } else {
                element.check(ctx)?
            }
        };
        if let Some(t) = resolved {
            *self.element.borrow_mut() = Box::new(t);
        }
        Ok(())
    }
}

/// transparent wrapper: size, printing and element projection all
/// pass through to the wrapped type
#[derive(Debug, Clone, PartialEq)]
pub struct ConstType {
    pub instance: RefCell<Box<Type>>,
}

impl ConstType {
    pub fn new(instance: Type) -> Self {
        Self {
            instance: RefCell::new(Box::new(instance)),
        }
    }

    pub fn check(&self, ctx: &TypeContext) -> Result<(), TypeError> {
        let resolved = { self.instance.borrow().check(ctx)? };
        if let Some(t) = resolved {
            *self.instance.borrow_mut() = Box::new(t);
        }
        Ok(())
    }
}

/// nominal, possibly parameterized aggregate reference; `name` carries
/// the mangled `Base<args>` form once type arguments r known
#[derive(Debug, Clone, PartialEq)]
pub struct StructType {
    pub name: String,
    pub type_args: Vec<Type>,
}

impl StructType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_args: Vec::new(),
        }
    }

    pub fn with_args(name: impl Into<String>, type_args: Vec<Type>) -> Self {
        Self {
            name: name.into(),
            type_args,
        }
    }

    pub fn base_name(&self) -> &str {
        match self.name.find('<') {
            Some(pos) => &self.name[..pos],
            None => &self.name,
        }
    }

    /// the `<...>` part of an angled name
    pub fn angle_suffix(&self) -> Option<&str> {
        self.name.find('<').map(|pos| &self.name[pos..])
    }

    /// rewrite an angled name so it stays in sync w/ the type arguments
    pub fn update_by_types(&mut self) {
        if let Some(pos) = self.name.find('<') {
            let args: Vec<String> = self.type_args.iter().map(|t| t.to_string()).collect();
            self.name.truncate(pos);
            self.name.push('<');
            self.name.push_str(&args.join(","));
            self.name.push('>');
        }
    }
}

impl fmt::Display for StructType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.type_args.is_empty() {
            f.write_str(&self.name)
        } else {
            let args: Vec<String> = self.type_args.iter().map(|t| t.to_string()).collect();
            write!(f, "{}<{}>", self.base_name(), args.join(","))
        }
    }
}

/// SIMD style fixed width vector
#[derive(Debug, Clone, PartialEq)]
pub struct VectorType {
    pub element: Box<Type>,
    pub count: u64,
}

/// layout split view of `main`, used when the ABI lowers a value as a
/// sequence of smaller parts
#[derive(Debug, Clone, PartialEq)]
pub struct DividedType {
    pub main: Box<Type>,
    pub parts: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncType {
    pub result: Box<Type>,
    pub args: Vec<FuncArg>,
    pub variadic: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncArg {
    pub ty: Box<Type>,
    pub name: String,
}

/// placeholder 4 a compile time metafunction yielding a type
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltinType {
    pub name: String,
    pub args: Vec<Rc<Node>>,
    pub block: Rc<Node>,
}

/// placeholder 4 a function-returning-type call
#[derive(Debug, Clone, PartialEq)]
pub struct CallType {
    pub name: String,
    pub args: Vec<Rc<Node>>,
}

/// backend supplied opaque type; the handle indexes the backend type table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlvmOpaqueType {
    pub handle: usize,
}
