use crate::core::ast::node::{Node, StructDecl, VarDecl};
use crate::core::types::composite::{ArrayType, ConstType, FuncArg, FuncType, PointerType, VectorType};
use crate::core::types::context::TypeContext;
use crate::core::types::generic::SubstitutionScope;
use crate::core::types::resolver::resolve;
use crate::core::types::ty::Type;
use crate::error::TypeError;
use std::rc::Rc;

/// expand a struct template 4 one argument list and register the
/// specialization under its mangled `Base<args>` name; idempotent,
/// an already registered specialization is returned as is
pub fn instantiate_template(
    ctx: &TypeContext,
    decl: &Rc<StructDecl>,
    angle_suffix: &str,
    type_args: &[Type],
) -> Result<Rc<StructDecl>, TypeError> {
    let base = match decl.name.find('<') {
        Some(pos) => &decl.name[..pos],
        None => decl.name.as_str(),
    };
    let mangled = format!("{}{}", base, angle_suffix);

    if let Some(existing) = ctx.lookup_struct(&mangled) {
        if existing.generics.is_empty() {
            return Ok(existing);
        }
    }

    if decl.generics.len() != type_args.len() {
        return Err(TypeError::UninstantiableTemplate(
            mangled,
            format!(
                "expected {} type argument(s), got {}",
                decl.generics.len(),
                type_args.len()
            ),
        ));
    }

    let mut scope = SubstitutionScope::new(ctx);
    for (param, arg) in decl.generics.iter().zip(type_args) {
        scope.bind(param.clone(), arg.clone());
    }

    let mut elements = Vec::with_capacity(decl.elements.len());
    for element in &decl.elements {
        match &**element {
            Node::Var(var) => {
                let ty = substitute(ctx, &var.ty)?;
                elements.push(Rc::new(Node::Var(VarDecl {
                    name: var.name.clone(),
                    ty,
                    span: var.span,
                })));
            }
            _ => elements.push(element.clone()),
        }
    }
    drop(scope);

    Ok(ctx.register_struct(StructDecl {
        name: mangled,
        generics: Vec::new(),
        elements,
        span: decl.span,
    }))
}

/// structural substitution: apply the resolver fixpoint at every node
/// of the term, recursing through the composite constructors
fn substitute(ctx: &TypeContext, ty: &Type) -> Result<Type, TypeError> {
    let t = resolve(ctx, ty)?;
    Ok(match t {
        Type::Pointer(p) => {
            let inner = substitute(ctx, &p.instance.borrow())?;
            Type::Pointer(PointerType::new(inner))
        }
        Type::Array(a) => {
            let element = substitute(ctx, &a.element.borrow())?;
            Type::Array(ArrayType::new(a.count.clone(), element))
        }
        Type::Const(c) => {
            let inner = substitute(ctx, &c.instance.borrow())?;
            Type::Const(ConstType::new(inner))
        }
        Type::Vector(v) => Type::Vector(VectorType {
            element: Box::new(substitute(ctx, &v.element)?),
            count: v.count,
        }),
        Type::Func(func) => {
            let result = substitute(ctx, &func.result)?;
            let mut args = Vec::with_capacity(func.args.len());
            for arg in &func.args {
                args.push(FuncArg {
                    ty: Box::new(substitute(ctx, &arg.ty)?),
                    name: arg.name.clone(),
                });
            }
            Type::Func(FuncType {
                result: Box::new(result),
                args,
                variadic: func.variadic,
            })
        }
        Type::Struct(mut s) if !s.type_args.is_empty() => {
            let mut args = Vec::with_capacity(s.type_args.len());
            for arg in &s.type_args {
                args.push(substitute(ctx, arg)?);
            }
            s.type_args = args;
            s.update_by_types();
            Type::Struct(s)
        }
        other => other,
    })
}
