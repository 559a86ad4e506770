use crate::core::ast::node::{Node, StructDecl};
use crate::core::types::composite::StructType;
use crate::core::types::context::TypeContext;
use crate::core::types::resolver::resolve;
use crate::core::types::specializer::instantiate_template;
use crate::core::types::ty::Type;
use crate::error::TypeError;
use std::rc::Rc;

/// what the shared preamble of the struct observers produced: either a
/// registered declaration, or some other type an alias chain ended at
enum ResolvedStruct {
    Decl(Rc<StructDecl>),
    Forwarded(Type),
}

/// alias/substitution fixpoint, then struct table lookup, then (4
/// parameterized uses) template instantiation
fn resolve_decl(ctx: &TypeContext, st: &StructType) -> Result<ResolvedStruct, TypeError> {
    let resolved = resolve(ctx, &Type::Struct(st.clone()))?;
    let ts = match resolved {
        Type::Struct(ts) => ts,
        other => return Ok(ResolvedStruct::Forwarded(other)),
    };

    if let Some(decl) = ctx.lookup_struct(&ts.name) {
        if !ts.type_args.is_empty() {
            // a use whose name is not angled yet gets its suffix from
            // the arguments, so the specialization never shadows the
            // template itself
            let suffix = match ts.angle_suffix() {
                Some(suffix) => suffix.to_string(),
                None => {
                    let args: Vec<String> =
                        ts.type_args.iter().map(|t| t.to_string()).collect();
                    format!("<{}>", args.join(","))
                }
            };
            let decl = instantiate_template(ctx, &decl, &suffix, &ts.type_args)?;
            return Ok(ResolvedStruct::Decl(decl));
        }
        return Ok(ResolvedStruct::Decl(decl));
    }

    // parameterized use whose specialization is not registered yet:
    // instantiate from the base template
    if let Some(pos) = ts.name.find('<') {
        if let Some(template) = ctx.lookup_struct(&ts.name[..pos]) {
            let decl = instantiate_template(ctx, &template, &ts.name[pos..], &ts.type_args)?;
            return Ok(ResolvedStruct::Decl(decl));
        }
    }

    Err(TypeError::UndefinedStruct(ts.name.clone()))
}

impl StructType {
    /// sum of the field sizes; non field elements (methods, nested
    /// declarations) contribute nothing
    pub fn size_bits(&self, ctx: &TypeContext) -> Result<u64, TypeError> {
        let decl = match resolve_decl(ctx, self)? {
            ResolvedStruct::Forwarded(t) => return t.size_bits(ctx),
            ResolvedStruct::Decl(decl) => decl,
        };

        if let Some(size) = ctx.size_cache.borrow().get(&decl.name) {
            return Ok(*size);
        }
        if ctx.calculating.borrow().contains(&decl.name) {
            return Err(TypeError::CircularDependency(decl.name.clone()));
        }

        ctx.calculating.borrow_mut().push(decl.name.clone());
        let mut size = 0;
        for element in &decl.elements {
            if let Node::Var(var) = &**element {
                size += var.ty.size_bits(ctx)?;
            }
        }
        ctx.calculating.borrow_mut().pop();

        ctx.size_cache.borrow_mut().insert(decl.name.clone(), size);
        Ok(size)
    }

    /// a simple struct has only primitive fields; codegen passes those
    /// by value
    pub fn is_simple(&self, ctx: &TypeContext) -> Result<bool, TypeError> {
        let decl = match resolve_decl(ctx, self)? {
            ResolvedStruct::Forwarded(_) => return Ok(true),
            ResolvedStruct::Decl(decl) => decl,
        };
        for element in &decl.elements {
            if let Node::Var(var) = &**element {
                if !var.ty.is_basic() {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    pub fn field_count(&self, ctx: &TypeContext) -> Result<usize, TypeError> {
        let decl = match resolve_decl(ctx, self)? {
            ResolvedStruct::Forwarded(_) => return Ok(1),
            ResolvedStruct::Decl(decl) => decl,
        };
        let mut count = 0;
        for element in &decl.elements {
            if matches!(&**element, Node::Var(_)) {
                count += 1;
            }
        }
        Ok(count)
    }
}
