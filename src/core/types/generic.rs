use crate::core::ast::node::Node;
use crate::core::types::context::TypeContext;
use crate::core::types::ty::Type;
use std::rc::Rc;

/// value argument of a template, e.g. the `5` in `Buffer<int, 5>`;
/// its canonical form keys the substitution table during instantiation
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateMember {
    pub ty: Box<Type>,
    pub value: Rc<Node>,
}

/// value parameter declaration inside a template header
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateMemberDef {
    pub ty: Box<Type>,
    pub name: String,
}

/// scoped bindings in the substitution table; previous entries r
/// restored on drop, on every exit path
pub struct SubstitutionScope<'a> {
    ctx: &'a TypeContext,
    saved: Vec<(String, Option<Type>)>,
}

impl<'a> SubstitutionScope<'a> {
    pub fn new(ctx: &'a TypeContext) -> Self {
        Self {
            ctx,
            saved: Vec::new(),
        }
    }

    pub fn bind(&mut self, name: String, ty: Type) {
        let previous = self.ctx.substitutions.borrow_mut().insert(name.clone(), ty);
        self.saved.push((name, previous));
    }
}

impl Drop for SubstitutionScope<'_> {
    fn drop(&mut self) {
        let mut substitutions = self.ctx.substitutions.borrow_mut();
        for (name, previous) in self.saved.drain(..).rev() {
            match previous {
                Some(ty) => {
                    substitutions.insert(name, ty);
                }
                None => {
                    substitutions.remove(&name);
                }
            }
        }
    }
}
