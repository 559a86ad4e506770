use crate::core::ast::node::StructDecl;
use crate::core::types::ty::Type;
use crate::error::TypeError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// per compilation unit home of the alias, substitution and struct
/// tables; single threaded, interior mutability because struct queries
/// reenter through template instantiation
pub struct TypeContext {
    /// user declared `alias X = Y` bindings, permanent 4 the unit
    pub alias_types: RefCell<HashMap<String, Type>>,
    /// transient bindings loaded per template expansion (see
    /// `SubstitutionScope`)
    pub substitutions: RefCell<HashMap<String, Type>>,
    /// aggregate declarations keyed by (possibly mangled) name
    pub struct_table: RefCell<HashMap<String, Rc<StructDecl>>>,
    pub(crate) size_cache: RefCell<HashMap<String, u64>>,
    pub(crate) calculating: RefCell<Vec<String>>,
}

impl TypeContext {
    pub fn new() -> Self {
        Self {
            alias_types: RefCell::new(HashMap::new()),
            substitutions: RefCell::new(HashMap::new()),
            struct_table: RefCell::new(HashMap::new()),
            size_cache: RefCell::new(HashMap::new()),
            calculating: RefCell::new(Vec::new()),
        }
    }

    pub fn define_alias(&self, name: impl Into<String>, ty: Type) {
        self.alias_types.borrow_mut().insert(name.into(), ty);
    }

    pub fn register_struct(&self, decl: StructDecl) -> Rc<StructDecl> {
        let decl = Rc::new(decl);
        self.struct_table
            .borrow_mut()
            .insert(decl.name.clone(), decl.clone());
        decl
    }

    pub fn lookup_struct(&self, name: &str) -> Option<Rc<StructDecl>> {
        self.struct_table.borrow().get(name).cloned()
    }

    /// elaboration entry point: resolve aliases through `ty`,
    /// replacing the root term itself when it names an alias
    pub fn check_type(&self, ty: &mut Type) -> Result<(), TypeError> {
        if let Some(resolved) = ty.check(self)? {
            *ty = resolved;
        }
        Ok(())
    }
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}
