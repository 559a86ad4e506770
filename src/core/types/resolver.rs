use crate::core::types::composite::StructType;
use crate::core::types::context::TypeContext;
use crate::core::types::primitive::BasicType;
use crate::core::types::ty::Type;
use crate::error::TypeError;

/// replacement bound 4 the fixpoint loops; the alias graph is expected
/// to be acyclic, anything deeper is a cycle
pub const MAX_RESOLVE_STEPS: usize = 256;

/// alias/substitution fixpoint on the canonical form: substitutions
/// first, then aliases, every round, until neither table matches
pub fn resolve(ctx: &TypeContext, ty: &Type) -> Result<Type, TypeError> {
    let mut t = ty.clone();
    let mut steps = 0;
    loop {
        let key = t.to_string();
        let next = {
            let substitutions = ctx.substitutions.borrow();
            match substitutions.get(&key) {
                Some(found) => Some(found.clone()),
                None => ctx.alias_types.borrow().get(&key).cloned(),
            }
        };
        match next {
            Some(found) => {
                t = found;
                steps += 1;
                if steps > MAX_RESOLVE_STEPS {
                    return Err(TypeError::AliasCycle(key));
                }
            }
            None => return Ok(t),
        }
    }
}

/// struct terms resolve through the alias table only; transient
/// substitutions never leak into the elaborated graph
pub(crate) fn check_struct(
    ctx: &TypeContext,
    st: &StructType,
) -> Result<Option<Type>, TypeError> {
    let mut t = match ctx.alias_types.borrow().get(&st.name) {
        Some(found) => found.clone(),
        None => return Ok(None),
    };
    let mut steps = 0;
    loop {
        let key = t.to_string();
        let next = ctx.alias_types.borrow().get(&key).cloned();
        match next {
            Some(found) => {
                t = found;
                steps += 1;
                if steps > MAX_RESOLVE_STEPS {
                    return Err(TypeError::AliasCycle(st.name.clone()));
                }
            }
            None => break,
        }
    }
    Ok(Some(t))
}

/// the single lookup the parser uses; never fails, unknown identifiers
/// become unresolved struct terms that diagnose later if still undefined
pub fn name_to_type(id: &str) -> Type {
    if let Some(basic) = BasicType::from_name(id) {
        return Type::Basic(basic);
    }
    match id {
        "void" => Type::Void,
        "alias" => Type::Alias,
        "int4" => Type::vector(Type::Basic(BasicType::Int), 4),
        "int8" => Type::vector(Type::Basic(BasicType::Int), 8),
        "float2" => Type::vector(Type::Basic(BasicType::Float), 2),
        "float4" => Type::vector(Type::Basic(BasicType::Float), 4),
        "float8" => Type::vector(Type::Basic(BasicType::Float), 8),
        "short8" => Type::vector(Type::Basic(BasicType::Short), 8),
        _ => Type::Struct(StructType::new(id)),
    }
}
