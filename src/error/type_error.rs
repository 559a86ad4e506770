use crate::error::diagnostic::{Diagnostic, DiagnosticKind};
use codespan::{FileId, Span};
use thiserror::Error;

/// fatal errors of the type core; there is no local recovery and no
/// sentinel error type, callers propagate and the driver exits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("undefined structure '{0}'")]
    UndefinedStruct(String),
    #[error("array length for '{0}[]' does not reduce to a constant integer")]
    NonConstantArrayLength(String),
    #[error("alias resolution for '{0}' did not terminate, the alias graph has a cycle")]
    AliasCycle(String),
    #[error("cannot instantiate template '{0}': {1}")]
    UninstantiableTemplate(String, String),
    #[error("circular dependency detected for structure '{0}'")]
    CircularDependency(String),
}

impl TypeError {
    /// type errors carry no single source span, the location is synthetic
    pub fn into_diagnostic(self, file_id: FileId) -> Diagnostic {
        Diagnostic::error(
            DiagnosticKind::TypeError,
            Span::new(0, 0),
            file_id,
            self.to_string(),
        )
    }
}
