//! Errors encountered during desugaring to and processing core
use codespan_reporting::diagnostic::Diagnostic;
use thiserror::Error;

#[derive(Eq, PartialEq, Debug, Clone, Error)]
pub enum CoreError {
    #[error("no program found for macro {0}")]
    MacroNotFound(String),
    #[error("{0} has no tree encoding")]
    Unencodable(String),
    #[error("name {name} in {file} is declared by {declared_by}")]
    ForeignName {
        file: String,
        name: String,
        declared_by: String,
    },
    #[error("tree does not encode a {0}")]
    Undecodable(String),
}

impl CoreError {
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        match self {
            CoreError::MacroNotFound(_) => Diagnostic::bug()
                .with_message(self.to_string())
                .with_notes(vec![
                    "every macro target should be loaded before desugaring".to_string()
                ]),
            CoreError::Unencodable(_) => Diagnostic::error()
                .with_message(self.to_string())
                .with_notes(vec![
                    "the program encoding has no tag for equality tests".to_string(),
                ]),
            _ => Diagnostic::error().with_message(self.to_string()),
        }
    }
}
