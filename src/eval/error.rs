//! Execution errors
use codespan_reporting::diagnostic::Diagnostic;
use thiserror::Error;

#[derive(Eq, PartialEq, Debug, Clone, Error)]
pub enum ExecutionError {
    #[error("program did not halt within {0} steps")]
    StepLimit(u64),
}

impl ExecutionError {
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        match self {
            ExecutionError::StepLimit(_) => Diagnostic::error()
                .with_message(self.to_string())
                .with_notes(vec![
                    "raise the limit with --step-limit or pass 0 to run unbounded".to_string(),
                ]),
        }
    }
}
