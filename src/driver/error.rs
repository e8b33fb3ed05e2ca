//! Overall high-level error type
use crate::core::error::CoreError;
use crate::driver::read::ReadError;
use crate::eval::error::ExecutionError;
use crate::syntax::macros::MacroError;
use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::emit;
use codespan_reporting::term::termcolor::{ColorChoice, NoColor, StandardStream};
use std::fmt::Display;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WhileError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Macro(#[from] MacroError),
    #[error(transparent)]
    Execution(#[from] ExecutionError),
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("program {0} is already loaded")]
    DuplicateProgram(String),
}

fn default_diagnostic<E>(e: &E) -> Diagnostic<usize>
where
    E: Display,
{
    Diagnostic::error().with_message(format!("{}", e))
}

impl WhileError {
    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        match self {
            WhileError::Core(e) => e.to_diagnostic(),
            WhileError::Execution(e) => e.to_diagnostic(),
            WhileError::Macro(MacroError::Cycle(_)) => default_diagnostic(self).with_notes(vec![
                "macros are inlined so a program may not call itself, directly or indirectly"
                    .to_string(),
            ]),
            e => default_diagnostic(e),
        }
    }
}

/// Diagnostics carry no source labels so there are no files to show
fn no_files() -> SimpleFiles<String, String> {
    SimpleFiles::new()
}

/// Write a diagnostic to stderr, coloured if stderr is a terminal
pub fn diagnose_to_stderr(diag: &Diagnostic<usize>) {
    let writer = StandardStream::stderr(ColorChoice::Auto);
    let config = codespan_reporting::term::Config::default();
    let mut lock = writer.lock();
    if let Err(e) = emit(&mut lock, &config, &no_files(), diag) {
        log::error!("failed to write diagnostic: {}", e);
    }
}

/// Render a diagnostic without colour
pub fn diagnose_to_string(diag: &Diagnostic<usize>) -> String {
    let mut s: Vec<u8> = Vec::new();
    {
        let mut writer = NoColor::new(&mut s);
        let config = codespan_reporting::term::Config::default();
        if emit(&mut writer, &config, &no_files(), diag).is_err() {
            return diag.message.clone();
        }
    }
    String::from_utf8_lossy(&s).into_owned()
}
