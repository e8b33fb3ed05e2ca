//! Sugared syntax as delivered by the parser.
//!
//! The sugared language adds sequencing of arbitrary commands, if/else,
//! switch and macro calls to the core. Expressions are core
//! expressions.
use crate::core::error::CoreError;
use crate::core::expr::{Expr, HasNames};
use crate::core::name::Name;
use std::collections::BTreeSet;

/// One arm of a switch: the case expression and its command
pub type Arm = (Expr, SugarCommand);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SugarCommand {
    /// `C1; C2`
    Seq(Box<SugarCommand>, Box<SugarCommand>),
    /// `X := E`
    Assign(Name, Expr),
    /// `while E { C }`
    While(Expr, Box<SugarCommand>),
    /// `if E { C1 } else { C2 }`
    IfElse(Expr, Box<SugarCommand>, Box<SugarCommand>),
    /// `X := <file> E`: run the program in `file` on `E`, binding its
    /// output to `X`
    Macro(Name, String, Expr),
    /// `switch E { case E1: C1 ... default: Cd }`
    Switch(Expr, Vec<Arm>, Box<SugarCommand>),
}

/// A sugared program: `name read X { C } write E`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SugarProgram {
    pub name: Name,
    pub read: Name,
    pub body: SugarCommand,
    pub write: Expr,
}

impl SugarCommand {
    /// Collect the files of all macros called directly (not
    /// transitively) by this command
    pub fn visit_macro_targets(&self, on_target: &mut impl FnMut(&str)) {
        match self {
            SugarCommand::Seq(c1, c2) | SugarCommand::IfElse(_, c1, c2) => {
                c1.visit_macro_targets(on_target);
                c2.visit_macro_targets(on_target);
            }
            SugarCommand::Assign(_, _) => {}
            SugarCommand::While(_, body) => body.visit_macro_targets(on_target),
            SugarCommand::Macro(_, file, _) => on_target(file),
            SugarCommand::Switch(_, arms, default) => {
                for (_, c) in arms {
                    c.visit_macro_targets(on_target);
                }
                default.visit_macro_targets(on_target);
            }
        }
    }
}

impl HasNames for SugarCommand {
    fn visit_names(&self, on_name: &mut impl FnMut(&Name)) {
        match self {
            SugarCommand::Seq(c1, c2) => {
                c1.visit_names(on_name);
                c2.visit_names(on_name);
            }
            SugarCommand::Assign(x, e) | SugarCommand::Macro(x, _, e) => {
                on_name(x);
                e.visit_names(on_name);
            }
            SugarCommand::While(guard, body) => {
                guard.visit_names(on_name);
                body.visit_names(on_name);
            }
            SugarCommand::IfElse(guard, c1, c2) => {
                guard.visit_names(on_name);
                c1.visit_names(on_name);
                c2.visit_names(on_name);
            }
            SugarCommand::Switch(scrutinee, arms, default) => {
                scrutinee.visit_names(on_name);
                for (case, c) in arms {
                    case.visit_names(on_name);
                    c.visit_names(on_name);
                }
                default.visit_names(on_name);
            }
        }
    }
}

impl HasNames for SugarProgram {
    fn visit_names(&self, on_name: &mut impl FnMut(&Name)) {
        on_name(&self.read);
        self.body.visit_names(on_name);
        self.write.visit_names(on_name);
    }
}

impl SugarProgram {
    pub fn new(name: Name, read: Name, body: SugarCommand, write: Expr) -> Self {
        SugarProgram {
            name,
            read,
            body,
            write,
        }
    }

    /// The file declaring the program, which is also the key macro
    /// calls use to refer to it
    pub fn file(&self) -> &str {
        self.name.file()
    }

    /// Files of the macros this program calls directly
    pub fn macro_targets(&self) -> BTreeSet<String> {
        let mut targets = BTreeSet::new();
        self.body.visit_macro_targets(&mut |t| {
            targets.insert(t.to_string());
        });
        targets
    }

    /// Check every name used by the program is declared by the
    /// program's own file
    pub fn validate_scope(&self) -> Result<(), CoreError> {
        match self
            .names()
            .into_iter()
            .find(|n| !n.declared_in(self.file()))
        {
            Some(n) => Err(CoreError::ForeignName {
                file: self.file().to_string(),
                name: n.text().to_string(),
                declared_by: n.file().to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Helpers for constructing sugared syntax
pub mod asugar {
    use super::*;

    /// Sequence commands, right-nested. Panics if `commands` is empty.
    pub fn seq(commands: Vec<SugarCommand>) -> SugarCommand {
        let mut rev = commands.into_iter().rev();
        let last = rev.next().expect("sequence of no commands");
        rev.fold(last, |acc, c| SugarCommand::Seq(Box::new(c), Box::new(acc)))
    }

    pub fn assign(x: &Name, e: Expr) -> SugarCommand {
        SugarCommand::Assign(x.clone(), e)
    }

    pub fn while_(guard: Expr, body: SugarCommand) -> SugarCommand {
        SugarCommand::While(guard, Box::new(body))
    }

    pub fn if_else(guard: Expr, t: SugarCommand, f: SugarCommand) -> SugarCommand {
        SugarCommand::IfElse(guard, Box::new(t), Box::new(f))
    }

    pub fn macro_call<F: AsRef<str>>(x: &Name, file: F, input: Expr) -> SugarCommand {
        SugarCommand::Macro(x.clone(), file.as_ref().to_string(), input)
    }

    pub fn switch(scrutinee: Expr, arms: Vec<Arm>, default: SugarCommand) -> SugarCommand {
        SugarCommand::Switch(scrutinee, arms, Box::new(default))
    }
}
