//! Desugarer maintains state during desugar passes.
use super::conditional::ConditionalStacks;
use super::desugarable::Desugarable;
use crate::core::error::CoreError;
use crate::core::expr::acore::*;
use crate::core::expr::{Block, Expr, Program};
use crate::core::name::Name;
use crate::syntax::ast::SugarProgram;
use indexmap::IndexMap;
use log::{debug, trace};

/// Sugared programs available as macros, keyed by file
pub type MacroTable = IndexMap<String, SugarProgram>;

/// State kept during desugaring pass
pub struct Desugarer<'p> {
    /// Every program reachable by macro call from the root
    macros: &'p MacroTable,
    /// Stacks used by conditionals, owned by the root program
    stacks: ConditionalStacks,
    /// File of the program being desugared
    root: String,
    /// Number of macro calls inlined so far
    expansions: usize,
}

impl<'p> Desugarer<'p> {
    /// Construct a Desugarer for the program in `root`.
    ///
    /// `macros` must contain every program transitively reachable by
    /// macro call from the root and the call graph must be acyclic;
    /// `driver::source::ProgramSet` guarantees both.
    pub fn new(root: &str, macros: &'p MacroTable) -> Self {
        Desugarer {
            macros,
            stacks: ConditionalStacks::new(root),
            root: root.to_string(),
            expansions: 0,
        }
    }

    /// Desugar a whole program into core
    pub fn translate_program(&mut self, program: &SugarProgram) -> Result<Program, CoreError> {
        let mut block = program.body.desugar(self)?;

        let write = match &program.write {
            Expr::Var(x) => x.clone(),
            e => {
                let w = Name::reserved(&self.root, "WRITE");
                block.push(assign(&w, e.clone()));
                w
            }
        };

        debug!(
            "desugared {} with {} macro expansions",
            program.file(),
            self.expansions
        );
        Ok(Program::new(
            program.name.clone(),
            program.read.clone(),
            block,
            write,
        ))
    }

    /// Inline `x := <file> input` as
    ///
    /// ```text
    /// R := input; <body>; x := W
    /// ```
    ///
    /// where `file` is `read R { body } write W`. The macro's
    /// variables are declared by `file` so cannot capture the
    /// caller's.
    pub fn expand_macro(&mut self, x: &Name, file: &str, input: &Expr) -> Result<Block, CoreError> {
        let macros = self.macros;
        let program = macros
            .get(file)
            .ok_or_else(|| CoreError::MacroNotFound(file.to_string()))?;

        trace!("expanding macro {} bound to {}", file, x);
        self.expansions += 1;

        let mut block = vec![assign(&program.read, input.clone())];
        block.extend(program.body.desugar(self)?);
        block.push(assign(x, program.write.clone()));
        Ok(block)
    }

    /// The conditional stacks in use
    pub fn stacks(&self) -> &ConditionalStacks {
        &self.stacks
    }

    /// Number of macro calls inlined so far
    pub fn expansions(&self) -> usize {
        self.expansions
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::core::expr::{Command, HasNames};
    use crate::syntax::ast::asugar;

    fn n(file: &str, text: &str) -> Name {
        Name::new(file, text)
    }

    /// `inc read X { Y := cons nil X } write Y`
    fn inc() -> SugarProgram {
        let x = n("inc", "X");
        let y = n("inc", "Y");
        SugarProgram::new(
            n("inc", "inc"),
            x.clone(),
            asugar::assign(&y, cons(nil(), var(&x))),
            var(&y),
        )
    }

    #[test]
    pub fn test_macro_expansion() {
        let mut table = MacroTable::new();
        table.insert("inc".to_string(), inc());

        let x = n("main", "X");
        let main = SugarProgram::new(
            n("main", "main"),
            x.clone(),
            asugar::macro_call(&x, "inc", var(&x)),
            var(&x),
        );

        let mut d = Desugarer::new("main", &table);
        let p = d.translate_program(&main).unwrap();
        assert_eq!(
            p.block,
            vec![
                assign(&n("inc", "X"), var(&x)),
                assign(&n("inc", "Y"), cons(nil(), var(&n("inc", "X")))),
                assign(&x, var(&n("inc", "Y"))),
            ]
        );
        assert_eq!(p.write, x);
        assert_eq!(d.expansions(), 1);
    }

    #[test]
    pub fn test_macro_variables_do_not_capture() {
        let mut table = MacroTable::new();
        table.insert("inc".to_string(), inc());

        // The caller has its own X and Y
        let x = n("main", "X");
        let y = n("main", "Y");
        let main = SugarProgram::new(
            n("main", "main"),
            x.clone(),
            asugar::seq(vec![
                asugar::assign(&y, nil()),
                asugar::macro_call(&x, "inc", var(&x)),
            ]),
            var(&y),
        );
        let p = Desugarer::new("main", &table)
            .translate_program(&main)
            .unwrap();
        let names = p.names();
        assert!(names.contains(&n("main", "Y")));
        assert!(names.contains(&n("inc", "Y")));
        assert_eq!(names.len(), 4);
    }

    #[test]
    pub fn test_missing_macro() {
        let table = MacroTable::new();
        let x = n("main", "X");
        let main = SugarProgram::new(
            n("main", "main"),
            x.clone(),
            asugar::macro_call(&x, "nowhere", var(&x)),
            var(&x),
        );
        assert_eq!(
            Desugarer::new("main", &table).translate_program(&main),
            Err(CoreError::MacroNotFound("nowhere".to_string()))
        );
    }

    #[test]
    pub fn test_write_expression_is_bound() {
        let table = MacroTable::new();
        let x = n("main", "X");
        let main = SugarProgram::new(
            n("main", "main"),
            x.clone(),
            asugar::assign(&x, tl(var(&x))),
            cons(var(&x), nil()),
        );
        let p = Desugarer::new("main", &table)
            .translate_program(&main)
            .unwrap();
        assert!(p.write.is_reserved());
        assert_eq!(
            p.block.last(),
            Some(&assign(&p.write, cons(var(&x), nil())))
        );
    }

    #[test]
    pub fn test_no_sugar_remains() {
        let table = MacroTable::new();
        let x = n("main", "X");
        let main = SugarProgram::new(
            n("main", "main"),
            x.clone(),
            asugar::while_(
                var(&x),
                asugar::if_else(
                    hd(var(&x)),
                    asugar::switch(
                        var(&x),
                        vec![(nil(), asugar::assign(&x, nil()))],
                        asugar::assign(&x, tl(var(&x))),
                    ),
                    asugar::assign(&x, tl(var(&x))),
                ),
            ),
            var(&x),
        );
        let p = Desugarer::new("main", &table)
            .translate_program(&main)
            .unwrap();
        assert!(p.is_pure());
        assert!(matches!(p.block[0], Command::While(_, _)));
    }
}
