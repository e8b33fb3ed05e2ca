//! Loading sugared programs and translating them to core.
use crate::core::desugar::{Desugarer, MacroTable};
use crate::core::expr::Program;
use crate::driver::error::WhileError;
use crate::syntax::ast::SugarProgram;
use crate::syntax::macros::{MacroError, MacroGraph};
use log::debug;

/// The universe of sugared programs available to each other as
/// macros.
///
/// Programs are validated as they are added and the macro graph
/// checked before any desugaring so that the desugarer only ever
/// sees a complete, acyclic macro table.
#[derive(Debug, Default)]
pub struct ProgramSet {
    /// Programs keyed by declaring file
    programs: MacroTable,
    /// Macro call analysis over all programs
    macros: MacroGraph,
}

impl ProgramSet {
    /// Construct from an iterator of programs
    pub fn from_programs<I>(programs: I) -> Result<Self, WhileError>
    where
        I: IntoIterator<Item = SugarProgram>,
    {
        let mut set = ProgramSet::default();
        for p in programs {
            set.add(p)?;
        }
        Ok(set)
    }

    /// Register a program
    pub fn add(&mut self, program: SugarProgram) -> Result<(), WhileError> {
        program.validate_scope()?;
        let file = program.file().to_string();
        if self.programs.contains_key(&file) {
            return Err(WhileError::DuplicateProgram(file));
        }
        self.macros.analyse_program(&program);
        self.programs.insert(file, program);
        Ok(())
    }

    /// Look up the program declared by `file`
    pub fn get(&self, file: &str) -> Option<&SugarProgram> {
        self.programs.get(file)
    }

    /// Number of programs loaded
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// The macro graph over every loaded program
    pub fn macros(&self) -> &MacroGraph {
        &self.macros
    }

    /// Every program reachable from `root` by macro call, `root`
    /// included.
    ///
    /// Fails if any reachable program is missing or if the calls
    /// among them form a cycle. Cycles among programs the root never
    /// reaches are not reported.
    pub fn closure(&self, root: &str) -> Result<MacroTable, WhileError> {
        let mut table = MacroTable::new();
        let mut graph = MacroGraph::default();

        for file in self.macros.reachable(root)? {
            let program = self
                .programs
                .get(file)
                .ok_or_else(|| MacroError::UnknownProgram(file.clone()))?;
            graph.analyse_program(program);
            table.insert(file.clone(), program.clone());
        }

        graph.check_for_cycles()?;
        debug!("{} reaches {} programs", root, table.len());
        Ok(table)
    }

    /// Validate the macro closure of `root` and desugar it into a
    /// core program
    pub fn translate(&self, root: &str) -> Result<Program, WhileError> {
        let table = self.closure(root)?;
        let program = table
            .get(root)
            .ok_or_else(|| MacroError::UnknownProgram(root.to_string()))?;
        let mut desugarer = Desugarer::new(root, &table);
        Ok(desugarer.translate_program(program)?)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::core::error::CoreError;
    use crate::core::expr::acore::*;
    use crate::core::name::Name;
    use crate::syntax::ast::asugar;
    use crate::syntax::macros::tests::caller;

    fn load(programs: Vec<SugarProgram>) -> ProgramSet {
        ProgramSet::from_programs(programs).unwrap()
    }

    #[test]
    pub fn test_duplicate_program() {
        let mut set = load(vec![caller("a", &[])]);
        assert!(matches!(
            set.add(caller("a", &[])),
            Err(WhileError::DuplicateProgram(f)) if f == "a"
        ));
        assert_eq!(set.len(), 1);
    }

    #[test]
    pub fn test_foreign_name_rejected() {
        let x = Name::new("a", "X");
        let intruder = Name::new("b", "Y");
        let p = SugarProgram::new(
            Name::new("a", "a"),
            x.clone(),
            asugar::assign(&x, var(&intruder)),
            var(&x),
        );
        assert!(matches!(
            ProgramSet::default().add(p),
            Err(WhileError::Core(CoreError::ForeignName { .. }))
        ));
    }

    #[test]
    pub fn test_closure_excludes_unreachable() {
        let set = load(vec![
            caller("a", &["b"]),
            caller("b", &[]),
            caller("z", &["z"]),
        ]);
        let table = set.closure("a").unwrap();
        let mut files: Vec<&String> = table.keys().collect();
        files.sort();
        assert_eq!(files, vec!["a", "b"]);
    }

    #[test]
    pub fn test_missing_macro_reported() {
        let set = load(vec![caller("a", &["b"])]);
        assert!(matches!(
            set.translate("a"),
            Err(WhileError::Macro(MacroError::UnknownProgram(f))) if f == "b"
        ));
    }

    #[test]
    pub fn test_unknown_root() {
        let set = load(vec![caller("a", &[])]);
        assert!(matches!(
            set.translate("q"),
            Err(WhileError::Macro(MacroError::UnknownProgram(_)))
        ));
    }

    #[test]
    pub fn test_mutual_recursion_rejected() {
        let set = load(vec![caller("a", &["b"]), caller("b", &["a"])]);
        assert!(matches!(
            set.translate("a"),
            Err(WhileError::Macro(MacroError::Cycle(_)))
        ));
    }

    #[test]
    pub fn test_diamond_translates() {
        let set = load(vec![
            caller("a", &["b", "c"]),
            caller("b", &["d"]),
            caller("c", &["d"]),
            caller("d", &[]),
        ]);
        let p = set.translate("a").unwrap();
        assert!(p.is_pure());
        assert_eq!(p.file(), "a");
    }
}
