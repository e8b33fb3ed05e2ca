//! Direct execution of core programs over trees.
use crate::core::expr::{Command, Expr, Program};
use crate::core::name::Name;
use crate::core::tree::Tree;
use crate::eval::error::ExecutionError;
use log::debug;
use std::collections::HashMap;

/// Executes core commands against a store of variables
///
/// Unassigned variables read as `nil`.
#[derive(Debug, Default)]
pub struct Machine {
    store: HashMap<Name, Tree>,
    steps: u64,
    limit: Option<u64>,
}

impl Machine {
    /// A machine that gives up after `limit` steps, if set
    pub fn new(limit: Option<u64>) -> Self {
        Machine {
            store: HashMap::new(),
            steps: 0,
            limit,
        }
    }

    /// Bind the input to the read variable, run the block and return
    /// the value of the write variable
    pub fn run(&mut self, program: &Program, input: Tree) -> Result<Tree, ExecutionError> {
        self.store.insert(program.read.clone(), input);
        self.exec_block(&program.block)?;
        debug!("{} halted after {} steps", program.name, self.steps);
        Ok(self.get(&program.write))
    }

    /// Current value of a variable
    pub fn get(&self, name: &Name) -> Tree {
        self.store.get(name).cloned().unwrap_or_default()
    }

    /// Set a variable
    pub fn set(&mut self, name: &Name, value: Tree) {
        self.store.insert(name.clone(), value);
    }

    /// Steps taken so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn tick(&mut self) -> Result<(), ExecutionError> {
        self.steps += 1;
        match self.limit {
            Some(limit) if self.steps > limit => Err(ExecutionError::StepLimit(limit)),
            _ => Ok(()),
        }
    }

    pub fn exec_block(&mut self, block: &[Command]) -> Result<(), ExecutionError> {
        for c in block {
            self.exec(c)?;
        }
        Ok(())
    }

    pub fn exec(&mut self, command: &Command) -> Result<(), ExecutionError> {
        self.tick()?;
        match command {
            Command::Assign(x, e) => {
                let value = self.eval(e);
                self.set(x, value);
            }
            Command::While(guard, body) => {
                while !self.eval(guard).is_nil() {
                    self.tick()?;
                    self.exec_block(body)?;
                }
            }
            Command::IfElse(guard, t, f) => {
                if self.eval(guard).is_nil() {
                    self.exec_block(f)?;
                } else {
                    self.exec_block(t)?;
                }
            }
        }
        Ok(())
    }

    pub fn eval(&self, expr: &Expr) -> Tree {
        match expr {
            Expr::Var(x) => self.get(x),
            Expr::Lit(t) => t.clone(),
            Expr::Cons(l, r) => Tree::pair(self.eval(l), self.eval(r)),
            Expr::Hd(e) => self.eval(e).head(),
            Expr::Tl(e) => self.eval(e).tail(),
            Expr::IsEq(l, r) => Tree::truth(self.eval(l) == self.eval(r)),
        }
    }
}

/// Run a program on an input with no step limit
pub fn run(program: &Program, input: Tree) -> Result<Tree, ExecutionError> {
    Machine::default().run(program, input)
}
