//! Macro call analysis.
//!
//! Every program is a node and every macro call an edge to the
//! called program. Macros are expanded by inlining so the graph must
//! be acyclic, including through mutual recursion, before desugaring
//! starts.
use crate::syntax::ast::SugarProgram;
use log::debug;
use petgraph::algo;
use petgraph::graph::Graph;
use petgraph::graph::NodeIndex;
use petgraph::visit::{Bfs, Walker};
use thiserror::Error;

/// Analyse the macro calls between programs
#[derive(Debug, Default)]
pub struct MacroGraph {
    graph: Graph<String, ()>,
}

impl MacroGraph {
    /// Add a program and edges to each macro it calls, returning
    /// the called files
    pub fn analyse_program(&mut self, program: &SugarProgram) -> Vec<String> {
        let source_node = self.encounter_program(program.file());
        let targets: Vec<String> = program.macro_targets().into_iter().collect();

        for t in &targets {
            let target_node = self.encounter_program(t);
            if !self.graph.contains_edge(source_node, target_node) {
                self.graph.add_edge(source_node, target_node, ());
            }
        }
        debug!("{} calls macros {:?}", program.file(), targets);
        targets
    }

    /// Check for cycles in the macro graph
    pub fn check_for_cycles(&self) -> Result<(), MacroError> {
        match algo::toposort(&self.graph, None) {
            Ok(_) => Ok(()),
            Err(c) => {
                let file = self.graph[c.node_id()].clone();
                debug!("macro cycle detected involving {}", file);
                Err(MacroError::Cycle(file))
            }
        }
    }

    /// All programs reachable from `file` through macro calls,
    /// starting with `file` itself
    pub fn reachable(&self, file: &str) -> Result<Vec<&String>, MacroError> {
        if let Some(i) = self.find_index(file) {
            Ok(Bfs::new(&self.graph, i)
                .iter(&self.graph)
                .map(|id| &self.graph[id])
                .collect())
        } else {
            Err(MacroError::UnknownProgram(file.to_string()))
        }
    }

    /// Find the node index for the specified file
    fn find_index(&self, file: &str) -> Option<NodeIndex> {
        self.graph.node_indices().find(|&i| self.graph[i] == file)
    }

    /// Add file to the graph if it isn't already there and return
    /// node index of the node.
    fn encounter_program(&mut self, file: &str) -> NodeIndex {
        match self.find_index(file) {
            Some(i) => i,
            None => self.graph.add_node(file.to_string()),
        }
    }

    /// Reference to the petgraph Graph itself
    pub fn graph(&self) -> &Graph<String, ()> {
        &self.graph
    }
}

/// An error in the macro call graph
#[derive(PartialEq, Debug, Clone, Error, Eq)]
pub enum MacroError {
    #[error("macro calls form a cycle involving {0}")]
    Cycle(String),
    #[error("unknown program {0}")]
    UnknownProgram(String),
}
