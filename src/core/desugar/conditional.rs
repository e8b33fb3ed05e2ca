//! Translation of if/else into while loops.
//!
//! Two list-valued variables act as stacks. `if E { C1 } else { C2 }`
//! becomes:
//!
//! ```text
//! NG := cons <nil.nil> NG;
//! G := cons E G;
//! while hd G { G := cons nil (tl G); NG := cons nil (tl NG); C1 };
//! while hd NG { NG := cons nil (tl NG); C2 };
//! G := tl G;
//! NG := tl NG
//! ```
//!
//! Each loop runs at most once since its first iteration clears the
//! top of its stack. Every conditional pushes and pops exactly one
//! frame on each stack around its branches so nested conditionals
//! leave the stacks as they found them.
use crate::core::expr::acore::*;
use crate::core::expr::{Block, Command, Expr};
use crate::core::name::Name;
use crate::core::tree::Tree;

/// The pair of stacks used by conditionals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalStacks {
    guard: Name,
    not_guard: Name,
}

impl ConditionalStacks {
    /// Stacks held in reserved variables of `file`
    pub fn new(file: &str) -> Self {
        ConditionalStacks {
            guard: Name::reserved(file, "IF_GUARD"),
            not_guard: Name::reserved(file, "IF_NOT_GUARD"),
        }
    }

    pub fn guard(&self) -> &Name {
        &self.guard
    }

    pub fn not_guard(&self) -> &Name {
        &self.not_guard
    }

    /// Replace the top of a stack with nil
    fn clear_top(stack: &Name) -> Command {
        assign(stack, cons(nil(), tl(var(stack))))
    }

    /// Translate `if guard { t } else { f }` where both branches are
    /// already core
    pub fn translate_if(&self, guard: Expr, t: Block, f: Block) -> Block {
        let g = &self.guard;
        let ng = &self.not_guard;

        let mut true_body = vec![Self::clear_top(g), Self::clear_top(ng)];
        true_body.extend(t);

        let mut false_body = vec![Self::clear_top(ng)];
        false_body.extend(f);

        vec![
            assign(ng, cons(lit(Tree::truth(true)), var(ng))),
            assign(g, cons(guard, var(g))),
            while_(hd(var(g)), true_body),
            while_(hd(var(ng)), false_body),
            assign(g, tl(var(g))),
            assign(ng, tl(var(ng))),
        ]
    }

    /// Translate a switch whose arms and default are already core.
    ///
    /// Arms fold from the right into nested conditionals comparing
    /// the scrutinee with each case, so the first matching arm wins
    /// and the default is the innermost false branch.
    pub fn translate_switch(
        &self,
        scrutinee: &Expr,
        arms: Vec<(Expr, Block)>,
        default: Block,
    ) -> Block {
        arms.into_iter().rev().fold(default, |otherwise, (case, then)| {
            self.translate_if(is_eq(scrutinee.clone(), case), then, otherwise)
        })
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::core::expr::HasNames;

    #[test]
    pub fn test_stacks_are_reserved() {
        let stacks = ConditionalStacks::new("main");
        assert!(stacks.guard().is_reserved());
        assert!(stacks.not_guard().is_reserved());
        assert_ne!(stacks.guard(), stacks.not_guard());
        assert_eq!(stacks.guard().file(), "main");
    }

    #[test]
    pub fn test_if_produces_only_assignments_and_loops() {
        let stacks = ConditionalStacks::new("main");
        let x = Name::new("main", "X");
        let block = stacks.translate_if(var(&x), vec![assign(&x, nil())], vec![]);
        assert_eq!(block.len(), 6);
        assert!(block
            .iter()
            .all(|c| !matches!(c, Command::IfElse(_, _, _))));
        assert_eq!(block.names().len(), 3);
    }

    #[test]
    pub fn test_switch_nests_arms_in_order() {
        let stacks = ConditionalStacks::new("main");
        let x = Name::new("main", "X");
        let y = Name::new("main", "Y");
        let block = stacks.translate_switch(
            &var(&x),
            vec![
                (nat(0), vec![assign(&y, nat(0))]),
                (nat(1), vec![assign(&y, nat(1))]),
            ],
            vec![assign(&y, nat(3))],
        );
        // the outermost conditional tests the first arm
        assert_eq!(
            block[1],
            assign(stacks.guard(), cons(is_eq(var(&x), nat(0)), var(stacks.guard())))
        );
    }
}
