//! The Desugarable trait

use super::Desugarer;
use crate::core::error::CoreError;
use crate::core::expr::acore::*;
use crate::core::expr::Block;
use crate::syntax::ast::SugarCommand;

/// Sugared syntax desugars into a block of core commands
pub trait Desugarable {
    fn desugar(&self, _: &mut Desugarer) -> Result<Block, CoreError>;
}

impl Desugarable for SugarCommand {
    fn desugar(&self, desugarer: &mut Desugarer) -> Result<Block, CoreError> {
        match self {
            SugarCommand::Seq(c1, c2) => {
                let mut block = c1.desugar(desugarer)?;
                block.extend(c2.desugar(desugarer)?);
                Ok(block)
            }
            SugarCommand::Assign(x, e) => Ok(vec![assign(x, e.clone())]),
            SugarCommand::While(guard, body) => {
                Ok(vec![while_(guard.clone(), body.desugar(desugarer)?)])
            }
            SugarCommand::IfElse(guard, t, f) => {
                let t = t.desugar(desugarer)?;
                let f = f.desugar(desugarer)?;
                Ok(desugarer.stacks().translate_if(guard.clone(), t, f))
            }
            SugarCommand::Macro(x, file, input) => desugarer.expand_macro(x, file, input),
            SugarCommand::Switch(scrutinee, arms, default) => {
                let arms = arms
                    .iter()
                    .map(|(case, c)| Ok((case.clone(), c.desugar(desugarer)?)))
                    .collect::<Result<Vec<_>, CoreError>>()?;
                let default = default.desugar(desugarer)?;
                Ok(desugarer
                    .stacks()
                    .translate_switch(scrutinee, arms, default))
            }
        }
    }
}
