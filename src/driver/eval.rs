//! Carry out a command line request
use crate::core::error::CoreError;
use crate::core::export::render::render;
use crate::core::tree::Tree;
use crate::core::unquote::{decode_program_text, unquote_program};
use crate::driver::error::WhileError;
use crate::driver::options::{program_source, Commands, WhileOptions};
use crate::driver::read::read_tree;
use crate::eval::Machine;
use log::debug;

/// Execute `command`, returning the text to print
pub fn execute(command: &Commands, opt: &WhileOptions) -> Result<String, WhileError> {
    match command {
        Commands::Encode(args) => Ok(render(&Tree::from_nat(args.number), opt.mode())),
        Commands::Render(args) => Ok(render(&read_tree(&args.tree)?, opt.mode())),
        Commands::Unparse(args) => {
            let tree = read_program_tree(&args.program)?;
            decode_program_text(opt.program_name(), &tree)
                .ok_or_else(|| CoreError::Undecodable("program".to_string()).into())
        }
        Commands::Run(args) => {
            let tree = read_program_tree(&args.program)?;
            let input = read_tree(&args.input)?;
            run_tree(&tree, input, opt)
        }
    }
}

/// Decode `program` and run it on `input`, rendering the result
pub fn run_tree(program: &Tree, input: Tree, opt: &WhileOptions) -> Result<String, WhileError> {
    let program = unquote_program(opt.program_name(), program)
        .ok_or_else(|| CoreError::Undecodable("program".to_string()))?;
    let mut machine = Machine::new(opt.step_limit());
    let output = machine.run(&program, input)?;
    debug!("run took {} steps", machine.steps());
    Ok(render(&output, opt.mode()))
}

fn read_program_tree(arg: &str) -> Result<Tree, WhileError> {
    let text = program_source(arg)?;
    Ok(read_tree(text.trim())?)
}
