//! Command line argument handling with clap v4 and subcommands.

use crate::core::export::render::RenderMode;
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io;
use std::path::Path;

/// Default number of steps a program may take under `run`
pub const DEFAULT_STEP_LIMIT: u64 = 1_000_000;

/// wh - encode, render and run While programs as trees
#[derive(Parser, Debug, Clone)]
#[command(name = "wh")]
#[command(about = "Encode, render and run While programs as trees")]
#[command(version)]
pub struct WhileCli {
    /// Turn on debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    /// Maximum evaluation steps for `run` (0 for no limit)
    #[arg(long = "step-limit", default_value_t = DEFAULT_STEP_LIMIT, global = true)]
    pub step_limit: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Encode a natural number as a tree
    Encode(EncodeArgs),
    /// Read a tree literal and render it
    Render(RenderArgs),
    /// Decode a program tree back to program text
    Unparse(UnparseArgs),
    /// Decode a program tree and run it on an input tree
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
pub struct EncodeArgs {
    /// Number to encode
    pub number: usize,

    /// Rendering: raw, list or atoms
    #[arg(short = 'm', long = "mode", default_value = "raw")]
    pub mode: RenderMode,
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Tree literal
    pub tree: String,

    /// Rendering: raw, list or atoms
    #[arg(short = 'm', long = "mode", default_value = "atoms")]
    pub mode: RenderMode,
}

#[derive(Args, Debug, Clone)]
pub struct UnparseArgs {
    /// Program tree literal, or a file containing one
    pub program: String,

    /// Name to give the decoded program
    #[arg(short = 'n', long = "name", default_value = "prog")]
    pub name: String,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Program tree literal, or a file containing one
    pub program: String,

    /// Input tree literal
    #[arg(default_value = "nil")]
    pub input: String,

    /// Rendering of the output: raw, list or atoms
    #[arg(short = 'm', long = "mode", default_value = "list")]
    pub mode: RenderMode,
}

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileOptions {
    mode: RenderMode,
    debug: bool,
    step_limit: Option<u64>,
    program_name: String,
}

impl Default for WhileOptions {
    fn default() -> Self {
        WhileOptions {
            mode: RenderMode::default(),
            debug: false,
            step_limit: Some(DEFAULT_STEP_LIMIT),
            program_name: "prog".to_string(),
        }
    }
}

impl From<&WhileCli> for WhileOptions {
    fn from(cli: &WhileCli) -> Self {
        let options = WhileOptions::default()
            .with_debug(cli.debug)
            .with_step_limit(cli.step_limit);

        match &cli.command {
            Commands::Encode(args) => options.with_mode(args.mode),
            Commands::Render(args) => options.with_mode(args.mode),
            Commands::Unparse(args) => options.with_program_name(&args.name),
            Commands::Run(args) => options.with_mode(args.mode),
        }
    }
}

impl WhileOptions {
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Zero removes the limit
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = if limit == 0 { None } else { Some(limit) };
        self
    }

    pub fn with_program_name(mut self, name: &str) -> Self {
        self.program_name = name.to_string();
        self
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn step_limit(&self) -> Option<u64> {
        self.step_limit
    }

    /// Name (and file) given to decoded programs
    pub fn program_name(&self) -> &str {
        &self.program_name
    }
}

/// Program arguments may be a path to a file holding the tree literal
/// or the literal itself
pub fn program_source(arg: &str) -> io::Result<String> {
    let path = Path::new(arg);
    if path.is_file() {
        fs::read_to_string(path)
    } else {
        Ok(arg.to_string())
    }
}
