extern crate whilec;

use clap::Parser;
use std::process;

use whilec::driver::error::diagnose_to_stderr;
use whilec::driver::eval;
use whilec::driver::options::{WhileCli, WhileOptions};

pub fn main() {
    let cli = WhileCli::parse();
    let opt = WhileOptions::from(&cli);

    let mut logger = env_logger::Builder::from_default_env();
    if opt.debug() {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match eval::execute(&cli.command, &opt) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            diagnose_to_stderr(&e.to_diagnostic());
            process::exit(1);
        }
    }
}
