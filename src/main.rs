use std::{env, io};

use lregularizer::cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    cli::run(&args, &mut io::stdout().lock())
}
