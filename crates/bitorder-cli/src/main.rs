use std::process;

use self::{args::Args, error::Report};

#[macro_use]
mod log;

mod args;
mod commands;
mod error;
mod parse;
mod term;

fn main() {
    let args: Args = argh::from_env();

    term::init_color();
    log::set_max_level(args.log_level());
    trace!("{args:?}");

    if let Err(err) = commands::run(&args.command) {
        let report = Report::new(err);
        error!("{report}");
        process::exit(1);
    }
}
