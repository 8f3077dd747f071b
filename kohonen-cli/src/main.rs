//! A command line interface to the self-organizing map training engine.

mod commands;

use clap::Command;
use commands::create_write_buffer;
use commands::train::{get_train_app, run_train};
use std::process;

fn main() {
    let matches = Command::new("Self Organizing Map")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to Self Organizing Map training engine")
        .subcommand(get_train_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("train", train_matches)) => run_train(train_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
