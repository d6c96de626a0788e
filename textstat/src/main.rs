// src/main.rs
use clap::Parser;
use std::process;

use textstat::{Args, run};

fn main() {
    let args = Args::parse();
    if let Err(error) = run(args) {
        // Failures are part of the report surface, so they go to stdout.
        println!("Error: {error:#}");
        process::exit(1);
    }
}
