#[macro_use]
extern crate lazy_static;
extern crate unicode_segmentation;

mod error;
mod scanner;
mod token;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::process;
use std::rc::Rc;

use argparse::{ArgumentParser, Print, Store};

use crate::error::*;
use crate::scanner::*;

fn main() {
    env_logger::init();

    let mut script_filename = "".to_string();
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Lox language scanner");
        ap.add_option(
            &["--version"],
            Print(env!("CARGO_PKG_VERSION").to_string()),
            "Show version",
        );
        ap.refer(&mut script_filename)
            .add_argument("script_filename", Store,
                          "Lox file to scan.  Omit to run an interactive prompt.");
        ap.parse_args_or_exit();
    }
    if ! script_filename.is_empty() {
        let had_error = run_file(&script_filename);

        if had_error {
            process::exit(65);
        }
    }
    else {
        run_repl();
    }
}

fn run_repl() {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().expect("run_repl: unable to flush stdout");

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {
                // A fresh reporter per line; errors never end the session.
                let reporter = DefaultReporter::new();
                run(&input, reporter);
            }
            Err(error) => {
                println!("Error reading stdin: {:?}", error);
                break;
            }
        }
    }
}

// Returns true if the source had a lexical error.
fn run_file(file_path: &str) -> bool {
    let mut file = File::open(file_path).unwrap_or_else(|_| panic!("source file not found: {}", file_path));
    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap_or_else(|_| panic!("unable to read file: {}", file_path));

    let reporter = DefaultReporter::new();
    run(&contents, Rc::clone(&reporter) as Rc<dyn Reporter>);

    reporter.had_error()
}

fn run(source: &str, reporter: Rc<dyn Reporter>) {
    let mut scanner = Scanner::new(source, reporter);
    let tokens = scanner.scan_tokens();

    // For now, just print the tokens.
    for token in &tokens {
        println!("{}", token);
    }
}
