use std::fs;

use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use simia::{
    interpreter::{environment::Environment, value::core::Value},
    run,
};

const HISTORY_FILE: &str = "simia_history.txt";

/// simia is a small, dynamically-typed scripting language with first-class
/// functions, closures, arrays and hash maps.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as a path to a script file instead of inline source.
    #[arg(short, long)]
    file: bool,

    /// Source to run (or a file path with --file); omit to open the REPL.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.contents {
        Some(contents) => {
            let source = if args.file {
                fs::read_to_string(&contents).unwrap_or_else(|_| {
                    eprintln!(
                        "Failed to read the input file '{contents}'. Perhaps this file does not exist?"
                    );
                    std::process::exit(1);
                })
            } else {
                contents
            };
            run_source(&source);
        }
        None => {
            if let Err(e) = repl() {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

/// Runs a script once and prints its final value, if any.
fn run_source(source: &str) {
    let env = Environment::new();

    match run(source, &env) {
        Ok(Value::Null) => {}
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// The interactive read-eval-print loop. One environment is created at
/// startup and reused for every line, so bindings persist for the whole
/// session.
fn repl() -> rustyline::Result<()> {
    println!("simia {}", env!("CARGO_PKG_VERSION"));
    println!("Type 'exit' or press Ctrl-D to quit.");

    let env = Environment::new();
    let mut rl = DefaultEditor::new()?;
    if rl.load_history(HISTORY_FILE).is_err() {
        println!("No previous history.");
    }

    loop {
        match rl.readline("simia> ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                if input.eq_ignore_ascii_case("exit") {
                    break;
                }
                rl.add_history_entry(input)?;

                match run(input, &env) {
                    Ok(Value::Null) => {}
                    Ok(value) => println!("{value}"),
                    Err(e) => eprintln!("{e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted. Type 'exit' or Ctrl-D to quit.");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Readline error: {err:?}");
                break;
            }
        }
    }

    rl.save_history(HISTORY_FILE)
}
