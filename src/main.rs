use std::{fs, path::PathBuf, process};

use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use shark::{Session, evaluate_source};

/// Shark is a small interpreted language for statistics, with vectorized
/// arithmetic and Greek-letter builtins.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a .shark script. Starts the interactive REPL when omitted.
    file: Option<PathBuf>,

    /// Evaluate an inline script instead of reading a file.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(script) = args.eval {
        run(&script);
    } else if let Some(path) = args.file {
        let script = fs::read_to_string(&path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            process::exit(1);
        });
        run(&script);
    } else {
        repl();
    }
}

fn run(script: &str) {
    if let Err(e) = evaluate_source(script) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn repl() {
    println!("Shark {} REPL", env!("CARGO_PKG_VERSION"));
    println!("Type statements ending in ';', or Ctrl+D to exit.");
    println!();

    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Could not initialize the line editor: {e}");
            process::exit(1);
        },
    };
    let mut session = Session::new();

    loop {
        match rl.readline("shark> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match session.evaluate_line(line) {
                    Ok(Some(value)) => println!("{value}"),
                    Ok(None) => {},
                    Err(e) => eprintln!("{e}"),
                }
            },
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C clears the current line but keeps the session.
            },
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Read error: {e}");
                break;
            },
        }
    }
}
