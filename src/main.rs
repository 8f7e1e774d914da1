use std::{
    fs,
    io::{self, Write},
};

use atty::Stream;
use clap::Parser;
use linecalc::{error::Error, evaluate};

/// linecalc is an easy to use, interactive command-line calculator. Its one
/// quirk is deliberate: operators apply strictly left to right, with no
/// precedence and no parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells linecalc to read expressions from a file, one per line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Expression to evaluate. When omitted, linecalc starts an interactive
    /// prompt that reads one expression per line until end of input.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.contents {
        Some(contents) if args.file => run_file(&contents),
        Some(expression) => report(evaluate(&expression)),
        None => repl(),
    }
}

/// Evaluates every line of a file in order, reporting each outcome.
///
/// Failing lines are reported like any other outcome; they do not stop the
/// remaining lines from being evaluated.
fn run_file(path: &str) {
    let script = fs::read_to_string(path).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                     std::process::exit(1);
                 });

    for line in script.lines() {
        report(evaluate(line));
    }
}

/// Runs the interactive prompt loop.
///
/// One line is read per iteration until the input source signals end of
/// stream. Empty and whitespace-only lines are handed to the core unchanged;
/// the resulting parse error is reported like any other. The prompt is
/// suppressed when stdout is not a terminal so piped output stays clean.
fn repl() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut input = String::new();

    loop {
        if atty::is(Stream::Stdout) {
            print!("calc> ");
            stdout.flush().unwrap();
        }

        input.clear();
        match stdin.read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => report(evaluate(&input)),
        }
    }
}

/// Prints a result to stdout, or an error to stderr.
fn report(result: Result<i64, Error>) {
    match result {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}
