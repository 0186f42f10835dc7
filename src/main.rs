use std::io::{self, Write};

use clap::Parser;
use exprcalc::evaluate;

/// exprcalc evaluates a single line of integer arithmetic with `+ - * /`,
/// parentheses, and standard precedence.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate. When omitted, one line is read from
    /// standard input.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let line = args.expression.unwrap_or_else(read_expression);

    match evaluate(&line) {
        Ok(value) => println!("Result: {value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Prompts for and reads one expression from standard input.
///
/// Exits with a failure status when no line can be read, for example on a
/// closed or unreadable stdin.
fn read_expression() -> String {
    print!("Enter a mathematical expression: ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => {
            eprintln!("Failed to read an expression from standard input.");
            std::process::exit(1);
        },
        Ok(_) => line.trim_end_matches(['\r', '\n']).to_string(),
    }
}
