mod error;

use error::Error;
use exact_compute::{numerical::eval, symbolic::{simplify, solve}};
use exact_parser::parser::{ast::FormatOptionsBuilder, Parser};
use log::debug;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}, process::ExitCode};

/// Parses and simplifies the given input, then prints the simplified expression, followed by its
/// value if it has no variable, or its solutions for `x` if it does.
fn parse_eval(parser: &Parser) -> Result<(), Error> {
    let expr = parser.try_parse_full()?;
    debug!("parsed: {:?}", expr);

    let simplified = simplify(&expr)?;
    println!("= {}", simplified);

    if !simplified.contains_var() {
        println!("≈ {}", eval(&simplified, None)?);
        return Ok(());
    }

    // solutions are in terms of the value of the expression
    let placeholder = FormatOptionsBuilder::new().variable('y').build();
    for solution in solve(&simplified)?.unwrap_or_default() {
        println!("x = {}", solution.display(placeholder));
    }
    Ok(())
}

/// Processes a single line of input, printing the results or the error.
fn read_eval(input: &str) {
    let parser = Parser::new(input);
    if let Err(err) = parse_eval(&parser) {
        err.report_to_stderr(parser.source());
    }
}

/// Processes every non-empty line of the given input.
fn execute(input: &str) {
    for line in input.lines().filter(|line| !line.trim().is_empty()) {
        println!("> {}", line.trim());
        read_eval(line);
    }
}

/// Reads the whole input from the given file, or from stdin if there is none.
fn read_input(filename: Option<String>) -> Result<String, Error> {
    let mut input = String::new();
    match filename {
        Some(filename) => input = fs::read_to_string(filename)?,
        None => {
            io::stdin().read_to_string(&mut input)?;
        },
    }
    Ok(input)
}

/// Runs the interactive mode until the user exits.
fn repl() -> Result<(), Error> {
    let mut rl = DefaultEditor::new()?;

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err.into()),
        };
        if input.trim().is_empty() {
            continue;
        }

        rl.add_history_entry(&input)?;
        read_eval(&input);
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env().init();

    let mut args = std::env::args();
    args.next();
    let filename = args.next();

    let result = if filename.is_some() || !io::stdin().is_terminal() {
        // run source file, or read source from stdin
        read_input(filename).map(|input| execute(&input))
    } else {
        repl()
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report_to_stderr("");
            ExitCode::FAILURE
        },
    }
}
