use ariadne::Source;
use rustyline::error::ReadlineError;
use std::io;

/// Utility enum to package errors that can occur while reading / processing input.
pub enum Error {
    /// An error that occurred while parsing, simplifying, evaluating, or solving an expression.
    ///
    /// The spans of parse errors refer to the normalized input.
    Expr(exact_error::Error),

    /// The input file or stdin could not be read.
    Io(io::Error),

    /// The line editor failed.
    Readline(ReadlineError),
}

impl Error {
    /// Report the error to stderr. `source` is the normalized input that the expression was
    /// parsed from.
    ///
    /// The `ariadne` crate's [`Report`](ariadne::Report) type actually does not have a `Display`
    /// implementation, so we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, source: &str) {
        match self {
            Self::Expr(err) => {
                let report = err.build_report("input");
                if let Err(io_err) = report.eprint(("input", Source::from(source))) {
                    eprintln!("could not print error report: {}", io_err);
                }
            },
            Self::Io(err) => eprintln!("could not read input: {}", err),
            Self::Readline(err) => eprintln!("{}", err),
        }
    }
}

impl From<exact_error::Error> for Error {
    fn from(err: exact_error::Error) -> Self {
        Self::Expr(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ReadlineError> for Error {
    fn from(err: ReadlineError) -> Self {
        Self::Readline(err)
    }
}
