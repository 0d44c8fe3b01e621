use std::io::stdin;
use std::io::stdout;
use std::io::BufRead;
use std::io::Error as IoError;
use std::io::ErrorKind as IoErrorKind;
use std::io::Result as IoResult;
use std::io::Write;

use libc::isatty;
use libc::STDIN_FILENO;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing value for `{0}`")]
    MissingValue(String),

    #[error("unknown option `{0}`, use `bmpdraw --help` for more information")]
    UnknownOption(String),
}

enum Reading {
    Output,
    Input
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub input: Option<String>,
    pub output: Option<String>,
    pub quiet: bool,
    pub help: bool,
}

impl Args {
    /// Parse the command line, program name excluded
    pub fn from_env_args<I: IntoIterator<Item = String>>(env_args: I) -> Result<Args, ArgsError> {
        let mut args = Args::default();
        let mut reading: Option<(Reading, String)> = None;

        for arg in env_args {
            match reading.take() {
                Some((Reading::Input, _)) => args.input = Some(arg),
                Some((Reading::Output, _)) => args.output = Some(arg),
                None => {
                    match arg.as_str() {
                        "--input" | "-i" => reading = Some((Reading::Input, arg)),
                        "--output" | "-o" => reading = Some((Reading::Output, arg)),
                        "--quiet" | "-q" => args.quiet = true,
                        "--help" | "-h" => args.help = true,
                        _ => return Err(ArgsError::UnknownOption(arg)),
                    }
                }
            }
        }

        if let Some((_, flag)) = reading {
            return Err(ArgsError::MissingValue(flag))
        }

        Ok(args)
    }
}

/// Ask for a path on stdin.
///
/// The question is only printed when stdin is a terminal. The first
/// whitespace separated word of the answer is returned.
pub fn prompt(question: &str) -> IoResult<String> {
    if stdin_is_terminal() {
        let mut out = stdout();
        write!(out, "{}", question)?;
        out.flush()?;
    }

    let mut line = String::new();
    stdin().lock().read_line(&mut line)?;
    match line.split_whitespace().next() {
        Some(word) => Ok(String::from(word)),
        None => Err(IoError::new(IoErrorKind::UnexpectedEof, "no path given")),
    }
}

fn stdin_is_terminal() -> bool {
    unsafe {
        isatty(STDIN_FILENO) != 0
    }
}
