//! Line-mode and file-mode runners
//!
//! Both modes go through [`run`]: scan, parse every `;`-separated expression,
//! and write one prefix-form tree per expression. Nothing is written when any
//! error was reported during the run; the diagnostics are the only output then.
//!
//! Error counts are kept per run by wrapping the caller's reporter in a
//! [`Tally`], so the prompt needs no reset between lines.

use crate::diagnostics::{Reporter, Tally};
use crate::parser::lexer::scan;
use crate::parser::parse::Parser;
use crate::parser::printer::print;
use log::debug;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// What a run writes to its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One prefix-form tree per expression
    #[default]
    Tree,
    /// The token stream, one token per line
    Tokens,
}

/// Run `source` and return the number of errors reported.
pub fn run(
    source: &str,
    mode: OutputMode,
    reporter: &mut dyn Reporter,
    out: &mut dyn Write,
) -> io::Result<usize> {
    debug!("running {} bytes in {:?} mode", source.len(), mode);

    let mut tally = Tally::new(reporter);
    let tokens = scan(source, &mut tally);

    match mode {
        OutputMode::Tokens => {
            for token in &tokens {
                writeln!(out, "{}", token)?;
            }
        }
        OutputMode::Tree => {
            let exprs = Parser::new(tokens, &mut tally).parse_script();
            if tally.count() == 0 {
                for expr in &exprs {
                    writeln!(out, "{}", print(expr))?;
                }
            }
        }
    }

    Ok(tally.count())
}

/// Read and run a script file. Returns the number of errors reported.
pub fn run_file(
    path: &Path,
    mode: OutputMode,
    reporter: &mut dyn Reporter,
    out: &mut dyn Write,
) -> io::Result<usize> {
    let source = fs::read_to_string(path)?;
    run(&source, mode, reporter, out)
}

/// Interactive prompt: one line per run, until end of input or `quit`.
pub fn run_prompt<R: BufRead>(
    mut input: R,
    out: &mut dyn Write,
    mode: OutputMode,
    reporter: &mut dyn Reporter,
) -> io::Result<()> {
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim_end_matches(['\n', '\r']);
        if line == "quit" {
            break;
        }

        run(line, mode, reporter, out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingReporter;

    fn run_to_string(source: &str, mode: OutputMode) -> (String, CollectingReporter) {
        let mut reporter = CollectingReporter::new();
        let mut out = Vec::new();
        run(source, mode, &mut reporter, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), reporter)
    }

    #[test]
    fn test_run_prints_each_tree() {
        let (out, reporter) = run_to_string("1 + 2; -3;\n(4)", OutputMode::Tree);
        assert_eq!(out, "(+ 1 2)\n(- 3)\n(group 4)\n");
        assert!(!reporter.had_error());
    }

    #[test]
    fn test_run_suppresses_output_on_error() {
        let (out, reporter) = run_to_string("1 + 2; (3", OutputMode::Tree);
        assert_eq!(out, "");
        assert_eq!(reporter.messages(), vec!["Expect ')' after expression."]);
    }

    #[test]
    fn test_lexical_error_suppresses_output() {
        let (out, reporter) = run_to_string("1 + 2 @", OutputMode::Tree);
        assert_eq!(out, "");
        assert_eq!(reporter.diagnostics.len(), 1);
    }

    #[test]
    fn test_token_mode() {
        let (out, _) = run_to_string("(\"a\" 1)", OutputMode::Tokens);
        assert_eq!(
            out,
            "LeftParen ( \nString \"a\" a\nNumber 1 1\nRightParen ) \nEof  \n"
        );
    }

    #[test]
    fn test_run_counts_errors() {
        let mut reporter = CollectingReporter::new();
        let mut out = Vec::new();
        let errors = run(") ; ( ; 1 2", OutputMode::Tree, &mut reporter, &mut out).unwrap();
        assert_eq!(errors, 3);
        assert_eq!(reporter.diagnostics.len(), 3);
    }

    #[test]
    fn test_prompt_lines_are_independent() {
        let input = "1 * 2\n)\n\"ok\"\nquit\n3\n";
        let mut reporter = CollectingReporter::new();
        let mut out = Vec::new();
        run_prompt(input.as_bytes(), &mut out, OutputMode::Tree, &mut reporter)
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, "> (* 1 2)\n> > ok\n> ");
        assert_eq!(reporter.messages(), vec!["Expect expression."]);
    }

    #[test]
    fn test_prompt_ends_at_eof() {
        let mut reporter = CollectingReporter::new();
        let mut out = Vec::new();
        run_prompt("nil".as_bytes(), &mut out, OutputMode::Tree, &mut reporter)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "> nil\n> ");
    }

    #[test]
    fn test_run_file_missing() {
        let mut reporter = CollectingReporter::new();
        let mut out = Vec::new();
        let result = run_file(
            Path::new("definitely/not/here.lox"),
            OutputMode::Tree,
            &mut reporter,
            &mut out,
        );
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
