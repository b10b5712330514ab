// rlox: Lox expression scanner, parser and tree printer

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser as ClapParser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use rlox::diagnostics::ConsoleReporter;
use rlox::runner::{self, OutputMode};
use rlox::ui::App;

/// Exit status for bad command-line usage.
const EX_USAGE: u8 = 64;
/// Exit status when a script reported lexical or syntax errors.
const EX_DATAERR: u8 = 65;
/// Exit status when the script could not be read.
const EX_IOERR: u8 = 74;

#[derive(ClapParser, Debug)]
#[command(
    name = "rlox",
    version,
    about = "Scan and parse Lox expressions, printing their syntax trees"
)]
struct Cli {
    /// Script to run. Starts an interactive prompt when omitted.
    script: Option<PathBuf>,

    /// Print the token stream instead of syntax trees
    #[arg(long, conflicts_with = "inspect")]
    tokens: bool,

    /// Browse the script's tokens, trees and diagnostics in a terminal UI
    #[arg(long, requires = "script")]
    inspect: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            return ExitCode::from(EX_USAGE);
        }
        // --help and --version
        Err(err) => err.exit(),
    };

    env_logger::init();

    let mode = if cli.tokens {
        OutputMode::Tokens
    } else {
        OutputMode::Tree
    };

    match cli.script {
        Some(path) if cli.inspect => inspect(&path),
        Some(path) => run_file(&path, mode),
        None => run_prompt(mode),
    }
}

fn run_file(path: &Path, mode: OutputMode) -> ExitCode {
    info!("running {}", path.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match runner::run_file(path, mode, &mut ConsoleReporter, &mut out) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(errors) => {
            info!("{} error(s) reported", errors);
            ExitCode::from(EX_DATAERR)
        }
        Err(e) => {
            eprintln!("Error: could not read '{}': {}", path.display(), e);
            ExitCode::from(EX_IOERR)
        }
    }
}

fn run_prompt(mode: OutputMode) -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = runner::run_prompt(stdin.lock(), &mut out, mode, &mut ConsoleReporter);
    let _ = writeln!(out);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EX_IOERR)
        }
    }
}

fn inspect(path: &Path) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: could not read '{}': {}", path.display(), e);
            return ExitCode::from(EX_IOERR);
        }
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mut app = App::new(source, file_name);

    match run_tui(&mut app) {
        Ok(()) if app.diagnostics.is_empty() => ExitCode::SUCCESS,
        Ok(()) => ExitCode::from(EX_DATAERR),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_tui(app: &mut App) -> io::Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
