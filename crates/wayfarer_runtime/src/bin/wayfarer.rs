//! Wayfarer CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use log::LevelFilter;
use wayfarer_parser::{InputInterpreter, Phrasebook};
use wayfarer_runtime::repl::print_error;
use wayfarer_runtime::{ConsoleView, Repl, Session};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    phrases: Option<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    encounter: bool,
    confused: bool,
    trace: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("\x1b[31mError: {message}\x1b[0m");
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.trace);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliConfig, String> {
    let mut config = CliConfig::default();

    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--encounter" => config.encounter = true,
            "--confused" => config.confused = true,
            "--trace" => config.trace = true,
            "--phrases" => {
                let path = rest.next().ok_or("--phrases requires a file")?;
                config.phrases = Some(PathBuf::from(path));
            }
            arg if arg.starts_with('-') => return Err(format!("unknown option: {arg}")),
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn init_logging(trace: bool) {
    let level = if trace {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(config: &CliConfig) -> wayfarer_foundation::Result<()> {
    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("wayfarer {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let phrasebook = match &config.phrases {
        Some(path) => Phrasebook::load(path)?,
        None => Phrasebook::standard(),
    };
    let interpreter = InputInterpreter::new(phrasebook).with_no_match_feedback(config.confused);

    let view = ConsoleView::new().with_color(!config.batch_mode);
    let mut session = Session::with_view(interpreter, view);
    if config.encounter {
        session.enter_encounter();
    }

    for file in &config.files {
        session.run_script(file)?;
    }

    if config.batch_mode {
        return Ok(());
    }

    let mut repl = Repl::new(session)?;
    if !config.files.is_empty() {
        repl = repl.without_banner();
    }
    repl.run()
}

fn print_help() {
    println!(
        "\x1b[1mWayfarer\x1b[0m - Text adventure input interpreter

\x1b[1mUSAGE:\x1b[0m
    wayfarer [OPTIONS] [SCRIPTS...]

\x1b[1mARGUMENTS:\x1b[0m
    [SCRIPTS...]    Files of player input, one command per line

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -b, --batch         Run scripts and exit (no REPL)
    --phrases FILE      Load the phrase table from FILE
    --encounter         Start inside an encounter
    --confused          Reply to input that is not understood
    --trace             Log tokens and matches (RUST_LOG also works)

\x1b[1mEXAMPLES:\x1b[0m
    wayfarer                          Start interactive REPL
    wayfarer -b walkthrough.txt       Run a script and exit
    wayfarer --phrases my.phrases     Use a custom vocabulary

\x1b[1mREPL COMMANDS:\x1b[0m
    :help                Show commands
    :encounter on|off    Start or end an encounter
    :tokens <text>       Show how input is understood
    :phrases             List the phrase table
    :quit, Ctrl+D        Exit"
    );
}
