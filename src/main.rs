mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("tapsnake: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn try_main() -> anyhow::Result<ExitCode> {
    let Some(args) = Args::parse()? else {
        return Ok(ExitCode::SUCCESS);
    };
    let (path, allow_missing) = match args.config {
        Some(p) => (p, false),
        None => (Config::default_path()?, true),
    };
    let config = Config::load(&path, allow_missing)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    let terminal = ratatui::init();
    let mouse = execute!(io::stdout(), EnableMouseCapture).is_ok();
    let r = App::new(config).run(terminal);
    if mouse {
        let _ = execute!(io::stdout(), DisableMouseCapture);
    }
    ratatui::restore();
    Ok(io_exit(r))
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Args {
    config: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments.  Returns `None` if `--help` or
    /// `--version` was given and the program should just exit.
    fn parse() -> Result<Option<Args>, lexopt::Error> {
        use lexopt::prelude::*;
        let mut args = Args::default();
        let mut parser = lexopt::Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Short('h') | Long("help") => {
                    println!("Usage: tapsnake [-c|--config <file>]");
                    println!();
                    println!("Click-to-steer snake game in the terminal");
                    println!();
                    println!("Options:");
                    println!("  -c, --config <file>  Read configuration from <file>");
                    println!("  -h, --help           Show this help text and exit");
                    println!("  -V, --version        Show the program version and exit");
                    return Ok(None);
                }
                Short('V') | Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(args))
    }
}
