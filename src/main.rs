mod app;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::{CollisionPolicy, Game};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: gridsnake [<options>]

Play snake on a wraparound grid in the terminal.

Options:
  -c, --config <PATH>            Read configuration from the given file
      --log-file <PATH>          Append log messages to the given file
      --on-collision <end|reset> What to do when the snake runs into itself
  -h, --help                     Show this message and exit
  -V, --version                  Show the program version and exit

Controls: arrow keys, WASD, or HJKL to steer; Esc to quit.
";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    match CliCommand::from_parser(Parser::from_env())? {
        CliCommand::Help => print!("{USAGE}"),
        CliCommand::Version => println!("gridsnake {}", env!("CARGO_PKG_VERSION")),
        CliCommand::Run(args) => {
            let config = args.config()?;
            logging::init(config.log_file.as_deref())?;
            let terminal = ratatui::init();
            let r = App::new(Game::new(&config)).run(terminal);
            ratatui::restore();
            match r {
                Err(e) if e.kind() == ErrorKind::BrokenPipe => (),
                r => r.context("terminal I/O failed")?,
            }
        }
    }
    Ok(())
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum CliCommand {
    Run(RunArgs),
    Help,
    Version,
}

impl CliCommand {
    fn from_parser(mut parser: Parser) -> Result<CliCommand, lexopt::Error> {
        let mut args = RunArgs::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Long("on-collision") => {
                    let value = parser.value()?;
                    args.on_collision = Some(match value.string()?.as_str() {
                        "end" => CollisionPolicy::End,
                        "reset" => CollisionPolicy::Reset,
                        other => {
                            return Err(lexopt::Error::UnexpectedValue {
                                option: String::from("--on-collision"),
                                value: other.into(),
                            })
                        }
                    });
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(CliCommand::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(CliCommand::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(CliCommand::Run(args))
    }
}

/// Settings given on the command line, overriding those in the configuration
/// file
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct RunArgs {
    config_file: Option<PathBuf>,
    log_file: Option<PathBuf>,
    on_collision: Option<CollisionPolicy>,
}

impl RunArgs {
    /// Load the configuration file and apply any overrides.  An explicitly
    /// given configuration file must exist; the default one need not.
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match self.config_file {
            Some(ref path) => Config::load(path, false),
            None => Config::default_path().and_then(|path| Config::load(&path, true)),
        }
        .context("failed to load configuration")?;
        if let Some(ref path) = self.log_file {
            config.log_file = Some(path.clone());
        }
        if let Some(policy) = self.on_collision {
            config.on_collision = policy;
        }
        Ok(config)
    }
}
