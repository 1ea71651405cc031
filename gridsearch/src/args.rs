//! Command-line parsing.
//!
//! Parsing takes any iterator of strings so it can be tested without
//! touching `std::env::args()`.

use std::path::PathBuf;

use gridsearch_paths::Algorithm;

use crate::error::AppError;

pub const USAGE: &str = "\
Usage: gridsearch [MODE] [OPTIONS]

Modes:
  bfs              run breadth-first search and print the path
  dfs              run depth-first search and print the path
  viz              step BFS and DFS side by side in the terminal
  (none)           choose a mode from a menu

Options:
  --config PATH    grid file (.json, or an ASCII map with S and G)
  --results DIR    results directory to create [default: results]
  -v, --verbose    more logging on stderr, batch modes only (repeat for more)
  -h, --help       print this help
  -V, --version    print the version";

/// What to do once the grid is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Batch(Algorithm),
    Viz,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a mode, asking on stdin when none was given.
    Run(Option<Mode>),
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
    pub config: Option<PathBuf>,
    pub results: PathBuf,
    pub verbosity: u8,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            command: Command::Run(None),
            config: None,
            results: PathBuf::from("results"),
            verbosity: 0,
        }
    }
}

impl Args {
    /// Parse from the process arguments.
    pub fn parse() -> Result<Self, AppError> {
        Self::parse_from(std::env::args())
    }

    /// Parse `args`, whose first item is the program name.
    pub fn parse_from<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();
        let mut parsed = Self::default();
        let mut mode = None;
        let mut it = args.iter();
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.command = Command::Help,
                "-V" | "--version" => parsed.command = Command::Version,
                "-v" | "--verbose" => parsed.verbosity = parsed.verbosity.saturating_add(1),
                "-vv" => parsed.verbosity = parsed.verbosity.saturating_add(2),
                "--config" => parsed.config = Some(PathBuf::from(value(&mut it, arg)?)),
                "--results" => parsed.results = PathBuf::from(value(&mut it, arg)?),
                m if !m.starts_with('-') => {
                    let new = parse_mode(m)
                        .ok_or_else(|| AppError::Usage(format!("unknown mode '{m}'")))?;
                    if mode.replace(new).is_some() {
                        return Err(AppError::Usage("more than one mode given".into()));
                    }
                }
                other => return Err(AppError::Usage(format!("unknown option '{other}'"))),
            }
        }
        if parsed.command == Command::Run(None) {
            parsed.command = Command::Run(mode);
        }
        Ok(parsed)
    }
}

fn value<'a>(it: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<&'a str, AppError> {
    it.next()
        .map(String::as_str)
        .ok_or_else(|| AppError::Usage(format!("{flag} needs a value")))
}

fn parse_mode(s: &str) -> Option<Mode> {
    match s {
        "viz" | "gui" => Some(Mode::Viz),
        _ => s.parse().ok().map(Mode::Batch),
    }
}

/// Menu shown when no mode is given on the command line.
pub const MENU: &str = "Select Mode: \n1. BFS\n2. DFS\n3. GUI Visualization";

/// Interpret a menu answer.
pub fn menu_choice(answer: &str) -> Option<Mode> {
    match answer.trim() {
        "1" => Some(Mode::Batch(Algorithm::Bfs)),
        "2" => Some(Mode::Batch(Algorithm::Dfs)),
        "3" => Some(Mode::Viz),
        _ => None,
    }
}
